//! Route-to-resource resolution.
//!
//! Paths are normalized before lookup: the query string and fragment are
//! dropped and trailing slashes removed (the root `/` is kept). An exact
//! entry wins; otherwise the longest mapped prefix ending on a segment
//! boundary governs the path, so detail pages inherit their list page's
//! resource.

use std::collections::BTreeMap;

use crate::defaults::BUILTIN_ROUTES;
use crate::error::AccessError;
use crate::resource::ResourceType;

#[derive(Debug, Clone)]
pub struct RouteMap {
    routes: BTreeMap<String, ResourceType>,
}

impl RouteMap {
    pub fn builtin() -> Result<Self, AccessError> {
        Self::from_entries(
            BUILTIN_ROUTES
                .iter()
                .map(|(path, resource)| (path.to_string(), *resource)),
        )
    }

    pub fn from_entries<I>(entries: I) -> Result<Self, AccessError>
    where
        I: IntoIterator<Item = (String, ResourceType)>,
    {
        let mut routes = BTreeMap::new();
        for (path, resource) in entries {
            if !path.starts_with('/') {
                return Err(AccessError::InvalidRoute(path));
            }
            let key = normalize_path(&path).to_string();
            if routes.insert(key, resource).is_some() {
                return Err(AccessError::DuplicateRoute(path));
            }
        }
        Ok(Self { routes })
    }

    /// Resource governing `path`, or `None` when the path is unmapped.
    pub fn resource_for_route(&self, path: &str) -> Option<ResourceType> {
        let mut candidate = normalize_path(path);
        loop {
            if let Some(resource) = self.routes.get(candidate) {
                return Some(*resource);
            }
            match candidate.rfind('/') {
                Some(idx) if idx > 0 => candidate = &candidate[..idx],
                _ => return None,
            }
        }
    }

    pub fn is_mapped(&self, path: &str) -> bool {
        self.resource_for_route(path).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ResourceType)> {
        self.routes.iter().map(|(path, resource)| (path.as_str(), *resource))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Strips query string, fragment and trailing slashes.
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() && path.starts_with('/') {
        "/"
    } else {
        trimmed
    }
}
