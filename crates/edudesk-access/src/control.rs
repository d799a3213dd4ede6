//! The access-control context handed to consumers.

use std::sync::Arc;

use edudesk_config::{AccessConfig, UnmappedRoutePolicy};
use tracing::{debug, info, instrument, warn};

use crate::error::AccessError;
use crate::operation::{CrudOperation, OperationSet};
use crate::policy_file::load_policy_file;
use crate::resource::ResourceType;
use crate::role::Role;
use crate::routes::RouteMap;
use crate::table::{Permission, PermissionTable};

/// Permission table, route map and unmapped-route policy, built once at
/// startup and shared read-only. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct AccessControl {
    table: Arc<PermissionTable>,
    routes: Arc<RouteMap>,
    unmapped_route_policy: UnmappedRoutePolicy,
}

impl AccessControl {
    pub fn new(
        table: PermissionTable,
        routes: RouteMap,
        unmapped_route_policy: UnmappedRoutePolicy,
    ) -> Self {
        Self {
            table: Arc::new(table),
            routes: Arc::new(routes),
            unmapped_route_policy,
        }
    }

    /// Built-in matrix and routes with the default (`deny`) policy.
    pub fn builtin() -> Result<Self, AccessError> {
        Ok(Self::new(
            PermissionTable::builtin()?,
            RouteMap::builtin()?,
            UnmappedRoutePolicy::default(),
        ))
    }

    /// Loads the policy file named by the config, falling back to the
    /// built-in matrix and routes for whatever the file leaves out.
    #[instrument(skip_all)]
    pub fn from_config(config: &AccessConfig) -> Result<Self, AccessError> {
        let (table, routes) = match &config.policy_file {
            Some(path) => {
                let loaded = load_policy_file(path)?;
                let routes = match loaded.routes {
                    Some(routes) => routes,
                    None => RouteMap::builtin()?,
                };
                (loaded.table, routes)
            }
            None => (PermissionTable::builtin()?, RouteMap::builtin()?),
        };

        info!(
            routes = routes.len(),
            unmapped_route_policy = %config.unmapped_route_policy,
            "Access control initialized"
        );

        Ok(Self::new(table, routes, config.unmapped_route_policy))
    }

    pub fn table(&self) -> &PermissionTable {
        &self.table
    }

    pub fn routes(&self) -> &RouteMap {
        &self.routes
    }

    pub fn unmapped_route_policy(&self) -> UnmappedRoutePolicy {
        self.unmapped_route_policy
    }

    pub fn permissions_for(&self, role: Role) -> Vec<Permission> {
        self.table.permissions_for(role)
    }

    pub fn has_permission(
        &self,
        role: Role,
        resource: ResourceType,
        operation: CrudOperation,
    ) -> bool {
        self.table.has_permission(role, resource, operation)
    }

    pub fn resource_permissions(&self, role: Role, resource: ResourceType) -> OperationSet {
        self.table.resource_permissions(role, resource)
    }

    pub fn resource_for_route(&self, path: &str) -> Option<ResourceType> {
        self.routes.resource_for_route(path)
    }

    /// Read access on the resource governing `path`. Unmapped paths are denied.
    pub fn can_access_route(&self, role: Role, path: &str) -> bool {
        match self.routes.resource_for_route(path) {
            Some(resource) => self.table.can_read(role, resource),
            None => {
                debug!(path = %path, role = %role, "Denying unmapped route");
                false
            }
        }
    }

    /// Startup check that every navigable path resolves to a resource.
    ///
    /// Under [`UnmappedRoutePolicy::Deny`] offenders are logged and the check
    /// passes; under [`UnmappedRoutePolicy::Strict`] they are returned as an error.
    pub fn validate_routes<'a, I>(&self, paths: I) -> Result<(), AccessError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let unmapped: Vec<String> = paths
            .into_iter()
            .filter(|path| !self.routes.is_mapped(path))
            .map(str::to_string)
            .collect();

        if unmapped.is_empty() {
            return Ok(());
        }

        match self.unmapped_route_policy {
            UnmappedRoutePolicy::Deny => {
                for path in &unmapped {
                    warn!(path = %path, "Navigable route has no resource mapping; it will be denied");
                }
                Ok(())
            }
            UnmappedRoutePolicy::Strict => Err(AccessError::UnmappedRoutes(unmapped)),
        }
    }
}
