//! JSON permission policy files.
//!
//! ```json
//! {
//!   "roles": {
//!     "admin": [{ "resource": "students", "operations": ["create", "read"] }],
//!     "parent": [{ "resource": "progress", "operations": ["read"] }]
//!   },
//!   "routes": [{ "path": "/academics/students", "resource": "students" }]
//! }
//! ```
//!
//! Names are validated against the closed role, resource and operation sets.
//! A role key or a resource repeated within a role is rejected. Roles missing from the
//! file get no permissions. `routes` is optional and replaces the built-in
//! route map when present.

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use tracing::{info, warn};

use crate::error::AccessError;
use crate::operation::{CrudOperation, OperationSet};
use crate::resource::ResourceType;
use crate::role::Role;
use crate::routes::RouteMap;
use crate::table::PermissionTable;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PolicyDocument {
    #[serde(deserialize_with = "role_entries")]
    roles: Vec<(String, Vec<PolicyEntry>)>,
    #[serde(default)]
    routes: Option<Vec<RouteEntry>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PolicyEntry {
    resource: String,
    operations: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RouteEntry {
    path: String,
    resource: String,
}

/// Keeps the `roles` object in document order with repeated keys intact,
/// so they can be reported instead of silently overwritten.
fn role_entries<'de, D>(deserializer: D) -> Result<Vec<(String, Vec<PolicyEntry>)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct RoleEntriesVisitor;

    impl<'de> Visitor<'de> for RoleEntriesVisitor {
        type Value = Vec<(String, Vec<PolicyEntry>)>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an object mapping role names to permission lists")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry::<String, Vec<PolicyEntry>>()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(RoleEntriesVisitor)
}

/// Result of loading a policy file.
#[derive(Debug)]
pub struct LoadedPolicy {
    pub table: PermissionTable,
    pub routes: Option<RouteMap>,
}

pub fn load_policy_file(path: &Path) -> Result<LoadedPolicy, AccessError> {
    let raw = std::fs::read_to_string(path).map_err(|source| AccessError::PolicyFileIo {
        path: path.to_path_buf(),
        source,
    })?;
    let policy = parse_policy(&raw)?;
    info!(path = %path.display(), "Loaded permission policy file");
    Ok(policy)
}

pub fn parse_policy(raw: &str) -> Result<LoadedPolicy, AccessError> {
    let document: PolicyDocument = serde_json::from_str(raw)?;

    let mut builder = PermissionTable::builder();
    let mut seen = Vec::new();
    for (role_name, entries) in document.roles {
        let role: Role = role_name.parse()?;
        if seen.contains(&role) {
            return Err(AccessError::DuplicateRole(role_name));
        }
        seen.push(role);
        for entry in entries {
            let resource: ResourceType = entry.resource.parse()?;
            let operations = entry
                .operations
                .iter()
                .map(|op| op.parse::<CrudOperation>())
                .collect::<Result<OperationSet, _>>()?;
            builder = builder.grant(role, resource, operations);
        }
    }

    for role in Role::ALL.into_iter().filter(|r| !seen.contains(r)) {
        warn!(role = %role, "Role missing from policy file; it will have no permissions");
    }

    let routes = document
        .routes
        .map(|entries| {
            let entries = entries
                .into_iter()
                .map(|entry| Ok((entry.path, entry.resource.parse::<ResourceType>()?)))
                .collect::<Result<Vec<_>, AccessError>>()?;
            RouteMap::from_entries(entries)
        })
        .transpose()?;

    Ok(LoadedPolicy {
        table: builder.build()?,
        routes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_policy() {
        let policy = parse_policy(
            r#"{
                "roles": {
                    "parent": [{ "resource": "progress", "operations": ["read"] }],
                    "faculty": [
                        { "resource": "lesson_plans", "operations": ["update", "create", "read", "delete"] }
                    ]
                }
            }"#,
        )
        .unwrap();

        assert!(policy.routes.is_none());
        assert!(policy.table.can_read(Role::Parent, ResourceType::Progress));
        assert!(!policy.table.can_update(Role::Parent, ResourceType::Progress));
        assert_eq!(
            policy
                .table
                .resource_permissions(Role::Faculty, ResourceType::LessonPlans),
            OperationSet::CRUD
        );
        assert!(policy.table.permissions_for(Role::Admin).is_empty());
    }

    #[test]
    fn test_parse_routes() {
        let policy = parse_policy(
            r#"{
                "roles": {},
                "routes": [{ "path": "/people/learners", "resource": "students" }]
            }"#,
        )
        .unwrap();

        let routes = policy.routes.unwrap();
        assert_eq!(
            routes.resource_for_route("/people/learners"),
            Some(ResourceType::Students)
        );
        assert_eq!(routes.len(), 1);
    }

    #[test]
    fn test_rejects_unknown_names() {
        let err = parse_policy(r#"{"roles": {"janitor": []}}"#).unwrap_err();
        assert!(matches!(err, AccessError::UnknownRole(_)));

        let err = parse_policy(
            r#"{"roles": {"admin": [{"resource": "library", "operations": ["read"]}]}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, AccessError::UnknownResource(_)));

        let err = parse_policy(
            r#"{"roles": {"admin": [{"resource": "students", "operations": ["approve"]}]}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, AccessError::UnknownOperation(_)));
    }

    #[test]
    fn test_rejects_duplicate_resource() {
        let err = parse_policy(
            r#"{"roles": {"admin": [
                {"resource": "students", "operations": ["read"]},
                {"resource": "students", "operations": ["delete"]}
            ]}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, AccessError::DuplicateGrant { .. }));
    }

    #[test]
    fn test_rejects_duplicate_role() {
        let err = parse_policy(
            r#"{"roles": {
                "admin": [{"resource": "students", "operations": ["read"]}],
                "admin": [{"resource": "fees", "operations": ["delete"]}]
            }}"#,
        )
        .unwrap_err();
        match err {
            AccessError::DuplicateRole(role) => assert_eq!(role, "admin"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_roles_keep_every_grant() {
        let policy = parse_policy(
            r#"{"roles": {
                "admin": [{"resource": "students", "operations": ["read"]}],
                "staff": [{"resource": "fees", "operations": ["delete"]}]
            }}"#,
        )
        .unwrap();
        assert!(policy.table.can_read(Role::Admin, ResourceType::Students));
        assert!(policy.table.can_delete(Role::Staff, ResourceType::Fees));
        assert!(!policy.table.can_delete(Role::Admin, ResourceType::Fees));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = parse_policy(r#"{"roles": "#).unwrap_err();
        assert!(matches!(err, AccessError::PolicyFileFormat(_)));

        let err = parse_policy(r#"{"roles": {}, "extra": true}"#).unwrap_err();
        assert!(matches!(err, AccessError::PolicyFileFormat(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = load_policy_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, AccessError::PolicyFileIo { .. }));
    }
}
