//! Role → resource → operations permission table and its queries.
//!
//! Every role always has an entry (possibly empty) and every role maps each
//! resource at most once; both are guaranteed when the table is built.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::warn;
use utoipa::ToSchema;

use crate::error::AccessError;
use crate::operation::{CrudOperation, OperationSet};
use crate::resource::ResourceType;
use crate::role::Role;

/// A resource together with the operations a role may perform on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Permission {
    pub resource: ResourceType,
    #[schema(value_type = Vec<CrudOperation>)]
    pub operations: OperationSet,
}

/// Immutable permission table.
#[derive(Debug, Clone)]
pub struct PermissionTable {
    grants: HashMap<Role, BTreeMap<ResourceType, OperationSet>>,
}

impl PermissionTable {
    pub fn builder() -> PermissionTableBuilder {
        PermissionTableBuilder::default()
    }

    /// The table shipped with the dashboard.
    pub fn builtin() -> Result<Self, AccessError> {
        let mut builder = Self::builder();
        for role in Role::ALL {
            builder = builder.grant_all(role, crate::defaults::builtin_grants(role).iter().copied());
        }
        builder.build()
    }

    /// Static permission list of a role, ordered by resource.
    pub fn permissions_for(&self, role: Role) -> Vec<Permission> {
        self.grants
            .get(&role)
            .map(|entries| {
                entries
                    .iter()
                    .map(|(resource, operations)| Permission {
                        resource: *resource,
                        operations: *operations,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Like [`permissions_for`](Self::permissions_for) for a role name coming
    /// from an untyped source. Unknown names get an empty list and a warning.
    pub fn permissions_for_role_name(&self, role: &str) -> Vec<Permission> {
        match parse_role_lenient(role) {
            Some(role) => self.permissions_for(role),
            None => Vec::new(),
        }
    }

    /// Allowed operations for `resource` under `role`; empty when not granted.
    pub fn resource_permissions(&self, role: Role, resource: ResourceType) -> OperationSet {
        self.grants
            .get(&role)
            .and_then(|entries| entries.get(&resource))
            .copied()
            .unwrap_or_default()
    }

    /// String-keyed variant of [`resource_permissions`](Self::resource_permissions).
    /// Unknown roles get an empty set and a warning.
    pub fn resource_permissions_for_role_name(
        &self,
        role: &str,
        resource: ResourceType,
    ) -> OperationSet {
        parse_role_lenient(role)
            .map(|role| self.resource_permissions(role, resource))
            .unwrap_or_default()
    }

    pub fn has_permission(
        &self,
        role: Role,
        resource: ResourceType,
        operation: CrudOperation,
    ) -> bool {
        self.resource_permissions(role, resource).contains(operation)
    }

    /// String-keyed variant of [`has_permission`](Self::has_permission).
    /// Unknown roles are denied after a warning.
    pub fn has_permission_for_role_name(
        &self,
        role: &str,
        resource: ResourceType,
        operation: CrudOperation,
    ) -> bool {
        parse_role_lenient(role)
            .is_some_and(|role| self.has_permission(role, resource, operation))
    }

    pub fn can_create(&self, role: Role, resource: ResourceType) -> bool {
        self.has_permission(role, resource, CrudOperation::Create)
    }

    pub fn can_read(&self, role: Role, resource: ResourceType) -> bool {
        self.has_permission(role, resource, CrudOperation::Read)
    }

    pub fn can_update(&self, role: Role, resource: ResourceType) -> bool {
        self.has_permission(role, resource, CrudOperation::Update)
    }

    pub fn can_delete(&self, role: Role, resource: ResourceType) -> bool {
        self.has_permission(role, resource, CrudOperation::Delete)
    }

    /// Roles allowed to perform `operation` on `resource`, in [`Role::ALL`] order.
    pub fn roles_with(&self, resource: ResourceType, operation: CrudOperation) -> Vec<Role> {
        Role::ALL
            .into_iter()
            .filter(|role| self.has_permission(*role, resource, operation))
            .collect()
    }
}

fn parse_role_lenient(role: &str) -> Option<Role> {
    match role.parse::<Role>() {
        Ok(role) => Some(role),
        Err(_) => {
            warn!(role = %role, "Unknown role; treating as having no permissions");
            None
        }
    }
}

/// Collects grants and validates them into a [`PermissionTable`].
#[derive(Debug, Default)]
pub struct PermissionTableBuilder {
    entries: Vec<(Role, ResourceType, OperationSet)>,
}

impl PermissionTableBuilder {
    pub fn grant(mut self, role: Role, resource: ResourceType, operations: OperationSet) -> Self {
        self.entries.push((role, resource, operations));
        self
    }

    pub fn grant_all<I>(mut self, role: Role, grants: I) -> Self
    where
        I: IntoIterator<Item = (ResourceType, OperationSet)>,
    {
        self.entries
            .extend(grants.into_iter().map(|(resource, ops)| (role, resource, ops)));
        self
    }

    /// Fails on the first resource granted twice to the same role. Roles
    /// without grants end up with an empty entry.
    pub fn build(self) -> Result<PermissionTable, AccessError> {
        let mut grants: HashMap<Role, BTreeMap<ResourceType, OperationSet>> = Role::ALL
            .into_iter()
            .map(|role| (role, BTreeMap::new()))
            .collect();

        for (role, resource, operations) in self.entries {
            let entries = grants.entry(role).or_default();
            if entries.insert(resource, operations).is_some() {
                return Err(AccessError::DuplicateGrant { role, resource });
            }
        }

        Ok(PermissionTable { grants })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> PermissionTable {
        PermissionTable::builder()
            .grant(Role::Student, ResourceType::Results, OperationSet::READ)
            .grant(Role::Faculty, ResourceType::LessonPlans, OperationSet::CRUD)
            .grant(Role::Faculty, ResourceType::Attendance, OperationSet::CRU)
            .build()
            .unwrap()
    }

    #[test]
    fn test_missing_roles_have_empty_entries() {
        let table = sample_table();
        assert!(table.permissions_for(Role::Parent).is_empty());
        assert!(!table.has_permission(Role::Parent, ResourceType::Results, CrudOperation::Read));
    }

    #[test]
    fn test_permissions_for_is_ordered_by_resource() {
        let table = sample_table();
        let resources: Vec<_> = table
            .permissions_for(Role::Faculty)
            .into_iter()
            .map(|p| p.resource)
            .collect();
        assert_eq!(
            resources,
            vec![ResourceType::Attendance, ResourceType::LessonPlans]
        );
    }

    #[test]
    fn test_duplicate_grant_is_rejected() {
        let err = PermissionTable::builder()
            .grant(Role::Admin, ResourceType::Students, OperationSet::READ)
            .grant(Role::Admin, ResourceType::Students, OperationSet::CRUD)
            .build()
            .unwrap_err();

        assert!(matches!(
            err,
            AccessError::DuplicateGrant {
                role: Role::Admin,
                resource: ResourceType::Students
            }
        ));
    }

    #[test]
    fn test_same_resource_on_different_roles_is_fine() {
        let table = PermissionTable::builder()
            .grant(Role::Admin, ResourceType::Students, OperationSet::CRUD)
            .grant(Role::Parent, ResourceType::Students, OperationSet::READ)
            .build()
            .unwrap();
        assert!(table.can_delete(Role::Admin, ResourceType::Students));
        assert!(!table.can_delete(Role::Parent, ResourceType::Students));
    }

    #[test]
    fn test_unknown_role_name_is_denied() {
        let table = sample_table();
        assert!(table.permissions_for_role_name("unknown-role").is_empty());
        assert!(!table.has_permission_for_role_name(
            "unknown-role",
            ResourceType::Results,
            CrudOperation::Read
        ));
        assert!(
            table
                .resource_permissions_for_role_name("unknown-role", ResourceType::Results)
                .is_empty()
        );
        assert!(table.has_permission_for_role_name(
            "student",
            ResourceType::Results,
            CrudOperation::Read
        ));
    }

    #[test]
    fn test_roles_with() {
        let table = sample_table();
        assert_eq!(
            table.roles_with(ResourceType::LessonPlans, CrudOperation::Delete),
            vec![Role::Faculty]
        );
        assert!(
            table
                .roles_with(ResourceType::Fees, CrudOperation::Read)
                .is_empty()
        );
    }
}
