//! Conditional rendering on a permission check.
//!
//! The guard does not know who is signed in; the current role comes from a
//! [`SessionContext`] supplied by the caller.

use crate::operation::CrudOperation;
use crate::resource::ResourceType;
use crate::role::Role;
use crate::table::PermissionTable;

/// Ambient session that knows the signed-in user's role, if any.
pub trait SessionContext {
    fn current_role(&self) -> Option<Role>;
}

impl SessionContext for Role {
    fn current_role(&self) -> Option<Role> {
        Some(*self)
    }
}

impl SessionContext for Option<Role> {
    fn current_role(&self) -> Option<Role> {
        *self
    }
}

/// Renders a region only when the session's role holds `operation` on `resource`.
///
/// ```ignore
/// let guard = PermissionGuard::new(ResourceType::Students, CrudOperation::Delete);
/// let button = guard.render(&table, &session, || DeleteButton::new(student_id));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionGuard {
    pub resource: ResourceType,
    pub operation: CrudOperation,
}

impl PermissionGuard {
    pub fn new(resource: ResourceType, operation: CrudOperation) -> Self {
        Self {
            resource,
            operation,
        }
    }

    /// A session without a role is never allowed.
    pub fn allows<S>(&self, table: &PermissionTable, session: &S) -> bool
    where
        S: SessionContext + ?Sized,
    {
        session
            .current_role()
            .is_some_and(|role| table.has_permission(role, self.resource, self.operation))
    }

    pub fn render<S, T, F>(&self, table: &PermissionTable, session: &S, children: F) -> Option<T>
    where
        S: SessionContext + ?Sized,
        F: FnOnce() -> T,
    {
        self.allows(table, session).then(children)
    }

    pub fn render_or<S, T, F, G>(
        &self,
        table: &PermissionTable,
        session: &S,
        children: F,
        fallback: G,
    ) -> T
    where
        S: SessionContext + ?Sized,
        F: FnOnce() -> T,
        G: FnOnce() -> T,
    {
        if self.allows(table, session) {
            children()
        } else {
            fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::OperationSet;
    use std::cell::Cell;

    fn table() -> PermissionTable {
        PermissionTable::builder()
            .grant(Role::Faculty, ResourceType::Grading, OperationSet::CRU)
            .build()
            .unwrap()
    }

    #[test]
    fn test_render_when_allowed() {
        let guard = PermissionGuard::new(ResourceType::Grading, CrudOperation::Update);
        assert_eq!(
            guard.render(&table(), &Role::Faculty, || "edit grade"),
            Some("edit grade")
        );
    }

    #[test]
    fn test_children_not_evaluated_when_denied() {
        let guard = PermissionGuard::new(ResourceType::Grading, CrudOperation::Delete);
        let evaluated = Cell::new(false);
        let rendered = guard.render(&table(), &Role::Faculty, || evaluated.set(true));
        assert!(rendered.is_none());
        assert!(!evaluated.get());
    }

    #[test]
    fn test_render_or_uses_fallback() {
        let guard = PermissionGuard::new(ResourceType::Grading, CrudOperation::Read);
        let out = guard.render_or(&table(), &Role::Student, || "grades", || "read-only notice");
        assert_eq!(out, "read-only notice");
    }

    #[test]
    fn test_no_session_role_is_denied() {
        let guard = PermissionGuard::new(ResourceType::Grading, CrudOperation::Read);
        let anonymous: Option<Role> = None;
        assert!(!guard.allows(&table(), &anonymous));
        assert!(guard.allows(&table(), &Some(Role::Faculty)));
    }
}
