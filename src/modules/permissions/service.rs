use anyhow::anyhow;
use edudesk_access::{AccessControl, CrudOperation, PermissionGuard, ResourceType, Role};
use edudesk_core::AppError;
use tracing::instrument;

use crate::middleware::session::Session;

use super::model::{
    PermissionCheckQuery, PermissionCheckResponse, PermissionMatrixResponse, RolePermissions,
    RolePermissionsResponse, ResourcePermissionsResponse,
};

fn parse_resource(resource: &str) -> Result<ResourceType, AppError> {
    resource
        .parse::<ResourceType>()
        .map_err(|err| AppError::bad_request(anyhow!(err)))
}

fn parse_operation(operation: &str) -> Result<CrudOperation, AppError> {
    operation
        .parse::<CrudOperation>()
        .map_err(|err| AppError::bad_request(anyhow!(err)))
}

/// A session may look up its own role. Any other role needs
/// `role_permissions:read`, the same permission that guards the full matrix.
pub fn authorize_role_lookup(
    access: &AccessControl,
    session: &Session,
    role: &str,
) -> Result<(), AppError> {
    let own_role = session
        .role()
        .is_some_and(|current| role.trim().parse::<Role>().ok() == Some(current));
    let guard = PermissionGuard::new(ResourceType::RolePermissions, CrudOperation::Read);

    if own_role || guard.allows(access.table(), session) {
        Ok(())
    } else {
        Err(AppError::forbidden(anyhow!(
            "Access denied. Role '{}' may only view its own permissions",
            session.raw_role()
        )))
    }
}

#[instrument(skip(access))]
pub fn get_matrix(access: &AccessControl) -> PermissionMatrixResponse {
    let roles = Role::ALL
        .into_iter()
        .map(|role| RolePermissions {
            role,
            display_name: role.display_name().to_string(),
            permissions: access.permissions_for(role),
        })
        .collect();

    PermissionMatrixResponse { roles }
}

#[instrument(skip(access))]
pub fn get_role_permissions(access: &AccessControl, role: &str) -> RolePermissionsResponse {
    RolePermissionsResponse {
        role: role.to_string(),
        permissions: access.table().permissions_for_role_name(role),
    }
}

#[instrument(skip(access))]
pub fn get_resource_permissions(
    access: &AccessControl,
    role: &str,
    resource: &str,
) -> Result<ResourcePermissionsResponse, AppError> {
    let resource = parse_resource(resource)?;
    let operations = access
        .table()
        .resource_permissions_for_role_name(role, resource);

    Ok(ResourcePermissionsResponse {
        role: role.to_string(),
        resource,
        operations,
    })
}

#[instrument(skip(access))]
pub fn check_permission(
    access: &AccessControl,
    query: &PermissionCheckQuery,
) -> Result<PermissionCheckResponse, AppError> {
    let resource = parse_resource(&query.resource)?;
    let operation = parse_operation(&query.operation)?;
    let allowed = access
        .table()
        .has_permission_for_role_name(&query.role, resource, operation);

    Ok(PermissionCheckResponse {
        role: query.role.clone(),
        resource,
        operation,
        allowed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn access() -> AccessControl {
        AccessControl::builtin().unwrap()
    }

    #[test]
    fn test_matrix_lists_every_role() {
        let matrix = get_matrix(&access());
        assert_eq!(matrix.roles.len(), Role::ALL.len());
        assert_eq!(matrix.roles[0].role, Role::SuperAdmin);
        assert_eq!(matrix.roles[0].permissions.len(), ResourceType::ALL.len());
    }

    #[test]
    fn test_check_permission() {
        let query = PermissionCheckQuery {
            role: "parent".to_string(),
            resource: "progress".to_string(),
            operation: "update".to_string(),
        };
        let response = check_permission(&access(), &query).unwrap();
        assert!(!response.allowed);
        assert_eq!(response.resource, ResourceType::Progress);
    }

    #[test]
    fn test_check_permission_rejects_bad_names() {
        let query = PermissionCheckQuery {
            role: "admin".to_string(),
            resource: "library".to_string(),
            operation: "read".to_string(),
        };
        let err = check_permission(&access(), &query).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let query = PermissionCheckQuery {
            role: "admin".to_string(),
            resource: "students".to_string(),
            operation: "approve".to_string(),
        };
        let err = check_permission(&access(), &query).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_own_role_lookup_is_allowed() {
        let session = Session::from_role_name("student");
        assert!(authorize_role_lookup(&access(), &session, "student").is_ok());
    }

    #[test]
    fn test_other_role_lookup_needs_role_permissions_read() {
        let access = access();

        let err = authorize_role_lookup(&access, &Session::from_role_name("student"), "parent")
            .unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);

        let admin = Session::from_role_name("admin");
        assert!(authorize_role_lookup(&access, &admin, "parent").is_ok());
        assert!(authorize_role_lookup(&access, &admin, "janitor").is_ok());
    }

    #[test]
    fn test_unknown_session_role_is_forbidden_even_for_itself() {
        let session = Session::from_role_name("janitor");
        let err = authorize_role_lookup(&access(), &session, "janitor").unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_resource_permissions_unknown_role_is_empty() {
        let response = get_resource_permissions(&access(), "janitor", "students").unwrap();
        assert!(response.operations.is_empty());
    }
}
