use edudesk_access::{CrudOperation, OperationSet, Permission, ResourceType, Role};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RolePermissions {
    pub role: Role,
    pub display_name: String,
    pub permissions: Vec<Permission>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PermissionMatrixResponse {
    pub roles: Vec<RolePermissions>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RolePermissionsResponse {
    /// Role as requested; unknown roles yield an empty permission list
    pub role: String,
    pub permissions: Vec<Permission>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ResourcePermissionsResponse {
    pub role: String,
    pub resource: ResourceType,
    #[schema(value_type = Vec<CrudOperation>)]
    pub operations: OperationSet,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PermissionCheckQuery {
    pub role: String,
    pub resource: String,
    pub operation: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PermissionCheckResponse {
    pub role: String,
    pub resource: ResourceType,
    pub operation: CrudOperation,
    pub allowed: bool,
}
