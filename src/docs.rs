use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::middleware::session::ROLE_HEADER;
use crate::modules::navigation::model::{
    NavItem, NavSection, NavigationResponse, RouteAccessResponse, RouteResolveResponse,
};
use crate::modules::permissions::model::{
    PermissionCheckResponse, PermissionMatrixResponse, ResourcePermissionsResponse,
    RolePermissions, RolePermissionsResponse,
};
use edudesk_access::{CrudOperation, Permission, ResourceType, Role};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::permissions::controller::get_matrix,
        crate::modules::permissions::controller::check_permission,
        crate::modules::permissions::controller::get_role_permissions,
        crate::modules::permissions::controller::get_resource_permissions,
        crate::modules::navigation::controller::get_navigation,
        crate::modules::navigation::controller::resolve_route,
        crate::modules::navigation::controller::check_route_access,
    ),
    components(
        schemas(
            Role,
            ResourceType,
            CrudOperation,
            Permission,
            RolePermissions,
            PermissionMatrixResponse,
            RolePermissionsResponse,
            ResourcePermissionsResponse,
            PermissionCheckResponse,
            NavItem,
            NavSection,
            NavigationResponse,
            RouteResolveResponse,
            RouteAccessResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Permissions", description = "Role permission queries"),
        (name = "Navigation", description = "Route gating and the dashboard menu")
    ),
    info(
        title = "Edudesk Access API",
        version = "0.1.0",
        description = "Role-based access control for the Edudesk dashboard"
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_role",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(ROLE_HEADER))),
            )
        }
    }
}
