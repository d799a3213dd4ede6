use axum::{
    Json,
    extract::{Path, Query, State},
};
use edudesk_core::AppError;

use crate::middleware::session::Session;
use crate::state::AppState;

use super::model::{
    PermissionCheckQuery, PermissionCheckResponse, PermissionMatrixResponse,
    ResourcePermissionsResponse, RolePermissionsResponse,
};
use super::service;

#[utoipa::path(
    get,
    path = "/api/permissions",
    responses(
        (status = 200, description = "Permission matrix for every role", body = PermissionMatrixResponse),
        (status = 401, description = "Missing session role"),
        (status = 403, description = "Role lacks role_permissions:read")
    ),
    tag = "Permissions",
    security(("session_role" = []))
)]
pub async fn get_matrix(
    State(state): State<AppState>,
) -> Result<Json<PermissionMatrixResponse>, AppError> {
    Ok(Json(service::get_matrix(&state.access)))
}

#[utoipa::path(
    get,
    path = "/api/permissions/check",
    params(
        ("role" = String, Query, description = "Role name, e.g. `faculty`"),
        ("resource" = String, Query, description = "Resource name, e.g. `lesson_plans`"),
        ("operation" = String, Query, description = "One of create, read, update, delete")
    ),
    responses(
        (status = 200, description = "Whether the role holds the permission", body = PermissionCheckResponse),
        (status = 400, description = "Unknown resource or operation"),
        (status = 401, description = "Missing session role"),
        (status = 403, description = "Other role queried without role_permissions:read")
    ),
    tag = "Permissions",
    security(("session_role" = []))
)]
pub async fn check_permission(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<PermissionCheckQuery>,
) -> Result<Json<PermissionCheckResponse>, AppError> {
    service::authorize_role_lookup(&state.access, &session, &query.role)?;
    let response = service::check_permission(&state.access, &query)?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/permissions/{role}",
    params(
        ("role" = String, Path, description = "Role name")
    ),
    responses(
        (status = 200, description = "Permissions of the role (empty for unknown roles)", body = RolePermissionsResponse),
        (status = 401, description = "Missing session role"),
        (status = 403, description = "Other role queried without role_permissions:read")
    ),
    tag = "Permissions",
    security(("session_role" = []))
)]
pub async fn get_role_permissions(
    State(state): State<AppState>,
    session: Session,
    Path(role): Path<String>,
) -> Result<Json<RolePermissionsResponse>, AppError> {
    service::authorize_role_lookup(&state.access, &session, &role)?;
    Ok(Json(service::get_role_permissions(&state.access, &role)))
}

#[utoipa::path(
    get,
    path = "/api/permissions/{role}/{resource}",
    params(
        ("role" = String, Path, description = "Role name"),
        ("resource" = String, Path, description = "Resource name")
    ),
    responses(
        (status = 200, description = "Operations the role may perform on the resource", body = ResourcePermissionsResponse),
        (status = 400, description = "Unknown resource"),
        (status = 401, description = "Missing session role"),
        (status = 403, description = "Other role queried without role_permissions:read")
    ),
    tag = "Permissions",
    security(("session_role" = []))
)]
pub async fn get_resource_permissions(
    State(state): State<AppState>,
    session: Session,
    Path((role, resource)): Path<(String, String)>,
) -> Result<Json<ResourcePermissionsResponse>, AppError> {
    service::authorize_role_lookup(&state.access, &session, &role)?;
    let response = service::get_resource_permissions(&state.access, &role, &resource)?;
    Ok(Json(response))
}
