use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{
    check_permission, get_matrix, get_resource_permissions, get_role_permissions,
};

/// The full matrix; the caller layers the role_permissions:read guard on it.
pub fn init_matrix_router() -> Router<AppState> {
    Router::new().route("/", get(get_matrix))
}

/// Per-role lookups. Handlers allow the session's own role; other roles need
/// role_permissions:read.
pub fn init_permissions_router() -> Router<AppState> {
    Router::new()
        .route("/check", get(check_permission))
        .route("/{role}", get(get_role_permissions))
        .route("/{role}/{resource}", get(get_resource_permissions))
}
