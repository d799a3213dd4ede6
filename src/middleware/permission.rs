//! Permission-gated routes.
//!
//! The HTTP rendition of [`PermissionGuard`]: a request is passed on to the
//! handler only when the session's role holds the guarded permission.

use anyhow::anyhow;
use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use edudesk_access::{CrudOperation, PermissionGuard, ResourceType};
use edudesk_core::AppError;

use crate::middleware::session::Session;
use crate::state::AppState;

/// Middleware function that checks the session against `guard`.
///
/// # Usage with axum::middleware::from_fn_with_state
///
/// ```rust,ignore
/// let routes = Router::new()
///     .route("/", get(handler))
///     .route_layer(middleware::from_fn_with_state(
///         state.clone(),
///         |state, req, next| require_permission(state, req, next, guard),
///     ));
/// ```
pub async fn require_permission(
    State(state): State<AppState>,
    req: Request,
    next: Next,
    guard: PermissionGuard,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();
    let session = Session::from_request_parts(&mut parts, &state).await?;

    if !guard.allows(state.access.table(), &session) {
        return Err(AppError::forbidden(anyhow!(
            "Access denied. Role '{}' lacks {}:{}",
            session.raw_role(),
            guard.resource,
            guard.operation
        )));
    }

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Gate for the role/permission configuration screen.
///
/// ```rust,ignore
/// let matrix_routes = Router::new()
///     .route("/", get(get_matrix))
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_role_permissions_read));
/// ```
pub async fn require_role_permissions_read(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let guard = PermissionGuard::new(ResourceType::RolePermissions, CrudOperation::Read);
    match require_permission(State(state), req, next, guard).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}
