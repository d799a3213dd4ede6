use axum::{
    Json,
    extract::{Query, State},
};
use edudesk_core::AppError;

use crate::middleware::session::Session;
use crate::state::AppState;

use super::model::{NavigationResponse, RouteAccessResponse, RouteQuery, RouteResolveResponse};
use super::service;

#[utoipa::path(
    get,
    path = "/api/navigation",
    responses(
        (status = 200, description = "Sidebar sections visible to the current role", body = NavigationResponse),
        (status = 401, description = "Missing session role")
    ),
    tag = "Navigation",
    security(("session_role" = []))
)]
pub async fn get_navigation(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<NavigationResponse>, AppError> {
    let sections = service::menu_for_role(&state.access, session.role());
    Ok(Json(NavigationResponse {
        role: session.role(),
        sections,
    }))
}

#[utoipa::path(
    get,
    path = "/api/routes/resolve",
    params(
        ("path" = String, Query, description = "Dashboard path to resolve")
    ),
    responses(
        (status = 200, description = "Resource governing the path", body = RouteResolveResponse)
    ),
    tag = "Navigation"
)]
pub async fn resolve_route(
    State(state): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<RouteResolveResponse>, AppError> {
    Ok(Json(service::resolve_route(&state.access, &query.path)))
}

#[utoipa::path(
    get,
    path = "/api/routes/access",
    params(
        ("path" = String, Query, description = "Dashboard path to check")
    ),
    responses(
        (status = 200, description = "Whether the current role may open the path", body = RouteAccessResponse),
        (status = 401, description = "Missing session role")
    ),
    tag = "Navigation",
    security(("session_role" = []))
)]
pub async fn check_route_access(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<RouteQuery>,
) -> Result<Json<RouteAccessResponse>, AppError> {
    Ok(Json(service::route_access(
        &state.access,
        session.role(),
        &query.path,
    )))
}
