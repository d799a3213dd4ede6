use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{check_route_access, get_navigation, resolve_route};

pub fn init_navigation_router() -> Router<AppState> {
    Router::new().route("/", get(get_navigation))
}

pub fn init_routes_router() -> Router<AppState> {
    Router::new()
        .route("/resolve", get(resolve_route))
        .route("/access", get(check_route_access))
}
