use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::permission::require_role_permissions_read;
use crate::middleware::session::ROLE_HEADER;
use crate::modules::navigation::router::{init_navigation_router, init_routes_router};
use crate::modules::permissions::router::{init_matrix_router, init_permissions_router};
use crate::state::AppState;
use axum::http::{HeaderName, HeaderValue, Method};
use axum::routing::get;
use axum::{Json, Router, middleware};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .route("/api-docs/openapi.json", get(openapi))
        .nest(
            "/api",
            Router::new()
                .route("/health", get(health))
                .nest(
                    "/permissions",
                    init_matrix_router()
                        .route_layer(middleware::from_fn_with_state(
                            state.clone(),
                            require_role_permissions_read,
                        ))
                        .merge(init_permissions_router()),
                )
                .nest("/navigation", init_navigation_router())
                .nest("/routes", init_routes_router()),
        )
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([Method::GET, Method::OPTIONS])
                .allow_headers([
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                    HeaderName::from_static(ROLE_HEADER),
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
}
