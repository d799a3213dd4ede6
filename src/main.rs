use dotenvy::dotenv;
use edudesk::logging::init_tracing;
use edudesk::router::init_router;
use edudesk::state::init_app_state;
use edudesk_config::ServerConfig;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let _log_guard = init_tracing();

    let state = match init_app_state() {
        Ok(state) => state,
        Err(err) => {
            error!(error = %err, "Failed to initialize access control");
            return Err(err);
        }
    };
    let app = init_router(state);

    let server_config = ServerConfig::from_env();
    let address = server_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(address = %address, "Server running");
    info!("OpenAPI document available at http://{}/api-docs/openapi.json", address);

    axum::serve(listener, app).await?;
    Ok(())
}
