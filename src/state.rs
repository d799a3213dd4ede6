use edudesk_access::AccessControl;
use edudesk_access::defaults::navigable_paths;
use edudesk_config::{AccessConfig, CorsConfig};

#[derive(Clone, Debug)]
pub struct AppState {
    pub access: AccessControl,
    pub cors_config: CorsConfig,
}

/// Builds the access context and runs the navigable-route validation step.
/// Fails when the policy file is invalid or, under the `strict` policy, when
/// a menu entry has no resource mapping.
pub fn init_app_state() -> anyhow::Result<AppState> {
    let access = AccessControl::from_config(&AccessConfig::from_env())?;
    access.validate_routes(navigable_paths())?;

    Ok(AppState {
        access,
        cors_config: CorsConfig::from_env(),
    })
}
