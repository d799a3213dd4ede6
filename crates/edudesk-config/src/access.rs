//! Access-control configuration.
//!
//! # Environment Variables
//!
//! - `ACCESS_POLICY_FILE`: optional path to a JSON permission policy that
//!   replaces the built-in matrix
//! - `ACCESS_UNMAPPED_ROUTE_POLICY`: `deny` (default) or `strict`

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::warn;

/// What to do with navigable routes that have no resource mapping.
///
/// Unmapped routes are always denied at request time. The policy only
/// decides how startup validation treats them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnmappedRoutePolicy {
    /// Log each unmapped navigable route and keep going.
    #[default]
    Deny,
    /// Refuse to start while any navigable route is unmapped.
    Strict,
}

impl UnmappedRoutePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnmappedRoutePolicy::Deny => "deny",
            UnmappedRoutePolicy::Strict => "strict",
        }
    }
}

impl fmt::Display for UnmappedRoutePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnmappedRoutePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "deny" => Ok(UnmappedRoutePolicy::Deny),
            "strict" => Ok(UnmappedRoutePolicy::Strict),
            other => Err(format!(
                "invalid unmapped route policy '{}', expected 'deny' or 'strict'",
                other
            )),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccessConfig {
    pub policy_file: Option<PathBuf>,
    pub unmapped_route_policy: UnmappedRoutePolicy,
}

impl AccessConfig {
    pub fn from_env() -> Self {
        let policy_file = env::var("ACCESS_POLICY_FILE")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let unmapped_route_policy = match env::var("ACCESS_UNMAPPED_ROUTE_POLICY") {
            Ok(raw) => raw.parse::<UnmappedRoutePolicy>().unwrap_or_else(|err| {
                warn!("{}; falling back to 'deny'", err);
                UnmappedRoutePolicy::Deny
            }),
            Err(_) => UnmappedRoutePolicy::Deny,
        };

        Self {
            policy_file,
            unmapped_route_policy,
        }
    }
}
