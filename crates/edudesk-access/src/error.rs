use std::path::PathBuf;

use crate::resource::ResourceType;
use crate::role::Role;

/// Errors raised while parsing names or building the access configuration.
///
/// Permission queries themselves never fail; these only surface at the
/// boundaries (string parsing, policy file loading, startup validation).
#[derive(Debug, thiserror::Error)]
pub enum AccessError {
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Unknown resource: {0}")]
    UnknownResource(String),

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Duplicate permission entry for resource '{resource}' on role '{role}'")]
    DuplicateGrant { role: Role, resource: ResourceType },

    #[error("Role '{0}' is listed more than once in the policy file")]
    DuplicateRole(String),

    #[error("Duplicate route mapping for path '{0}'")]
    DuplicateRoute(String),

    #[error("Invalid route path '{0}': paths must start with '/'")]
    InvalidRoute(String),

    #[error("Navigable routes without a resource mapping: {}", .0.join(", "))]
    UnmappedRoutes(Vec<String>),

    #[error("Failed to read policy file {path}: {source}")]
    PolicyFileIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse policy file: {0}")]
    PolicyFileFormat(#[from] serde_json::Error),
}
