//! # Edudesk Config
//!
//! Configuration types for the Edudesk access service, loaded from
//! environment variables (a `.env` file is honoured by the binaries through
//! `dotenvy`).
//!
//! - [`access`]: permission policy file and unmapped-route policy
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`server`]: listen address
//!
//! # Example
//!
//! ```ignore
//! use edudesk_config::{AccessConfig, CorsConfig, ServerConfig};
//!
//! let access_config = AccessConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod access;
pub mod cors;
pub mod server;

pub use access::{AccessConfig, UnmappedRoutePolicy};
pub use cors::CorsConfig;
pub use server::ServerConfig;
