//! # Edudesk Core
//!
//! Core types shared by the Edudesk crates.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//!
//! # Example
//!
//! ```ignore
//! use edudesk_core::errors::AppError;
//!
//! let error = AppError::forbidden(anyhow::anyhow!("Missing permission students:delete"));
//! ```

pub mod errors;

pub use errors::AppError;
