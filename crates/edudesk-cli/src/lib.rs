//! # Edudesk CLI
//!
//! Report builders behind the `edudesk-cli` binary. Each function renders
//! plain text so the binary only has to print it.
//!
//! ## Usage
//!
//! ```ignore
//! use edudesk_access::AccessControl;
//! use edudesk_cli::reports;
//!
//! let access = AccessControl::builtin()?;
//! println!("{}", reports::matrix(&access, None));
//! ```

pub mod logging;
pub mod reports;
