//! Middleware and extractors for request processing.
//!
//! - [`session`]: resolves the current role from the session header
//! - [`permission`]: admits a request only when the current role holds a
//!   permission
//!
//! # Session Flow
//!
//! 1. The session collaborator sets `x-user-role: <role>` on every request
//! 2. [`session::Session`] reads the header; a missing header is a 401, an
//!    unknown role is kept as "no role" and denied everywhere
//! 3. [`permission::require_permission`] or a handler checks the role
//!    against the permission table
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::session::Session;
//!
//! async fn menu(State(state): State<AppState>, session: Session) -> impl IntoResponse {
//!     // session.role() is None for unknown roles
//! }
//! ```

pub mod permission;
pub mod session;
