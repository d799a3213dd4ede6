//! # Edudesk
//!
//! HTTP service that exposes the Edudesk dashboard's role-based access
//! control to the front end.
//!
//! ## Overview
//!
//! The dashboard renders different views for super-admins, admins,
//! institutions, principals, heads of department, faculty, students, parents
//! and staff. Every button, field and menu entry it shows is gated on a
//! (role, resource, operation) question answered by [`edudesk_access`]; this
//! crate serves those answers over HTTP and builds the role's sidebar.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/       # Session role extractor and permission guard middleware
//! ├── modules/          # Feature modules
//! │   ├── permissions/  # Matrix, per-role and per-resource permission queries
//! │   └── navigation/   # Sidebar menu and route gating
//! ├── docs.rs           # OpenAPI document
//! ├── logging.rs        # Tracing subscriber and request logging
//! ├── router.rs         # Main application router
//! └── state.rs          # Shared application state
//! ```
//!
//! Each feature module has `controller.rs` (HTTP handlers), `service.rs`
//! (logic over [`edudesk_access::AccessControl`]), `model.rs` (response
//! types) and `router.rs`.
//!
//! ## Session
//!
//! Authentication is handled upstream; the current role arrives in the
//! `x-user-role` header. Unknown roles are logged and denied everything.
//!
//! ## Environment Variables
//!
//! ```bash
//! ACCESS_POLICY_FILE=./policy.json        # optional, replaces the built-in matrix
//! ACCESS_UNMAPPED_ROUTE_POLICY=strict     # deny (default) | strict
//! SERVER_HOST=0.0.0.0
//! SERVER_PORT=3000
//! ALLOWED_ORIGINS=http://localhost:5173
//! LOG_LEVEL=info
//! LOG_FORMAT=json
//! ```
//!
//! The OpenAPI document is served at `/api-docs/openapi.json`.

pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;

// Re-export workspace crates for convenience
pub use edudesk_access;
pub use edudesk_config;
pub use edudesk_core;
