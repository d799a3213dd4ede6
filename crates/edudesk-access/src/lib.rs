//! # Edudesk Access
//!
//! Role-based access control for the Edudesk dashboard.
//!
//! - [`role`], [`resource`], [`operation`]: the closed sets permissions are
//!   expressed in
//! - [`table`]: the role → resource → operations table and its queries
//! - [`routes`]: dashboard path → resource resolution
//! - [`guard`]: conditional rendering on a permission check
//! - [`control`]: [`AccessControl`], the immutable context built at startup
//! - [`policy_file`]: JSON policy files replacing the built-in matrix
//!
//! # Example
//!
//! ```ignore
//! use edudesk_access::{AccessControl, CrudOperation, ResourceType, Role};
//!
//! let access = AccessControl::builtin()?;
//! assert!(access.has_permission(Role::Student, ResourceType::Results, CrudOperation::Read));
//! assert!(!access.can_access_route(Role::Parent, "/setup/roles"));
//! ```

pub mod control;
pub mod defaults;
pub mod error;
pub mod guard;
pub mod operation;
pub mod policy_file;
pub mod resource;
pub mod role;
pub mod routes;
pub mod table;

pub use control::AccessControl;
pub use error::AccessError;
pub use guard::{PermissionGuard, SessionContext};
pub use operation::{CrudOperation, OperationSet};
pub use resource::ResourceType;
pub use role::Role;
pub use routes::RouteMap;
pub use table::{Permission, PermissionTable};
