//! Dashboard roles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::error::AccessError;

/// Access-control identity of the signed-in user.
///
/// Assigned by the authentication layer; the wire form is kebab-case
/// (`super-admin`, `hod`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    SuperAdmin,
    Admin,
    Institution,
    Principal,
    Hod,
    Faculty,
    Student,
    Parent,
    Staff,
}

impl Role {
    pub const ALL: [Role; 9] = [
        Role::SuperAdmin,
        Role::Admin,
        Role::Institution,
        Role::Principal,
        Role::Hod,
        Role::Faculty,
        Role::Student,
        Role::Parent,
        Role::Staff,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super-admin",
            Role::Admin => "admin",
            Role::Institution => "institution",
            Role::Principal => "principal",
            Role::Hod => "hod",
            Role::Faculty => "faculty",
            Role::Student => "student",
            Role::Parent => "parent",
            Role::Staff => "staff",
        }
    }

    /// Human-readable label used by the dashboard header.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super Admin",
            Role::Admin => "Administrator",
            Role::Institution => "Institution",
            Role::Principal => "Principal",
            Role::Hod => "Head of Department",
            Role::Faculty => "Faculty",
            Role::Student => "Student",
            Role::Parent => "Parent",
            Role::Staff => "Staff",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| AccessError::UnknownRole(s.to_string()))
    }
}
