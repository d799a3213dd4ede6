use anyhow::anyhow;
use axum::{extract::FromRequestParts, http::request::Parts};
use edudesk_access::{Role, SessionContext};
use edudesk_core::AppError;
use tracing::warn;

/// Header through which the session collaborator passes the signed-in role.
pub const ROLE_HEADER: &str = "x-user-role";

/// Extractor for the current session's role.
///
/// Rejects with 401 when the header is missing. An unrecognised role name is
/// not an error: it is logged and the session carries no role, which every
/// permission check denies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    raw_role: String,
    role: Option<Role>,
}

impl Session {
    pub fn from_role_name(raw_role: &str) -> Self {
        let raw_role = raw_role.trim().to_string();
        let role = match raw_role.parse::<Role>() {
            Ok(role) => Some(role),
            Err(_) => {
                warn!(role = %raw_role, "Unknown role in session; treating as having no permissions");
                None
            }
        };
        Self { raw_role, role }
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// The role exactly as the session supplied it.
    pub fn raw_role(&self) -> &str {
        &self.raw_role
    }
}

impl SessionContext for Session {
    fn current_role(&self) -> Option<Role> {
        self.role
    }
}

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw_role = parts
            .headers
            .get(ROLE_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| AppError::unauthorized(anyhow!("Missing {} header", ROLE_HEADER)))?;

        Ok(Session::from_role_name(raw_role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_role() {
        let session = Session::from_role_name(" faculty ");
        assert_eq!(session.role(), Some(Role::Faculty));
        assert_eq!(session.raw_role(), "faculty");
        assert_eq!(session.current_role(), Some(Role::Faculty));
    }

    #[test]
    fn test_unknown_role_has_no_role() {
        let session = Session::from_role_name("unknown-role");
        assert_eq!(session.role(), None);
        assert_eq!(session.raw_role(), "unknown-role");
    }
}
