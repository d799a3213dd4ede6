use edudesk_access::{ResourceType, Role};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct NavItem {
    pub label: String,
    pub path: String,
    pub resource: ResourceType,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct NavSection {
    pub title: String,
    pub items: Vec<NavItem>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NavigationResponse {
    /// `null` when the session role is not recognised
    pub role: Option<Role>,
    pub sections: Vec<NavSection>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RouteQuery {
    pub path: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RouteResolveResponse {
    pub path: String,
    /// `null` for paths that are not permission-gated by any resource
    pub resource: Option<ResourceType>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RouteAccessResponse {
    pub path: String,
    pub resource: Option<ResourceType>,
    pub allowed: bool,
}
