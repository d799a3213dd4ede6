use edudesk_access::defaults::DASHBOARD_MENU;
use edudesk_access::{AccessControl, Role};
use tracing::instrument;

use super::model::{NavItem, NavSection, RouteAccessResponse, RouteResolveResponse};

/// Sidebar sections the role may open. Items are kept when
/// `can_access_route` allows them; sections left empty are dropped.
#[instrument(skip(access))]
pub fn menu_for_role(access: &AccessControl, role: Option<Role>) -> Vec<NavSection> {
    let Some(role) = role else {
        return Vec::new();
    };

    DASHBOARD_MENU
        .iter()
        .filter_map(|(title, items)| {
            let items: Vec<NavItem> = items
                .iter()
                .filter(|(_, path)| access.can_access_route(role, path))
                .filter_map(|(label, path)| {
                    access.resource_for_route(path).map(|resource| NavItem {
                        label: label.to_string(),
                        path: path.to_string(),
                        resource,
                    })
                })
                .collect();

            (!items.is_empty()).then(|| NavSection {
                title: title.to_string(),
                items,
            })
        })
        .collect()
}

pub fn resolve_route(access: &AccessControl, path: &str) -> RouteResolveResponse {
    RouteResolveResponse {
        path: path.to_string(),
        resource: access.resource_for_route(path),
    }
}

/// Unknown session roles are denied like unmapped routes.
pub fn route_access(access: &AccessControl, role: Option<Role>, path: &str) -> RouteAccessResponse {
    RouteAccessResponse {
        path: path.to_string(),
        resource: access.resource_for_route(path),
        allowed: role.is_some_and(|role| access.can_access_route(role, path)),
    }
}
