use edudesk_access::defaults::navigable_paths;
use edudesk_access::{AccessControl, AccessError, CrudOperation, ResourceType, Role};
use edudesk_config::UnmappedRoutePolicy;
use std::fmt::Write;

/// `allowed` / `denied` line for a single permission question.
pub fn check(
    access: &AccessControl,
    role: Role,
    resource: ResourceType,
    operation: CrudOperation,
) -> (bool, String) {
    let allowed = access.has_permission(role, resource, operation);
    let verdict = if allowed { "allowed" } else { "denied" };
    (
        allowed,
        format!("{role} {operation} {resource}: {verdict}"),
    )
}

/// Every resource the role has at least one operation on.
pub fn resources(access: &AccessControl, role: Role) -> String {
    let mut out = format!("{} ({})\n", role.display_name(), role);
    let permissions = access.permissions_for(role);
    if permissions.is_empty() {
        out.push_str("  (no permissions)\n");
    }
    for permission in permissions {
        let _ = writeln!(
            out,
            "  {:<18} {}",
            permission.resource.as_str(),
            permission.operations
        );
    }
    out
}

pub fn route(access: &AccessControl, role: Role, path: &str) -> (bool, String) {
    let allowed = access.can_access_route(role, path);
    let line = match access.resource_for_route(path) {
        Some(resource) => format!(
            "{path} -> {resource}: {}",
            if allowed { "allowed" } else { "denied" }
        ),
        None => format!("{path} -> (unmapped): denied"),
    };
    (allowed, line)
}

/// Resource × role grid of `CRUD` flags. A single role narrows it to one column.
pub fn matrix(access: &AccessControl, role: Option<Role>) -> String {
    let roles: Vec<Role> = match role {
        Some(role) => vec![role],
        None => Role::ALL.to_vec(),
    };

    let mut out = format!("{:<18}", "resource");
    for role in &roles {
        let _ = write!(out, " {:>11}", role.as_str());
    }
    out.push('\n');

    for resource in ResourceType::ALL {
        let _ = write!(out, "{:<18}", resource.as_str());
        for role in &roles {
            let flags = access.resource_permissions(*role, resource).to_flags();
            let _ = write!(out, " {:>11}", flags);
        }
        out.push('\n');
    }
    out
}

/// Route map listing with the resource each path governs.
pub fn routes(access: &AccessControl) -> String {
    let mut out = String::new();
    for (path, resource) in access.routes().iter() {
        let _ = writeln!(out, "{:<26} {}", path, resource);
    }
    out
}

/// Strict check that every path resolves to a resource, returning how many
/// were checked. With no paths given the dashboard menu is checked.
pub fn validate(access: &AccessControl, paths: &[String]) -> Result<usize, AccessError> {
    let strict = AccessControl::new(
        access.table().clone(),
        access.routes().clone(),
        UnmappedRoutePolicy::Strict,
    );

    if paths.is_empty() {
        strict.validate_routes(navigable_paths())?;
        Ok(navigable_paths().count())
    } else {
        strict.validate_routes(paths.iter().map(String::as_str))?;
        Ok(paths.len())
    }
}
