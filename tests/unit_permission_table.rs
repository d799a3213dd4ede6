use edudesk_access::{AccessControl, CrudOperation, OperationSet, ResourceType, Role};

fn access() -> AccessControl {
    AccessControl::builtin().unwrap()
}

#[test]
fn test_no_entry_means_no_permission() {
    let access = access();
    for role in Role::ALL {
        let granted: Vec<ResourceType> = access
            .permissions_for(role)
            .into_iter()
            .map(|p| p.resource)
            .collect();
        for resource in ResourceType::ALL {
            if granted.contains(&resource) {
                continue;
            }
            for op in CrudOperation::ALL {
                assert!(
                    !access.has_permission(role, resource, op),
                    "{role} has {op} on ungranted {resource}"
                );
            }
        }
    }
}

#[test]
fn test_resource_permissions_agree_with_has_permission() {
    let access = access();
    for role in Role::ALL {
        for resource in ResourceType::ALL {
            let ops = access.resource_permissions(role, resource);
            for op in CrudOperation::ALL {
                assert_eq!(
                    ops.contains(op),
                    access.has_permission(role, resource, op),
                    "{role} {op} {resource}"
                );
            }
        }
    }
}

#[test]
fn test_wrappers_match_primitive() {
    let table = access().table().clone();
    for role in Role::ALL {
        for resource in ResourceType::ALL {
            assert_eq!(
                table.can_create(role, resource),
                table.has_permission(role, resource, CrudOperation::Create)
            );
            assert_eq!(
                table.can_read(role, resource),
                table.has_permission(role, resource, CrudOperation::Read)
            );
            assert_eq!(
                table.can_update(role, resource),
                table.has_permission(role, resource, CrudOperation::Update)
            );
            assert_eq!(
                table.can_delete(role, resource),
                table.has_permission(role, resource, CrudOperation::Delete)
            );
        }
    }
}

#[test]
fn test_queries_are_idempotent() {
    let access = access();
    let first = access.resource_permissions(Role::Hod, ResourceType::QuestionPapers);
    for _ in 0..10 {
        assert_eq!(
            access.resource_permissions(Role::Hod, ResourceType::QuestionPapers),
            first
        );
        assert!(access.has_permission(Role::Hod, ResourceType::QuestionPapers, CrudOperation::Delete));
    }
    assert_eq!(access.permissions_for(Role::Staff), access.permissions_for(Role::Staff));
}

#[test]
fn test_unknown_role_is_denied() {
    let access = access();
    assert!(!access.table().has_permission_for_role_name(
        "unknown-role",
        ResourceType::Students,
        CrudOperation::Read
    ));
    assert!(access.table().permissions_for_role_name("unknown-role").is_empty());
}

#[test]
fn test_student_results() {
    let access = access();
    assert!(access.has_permission(Role::Student, ResourceType::Results, CrudOperation::Read));
    assert!(!access.has_permission(Role::Student, ResourceType::Results, CrudOperation::Delete));
}

#[test]
fn test_admin_entity_setup_full_crud() {
    let access = access();
    assert!(access.has_permission(Role::Admin, ResourceType::EntitySetup, CrudOperation::Create));
    assert!(
        access
            .resource_permissions(Role::Admin, ResourceType::EntitySetup)
            .is_full()
    );
}

#[test]
fn test_parent_progress_is_read_only() {
    let access = access();
    assert!(!access.has_permission(Role::Parent, ResourceType::Progress, CrudOperation::Update));
    assert_eq!(
        access.resource_permissions(Role::Parent, ResourceType::Progress),
        OperationSet::READ
    );
}

#[test]
fn test_route_resolution_and_unmapped_policy() {
    let access = access();
    assert_eq!(
        access.resource_for_route("/academics/students"),
        Some(ResourceType::Students)
    );
    assert_eq!(access.resource_for_route("/nonexistent"), None);
    for role in Role::ALL {
        assert!(!access.can_access_route(role, "/nonexistent"));
    }
}

#[test]
fn test_faculty_lesson_plans_full_access() {
    let ops = access().resource_permissions(Role::Faculty, ResourceType::LessonPlans);
    let ops: Vec<CrudOperation> = ops.iter().collect();
    assert_eq!(
        ops,
        vec![
            CrudOperation::Create,
            CrudOperation::Read,
            CrudOperation::Update,
            CrudOperation::Delete
        ]
    );
}

#[test]
fn test_roles_with_inverse_query() {
    let table = access().table().clone();
    let deleters = table.roles_with(ResourceType::RolePermissions, CrudOperation::Delete);
    assert_eq!(deleters, vec![Role::SuperAdmin]);

    let readers = table.roles_with(ResourceType::Progress, CrudOperation::Read);
    assert!(readers.contains(&Role::Parent));
    assert!(readers.contains(&Role::Student));
    assert!(!readers.contains(&Role::Staff));
}
