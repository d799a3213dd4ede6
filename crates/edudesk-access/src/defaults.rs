//! Built-in permission matrix, route map and dashboard menu.

use crate::operation::OperationSet;
use crate::resource::ResourceType::{self, *};
use crate::role::Role;

const CRUD: OperationSet = OperationSet::CRUD;
const CRU: OperationSet = OperationSet::CRU;
const CR: OperationSet = OperationSet::CR;
const RU: OperationSet = OperationSet::RU;
const R: OperationSet = OperationSet::READ;

type Grants = &'static [(ResourceType, OperationSet)];

const SUPER_ADMIN: Grants = &[
    (EntitySetup, CRUD),
    (Users, CRUD),
    (Roles, CRUD),
    (RolePermissions, CRUD),
    (Students, CRUD),
    (Faculty, CRUD),
    (Staff, CRUD),
    (Departments, CRUD),
    (Courses, CRUD),
    (Subjects, CRUD),
    (Timetable, CRUD),
    (Attendance, CRUD),
    (LessonPlans, CRUD),
    (CourseMaterials, CRUD),
    (Assignments, CRUD),
    (ExamPlanning, CRUD),
    (ExamSchedule, CRUD),
    (QuestionPapers, CRUD),
    (Grading, CRUD),
    (Results, CRUD),
    (Progress, CRUD),
    (Calendar, CRUD),
    (Events, CRUD),
    (Fees, CRUD),
    (Reports, CRUD),
    (Settings, CRUD),
];

const ADMIN: Grants = &[
    (EntitySetup, CRUD),
    (Users, CRUD),
    (Roles, CRUD),
    (RolePermissions, RU),
    (Students, CRUD),
    (Faculty, CRUD),
    (Staff, CRUD),
    (Departments, CRUD),
    (Courses, CRUD),
    (Subjects, CRUD),
    (Timetable, CRUD),
    (Attendance, CRUD),
    (LessonPlans, R),
    (CourseMaterials, R),
    (Assignments, R),
    (ExamPlanning, CRUD),
    (ExamSchedule, CRUD),
    (QuestionPapers, R),
    (Grading, R),
    (Results, CRUD),
    (Progress, R),
    (Calendar, CRUD),
    (Events, CRUD),
    (Fees, CRUD),
    (Reports, CRUD),
    (Settings, CRUD),
];

const INSTITUTION: Grants = &[
    (EntitySetup, RU),
    (Users, CRU),
    (Roles, R),
    (RolePermissions, R),
    (Students, CRUD),
    (Faculty, CRUD),
    (Staff, CRUD),
    (Departments, CRUD),
    (Courses, CRUD),
    (Subjects, CRUD),
    (Timetable, CRUD),
    (Attendance, R),
    (ExamPlanning, R),
    (Results, R),
    (Calendar, CRUD),
    (Events, CRUD),
    (Fees, CRUD),
    (Reports, R),
    (Settings, RU),
];

const PRINCIPAL: Grants = &[
    (EntitySetup, R),
    (Users, R),
    (Students, CRU),
    (Faculty, CRU),
    (Staff, R),
    (Departments, R),
    (Courses, CRU),
    (Subjects, CRU),
    (Timetable, CRUD),
    (Attendance, RU),
    (LessonPlans, R),
    (ExamPlanning, CRUD),
    (ExamSchedule, CRUD),
    (QuestionPapers, R),
    (Grading, R),
    (Results, RU),
    (Progress, R),
    (Calendar, CRUD),
    (Events, CRUD),
    (Fees, R),
    (Reports, R),
];

const HOD: Grants = &[
    (Students, R),
    (Faculty, R),
    (Departments, RU),
    (Courses, CRU),
    (Subjects, CRUD),
    (Timetable, CRU),
    (Attendance, R),
    (LessonPlans, RU),
    (CourseMaterials, R),
    (Assignments, R),
    (ExamPlanning, CRU),
    (ExamSchedule, R),
    (QuestionPapers, CRUD),
    (Grading, R),
    (Results, R),
    (Progress, R),
    (Calendar, R),
    (Events, CR),
    (Reports, R),
];

const FACULTY: Grants = &[
    (Students, R),
    (Courses, R),
    (Subjects, R),
    (Timetable, R),
    (Attendance, CRU),
    (LessonPlans, CRUD),
    (CourseMaterials, CRUD),
    (Assignments, CRUD),
    (ExamSchedule, R),
    (QuestionPapers, CRU),
    (Grading, CRU),
    (Results, CRU),
    (Progress, RU),
    (Calendar, R),
    (Events, R),
];

const STUDENT: Grants = &[
    (Courses, R),
    (Subjects, R),
    (Timetable, R),
    (Attendance, R),
    (CourseMaterials, R),
    (Assignments, RU),
    (ExamSchedule, R),
    (Results, R),
    (Progress, R),
    (Calendar, R),
    (Events, R),
    (Fees, R),
];

const PARENT: Grants = &[
    (Students, R),
    (Timetable, R),
    (Attendance, R),
    (ExamSchedule, R),
    (Results, R),
    (Progress, R),
    (Calendar, R),
    (Events, R),
    (Fees, R),
];

const STAFF: Grants = &[
    (Students, R),
    (Staff, R),
    (Timetable, R),
    (Attendance, CRU),
    (Calendar, R),
    (Events, CRU),
    (Fees, CRUD),
    (Reports, R),
];

/// Grants shipped for `role`. The match is exhaustive, so a new role cannot
/// be added without deciding its permissions.
pub fn builtin_grants(role: Role) -> Grants {
    match role {
        Role::SuperAdmin => SUPER_ADMIN,
        Role::Admin => ADMIN,
        Role::Institution => INSTITUTION,
        Role::Principal => PRINCIPAL,
        Role::Hod => HOD,
        Role::Faculty => FACULTY,
        Role::Student => STUDENT,
        Role::Parent => PARENT,
        Role::Staff => STAFF,
    }
}

/// Dashboard paths and the resource each one governs.
pub const BUILTIN_ROUTES: &[(&str, ResourceType)] = &[
    ("/setup/entities", EntitySetup),
    ("/setup/users", Users),
    ("/setup/roles", Roles),
    ("/setup/permissions", RolePermissions),
    ("/academics/students", Students),
    ("/academics/faculty", Faculty),
    ("/academics/staff", Staff),
    ("/academics/departments", Departments),
    ("/academics/courses", Courses),
    ("/academics/subjects", Subjects),
    ("/academics/timetable", Timetable),
    ("/academics/attendance", Attendance),
    ("/lms/lesson-plans", LessonPlans),
    ("/lms/materials", CourseMaterials),
    ("/lms/assignments", Assignments),
    ("/exams/planning", ExamPlanning),
    ("/exams/schedule", ExamSchedule),
    ("/exams/question-papers", QuestionPapers),
    ("/exams/grading", Grading),
    ("/exams/results", Results),
    ("/exams/progress", Progress),
    ("/calendar", Calendar),
    ("/calendar/events", Events),
    ("/finance/fees", Fees),
    ("/reports", Reports),
    ("/settings", Settings),
];

pub type MenuSection = (&'static str, &'static [(&'static str, &'static str)]);

/// Dashboard sidebar: section title, then (label, path) entries.
pub const DASHBOARD_MENU: &[MenuSection] = &[
    (
        "Setup",
        &[
            ("Entity Setup", "/setup/entities"),
            ("Users", "/setup/users"),
            ("Roles", "/setup/roles"),
            ("Role Permissions", "/setup/permissions"),
        ],
    ),
    (
        "Academics",
        &[
            ("Students", "/academics/students"),
            ("Faculty", "/academics/faculty"),
            ("Staff", "/academics/staff"),
            ("Departments", "/academics/departments"),
            ("Courses", "/academics/courses"),
            ("Subjects", "/academics/subjects"),
            ("Timetable", "/academics/timetable"),
            ("Attendance", "/academics/attendance"),
        ],
    ),
    (
        "Learning",
        &[
            ("Lesson Plans", "/lms/lesson-plans"),
            ("Course Materials", "/lms/materials"),
            ("Assignments", "/lms/assignments"),
        ],
    ),
    (
        "Examinations",
        &[
            ("Exam Planning", "/exams/planning"),
            ("Exam Schedule", "/exams/schedule"),
            ("Question Papers", "/exams/question-papers"),
            ("Grading", "/exams/grading"),
            ("Results", "/exams/results"),
            ("Progress", "/exams/progress"),
        ],
    ),
    (
        "Calendar",
        &[("Academic Calendar", "/calendar"), ("Events", "/calendar/events")],
    ),
    (
        "Administration",
        &[
            ("Fees", "/finance/fees"),
            ("Reports", "/reports"),
            ("Settings", "/settings"),
        ],
    ),
];

/// Every path reachable from the sidebar.
pub fn navigable_paths() -> impl Iterator<Item = &'static str> {
    DASHBOARD_MENU
        .iter()
        .flat_map(|(_, items)| items.iter().map(|(_, path)| *path))
}
