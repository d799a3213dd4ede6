//! Governed resources.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::error::AccessError;

/// A manageable entity or dashboard module that permissions are granted on.
///
/// Closed set; adding a resource means adding a variant here and granting it
/// in the permission table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    // Setup
    EntitySetup,
    Users,
    Roles,
    RolePermissions,
    // Academics
    Students,
    Faculty,
    Staff,
    Departments,
    Courses,
    Subjects,
    Timetable,
    Attendance,
    // Learning management
    LessonPlans,
    CourseMaterials,
    Assignments,
    // Examinations
    ExamPlanning,
    ExamSchedule,
    QuestionPapers,
    Grading,
    Results,
    Progress,
    // Calendar
    Calendar,
    Events,
    // Administration
    Fees,
    Reports,
    Settings,
}

impl ResourceType {
    pub const ALL: [ResourceType; 26] = [
        ResourceType::EntitySetup,
        ResourceType::Users,
        ResourceType::Roles,
        ResourceType::RolePermissions,
        ResourceType::Students,
        ResourceType::Faculty,
        ResourceType::Staff,
        ResourceType::Departments,
        ResourceType::Courses,
        ResourceType::Subjects,
        ResourceType::Timetable,
        ResourceType::Attendance,
        ResourceType::LessonPlans,
        ResourceType::CourseMaterials,
        ResourceType::Assignments,
        ResourceType::ExamPlanning,
        ResourceType::ExamSchedule,
        ResourceType::QuestionPapers,
        ResourceType::Grading,
        ResourceType::Results,
        ResourceType::Progress,
        ResourceType::Calendar,
        ResourceType::Events,
        ResourceType::Fees,
        ResourceType::Reports,
        ResourceType::Settings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::EntitySetup => "entity_setup",
            ResourceType::Users => "users",
            ResourceType::Roles => "roles",
            ResourceType::RolePermissions => "role_permissions",
            ResourceType::Students => "students",
            ResourceType::Faculty => "faculty",
            ResourceType::Staff => "staff",
            ResourceType::Departments => "departments",
            ResourceType::Courses => "courses",
            ResourceType::Subjects => "subjects",
            ResourceType::Timetable => "timetable",
            ResourceType::Attendance => "attendance",
            ResourceType::LessonPlans => "lesson_plans",
            ResourceType::CourseMaterials => "course_materials",
            ResourceType::Assignments => "assignments",
            ResourceType::ExamPlanning => "exam_planning",
            ResourceType::ExamSchedule => "exam_schedule",
            ResourceType::QuestionPapers => "question_papers",
            ResourceType::Grading => "grading",
            ResourceType::Results => "results",
            ResourceType::Progress => "progress",
            ResourceType::Calendar => "calendar",
            ResourceType::Events => "events",
            ResourceType::Fees => "fees",
            ResourceType::Reports => "reports",
            ResourceType::Settings => "settings",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceType::ALL
            .into_iter()
            .find(|resource| resource.as_str() == s)
            .ok_or_else(|| AccessError::UnknownResource(s.to_string()))
    }
}
