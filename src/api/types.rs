use serde::{Deserialize, Serialize};

/// Every backend response is wrapped in `{ "status": ..., "data": ... }`.
#[derive(Deserialize, Debug)]
pub struct Envelope<T> {
    #[serde(default)]
    pub status: String,
    pub data: T,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Module {
    pub id: u64,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    pub id: u64,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// A top-level module item together with the items indented beneath it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ModuleNode {
    pub item: Lesson,
    #[serde(default)]
    pub children: Vec<Lesson>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentState {
    Active,
    Inactive,
    Invited,
    Completed,
    #[serde(untagged)]
    Other(String),
}

impl EnrollmentState {
    pub fn label(&self) -> &str {
        match self {
            EnrollmentState::Active => "✓ Active",
            EnrollmentState::Inactive => "✗ Inactive",
            EnrollmentState::Invited => "? Invited",
            EnrollmentState::Completed => "✓ Complete",
            EnrollmentState::Other(raw) => raw,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Grades {
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub current_score: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Enrollment {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "enrollment_state")]
    pub state: EnrollmentState,
    #[serde(default)]
    pub grades: Grades,
    pub user: User,
}

impl Enrollment {
    pub const STUDENT: &'static str = "StudentEnrollment";

    /// Current score in percent. Ungraded students count as 0.
    pub fn score(&self) -> f64 {
        self.grades.current_score.unwrap_or(0.0)
    }

    pub fn is_student(&self) -> bool {
        self.kind == Self::STUDENT
    }
}

/// What to do to a lesson.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LessonAction {
    Publish,
    Unpublish,
    SetDueDate(chrono::NaiveDate),
}

impl LessonAction {
    pub fn wire_name(&self) -> &'static str {
        match self {
            LessonAction::Publish => "publish",
            LessonAction::Unpublish => "unpublish",
            LessonAction::SetDueDate(_) => "setDueDate",
        }
    }
}

/// Body of `POST /course/{id}/modules/{moduleId}/lesson`.
#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLessonRequest {
    pub lesson_id: u64,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

impl UpdateLessonRequest {
    pub fn new(lesson_id: u64, action: &LessonAction) -> Self {
        let due_date = match action {
            LessonAction::SetDueDate(date) => Some(date.format("%Y-%m-%d").to_string()),
            _ => None,
        };
        Self {
            lesson_id,
            action: action.wire_name().to_string(),
            due_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_module_node_decodes_nested_children() {
        let json = r#"{
            "item": {"id": 1, "title": "Block 1", "type": "SubHeader"},
            "children": [
                {"id": 2, "title": "Reading", "type": "Page"},
                {"id": 3, "title": "Quiz 1", "type": "Quiz"}
            ]
        }"#;
        let node: ModuleNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.item.title, "Block 1");
        assert_eq!(node.children.len(), 2);
        assert_eq!(node.children[1].kind, "Quiz");
    }

    #[test]
    fn test_module_node_without_children() {
        let json = r#"{"item": {"id": 9, "title": "Syllabus", "type": "Page"}}"#;
        let node: ModuleNode = serde_json::from_str(json).unwrap();
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_enrollment_decodes_canvas_shape() {
        let json = r#"{
            "id": 77,
            "type": "StudentEnrollment",
            "enrollment_state": "active",
            "grades": {"html_url": "https://canvas/grades/5", "current_score": 81.5},
            "user": {"id": 5, "name": "Ada Lovelace"}
        }"#;
        let enrollment: Enrollment = serde_json::from_str(json).unwrap();
        assert!(enrollment.is_student());
        assert_eq!(enrollment.state, EnrollmentState::Active);
        assert_eq!(enrollment.score(), 81.5);
        assert_eq!(enrollment.user.name, "Ada Lovelace");
    }

    #[test]
    fn test_enrollment_null_score_counts_as_zero() {
        let json = r#"{
            "id": 1,
            "type": "StudentEnrollment",
            "enrollment_state": "invited",
            "grades": {"current_score": null},
            "user": {"id": 2, "name": "Grace"}
        }"#;
        let enrollment: Enrollment = serde_json::from_str(json).unwrap();
        assert_eq!(enrollment.grades.current_score, None);
        assert_eq!(enrollment.score(), 0.0);
    }

    #[test]
    fn test_unknown_enrollment_state_is_preserved() {
        let state: EnrollmentState = serde_json::from_str(r#""rejected""#).unwrap();
        assert_eq!(state, EnrollmentState::Other("rejected".to_string()));
        assert_eq!(state.label(), "rejected");
    }

    #[test]
    fn test_update_request_omits_due_date_for_publish() {
        let req = UpdateLessonRequest::new(42, &LessonAction::Publish);
        let serialized = serde_json::to_string(&req).unwrap();
        assert_eq!(serialized, r#"{"lessonId":42,"action":"publish"}"#);
    }

    #[test]
    fn test_update_request_carries_due_date() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
        let req = UpdateLessonRequest::new(7, &LessonAction::SetDueDate(date));
        let serialized = serde_json::to_string(&req).unwrap();
        assert_eq!(
            serialized,
            r#"{"lessonId":7,"action":"setDueDate","dueDate":"2024-02-15"}"#
        );
    }
}
