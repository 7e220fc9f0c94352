use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::task_models::Task;

// Required fields are Option so a missing field fails validation with a
// 400 instead of dying inside the JSON extractor.

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct GetTasksRequest {
    #[validate(required(message = "owner_id is required"))]
    pub owner_id: Option<i64>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SearchTasksRequest {
    #[validate(required(message = "owner_id is required"))]
    pub owner_id: Option<i64>,
    /// Substring to match against titles. Empty or absent matches everything.
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SaveTaskRequest {
    /// Absent or non-positive means create; positive means edit that row.
    pub task_id: Option<i64>,
    #[validate(required(message = "owner_id is required"))]
    pub owner_id: Option<i64>,
    #[validate(required(message = "title is required"), length(min = 1, max = 500))]
    pub title: Option<String>,
    pub content: Option<String>,
    #[validate(required(message = "start is required"))]
    pub start: Option<DateTime<Utc>>,
    #[validate(required(message = "end is required"))]
    pub end: Option<DateTime<Utc>>,
    #[validate(required(message = "color is required"), length(min = 1, max = 100))]
    pub color: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct TaskIdRequest {
    #[validate(required(message = "task_id is required"))]
    pub task_id: Option<i64>,
    #[validate(required(message = "owner_id is required"))]
    pub owner_id: Option<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TaskListResponse {
    pub success: bool,
    pub message: String,
    pub tasks: Vec<Task>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TaskResponse {
    pub success: bool,
    pub message: String,
    pub task: Task,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn valid_save_request() -> SaveTaskRequest {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        SaveTaskRequest {
            task_id: None,
            owner_id: Some(1),
            title: Some("T1".to_string()),
            content: None,
            start: Some(now),
            end: Some(now),
            color: Some("red".to_string()),
        }
    }

    #[test]
    fn save_accepts_valid_create_payload() {
        assert!(valid_save_request().validate().is_ok());
    }

    #[test]
    fn save_accepts_edit_payload_with_task_id() {
        let mut payload = valid_save_request();
        payload.task_id = Some(42);
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn save_rejects_missing_owner_id() {
        let mut payload = valid_save_request();
        payload.owner_id = None;
        assert!(payload.validate().is_err());
    }

    #[test]
    fn save_rejects_missing_title() {
        let mut payload = valid_save_request();
        payload.title = None;
        assert!(payload.validate().is_err());
    }

    #[test]
    fn save_rejects_empty_title() {
        let mut payload = valid_save_request();
        payload.title = Some(String::new());
        assert!(payload.validate().is_err());
    }

    #[test]
    fn save_rejects_missing_schedule_window() {
        let mut payload = valid_save_request();
        payload.start = None;
        assert!(payload.validate().is_err());

        let mut payload = valid_save_request();
        payload.end = None;
        assert!(payload.validate().is_err());
    }

    #[test]
    fn save_rejects_empty_color() {
        let mut payload = valid_save_request();
        payload.color = Some(String::new());
        assert!(payload.validate().is_err());
    }

    // The window is deliberately not ordered; end before start is accepted.
    #[test]
    fn save_accepts_end_before_start() {
        let mut payload = valid_save_request();
        payload.start = Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());
        payload.end = Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn task_id_request_requires_both_identifiers() {
        let payload = TaskIdRequest {
            task_id: Some(1),
            owner_id: None,
        };
        assert!(payload.validate().is_err());

        let payload = TaskIdRequest {
            task_id: None,
            owner_id: Some(1),
        };
        assert!(payload.validate().is_err());

        let payload = TaskIdRequest {
            task_id: Some(1),
            owner_id: Some(1),
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn search_title_defaults_to_empty() {
        let payload: SearchTasksRequest = serde_json::from_str(r#"{"owner_id": 1}"#).unwrap();
        assert!(payload.validate().is_ok());
        assert_eq!(payload.title, "");
    }
}
