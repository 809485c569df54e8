//! Task domain types
//!
//! Wire shapes of the LifeUp service: the `/tasks` envelope and the
//! completion request posted to `/api`.

use serde::{Deserialize, Serialize};

use crate::error::{BridgeError, Result};

/// Envelope code the service uses for success
pub const SUCCESS_CODE: i32 = 200;

/// A remote task, as listed by `GET /tasks`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    #[serde(rename = "nameExtended")]
    pub name_extended: String,
    pub status: i32,
}

impl Task {
    pub fn new(id: i64, name_extended: impl Into<String>, status: i32) -> Self {
        Self {
            id,
            name_extended: name_extended.into(),
            status,
        }
    }
}

/// `{code, data, message}` reply of `GET /tasks`
#[derive(Debug, Clone, Deserialize)]
pub struct TaskListResponse {
    pub code: i32,
    #[serde(default)]
    pub data: Option<Vec<Task>>,
    #[serde(default)]
    pub message: String,
}

impl TaskListResponse {
    /// Tasks in server order, or the service error the envelope reports
    pub fn into_tasks(self) -> Result<Vec<Task>> {
        if self.code == SUCCESS_CODE {
            Ok(self.data.unwrap_or_default())
        } else {
            Err(BridgeError::Service {
                code: self.code,
                message: self.message,
            })
        }
    }
}

/// Generic `{code, message}` reply of `POST /api`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope {
    pub code: i32,
    #[serde(default)]
    pub message: String,
}

impl ApiEnvelope {
    pub fn into_result(self) -> Result<()> {
        if self.code == SUCCESS_CODE {
            Ok(())
        } else {
            Err(BridgeError::Service {
                code: self.code,
                message: self.message,
            })
        }
    }
}

/// Body of `POST /api` asking LifeUp to complete one task
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompleteRequest {
    pub url: String,
}

impl CompleteRequest {
    pub fn for_task(id: i64) -> Self {
        Self {
            url: format!("lifeup://api/complete?id={}", id),
        }
    }
}

/// Parse the value of a checkbox's `data-task-id` attribute
pub fn parse_task_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_list_success() {
        let json = r#"{
            "code": 200,
            "message": "success",
            "data": [
                {"id": 12, "nameExtended": "Read a chapter", "status": 0, "exp": 40},
                {"id": 7, "nameExtended": "Stretch", "status": 1}
            ]
        }"#;
        let response: TaskListResponse = serde_json::from_str(json).unwrap();
        let tasks = response.into_tasks().unwrap();

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0], Task::new(12, "Read a chapter", 0));
        // server order is preserved
        assert_eq!(tasks[1].id, 7);
    }

    #[test]
    fn test_task_list_error_code() {
        let json = r#"{"code": 500, "message": "LifeUp is not running", "data": null}"#;
        let response: TaskListResponse = serde_json::from_str(json).unwrap();

        match response.into_tasks() {
            Err(BridgeError::Service { code, message }) => {
                assert_eq!(code, 500);
                assert_eq!(message, "LifeUp is not running");
            }
            other => panic!("expected service error, got {:?}", other),
        }
    }

    #[test]
    fn test_task_list_missing_data() {
        let response: TaskListResponse = serde_json::from_str(r#"{"code": 200}"#).unwrap();
        assert!(response.into_tasks().unwrap().is_empty());
    }

    #[test]
    fn test_complete_request_body() {
        let body = serde_json::to_value(CompleteRequest::for_task(42)).unwrap();
        assert_eq!(body, serde_json::json!({"url": "lifeup://api/complete?id=42"}));
    }

    #[test]
    fn test_parse_task_id() {
        assert_eq!(parse_task_id("42"), Some(42));
        assert_eq!(parse_task_id(" 7 "), Some(7));
        assert_eq!(parse_task_id(""), None);
        assert_eq!(parse_task_id("task-3"), None);
    }

    #[test]
    fn test_api_envelope() {
        let ok: ApiEnvelope = serde_json::from_str(r#"{"code": 200, "message": "success"}"#).unwrap();
        assert!(ok.into_result().is_ok());

        let rejected: ApiEnvelope = serde_json::from_str(r#"{"code": 404, "message": "task not found"}"#).unwrap();
        let err = rejected.into_result().unwrap_err();
        assert!(err.is_service_error());
        assert_eq!(err.to_string(), "task not found");
    }
}
