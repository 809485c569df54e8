//! LifeUp HTTP Client
//!
//! The two calls the bridge makes: list tasks, complete a task. Settings
//! are passed per call so edits take effect on the next request.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::domain::{ApiEnvelope, CompleteRequest, Settings, Task, TaskListResponse};
use crate::error::{BridgeError, Result};


pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct LifeUpClient {
    http: reqwest::Client,
}

impl LifeUpClient {
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }

    /// `GET /tasks`, tasks in server order
    pub async fn fetch_tasks(&self, settings: &Settings) -> Result<Vec<Task>> {
        settings.validate()?;
        let url = settings.tasks_url();
        debug!(url = %url, "fetching tasks");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "task list request failed");
            return Err(BridgeError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let envelope: TaskListResponse =
            serde_json::from_str(&body).map_err(|e| BridgeError::Decode(e.to_string()))?;

        let tasks = envelope.into_tasks().inspect_err(|e| {
            warn!(url = %url, error = %e, "service rejected task list request");
        })?;
        info!(count = tasks.len(), "tasks fetched");
        Ok(tasks)
    }

    /// `POST /api` with `lifeup://api/complete?id={id}`
    pub async fn complete_task(&self, settings: &Settings, task_id: i64) -> Result<()> {
        settings.validate()?;
        let url = settings.api_url();
        let body = CompleteRequest::for_task(task_id);
        debug!(url = %url, target = %body.url, "sending completion");

        let response = self.http.post(&url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(task_id, status = status.as_u16(), "completion request failed");
            return Err(BridgeError::Status(status.as_u16()));
        }

        // Replies without a {code, message} envelope are taken as success
        let text = response.text().await?;
        match serde_json::from_str::<ApiEnvelope>(&text) {
            Ok(envelope) => envelope.into_result()?,
            Err(_) => debug!(task_id, "completion reply has no envelope"),
        }

        info!(task_id, "task completed");
        Ok(())
    }
}
