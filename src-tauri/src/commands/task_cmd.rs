//! Task Commands
//!
//! Tauri commands that forward to the LifeUp service.

use tauri::State;

use crate::AppState;
use lifeup_core::{ErrorReport, Task};

/// Fetch the task list from `GET /tasks`
#[tauri::command]
pub async fn fetch_tasks(state: State<'_, AppState>) -> Result<Vec<Task>, ErrorReport> {
    let settings = state.settings.lock().await.clone();
    state
        .client
        .fetch_tasks(&settings)
        .await
        .map_err(ErrorReport::from)
}

/// Report one task as completed via `POST /api`
#[tauri::command]
pub async fn complete_task(state: State<'_, AppState>, task_id: i64) -> Result<(), ErrorReport> {
    let settings = state.settings.lock().await.clone();
    state
        .client
        .complete_task(&settings, task_id)
        .await
        .map_err(ErrorReport::from)
}
