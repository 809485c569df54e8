//! LifeUp Task Command Wrappers
//!
//! The backend performs the HTTP calls; these only move data across.

use wasm_bindgen::prelude::*;
use serde::Serialize;

use lifeup_core::{ErrorKind, ErrorReport, Task};
use super::{error_report, invoke};

#[derive(Serialize)]
struct TaskIdArgs {
    #[serde(rename = "taskId")]
    task_id: i64,
}

fn internal(e: serde_wasm_bindgen::Error) -> ErrorReport {
    ErrorReport::new(ErrorKind::Internal, e.to_string())
}

pub async fn fetch_tasks() -> Result<Vec<Task>, ErrorReport> {
    let result = invoke("fetch_tasks", JsValue::NULL).await.map_err(error_report)?;
    serde_wasm_bindgen::from_value(result).map_err(internal)
}

pub async fn complete_task(task_id: i64) -> Result<(), ErrorReport> {
    let js_args = serde_wasm_bindgen::to_value(&TaskIdArgs { task_id }).map_err(internal)?;
    invoke("complete_task", js_args).await.map_err(error_report)?;
    Ok(())
}
