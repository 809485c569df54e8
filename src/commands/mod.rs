//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod settings;
mod tasks;

use wasm_bindgen::prelude::*;

use lifeup_core::{ErrorKind, ErrorReport};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

// Re-export all public items
pub use settings::*;
pub use tasks::*;

/// Message of a rejected command whose error type is `String`
fn error_message(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// Rejected command whose error type is `ErrorReport`
fn error_report(err: JsValue) -> ErrorReport {
    match serde_wasm_bindgen::from_value(err.clone()) {
        Ok(report) => report,
        Err(_) => ErrorReport::new(ErrorKind::Internal, error_message(err)),
    }
}
