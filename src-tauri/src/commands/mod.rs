//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.

mod settings_cmd;
mod task_cmd;

pub use settings_cmd::*;
pub use task_cmd::*;
