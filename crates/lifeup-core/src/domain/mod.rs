//! Domain Layer
//!
//! Tasks, settings and the document-side rules (trigger lines, markup,
//! what each service answer does to the note).
//! Nothing here touches the network, so the wasm frontend can use it.

mod flow;
mod markup;
mod settings;
mod task;
mod trigger;

pub use flow::{
    apply_completion_result, apply_fetch_result, checkbox_action, CheckboxAction, CheckboxEvent,
    CompletionLedger, CompletionOutcome, DetectionGate, FetchOutcome, SaveQueue,
};
pub use markup::{
    escape_html, mark_task_completed, render_task_list, CHECKBOX_CLASS, TASK_ID_ATTR, TASK_ID_KEY,
};
pub use settings::{Settings, DEFAULT_HOST, DEFAULT_PORT};
pub use task::{parse_task_id, ApiEnvelope, CompleteRequest, Task, TaskListResponse, SUCCESS_CODE};
pub use trigger::{find_trigger_lines, is_trigger, replace_trigger_line, TRIGGER};
