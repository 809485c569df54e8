//! Checkbox Completion
//!
//! Delegated `change` handling for the injected task checkboxes.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement};

use lifeup_core::domain::{
    apply_completion_result, checkbox_action, mark_task_completed, CheckboxAction, CheckboxEvent,
    TASK_ID_KEY,
};

use crate::commands;
use crate::context::AppContext;

/// Handle a `change` event bubbling up from the preview
pub fn on_checkbox_change(ctx: AppContext, ev: web_sys::Event) {
    let Some(checkbox) = ev
        .target()
        .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
    else {
        return;
    };

    let input_type = checkbox.type_();
    let raw_id = checkbox.dataset().get(TASK_ID_KEY);
    let event = CheckboxEvent {
        input_type: &input_type,
        checked: checkbox.checked(),
        disabled: checkbox.disabled(),
        task_id: raw_id.as_deref(),
    };

    match checkbox_action(event, &ctx.completions()) {
        CheckboxAction::Ignore => {}
        CheckboxAction::Restore(task_id) => {
            web_sys::console::log_1(&format!("[SYNC] Task {} already completed", task_id).into());
            restore_completed(ctx, task_id, &checkbox);
        }
        CheckboxAction::InFlight(task_id) => {
            web_sys::console::log_1(&format!("[SYNC] Task {} is being completed", task_id).into());
            checkbox.set_checked(false);
        }
        CheckboxAction::Complete(task_id) => send_complete_request(ctx, task_id, checkbox),
    }
}

fn send_complete_request(ctx: AppContext, task_id: i64, checkbox: HtmlInputElement) {
    web_sys::console::log_1(&format!("[SYNC] Completing task {}", task_id).into());

    // Locked while the request is out so a second click cannot resend it
    checkbox.set_disabled(true);
    ctx.begin_completion(task_id);

    spawn_local(async move {
        let result = commands::complete_task(task_id).await;
        let outcome = apply_completion_result(&ctx.document.get_untracked(), task_id, result);
        ctx.end_completion(task_id, outcome.completed);

        if outcome.completed {
            mark_checkbox_completed(&checkbox);
            if let Some(updated) = outcome.document {
                ctx.document.set(updated);
            }
        } else if outcome.uncheck() {
            // Undo the click so the preview matches the service
            checkbox.set_checked(false);
            checkbox.set_disabled(false);
        }
        ctx.notify(outcome.notice);
    });
}

/// A block of a completed task came back unchecked after an edit
fn restore_completed(ctx: AppContext, task_id: i64, checkbox: &HtmlInputElement) {
    mark_checkbox_completed(checkbox);
    if let Some(updated) = mark_task_completed(&ctx.document.get_untracked(), task_id) {
        ctx.document.set(updated);
    }
}

/// Strike through the task label and lock its checkbox
fn mark_checkbox_completed(checkbox: &HtmlInputElement) {
    if let Some(task_element) = checkbox.parent_element() {
        let label = task_element
            .query_selector("span")
            .ok()
            .flatten()
            .and_then(|span| span.dyn_into::<HtmlElement>().ok());
        if let Some(label) = label {
            let _ = label.style().set_property("text-decoration", "line-through");
        }
    }
    checkbox.set_checked(true);
    checkbox.set_disabled(true);
}
