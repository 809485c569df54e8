//! Trigger Detection
//!
//! Scans the note for `'life up'` lines and swaps each one for the task
//! list fetched from LifeUp. Runs on the manual command and, debounced,
//! after edits.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use lifeup_core::domain::{apply_fetch_result, find_trigger_lines};

use crate::commands;
use crate::context::AppContext;

/// Quiet time after the last keystroke before scanning
const DETECT_DEBOUNCE_MS: u32 = 300;

/// Debounced detection for document-change events
pub fn schedule_detect(ctx: AppContext) {
    let generation = ctx.bump_edit_generation();
    spawn_local(async move {
        TimeoutFuture::new(DETECT_DEBOUNCE_MS).await;
        if ctx.edit_generation() == generation {
            detect_life_up(ctx);
        }
    });
}

/// Replace every trigger line currently in the note.
///
/// Lines are handled bottom-up so replacing one never shifts the index
/// of another still waiting. A request made during a pass triggers one
/// more scan once it ends.
pub fn detect_life_up(ctx: AppContext) {
    if !ctx.detecting.get_untracked() && find_trigger_lines(&ctx.document.get_untracked()).is_empty() {
        return;
    }
    if !ctx.start_detection() {
        web_sys::console::log_1(&"[SYNC] Detection running, rescan queued".into());
        return;
    }

    spawn_local(async move {
        loop {
            let triggers = find_trigger_lines(&ctx.document.get_untracked());
            for line in triggers.into_iter().rev() {
                replace_life_up(ctx, line).await;
            }
            if !ctx.finish_detection_pass() {
                break;
            }
            web_sys::console::log_1(&"[SYNC] Rescanning after queued request".into());
        }
    });
}

async fn replace_life_up(ctx: AppContext, line: usize) {
    web_sys::console::log_1(&format!("[SYNC] Fetching tasks for line {}", line).into());

    let result = commands::fetch_tasks().await;
    if let Ok(tasks) = &result {
        web_sys::console::log_1(&format!("[SYNC] Fetched {} tasks", tasks.len()).into());
    }

    // Re-read: the user may have typed while the request was in flight
    let outcome = apply_fetch_result(&ctx.document.get_untracked(), line, result);
    if let Some(updated) = outcome.document {
        ctx.document.set(updated);
    }
    ctx.notify(outcome.notice);
}
