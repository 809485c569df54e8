//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use lifeup_core::domain::{CompletionLedger, DetectionGate, SaveQueue};
use lifeup_core::Settings;

/// How long a notice stays on screen
const NOTICE_TIMEOUT_MS: u32 = 4_000;

/// Transient user-facing notification
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub text: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Markdown source of the note
    pub document: RwSignal<String>,
    /// Visible notices, oldest first - read
    pub notices: ReadSignal<Vec<Notice>>,
    /// Visible notices - write
    set_notices: WriteSignal<Vec<Notice>>,
    next_notice_id: StoredValue<u32>,
    /// A detection pass is in flight
    pub detecting: RwSignal<bool>,
    detection_gate: StoredValue<DetectionGate>,
    /// Bumped on every edit, used to debounce detection
    edit_generation: StoredValue<u32>,
    /// Tasks sent this session, never sent twice
    completions: StoredValue<CompletionLedger>,
    save_queue: StoredValue<SaveQueue>,
}

impl AppContext {
    pub fn new(initial_document: &str) -> Self {
        let (notices, set_notices) = signal(Vec::<Notice>::new());
        Self {
            document: RwSignal::new(initial_document.to_string()),
            notices,
            set_notices,
            next_notice_id: StoredValue::new(0),
            detecting: RwSignal::new(false),
            detection_gate: StoredValue::new(DetectionGate::default()),
            edit_generation: StoredValue::new(0),
            completions: StoredValue::new(CompletionLedger::default()),
            save_queue: StoredValue::new(SaveQueue::default()),
        }
    }

    /// Show a notice that disappears on its own
    pub fn notify(&self, text: impl Into<String>) {
        let text = text.into();
        web_sys::console::log_1(&format!("[APP] Notice: {}", text).into());

        self.next_notice_id.update_value(|id| *id += 1);
        let id = self.next_notice_id.get_value();
        self.set_notices.update(|notices| notices.push(Notice { id, text }));

        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            ctx.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u32) {
        self.set_notices.update(|notices| notices.retain(|n| n.id != id));
    }

    /// Record an edit and return its generation number
    pub fn bump_edit_generation(&self) -> u32 {
        self.edit_generation.update_value(|g| *g = g.wrapping_add(1));
        self.edit_generation.get_value()
    }

    pub fn edit_generation(&self) -> u32 {
        self.edit_generation.get_value()
    }

    /// Claim a detection pass. False if one is running; it will rescan.
    pub fn start_detection(&self) -> bool {
        let started = self
            .detection_gate
            .try_update_value(|gate| gate.try_start())
            .unwrap_or(false);
        if started {
            self.detecting.set(true);
        }
        started
    }

    /// End the current pass. True if another one was requested meanwhile.
    pub fn finish_detection_pass(&self) -> bool {
        let again = self
            .detection_gate
            .try_update_value(|gate| gate.finish_pass())
            .unwrap_or(false);
        if !again {
            self.detecting.set(false);
        }
        again
    }

    pub fn completions(&self) -> CompletionLedger {
        self.completions.get_value()
    }

    pub fn begin_completion(&self, task_id: i64) {
        self.completions.update_value(|ledger| {
            ledger.in_flight.insert(task_id);
        });
    }

    /// Settle a request; `completed` moves the task to the done set
    pub fn end_completion(&self, task_id: i64, completed: bool) {
        self.completions.update_value(|ledger| {
            ledger.in_flight.remove(&task_id);
            if completed {
                ledger.completed.insert(task_id);
            }
        });
    }

    /// Queue a settings write. True if the caller must drain the queue.
    pub fn queue_save(&self, settings: Settings) -> bool {
        self.save_queue
            .try_update_value(|queue| queue.push(settings))
            .unwrap_or(false)
    }

    pub fn next_save(&self) -> Option<Settings> {
        self.save_queue.try_update_value(|queue| queue.next()).flatten()
    }
}
