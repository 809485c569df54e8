//! Editor flow rules
//!
//! What the editor does with each answer from the service, kept free of
//! DOM and async so it can be tested natively. The frontend only applies
//! the returned document and notice.

use std::collections::HashSet;

use super::markup::{mark_task_completed, render_task_list};
use super::settings::Settings;
use super::task::{parse_task_id, Task};
use super::trigger::{replace_trigger_line, TRIGGER};
use crate::error::{ErrorKind, ErrorReport};

/// Result of fetching the task list for one trigger line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    /// New note text, `None` to leave the note untouched
    pub document: Option<String>,
    pub notice: String,
}

/// Swap trigger line `line` of `document` for the fetched tasks.
///
/// `document` is the note as it is when the answer arrives, not when the
/// request left.
pub fn apply_fetch_result(
    document: &str,
    line: usize,
    result: Result<Vec<Task>, ErrorReport>,
) -> FetchOutcome {
    let tasks = match result {
        Ok(tasks) => tasks,
        Err(report) => {
            let notice = match report.kind {
                ErrorKind::Service => format!("Error fetching tasks: {}", report),
                _ => format!("Error: {}", report),
            };
            return FetchOutcome {
                document: None,
                notice,
            };
        }
    };

    match replace_trigger_line(document, line, &render_task_list(&tasks)) {
        Ok(updated) => FetchOutcome {
            document: Some(updated),
            notice: "Tasks loaded successfully".to_string(),
        },
        Err(_) => FetchOutcome {
            document: None,
            notice: format!("Please write \"{}\" in the current line to fetch tasks", TRIGGER),
        },
    }
}

/// What a checkbox `change` event asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckboxAction {
    Ignore,
    /// Already completed this session, only the markup needs restoring
    Restore(i64),
    /// A request for this task is still out, the click is dropped
    InFlight(i64),
    Complete(i64),
}

/// Snapshot of the input element that fired `change`
#[derive(Debug, Clone, Copy)]
pub struct CheckboxEvent<'a> {
    pub input_type: &'a str,
    pub checked: bool,
    pub disabled: bool,
    /// `data-task-id`, absent on foreign checkboxes
    pub task_id: Option<&'a str>,
}

/// Task ids the editor has already sent
#[derive(Debug, Clone, Default)]
pub struct CompletionLedger {
    pub completed: HashSet<i64>,
    pub in_flight: HashSet<i64>,
}

pub fn checkbox_action(event: CheckboxEvent<'_>, ledger: &CompletionLedger) -> CheckboxAction {
    if event.input_type != "checkbox" || !event.checked || event.disabled {
        return CheckboxAction::Ignore;
    }
    match event.task_id.and_then(parse_task_id) {
        Some(id) if ledger.completed.contains(&id) => CheckboxAction::Restore(id),
        Some(id) if ledger.in_flight.contains(&id) => CheckboxAction::InFlight(id),
        Some(id) => CheckboxAction::Complete(id),
        None => CheckboxAction::Ignore,
    }
}

/// Result of asking the service to complete a task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionOutcome {
    pub completed: bool,
    /// Note text with the task's blocks marked done
    pub document: Option<String>,
    pub notice: String,
}

impl CompletionOutcome {
    /// The clicked checkbox goes back to unchecked
    pub fn uncheck(&self) -> bool {
        !self.completed
    }
}

pub fn apply_completion_result(
    document: &str,
    task_id: i64,
    result: Result<(), ErrorReport>,
) -> CompletionOutcome {
    match result {
        Ok(()) => CompletionOutcome {
            completed: true,
            document: mark_task_completed(document, task_id),
            notice: format!("Task {} completed successfully.", task_id),
        },
        Err(report) => CompletionOutcome {
            completed: false,
            document: None,
            notice: format!("Error completing task: {}", report),
        },
    }
}

/// One detection pass at a time; a request made during a pass schedules
/// exactly one more.
#[derive(Debug, Default)]
pub struct DetectionGate {
    running: bool,
    rerun: bool,
}

impl DetectionGate {
    /// True if the caller owns the new pass. Otherwise a rerun is queued.
    pub fn try_start(&mut self) -> bool {
        if self.running {
            self.rerun = true;
            false
        } else {
            self.running = true;
            true
        }
    }

    /// End of a pass. True if the owner must scan again.
    pub fn finish_pass(&mut self) -> bool {
        if self.rerun {
            self.rerun = false;
            true
        } else {
            self.running = false;
            false
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

/// Settings writes in edit order, collapsing the ones still waiting.
///
/// Only one write is in flight; the newest queued value follows it, so the
/// last edit is always the last value written.
#[derive(Debug, Default)]
pub struct SaveQueue {
    pending: Option<Settings>,
    writing: bool,
}

impl SaveQueue {
    /// Queue `settings`. True if the caller must start draining.
    pub fn push(&mut self, settings: Settings) -> bool {
        self.pending = Some(settings);
        if self.writing {
            false
        } else {
            self.writing = true;
            true
        }
    }

    /// Next value to write; `None` ends the drain.
    pub fn next(&mut self) -> Option<Settings> {
        let next = self.pending.take();
        if next.is_none() {
            self.writing = false;
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::find_trigger_lines;

    fn tasks() -> Vec<Task> {
        vec![Task::new(7, "Read", 0), Task::new(8, "Run", 0)]
    }

    #[test]
    fn test_fetch_success_replaces_trigger() {
        let outcome = apply_fetch_result("# Day\n'life up'\nend", 1, Ok(tasks()));
        let document = outcome.document.unwrap();

        assert_eq!(outcome.notice, "Tasks loaded successfully");
        assert!(document.starts_with("# Day\n"));
        assert!(document.ends_with("\nend"));
        assert!(document.contains("data-task-id=\"7\""));
        assert!(!document.contains("'life up'"));
    }

    #[test]
    fn test_fetch_service_error_keeps_document() {
        let report = ErrorReport::new(ErrorKind::Service, "LifeUp is locked");
        let outcome = apply_fetch_result("'life up'", 0, Err(report));
        assert_eq!(outcome.document, None);
        assert_eq!(outcome.notice, "Error fetching tasks: LifeUp is locked");
    }

    #[test]
    fn test_fetch_other_errors_keep_document() {
        for kind in [ErrorKind::Network, ErrorKind::InvalidSettings, ErrorKind::Internal] {
            let report = ErrorReport::new(kind, "connection refused");
            let outcome = apply_fetch_result("'life up'", 0, Err(report));
            assert_eq!(outcome.document, None);
            assert_eq!(outcome.notice, "Error: connection refused");
        }
    }

    #[test]
    fn test_fetch_after_trigger_moved() {
        // the user edited the line while the request was in flight
        let outcome = apply_fetch_result("'life up' later", 0, Ok(tasks()));
        assert_eq!(outcome.document, None);
        assert_eq!(
            outcome.notice,
            "Please write \"'life up'\" in the current line to fetch tasks"
        );
    }

    #[test]
    fn test_bottom_up_replaces_every_trigger() {
        let mut document = "'life up'\nmiddle\n'life up'\n\n'life up'".to_string();
        let triggers = find_trigger_lines(&document);
        assert_eq!(triggers, vec![0, 2, 4]);

        for line in triggers.into_iter().rev() {
            let outcome = apply_fetch_result(&document, line, Ok(tasks()));
            document = outcome.document.expect("trigger still in place");
        }

        assert!(find_trigger_lines(&document).is_empty());
        assert_eq!(document.matches("data-task-id=\"7\"").count(), 3);
        assert!(document.contains("\nmiddle\n"));
    }

    #[test]
    fn test_top_down_would_lose_triggers() {
        // replacing line 0 first shifts line 2 away
        let document = "'life up'\nmiddle\n'life up'";
        let first = apply_fetch_result(document, 0, Ok(tasks())).document.unwrap();
        assert!(apply_fetch_result(&first, 2, Ok(tasks())).document.is_none());
    }

    fn event<'a>(checked: bool, task_id: Option<&'a str>) -> CheckboxEvent<'a> {
        CheckboxEvent {
            input_type: "checkbox",
            checked,
            disabled: false,
            task_id,
        }
    }

    #[test]
    fn test_checking_a_task_completes_it() {
        let done = CompletionLedger::default();
        assert_eq!(checkbox_action(event(true, Some("42")), &done), CheckboxAction::Complete(42));
    }

    #[test]
    fn test_uncheck_sends_nothing() {
        let done = CompletionLedger::default();
        assert_eq!(checkbox_action(event(false, Some("42")), &done), CheckboxAction::Ignore);
    }

    #[test]
    fn test_foreign_inputs_send_nothing() {
        let done = CompletionLedger::default();
        assert_eq!(checkbox_action(event(true, None), &done), CheckboxAction::Ignore);
        assert_eq!(checkbox_action(event(true, Some("abc")), &done), CheckboxAction::Ignore);

        let text = CheckboxEvent {
            input_type: "text",
            ..event(true, Some("42"))
        };
        assert_eq!(checkbox_action(text, &done), CheckboxAction::Ignore);

        let pending = CheckboxEvent {
            disabled: true,
            ..event(true, Some("42"))
        };
        assert_eq!(checkbox_action(pending, &done), CheckboxAction::Ignore);
    }

    #[test]
    fn test_completed_task_is_not_sent_again() {
        let done = CompletionLedger {
            completed: [42].into_iter().collect(),
            in_flight: [43].into_iter().collect(),
        };
        assert_eq!(checkbox_action(event(true, Some("42")), &done), CheckboxAction::Restore(42));
        assert_eq!(checkbox_action(event(true, Some("43")), &done), CheckboxAction::InFlight(43));
        assert_eq!(checkbox_action(event(true, Some("44")), &done), CheckboxAction::Complete(44));
    }

    #[test]
    fn test_completion_success_marks_document() {
        let document = render_task_list(&tasks());
        let outcome = apply_completion_result(&document, 7, Ok(()));

        assert!(outcome.completed);
        assert!(!outcome.uncheck());
        assert_eq!(outcome.notice, "Task 7 completed successfully.");
        let marked = outcome.document.unwrap();
        assert!(marked.contains("data-task-id=\"7\" class=\"complete-task-checkbox\" checked disabled>"));
        assert!(marked.contains("data-task-id=\"8\" class=\"complete-task-checkbox\">"));
    }

    #[test]
    fn test_completion_failure_unchecks() {
        let document = render_task_list(&tasks());
        let report = ErrorReport::new(ErrorKind::Network, "timed out");
        let outcome = apply_completion_result(&document, 7, Err(report));

        assert!(outcome.uncheck());
        assert_eq!(outcome.document, None);
        assert_eq!(outcome.notice, "Error completing task: timed out");
    }

    #[test]
    fn test_gate_queues_one_rerun() {
        let mut gate = DetectionGate::default();
        assert!(gate.try_start());
        assert!(!gate.try_start());
        assert!(!gate.try_start());

        assert!(gate.finish_pass());
        assert!(gate.is_running());
        assert!(!gate.finish_pass());
        assert!(!gate.is_running());
    }

    #[test]
    fn test_gate_without_requests_runs_once() {
        let mut gate = DetectionGate::default();
        assert!(gate.try_start());
        assert!(!gate.finish_pass());
        assert!(gate.try_start());
    }

    #[test]
    fn test_save_queue_writes_latest_last() {
        let mut queue = SaveQueue::default();
        let mut written = Vec::new();

        assert!(queue.push(Settings::new("1", "13276")));
        // first write in flight while the user keeps typing
        let first = queue.next().unwrap();
        assert!(!queue.push(Settings::new("19", "13276")));
        assert!(!queue.push(Settings::new("192", "13276")));
        written.push(first.host);

        while let Some(settings) = queue.next() {
            written.push(settings.host);
        }
        assert_eq!(written, vec!["1", "192"]);

        // drained, the next edit starts a new writer
        assert!(queue.push(Settings::new("1920", "13276")));
    }
}
