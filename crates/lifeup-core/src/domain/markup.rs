//! Task list markup
//!
//! HTML injected into the document in place of a trigger line. Each task
//! gets its own block so markdown renderers keep it as raw HTML.

use super::task::Task;

/// Class carried by every injected checkbox
pub const CHECKBOX_CLASS: &str = "complete-task-checkbox";
/// Attribute holding the task id on each checkbox
pub const TASK_ID_ATTR: &str = "data-task-id";
/// `dataset` key of [`TASK_ID_ATTR`]
pub const TASK_ID_KEY: &str = "taskId";

const LABEL_OPEN: &str = "<span>";
const LABEL_DONE: &str = "<span style=\"text-decoration: line-through\">";

/// One checkbox block per task, joined by newlines. Empty for no tasks.
pub fn render_task_list(tasks: &[Task]) -> String {
    tasks.iter().map(render_task).collect::<Vec<_>>().join("\n")
}

fn render_task(task: &Task) -> String {
    format!(
        "\n<div id=\"task-{id}\">\n  {checkbox}\n  {label}{name}</span>\n</div>\n",
        id = task.id,
        checkbox = checkbox_tag(task.id, ""),
        label = LABEL_OPEN,
        name = escape_html(&task.name_extended),
    )
}

fn checkbox_tag(task_id: i64, extra: &str) -> String {
    format!(
        "<input type=\"checkbox\" {attr}=\"{id}\" class=\"{class}\"{extra}>",
        attr = TASK_ID_ATTR,
        id = task_id,
        class = CHECKBOX_CLASS,
        extra = extra,
    )
}

/// Rewrite every block of `task_id` as completed: checkbox checked and
/// disabled, label struck through. `None` if the note holds no such
/// unfinished checkbox.
pub fn mark_task_completed(text: &str, task_id: i64) -> Option<String> {
    let open = checkbox_tag(task_id, "");
    if !text.contains(&open) {
        return None;
    }
    let done = checkbox_tag(task_id, " checked disabled");

    let mut output = String::with_capacity(text.len() + 64);
    let mut rest = text;
    while let Some(pos) = rest.find(&open) {
        output.push_str(&rest[..pos]);
        output.push_str(&done);
        rest = &rest[pos + open.len()..];

        // label sits after the checkbox inside the same block
        let block_end = rest.find("</div>").unwrap_or(rest.len());
        if let Some(label) = rest[..block_end].find(LABEL_OPEN) {
            output.push_str(&rest[..label]);
            output.push_str(LABEL_DONE);
            rest = &rest[label + LABEL_OPEN.len()..];
        }
    }
    output.push_str(rest);
    Some(output)
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
