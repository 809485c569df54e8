//! Trigger line scanning
//!
//! A line whose trimmed content is exactly [`TRIGGER`] asks for the task
//! list to be rendered in its place.

use crate::error::{BridgeError, Result};

/// Literal the user writes on its own line (quotes included)
pub const TRIGGER: &str = "'life up'";

pub fn is_trigger(line: &str) -> bool {
    line.trim() == TRIGGER
}

/// Zero-based indices of every trigger line, top to bottom
pub fn find_trigger_lines(text: &str) -> Vec<usize> {
    text.split('\n')
        .enumerate()
        .filter(|(_, line)| is_trigger(line))
        .map(|(index, _)| index)
        .collect()
}

/// Replace the content of trigger line `line` with `replacement`.
///
/// The line's newline (and a trailing `\r`) stays in place. Fails with
/// [`BridgeError::TriggerMoved`] if that line is gone or no longer holds
/// the trigger.
pub fn replace_trigger_line(text: &str, line: usize, replacement: &str) -> Result<String> {
    let mut start = 0;

    for (index, segment) in text.split('\n').enumerate() {
        if index == line {
            if !is_trigger(segment) {
                break;
            }
            let content = segment.strip_suffix('\r').unwrap_or(segment);
            let end = start + content.len();

            let mut output = String::with_capacity(text.len() - content.len() + replacement.len());
            output.push_str(&text[..start]);
            output.push_str(replacement);
            output.push_str(&text[end..]);
            return Ok(output);
        }
        start += segment.len() + 1;
    }

    Err(BridgeError::TriggerMoved { line })
}
