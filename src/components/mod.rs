//! UI Components
//!
//! Reusable Leptos components.

mod editor_pane;
mod notices;
mod settings_panel;
mod toolbar;

pub use editor_pane::EditorPane;
pub use notices::Notices;
pub use settings_panel::SettingsPanel;
pub use toolbar::Toolbar;
