//! LifeUp Bridge Frontend App
//!
//! Toolbar, optional settings panel, note editor and notices.

use leptos::ev;
use leptos::prelude::*;

use crate::components::{EditorPane, Notices, SettingsPanel, Toolbar};
use crate::context::AppContext;
use crate::sync;

const INITIAL_DOCUMENT: &str = "# Today\n\n";

#[component]
pub fn App() -> impl IntoView {
    let (show_settings, set_show_settings) = signal(false);

    // Provide context to all children
    let ctx = AppContext::new(INITIAL_DOCUMENT);
    provide_context(ctx);

    // Ctrl+Shift+L runs the detect command
    let _shortcut = window_event_listener(ev::keydown, move |ev| {
        if ev.ctrl_key() && ev.shift_key() && ev.key().eq_ignore_ascii_case("l") {
            ev.prevent_default();
            sync::detect_life_up(ctx);
        }
    });

    view! {
        <div class="app-layout">
            <Toolbar show_settings=show_settings set_show_settings=set_show_settings />

            <Show when=move || show_settings.get()>
                <SettingsPanel />
            </Show>

            <main class="main-content">
                <EditorPane />
            </main>

            <Notices />
        </div>
    }
}
