//! Toolbar Component
//!
//! Manual "detect" command and the settings toggle.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::sync;

#[component]
pub fn Toolbar(
    show_settings: ReadSignal<bool>,
    set_show_settings: WriteSignal<bool>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="toolbar">
            <span class="toolbar-title">"LifeUp Bridge"</span>
            <div class="toolbar-controls">
                <button
                    class="toolbar-btn detect"
                    title="Ctrl+Shift+L"
                    disabled=move || ctx.detecting.get()
                    on:click=move |_| sync::detect_life_up(ctx)
                >
                    {move || if ctx.detecting.get() { "Fetching tasks..." } else { "Detect \"life up\"" }}
                </button>
                <button
                    class=move || if show_settings.get() { "toolbar-btn settings active" } else { "toolbar-btn settings" }
                    on:click=move |_| set_show_settings.update(|v| *v = !*v)
                >
                    "Settings"
                </button>
            </div>
        </div>
    }
}
