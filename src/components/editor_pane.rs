//! Editor Pane
//!
//! Note source on the left, rendered preview on the right. The preview
//! hosts the task checkboxes and listens for their changes.

use leptos::prelude::*;

use crate::completion;
use crate::context::AppContext;
use crate::markdown;
use crate::sync;

/// Side-by-side editor and preview
#[component]
pub fn EditorPane() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Rendered HTML for preview
    let rendered_html = move || markdown::render_document(&ctx.document.get());

    view! {
        <div class="editor-body">
            // Left: Edit area
            <div class="edit-pane">
                <div class="pane-header">"Note"</div>
                <textarea
                    class="note-textarea"
                    prop:value=move || ctx.document.get()
                    on:input=move |ev| {
                        ctx.document.set(event_target_value(&ev));
                        sync::schedule_detect(ctx);
                    }
                    placeholder="Write 'life up' on its own line to load your tasks..."
                ></textarea>
            </div>

            // Right: Preview area
            <div class="preview-pane">
                <div class="pane-header">"Preview"</div>
                <div
                    class="preview-content"
                    inner_html=rendered_html
                    on:change=move |ev| completion::on_checkbox_change(ctx, ev)
                ></div>
            </div>
        </div>
    }
}
