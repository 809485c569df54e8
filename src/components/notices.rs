//! Notices
//!
//! Stack of transient notifications; click one to dismiss it early.

use leptos::prelude::*;

use crate::context::{AppContext, Notice};

#[component]
pub fn Notices() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="notice-container">
            <For
                each=move || ctx.notices.get()
                key=|notice| notice.id
                children=move |notice: Notice| {
                    let id = notice.id;
                    view! {
                        <div class="notice" on:click=move |_| ctx.dismiss(id)>
                            {notice.text}
                        </div>
                    }
                }
            />
        </div>
    }
}
