//! Settings Panel
//!
//! IP and port of the LifeUp service. Every edit is saved, in order.

use leptos::prelude::*;
use leptos::task::spawn_local;

use lifeup_core::domain::{DEFAULT_HOST, DEFAULT_PORT};
use lifeup_core::Settings;

use crate::commands;
use crate::context::AppContext;

#[component]
pub fn SettingsPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (host, set_host) = signal(String::new());
    let (port, set_port) = signal(String::new());

    // Load settings on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::load_settings().await {
                Ok(settings) => {
                    set_host.set(settings.host);
                    set_port.set(settings.port);
                }
                Err(e) => ctx.notify(format!("Error loading settings: {}", e)),
            }
        });
    });

    // One write at a time, newest value last
    let save = move || {
        let settings = Settings::new(host.get_untracked(), port.get_untracked());
        if !ctx.queue_save(settings) {
            return;
        }
        spawn_local(async move {
            while let Some(settings) = ctx.next_save() {
                if let Err(e) = commands::save_settings(&settings.host, &settings.port).await {
                    ctx.notify(format!("Error saving settings: {}", e));
                }
            }
        });
    };

    let current = move || Settings::new(host.get(), port.get());

    view! {
        <div class="settings-panel">
            <h2>"Settings to connect with Life Up API"</h2>

            <div class="setting-item">
                <div class="setting-info">
                    <div class="setting-name">"IP"</div>
                    <div class="setting-desc">"Local IP of your phone"</div>
                </div>
                <input
                    type="text"
                    placeholder=DEFAULT_HOST
                    prop:value=move || host.get()
                    on:input=move |ev| {
                        set_host.set(event_target_value(&ev));
                        save();
                    }
                />
            </div>

            <div class="setting-item">
                <div class="setting-info">
                    <div class="setting-name">"Port"</div>
                    <div class="setting-desc">"PORT of your life up server, default is 13276"</div>
                </div>
                <input
                    type="text"
                    placeholder=DEFAULT_PORT
                    prop:value=move || port.get()
                    on:input=move |ev| {
                        set_port.set(event_target_value(&ev));
                        save();
                    }
                />
            </div>

            <div class="setting-endpoint">
                {move || match current().validate() {
                    Ok(()) => format!("Tasks are read from {}", current().tasks_url()),
                    Err(e) => e.to_string(),
                }}
            </div>
        </div>
    }
}
