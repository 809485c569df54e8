//! LifeUp Bridge Frontend Entry Point

mod app;
mod commands;
mod completion;
mod components;
mod context;
mod markdown;
mod sync;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
