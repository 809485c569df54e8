//! LifeUp Bridge Backend
//!
//! Layered architecture:
//! - lifeup-core: task model, HTTP client, settings store
//! - commands: Tauri command handlers
//! - logging: tracing subscriber setup

use tauri::Manager;
use tokio::sync::Mutex;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;

use lifeup_core::{JsonSettingsStore, LifeUpClient, Settings, SettingsRepository};

mod commands;
mod logging;

const SETTINGS_FILE: &str = "settings.json";

/// Application state shared across commands
pub struct AppState {
    /// Current connection settings; cloned out before each request
    pub settings: Mutex<Settings>,
    pub store: Box<dyn SettingsRepository>,
    pub client: LifeUpClient,
    _log_guard: Option<WorkerGuard>,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let result = tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let log_guard = match logging::init_logging(&app.path().app_log_dir()?) {
                Ok(guard) => Some(guard),
                Err(e) => {
                    eprintln!("Failed to init logging: {}", e);
                    None
                }
            };

            let store = JsonSettingsStore::new(app.path().app_config_dir()?.join(SETTINGS_FILE));
            let settings = tauri::async_runtime::block_on(store.load()).unwrap_or_else(|e| {
                warn!(path = %store.path().display(), error = %e, "failed to load settings, using defaults");
                Settings::default()
            });
            info!(host = %settings.host, port = %settings.port, "settings loaded");

            app.manage(AppState {
                settings: Mutex::new(settings),
                store: Box::new(store),
                client: LifeUpClient::new()?,
                _log_guard: log_guard,
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Settings
            commands::load_settings,
            commands::save_settings,
            // LifeUp API
            commands::fetch_tasks,
            commands::complete_task,
        ])
        .run(tauri::generate_context!());

    if let Err(e) = result {
        eprintln!("error while running tauri application: {}", e);
        std::process::exit(1);
    }
}
