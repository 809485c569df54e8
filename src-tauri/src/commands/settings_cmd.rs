//! Settings Commands
//!
//! Tauri commands for reading and editing the connection settings.

use tauri::State;
use tracing::debug;

use crate::AppState;
use lifeup_core::{Settings, SettingsRepository};

/// Current settings (loaded at startup)
#[tauri::command]
pub async fn load_settings(state: State<'_, AppState>) -> Result<Settings, String> {
    Ok(state.settings.lock().await.clone())
}

/// Replace and persist the settings. Called on every edit of the form.
#[tauri::command]
pub async fn save_settings(
    state: State<'_, AppState>,
    host: String,
    port: String,
) -> Result<(), String> {
    let settings = Settings::new(host, port);

    // Held across the write so memory and file always agree
    let mut current = state.settings.lock().await;
    *current = settings.clone();
    state.store.save(&settings).await.map_err(|e| e.to_string())?;
    drop(current);

    debug!(host = %settings.host, port = %settings.port, "settings changed");
    Ok(())
}
