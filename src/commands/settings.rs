//! Settings Command Wrappers

use wasm_bindgen::prelude::*;
use serde::Serialize;

use lifeup_core::Settings;
use super::{error_message, invoke};

#[derive(Serialize)]
struct SaveSettingsArgs<'a> {
    host: &'a str,
    port: &'a str,
}

pub async fn load_settings() -> Result<Settings, String> {
    let result = invoke("load_settings", JsValue::NULL).await.map_err(error_message)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn save_settings(host: &str, port: &str) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&SaveSettingsArgs { host, port }).map_err(|e| e.to_string())?;
    invoke("save_settings", js_args).await.map_err(error_message)?;
    Ok(())
}
