//! JSON settings file

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use super::SettingsRepository;
use crate::domain::Settings;
use crate::error::Result;

pub struct JsonSettingsStore {
    path: PathBuf,
    /// One writer at a time; each write lands in a temp file first
    write_lock: Mutex<()>,
}

impl JsonSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl SettingsRepository for JsonSettingsStore {
    async fn load(&self) -> Result<Settings> {
        if !tokio::fs::try_exists(&self.path).await? {
            debug!(path = %self.path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }

        let json = tokio::fs::read_to_string(&self.path).await?;
        let settings = serde_json::from_str(&json)?;
        Ok(settings)
    }

    async fn save(&self, settings: &Settings) -> Result<()> {
        let json = serde_json::to_string_pretty(settings)?;
        let _guard = self.write_lock.lock().await;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        // rename replaces the file in one step, readers never see a partial write
        let temp = self.temp_path();
        tokio::fs::write(&temp, json).await?;
        tokio::fs::rename(&temp, &self.path).await?;
        debug!(path = %self.path.display(), "settings saved");
        Ok(())
    }
}
