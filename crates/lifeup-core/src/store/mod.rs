//! Settings Persistence
//!
//! Abstract settings storage plus the JSON file implementation the
//! desktop app uses.

mod json_store;

#[cfg(test)]
mod tests;

use async_trait::async_trait;

use crate::domain::Settings;
use crate::error::Result;

pub use json_store::JsonSettingsStore;

/// Where the connection settings live between runs
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Stored settings merged over the defaults
    async fn load(&self) -> Result<Settings>;

    async fn save(&self, settings: &Settings) -> Result<()>;
}
