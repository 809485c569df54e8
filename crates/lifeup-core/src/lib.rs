//! LifeUp Bridge Core
//!
//! Shared between the desktop backend and the wasm frontend:
//! - domain: tasks, settings, trigger lines, checkbox markup
//! - client: HTTP calls to the LifeUp service (`native` feature)
//! - store: settings persistence (`native` feature)

pub mod domain;
mod error;

#[cfg(feature = "native")]
pub mod client;
#[cfg(feature = "native")]
pub mod store;

pub use domain::{Settings, Task};
pub use error::{BridgeError, ErrorKind, ErrorReport, Result};

#[cfg(feature = "native")]
pub use client::LifeUpClient;
#[cfg(feature = "native")]
pub use store::{JsonSettingsStore, SettingsRepository};
