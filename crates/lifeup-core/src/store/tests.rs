//! Settings store tests on a temporary directory.

use super::{JsonSettingsStore, SettingsRepository};
use crate::domain::Settings;
use crate::error::BridgeError;
use std::sync::Arc;
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> JsonSettingsStore {
    JsonSettingsStore::new(dir.path().join("config").join("settings.json"))
}

#[tokio::test]
async fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let settings = store.load().await.expect("Load failed");
    assert_eq!(settings, Settings::default());
}

#[tokio::test]
async fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let settings = Settings::new("192.168.1.42", "13277");
    store.save(&settings).await.expect("Save failed");
    assert!(store.path().exists());

    let loaded = store.load().await.expect("Load failed");
    assert_eq!(loaded, settings);
}

#[tokio::test]
async fn test_save_overwrites_previous_value() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.save(&Settings::new("10.0.0.1", "1")).await.unwrap();
    store.save(&Settings::new("10.0.0.2", "2")).await.unwrap();

    let loaded = store.load().await.unwrap();
    assert_eq!(loaded.host, "10.0.0.2");
    assert_eq!(loaded.port, "2");
}

#[tokio::test]
async fn test_empty_values_are_persisted() {
    // The form saves every keystroke, including a cleared field
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.save(&Settings::new("", "13276")).await.unwrap();
    assert_eq!(store.load().await.unwrap().host, "");
}

#[tokio::test]
async fn test_corrupt_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    std::fs::write(store.path(), "{not json").unwrap();

    let err = store.load().await.unwrap_err();
    assert!(matches!(err, BridgeError::Serialization(_)), "got: {err:?}");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_saves_leave_valid_file() {
    // One save per typed prefix, the way the settings form fires them
    let dir = TempDir::new().unwrap();
    let store = Arc::new(store_in(&dir));
    let typed = "192.168.100.200";
    let prefixes: Vec<String> = (1..=typed.len()).map(|n| typed[..n].to_string()).collect();

    for _ in 0..20 {
        let handles: Vec<_> = prefixes
            .iter()
            .map(|host| {
                let store = store.clone();
                let settings = Settings::new(host.clone(), "13276");
                tokio::spawn(async move { store.save(&settings).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().expect("Save failed");
        }

        let loaded = store.load().await.expect("File corrupted by concurrent saves");
        assert!(prefixes.contains(&loaded.host), "unexpected host {:?}", loaded.host);
        assert_eq!(loaded.port, "13276");
    }

    // no temp file left behind
    let leftovers: Vec<_> = std::fs::read_dir(store.path().parent().unwrap())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name() != "settings.json")
        .collect();
    assert!(leftovers.is_empty());
}
