//! Analysis store integration tests.

use std::path::PathBuf;

use jc_store::{AnalysisManifest, AnalysisStore, StoreError};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("{prefix}_{}", uuid::Uuid::new_v4()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn save_load_delete_cycle() {
    let dir = unique_temp_dir("jc_store_smoke");
    let store = AnalysisStore::new(dir.clone()).unwrap();

    let manifest = AnalysisManifest::new(
        "abc123".to_string(),
        "part-1".to_string(),
        "0.1.0".to_string(),
    );
    let payload = r#"{"segments":[],"isobars":[]}"#;

    assert!(!store.has_analysis("abc123"));
    store.save_analysis(&manifest, payload).unwrap();
    assert!(store.has_analysis("abc123"));

    let loaded_manifest = store.load_manifest("abc123").unwrap();
    assert_eq!(loaded_manifest, manifest);
    assert_eq!(store.load_payload("abc123").unwrap(), payload);

    store.delete_analysis("abc123").unwrap();
    assert!(!store.has_analysis("abc123"));
    assert!(matches!(
        store.load_payload("abc123"),
        Err(StoreError::AnalysisNotFound { .. })
    ));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_analysis_reports_its_key() {
    let dir = unique_temp_dir("jc_store_missing");
    let store = AnalysisStore::new(dir.clone()).unwrap();

    let err = store.load_manifest("nope").unwrap_err();
    assert!(err.to_string().contains("nope"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn overwriting_a_key_replaces_the_payload() {
    let dir = unique_temp_dir("jc_store_overwrite");
    let store = AnalysisStore::new(dir.clone()).unwrap();

    let manifest = AnalysisManifest::new(
        "key1".to_string(),
        "part-1".to_string(),
        "0.1.0".to_string(),
    );
    store.save_analysis(&manifest, "first").unwrap();
    store.save_analysis(&manifest, "second").unwrap();
    assert_eq!(store.load_payload("key1").unwrap(), "second");

    let _ = std::fs::remove_dir_all(&dir);
}
