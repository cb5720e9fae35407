//! Tests for the local session store.

use tempfile::TempDir;

use tictactoe_scoreboard::SessionStore;

fn setup_store() -> (TempDir, SessionStore) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = SessionStore::new(dir.path().join("session.toml"));
    (dir, store)
}

#[test]
fn test_missing_file_means_no_session() {
    let (_dir, store) = setup_store();
    assert_eq!(store.load().expect("Load failed"), None);
}

#[test]
fn test_save_then_load() {
    let (_dir, store) = setup_store();
    store.save("65f0c0ffee").expect("Save failed");
    assert_eq!(
        store.load().expect("Load failed").as_deref(),
        Some("65f0c0ffee")
    );
}

#[test]
fn test_save_replaces_previous_match() {
    let (_dir, store) = setup_store();
    store.save("first").expect("Save failed");
    store.save("second").expect("Save failed");
    assert_eq!(store.load().expect("Load failed").as_deref(), Some("second"));
}

#[test]
fn test_clear_forgets_match() {
    let (_dir, store) = setup_store();
    store.save("m1").expect("Save failed");
    store.clear().expect("Clear failed");
    assert_eq!(store.load().expect("Load failed"), None);
}

#[test]
fn test_clear_without_session_is_ok() {
    let (_dir, store) = setup_store();
    assert!(store.clear().is_ok());
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = SessionStore::new(dir.path().join("nested/deeper/session.toml"));
    store.save("m1").expect("Save failed");
    assert!(store.path().exists());
}

#[test]
fn test_malformed_file_is_an_error() {
    let (_dir, store) = setup_store();
    std::fs::write(store.path(), "not = [valid").expect("Write failed");
    let err = store.load().expect_err("Expected parse failure");
    assert!(err.message.contains("parse"));
}
