use std::fs;

use rulesplit_engine::{
    ensure_dir, ArtifactStore, FreshnessChecker, FsArtifactStore, StoreError, SystemClock,
};
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn creates_missing_directory() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("out");
    assert!(!new_dir.exists());
    ensure_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn write_replaces_existing_artifact() {
    let temp = TempDir::new().unwrap();
    let store = FsArtifactStore::new(temp.path().join("cache"));

    store.write("raw_cache.txt", b"hello").unwrap();
    let path = store.path_of("raw_cache.txt").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "hello");

    store.write("raw_cache.txt", b"world").unwrap();
    assert_eq!(store.read("raw_cache.txt").unwrap(), b"world");
}

#[test]
fn missing_artifact_has_no_modified_time() {
    let temp = TempDir::new().unwrap();
    let store = FsArtifactStore::new(temp.path());
    assert!(store.modified("absent.txt").unwrap().is_none());
    assert!(matches!(
        store.read("absent.txt"),
        Err(StoreError::NotFound(name)) if name == "absent.txt"
    ));
}

#[test]
fn written_file_is_fresh_by_system_clock() {
    let temp = TempDir::new().unwrap();
    let store = FsArtifactStore::new(temp.path());
    let checker = FreshnessChecker::with_default_window(Arc::new(SystemClock));

    assert!(!checker.is_fresh(&store, "rules_1.txt"));
    store.write("rules_1.txt", b"x\n").unwrap();
    assert!(checker.is_fresh(&store, "rules_1.txt"));
}

#[test]
fn no_partial_file_on_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let store = FsArtifactStore::new(file_path.clone());
    let result = store.write("rules_1.txt", b"data");
    assert!(result.is_err());
    assert!(!file_path.with_file_name("rules_1.txt").exists());
}

#[test]
fn names_cannot_escape_the_directory() {
    let temp = TempDir::new().unwrap();
    let store = FsArtifactStore::new(temp.path().join("inner"));
    assert!(matches!(
        store.write("../escape.txt", b"x"),
        Err(StoreError::InvalidName(_))
    ));
    assert!(!temp.path().join("escape.txt").exists());
}
