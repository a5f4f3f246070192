use std::fs;

use relfetch_cache::{CacheStore, is_valid};
use tempfile::tempdir;

#[test]
fn test_prepare_creates_missing_root() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("nested").join("installer-cache");
    let store = CacheStore::new(&root);

    let path = store.prepare("app-2.0-x86_64.txz").unwrap();

    assert!(root.is_dir());
    assert_eq!(path, root.join("app-2.0-x86_64.txz"));
    assert!(!path.exists());
}

#[test]
fn test_prepare_is_idempotent() {
    let dir = tempdir().unwrap();
    let store = CacheStore::new(dir.path());
    fs::write(dir.path().join("new-2.0.txz"), b"data").unwrap();

    store.prepare("new-2.0.txz").unwrap();
    store.prepare("new-2.0.txz").unwrap();

    assert_eq!(fs::read(dir.path().join("new-2.0.txz")).unwrap(), b"data");
}

#[test]
fn test_eviction_keeps_only_target() {
    let dir = tempdir().unwrap();
    let store = CacheStore::new(dir.path());
    fs::write(dir.path().join("old-1.0.txz"), b"old").unwrap();
    fs::write(dir.path().join("new-2.0.txz"), b"new").unwrap();

    store.prepare("new-2.0.txz").unwrap();

    let mut names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["new-2.0.txz".to_string()]);
    assert_eq!(fs::read(dir.path().join("new-2.0.txz")).unwrap(), b"new");
}

#[test]
fn test_eviction_keeps_names_containing_target() {
    let dir = tempdir().unwrap();
    let store = CacheStore::new(dir.path());
    fs::write(dir.path().join("new-2.0.txz.part"), b"partial").unwrap();
    fs::write(dir.path().join("other.dmg"), b"other").unwrap();

    let removed = store.evict("new-2.0.txz").unwrap();

    assert_eq!(removed, vec![dir.path().join("other.dmg")]);
    assert!(dir.path().join("new-2.0.txz.part").exists());
}

#[test]
fn test_eviction_leaves_directories_alone() {
    let dir = tempdir().unwrap();
    let store = CacheStore::new(dir.path());
    let nested = dir.path().join("Documents").join("taxes");
    fs::create_dir_all(&nested).unwrap();
    fs::write(nested.join("2025.pdf"), b"keep").unwrap();
    fs::write(dir.path().join("app-0.9-x86_64.txz"), b"old").unwrap();

    let removed = store.evict("app-1.0-x86_64.txz").unwrap();

    assert_eq!(removed, vec![dir.path().join("app-0.9-x86_64.txz")]);
    assert_eq!(fs::read(nested.join("2025.pdf")).unwrap(), b"keep");
}

#[test]
fn test_prepared_entry_validity() {
    let dir = tempdir().unwrap();
    let store = CacheStore::new(dir.path());
    let path = store.prepare("app.dmg").unwrap();
    assert!(!is_valid(&path, 1000));

    fs::write(&path, vec![0u8; 1000]).unwrap();
    assert!(is_valid(&path, 1000));
    assert!(!is_valid(&path, 999));
}
