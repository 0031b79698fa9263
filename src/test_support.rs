use crate::locks::{FileLockStore, Lock};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tempfile::TempDir;

/// A temp dir holding an empty `locks.json`.
///
/// The `TempDir` must outlive the path; dropping it removes the file.
pub(crate) fn create_state_file() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("locks.json");
    std::fs::write(&path, "").unwrap();
    (temp_dir, path)
}

/// A file-backed store over a fresh, empty state file.
pub(crate) fn create_store() -> (TempDir, FileLockStore) {
    let (temp_dir, path) = create_state_file();
    (temp_dir, FileLockStore::new(path))
}

/// Build a lock record from a key and `(requestor, count)` pairs.
pub(crate) fn lock_of(key: &str, holds: &[(&str, u64)]) -> Lock {
    Lock {
        key: key.to_string(),
        locked_by: holds
            .iter()
            .map(|(requestor, count)| (requestor.to_string(), *count))
            .collect::<BTreeMap<_, _>>(),
    }
}
