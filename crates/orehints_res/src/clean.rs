//! Removal of previously generated files.
//!
//! Only files carrying the generated-file marker are deleted; hand-written
//! files sharing the tree are left alone. Directory deletion can race with
//! the filesystem on some platforms, so the sweep retries a bounded number
//! of times before giving up without crashing the process.

use std::path::Path;

use serde_json::Value;

use crate::document::is_generated;

const CLEAN_ATTEMPTS: u32 = 3;

/// Delete every generated `.json` file under `root`, returning the count.
///
/// Emptied directories are removed opportunistically. A missing root is not
/// an error; there is simply nothing to clean.
///
/// # Errors
///
/// Returns the first IO error encountered while scanning or deleting.
pub fn clean_generated(root: &Path) -> std::io::Result<usize> {
    if !root.exists() {
        return Ok(0);
    }
    let mut removed = 0;
    clean_dir(root, &mut removed)?;
    Ok(removed)
}

fn clean_dir(dir: &Path, removed: &mut usize) -> std::io::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            clean_dir(&path, removed)?;
            // Leaves non-empty directories in place.
            let _ = std::fs::remove_dir(&path);
        } else if path.extension().is_some_and(|ext| ext == "json") && file_is_generated(&path) {
            std::fs::remove_file(&path)?;
            *removed += 1;
        }
    }
    Ok(())
}

fn file_is_generated(path: &Path) -> bool {
    let Ok(text) = std::fs::read_to_string(path) else {
        return false;
    };
    match serde_json::from_str::<Value>(&text) {
        Ok(document) => is_generated(&document),
        Err(_) => false,
    }
}

/// Clean `root`, retrying on transient OS-level failures.
///
/// Returns `true` once a sweep completes; after the final failed attempt
/// the clean is abandoned with an error log rather than a crash.
pub fn clean_with_retry(root: &Path) -> bool {
    for attempt in 1..=CLEAN_ATTEMPTS {
        match clean_generated(root) {
            Ok(removed) => {
                tracing::info!("Clean {} ({removed} files)", root.display());
                return true;
            }
            Err(e) => {
                tracing::warn!(
                    "Clean failed for {}, retrying ({attempt} / {CLEAN_ATTEMPTS}): {e}",
                    root.display()
                );
            }
        }
    }
    tracing::error!("Clean aborted for {}", root.display());
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::{DiskWriter, ResourceWriter};
    use serde_json::json;

    #[test]
    fn test_clean_removes_only_generated_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = DiskWriter::new(dir.path());
        writer.write(&["data", "a"], json!({ "x": 1 }));
        writer.write(&["data", "deep", "b"], json!({ "x": 2 }));

        let handwritten = dir.path().join("data/manual.json");
        std::fs::write(&handwritten, "{\"keep\": true}").unwrap();

        let removed = clean_generated(dir.path()).unwrap();
        assert_eq!(removed, 2);
        assert!(handwritten.exists());
        assert!(!dir.path().join("data/a.json").exists());
        assert!(!dir.path().join("data/deep").exists());
    }

    #[test]
    fn test_clean_missing_root_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert_eq!(clean_generated(&missing).unwrap(), 0);
        assert!(clean_with_retry(&missing));
    }

    #[test]
    fn test_clean_skips_non_json_and_unparseable() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "text").unwrap();
        std::fs::write(dir.path().join("broken.json"), "{{{").unwrap();

        let removed = clean_generated(dir.path()).unwrap();
        assert_eq!(removed, 0);
        assert!(dir.path().join("notes.txt").exists());
        assert!(dir.path().join("broken.json").exists());
    }

    #[test]
    fn test_clean_then_regenerate_reports_all_new() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = DiskWriter::new(dir.path());
        writer.write(&["data", "a"], json!({ "x": 1 }));

        assert!(clean_with_retry(dir.path()));

        let mut writer = DiskWriter::new(dir.path());
        writer.write(&["data", "a"], json!({ "x": 1 }));
        assert_eq!(writer.counters().new, 1);
    }
}
