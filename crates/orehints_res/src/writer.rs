//! The resource writer interface and the disk-writing implementation.

use std::fmt;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::document::finalize;

/// Classification of one write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The target file did not exist before.
    New,
    /// The target file existed with different content.
    Modified,
    /// The target file already held exactly this content.
    Unchanged,
    /// The write (or, in validation mode, the check) failed.
    Error,
}

/// Per-run counters of write outcomes.
///
/// Scoped to one writer instance so repeated runs in one process stay
/// independent.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FileCounters {
    /// Files created by this run.
    pub new: usize,
    /// Files whose content changed.
    pub modified: usize,
    /// Files left untouched.
    pub unchanged: usize,
    /// Files that failed to write or validate.
    pub errors: usize,
}

impl FileCounters {
    /// Record one outcome.
    pub fn record(&mut self, outcome: WriteOutcome) {
        match outcome {
            WriteOutcome::New => self.new += 1,
            WriteOutcome::Modified => self.modified += 1,
            WriteOutcome::Unchanged => self.unchanged += 1,
            WriteOutcome::Error => self.errors += 1,
        }
    }

    /// Whether any write or check failed.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors != 0
    }
}

impl fmt::Display for FileCounters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "New = {}, Modified = {}, Unchanged = {}, Errors = {}",
            self.new, self.modified, self.unchanged, self.errors
        )
    }
}

/// The narrow interface the generation pipeline writes through.
///
/// Implementations record failures in their counters and keep going, so a
/// whole run is always counted; per-write outcomes are returned for callers
/// that want them.
pub trait ResourceWriter {
    /// Emit (or, in validation mode, check) one document at a logical path.
    fn write(&mut self, path_parts: &[&str], document: Value) -> WriteOutcome;

    /// This writer's counters so far.
    fn counters(&self) -> FileCounters;
}

/// Resolve a logical path (sequence of segments) to a `.json` file path.
#[must_use]
pub fn resource_path(root: &Path, path_parts: &[&str]) -> PathBuf {
    let mut path = root.to_path_buf();
    for part in path_parts {
        path.push(part);
    }
    path.set_extension("json");
    path
}

/// Serialize a document the way every emitted file is formatted.
#[must_use]
pub fn render(document: &Value) -> String {
    let mut text = serde_json::to_string_pretty(document).unwrap_or_default();
    text.push('\n');
    text
}

/// Writer that persists documents under a root directory.
#[derive(Debug)]
pub struct DiskWriter {
    root: PathBuf,
    counters: FileCounters,
}

impl DiskWriter {
    /// Create a writer rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            counters: FileCounters::default(),
        }
    }

    /// The output root this writer targets.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn write_file(path: &Path, text: &str) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, text)
    }
}

impl ResourceWriter for DiskWriter {
    fn write(&mut self, path_parts: &[&str], document: Value) -> WriteOutcome {
        let document = finalize(document);
        let path = resource_path(&self.root, path_parts);
        let text = render(&document);

        let outcome = match std::fs::read_to_string(&path) {
            Ok(existing) if existing == text => WriteOutcome::Unchanged,
            Ok(_) => match Self::write_file(&path, &text) {
                Ok(()) => WriteOutcome::Modified,
                Err(e) => {
                    tracing::error!("Failed to write '{}': {e}", path.display());
                    WriteOutcome::Error
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                match Self::write_file(&path, &text) {
                    Ok(()) => WriteOutcome::New,
                    Err(e) => {
                        tracing::error!("Failed to write '{}': {e}", path.display());
                        WriteOutcome::Error
                    }
                }
            }
            Err(e) => {
                tracing::error!("Failed to read '{}': {e}", path.display());
                WriteOutcome::Error
            }
        };

        self.counters.record(outcome);
        outcome
    }

    fn counters(&self) -> FileCounters {
        self.counters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::is_generated;
    use serde_json::json;

    #[test]
    fn test_resource_path_joins_segments() {
        let path = resource_path(
            Path::new("out"),
            &["data", "tfc", "worldgen", "configured_feature", "vein", "lignite"],
        );
        assert_eq!(
            path,
            Path::new("out/data/tfc/worldgen/configured_feature/vein/lignite.json")
        );
    }

    #[test]
    fn test_disk_writer_classifies_writes() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = DiskWriter::new(dir.path());

        let outcome = writer.write(&["data", "a"], json!({ "x": 1 }));
        assert_eq!(outcome, WriteOutcome::New);

        let outcome = writer.write(&["data", "a"], json!({ "x": 1 }));
        assert_eq!(outcome, WriteOutcome::Unchanged);

        let outcome = writer.write(&["data", "a"], json!({ "x": 2 }));
        assert_eq!(outcome, WriteOutcome::Modified);

        let counters = writer.counters();
        assert_eq!(counters.new, 1);
        assert_eq!(counters.unchanged, 1);
        assert_eq!(counters.modified, 1);
        assert_eq!(counters.errors, 0);
        assert!(!counters.has_errors());
    }

    #[test]
    fn test_written_file_carries_marker_and_no_nulls() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = DiskWriter::new(dir.path());
        writer.write(&["data", "b"], json!({ "x": 1, "gone": null }));

        let text = std::fs::read_to_string(dir.path().join("data/b.json")).unwrap();
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert!(is_generated(&parsed));
        assert!(parsed.get("gone").is_none());
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_counters_display() {
        let mut counters = FileCounters::default();
        counters.record(WriteOutcome::New);
        counters.record(WriteOutcome::Error);
        assert_eq!(
            counters.to_string(),
            "New = 1, Modified = 0, Unchanged = 0, Errors = 1"
        );
    }
}
