//! The diff-based validating writer.
//!
//! Re-runs of the generation pipeline hand documents to this writer instead
//! of [`crate::DiskWriter`]. Nothing is written: documents are compared
//! structurally against the committed tree. Generation is expected to be
//! idempotent against a current tree, so a previously-absent file is a
//! regression, not a success.

use std::path::{Path, PathBuf};

use serde_json::Value;
use similar::TextDiff;

use crate::document::finalize;
use crate::writer::{render, resource_path, FileCounters, ResourceWriter, WriteOutcome};

/// Writer that diffs generated documents against the existing tree.
#[derive(Debug)]
pub struct ValidatingWriter {
    root: PathBuf,
    counters: FileCounters,
}

impl ValidatingWriter {
    /// Create a validating writer rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            counters: FileCounters::default(),
        }
    }

    /// The tree this writer validates against.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn check(&self, path: &Path, generated: &Value) -> WriteOutcome {
        if !path.is_file() {
            tracing::error!(
                "resource generation created new file '{}'",
                path.display()
            );
            return WriteOutcome::Error;
        }

        let existing = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("Failed to read '{}': {e}", path.display());
                return WriteOutcome::Error;
            }
        };
        let existing: Value = match serde_json::from_str(&existing) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Failed to parse '{}': {e}", path.display());
                return WriteOutcome::Error;
            }
        };

        // Structural equality: key order is irrelevant, null/absence is not.
        if existing != *generated {
            let old_text = render(&existing);
            let new_text = render(generated);
            let diff = TextDiff::from_lines(&old_text, &new_text)
                .unified_diff()
                .context_radius(1)
                .header("old", "new")
                .to_string();
            tracing::error!(
                "resource generation modified file '{}' Diff:\n{diff}",
                path.display()
            );
            return WriteOutcome::Error;
        }

        WriteOutcome::Unchanged
    }
}

impl ResourceWriter for ValidatingWriter {
    fn write(&mut self, path_parts: &[&str], document: Value) -> WriteOutcome {
        let document = finalize(document);
        let path = resource_path(&self.root, path_parts);
        let outcome = self.check(&path, &document);
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
    use crate::writer::DiskWriter;
    use serde_json::json;

    #[test]
    fn test_validation_is_fixed_point_after_generation() {
        let dir = tempfile::tempdir().unwrap();
        let doc = json!({ "rarity": 24, "blocks": [1, 2, 3] });

        let mut disk = DiskWriter::new(dir.path());
        disk.write(&["data", "vein"], doc.clone());

        let mut validator = ValidatingWriter::new(dir.path());
        let outcome = validator.write(&["data", "vein"], doc);
        assert_eq!(outcome, WriteOutcome::Unchanged);
        assert!(!validator.counters().has_errors());
    }

    #[test]
    fn test_new_file_is_a_regression() {
        let dir = tempfile::tempdir().unwrap();
        let mut validator = ValidatingWriter::new(dir.path());

        let outcome = validator.write(&["data", "missing"], json!({ "x": 1 }));
        assert_eq!(outcome, WriteOutcome::Error);
        assert_eq!(validator.counters().errors, 1);
    }

    #[test]
    fn test_content_change_is_a_regression() {
        let dir = tempfile::tempdir().unwrap();
        let mut disk = DiskWriter::new(dir.path());
        disk.write(&["data", "vein"], json!({ "x": 1 }));

        let mut validator = ValidatingWriter::new(dir.path());
        let outcome = validator.write(&["data", "vein"], json!({ "x": 2 }));
        assert_eq!(outcome, WriteOutcome::Error);
    }

    #[test]
    fn test_comparison_ignores_text_formatting() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data/vein.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        // Same structure, different formatting and key order on disk.
        std::fs::write(
            &path,
            format!(
                "{{\"x\": 1, \"__comment__\": \"{}\"}}",
                crate::document::GENERATED_COMMENT
            ),
        )
        .unwrap();

        let mut validator = ValidatingWriter::new(dir.path());
        let outcome = validator.write(&["data", "vein"], json!({ "x": 1 }));
        assert_eq!(outcome, WriteOutcome::Unchanged);
    }

    #[test]
    fn test_unparseable_file_counts_as_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data/vein.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "not json {{{").unwrap();

        let mut validator = ValidatingWriter::new(dir.path());
        let outcome = validator.write(&["data", "vein"], json!({ "x": 1 }));
        assert_eq!(outcome, WriteOutcome::Error);
    }

    #[test]
    fn test_scan_continues_past_failures() {
        let dir = tempfile::tempdir().unwrap();
        let mut disk = DiskWriter::new(dir.path());
        disk.write(&["data", "good"], json!({ "x": 1 }));

        let mut validator = ValidatingWriter::new(dir.path());
        validator.write(&["data", "missing"], json!({ "x": 1 }));
        validator.write(&["data", "good"], json!({ "x": 1 }));

        let counters = validator.counters();
        assert_eq!(counters.errors, 1);
        assert_eq!(counters.unchanged, 1);
    }
}
