//! Translation tables for book text.
//!
//! Translations live in hand-maintained `<dir>/<lang>.json` files mapping
//! generated text keys to translated strings. Missing files or keys fall
//! back to the source-language text, so untranslated books still build.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{BookError, Result};

/// The language the book is authored in.
pub const SOURCE_LANGUAGE: &str = "en_us";

/// One language's translation table, plus the keys a build asked for.
#[derive(Debug)]
pub struct I18n {
    lang: String,
    dir: PathBuf,
    table: BTreeMap<String, String>,
    used: BTreeMap<String, String>,
    validate: bool,
}

impl I18n {
    /// Load the translation table for `lang` from `dir`.
    ///
    /// A missing file is not an error: the table is empty and every lookup
    /// falls back to the source text. In validate mode, [`I18n::flush`]
    /// becomes a no-op so validation runs never touch the table files.
    ///
    /// # Errors
    ///
    /// Returns a [`BookError`] if the file exists but cannot be read or
    /// parsed.
    pub fn create(lang: &str, dir: &Path, validate: bool) -> Result<Self> {
        let path = dir.join(format!("{lang}.json"));
        let table = if path.is_file() {
            let text = std::fs::read_to_string(&path).map_err(|e| BookError::io(&path, e))?;
            serde_json::from_str(&text).map_err(|e| BookError::parse(&path, e))?
        } else {
            if lang != SOURCE_LANGUAGE {
                tracing::warn!("No translation table for '{lang}', using source text");
            }
            BTreeMap::new()
        };
        Ok(Self {
            lang: lang.to_string(),
            dir: dir.to_path_buf(),
            table,
            used: BTreeMap::new(),
            validate,
        })
    }

    /// The language this table translates to.
    #[must_use]
    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Whether this is the source language (no translation applied).
    #[must_use]
    pub fn is_source(&self) -> bool {
        self.lang == SOURCE_LANGUAGE
    }

    /// Translate `text` registered under `key`, falling back to `text`.
    pub fn translate(&mut self, key: &str, text: &str) -> String {
        self.used.insert(key.to_string(), text.to_string());
        if self.is_source() {
            text.to_string()
        } else {
            self.table.get(key).cloned().unwrap_or_else(|| text.to_string())
        }
    }

    /// Persist the source-language key table for translators.
    ///
    /// Only the source language is written (translations are hand-edited),
    /// and never in validate mode.
    ///
    /// # Errors
    ///
    /// Returns a [`BookError`] if the table cannot be written.
    pub fn flush(&self) -> Result<()> {
        if !self.is_source() || self.validate || self.used.is_empty() {
            return Ok(());
        }
        let path = self.dir.join(format!("{}.json", self.lang));
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| BookError::io(&path, e))?;
        }
        let mut text = serde_json::to_string_pretty(&self.used)
            .map_err(|e| BookError::parse(&path, e))?;
        text.push('\n');
        std::fs::write(&path, text).map_err(|e| BookError::io(&path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_language_passes_through() {
        let dir = tempfile::tempdir().unwrap();
        let mut i18n = I18n::create("en_us", dir.path(), false).unwrap();
        assert!(i18n.is_source());
        assert_eq!(i18n.translate("book.title", "Mineral Hints"), "Mineral Hints");
    }

    #[test]
    fn test_missing_table_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let mut i18n = I18n::create("ko_kr", dir.path(), false).unwrap();
        assert_eq!(i18n.translate("book.title", "Mineral Hints"), "Mineral Hints");
    }

    #[test]
    fn test_translation_applied() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("pt_br.json"),
            "{\"book.title\": \"Dicas de Minerais\"}",
        )
        .unwrap();

        let mut i18n = I18n::create("pt_br", dir.path(), false).unwrap();
        assert_eq!(i18n.translate("book.title", "Mineral Hints"), "Dicas de Minerais");
        assert_eq!(i18n.translate("book.other", "Other"), "Other");
    }

    #[test]
    fn test_flush_writes_source_keys_only() {
        let dir = tempfile::tempdir().unwrap();

        let mut source = I18n::create("en_us", dir.path(), false).unwrap();
        source.translate("book.title", "Mineral Hints");
        source.flush().unwrap();
        assert!(dir.path().join("en_us.json").exists());

        let mut translated = I18n::create("ko_kr", dir.path(), false).unwrap();
        translated.translate("book.title", "Mineral Hints");
        translated.flush().unwrap();
        assert!(!dir.path().join("ko_kr.json").exists());
    }

    #[test]
    fn test_validate_mode_never_writes() {
        let dir = tempfile::tempdir().unwrap();
        let mut i18n = I18n::create("en_us", dir.path(), true).unwrap();
        i18n.translate("book.title", "Mineral Hints");
        i18n.flush().unwrap();
        assert!(!dir.path().join("en_us.json").exists());
    }

    #[test]
    fn test_broken_table_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("zh_cn.json"), "{{{").unwrap();
        let result = I18n::create("zh_cn", dir.path(), false);
        assert!(matches!(result, Err(BookError::Parse { .. })));
    }
}
