//! Canonical formatting of hand-maintained language files.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{BookError, Result};
use crate::i18n::SOURCE_LANGUAGE;

/// Languages the field guide is built for.
pub const BOOK_LANGUAGES: &[&str] = &["en_us", "ko_kr", "pt_br", "uk_ua", "zh_cn", "zh_tw"];

/// Languages the mod's own lang files ship in.
pub const MOD_LANGUAGES: &[&str] = &[
    "en_us", "es_es", "ja_jp", "ko_kr", "pt_br", "ru_ru", "tr_tr", "uk_ua", "zh_cn", "zh_tw",
];

fn read_table(path: &Path) -> Result<BTreeMap<String, String>> {
    let text = std::fs::read_to_string(path).map_err(|e| BookError::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| BookError::parse(path, e))
}

fn render_table(table: &BTreeMap<String, String>) -> String {
    // serde can't fail on a string map; fall back to an empty object anyway.
    let mut text = serde_json::to_string_pretty(table).unwrap_or_else(|_| "{}".to_string());
    text.push('\n');
    text
}

/// Bring one language file into canonical form.
///
/// Canonical form is pretty-printed with sorted keys, containing only keys
/// that exist in the source (`en_us`) file; stale translations are dropped.
/// A language without a file is skipped with a warning. In validate mode
/// nothing is written: a file differing from its canonical form is an
/// error.
///
/// # Errors
///
/// Returns [`BookError::NotFormatted`] in validate mode on any difference,
/// or an IO/parse error if a present file cannot be handled.
pub fn format_lang(dir: &Path, lang: &str, validate: bool) -> Result<()> {
    let lang_path = dir.join(format!("{lang}.json"));
    if !lang_path.is_file() {
        tracing::warn!("No language file for '{lang}' at {}, skipping", lang_path.display());
        return Ok(());
    }

    let table = read_table(&lang_path)?;
    let formatted = if lang == SOURCE_LANGUAGE {
        table
    } else {
        let source_path = dir.join(format!("{SOURCE_LANGUAGE}.json"));
        if !source_path.is_file() {
            tracing::warn!("No source language file at {}, skipping '{lang}'", source_path.display());
            return Ok(());
        }
        let source = read_table(&source_path)?;
        table
            .into_iter()
            .filter(|(key, _)| source.contains_key(key))
            .collect()
    };

    let text = render_table(&formatted);
    let existing = std::fs::read_to_string(&lang_path).map_err(|e| BookError::io(&lang_path, e))?;
    if validate {
        if existing == text {
            Ok(())
        } else {
            Err(BookError::NotFormatted {
                lang: lang.to_string(),
            })
        }
    } else {
        if existing != text {
            tracing::info!("Formatted language file '{lang}'");
            std::fs::write(&lang_path, text).map_err(|e| BookError::io(&lang_path, e))?;
        }
        Ok(())
    }
}
