//! Action orchestration: each CLI action as a function over [`Options`].
//!
//! Actions log what they did and return `false` on failure instead of
//! propagating, so a multi-action invocation runs every requested action
//! and the binary decides the exit code at the end.

use std::path::{Path, PathBuf};

use orehints_book::{format_lang, Book, I18n, BOOK_LANGUAGES, MOD_LANGUAGES};
use orehints_res::{clean_with_retry, DiskWriter, ResourceWriter, ValidatingWriter};

use crate::worldgen;

/// Resolved invocation options shared by every action.
#[derive(Debug, Clone)]
pub struct Options {
    /// Primary generated-resource root.
    pub resource_dir: PathBuf,
    /// Directory of hand-maintained translation files.
    pub lang_dir: PathBuf,
    /// Local game-instance mirror for book hot-reload and clean.
    pub local: Option<PathBuf>,
    /// Extra worldgen output root for hot-swapping into a running instance.
    pub hotswap: Option<PathBuf>,
    /// Book language to translate into.
    pub translate: String,
    /// Build the book for every supported language.
    pub translate_all: bool,
}

/// The secondary output root for the bonus vein set.
#[must_use]
pub fn surprise_root(primary: &Path) -> PathBuf {
    let name = primary
        .file_name()
        .map_or_else(|| "generated".to_string(), |n| n.to_string_lossy().into_owned());
    primary.with_file_name(format!("{name}_veinbuffs"))
}

fn book_languages(opts: &Options) -> Vec<&str> {
    if opts.translate_all {
        BOOK_LANGUAGES.to_vec()
    } else {
        vec![opts.translate.as_str()]
    }
}

fn report(label: &str, root: &Path, writer: &dyn ResourceWriter) -> bool {
    let counters = writer.counters();
    tracing::info!("{label} ({}): {counters}", root.display());
    !counters.has_errors()
}

/// Remove generated files from every output root.
pub fn run_clean(opts: &Options) -> bool {
    let mut ok = clean_with_retry(&opts.resource_dir);
    ok &= clean_with_retry(&surprise_root(&opts.resource_dir));
    if let Some(local) = &opts.local {
        ok &= clean_with_retry(local);
    }
    ok
}

fn generate_to(root: &Path) -> bool {
    let mut writer = DiskWriter::new(root);
    if let Err(e) = worldgen::generate(&mut writer) {
        tracing::error!("Worldgen generation failed: {e}");
        return false;
    }
    report("Resources", root, &writer)
}

/// Generate worldgen and lang files to every configured root.
pub fn run_worldgen(opts: &Options) -> bool {
    let mut ok = generate_to(&opts.resource_dir);
    if let Some(hotswap) = &opts.hotswap {
        ok &= generate_to(hotswap);
    }

    let root = surprise_root(&opts.resource_dir);
    let mut writer = DiskWriter::new(&root);
    match worldgen::generate_surprise(&mut writer) {
        Ok(()) => ok &= report("Bonus veins", &root, &writer),
        Err(e) => {
            tracing::error!("Bonus vein generation failed: {e}");
            ok = false;
        }
    }
    ok
}

fn build_book(root: &Path, lang: &str, lang_dir: &Path, validate: bool) -> bool {
    let mut i18n = match I18n::create(lang, lang_dir, validate) {
        Ok(i18n) => i18n,
        Err(e) => {
            tracing::error!("Failed to load translations for '{lang}': {e}");
            return false;
        }
    };

    let categories = orehints_book::field_guide();
    let book = Book::new();
    let ok = if validate {
        let mut writer = ValidatingWriter::new(root);
        book.build(&mut writer, &mut i18n, &categories);
        report("Book", root, &writer)
    } else {
        let mut writer = DiskWriter::new(root);
        book.build(&mut writer, &mut i18n, &categories);
        report("Book", root, &writer)
    };

    if let Err(e) = i18n.flush() {
        tracing::error!("Failed to flush translation keys for '{lang}': {e}");
        return false;
    }
    ok
}

/// Generate the field guide for the requested language(s).
pub fn run_book(opts: &Options) -> bool {
    let mut ok = true;
    for lang in book_languages(opts) {
        ok &= build_book(&opts.resource_dir, lang, &opts.lang_dir, false);
        if let Some(local) = &opts.local {
            ok &= build_book(local, lang, &opts.lang_dir, false);
        }
    }
    ok
}

/// Rewrite every translation file into canonical form.
pub fn run_update_lang(opts: &Options) -> bool {
    let mut ok = true;
    for lang in MOD_LANGUAGES {
        if let Err(e) = format_lang(&opts.lang_dir, lang, false) {
            tracing::error!("Failed to format language '{lang}': {e}");
            ok = false;
        }
    }
    ok
}

/// Check that every translation file is already in canonical form.
pub fn run_format_lang(opts: &Options) -> bool {
    let mut ok = true;
    for lang in MOD_LANGUAGES {
        if let Err(e) = format_lang(&opts.lang_dir, lang, true) {
            tracing::error!("Language '{lang}' needs formatting: {e}");
            ok = false;
        }
    }
    ok
}

/// Run the whole pipeline against validating writers and report regressions.
///
/// Every unit is validated even after a failure so the report covers all
/// files.
pub fn run_validate(opts: &Options) -> bool {
    let mut ok = true;

    let mut writer = ValidatingWriter::new(&opts.resource_dir);
    match worldgen::generate(&mut writer) {
        Ok(()) => ok &= report("Resources", &opts.resource_dir, &writer),
        Err(e) => {
            tracing::error!("Worldgen generation failed: {e}");
            ok = false;
        }
    }

    let root = surprise_root(&opts.resource_dir);
    let mut writer = ValidatingWriter::new(&root);
    match worldgen::generate_surprise(&mut writer) {
        Ok(()) => ok &= report("Bonus veins", &root, &writer),
        Err(e) => {
            tracing::error!("Bonus vein generation failed: {e}");
            ok = false;
        }
    }

    for lang in BOOK_LANGUAGES {
        ok &= build_book(&opts.resource_dir, lang, &opts.lang_dir, true);
    }

    ok &= run_format_lang(opts);

    if ok {
        tracing::info!("Validation passed");
    } else {
        tracing::error!("Validation failed");
    }
    ok
}
