//! # OreHints Book
//!
//! Field-guide documentation generation and language-file handling.
//!
//! The book is a set of Patchouli-style category/entry JSON documents,
//! emitted per language through the resource layer's writer interface, with
//! page text routed through [`i18n::I18n`] translation tables. The
//! [`lang`] module keeps the hand-maintained translation files themselves
//! in canonical form.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod book;
pub mod error;
pub mod i18n;
pub mod lang;

pub use book::{default_lang, field_guide, Book, Category, Entry, Page};
pub use error::{BookError, Result};
pub use i18n::{I18n, SOURCE_LANGUAGE};
pub use lang::{format_lang, BOOK_LANGUAGES, MOD_LANGUAGES};
