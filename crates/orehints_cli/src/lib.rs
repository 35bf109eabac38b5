//! # OreHints CLI
//!
//! Action dispatch and the worldgen driver gluing the domain tables to the
//! resource emission layer. The binary in `main.rs` is a thin clap wrapper
//! over [`actions`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod actions;
pub mod worldgen;

pub use actions::{surprise_root, Options};
