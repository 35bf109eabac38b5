//! # OreHints Core
//!
//! Pure domain logic for the OreHints resource generator.
//!
//! This crate contains **only** deterministic, IO-free logic:
//! - Static tables of rocks, ores, grades, and mineral indicators
//! - The vein descriptor model and its validating builder
//! - Rock-category expansion
//! - Vein-to-configuration compilation into JSON documents
//!
//! File emission, diffing, and the CLI live in the sibling crates. Keeping
//! this crate pure means the same tables always compile to byte-identical
//! documents, which the validation mode depends on.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod compile;
pub mod error;
pub mod expand;
pub mod ore;
pub mod rock;
pub mod vein;
pub mod veins;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::compile::{vein_config, vein_density, DOMAIN};
    pub use crate::error::{ConfigError, Result};
    pub use crate::expand::expand_rocks;
    pub use crate::ore::{GradeWeights, Ore, OreGrade, NORMAL, POOR, RICH};
    pub use crate::rock::{Rock, RockCategory};
    pub use crate::vein::{Projection, Vein, VeinBuilder, VeinShape};
    pub use crate::veins::{ore_veins, surprise_veins, NamedVein};
}
