//! Error types for table validation and vein compilation.

use thiserror::Error;

/// Result type alias using [`ConfigError`].
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised by the static tables and the vein compiler.
///
/// Every variant is an authoring mistake in the tables, not a recoverable
/// runtime condition: generation aborts on the first one.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A vein's rock specification names neither a rock nor a category.
    #[error("unknown rock or rock category '{spec}' in vein '{vein}'")]
    UnknownRockSpec {
        /// The specification that failed to resolve.
        spec: String,
        /// Name of the vein that referenced it.
        vein: String,
    },

    /// A vein references an ore missing from the ore table.
    #[error("unknown ore '{ore}' in vein '{vein}'")]
    UnknownOre {
        /// The unresolved ore name.
        ore: String,
        /// Name of the vein that referenced it.
        vein: String,
    },

    /// Vein density outside the open interval (0, 1) after normalization.
    #[error("density {density} in vein '{vein}' is outside (0, 1)")]
    InvalidDensity {
        /// The offending density value as authored.
        density: f64,
        /// Name of the vein that carried it.
        vein: String,
    },

    /// A vein lists no rocks or categories at all.
    #[error("vein '{vein}' lists no rocks or rock categories")]
    EmptyRocks {
        /// Name of the offending vein.
        vein: String,
    },

    /// A vein's vertical range is inverted.
    #[error("vein '{vein}' has inverted vertical range {min_y}..{max_y}")]
    InvertedRange {
        /// Name of the offending vein.
        vein: String,
        /// Lower bound as authored.
        min_y: i32,
        /// Upper bound as authored.
        max_y: i32,
    },

    /// A graded ore was placed without grade weights.
    #[error("graded ore '{ore}' in vein '{vein}' has no grade weights")]
    MissingGrade {
        /// The graded ore.
        ore: String,
        /// Name of the offending vein.
        vein: String,
    },
}
