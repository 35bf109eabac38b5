//! Rock types and the static rock table.
//!
//! The table order is load-bearing: category expansion walks it in order so
//! regenerated files are byte-stable across runs.

use serde::{Deserialize, Serialize};

/// Geological category of a rock.
///
/// Categories double as shorthand in vein rock specifications, standing in
/// for every rock whose category matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RockCategory {
    /// Sedimentary rocks (shale, limestone, ...).
    Sedimentary,
    /// Metamorphic rocks (slate, marble, ...).
    Metamorphic,
    /// Igneous extrusive rocks (basalt, rhyolite, ...).
    IgneousExtrusive,
    /// Igneous intrusive rocks (granite, gabbro, ...).
    IgneousIntrusive,
}

impl RockCategory {
    /// All categories, in table-spelling order.
    pub const ALL: [RockCategory; 4] = [
        RockCategory::Sedimentary,
        RockCategory::Metamorphic,
        RockCategory::IgneousExtrusive,
        RockCategory::IgneousIntrusive,
    ];

    /// The snake_case spelling used in tables and vein rock specifications.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            RockCategory::Sedimentary => "sedimentary",
            RockCategory::Metamorphic => "metamorphic",
            RockCategory::IgneousExtrusive => "igneous_extrusive",
            RockCategory::IgneousIntrusive => "igneous_intrusive",
        }
    }

    /// Parse a category from its table spelling.
    #[must_use]
    pub fn from_name(name: &str) -> Option<RockCategory> {
        RockCategory::ALL.into_iter().find(|c| c.name() == name)
    }
}

/// A concrete stone type.
///
/// Immutable, defined once in [`ROCKS`], referenced by name everywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rock {
    /// Unique rock name, e.g. `"basalt"`.
    pub name: &'static str,
    /// Geological category.
    pub category: RockCategory,
    /// Color of the loose sand this rock weathers into.
    pub sand: &'static str,
}

const fn rock(name: &'static str, category: RockCategory, sand: &'static str) -> Rock {
    Rock {
        name,
        category,
        sand,
    }
}

/// The static rock table, in canonical order.
pub const ROCKS: &[Rock] = &[
    rock("granite", RockCategory::IgneousIntrusive, "white"),
    rock("diorite", RockCategory::IgneousIntrusive, "white"),
    rock("gabbro", RockCategory::IgneousIntrusive, "black"),
    rock("shale", RockCategory::Sedimentary, "black"),
    rock("claystone", RockCategory::Sedimentary, "brown"),
    rock("limestone", RockCategory::Sedimentary, "white"),
    rock("conglomerate", RockCategory::Sedimentary, "green"),
    rock("dolomite", RockCategory::Sedimentary, "black"),
    rock("chert", RockCategory::Sedimentary, "yellow"),
    rock("chalk", RockCategory::Sedimentary, "white"),
    rock("rhyolite", RockCategory::IgneousExtrusive, "red"),
    rock("basalt", RockCategory::IgneousExtrusive, "red"),
    rock("andesite", RockCategory::IgneousExtrusive, "red"),
    rock("dacite", RockCategory::IgneousExtrusive, "yellow"),
    rock("quartzite", RockCategory::Metamorphic, "white"),
    rock("slate", RockCategory::Metamorphic, "yellow"),
    rock("phyllite", RockCategory::Metamorphic, "brown"),
    rock("schist", RockCategory::Metamorphic, "green"),
    rock("gneiss", RockCategory::Metamorphic, "green"),
    rock("marble", RockCategory::Metamorphic, "yellow"),
];

/// Look up a rock by name.
#[must_use]
pub fn get_rock(name: &str) -> Option<&'static Rock> {
    ROCKS.iter().find(|r| r.name == name)
}

/// All rocks of the given category, in table order.
pub fn rocks_in_category(category: RockCategory) -> impl Iterator<Item = &'static Rock> {
    ROCKS.iter().filter(move |r| r.category == category)
}
