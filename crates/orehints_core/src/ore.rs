//! Ore types, grade weights, and the static ore tables.

/// A minable material.
///
/// Immutable, defined once in [`ORES`], referenced by name from veins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ore {
    /// Unique ore name, e.g. `"native_copper"`.
    pub name: &'static str,
    /// Metal this ore smelts into, `None` for non-metal minerals.
    pub metal: Option<&'static str>,
    /// Whether the ore spawns in poor/normal/rich quality tiers.
    pub graded: bool,
    /// Minimum tool tier required to extract it.
    pub required_tool: &'static str,
    /// Tag name used for cross-referencing.
    pub tag: &'static str,
    /// Dye color associated with the ore, if any.
    pub dye_color: Option<&'static str>,
}

const fn metal_ore(
    name: &'static str,
    metal: &'static str,
    required_tool: &'static str,
    tag: &'static str,
    dye_color: Option<&'static str>,
) -> Ore {
    Ore {
        name,
        metal: Some(metal),
        graded: true,
        required_tool,
        tag,
        dye_color,
    }
}

const fn mineral(name: &'static str, required_tool: &'static str, tag: &'static str) -> Ore {
    Ore {
        name,
        metal: None,
        graded: false,
        required_tool,
        tag,
        dye_color: None,
    }
}

/// The static ore table, in canonical order.
pub const ORES: &[Ore] = &[
    metal_ore("native_copper", "copper", "copper", "copper", Some("orange")),
    metal_ore("native_gold", "gold", "copper", "gold", None),
    metal_ore("hematite", "cast_iron", "copper", "iron", Some("red")),
    metal_ore("native_silver", "silver", "copper", "silver", Some("light_gray")),
    metal_ore("cassiterite", "tin", "copper", "tin", Some("gray")),
    metal_ore("bismuthinite", "bismuth", "copper", "bismuth", Some("green")),
    metal_ore("garnierite", "nickel", "bronze", "nickel", Some("brown")),
    metal_ore("malachite", "copper", "copper", "copper", Some("green")),
    metal_ore("magnetite", "cast_iron", "copper", "iron", Some("gray")),
    metal_ore("limonite", "cast_iron", "copper", "iron", Some("yellow")),
    metal_ore("sphalerite", "zinc", "copper", "zinc", Some("gray")),
    metal_ore("tetrahedrite", "copper", "copper", "copper", Some("gray")),
    mineral("bituminous_coal", "copper", "coal"),
    mineral("lignite", "copper", "coal"),
    mineral("gypsum", "copper", "gypsum"),
    mineral("graphite", "copper", "graphite"),
    mineral("sulfur", "copper", "sulfur"),
    mineral("cinnabar", "bronze", "redstone"),
    mineral("cryolite", "bronze", "redstone"),
    mineral("saltpeter", "copper", "saltpeter"),
    mineral("sylvite", "copper", "sylvite"),
    mineral("borax", "copper", "borax"),
    mineral("halite", "bronze", "halite"),
    mineral("amethyst", "steel", "amethyst"),
    mineral("diamond", "black_steel", "diamond"),
    mineral("emerald", "steel", "emerald"),
    mineral("lapis_lazuli", "wrought_iron", "lapis"),
    mineral("opal", "wrought_iron", "opal"),
    mineral("pyrite", "copper", "pyrite"),
    mineral("ruby", "black_steel", "ruby"),
    mineral("sapphire", "black_steel", "sapphire"),
    mineral("topaz", "steel", "topaz"),
];

/// Look up an ore by name.
#[must_use]
pub fn get_ore(name: &str) -> Option<&'static Ore> {
    ORES.iter().find(|o| o.name == name)
}

/// Quality tier of a graded ore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OreGrade {
    /// Low-yield tier.
    Poor,
    /// Standard tier.
    Normal,
    /// High-yield tier.
    Rich,
}

impl OreGrade {
    /// All grades in emission order: poor, normal, rich.
    pub const ALL: [OreGrade; 3] = [OreGrade::Poor, OreGrade::Normal, OreGrade::Rich];

    /// Block-id spelling of the grade.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            OreGrade::Poor => "poor",
            OreGrade::Normal => "normal",
            OreGrade::Rich => "rich",
        }
    }

    /// Processing yield when ground.
    #[must_use]
    pub fn grind_amount(self) -> u32 {
        match self {
            OreGrade::Poor => 3,
            OreGrade::Normal => 5,
            OreGrade::Rich => 7,
        }
    }
}

/// Relative spawn weights of the three grades within one vein.
///
/// Weights are passed through to the emitted block lists unchanged, never
/// renormalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeWeights {
    /// Weight of the poor tier.
    pub poor: u32,
    /// Weight of the normal tier.
    pub normal: u32,
    /// Weight of the rich tier.
    pub rich: u32,
}

impl GradeWeights {
    /// The weight of a specific grade.
    #[must_use]
    pub fn weight(self, grade: OreGrade) -> u32 {
        match grade {
            OreGrade::Poor => self.poor,
            OreGrade::Normal => self.normal,
            OreGrade::Rich => self.rich,
        }
    }

    /// Sum of the three weights.
    #[must_use]
    pub fn total(self) -> u32 {
        self.poor + self.normal + self.rich
    }
}

/// Preset skewed towards poor ore.
pub const POOR: GradeWeights = GradeWeights {
    poor: 70,
    normal: 25,
    rich: 5,
};

/// Balanced preset.
pub const NORMAL: GradeWeights = GradeWeights {
    poor: 35,
    normal: 40,
    rich: 25,
};

/// Preset skewed towards rich ore.
pub const RICH: GradeWeights = GradeWeights {
    poor: 15,
    normal: 25,
    rich: 60,
};

/// Static map from mineral ore name to the rock used as its surface hint.
///
/// Applies only to ungraded (mineral) ores; graded ores hint with small-ore
/// blocks instead.
pub const MINERAL_INDICATORS: &[(&str, &str)] = &[
    ("bituminous_coal", "basalt"),
    ("lignite", "basalt"),
    ("kaolin_disc", "marble"),
    ("graphite", "claystone"),
    ("cinnabar", "gneiss"),
    ("cryolite", "slate"),
    ("saltpeter", "diorite"),
    ("sulfur", "shale"),
    ("sylvite", "dolomite"),
    ("borax", "chert"),
    ("lapis_lazuli", "andesite"),
    ("gypsum", "quartzite"),
    ("halite", "phyllite"),
    ("diamond", "chalk"),
];

/// Look up the indicator rock for a mineral ore.
#[must_use]
pub fn mineral_indicator(ore_name: &str) -> Option<&'static str> {
    MINERAL_INDICATORS
        .iter()
        .find(|(ore, _)| *ore == ore_name)
        .map(|(_, rock)| *rock)
}

/// The indicator map as published in the field guide.
///
/// Identical to [`MINERAL_INDICATORS`] except the internal `kaolin_disc`
/// entry is published under `kaolinite`, matching the anchor entry readers
/// see in the base game's guide.
#[must_use]
pub fn published_indicators() -> Vec<(&'static str, &'static str)> {
    MINERAL_INDICATORS
        .iter()
        .map(|&(ore, rock)| {
            if ore == "kaolin_disc" {
                ("kaolinite", rock)
            } else {
                (ore, rock)
            }
        })
        .collect()
}
