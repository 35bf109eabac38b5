//! The static vein placement tables.
//!
//! Table order is the emission order; it is deliberate and load-bearing for
//! byte-stable output. Comments describe the placement intent of each group.

use crate::error::Result;
use crate::ore::{NORMAL, POOR, RICH};
use crate::vein::{Vein, VeinBuilder};

/// A vein together with its table name.
pub type NamedVein = (&'static str, Vein);

fn build_all(entries: Vec<(&'static str, VeinBuilder)>) -> Result<Vec<NamedVein>> {
    entries
        .into_iter()
        .map(|(name, builder)| Ok((name, builder.build(name)?)))
        .collect()
}

/// The main ore vein table.
///
/// # Errors
///
/// Returns a [`crate::error::ConfigError`] if any entry violates a vein
/// invariant. The table ships valid; the error path exists so authoring
/// mistakes abort generation with the vein named.
pub fn ore_veins() -> Result<Vec<NamedVein>> {
    build_all(vec![
        // Copper.
        // Native - only in IE, only surface, and common to compensate for the
        // y-level getting cut off.
        // Malachite + tetrahedrite - sedimentary + metamorphic, can spawn in
        // larger deposits, hence more common. Tetrahedrite also spawns at
        // high altitude metamorphic.
        // All copper has generous indicators because it's necessary early on.
        (
            "surface_native_copper",
            Vein::builder("native_copper", 24, 20, 40, 130, 0.25, &["igneous_extrusive"])
                .grade(POOR)
                .deposits()
                .indicator(14),
        ),
        (
            "surface_malachite",
            Vein::builder("malachite", 32, 20, 40, 130, 0.25, &["marble", "limestone", "chalk", "dolomite"])
                .grade(POOR)
                .indicator(14),
        ),
        (
            "surface_tetrahedrite",
            Vein::builder("tetrahedrite", 7, 20, 90, 170, 0.25, &["metamorphic"])
                .grade(POOR)
                .indicator(8),
        ),
        (
            "normal_malachite",
            Vein::builder("malachite", 45, 30, -30, 70, 0.5, &["marble", "limestone", "chalk", "dolomite"])
                .grade(NORMAL)
                .indicator(25),
        ),
        (
            "normal_tetrahedrite",
            Vein::builder("tetrahedrite", 40, 30, -30, 70, 0.5, &["metamorphic"])
                .grade(NORMAL)
                .indicator(25),
        ),
        // Native gold - igneous at all y levels, larger deeper.
        (
            "normal_native_gold",
            Vein::builder("native_gold", 90, 15, 0, 70, 0.25, &["igneous_extrusive", "igneous_intrusive"])
                .grade(NORMAL)
                .indicator(40),
        ),
        // Silver - rare and small in uplift mountains via high intrusive.
        (
            "surface_native_silver",
            Vein::builder("native_silver", 15, 10, 90, 180, 0.2, &["granite", "diorite"]).grade(POOR),
        ),
        // Tin - rare situation (intrusive uplift mountain) but common and rich.
        (
            "surface_cassiterite",
            Vein::builder("cassiterite", 5, 15, 80, 180, 0.4, &["igneous_intrusive"])
                .grade(NORMAL)
                .deposits(),
        ),
        // Bismuth - surface via sedimentary.
        (
            "surface_bismuthinite",
            Vein::builder("bismuthinite", 32, 20, 40, 130, 0.3, &["sedimentary"])
                .grade(POOR)
                .indicator(14),
        ),
        // Zinc - requires a different source from bismuth, surface via extrusive.
        (
            "surface_sphalerite",
            Vein::builder("sphalerite", 30, 20, 40, 130, 0.3, &["igneous_extrusive"]).grade(POOR),
        ),
        // Iron - both surface via extrusive and sedimentary. Extrusive has
        // one ore, sedimentary has two, so the two are higher rarity.
        (
            "surface_hematite",
            Vein::builder("hematite", 35, 20, 10, 90, 0.4, &["igneous_extrusive"])
                .grade(NORMAL)
                .indicator(24),
        ),
        (
            "surface_magnetite",
            Vein::builder("magnetite", 70, 20, 10, 90, 0.4, &["sedimentary"])
                .grade(NORMAL)
                .indicator(24),
        ),
        (
            "surface_limonite",
            Vein::builder("limonite", 70, 20, 10, 90, 0.4, &["sedimentary"])
                .grade(NORMAL)
                .indicator(24),
        ),
        // Iron in mountains, much more common because terrain this high is rare.
        (
            "mountain_hematite",
            Vein::builder("hematite", 10, 20, 90, 180, 0.5, &["igneous_extrusive"])
                .grade(RICH)
                .indicator(12),
        ),
        (
            "mountain_magnetite",
            Vein::builder("magnetite", 20, 20, 90, 180, 0.5, &["sedimentary"])
                .grade(RICH)
                .indicator(12),
        ),
        (
            "mountain_limonite",
            Vein::builder("limonite", 20, 20, 90, 180, 0.5, &["sedimentary"])
                .grade(RICH)
                .indicator(12),
        ),
        // Nickel - only deep spawning intrusive.
        (
            "normal_garnierite",
            Vein::builder("garnierite", 25, 18, -80, 0, 0.3, &["igneous_intrusive"]).grade(NORMAL),
        ),
        // Graphite - for steel, found in low metamorphic.
        (
            "graphite",
            Vein::builder("graphite", 20, 20, -30, 60, 0.4, &["gneiss", "marble", "quartzite", "schist"]),
        ),
        // Coal, spawns roughly based on real-world grade, big flat discs.
        (
            "lignite",
            Vein::builder("lignite", 160, 40, -20, -8, 0.85, &["sedimentary"])
                .disc(2)
                .project_offset(),
        ),
        (
            "bituminous_coal",
            Vein::builder("bituminous_coal", 210, 50, -35, -12, 0.9, &["sedimentary"])
                .disc(3)
                .project_offset(),
        ),
        // Sulfur spawns near lava level in any low-level rock, common but small.
        (
            "sulfur",
            Vein::builder("sulfur", 4, 18, -64, -45, 0.25, &["igneous_intrusive", "metamorphic"])
                .disc(5)
                .near_lava(),
        ),
        // Redstone: cryolite is deep intrusive, cinnabar is deep metamorphic.
        (
            "cryolite",
            Vein::builder("cryolite", 16, 18, -70, -10, 0.7, &["granite", "diorite"]),
        ),
        (
            "cinnabar",
            Vein::builder("cinnabar", 14, 18, -70, 10, 0.6, &["quartzite", "phyllite", "gneiss", "schist"]),
        ),
        // Misc minerals - all spawning in discs, mostly in sedimentary rock.
        // Veins that spawn in all sedimentary are rarer than those that don't.
        (
            "saltpeter",
            Vein::builder("saltpeter", 110, 35, 40, 100, 0.4, &["sedimentary"]).disc(5),
        ),
        (
            "sylvite",
            Vein::builder("sylvite", 60, 35, 40, 100, 0.35, &["shale", "claystone", "chert"]).disc(5),
        ),
        (
            "borax",
            Vein::builder("borax", 40, 23, 40, 100, 0.2, &["claystone", "limestone", "shale"]).disc(3),
        ),
        (
            "gypsum",
            Vein::builder("gypsum", 70, 25, 40, 100, 0.3, &["sedimentary"]).disc(5),
        ),
        (
            "halite",
            Vein::builder("halite", 110, 35, -45, -12, 0.85, &["sedimentary"])
                .disc(4)
                .project_offset(),
        ),
        // Gems - fairly specific, but with no gameplay need they can be niche.
        (
            "lapis_lazuli",
            Vein::builder("lapis_lazuli", 30, 30, -20, 80, 0.12, &["limestone", "marble"]),
        ),
        (
            "diamond",
            Vein::builder("diamond", 30, 60, -64, 100, 0.15, &["gabbro"]).pipe(5),
        ),
        (
            "emerald",
            Vein::builder("emerald", 80, 60, -64, 100, 0.15, &["igneous_intrusive"]).pipe(5),
        ),
    ])
}

/// Bonus high-rarity gem veins, emitted to the secondary output tree.
///
/// # Errors
///
/// Same contract as [`ore_veins`].
pub fn surprise_veins() -> Result<Vec<NamedVein>> {
    build_all(vec![
        (
            "surprise_diamond",
            Vein::builder("diamond", 240, 60, -64, 100, 0.4, &["gabbro"]).pipe(5),
        ),
        (
            "surprise_emerald",
            Vein::builder("emerald", 240, 60, -64, 100, 0.4, &["igneous_intrusive"]).pipe(4),
        ),
    ])
}
