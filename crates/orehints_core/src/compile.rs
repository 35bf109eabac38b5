//! Vein-to-configuration compilation.
//!
//! Turns a [`Vein`] plus its expanded rock list into the nested JSON
//! configuration structure the consuming engine expects. Pure: the same
//! inputs always yield an identical [`Value`], and serde_json's sorted
//! object keys make serialization byte-stable too.

use serde_json::{json, Map, Value};

use crate::error::{ConfigError, Result};
use crate::ore::{get_ore, mineral_indicator, Ore, OreGrade};
use crate::vein::{Projection, Vein, VeinShape};

/// Namespace of every emitted resource identifier.
pub const DOMAIN: &str = "tfc";

/// Extra weight of the bonus deposit block appended to graded block lists.
const DEPOSIT_WEIGHT: u32 = 10;

/// Normalize a density to a probability rounded to 2 decimal places.
///
/// Accepts either a direct fraction in `(0, 1)` or an integer percentage in
/// `[1, 100]`. The mapping is idempotent: a value that is already a rounded
/// fraction maps to itself.
#[must_use]
pub fn vein_density(density: f64) -> f64 {
    let fraction = if density >= 1.0 {
        density / 100.0
    } else {
        density
    };
    (fraction * 100.0).round() / 100.0
}

/// An absolute vertical anchor object.
fn vertical_anchor(y: i32) -> Value {
    json!({ "absolute": y })
}

/// The weighted (graded) or unweighted (mineral) ore blocks for one rock.
fn ore_blocks(name: &str, vein: &Vein, ore: &Ore, rock: &str) -> Result<Value> {
    if ore.graded {
        let weights = vein.grade.ok_or_else(|| ConfigError::MissingGrade {
            ore: ore.name.to_string(),
            vein: name.to_string(),
        })?;
        let mut blocks: Vec<Value> = OreGrade::ALL
            .into_iter()
            .map(|grade| {
                json!({
                    "weight": weights.weight(grade),
                    "block": format!("{DOMAIN}:ore/{}_{}/{rock}", grade.name(), vein.ore),
                })
            })
            .collect();
        if vein.deposits {
            blocks.push(json!({
                "weight": DEPOSIT_WEIGHT,
                "block": format!("{DOMAIN}:deposit/{}/{rock}", vein.ore),
            }));
        }
        Ok(Value::Array(blocks))
    } else {
        Ok(json!([{ "block": format!("{DOMAIN}:ore/{}/{rock}", vein.ore) }]))
    }
}

/// The indicator descriptor for a vein, if its ore has one.
///
/// Graded ores reference their small-ore block; minerals reference the loose
/// rock from the indicator table. Minerals without a table entry get none.
fn indicator(vein: &Vein, ore: &Ore) -> Option<Value> {
    let block = if ore.graded {
        format!("{DOMAIN}:ore/small_{}", vein.ore)
    } else {
        let rock = mineral_indicator(vein.ore)?;
        format!("{DOMAIN}:rock/loose/{rock}")
    };
    Some(json!({
        "rarity": vein.indicator_rarity,
        "underground_rarity": vein.underground_rarity,
        "underground_count": vein.underground_count,
        "blocks": [{ "block": block }],
    }))
}

/// Compile one vein and its expanded rock list into a feature configuration.
///
/// `name` is the vein's table name; it becomes the `random_name` seed field
/// and identifies the vein in error messages. Optional fields (`biomes`,
/// `project`, `project_offset`, `near_lava`, `indicator`) are omitted when
/// unset rather than emitted as `null`.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the vein references an unknown ore or a
/// graded ore without grade weights.
pub fn vein_config(name: &str, vein: &Vein, rocks: &[&str]) -> Result<Value> {
    let ore = get_ore(vein.ore).ok_or_else(|| ConfigError::UnknownOre {
        ore: vein.ore.to_string(),
        vein: name.to_string(),
    })?;

    let mut cfg = Map::new();
    cfg.insert("rarity".into(), json!(vein.rarity));
    cfg.insert("density".into(), json!(vein_density(vein.density)));
    cfg.insert("min_y".into(), vertical_anchor(vein.min_y));
    cfg.insert("max_y".into(), vertical_anchor(vein.max_y));
    cfg.insert("random_name".into(), json!(name));

    match vein.shape {
        VeinShape::Cluster => {
            cfg.insert("size".into(), json!(vein.size));
        }
        VeinShape::Pipe { radius } => {
            // Fixed skew/slant ranges; `size` is the pipe height.
            cfg.insert("min_skew".into(), json!(5));
            cfg.insert("max_skew".into(), json!(13));
            cfg.insert("min_slant".into(), json!(0));
            cfg.insert("max_slant".into(), json!(2));
            cfg.insert("sign".into(), json!(0));
            cfg.insert("height".into(), json!(vein.size));
            cfg.insert("radius".into(), json!(radius));
        }
        VeinShape::Disc { height } => {
            cfg.insert("size".into(), json!(vein.size));
            cfg.insert("height".into(), json!(height));
        }
    }

    if let Some(biomes) = vein.biomes {
        cfg.insert("biomes".into(), json!(biomes));
    }
    match vein.project {
        Some(Projection::Surface) => {
            cfg.insert("project".into(), json!(true));
        }
        Some(Projection::Offset) => {
            cfg.insert("project".into(), json!(true));
            cfg.insert("project_offset".into(), json!(true));
        }
        None => {}
    }
    if vein.near_lava {
        cfg.insert("near_lava".into(), json!(true));
    }

    let blocks: Vec<Value> = rocks
        .iter()
        .map(|rock| {
            Ok(json!({
                "replace": [format!("{DOMAIN}:rock/raw/{rock}")],
                "with": ore_blocks(name, vein, ore, rock)?,
            }))
        })
        .collect::<Result<_>>()?;
    cfg.insert("blocks".into(), Value::Array(blocks));

    if let Some(indicator) = indicator(vein, ore) {
        cfg.insert("indicator".into(), indicator);
    }

    Ok(Value::Object(cfg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expand::expand_rocks;
    use crate::veins::ore_veins;
    use proptest::prelude::*;

    fn compiled(name: &str) -> Value {
        let veins = ore_veins().unwrap();
        let (_, vein) = veins.iter().find(|(n, _)| *n == name).unwrap();
        let rocks = expand_rocks(vein.rocks, name).unwrap();
        vein_config(name, vein, &rocks).unwrap()
    }

    #[test]
    fn test_density_fraction_passes_through() {
        assert!((vein_density(0.25) - 0.25).abs() < f64::EPSILON);
        assert!((vein_density(0.85) - 0.85).abs() < f64::EPSILON);
    }

    #[test]
    fn test_density_percentage_maps_to_fraction() {
        assert!((vein_density(25.0) - 0.25).abs() < f64::EPSILON);
        assert!((vein_density(60.0) - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn test_surface_native_copper_example() {
        let cfg = compiled("surface_native_copper");
        assert_eq!(cfg["size"], json!(20));
        assert_eq!(cfg["rarity"], json!(24));
        assert_eq!(cfg["density"], json!(0.25));
        assert_eq!(cfg["min_y"], json!({ "absolute": 40 }));
        assert_eq!(cfg["max_y"], json!({ "absolute": 130 }));

        let blocks = cfg["blocks"].as_array().unwrap();
        let rocks: Vec<_> = blocks
            .iter()
            .map(|b| b["replace"][0].as_str().unwrap())
            .collect();
        assert_eq!(
            rocks,
            [
                "tfc:rock/raw/rhyolite",
                "tfc:rock/raw/basalt",
                "tfc:rock/raw/andesite",
                "tfc:rock/raw/dacite"
            ]
        );

        // Grade weights 70/25/5 per rock, plus the weight-10 deposit entry.
        for block in blocks {
            let with = block["with"].as_array().unwrap();
            assert_eq!(with.len(), 4);
            assert_eq!(with[0]["weight"], json!(70));
            assert_eq!(with[1]["weight"], json!(25));
            assert_eq!(with[2]["weight"], json!(5));
            assert_eq!(with[3]["weight"], json!(10));
            assert!(with[0]["block"]
                .as_str()
                .unwrap()
                .starts_with("tfc:ore/poor_native_copper/"));
            assert!(with[3]["block"]
                .as_str()
                .unwrap()
                .starts_with("tfc:deposit/native_copper/"));
        }

        let indicator = &cfg["indicator"];
        assert_eq!(indicator["rarity"], json!(14));
        assert_eq!(indicator["underground_rarity"], json!(1));
        assert_eq!(indicator["underground_count"], json!(3));
        assert_eq!(
            indicator["blocks"][0]["block"],
            json!("tfc:ore/small_native_copper")
        );
    }

    #[test]
    fn test_lignite_disc_example() {
        let cfg = compiled("lignite");
        assert_eq!(cfg["height"], json!(2));
        assert_eq!(cfg["size"], json!(40));
        assert_eq!(cfg["project"], json!(true));
        assert_eq!(cfg["project_offset"], json!(true));
        assert!(cfg.get("radius").is_none());
        assert!(cfg.get("min_skew").is_none());

        // Ungraded: one unweighted entry per rock, loose-rock indicator.
        let with = cfg["blocks"][0]["with"].as_array().unwrap();
        assert_eq!(with.len(), 1);
        assert!(with[0].get("weight").is_none());
        assert_eq!(
            cfg["indicator"]["blocks"][0]["block"],
            json!("tfc:rock/loose/basalt")
        );
    }

    #[test]
    fn test_pipe_shape_fields() {
        let cfg = compiled("diamond");
        assert_eq!(cfg["min_skew"], json!(5));
        assert_eq!(cfg["max_skew"], json!(13));
        assert_eq!(cfg["min_slant"], json!(0));
        assert_eq!(cfg["max_slant"], json!(2));
        assert_eq!(cfg["sign"], json!(0));
        assert_eq!(cfg["height"], json!(60));
        assert_eq!(cfg["radius"], json!(5));
        assert!(cfg.get("size").is_none());
    }

    #[test]
    fn test_grade_weights_passed_through_unchanged() {
        for (name, vein) in ore_veins().unwrap() {
            let Some(weights) = vein.grade else { continue };
            let rocks = expand_rocks(vein.rocks, name).unwrap();
            let cfg = vein_config(name, &vein, &rocks).unwrap();
            for block in cfg["blocks"].as_array().unwrap() {
                let with = block["with"].as_array().unwrap();
                let expected = if vein.deposits { 4 } else { 3 };
                assert_eq!(with.len(), expected, "vein '{name}'");
                let emitted: u64 = with[..3].iter().map(|b| b["weight"].as_u64().unwrap()).sum();
                assert_eq!(emitted, u64::from(weights.total()), "vein '{name}'");
            }
        }
    }

    #[test]
    fn test_ungraded_veins_emit_one_entry_per_rock() {
        for (name, vein) in ore_veins().unwrap() {
            if vein.grade.is_some() {
                continue;
            }
            let rocks = expand_rocks(vein.rocks, name).unwrap();
            let cfg = vein_config(name, &vein, &rocks).unwrap();
            let blocks = cfg["blocks"].as_array().unwrap();
            assert_eq!(blocks.len(), rocks.len(), "vein '{name}'");
            for block in blocks {
                assert_eq!(block["with"].as_array().unwrap().len(), 1, "vein '{name}'");
            }
        }
    }

    #[test]
    fn test_mineral_without_indicator_omits_field() {
        let cfg = compiled("cryolite");
        assert!(cfg.get("indicator").is_some()); // cryolite is in the table

        // amethyst has no indicator entry
        let vein = Vein::builder("amethyst", 25, 8, 40, 60, 0.2, &["sedimentary"])
            .disc(4)
            .build("amethyst")
            .unwrap();
        let rocks = expand_rocks(vein.rocks, "amethyst").unwrap();
        let cfg = vein_config("amethyst", &vein, &rocks).unwrap();
        assert!(cfg.get("indicator").is_none());
    }

    #[test]
    fn test_graded_without_weights_is_config_error() {
        let vein = Vein::builder("native_gold", 90, 15, 0, 70, 0.25, &["granite"])
            .build("bad_gold")
            .unwrap();
        let rocks = expand_rocks(vein.rocks, "bad_gold").unwrap();
        let err = vein_config("bad_gold", &vein, &rocks).unwrap_err();
        assert!(matches!(err, ConfigError::MissingGrade { .. }));
    }

    #[test]
    fn test_unknown_ore_is_config_error() {
        let vein = Vein::builder("unobtainium", 10, 10, 0, 10, 0.5, &["granite"])
            .build("bad")
            .unwrap();
        let err = vein_config("bad", &vein, &["granite"]).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownOre { .. }));
    }

    #[test]
    fn test_compilation_is_deterministic() {
        for (name, vein) in ore_veins().unwrap() {
            let rocks = expand_rocks(vein.rocks, name).unwrap();
            let a = vein_config(name, &vein, &rocks).unwrap();
            let b = vein_config(name, &vein, &rocks).unwrap();
            assert_eq!(
                serde_json::to_string(&a).unwrap(),
                serde_json::to_string(&b).unwrap(),
                "vein '{name}' compiled differently twice"
            );
        }
    }

    proptest! {
        #[test]
        fn prop_percentage_density_rounds(d in 1u32..=100) {
            let expected = (f64::from(d)).round() / 100.0;
            prop_assert!((vein_density(f64::from(d)) - expected).abs() < 1e-9);
        }

        #[test]
        fn prop_density_idempotent(d in 1u32..=99) {
            let once = vein_density(f64::from(d));
            prop_assert!((vein_density(once) - once).abs() < 1e-9);
        }

        #[test]
        fn prop_density_monotonic(a in 1u32..=99, b in 1u32..=99) {
            prop_assume!(a < b);
            prop_assert!(vein_density(f64::from(a)) < vein_density(f64::from(b)));
        }

        #[test]
        fn prop_cluster_config_stable(rarity in 1u32..500, size in 1u32..64, d in 1u32..=99) {
            let vein = Vein::builder("gypsum", rarity, size, -20, 80, f64::from(d), &["sedimentary"])
                .build("prop")
                .unwrap();
            let rocks = expand_rocks(vein.rocks, "prop").unwrap();
            let a = serde_json::to_string(&vein_config("prop", &vein, &rocks).unwrap()).unwrap();
            let b = serde_json::to_string(&vein_config("prop", &vein, &rocks).unwrap()).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
