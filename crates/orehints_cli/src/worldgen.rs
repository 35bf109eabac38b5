//! The worldgen driver: walks the vein tables and emits feature documents.

use serde_json::{json, Map, Value};

use orehints_book::default_lang;
use orehints_core::compile::{vein_config, DOMAIN};
use orehints_core::error::Result;
use orehints_core::expand::expand_rocks;
use orehints_core::veins::{ore_veins, surprise_veins, NamedVein};
use orehints_res::ResourceWriter;

/// Emit the configured and placed feature documents for one vein table.
fn generate_veins(writer: &mut dyn ResourceWriter, veins: &[NamedVein]) -> Result<()> {
    for &(name, ref vein) in veins {
        let rocks = expand_rocks(vein.rocks, name)?;
        let config = vein_config(name, vein, &rocks)?;

        writer.write(
            &["data", DOMAIN, "worldgen", "configured_feature", "vein", name],
            json!({
                "type": vein.shape.feature_type(),
                "config": config,
            }),
        );
        writer.write(
            &["data", DOMAIN, "worldgen", "placed_feature", "vein", name],
            json!({
                "feature": format!("{DOMAIN}:vein/{name}"),
                "placement": [],
            }),
        );
    }
    Ok(())
}

/// Emit the mod's own source-language entries.
fn generate_lang(writer: &mut dyn ResourceWriter) {
    let mut table = Map::new();
    for (key, text) in default_lang() {
        table.insert(key.to_string(), Value::String(text.to_string()));
    }
    writer.write(&["assets", DOMAIN, "lang", "en_us"], Value::Object(table));
}

/// Generate the main worldgen tree: every ore vein plus the language file.
///
/// # Errors
///
/// Returns a configuration error if any vein fails to expand or compile;
/// per-file write failures are counted by the writer instead.
pub fn generate(writer: &mut dyn ResourceWriter) -> Result<()> {
    let veins = ore_veins()?;
    generate_veins(writer, &veins)?;
    generate_lang(writer);
    Ok(())
}

/// Generate the bonus vein tree, destined for the secondary output root.
///
/// # Errors
///
/// Same contract as [`generate`].
pub fn generate_surprise(writer: &mut dyn ResourceWriter) -> Result<()> {
    let veins = surprise_veins()?;
    generate_veins(writer, &veins)
}
