//! Rock-category expansion.

use crate::error::{ConfigError, Result};
use crate::rock::{get_rock, rocks_in_category, RockCategory};

/// Resolve a vein's rock specifications to concrete rock names.
///
/// Each specification naming a known rock is included verbatim; one naming a
/// category includes every rock of that category in static table order.
/// Output order is deterministic so regenerated files are byte-stable. A
/// rock listed directly and again via its category appears twice; dedup
/// across mixed specifications is deliberately not performed, since the
/// committed output trees encode the current order.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownRockSpec`] naming the offending
/// specification and `vein_name` if a specification matches neither table.
pub fn expand_rocks(specs: &[&'static str], vein_name: &str) -> Result<Vec<&'static str>> {
    let mut rocks = Vec::new();
    for spec in specs {
        if get_rock(spec).is_some() {
            rocks.push(*spec);
        } else if let Some(category) = RockCategory::from_name(spec) {
            rocks.extend(rocks_in_category(category).map(|r| r.name));
        } else {
            return Err(ConfigError::UnknownRockSpec {
                spec: (*spec).to_string(),
                vein: vein_name.to_string(),
            });
        }
    }
    Ok(rocks)
}
