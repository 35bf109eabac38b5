//! The vein descriptor and its validating builder.
//!
//! A [`Vein`] captures one ore placement rule. Shape-specific geometry lives
//! on the [`VeinShape`] variants, so a cluster vein cannot carry a disc
//! height. Invariants (density in (0, 1), non-empty rock list, ordered
//! vertical range) are enforced at construction by [`VeinBuilder::build`],
//! never by later assertions.

use crate::error::{ConfigError, Result};
use crate::ore::GradeWeights;

/// Shape of a vein, with the geometry fields relevant to that shape.
///
/// The `size` field of the vein itself is shape-dependent: cluster radius,
/// pipe height, or disc width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VeinShape {
    /// Roughly spherical blob; `size` is its radius.
    Cluster,
    /// Vertical pipe; `size` is its height.
    Pipe {
        /// Horizontal radius of the pipe.
        radius: u32,
    },
    /// Flat horizontal disc; `size` is its width.
    Disc {
        /// Vertical thickness of the disc.
        height: u32,
    },
}

impl VeinShape {
    /// The feature type identifier the consuming engine expects.
    #[must_use]
    pub fn feature_type(self) -> &'static str {
        match self {
            VeinShape::Cluster => "tfc:cluster_vein",
            VeinShape::Pipe { .. } => "tfc:pipe_vein",
            VeinShape::Disc { .. } => "tfc:disc_vein",
        }
    }
}

/// Whether and how a vein projects cosmetic blocks to the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// Project straight up.
    Surface,
    /// Project with a lateral offset.
    Offset,
}

/// One named ore-vein placement rule.
///
/// Constructed once from the static tables through [`Vein::builder`],
/// read-only thereafter. Many veins may reference the same ore.
#[derive(Debug, Clone, PartialEq)]
pub struct Vein {
    /// Name of the ore placed by this vein (a key into the ore table).
    pub ore: &'static str,
    /// Shape kind plus shape-specific geometry.
    pub shape: VeinShape,
    /// Inverse spawn frequency; higher is rarer.
    pub rarity: u32,
    /// Shape-dependent extent (cluster radius / pipe height / disc width).
    pub size: u32,
    /// Lower vertical bound, inclusive.
    pub min_y: i32,
    /// Upper vertical bound, inclusive.
    pub max_y: i32,
    /// Probability a candidate block inside the shape is replaced, in (0, 1).
    pub density: f64,
    /// Grade weights; required for graded ores, ignored for minerals.
    pub grade: Option<GradeWeights>,
    /// Eligible rocks or rock categories, resolved by the expander.
    pub rocks: &'static [&'static str],
    /// Optional biome tag restriction.
    pub biomes: Option<&'static str>,
    /// Whether bonus surface deposit loot spawns.
    pub deposits: bool,
    /// Rarity of above-ground indicator blocks.
    pub indicator_rarity: u32,
    /// Rarity of underground indicator blocks.
    pub underground_rarity: u32,
    /// Count of underground indicator blocks per spawn.
    pub underground_count: u32,
    /// Surface projection behavior, if any.
    pub project: Option<Projection>,
    /// Whether the vein only spawns near lava.
    pub near_lava: bool,
}

impl Vein {
    /// Start building a vein from its required fields.
    ///
    /// Defaults: cluster shape, no grade, indicator rarity 12, underground
    /// indicator (1, 3), no biome restriction, no deposits, no projection.
    #[must_use]
    pub fn builder(
        ore: &'static str,
        rarity: u32,
        size: u32,
        min_y: i32,
        max_y: i32,
        density: f64,
        rocks: &'static [&'static str],
    ) -> VeinBuilder {
        VeinBuilder {
            ore,
            shape: VeinShape::Cluster,
            rarity,
            size,
            min_y,
            max_y,
            density,
            grade: None,
            rocks,
            biomes: None,
            deposits: false,
            indicator_rarity: 12,
            underground_rarity: 1,
            underground_count: 3,
            project: None,
            near_lava: false,
        }
    }
}

/// Builder applying defaults and enforcing vein invariants.
#[derive(Debug, Clone)]
pub struct VeinBuilder {
    ore: &'static str,
    shape: VeinShape,
    rarity: u32,
    size: u32,
    min_y: i32,
    max_y: i32,
    density: f64,
    grade: Option<GradeWeights>,
    rocks: &'static [&'static str],
    biomes: Option<&'static str>,
    deposits: bool,
    indicator_rarity: u32,
    underground_rarity: u32,
    underground_count: u32,
    project: Option<Projection>,
    near_lava: bool,
}

impl VeinBuilder {
    /// Set the grade weight triple (graded ores only).
    #[must_use]
    pub fn grade(mut self, grade: GradeWeights) -> Self {
        self.grade = Some(grade);
        self
    }

    /// Make this a pipe vein with the given radius; `size` becomes height.
    #[must_use]
    pub fn pipe(mut self, radius: u32) -> Self {
        self.shape = VeinShape::Pipe { radius };
        self
    }

    /// Make this a disc vein with the given height; `size` becomes width.
    #[must_use]
    pub fn disc(mut self, height: u32) -> Self {
        self.shape = VeinShape::Disc { height };
        self
    }

    /// Restrict the vein to a biome tag.
    #[must_use]
    pub fn biomes(mut self, tag: &'static str) -> Self {
        self.biomes = Some(tag);
        self
    }

    /// Enable bonus surface deposit loot.
    #[must_use]
    pub fn deposits(mut self) -> Self {
        self.deposits = true;
        self
    }

    /// Override the above-ground indicator rarity.
    #[must_use]
    pub fn indicator(mut self, rarity: u32) -> Self {
        self.indicator_rarity = rarity;
        self
    }

    /// Override the underground indicator rarity and count.
    #[must_use]
    pub fn deep_indicator(mut self, rarity: u32, count: u32) -> Self {
        self.underground_rarity = rarity;
        self.underground_count = count;
        self
    }

    /// Project the vein to the surface.
    #[must_use]
    pub fn project(mut self) -> Self {
        self.project = Some(Projection::Surface);
        self
    }

    /// Project the vein to the surface with a lateral offset.
    #[must_use]
    pub fn project_offset(mut self) -> Self {
        self.project = Some(Projection::Offset);
        self
    }

    /// Restrict the vein to spawning near lava.
    #[must_use]
    pub fn near_lava(mut self) -> Self {
        self.near_lava = true;
        self
    }

    /// Validate and produce the vein.
    ///
    /// `name` identifies the vein in error messages. A density given as an
    /// integer percentage in `[1, 100]` is normalized to a fraction here, so
    /// both table formats are accepted.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the density falls outside `(0, 1)` after
    /// normalization, the rock list is empty, or the vertical range is
    /// inverted.
    pub fn build(self, name: &str) -> Result<Vein> {
        let density = if self.density >= 1.0 && self.density <= 100.0 {
            self.density / 100.0
        } else {
            self.density
        };
        if !(density > 0.0 && density < 1.0) {
            return Err(ConfigError::InvalidDensity {
                density: self.density,
                vein: name.to_string(),
            });
        }
        if self.rocks.is_empty() {
            return Err(ConfigError::EmptyRocks {
                vein: name.to_string(),
            });
        }
        if self.min_y > self.max_y {
            return Err(ConfigError::InvertedRange {
                vein: name.to_string(),
                min_y: self.min_y,
                max_y: self.max_y,
            });
        }
        Ok(Vein {
            ore: self.ore,
            shape: self.shape,
            rarity: self.rarity,
            size: self.size,
            min_y: self.min_y,
            max_y: self.max_y,
            density,
            grade: self.grade,
            rocks: self.rocks,
            biomes: self.biomes,
            deposits: self.deposits,
            indicator_rarity: self.indicator_rarity,
            underground_rarity: self.underground_rarity,
            underground_count: self.underground_count,
            project: self.project,
            near_lava: self.near_lava,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ore::POOR;

    fn base_builder() -> VeinBuilder {
        Vein::builder("native_copper", 24, 20, 40, 130, 0.25, &["igneous_extrusive"])
    }

    #[test]
    fn test_defaults() {
        let vein = base_builder().build("test").unwrap();
        assert_eq!(vein.shape, VeinShape::Cluster);
        assert_eq!(vein.indicator_rarity, 12);
        assert_eq!(vein.underground_rarity, 1);
        assert_eq!(vein.underground_count, 3);
        assert_eq!(vein.grade, None);
        assert_eq!(vein.project, None);
        assert!(!vein.deposits);
        assert!(!vein.near_lava);
    }

    #[test]
    fn test_builder_options() {
        let vein = base_builder()
            .grade(POOR)
            .deposits()
            .indicator(14)
            .deep_indicator(1, 4)
            .build("test")
            .unwrap();
        assert_eq!(vein.grade, Some(POOR));
        assert!(vein.deposits);
        assert_eq!(vein.indicator_rarity, 14);
        assert_eq!(vein.underground_count, 4);
    }

    #[test]
    fn test_shapes() {
        let pipe = base_builder().pipe(5).build("test").unwrap();
        assert_eq!(pipe.shape, VeinShape::Pipe { radius: 5 });
        assert_eq!(pipe.shape.feature_type(), "tfc:pipe_vein");

        let disc = base_builder().disc(2).project_offset().build("test").unwrap();
        assert_eq!(disc.shape, VeinShape::Disc { height: 2 });
        assert_eq!(disc.project, Some(Projection::Offset));
    }

    #[test]
    fn test_percentage_density_normalized() {
        let vein = Vein::builder("native_copper", 24, 20, 40, 130, 25.0, &["granite"])
            .build("test")
            .unwrap();
        assert!((vein.density - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_density_rejected() {
        let result = Vein::builder("native_copper", 24, 20, 40, 130, 0.0, &["granite"]).build("bad");
        assert!(matches!(result, Err(ConfigError::InvalidDensity { .. })));

        let result =
            Vein::builder("native_copper", 24, 20, 40, 130, 120.0, &["granite"]).build("bad");
        assert!(matches!(result, Err(ConfigError::InvalidDensity { .. })));
    }

    #[test]
    fn test_empty_rocks_rejected() {
        let result = Vein::builder("native_copper", 24, 20, 40, 130, 0.25, &[]).build("bad");
        assert!(matches!(result, Err(ConfigError::EmptyRocks { .. })));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let result = Vein::builder("native_copper", 24, 20, 130, 40, 0.25, &["granite"]).build("bad");
        assert!(matches!(result, Err(ConfigError::InvertedRange { .. })));
    }

    #[test]
    fn test_error_names_vein() {
        let err = Vein::builder("native_copper", 24, 20, 40, 130, 0.0, &["granite"])
            .build("surface_native_copper")
            .unwrap_err();
        assert!(err.to_string().contains("surface_native_copper"));
    }
}
