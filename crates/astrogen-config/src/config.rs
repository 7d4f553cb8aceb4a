//! Configuration structs with sensible defaults and RON persistence.
//!
//! Default ranges match the spreads the generator was tuned with: comets are
//! large and fast, stars small and bright, nebulae vary widely in arm count
//! and density.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level generator configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GenConfig {
    /// Scene-wide settings (seed, body count, tick rate).
    pub scene: SceneSettings,
    /// Planet parameter ranges.
    pub planet: PlanetRanges,
    /// Star parameter ranges.
    pub star: StarRanges,
    /// Comet parameter ranges.
    pub comet: CometRanges,
    /// Nebula parameter ranges.
    pub nebula: NebulaRanges,
    /// Log level override (e.g., "debug", "info", "warn"). Empty = default.
    pub log_level: String,
}

/// Scene-wide simulation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneSettings {
    /// Universe seed for deterministic generation.
    pub seed: u64,
    /// Number of bodies to populate the scene with.
    pub bodies: u32,
    /// Simulation ticks to run (demo binary).
    pub ticks: u32,
    /// Fixed timestep per tick, in seconds.
    pub dt: f32,
    /// Bodies spawn within this distance of the origin.
    pub spawn_distance: f32,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self { seed: 0, bodies: 16, ticks: 120, dt: 1.0 / 60.0, spawn_distance: 500.0 }
    }
}

/// Randomization ranges for planets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlanetRanges {
    pub radius_min: f32,
    pub radius_max: f32,
    /// Sphere tessellation density.
    pub segments: u32,
    /// Probability in `[0, 1]` that a planet gets rings.
    pub ring_chance: f32,
    /// Per-vertex color jitter half-width.
    pub color_jitter: f32,
}

impl Default for PlanetRanges {
    fn default() -> Self {
        Self { radius_min: 5.0, radius_max: 100.0, segments: 32, ring_chance: 0.2, color_jitter: 0.15 }
    }
}

/// Randomization ranges for stars.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StarRanges {
    pub radius_min: f32,
    pub radius_max: f32,
    pub segments: u32,
    /// Pulse speed in radians per second.
    pub pulsation_speed: f32,
}

impl Default for StarRanges {
    fn default() -> Self {
        Self { radius_min: 0.5, radius_max: 1.5, segments: 32, pulsation_speed: 0.5 }
    }
}

/// Randomization ranges for comets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CometRanges {
    pub radius_min: f32,
    pub radius_max: f32,
    /// Velocity component range for the x/z axes.
    pub speed_min: f32,
    pub speed_max: f32,
    /// Trail life lost per tick.
    pub trail_decay: f32,
    /// Trail particle cap.
    pub trail_max_particles: usize,
}

impl Default for CometRanges {
    fn default() -> Self {
        Self {
            radius_min: 4.0,
            radius_max: 15.0,
            speed_min: 1.0,
            speed_max: 5.0,
            trail_decay: 0.01,
            trail_max_particles: 256,
        }
    }
}

/// Randomization ranges for nebulae.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NebulaRanges {
    pub scale_min: f32,
    pub scale_max: f32,
    pub arms_min: u32,
    pub arms_max: u32,
    pub points_per_arm_min: u32,
    pub points_per_arm_max: u32,
    pub thickness_min: f32,
    pub thickness_max: f32,
    pub depth: f32,
    pub particles_per_point: u32,
}

impl Default for NebulaRanges {
    fn default() -> Self {
        Self {
            scale_min: 0.5,
            scale_max: 4.0,
            arms_min: 2,
            arms_max: 5,
            points_per_arm_min: 200,
            points_per_arm_max: 2000,
            thickness_min: 0.1,
            thickness_max: 1.0,
            depth: 5.0,
            particles_per_point: 10,
        }
    }
}

impl GenConfig {
    /// Load configuration from a RON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        ron::from_str(&content)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    /// Load from a RON file, falling back to defaults when the file is absent.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::info!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save configuration to a RON file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?;
        std::fs::write(path, content)
            .map_err(|source| ConfigError::Write { path: path.to_path_buf(), source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_through_ron_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("astrogen.ron");

        let mut config = GenConfig::default();
        config.scene.seed = 424242;
        config.comet.trail_decay = 0.02;
        config.save(&path).unwrap();

        let loaded = GenConfig::load(&path).unwrap();
        assert_eq!(loaded, config, "config must round-trip unchanged through RON");
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GenConfig::load_or_default(&dir.path().join("nope.ron")).unwrap();
        assert_eq!(config, GenConfig::default());
    }

    #[test]
    fn test_partial_file_fills_remaining_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.ron");
        std::fs::write(&path, "(scene: (seed: 7))").unwrap();

        let config = GenConfig::load(&path).unwrap();
        assert_eq!(config.scene.seed, 7);
        assert_eq!(config.planet, PlanetRanges::default(), "unspecified sections default");
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ron");
        std::fs::write(&path, "(scene: (seed: \"not a number\"))").unwrap();
        assert!(matches!(GenConfig::load(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_errors_name_the_offending_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.ron");
        let err = GenConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert_eq!(err.path(), Some(path.as_path()));
        assert!(
            err.to_string().contains("missing.ron"),
            "the message must point at the file: {err}"
        );
    }

    #[test]
    fn test_default_ranges_are_ordered() {
        let c = GenConfig::default();
        assert!(c.planet.radius_min < c.planet.radius_max);
        assert!(c.star.radius_min < c.star.radius_max);
        assert!(c.comet.speed_min < c.comet.speed_max);
        assert!(c.nebula.points_per_arm_min < c.nebula.points_per_arm_max);
    }
}
