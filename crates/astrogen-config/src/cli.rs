//! Command-line argument parsing for the generator.

use std::path::PathBuf;

use clap::Parser;

use crate::GenConfig;

/// Generator command-line arguments.
///
/// CLI values override settings loaded from `astrogen.ron`.
#[derive(Parser, Debug)]
#[command(name = "astrogen", about = "Procedural celestial body generator")]
pub struct CliArgs {
    /// Universe seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of bodies to generate.
    #[arg(long)]
    pub bodies: Option<u32>,

    /// Simulation ticks to run.
    #[arg(long)]
    pub ticks: Option<u32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to the config file (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl GenConfig {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.scene.seed = seed;
        }
        if let Some(bodies) = args.bodies {
            self.scene.bodies = bodies;
        }
        if let Some(ticks) = args.ticks {
            self.scene.ticks = ticks;
        }
        if let Some(ref level) = args.log_level {
            self.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_args() -> CliArgs {
        CliArgs { seed: None, bodies: None, ticks: None, log_level: None, config: None }
    }

    #[test]
    fn test_cli_override() {
        let mut config = GenConfig::default();
        let args = CliArgs { seed: Some(1337), bodies: Some(3), ..no_args() };
        config.apply_cli_overrides(&args);
        assert_eq!(config.scene.seed, 1337);
        assert_eq!(config.scene.bodies, 3);
        // Non-overridden fields retain defaults
        assert_eq!(config.scene.ticks, 120);
    }

    #[test]
    fn test_cli_no_override() {
        let original = GenConfig::default();
        let mut config = GenConfig::default();
        config.apply_cli_overrides(&no_args());
        assert_eq!(config, original);
    }
}
