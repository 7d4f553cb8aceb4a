//! Configuration for the procedural generator.
//!
//! Generation parameters persist to disk as RON files with forward/backward
//! compatible defaults, and can be overridden per run via clap CLI flags.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CometRanges, GenConfig, NebulaRanges, PlanetRanges, SceneSettings, StarRanges,
};
pub use error::ConfigError;
