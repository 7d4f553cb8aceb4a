//! Headless demo: generate a space scene and run the simulation loop.
//!
//! Loads `astrogen.ron` (or `--config <path>`), applies CLI overrides, spawns a
//! deterministic scene from the configured seed, then runs the tick loop
//! against a recording render sink and logs what a real renderer would have
//! been asked to do.
//!
//! Run with `cargo run -p astrogen-demo -- --seed 42 --bodies 8 --ticks 300`.

mod spawn;

use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use astrogen_bodies::{RecordingSink, SceneState};
use astrogen_config::{CliArgs, GenConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();
    let config_path = args.config.clone().unwrap_or_else(|| PathBuf::from("astrogen.ron"));
    let mut config = GenConfig::load_or_default(&config_path)?;
    config.apply_cli_overrides(&args);
    astrogen_log::init_logging(Some(&config));

    info!(
        seed = config.scene.seed,
        bodies = config.scene.bodies,
        ticks = config.scene.ticks,
        "generating scene"
    );

    let mut rng = ChaCha8Rng::seed_from_u64(config.scene.seed);
    let mut sink = RecordingSink::new();
    let mut scene = SceneState::new();

    for _ in 0..config.scene.bodies {
        let body = spawn::random_body(&config, &mut rng)?;
        info!(
            kind = body.kind(),
            vertices = body.mesh().vertex_count(),
            triangles = body.mesh().triangle_count(),
            "spawned body"
        );
        scene.spawn(body, &mut sink);
    }
    info!(
        meshes = sink.submitted_meshes(),
        vertices = sink.submitted_vertices(),
        "scene geometry submitted"
    );

    for _ in 0..config.scene.ticks {
        scene.advance(config.scene.dt, &mut sink);
    }

    let live_trail_particles: usize =
        scene.bodies().filter_map(|(_, b)| b.trail()).map(|t| t.len()).sum();
    info!(
        elapsed = scene.elapsed() as f64,
        sink_calls = sink.calls().len(),
        live_trail_particles,
        "simulation finished"
    );

    Ok(())
}
