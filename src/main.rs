//! Paper Plane entry point
//!
//! Runs a headless demo session: the autopilot flies, every frame is built
//! into a vertex list, and the run ends on a crash or after `MAX_TICKS`.
//!
//! Usage: `paper-plane [--seed N] [--config config.json]`

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use paper_plane::GameConfig;
use paper_plane::renderer::{FrameSink, VertexSink};
use paper_plane::sim::{Session, TickInput, TickOutcome};

/// Ten minutes at 60 frames per second
const MAX_TICKS: u64 = 60 * 60 * 10;

#[derive(Parser, Debug)]
#[command(author, version, about = "Paper Plane headless autopilot run", long_about = None)]
struct Args {
    // Seed for the obstacle sequence
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    // JSON file with level and flight tuning
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Paper Plane (headless) starting...");

    let args = Args::parse();
    let seed = args.seed;
    let config = match args.config {
        None => GameConfig::default(),
        Some(path) => match GameConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::from(2);
            }
        },
    };

    let deflection_step = config.flight.deflection_step;
    let mut session = match Session::new(config, seed) {
        Ok(session) => session,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::from(2);
        }
    };

    let mut sink = VertexSink::new();
    let input = TickInput {
        autopilot: true,
        ..Default::default()
    };

    while session.ticks < MAX_TICKS {
        match session.step(&input) {
            Ok(TickOutcome::Flying) => {
                sink.deflection = session.plane.deflection(deflection_step);
                sink.submit(&session.frame());
            }
            Ok(TickOutcome::Crashed) => break,
            Err(e) => {
                log::error!("Simulation error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    println!(
        "seed {}: {} after {} ticks, mileage {:.2} ({} frames, {} vertices in last frame)",
        seed,
        if session.is_crashed() { "crashed" } else { "survived" },
        session.ticks,
        session.mileage(),
        sink.frames,
        sink.vertex_count(),
    );
    ExitCode::SUCCESS
}
