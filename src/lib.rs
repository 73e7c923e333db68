//! Conway's Game of Life on a bounded grid
//!
//! The engine lives in [`game_of_life`]: cells, the grid and its generation
//! step, and the catalog of well-known seed patterns. [`simulation`] wraps a
//! grid with the state an interactive front end needs and can classify how
//! a configuration evolves.

pub mod config;
pub mod game_of_life;
pub mod simulation;
pub mod utils;

pub use config::Settings;
pub use game_of_life::{Cell, Grid, KnownPattern, LifeError, Pattern};
pub use simulation::{RunReport, Simulation};

use anyhow::{Context, Result};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generations searched when classifying the starting configuration
const CLASSIFY_WINDOW: usize = 60;

/// Build the starting simulation described by `settings`: the pattern
/// centred on the grid when one is given, a random fill otherwise.
///
/// Returns the simulation and a description of how it was seeded. Random
/// fills always use a concrete seed (drawn fresh when the settings have
/// none) so that a run can be reproduced from its report.
pub fn seed_simulation(settings: &Settings, pattern: Option<KnownPattern>) -> Result<(Simulation, String)> {
    let config = &settings.simulation;
    let mut simulation = Simulation::from_config(config).context("Failed to create grid")?;

    let description = match pattern {
        Some(known) => {
            let anchor = simulation.insert_pattern(&known.pattern());
            info!("placed {} at {:?}", known, anchor);
            known.name().to_string()
        }
        None => {
            let seed = config.seed.unwrap_or_else(|| rand::rng().random());
            simulation
                .randomize_with(config.density, &mut StdRng::seed_from_u64(seed))
                .context("Failed to randomize grid")?;
            info!("random fill at density {} with seed {}", config.density, seed);
            format!("random (density {}, seed {})", config.density, seed)
        }
    };

    Ok((simulation, description))
}

/// Run a simulation and call `on_generation` with the starting state and
/// after every generation
pub fn simulate_with<F>(settings: &Settings, pattern: Option<KnownPattern>, mut on_generation: F) -> Result<RunReport>
where
    F: FnMut(&Simulation) -> Result<()>,
{
    settings.validate()?;
    let (mut simulation, description) = seed_simulation(settings, pattern)?;

    let behavior = simulation::classify(simulation.grid(), CLASSIFY_WINDOW);
    let mut report = RunReport::new(&simulation, description, behavior);
    on_generation(&simulation)?;

    for _ in 0..settings.simulation.generations {
        simulation.step();
        report.record(&simulation);
        on_generation(&simulation)?;
    }

    Ok(report)
}

/// Main entry point for running a simulation headless
pub fn simulate(settings: &Settings, pattern: Option<KnownPattern>) -> Result<RunReport> {
    simulate_with(settings, pattern, |_| Ok(()))
}
