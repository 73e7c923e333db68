//! Summary of a simulation run

use super::analysis::Behavior;
use super::Simulation;
use serde::Serialize;
use std::fmt;

/// Population at one generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenerationStats {
    pub generation: u64,
    pub living: usize,
}

/// What a run started from, how it was classified and how the population moved
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub height: usize,
    pub width: usize,
    /// Pattern name or random-fill description
    pub seed: String,
    pub initial_behavior: Behavior,
    pub history: Vec<GenerationStats>,
}

impl RunReport {
    /// Start a report from the simulation's current state
    pub fn new(simulation: &Simulation, seed: impl Into<String>, initial_behavior: Behavior) -> Self {
        let mut report = Self {
            height: simulation.grid().height(),
            width: simulation.grid().width(),
            seed: seed.into(),
            initial_behavior,
            history: Vec::new(),
        };
        report.record(simulation);
        report
    }

    /// Append the simulation's current population
    pub fn record(&mut self, simulation: &Simulation) {
        self.history.push(GenerationStats {
            generation: simulation.generation(),
            living: simulation.grid().living_count(),
        });
    }

    /// Number of generations advanced since the first record
    pub fn generations(&self) -> u64 {
        match (self.history.first(), self.history.last()) {
            (Some(first), Some(last)) => last.generation - first.generation,
            _ => 0,
        }
    }

    pub fn initial_living(&self) -> usize {
        self.history.first().map_or(0, |stats| stats.living)
    }

    pub fn final_living(&self) -> usize {
        self.history.last().map_or(0, |stats| stats.living)
    }

    /// Highest population seen and the first generation it occurred at
    pub fn peak(&self) -> Option<GenerationStats> {
        self.history
            .iter()
            .copied()
            .reduce(|best, stats| if stats.living > best.living { stats } else { best })
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Run Report:")?;
        writeln!(f, "  Grid: {}x{}", self.height, self.width)?;
        writeln!(f, "  Seed: {}", self.seed)?;
        writeln!(f, "  Initial behaviour: {}", self.initial_behavior)?;
        writeln!(f, "  Generations: {}", self.generations())?;
        writeln!(f, "  Living cells: {} → {}", self.initial_living(), self.final_living())?;
        if let Some(peak) = self.peak() {
            writeln!(f, "  Peak: {} at generation {}", peak.living, peak.generation)?;
        }
        Ok(())
    }
}
