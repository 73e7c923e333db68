//! Conway's B3/S23 transition rule

use super::Grid;

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Maximum neighbour count in the Moore neighbourhood
    pub const MAX_NEIGHBORS: u8 = 8;

    /// Check if a cell should be alive in the next generation given its current state and neighbor count
    pub fn should_be_alive(current_state: bool, neighbor_count: u8) -> bool {
        matches!((current_state, neighbor_count), (true, 2) | (true, 3) | (false, 3))
    }

    /// Return the next generation of `current`, leaving it untouched
    pub fn evolve(current: &Grid) -> Grid {
        let mut next = current.clone();
        next.next_generation();
        next
    }

    /// Evolve the grid for multiple generations
    pub fn evolve_generations(mut grid: Grid, generations: usize) -> Grid {
        for _ in 0..generations {
            grid.next_generation();
        }
        grid
    }

    /// Neighbour counts that keep a live cell alive
    pub fn survival_neighbor_counts() -> &'static [u8] {
        &[2, 3]
    }

    /// Neighbour counts that bring a dead cell to life
    pub fn birth_neighbor_counts() -> &'static [u8] {
        &[3]
    }
}
