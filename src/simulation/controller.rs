//! Interactive simulation state for front ends
//!
//! A GUI or terminal front end owns one [`Simulation`] and drives it from its
//! event loop: pointer input goes through [`Simulation::toggle_at_pixel`], a
//! periodic timer calls [`Simulation::tick`], and repaints read
//! [`Simulation::grid`].

use crate::config::SimulationConfig;
use crate::game_of_life::{Grid, LifeResult, Pattern};
use log::debug;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    generation: u64,
    running: bool,
    cell_size: u32,
}

impl Simulation {
    pub const DEFAULT_CELL_SIZE: u32 = 10;

    /// Create a stopped simulation over a blank grid
    pub fn new(height: usize, width: usize) -> LifeResult<Self> {
        Ok(Self {
            grid: Grid::new(height, width)?,
            generation: 0,
            running: false,
            cell_size: Self::DEFAULT_CELL_SIZE,
        })
    }

    pub fn from_config(config: &SimulationConfig) -> LifeResult<Self> {
        Ok(Self::new(config.height, config.width)?.with_cell_size(config.cell_size))
    }

    /// Set the pixel size of one cell (at least 1)
    pub fn with_cell_size(mut self, cell_size: u32) -> Self {
        self.cell_size = cell_size.max(1);
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn toggle_running(&mut self) {
        self.running = !self.running;
    }

    /// Advance one generation
    pub fn step(&mut self) {
        self.grid.next_generation();
        self.generation += 1;
    }

    /// Advance `generations` generations
    pub fn advance(&mut self, generations: usize) {
        for _ in 0..generations {
            self.step();
        }
    }

    /// Timer hook: steps only while running. Returns whether a step happened.
    pub fn tick(&mut self) -> bool {
        if self.running {
            self.step();
        }
        self.running
    }

    /// Stop, kill every cell and reset the generation counter
    pub fn clear(&mut self) {
        self.stop();
        self.grid.clear();
        self.generation = 0;
    }

    /// Stop, refill randomly and reset the generation counter
    pub fn randomize(&mut self, probability: f64) -> LifeResult<()> {
        self.randomize_with(probability, &mut rand::rng())
    }

    pub fn randomize_with<R: Rng + ?Sized>(&mut self, probability: f64, rng: &mut R) -> LifeResult<()> {
        self.grid.randomize_with(probability, rng)?;
        self.stop();
        self.generation = 0;
        Ok(())
    }

    /// Stamp a pattern with its top-left corner at (`row`, `col`)
    pub fn place_pattern(&mut self, pattern: &Pattern, row: isize, col: isize) {
        pattern.place_on_grid(&mut self.grid, row, col);
    }

    /// Stamp a pattern centred on the grid and return its anchor.
    ///
    /// Patterns larger than the grid get a negative anchor and are clipped
    /// evenly on both sides.
    pub fn insert_pattern(&mut self, pattern: &Pattern) -> (isize, isize) {
        let row = centre_offset(self.grid.height(), pattern.height());
        let col = centre_offset(self.grid.width(), pattern.width());
        self.place_pattern(pattern, row, col);
        (row, col)
    }

    /// Stop and replace the grid with a blank one of the new size
    pub fn resize(&mut self, height: usize, width: usize) -> LifeResult<()> {
        let grid = Grid::new(height, width)?;
        debug!(
            "resizing grid {}x{} -> {}x{}",
            self.grid.height(),
            self.grid.width(),
            height,
            width
        );
        self.stop();
        self.grid = grid;
        self.generation = 0;
        Ok(())
    }

    /// Map a pixel position to the cell under it
    pub fn cell_at_pixel(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        let col = usize::try_from(x).ok()? / self.cell_size as usize;
        let row = usize::try_from(y).ok()? / self.cell_size as usize;
        (row < self.grid.height() && col < self.grid.width()).then_some((row, col))
    }

    /// Toggle the cell under a pixel. Editing is refused while running.
    /// Returns whether a cell changed.
    pub fn toggle_at_pixel(&mut self, x: i32, y: i32) -> bool {
        match self.cell_at_pixel(x, y) {
            Some((row, col)) => self.toggle_cell(row, col),
            None => false,
        }
    }

    /// Toggle one cell. Editing is refused while running or out of range.
    /// Returns whether a cell changed.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> bool {
        if self.running || row >= self.grid.height() || col >= self.grid.width() {
            return false;
        }
        self.grid.toggle_cell(row, col);
        true
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self {
            grid: Grid::default(),
            generation: 0,
            running: false,
            cell_size: Self::DEFAULT_CELL_SIZE,
        }
    }
}

/// Offset that centres `inner` within `outer`, rounding toward zero
fn centre_offset(outer: usize, inner: usize) -> isize {
    (outer as isize - inner as isize) / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::KnownPattern;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_step_counts_generations() {
        let mut sim = Simulation::new(10, 10).unwrap();
        sim.step();
        sim.advance(4);
        assert_eq!(sim.generation(), 5);
    }

    #[test]
    fn test_tick_only_while_running() {
        let mut sim = Simulation::new(10, 10).unwrap();
        sim.insert_pattern(&KnownPattern::Blinker.pattern());
        let initial = sim.grid().clone();

        assert!(!sim.tick());
        assert_eq!(sim.generation(), 0);

        sim.start();
        assert!(sim.tick());
        assert!(sim.tick());
        assert_eq!(sim.generation(), 2);
        assert_eq!(sim.grid(), &initial);

        sim.toggle_running();
        assert!(!sim.is_running());
        assert!(!sim.tick());
    }

    #[test]
    fn test_clear_and_randomize_reset_counter() {
        let mut sim = Simulation::new(8, 8).unwrap();
        sim.start();
        sim.advance(3);
        sim.randomize_with(1.0, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(sim.generation(), 0);
        assert!(!sim.is_running());
        assert_eq!(sim.grid().living_count(), 64);

        sim.advance(2);
        sim.start();
        sim.clear();
        assert_eq!(sim.generation(), 0);
        assert!(!sim.is_running());
        assert!(sim.grid().is_empty());
    }

    #[test]
    fn test_bad_probability_leaves_state_alone() {
        let mut sim = Simulation::new(4, 4).unwrap();
        sim.start();
        sim.advance(2);
        assert!(sim.randomize(2.0).is_err());
        assert!(sim.is_running());
        assert_eq!(sim.generation(), 2);
    }

    #[test]
    fn test_insert_pattern_centres() {
        let mut sim = Simulation::new(50, 50).unwrap();
        let anchor = sim.insert_pattern(&KnownPattern::Glider.pattern());
        assert_eq!(anchor, (23, 23));
        assert_eq!(sim.grid().living_count(), 5);
        assert!(sim.grid().get_cell(23, 24).unwrap().is_alive());
    }

    #[test]
    fn test_insert_oversized_pattern_clips() {
        let mut sim = Simulation::new(10, 10).unwrap();
        let anchor = sim.insert_pattern(&KnownPattern::GosperGliderGun.pattern());
        assert_eq!(anchor, (0, -13));
        // gun columns 13..=22 land on the grid
        assert!(sim.grid().get_cell(2, 0).unwrap().is_alive());
        assert!(sim.grid().get_cell(4, 7).unwrap().is_alive());
    }

    #[test]
    fn test_resize() {
        let mut sim = Simulation::new(10, 10).unwrap();
        sim.insert_pattern(&KnownPattern::Block.pattern());
        sim.start();
        sim.advance(3);

        sim.resize(20, 30).unwrap();
        assert_eq!((sim.grid().height(), sim.grid().width()), (20, 30));
        assert!(sim.grid().is_empty());
        assert_eq!(sim.generation(), 0);
        assert!(!sim.is_running());

        assert!(sim.resize(0, 30).is_err());
        assert_eq!(sim.grid().width(), 30);
    }

    #[test]
    fn test_pixel_mapping() {
        let sim = Simulation::new(5, 8).unwrap().with_cell_size(10);
        assert_eq!(sim.cell_at_pixel(0, 0), Some((0, 0)));
        assert_eq!(sim.cell_at_pixel(79, 49), Some((4, 7)));
        assert_eq!(sim.cell_at_pixel(35, 12), Some((1, 3)));
        assert_eq!(sim.cell_at_pixel(80, 0), None);
        assert_eq!(sim.cell_at_pixel(0, 50), None);
        assert_eq!(sim.cell_at_pixel(-1, 5), None);
    }

    #[test]
    fn test_toggle_at_pixel() {
        let mut sim = Simulation::new(5, 5).unwrap().with_cell_size(4);
        assert!(sim.toggle_at_pixel(9, 2));
        assert!(sim.grid().get_cell(0, 2).unwrap().is_alive());

        assert!(!sim.toggle_at_pixel(100, 100));

        sim.start();
        assert!(!sim.toggle_at_pixel(9, 2));
        assert!(sim.grid().get_cell(0, 2).unwrap().is_alive());
    }

    #[test]
    fn test_from_config() {
        let config = SimulationConfig {
            height: 12,
            width: 34,
            generations: 1,
            density: 0.5,
            seed: None,
            cell_size: 0,
        };
        let sim = Simulation::from_config(&config).unwrap();
        assert_eq!((sim.grid().height(), sim.grid().width()), (12, 34));
        assert_eq!(sim.cell_size(), 1);
    }
}
