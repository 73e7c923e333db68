//! Named seed patterns and their placement onto a grid

use super::error::{LifeError, LifeResult};
use super::Grid;
use log::debug;

/// An immutable, named, rectangular matrix of cell states.
///
/// Placing a pattern is a one-time stamp: the grid keeps no link back to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    name: String,
    height: usize,
    width: usize,
    cells: Vec<bool>,
}

impl Pattern {
    /// Create a pattern from a 2D boolean array.
    ///
    /// Fails with [`LifeError::InvalidPattern`] when the matrix is empty or
    /// its rows differ in length.
    pub fn new(name: impl Into<String>, rows: Vec<Vec<bool>>) -> LifeResult<Self> {
        let name = name.into();
        let invalid = |reason: String| LifeError::InvalidPattern {
            name: name.clone(),
            reason,
        };

        let height = rows.len();
        if height == 0 {
            return Err(invalid("pattern has no rows".to_string()));
        }

        let width = rows[0].len();
        if width == 0 {
            return Err(invalid("pattern rows cannot be empty".to_string()));
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(invalid(format!(
                    "row {} has length {}, expected {}",
                    i,
                    row.len(),
                    width
                )));
            }
        }

        let cells = rows.into_iter().flatten().collect();
        Ok(Self {
            name,
            height,
            width,
            cells,
        })
    }

    /// Build a catalog pattern from rows of `O` (alive) and `.` (dead)
    fn from_art(name: &str, art: &[&str]) -> Self {
        let height = art.len();
        let width = art[0].len();
        debug_assert!(
            art.iter().all(|row| row.len() == width),
            "catalog pattern '{}' is not rectangular",
            name
        );

        let cells = art
            .iter()
            .flat_map(|row| row.bytes().map(|b| b == b'O'))
            .collect();
        Self {
            name: name.to_string(),
            height,
            width,
            cells,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Cell value at the given position, `false` outside the pattern
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.cells[row * self.width + col]
    }

    /// Coordinates of the live cells, row-major
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &alive)| alive)
            .map(|(idx, _)| (idx / self.width, idx % self.width))
            .collect()
    }

    /// Stamp the pattern onto `grid` with its top-left corner at
    /// (`start_row`, `start_col`).
    ///
    /// Every target cell inside the grid is overwritten with the pattern's
    /// value, dead cells included. Cells that land outside the grid are
    /// dropped.
    pub fn place_on_grid(&self, grid: &mut Grid, start_row: isize, start_col: isize) {
        let mut clipped = 0usize;

        for row in 0..self.height {
            for col in 0..self.width {
                match target(start_row, row, grid.height()).zip(target(start_col, col, grid.width())) {
                    Some((grid_row, grid_col)) => {
                        grid.set_cell_state(grid_row, grid_col, self.cells[row * self.width + col])
                    }
                    None => clipped += 1,
                }
            }
        }

        if clipped > 0 {
            debug!(
                "pattern '{}' at ({}, {}) clipped {} of {} cells",
                self.name,
                start_row,
                start_col,
                clipped,
                self.cells.len()
            );
        }
    }

    // ============================ Still Lifes ============================

    pub fn block() -> Self {
        Self::from_art("Block", &["OO", "OO"])
    }

    pub fn bee_hive() -> Self {
        Self::from_art("Bee Hive", &[".OO.", "O..O", ".OO."])
    }

    pub fn loaf() -> Self {
        Self::from_art("Loaf", &[".OO.", "O..O", ".O.O", "..O."])
    }

    pub fn boat() -> Self {
        Self::from_art("Boat", &["OO.", "O.O", ".O."])
    }

    pub fn tub() -> Self {
        Self::from_art("Tub", &[".O.", "O.O", ".O."])
    }

    // ============================ Oscillators ============================

    /// Period 2
    pub fn blinker() -> Self {
        Self::from_art("Blinker", &["OOO"])
    }

    /// Period 2
    pub fn toad() -> Self {
        Self::from_art("Toad", &[".OOO", "OOO."])
    }

    /// Period 2
    pub fn beacon() -> Self {
        Self::from_art("Beacon", &["OO..", "OO..", "..OO", "..OO"])
    }

    /// Period 3
    pub fn pulsar() -> Self {
        Self::from_art(
            "Pulsar",
            &[
                "..OOO...OOO..",
                ".............",
                "O....O.O....O",
                "O....O.O....O",
                "O....O.O....O",
                "..OOO...OOO..",
                ".............",
                "..OOO...OOO..",
                "O....O.O....O",
                "O....O.O....O",
                "O....O.O....O",
                ".............",
                "..OOO...OOO..",
            ],
        )
    }

    /// Period 15
    pub fn pentadecathlon() -> Self {
        Self::from_art(
            "Pentadecathlon",
            &[
                "..O..", "..O..", ".O.O.", "..O..", "..O..", "..O..", "..O..", ".O.O.", "..O..",
                "..O..",
            ],
        )
    }

    // ============================ Spaceships ============================

    /// Travels one cell down and one cell right every 4 generations
    pub fn glider() -> Self {
        Self::from_art("Glider", &[".O.", "..O", "OOO"])
    }

    /// Travels two cells left every 4 generations
    pub fn lightweight_spaceship() -> Self {
        Self::from_art("Lightweight Spaceship", &[".O..O", "O....", "O...O", "OOOO."])
    }

    /// Travels two cells left every 4 generations
    pub fn middleweight_spaceship() -> Self {
        Self::from_art(
            "Middleweight Spaceship",
            &["...O..", ".O...O", "O.....", "O....O", "OOOOO."],
        )
    }

    /// Travels two cells left every 4 generations
    pub fn heavyweight_spaceship() -> Self {
        Self::from_art(
            "Heavyweight Spaceship",
            &["...OO..", ".O....O", "O......", "O.....O", "OOOOOO."],
        )
    }

    // ============================ Glider Guns ============================

    /// Period 30; releases a south-east glider each period
    pub fn gosper_glider_gun() -> Self {
        Self::from_art(
            "Gosper Glider Gun",
            &[
                "........................O...........",
                "......................O.O...........",
                "............OO......OO............OO",
                "...........O...O....OO............OO",
                "OO........O.....O...OO..............",
                "OO........O...O.OO....O.O...........",
                "..........O.....O.......O...........",
                "...........O...O....................",
                "............OO......................",
            ],
        )
    }
}

/// Grid coordinate for `start + offset`, if it lands inside `0..limit`
fn target(start: isize, offset: usize, limit: usize) -> Option<usize> {
    let pos = start.checked_add_unsigned(offset)?;
    usize::try_from(pos).ok().filter(|&pos| pos < limit)
}
