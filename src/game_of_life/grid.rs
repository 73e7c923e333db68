//! Bounded grid representation and the generation step

use super::error::{LifeError, LifeResult};
use super::rules::GameOfLifeRules;
use super::Cell;
use itertools::Itertools;
use log::debug;
use rand::Rng;
use std::fmt;

/// Moore neighbourhood offsets, row-major, centre excluded
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Represents a Game of Life grid with hard edges.
///
/// Cells live in a row-major buffer. A second buffer of the same size is kept
/// around so that [`Grid::next_generation`] can write the new state without
/// touching cells that still have to be read, then swap the two.
#[derive(Debug, Clone)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
    scratch: Vec<Cell>,
}

impl Grid {
    pub const DEFAULT_HEIGHT: usize = 50;
    pub const DEFAULT_WIDTH: usize = 50;
    pub const DEFAULT_DENSITY: f64 = 0.3;

    /// Create a new grid with every cell dead
    pub fn new(height: usize, width: usize) -> LifeResult<Self> {
        if height == 0 || width == 0 {
            return Err(LifeError::InvalidDimensions { height, width });
        }

        let len = height * width;
        Ok(Self {
            height,
            width,
            cells: vec![Cell::default(); len],
            scratch: vec![Cell::default(); len],
        })
    }

    /// Build a grid from a 2D boolean array. Rows must all be the same length.
    pub fn from_cells(rows: Vec<Vec<bool>>) -> LifeResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut grid = Self::new(height, width)?;

        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(LifeError::InvalidDimensions {
                    height,
                    width: values.len(),
                });
            }
            for (col, alive) in values.into_iter().enumerate() {
                let idx = grid.offset(row, col);
                grid.cells[idx] = Cell::new(alive);
            }
        }

        Ok(grid)
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    #[inline]
    fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    /// Buffer index for in-range coordinates, `OutOfBounds` otherwise
    fn index(&self, row: usize, col: usize) -> LifeResult<usize> {
        if self.contains(row, col) {
            Ok(self.offset(row, col))
        } else {
            Err(LifeError::OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            })
        }
    }

    /// Get the cell at the given coordinates.
    ///
    /// Unlike the mutators this does not swallow bad coordinates; an
    /// out-of-range position is reported as [`LifeError::OutOfBounds`].
    pub fn get_cell(&self, row: usize, col: usize) -> LifeResult<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set a cell's state. Out-of-range coordinates are ignored.
    pub fn set_cell_state(&mut self, row: usize, col: usize, alive: bool) {
        if let Ok(idx) = self.index(row, col) {
            self.cells[idx].set_alive(alive);
        }
    }

    /// Flip a cell's state. Out-of-range coordinates are ignored.
    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        if let Ok(idx) = self.index(row, col) {
            self.cells[idx].toggle();
        }
    }

    /// Count living neighbours of a cell. Neighbours past the edge count as
    /// dead, and an out-of-range position has no living neighbours at all.
    pub fn count_alive_neighbors(&self, row: usize, col: usize) -> u8 {
        if !self.contains(row, col) {
            return 0;
        }

        let mut count = 0;
        for &(dr, dc) in NEIGHBOR_OFFSETS.iter() {
            if self.is_neighbor_alive(row, col, dr, dc) {
                count += 1;
            }
        }
        count
    }

    fn is_neighbor_alive(&self, row: usize, col: usize, dr: isize, dc: isize) -> bool {
        match (row.checked_add_signed(dr), col.checked_add_signed(dc)) {
            (Some(r), Some(c)) if self.contains(r, c) => self.cells[self.offset(r, c)].is_alive(),
            _ => false,
        }
    }

    /// Advance the whole grid by one generation.
    ///
    /// Every neighbour count is read from the current buffer while the new
    /// states go into the scratch buffer; the buffers are swapped afterwards.
    pub fn next_generation(&mut self) {
        let mut next = std::mem::take(&mut self.scratch);

        for row in 0..self.height {
            for col in 0..self.width {
                let idx = self.offset(row, col);
                let neighbors = self.count_alive_neighbors(row, col);
                let alive = GameOfLifeRules::should_be_alive(self.cells[idx].is_alive(), neighbors);
                next[idx] = Cell::new(alive);
            }
        }

        std::mem::swap(&mut self.cells, &mut next);
        self.scratch = next;
    }

    /// Randomize with the thread-local generator
    pub fn randomize(&mut self, probability: f64) -> LifeResult<()> {
        self.randomize_with(probability, &mut rand::rng())
    }

    /// Randomize with [`Grid::DEFAULT_DENSITY`]
    pub fn randomize_default(&mut self) {
        // the default density is always within range
        let _ = self.randomize(Self::DEFAULT_DENSITY);
    }

    /// Make each cell independently alive with the given probability.
    ///
    /// A cell is alive when the uniform draw in `[0, 1)` is less than or equal
    /// to `probability`. A probability of exactly zero never produces a live
    /// cell. Nothing is modified if `probability` is outside `[0, 1]`.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, probability: f64, rng: &mut R) -> LifeResult<()> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(LifeError::InvalidProbability(probability));
        }

        for cell in self.cells.iter_mut() {
            let draw: f64 = rng.random();
            cell.set_alive(probability > 0.0 && draw <= probability);
        }

        debug!(
            "randomized {}x{} grid at p={}: {} living",
            self.height,
            self.width,
            probability,
            self.living_count()
        );
        Ok(())
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| cell.set_alive(false));
    }

    /// Row-major text dump followed by a blank line
    pub fn render_text(&self) -> String {
        format!("{}\n", self)
    }

    /// All living cell coordinates in row-major order
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .positions(Cell::is_alive)
            .map(|idx| (idx / self.width, idx % self.width))
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Check if the grid has no living cells
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_alive())
    }

    fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }
}

impl Default for Grid {
    fn default() -> Self {
        let len = Self::DEFAULT_HEIGHT * Self::DEFAULT_WIDTH;
        Self {
            height: Self::DEFAULT_HEIGHT,
            width: Self::DEFAULT_WIDTH,
            cells: vec![Cell::default(); len],
            scratch: vec![Cell::default(); len],
        }
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.height == other.height && self.width == other.width && self.cells == other.cells
    }
}

impl Eq for Grid {}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row.iter().map(Cell::display_char).join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn full_grid(height: usize, width: usize) -> Grid {
        Grid::from_cells(vec![vec![true; width]; height]).unwrap()
    }

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(3, 4).unwrap();
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.width(), 4);
        assert!(grid.is_empty());
        assert_eq!(grid.living_count(), 0);
    }

    #[test]
    fn test_default_grid_is_50_by_50() {
        let grid = Grid::default();
        assert_eq!((grid.height(), grid.width()), (50, 50));
        assert!(grid.is_empty());
        assert_eq!(grid, Grid::new(50, 50).unwrap());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Grid::new(0, 5),
            Err(LifeError::InvalidDimensions { height: 0, width: 5 })
        );
        assert!(Grid::new(5, 0).is_err());
        assert!(Grid::from_cells(vec![]).is_err());
        assert!(Grid::from_cells(vec![vec![true, false], vec![true]]).is_err());
    }

    #[test]
    fn test_get_cell_is_bounds_checked() {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.set_cell_state(1, 2, true);

        assert!(grid.get_cell(1, 2).unwrap().is_alive());
        assert!(!grid.get_cell(0, 0).unwrap().is_alive());
        assert_eq!(
            grid.get_cell(2, 0),
            Err(LifeError::OutOfBounds { row: 2, col: 0, height: 2, width: 3 })
        );
        assert!(grid.get_cell(0, 3).is_err());
    }

    #[test]
    fn test_mutators_ignore_out_of_bounds() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_cell_state(3, 0, true);
        grid.set_cell_state(0, 3, true);
        grid.toggle_cell(10, 10);
        assert!(grid.is_empty());

        grid.toggle_cell(2, 2);
        assert!(grid.get_cell(2, 2).unwrap().is_alive());
        grid.toggle_cell(2, 2);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_neighbor_counting() {
        let grid = full_grid(3, 3);
        assert_eq!(grid.count_alive_neighbors(1, 1), 8);
        assert_eq!(grid.count_alive_neighbors(0, 0), 3);
        assert_eq!(grid.count_alive_neighbors(0, 1), 5);
        assert_eq!(grid.count_alive_neighbors(2, 2), 3);
    }

    #[test]
    fn test_neighbor_counting_out_of_range_is_zero() {
        let grid = full_grid(3, 3);
        assert_eq!(grid.count_alive_neighbors(3, 1), 0);
        assert_eq!(grid.count_alive_neighbors(1, 3), 0);
        assert_eq!(grid.count_alive_neighbors(usize::MAX, 0), 0);
    }

    #[test]
    fn test_neighbor_count_excludes_self() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_cell_state(1, 1, true);
        assert_eq!(grid.count_alive_neighbors(1, 1), 0);
        assert_eq!(grid.count_alive_neighbors(0, 0), 1);
    }

    #[test]
    fn test_corner_cell_dies() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set_cell_state(0, 0, true);
        grid.next_generation();
        assert!(grid.is_empty());

        grid.set_cell_state(4, 4, true);
        grid.next_generation();
        assert!(grid.is_empty());
    }

    #[test]
    fn test_update_is_simultaneous() {
        // A row-by-row in-place update would let the first births feed the
        // later counts; the vertical blinker must become exactly horizontal.
        let mut grid = Grid::from_cells(vec![
            vec![false, true, false],
            vec![false, true, false],
            vec![false, true, false],
        ])
        .unwrap();
        grid.next_generation();

        let expected = Grid::from_cells(vec![
            vec![false, false, false],
            vec![true, true, true],
            vec![false, false, false],
        ])
        .unwrap();
        assert_eq!(grid, expected);
    }

    #[test]
    fn test_full_block_edges() {
        // 3x3 all alive: corners survive with 3, edges and centre die
        let mut grid = full_grid(3, 3);
        grid.next_generation();
        assert_eq!(grid.live_cells(), vec![(0, 0), (0, 2), (2, 0), (2, 2)]);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut grid = full_grid(4, 4);
        grid.clear();
        assert!(grid.is_empty());
        grid.clear();
        assert!(grid.is_empty());
    }

    #[test]
    fn test_randomize_extremes() {
        let mut grid = Grid::new(20, 20).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        grid.randomize_with(1.0, &mut rng).unwrap();
        assert_eq!(grid.living_count(), 400);

        grid.randomize_with(0.0, &mut rng).unwrap();
        assert!(grid.is_empty());

        grid.randomize(1.0).unwrap();
        assert_eq!(grid.living_count(), 400);
        grid.randomize(0.0).unwrap();
        assert!(grid.is_empty());
    }

    #[test]
    fn test_randomize_is_reproducible_with_seed() {
        let mut a = Grid::new(16, 16).unwrap();
        let mut b = Grid::new(16, 16).unwrap();
        a.randomize_with(0.4, &mut StdRng::seed_from_u64(42)).unwrap();
        b.randomize_with(0.4, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_randomize_density_is_plausible() {
        let mut grid = Grid::new(100, 100).unwrap();
        grid.randomize_with(0.3, &mut StdRng::seed_from_u64(3)).unwrap();
        let living = grid.living_count();
        assert!((2500..3500).contains(&living), "living = {}", living);
    }

    #[test]
    fn test_randomize_rejects_bad_probability() {
        let mut grid = full_grid(3, 3);
        assert_eq!(grid.randomize(1.5), Err(LifeError::InvalidProbability(1.5)));
        assert!(grid.randomize(-0.1).is_err());
        assert!(grid.randomize(f64::NAN).is_err());
        // nothing was touched
        assert_eq!(grid.living_count(), 9);
    }

    #[test]
    fn test_render_text() {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.set_cell_state(0, 0, true);
        grid.set_cell_state(1, 2, true);

        assert_eq!(grid.to_string(), "■ □ □\n□ □ ■\n");
        assert_eq!(grid.render_text(), "■ □ □\n□ □ ■\n\n");
    }

    #[test]
    fn test_live_cells_row_major() {
        let grid = Grid::from_cells(vec![
            vec![false, true, false],
            vec![true, false, true],
        ])
        .unwrap();
        assert_eq!(grid.live_cells(), vec![(0, 1), (1, 0), (1, 2)]);
    }

    #[test]
    fn test_equality_ignores_scratch_buffer() {
        let mut stepped = Grid::new(4, 4).unwrap();
        stepped.set_cell_state(1, 1, true);
        stepped.next_generation();
        assert_eq!(stepped, Grid::new(4, 4).unwrap());
    }

    proptest! {
        #[test]
        fn prop_neighbor_count_in_range(
            cells in proptest::collection::vec(any::<bool>(), 36),
            row in 0usize..8,
            col in 0usize..8,
        ) {
            let rows: Vec<Vec<bool>> = cells.chunks(6).map(<[bool]>::to_vec).collect();
            let grid = Grid::from_cells(rows).unwrap();
            let count = grid.count_alive_neighbors(row, col);
            prop_assert!(count <= 8);
            if row >= 6 || col >= 6 {
                prop_assert_eq!(count, 0);
            }
        }

        #[test]
        fn prop_out_of_range_writes_are_noops(row in 5usize..100, col in 0usize..100) {
            let mut grid = Grid::new(5, 5).unwrap();
            grid.set_cell_state(row, col, true);
            grid.toggle_cell(row, col);
            grid.toggle_cell(col, row);
            prop_assert!(grid.is_empty());
        }
    }
}
