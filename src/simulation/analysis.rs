//! Behaviour analysis: still lifes, oscillators and spaceships

use crate::game_of_life::Grid;
use serde::Serialize;
use std::fmt;

/// Live cells of a grid, normalised to their bounding box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    origin: (usize, usize),
    cells: Vec<(usize, usize)>,
}

impl Shape {
    /// Shape of the grid's live cells, `None` when nothing is alive
    pub fn of(grid: &Grid) -> Option<Self> {
        let live = grid.live_cells();
        // row-major order puts the smallest row first
        let min_row = live.first()?.0;
        let min_col = live.iter().map(|&(_, col)| col).min()?;

        let cells = live
            .into_iter()
            .map(|(row, col)| (row - min_row, col - min_col))
            .collect();
        Some(Self {
            origin: (min_row, min_col),
            cells,
        })
    }

    /// Top-left corner of the bounding box in grid coordinates
    pub fn origin(&self) -> (usize, usize) {
        self.origin
    }

    /// Live cells relative to the bounding box
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    /// Same cells regardless of position
    pub fn same_shape(&self, other: &Shape) -> bool {
        self.cells == other.cells
    }

    /// Displacement from this shape's origin to `other`'s
    pub fn offset_to(&self, other: &Shape) -> (isize, isize) {
        (
            other.origin.0 as isize - self.origin.0 as isize,
            other.origin.1 as isize - self.origin.1 as isize,
        )
    }
}

/// Long-run behaviour of a configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Behavior {
    /// Every cell eventually dies
    Extinct,
    StillLife,
    Oscillator {
        period: usize,
    },
    /// The shape repeats displaced by (`row_shift`, `col_shift`)
    Spaceship {
        period: usize,
        row_shift: isize,
        col_shift: isize,
    },
    /// No repetition found within the search window
    Unsettled,
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Behavior::Extinct => write!(f, "extinct"),
            Behavior::StillLife => write!(f, "still life"),
            Behavior::Oscillator { period } => write!(f, "oscillator (period {})", period),
            Behavior::Spaceship {
                period,
                row_shift,
                col_shift,
            } => write!(
                f,
                "spaceship (period {}, moves {:+} rows {:+} cols)",
                period, row_shift, col_shift
            ),
            Behavior::Unsettled => write!(f, "unsettled"),
        }
    }
}

/// Smallest number of generations after which the grid is identical to its
/// starting state, searching up to `max_generations`
pub fn find_period(grid: &Grid, max_generations: usize) -> Option<usize> {
    let mut current = grid.clone();
    for generation in 1..=max_generations {
        current.next_generation();
        if current == *grid {
            return Some(generation);
        }
    }
    None
}

/// Classify how `grid` evolves over at most `max_generations` steps.
///
/// Exact repetition wins over translation, so a pattern that comes back in
/// place is an oscillator (or still life) even if its shape also recurs
/// displaced along the way.
pub fn classify(grid: &Grid, max_generations: usize) -> Behavior {
    let Some(initial) = Shape::of(grid) else {
        return Behavior::Extinct;
    };

    let mut current = grid.clone();
    for generation in 1..=max_generations {
        current.next_generation();

        let Some(shape) = Shape::of(&current) else {
            return Behavior::Extinct;
        };

        if current == *grid {
            return match generation {
                1 => Behavior::StillLife,
                period => Behavior::Oscillator { period },
            };
        }

        if shape.same_shape(&initial) {
            let (row_shift, col_shift) = initial.offset_to(&shape);
            return Behavior::Spaceship {
                period: generation,
                row_shift,
                col_shift,
            };
        }
    }

    Behavior::Unsettled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::{KnownPattern, PatternCategory};

    fn centred(known: KnownPattern) -> Grid {
        let pattern = known.pattern();
        let mut grid = Grid::new(60, 80).unwrap();
        pattern.place_on_grid(&mut grid, 10, 10);
        grid
    }

    #[test]
    fn test_shape_normalises_position() {
        let mut a = Grid::new(10, 10).unwrap();
        let mut b = Grid::new(10, 10).unwrap();
        KnownPattern::Glider.pattern().place_on_grid(&mut a, 1, 1);
        KnownPattern::Glider.pattern().place_on_grid(&mut b, 4, 6);

        let shape_a = Shape::of(&a).unwrap();
        let shape_b = Shape::of(&b).unwrap();
        assert!(shape_a.same_shape(&shape_b));
        assert_eq!(shape_a.origin(), (1, 1));
        assert_eq!(shape_a.offset_to(&shape_b), (3, 5));
        assert_eq!(shape_a.cells(), &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]);
    }

    #[test]
    fn test_empty_grid_has_no_shape() {
        let grid = Grid::new(3, 3).unwrap();
        assert!(Shape::of(&grid).is_none());
        assert_eq!(classify(&grid, 10), Behavior::Extinct);
    }

    #[test]
    fn test_find_period() {
        assert_eq!(find_period(&centred(KnownPattern::Beacon), 10), Some(2));
        assert_eq!(find_period(&centred(KnownPattern::Pentadecathlon), 20), Some(15));
        assert_eq!(find_period(&centred(KnownPattern::Pentadecathlon), 14), None);
        assert_eq!(find_period(&centred(KnownPattern::Glider), 10), None);
    }

    #[test]
    fn test_classify_catalog() {
        for known in KnownPattern::ALL {
            let behavior = classify(&centred(known), 40);
            match known.category() {
                PatternCategory::StillLife => assert_eq!(behavior, Behavior::StillLife, "{}", known),
                PatternCategory::Oscillator => assert_eq!(
                    behavior,
                    Behavior::Oscillator {
                        period: known.period()
                    },
                    "{}",
                    known
                ),
                PatternCategory::Spaceship => assert!(
                    matches!(behavior, Behavior::Spaceship { period: 4, .. }),
                    "{} classified as {:?}",
                    known,
                    behavior
                ),
                PatternCategory::Generator => assert_eq!(behavior, Behavior::Unsettled, "{}", known),
            }
        }
    }

    #[test]
    fn test_spaceship_directions() {
        assert_eq!(
            classify(&centred(KnownPattern::Glider), 10),
            Behavior::Spaceship {
                period: 4,
                row_shift: 1,
                col_shift: 1
            }
        );
        assert_eq!(
            classify(&centred(KnownPattern::HeavyweightSpaceship), 10),
            Behavior::Spaceship {
                period: 4,
                row_shift: 0,
                col_shift: -2
            }
        );
    }

    #[test]
    fn test_lone_cell_goes_extinct() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set_cell_state(2, 2, true);
        assert_eq!(classify(&grid, 5), Behavior::Extinct);
    }

    #[test]
    fn test_behavior_display() {
        assert_eq!(Behavior::Oscillator { period: 3 }.to_string(), "oscillator (period 3)");
        assert_eq!(
            Behavior::Spaceship {
                period: 4,
                row_shift: 0,
                col_shift: -2
            }
            .to_string(),
            "spaceship (period 4, moves +0 rows -2 cols)"
        );
    }
}
