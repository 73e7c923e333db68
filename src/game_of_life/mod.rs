//! Game of Life core functionality

pub mod cell;
pub mod error;
pub mod grid;
pub mod library;
pub mod pattern;
pub mod rules;

pub use cell::Cell;
pub use error::{LifeError, LifeResult};
pub use grid::Grid;
pub use library::{KnownPattern, PatternCategory};
pub use pattern::Pattern;
pub use rules::GameOfLifeRules;
