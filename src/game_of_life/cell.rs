//! Single cell state

use std::fmt;

const ALIVE_GLYPH: char = '■';
const DEAD_GLYPH: char = '□';

/// A single binary cell. Dead by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    alive: bool,
}

impl Cell {
    pub fn new(alive: bool) -> Self {
        Self { alive }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    #[inline]
    pub fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }

    #[inline]
    pub fn toggle(&mut self) {
        self.alive = !self.alive;
    }

    /// Glyph used by the text renderer
    pub fn display_char(&self) -> char {
        if self.alive {
            ALIVE_GLYPH
        } else {
            DEAD_GLYPH
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        Self::new(alive)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_char())
    }
}
