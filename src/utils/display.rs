//! Display and output formatting utilities

use crate::game_of_life::{Grid, KnownPattern, Pattern, PatternCategory};
use std::fmt::Write;
use std::sync::atomic::{AtomicBool, Ordering};

static COLOR_ENABLED: AtomicBool = AtomicBool::new(true);

/// Format grids and patterns for console output
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid in compact form, one character per cell
    pub fn format_grid_compact(grid: &Grid) -> String {
        let mut output = String::with_capacity(grid.height() * (grid.width() + 1));
        for row in 0..grid.height() {
            for col in 0..grid.width() {
                output.push(if is_alive(grid, row, col) { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// Format a grid with coordinates
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for col in 0..grid.width() {
            let _ = write!(output, "{:2}", col % 10);
        }
        output.push('\n');

        // Rows with row numbers
        for row in 0..grid.height() {
            let _ = write!(output, "{:2} ", row);
            for col in 0..grid.width() {
                output.push_str(if is_alive(grid, row, col) { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// Format a pattern's matrix with `O` and `.`
    pub fn format_pattern(pattern: &Pattern) -> String {
        let mut output = String::with_capacity(pattern.height() * (pattern.width() + 1));
        for row in 0..pattern.height() {
            for col in 0..pattern.width() {
                output.push(if pattern.get(row, col) { 'O' } else { '.' });
            }
            output.push('\n');
        }
        output
    }

    /// One header per category followed by its patterns, size and period
    pub fn format_catalog() -> String {
        let mut output = String::new();
        for category in PatternCategory::ALL {
            let _ = writeln!(output, "-- {} --", category);
            for known in KnownPattern::in_category(category) {
                let pattern = known.pattern();
                let _ = writeln!(
                    output,
                    "  {:<24} {:>2}x{:<2}  period {}",
                    known.name(),
                    pattern.height(),
                    pattern.width(),
                    known.period()
                );
            }
        }
        output
    }

    /// Generation banner followed by the compact grid
    pub fn format_frame(grid: &Grid, generation: u64) -> String {
        format!(
            "Generation {} (Living: {}):\n{}",
            generation,
            grid.living_count(),
            Self::format_grid_compact(grid)
        )
    }
}

/// Renderers only walk in-range coordinates
fn is_alive(grid: &Grid, row: usize, col: usize) -> bool {
    grid.get_cell(row, col).is_ok_and(|cell| cell.is_alive())
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Turn coloring on or off for the whole process
    pub fn set_enabled(enabled: bool) {
        COLOR_ENABLED.store(enabled, Ordering::Relaxed);
    }

    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        COLOR_ENABLED.load(Ordering::Relaxed)
            && std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }

    /// Format a section heading
    pub fn heading(text: &str) -> String {
        Self::colored(text, Color::Cyan)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Cyan,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Cyan => 36,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> Grid {
        Grid::from_cells(vec![
            vec![true, false, true],
            vec![false, true, false],
        ])
        .unwrap()
    }

    #[test]
    fn test_grid_formatting() {
        let grid = sample_grid();
        assert_eq!(GridFormatter::format_grid_compact(&grid), "█·█\n·█·\n");

        let with_coords = GridFormatter::format_grid_with_coords(&grid);
        assert!(with_coords.starts_with("    0 1 2\n"));
        assert!(with_coords.contains(" 1 ··██··"));
    }

    #[test]
    fn test_frame() {
        let frame = GridFormatter::format_frame(&sample_grid(), 7);
        assert!(frame.starts_with("Generation 7 (Living: 3):\n"));
    }

    #[test]
    fn test_pattern_formatting() {
        let glider = KnownPattern::Glider.pattern();
        assert_eq!(GridFormatter::format_pattern(&glider), ".O.\n..O\nOOO\n");
    }

    #[test]
    fn test_catalog_lists_everything() {
        let catalog = GridFormatter::format_catalog();
        for known in KnownPattern::ALL {
            assert!(catalog.contains(known.name()), "missing {}", known);
        }
        assert!(catalog.contains("-- Generators --"));
        assert!(catalog.contains("period 15"));
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        // Should either be colored or plain text
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));
    }
}
