//! Display and output formatting utilities

use crate::engine::Grid;

/// Format grids for console output
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid as compact rows of block characters
    pub fn format_compact(grid: &Grid) -> String {
        let mut output = String::with_capacity(grid.height() * (grid.width() + 1));
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                output.push(if grid.get(x, y) { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// Format a grid with x/y coordinate labels along the edges
    pub fn format_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        output.push_str("    ");
        for x in 0..grid.width() {
            output.push_str(&format!("{:2} ", x % 100));
        }
        output.push('\n');

        for y in 0..grid.height() {
            output.push_str(&format!("{:2}  ", y % 100));
            for x in 0..grid.width() {
                output.push_str(if grid.get(x, y) { " █ " } else { " · " });
            }
            output.push('\n');
        }

        output
    }

    /// One-line summary of a grid's size and population
    pub fn format_summary(grid: &Grid) -> String {
        let area = grid.width() * grid.height();
        let density = if area > 0 {
            (grid.live_count() as f64 / area as f64) * 100.0
        } else {
            0.0
        };
        format!(
            "{}x{} grid, {} live cells ({:.1}% density)",
            grid.width(),
            grid.height(),
            grid.live_count(),
            density
        )
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
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
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_formatting() {
        let grid = Grid::from_rows(vec![
            vec![true, false, true],
            vec![false, true, false],
        ])
        .unwrap();

        let compact = GridFormatter::format_compact(&grid);
        assert!(compact.contains('█'));
        assert!(compact.contains('·'));
        assert_eq!(compact.lines().count(), 2);

        let with_coords = GridFormatter::format_with_coords(&grid);
        assert!(with_coords.contains(" 0 "));
        assert!(with_coords.contains(" 2 "));
    }

    #[test]
    fn test_grid_summary() {
        let mut grid = Grid::new(10, 10).unwrap();
        grid.set(0, 0, true).unwrap();
        let summary = GridFormatter::format_summary(&grid);
        assert!(summary.contains("10x10"));
        assert!(summary.contains("1 live"));
        assert!(summary.contains("1.0%"));
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
