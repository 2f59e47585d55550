//! Built-in seed patterns

use super::Grid;
use crate::error::EngineError;

/// A small stamp of live cells, used to seed a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    /// Live-cell offsets relative to the stamp's top-left corner.
    cells: &'static [(usize, usize)],
    width: usize,
    height: usize,
}

/// Glider: travels diagonally, period 4.
pub const GLIDER: Pattern = Pattern {
    name: "glider",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    width: 3,
    height: 3,
};

/// Blinker: period-2 oscillator.
pub const BLINKER: Pattern = Pattern {
    name: "blinker",
    cells: &[(0, 0), (1, 0), (2, 0)],
    width: 3,
    height: 1,
};

/// Toad: period-2 oscillator.
pub const TOAD: Pattern = Pattern {
    name: "toad",
    cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    width: 4,
    height: 2,
};

/// Block: 2x2 still life.
pub const BLOCK: Pattern = Pattern {
    name: "block",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    width: 2,
    height: 2,
};

/// Beacon: period-2 oscillator.
pub const BEACON: Pattern = Pattern {
    name: "beacon",
    cells: &[(0, 0), (1, 0), (0, 1), (2, 3), (3, 3), (3, 2)],
    width: 4,
    height: 4,
};

const BUILTINS: &[Pattern] = &[GLIDER, BLINKER, TOAD, BLOCK, BEACON];

impl Pattern {
    /// Look up a built-in pattern by name.
    pub fn builtin(name: &str) -> Option<Pattern> {
        BUILTINS.iter().copied().find(|p| p.name == name)
    }

    /// All built-in patterns.
    pub fn builtins() -> &'static [Pattern] {
        BUILTINS
    }

    /// Names of all built-in patterns.
    pub fn builtin_names() -> Vec<&'static str> {
        BUILTINS.iter().map(|p| p.name).collect()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Copy this pattern's live cells onto `grid` with its top-left corner
    /// at `(x, y)`.
    ///
    /// Fails without touching the grid if the stamp would not fit.
    pub fn stamp(&self, grid: &mut Grid, x: usize, y: usize) -> Result<(), EngineError> {
        // compared this way round so huge offsets cannot overflow
        let fits = self.width <= grid.width()
            && self.height <= grid.height()
            && x <= grid.width() - self.width
            && y <= grid.height() - self.height;
        if !fits {
            return Err(EngineError::OutOfBounds {
                x,
                y,
                width: grid.width(),
                height: grid.height(),
            });
        }
        for &(dx, dy) in self.cells {
            grid.set(x + dx, y + dy, true)?;
        }
        Ok(())
    }

    /// Render the pattern as a minimal grid of its own size.
    pub fn to_grid(&self) -> Result<Grid, EngineError> {
        let mut grid = Grid::new(self.width, self.height)?;
        self.stamp(&mut grid, 0, 0)?;
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        assert_eq!(Pattern::builtin("glider"), Some(GLIDER));
        assert_eq!(Pattern::builtin("warship"), None);
        assert!(Pattern::builtin_names().contains(&"beacon"));
    }

    #[test]
    fn test_stamp_places_cells() {
        let mut grid = Grid::new(10, 10).unwrap();
        BLINKER.stamp(&mut grid, 1, 2).unwrap();
        assert_eq!(grid.live_cells(), vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn test_stamp_out_of_bounds_leaves_grid_unchanged() {
        let mut grid = Grid::new(4, 4).unwrap();
        let err = GLIDER.stamp(&mut grid, 2, 2).unwrap_err();
        assert!(matches!(err, EngineError::OutOfBounds { .. }));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_stamp_rejects_huge_offsets() {
        let mut grid = Grid::new(8, 8).unwrap();
        for (x, y) in [(usize::MAX, 0), (0, usize::MAX), (usize::MAX, usize::MAX)] {
            let err = BLOCK.stamp(&mut grid, x, y).unwrap_err();
            assert!(matches!(err, EngineError::OutOfBounds { .. }));
        }
        assert!(grid.is_empty());
    }

    #[test]
    fn test_stamp_rejects_pattern_larger_than_grid() {
        let mut grid = Grid::new(2, 2).unwrap();
        assert!(matches!(
            GLIDER.stamp(&mut grid, 0, 0),
            Err(EngineError::OutOfBounds { .. })
        ));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_block_pattern_is_still_life() {
        let mut grid = Grid::new(6, 6).unwrap();
        BLOCK.stamp(&mut grid, 2, 2).unwrap();
        let before = grid.clone();
        grid.step();
        assert_eq!(grid, before);
    }

    #[test]
    fn test_toad_oscillates() {
        let mut grid = Grid::new(8, 8).unwrap();
        TOAD.stamp(&mut grid, 2, 3).unwrap();
        let before = grid.clone();
        grid.step();
        assert_ne!(grid, before);
        grid.step();
        assert_eq!(grid, before);
    }

    #[test]
    fn test_to_grid_dimensions() {
        let grid = BEACON.to_grid().unwrap();
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.live_count(), 6);
    }
}
