//! Grid representation and bounds-checked cell access

use crate::error::EngineError;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A fixed-size Game of Life grid.
///
/// Cells are stored row-major, indexed by `(x, y)` with
/// `0 <= x < width` and `0 <= y < height`. Dimensions never change after
/// construction; the only ways to mutate cells are [`Grid::toggle`],
/// [`Grid::set`], [`Grid::reset`], and the transition step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a new grid with every cell dead.
    ///
    /// Rejects zero width or height; no upper bound is enforced here (any
    /// cap belongs to the caller).
    pub fn new(width: usize, height: usize) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![false; width * height],
        })
    }

    /// Build a grid from rows of cells. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, EngineError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(EngineError::InvalidDimensions { width, height });
        }
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(EngineError::MalformedData(format!(
                    "row {} has length {}, expected {}",
                    y,
                    row.len(),
                    width
                )));
            }
        }
        Ok(Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), EngineError> {
        if x >= self.width || y >= self.height {
            return Err(EngineError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Cell value at `(x, y)`; out-of-range coordinates read as dead.
    ///
    /// The dead-out-of-bounds convention is what neighbor counting relies
    /// on: there is no wraparound.
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x < self.width && y < self.height {
            self.cells[self.index(x, y)]
        } else {
            false
        }
    }

    /// Set the cell at `(x, y)`, rejecting out-of-range coordinates.
    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> Result<(), EngineError> {
        self.check_bounds(x, y)?;
        let idx = self.index(x, y);
        self.cells[idx] = alive;
        Ok(())
    }

    /// Flip the cell at `(x, y)`, rejecting out-of-range coordinates.
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<(), EngineError> {
        self.check_bounds(x, y)?;
        let idx = self.index(x, y);
        self.cells[idx] = !self.cells[idx];
        Ok(())
    }

    /// Kill every cell, preserving dimensions. Idempotent.
    pub fn reset(&mut self) {
        self.cells.fill(false);
    }

    /// Count live cells among the 8 Moore neighbors of `(x, y)`.
    /// Neighbors outside the grid are dead.
    pub fn count_neighbors(&self, x: usize, y: usize) -> u8 {
        let mut count = 0;
        for dy in [-1isize, 0, 1] {
            for dx in [-1isize, 0, 1] {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = x as isize + dx;
                let ny = y as isize + dy;
                if nx >= 0
                    && ny >= 0
                    && (nx as usize) < self.width
                    && (ny as usize) < self.height
                    && self.cells[self.index(nx as usize, ny as usize)]
                {
                    count += 1;
                }
            }
        }
        count
    }

    /// Total number of live cells. Pure query.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Coordinates of every live cell, scanned row by row.
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        (0..self.height)
            .cartesian_product(0..self.width)
            .filter(|&(y, x)| self.cells[self.index(x, y)])
            .map(|(y, x)| (x, y))
            .collect()
    }

    /// True when no cell is alive.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&alive| !alive)
    }

    pub(crate) fn replace_cells(&mut self, cells: Vec<bool>) {
        debug_assert_eq!(cells.len(), self.width * self.height);
        self.cells = cells;
    }

    /// Validate a deserialized grid: serde enforces the shape, not the
    /// dimension arithmetic.
    pub(crate) fn validate(&self) -> Result<(), EngineError> {
        if self.width == 0 || self.height == 0 {
            return Err(EngineError::MalformedData(format!(
                "grid dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.cells.len() != self.width * self.height {
            return Err(EngineError::MalformedData(format!(
                "cell array has {} entries, expected {} for a {}x{} grid",
                self.cells.len(),
                self.width * self.height,
                self.width,
                self.height
            )));
        }
        Ok(())
    }
}
