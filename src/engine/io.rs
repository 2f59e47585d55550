//! Save and load of grid state
//!
//! The save file is a JSON document of the full grid state: dimensions plus
//! every cell's alive flag. A plaintext pattern format ('1'/'0' rows) is
//! also supported for seeding grids from human-editable files.

use super::Grid;
use crate::error::EngineError;
use std::path::Path;

impl Grid {
    /// Serialize the grid to a JSON string.
    pub fn to_json(&self) -> Result<String, EngineError> {
        serde_json::to_string(self)
            .map_err(|e| EngineError::MalformedData(format!("failed to encode grid: {e}")))
    }

    /// Reconstruct a grid from previously serialized JSON.
    pub fn from_json(data: &str) -> Result<Self, EngineError> {
        let grid: Grid = serde_json::from_str(data)
            .map_err(|e| EngineError::MalformedData(e.to_string()))?;
        grid.validate()?;
        Ok(grid)
    }

    /// Write the grid's full state to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), EngineError> {
        let data = self.to_json()?;
        std::fs::write(&path, data).map_err(|e| EngineError::io("write", path.as_ref(), e))
    }

    /// Read a grid back from `path`.
    ///
    /// Returns a brand-new grid; an existing grid is never touched, so a
    /// failed load cannot leave anything half-mutated.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, EngineError> {
        let data = std::fs::read_to_string(&path)
            .map_err(|e| EngineError::io("read", path.as_ref(), e))?;
        Self::from_json(&data)
    }
}

/// Parse a plaintext pattern: one row per line, '1' alive, '0' dead.
/// Blank lines and surrounding whitespace are ignored.
pub fn parse_plaintext(content: &str) -> Result<Grid, EngineError> {
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        return Err(EngineError::MalformedData(
            "pattern contains no rows".to_string(),
        ));
    }

    let mut rows = Vec::with_capacity(lines.len());
    for (y, line) in lines.iter().enumerate() {
        let mut row = Vec::with_capacity(line.len());
        for (x, ch) in line.chars().enumerate() {
            match ch {
                '0' => row.push(false),
                '1' => row.push(true),
                _ => {
                    return Err(EngineError::MalformedData(format!(
                        "invalid character '{ch}' at ({x}, {y}); only '0' and '1' are allowed"
                    )))
                }
            }
        }
        rows.push(row);
    }
    Grid::from_rows(rows)
}

/// Render a grid in the plaintext pattern format.
pub fn to_plaintext(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.height() * (grid.width() + 1));
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            out.push(if grid.get(x, y) { '1' } else { '0' });
        }
        out.push('\n');
    }
    out
}

/// Load a plaintext pattern file.
pub fn load_plaintext<P: AsRef<Path>>(path: P) -> Result<Grid, EngineError> {
    let content = std::fs::read_to_string(&path)
        .map_err(|e| EngineError::io("read", path.as_ref(), e))?;
    parse_plaintext(&content)
}
