//! Typed errors for the grid engine

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the grid engine.
///
/// The engine never logs, never retries, and never terminates the process;
/// every failure is returned to the caller as one of these variants.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Width or height was zero at construction.
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// A cell access outside `[0,width) x [0,height)`.
    #[error("coordinates ({x}, {y}) out of bounds for {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// An underlying read or write failed during save/load.
    #[error("failed to {action} {}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Save-file or pattern bytes do not decode into a valid grid.
    #[error("malformed grid data: {0}")]
    MalformedData(String),
}

impl EngineError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::InvalidDimensions { width: 0, height: 5 };
        assert_eq!(err.to_string(), "grid dimensions must be positive, got 0x5");

        let err = EngineError::OutOfBounds {
            x: 10,
            y: 2,
            width: 10,
            height: 8,
        };
        assert!(err.to_string().contains("(10, 2)"));
        assert!(err.to_string().contains("10x8"));
    }

    #[test]
    fn test_io_error_keeps_path() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = EngineError::io("read", "some/world.json", source);
        assert!(err.to_string().contains("some/world.json"));
    }
}
