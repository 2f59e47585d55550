//! Game of Life core: grid storage, transition rule, persistence, patterns

pub mod grid;
pub mod io;
pub mod patterns;
pub mod rules;

pub use grid::Grid;
pub use patterns::Pattern;
