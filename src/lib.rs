//! Conway's Game of Life simulator
//!
//! This library provides the cellular-automaton engine (grid, synchronous
//! transition rule, persistence), a driving-loop session with pause and
//! speed control, and the supporting configuration and display layers.

pub mod config;
pub mod console;
pub mod engine;
pub mod error;
pub mod session;
pub mod utils;

pub use config::Settings;
pub use engine::{Grid, Pattern};
pub use error::EngineError;
pub use session::{Session, SessionState};
