//! Simulation session: the state machine a host loop drives
//!
//! A session is either in the menu (no grid) or running a simulation that
//! may be paused. The host calls [`Session::tick`] once per logical tick at
//! its chosen cadence and forwards toggle/reset/save/load requests here.
//! The session owns the grid exclusively; nothing in it is thread-safe and
//! nothing needs to be for a single driving loop.

use crate::engine::Grid;
use anyhow::{bail, Context, Result};
use std::path::Path;

/// Slowest supported cadence, in ticks per second.
pub const MIN_TICKS_PER_SECOND: u32 = 10;
/// Fastest supported cadence, in ticks per second.
pub const MAX_TICKS_PER_SECOND: u32 = 24;

/// Which screen the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No grid exists yet.
    Menu,
    /// A grid exists and may be stepped.
    Simulation,
}

/// A driving-loop session around one grid.
#[derive(Debug)]
pub struct Session {
    grid: Option<Grid>,
    paused: bool,
    ticks_per_second: u32,
    live_cells: usize,
}

impl Session {
    /// Create a session in the menu state.
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            grid: None,
            paused: true,
            ticks_per_second: ticks_per_second
                .clamp(MIN_TICKS_PER_SECOND, MAX_TICKS_PER_SECOND),
            live_cells: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        if self.grid.is_some() {
            SessionState::Simulation
        } else {
            SessionState::Menu
        }
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn ticks_per_second(&self) -> u32 {
        self.ticks_per_second
    }

    /// Cached live-cell count, refreshed on every mutation.
    pub fn live_cells(&self) -> usize {
        self.live_cells
    }

    fn refresh_count(&mut self) {
        self.live_cells = self.grid.as_ref().map_or(0, Grid::live_count);
    }

    fn active_grid(&mut self) -> Result<&mut Grid> {
        match self.grid.as_mut() {
            Some(grid) => Ok(grid),
            None => bail!("no active simulation"),
        }
    }

    /// Start a new simulation with a dead grid, paused.
    pub fn start(&mut self, width: usize, height: usize) -> Result<()> {
        self.grid = Some(Grid::new(width, height)?);
        self.paused = true;
        self.refresh_count();
        Ok(())
    }

    /// Advance one generation if running. Returns whether a step happened.
    pub fn tick(&mut self) -> bool {
        if self.paused {
            return false;
        }
        let Some(grid) = self.grid.as_mut() else {
            return false;
        };
        grid.step();
        self.refresh_count();
        true
    }

    /// Flip one cell of the active grid.
    pub fn toggle_cell(&mut self, x: usize, y: usize) -> Result<()> {
        self.active_grid()?.toggle(x, y)?;
        self.refresh_count();
        Ok(())
    }

    /// Kill every cell and pause, keeping dimensions.
    pub fn reset(&mut self) -> Result<()> {
        self.active_grid()?.reset();
        self.paused = true;
        self.refresh_count();
        Ok(())
    }

    pub fn toggle_pause(&mut self) {
        if self.grid.is_some() {
            self.paused = !self.paused;
            self.refresh_count();
        }
    }

    /// Raise the tick rate by one, up to the maximum, and resume.
    pub fn speed_up(&mut self) {
        if self.ticks_per_second < MAX_TICKS_PER_SECOND {
            self.ticks_per_second += 1;
            self.paused = false;
        }
    }

    /// Lower the tick rate by one; pausing once the minimum is reached.
    pub fn slow_down(&mut self) {
        if self.ticks_per_second > MIN_TICKS_PER_SECOND {
            self.ticks_per_second -= 1;
        } else {
            self.paused = true;
        }
    }

    /// Save the active grid's full state to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let grid = self
            .grid
            .as_ref()
            .context("no active simulation to save")?;
        grid.save(&path)
            .with_context(|| format!("failed to save grid to {}", path.as_ref().display()))?;
        Ok(())
    }

    /// Replace the session's grid with one loaded from `path` and pause.
    ///
    /// The loaded grid may have any valid dimensions; the previous grid is
    /// discarded wholesale. On failure the session keeps its current grid.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let grid = Grid::load(&path)
            .with_context(|| format!("failed to load grid from {}", path.as_ref().display()))?;
        self.grid = Some(grid);
        self.paused = true;
        self.refresh_count();
        Ok(())
    }
}
