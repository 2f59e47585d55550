//! Terminal front-end for an interactive session
//!
//! Thin glue over [`Session`]: raw-mode rendering of live cells plus a
//! keyboard-driven cursor standing in for the mouse. All simulation
//! semantics live in the session; this module only translates key events
//! and draws.

use crate::config::Settings;
use crate::session::{Session, SessionState};
use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute, queue, terminal,
};
use std::io::{self, Write};

/// What the input handler decided.
pub enum ConsoleCommand {
    Exit,
    Handled,
}

/// Raw-mode terminal renderer. Restores the terminal on drop.
pub struct Console {
    cursor_pos: (usize, usize),
    status: String,
}

impl Console {
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        execute!(io::stdout(), cursor::Hide).context("failed to hide cursor")?;
        Ok(Self {
            cursor_pos: (0, 0),
            status: String::new(),
        })
    }

    /// Draw the current session state.
    pub fn render(&self, session: &Session) -> Result<()> {
        let (cols, rows) = terminal::size().context("failed to query terminal size")?;
        let mut stdout = io::stdout();
        queue!(stdout, terminal::Clear(terminal::ClearType::All))?;

        match session.state() {
            SessionState::Menu => self.render_menu(&mut stdout, cols, rows)?,
            SessionState::Simulation => self.render_simulation(&mut stdout, session, cols, rows)?,
        }

        // status footer on the last row
        queue!(stdout, cursor::MoveTo(0, rows.saturating_sub(1)))?;
        stdout.write_all(self.status.as_bytes())?;

        stdout.flush()?;
        Ok(())
    }

    fn render_menu(&self, stdout: &mut io::Stdout, cols: u16, rows: u16) -> Result<()> {
        let lines = [
            "Game of Life",
            "",
            "Enter: new simulation",
            "g: load saved grid",
            "q: quit",
        ];
        let top = (rows / 2).saturating_sub(lines.len() as u16 / 2);
        for (i, line) in lines.iter().enumerate() {
            let col = (cols / 2).saturating_sub(line.len() as u16 / 2);
            queue!(stdout, cursor::MoveTo(col, top + i as u16))?;
            stdout.write_all(line.as_bytes())?;
        }
        Ok(())
    }

    fn render_simulation(
        &self,
        stdout: &mut io::Stdout,
        session: &Session,
        cols: u16,
        rows: u16,
    ) -> Result<()> {
        let Some(grid) = session.grid() else {
            return Ok(());
        };

        // clip to the visible window, last row reserved for the footer
        let view_w = cols as usize;
        let view_h = rows.saturating_sub(1) as usize;
        for (x, y) in grid.live_cells() {
            if x < view_w && y < view_h {
                queue!(stdout, cursor::MoveTo(x as u16, y as u16))?;
                stdout.write_all("█".as_bytes())?;
            }
        }

        let (cx, cy) = self.cursor_pos;
        if cx < view_w && cy < view_h {
            queue!(stdout, cursor::MoveTo(cx as u16, cy as u16))?;
            let marker = if grid.get(cx, cy) { "▓" } else { "+" };
            stdout.write_all(marker.as_bytes())?;
        }
        Ok(())
    }

    /// Refresh the footer line from session state.
    pub fn update_status(&mut self, session: &Session) {
        self.status = match session.state() {
            SessionState::Menu => String::new(),
            SessionState::Simulation => format!(
                "{} | live: {} | tps: {} | space pause  enter toggle  +/- speed  r reset  s save  g load  q quit",
                if session.is_paused() { "PAUSED" } else { "RUNNING" },
                session.live_cells(),
                session.ticks_per_second(),
            ),
        };
    }

    /// Overwrite the footer with a transient message (save/load feedback).
    pub fn set_status(&mut self, status: String) {
        self.status = status;
    }

    /// Poll one pending key event and apply it to the session.
    /// Returns `Ok(None)` when no event is pending.
    pub fn poll_input(
        &mut self,
        session: &mut Session,
        settings: &Settings,
    ) -> Result<Option<ConsoleCommand>> {
        if !event::poll(std::time::Duration::from_secs(0))? {
            return Ok(None);
        }

        let Event::Key(key) = event::read()? else {
            return Ok(Some(ConsoleCommand::Handled));
        };

        // Ctrl+C always exits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(ConsoleCommand::Exit));
        }

        match session.state() {
            SessionState::Menu => self.handle_menu_key(key, session, settings),
            SessionState::Simulation => self.handle_simulation_key(key, session, settings),
        }
    }

    fn handle_menu_key(
        &mut self,
        key: KeyEvent,
        session: &mut Session,
        settings: &Settings,
    ) -> Result<Option<ConsoleCommand>> {
        match key.code {
            KeyCode::Char('q') => return Ok(Some(ConsoleCommand::Exit)),
            KeyCode::Enter => {
                session.start(settings.grid.width, settings.grid.height)?;
                self.cursor_pos = (0, 0);
                self.update_status(session);
            }
            KeyCode::Char('g') => self.load_with_feedback(session, settings),
            _ => {}
        }
        Ok(Some(ConsoleCommand::Handled))
    }

    fn handle_simulation_key(
        &mut self,
        key: KeyEvent,
        session: &mut Session,
        settings: &Settings,
    ) -> Result<Option<ConsoleCommand>> {
        let (grid_w, grid_h) = session
            .grid()
            .map(|g| (g.width(), g.height()))
            .unwrap_or((0, 0));
        let (cx, cy) = self.cursor_pos;

        match key.code {
            KeyCode::Char('q') => return Ok(Some(ConsoleCommand::Exit)),
            KeyCode::Char(' ') => {
                session.toggle_pause();
                self.update_status(session);
            }
            KeyCode::Char('r') => {
                session.reset()?;
                self.update_status(session);
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                session.speed_up();
                self.update_status(session);
            }
            KeyCode::Char('-') => {
                session.slow_down();
                self.update_status(session);
            }
            KeyCode::Up => self.cursor_pos.1 = cy.saturating_sub(1),
            KeyCode::Down => self.cursor_pos.1 = (cy + 1).min(grid_h.saturating_sub(1)),
            KeyCode::Left => self.cursor_pos.0 = cx.saturating_sub(1),
            KeyCode::Right => self.cursor_pos.0 = (cx + 1).min(grid_w.saturating_sub(1)),
            KeyCode::Enter | KeyCode::Char('t') => {
                session.toggle_cell(cx, cy)?;
                self.update_status(session);
            }
            KeyCode::Char('s') => match session.save(&settings.storage.save_file) {
                Ok(()) => self.set_status(format!(
                    "saved to {}",
                    settings.storage.save_file.display()
                )),
                Err(e) => self.set_status(format!("save failed: {e:#}")),
            },
            KeyCode::Char('g') => self.load_with_feedback(session, settings),
            _ => {}
        }
        Ok(Some(ConsoleCommand::Handled))
    }

    fn load_with_feedback(&mut self, session: &mut Session, settings: &Settings) {
        match session.load(&settings.storage.save_file) {
            Ok(()) => {
                self.cursor_pos = (0, 0);
                self.update_status(session);
            }
            Err(e) => self.set_status(format!("load failed: {e:#}")),
        }
    }
}

impl Drop for Console {
    fn drop(&mut self) {
        // if we could enable raw mode, we should be able to disable it
        let _ = terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), cursor::Show);
    }
}
