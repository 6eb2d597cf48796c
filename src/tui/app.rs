//! Main TUI application state.
//!
//! Handles:
//! - Input event handling
//! - Synchronous re-scoring on every toggle
//! - Terminal setup and restore

use std::io;
use std::panic;
use std::sync::Once;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};

use crate::application::AssessmentService;
use crate::domain::{RiskAssessment, RiskFactor};

use super::ui::{form::FactorFormState, render_calculator, render_disclaimer};

/// Main application state.
///
/// Owns the session's risk factors; nothing is shared between sessions.
pub struct App {
    /// Scoring service
    service: AssessmentService,

    /// Checkbox form state
    form: FactorFormState,

    /// Assessment of the current form state
    assessment: RiskAssessment,

    /// Whether the reference chart is drawn
    show_chart: bool,

    /// Whether the app should quit
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new application with every factor unset.
    #[must_use]
    pub fn new() -> Self {
        Self::with_service(AssessmentService::new())
    }

    /// Create application with an injected service.
    #[must_use]
    pub fn with_service(service: AssessmentService) -> Self {
        let form = FactorFormState::default();
        let assessment = service.assess(form.factors);
        Self {
            service,
            form,
            assessment,
            show_chart: true,
            should_quit: false,
        }
    }

    /// Assessment for the current factors.
    #[must_use]
    pub fn assessment(&self) -> &RiskAssessment {
        &self.assessment
    }

    /// Run the main application loop.
    ///
    /// The terminal is restored on every exit path, including panics.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = setup_terminal()?;
        install_panic_hook();

        let result = self.main_loop(&mut terminal);
        let restored = restore_terminal();

        result?;
        restored.context("Failed to restore terminal")
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|f| self.draw(f))?;

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code, key.modifiers);
                    }
                }
            }
        }

        Ok(())
    }

    /// Draw the full screen into `f`.
    pub fn draw(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        render_calculator(f, chunks[0], &self.form, &self.assessment, self.show_chart);
        render_disclaimer(f, chunks[1]);
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        if key == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key {
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => self.form.prev_factor(),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => self.form.next_factor(),
            KeyCode::Char(' ') | KeyCode::Char('x') | KeyCode::Enter => {
                self.toggle(self.form.selected_factor());
            }
            KeyCode::Char(c @ '1'..='7') => {
                if let Some(factor) = FactorFormState::factor_for_digit(c) {
                    self.toggle(factor);
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.form.reset();
                self.assessment = self.service.assess(self.form.factors);
            }
            KeyCode::Char('c') | KeyCode::Char('C') => {
                self.show_chart = !self.show_chart;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn toggle(&mut self, factor: RiskFactor) {
        let (factors, assessment) = self.service.toggle(self.form.factors, factor);
        self.form.factors = factors;
        self.assessment = assessment;
    }
}

/// Enter raw mode and the alternate screen, undoing both if any step fails.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;

    let terminal = execute!(io::stdout(), EnterAlternateScreen)
        .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())));
    match terminal {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = restore_terminal();
            Err(e).context("Failed to initialize terminal")
        }
    }
}

/// Leave raw mode and the alternate screen and show the cursor.
fn restore_terminal() -> io::Result<()> {
    restore_terminal_to(&mut io::stdout())
}

/// Every step runs even if an earlier one fails; the first error wins.
fn restore_terminal_to<W: io::Write>(out: &mut W) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(out, LeaveAlternateScreen, cursor::Show);
    raw.and(screen)
}

fn install_panic_hook() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let _ = restore_terminal();
            previous(info);
        }));
    });
}
