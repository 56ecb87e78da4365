//! TUI rendering and terminal management (impure shell)

mod caption;
mod cases;
pub mod constants;
mod dashboard;
mod help;
mod helpers;
mod layout;
mod list_view;
mod precedents;
mod profile;
mod search_input;
mod styles;
pub mod tabs;

pub use caption::Caption;
pub use help::render_help_overlay;
pub use helpers::{empty_line, format_date, key_value_line};
pub use layout::render_layout;
pub use search_input::SearchInput;
pub use styles::{ColorConfig, Theme};

use crate::config::keybindings::KeyBindings;
use crate::model::{AppError, KeyAction, QueryError};
use crate::state::{search_input_handler, AppState};
use constants::IDLE_POLL_MS;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// A list query was given an unregistered filter or sort
    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    theme: Theme,
    /// Origin of the caption clock.
    started: Instant,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(app_state: AppState, colors: ColorConfig) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            theme: Theme::new(colors),
            started: Instant::now(),
        })
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C).
    /// Event-driven: redraws on user input, resize, or when a caption tick
    /// publishes new text. With no caption typing the loop idles on input.
    pub fn run(&mut self) -> Result<(), TuiError> {
        // Initial render - ensures screen has content immediately
        self.draw()?;

        loop {
            if event::poll(self.poll_timeout())? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.process_key(key)? {
                            return Ok(()); // User quit
                        }
                        self.draw()?;
                        continue;
                    }
                    Event::Resize(width, height) => {
                        debug!(width, height, "Terminal resized");
                        self.draw()?;
                        continue;
                    }
                    _ => {}
                }
            }

            // Timer elapsed (or an ignored event): fire due caption ticks
            if self.advance_captions() > 0 {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// How long to wait for input before the next caption tick is due.
    fn poll_timeout(&self) -> Duration {
        let idle = Duration::from_millis(IDLE_POLL_MS);
        match self.app_state.captions.next_deadline() {
            Some(deadline) => deadline.saturating_sub(self.started.elapsed()).min(idle),
            None => idle,
        }
    }

    /// Fire caption ticks due by now. Returns the number of publications.
    fn advance_captions(&mut self) -> usize {
        self.app_state.captions.advance_to(self.started.elapsed())
    }

    /// Bring the caption clock up to date, handle `key`, then fire ticks.
    ///
    /// A caption mounted by `key` starts from the current time even when the
    /// loop has been idle. Returns true if app should quit.
    fn process_key(&mut self, key: KeyEvent) -> Result<bool, TuiError> {
        self.advance_captions();
        if self.handle_key(key)? {
            return Ok(true);
        }
        self.advance_captions();
        Ok(false)
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> Result<bool, TuiError> {
        // Special case: Ctrl+C should always quit, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(true);
        }

        // Special case: Escape closes help overlay if visible (before key binding dispatch)
        if key.code == KeyCode::Esc && self.app_state.help_visible {
            self.app_state.help_visible = false;
            return Ok(false);
        }

        // Search bar editing (before key binding dispatch)
        if self.app_state.is_typing() {
            match key.code {
                KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.app_state
                        .update_search(|s| search_input_handler::handle_char_input(s, ch))?;
                    return Ok(false);
                }
                KeyCode::Backspace => {
                    self.app_state
                        .update_search(search_input_handler::handle_backspace)?;
                    return Ok(false);
                }
                KeyCode::Left => {
                    self.app_state
                        .update_search(search_input_handler::handle_cursor_left)?;
                    return Ok(false);
                }
                KeyCode::Right => {
                    self.app_state
                        .update_search(search_input_handler::handle_cursor_right)?;
                    return Ok(false);
                }
                KeyCode::Enter => {
                    self.app_state
                        .update_search(search_input_handler::submit_search)?;
                    return Ok(false);
                }
                KeyCode::Esc => {
                    self.app_state
                        .update_search(search_input_handler::cancel_search)?;
                    return Ok(false);
                }
                _ => {} // Fall through to key binding dispatch
            }
        }

        // Escape outside the search bar clears a committed query
        if key.code == KeyCode::Esc {
            self.app_state
                .update_search(search_input_handler::cancel_search)?;
            return Ok(false);
        }

        // Look up action in key bindings
        let Some(action) = self.key_bindings.get(key) else {
            return Ok(false); // Unknown key, ignore
        };

        // Block everything but Help and Quit while the help overlay is up
        if self.app_state.help_visible && !matches!(action, KeyAction::Help | KeyAction::Quit) {
            return Ok(false);
        }

        if action == KeyAction::Quit {
            return Ok(true);
        }

        self.app_state.apply(action)?;
        Ok(false)
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let theme = self.theme;
        let state = &self.app_state;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, state, theme);
        })?;
        Ok(())
    }
}

// ===== Test Helpers =====

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing without terminal initialization.
    pub(crate) fn new_for_test(terminal: Terminal<B>, app_state: AppState) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            theme: Theme::new(ColorConfig::with_colors(false)),
            started: Instant::now(),
        }
    }
}

/// Initialize and run the TUI application for `app_state`
///
/// This is the main entry point for the TUI. It handles terminal
/// setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_app(app_state: AppState, colors: ColorConfig) -> Result<(), TuiError> {
    let mut app = TuiApp::new(app_state, colors)?;
    info!("TUI started");

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    info!("TUI stopped");
    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "tui_app_tests.rs"]
mod tests;
