//! TUI application state and event loop

use crate::dictionary::Dictionary;
use crate::game::{COLUMNS, GameSession, ROWS};
use crate::store::KeyValueStore;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long to wait for a key before ticking the session
const TICK: Duration = Duration::from_millis(50);

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Type(char),
    Backspace,
    Submit,
    MoveLeft,
    MoveRight,
    /// Seed the active row from an earlier row (0-based)
    Duplicate(usize),
    Acknowledge,
    Quit,
}

/// Map a key press to an action
#[must_use]
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char(c @ '1'..='6') => Some(Action::Duplicate(usize::from(c as u8 - b'1'))),
        KeyCode::Char(' ') | KeyCode::Esc => Some(Action::Acknowledge),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(Action::Type(c)),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Left => Some(Action::MoveLeft),
        KeyCode::Right => Some(Action::MoveRight),
        _ => None,
    }
}

/// Application state
pub struct App<D, S> {
    pub session: GameSession<D, S>,
    pub should_quit: bool,
}

impl<D: Dictionary, S: KeyValueStore> App<D, S> {
    #[must_use]
    pub const fn new(session: GameSession<D, S>) -> Self {
        Self {
            session,
            should_quit: false,
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        let session = &mut self.session;
        let cursor = session.board().cursor();

        match action {
            Action::Quit => self.should_quit = true,
            Action::Type(c) => {
                session.type_letter(c);
            }
            Action::Backspace => {
                session.backspace();
            }
            Action::Submit if session.phase().is_over() => {
                session.acknowledge();
            }
            Action::Submit => {
                // Rejections surface through the session message
                let _ = session.submit();
            }
            Action::MoveLeft => {
                let column = cursor.column.min(COLUMNS).saturating_sub(1);
                session.select_cell(cursor.row, column);
            }
            Action::MoveRight => {
                session.select_cell(cursor.row, cursor.column + 1);
            }
            Action::Duplicate(row) if row < ROWS => {
                session.duplicate_row(row);
            }
            Action::Duplicate(_) => {}
            Action::Acknowledge => {
                session.acknowledge();
            }
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.session.tick(now);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<D: Dictionary, S: KeyValueStore>(app: App<D, S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, D, S>(terminal: &mut Terminal<B>, mut app: App<D, S>) -> Result<()>
where
    B: ratatui::backend::Backend,
    D: Dictionary,
    S: KeyValueStore,
{
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
            && let Some(action) = action_for_key(key)
        {
            app.handle_action(action);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
