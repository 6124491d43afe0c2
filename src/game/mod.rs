//! Game state: board, keyboard, messages and the session state machine

pub mod board;
pub mod keyboard;
pub mod messages;
pub mod session;
pub mod timer;

pub use board::{Board, COLUMNS, Cell, Cursor, ROWS, Row};
pub use keyboard::{KeyboardTracker, LAYOUT};
pub use session::{GameSession, InvalidGuess, Phase, SubmitOutcome};
pub use timer::ScheduledMessage;
