//! Game session state machine
//!
//! ```text
//! start ──> InProgress ──(perfect guess)──> Won ──┐
//!              ^   │                               │ acknowledge
//!              │   └──(sixth miss)────────> Lost ──┤
//!              └───────────────────────────────────┘
//! ```
//!
//! A session owns the board, the keyboard tracker and the secret answer, and
//! talks to two collaborators: a [`Dictionary`] for word checks, answers and
//! explanations, and a [`KeyValueStore`] for persistence. Every event runs to
//! completion; the only background work is the explanation lookup, which the
//! event loop picks up through [`GameSession::tick`].

use super::board::Board;
use super::keyboard::KeyboardTracker;
use super::messages;
use super::timer::ScheduledMessage;
use crate::config::SessionConfig;
use crate::core::{Feedback, MAX_GUESSES, WORD_LENGTH, Word};
use crate::dictionary::{Dictionary, ExplainQuery, QueryState};
use crate::store::{KeyValueStore, SavedGame, SavedSession, load_session, persist};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    Won,
    Lost,
}

impl Phase {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// What an accepted submit did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing to submit (game over, or no editable row)
    Ignored,
    /// Guess evaluated, game continues
    Accepted(Feedback),
    /// Guess matched the answer
    Won(Feedback),
    /// Sixth guess missed
    Lost(Feedback),
}

/// A rejected guess; the board is left untouched
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidGuess {
    #[error("guess has {letters} letters, 5 needed")]
    Incomplete { letters: usize },

    #[error("not a word: {word}")]
    NotAWord { word: String },
}

/// One player's game, plus streak bookkeeping across games
pub struct GameSession<D, S> {
    dictionary: D,
    store: S,
    config: SessionConfig,
    board: Board,
    keyboard: KeyboardTracker,
    answer: Word,
    phase: Phase,
    streak: u32,
    record: u32,
    notice: Option<String>,
    scheduled: Option<ScheduledMessage>,
    end_message: Option<String>,
    query: Option<ExplainQuery>,
    explanation: Option<String>,
}

impl<D: Dictionary, S: KeyValueStore> GameSession<D, S> {
    /// Load saved state and begin playing
    ///
    /// A saved in-progress game is resumed by replaying its guesses; anything
    /// else starts a fresh game with a newly drawn answer.
    pub fn start(dictionary: D, mut store: S, config: SessionConfig) -> Self {
        let saved = load_session(&store);
        let resumed = saved.game.as_ref().and_then(SavedGame::validate);

        if resumed.is_none() && (saved.game.is_some() || saved.unreadable_game) {
            warn!("discarding saved game that cannot be resumed");
            let cleared = SavedSession {
                streak: saved.streak,
                record: saved.record,
                game: None,
                unreadable_game: false,
            };
            persist(&mut store, &cleared);
        }

        let (answer, words) = resumed.unwrap_or_else(|| (dictionary.random_word(), Vec::new()));

        let mut session = Self {
            dictionary,
            store,
            config,
            board: Board::new(),
            keyboard: KeyboardTracker::new(),
            answer,
            phase: Phase::InProgress,
            streak: saved.streak,
            record: saved.record,
            notice: None,
            scheduled: None,
            end_message: None,
            query: None,
            explanation: None,
        };

        if words.is_empty() {
            info!("started new game");
        } else {
            for word in &words {
                session.replay(word);
            }
            info!(guesses = words.len(), "resumed saved game");
        }

        session
    }

    fn replay(&mut self, word: &Word) {
        let Some(row) = self.board.active_row() else {
            return;
        };
        let feedback = Feedback::evaluate(&self.answer, word);
        self.board.fill_active_row(word);
        self.board.apply_evaluation(row, &feedback);
        self.keyboard.apply(word, &feedback);
    }

    /// Type a letter at the cursor
    pub fn type_letter(&mut self, ch: char) -> bool {
        self.edit(|board| board.type_letter(ch))
    }

    /// Delete backwards from the cursor
    pub fn backspace(&mut self) -> bool {
        self.edit(Board::backspace)
    }

    /// Move the cursor within the active row
    pub fn select_cell(&mut self, row: usize, column: usize) -> bool {
        self.edit(|board| board.select_cell(row, column))
    }

    /// Start the active row from the positioned letters of an earlier row
    pub fn duplicate_row(&mut self, source: usize) -> bool {
        self.edit(|board| board.duplicate_row(source))
    }

    fn edit(&mut self, apply: impl FnOnce(&mut Board) -> bool) -> bool {
        if self.phase.is_over() {
            return false;
        }
        let changed = apply(&mut self.board);
        if changed {
            self.notice = None;
        }
        changed
    }

    /// Submit the active row as a guess
    ///
    /// # Errors
    ///
    /// Returns `InvalidGuess` when the row is not full or the word is not in
    /// the dictionary. A failing dictionary lookup counts as "not a word".
    /// Nothing on the board changes in either case.
    pub fn submit(&mut self) -> Result<SubmitOutcome, InvalidGuess> {
        if self.phase.is_over() {
            return Ok(SubmitOutcome::Ignored);
        }
        let Some(row) = self.board.active_row() else {
            return Ok(SubmitOutcome::Ignored);
        };

        let typed = self.board.current_word();
        if typed.len() != WORD_LENGTH {
            self.notice = Some(messages::NOT_ENOUGH_LETTERS.to_string());
            return Err(InvalidGuess::Incomplete {
                letters: typed.len(),
            });
        }

        let guess = match Word::new(&typed) {
            Ok(word) => word,
            Err(_) => return Err(self.reject(typed)),
        };

        let valid = self.dictionary.is_valid_word(guess.text()).unwrap_or_else(|e| {
            warn!(word = guess.text(), error = %e, "dictionary lookup failed");
            false
        });
        if !valid {
            return Err(self.reject(typed));
        }

        self.notice = None;
        let feedback = Feedback::evaluate(&self.answer, &guess);
        self.board.apply_evaluation(row, &feedback);
        self.keyboard.apply(&guess, &feedback);
        debug!(row, guess = guess.text(), %feedback, "guess accepted");

        let guesses = row + 1;
        let outcome = if feedback.is_perfect() {
            self.streak += 1;
            self.record = self.record.max(self.streak);
            info!(guesses, streak = self.streak, record = self.record, "game won");
            let message = messages::win_message(guesses, &self.answer);
            self.finish(Phase::Won, message, self.config.win_message_delay);
            SubmitOutcome::Won(feedback)
        } else if guesses == MAX_GUESSES {
            self.streak = 0;
            info!(answer = self.answer.text(), "game lost");
            let message = messages::loss_message(&self.answer);
            self.finish(Phase::Lost, message, self.config.loss_message_delay);
            SubmitOutcome::Lost(feedback)
        } else {
            SubmitOutcome::Accepted(feedback)
        };

        self.save();
        Ok(outcome)
    }

    fn reject(&mut self, typed: String) -> InvalidGuess {
        debug!(word = %typed, "rejected guess");
        self.notice = Some(messages::not_a_word(&typed));
        InvalidGuess::NotAWord { word: typed }
    }

    fn finish(&mut self, phase: Phase, message: String, delay: Duration) {
        self.phase = phase;
        self.scheduled = Some(ScheduledMessage::new(message, Instant::now(), delay));
        self.end_message = None;
        self.explanation = None;
        if let Some(stale) = self.query.take() {
            stale.cancel();
        }
        self.query = Some(self.dictionary.explain_word(&self.answer));
    }

    /// Advance timers and collect background results
    ///
    /// Call this from the event loop. A due end-of-game message becomes
    /// visible, and a finished explanation lookup is picked up.
    pub fn tick(&mut self, now: Instant) {
        if let Some(scheduled) = self.scheduled.take() {
            match scheduled.take_due(now) {
                Ok(text) => self.end_message = Some(text),
                Err(pending) => self.scheduled = Some(pending),
            }
        }

        if let Some(query) = &self.query
            && let QueryState::Ready(text) = query.poll()
        {
            self.query = None;
            if text.is_some() {
                self.explanation = text;
            }
        }
    }

    /// Dismiss whatever message is showing
    ///
    /// After a finished game this starts the next one: board and keyboard are
    /// reset, a new answer is drawn and any pending explanation is cancelled.
    /// Returns false if there was nothing to dismiss.
    pub fn acknowledge(&mut self) -> bool {
        if self.phase.is_over() {
            self.new_game();
            return true;
        }
        self.notice.take().is_some()
    }

    fn new_game(&mut self) {
        if let Some(query) = self.query.take() {
            query.cancel();
        }
        self.scheduled = None;
        self.end_message = None;
        self.explanation = None;
        self.notice = None;

        self.board.reset();
        self.keyboard.reset();
        self.answer = self.dictionary.random_word();
        self.phase = Phase::InProgress;
        info!("started new game");
    }

    fn save(&mut self) {
        let game = (!self.phase.is_over()).then(|| SavedGame {
            answer: self.answer.text().to_string(),
            words: self.board.submitted_words(),
        });
        let snapshot = SavedSession {
            streak: self.streak,
            record: self.record,
            game,
            unreadable_game: false,
        };
        persist(&mut self.store, &snapshot);
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardTracker {
        &self.keyboard
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn streak(&self) -> u32 {
        self.streak
    }

    #[must_use]
    pub const fn record(&self) -> u32 {
        self.record
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Number of guesses submitted in the current game
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.board.locked_rows()
    }

    /// The answer, once the game is over
    #[must_use]
    pub fn revealed_answer(&self) -> Option<&Word> {
        self.phase.is_over().then_some(&self.answer)
    }

    /// True while an end-of-game message or explanation is still on its way
    #[must_use]
    pub const fn is_waiting(&self) -> bool {
        self.scheduled.is_some() || self.query.is_some()
    }

    /// Text to show in place of the keyboard, if any
    ///
    /// Once the end-of-game message is visible, an arrived explanation takes
    /// its place. Before that, only a transient invalid-guess notice shows.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        if let Some(end) = &self.end_message {
            return Some(self.explanation.as_deref().unwrap_or(end));
        }
        self.notice.as_deref()
    }
}
