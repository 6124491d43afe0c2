//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: each line typed is one guess.

use crate::core::{MAX_GUESSES, WORD_LENGTH};
use crate::dictionary::Dictionary;
use crate::game::{COLUMNS, GameSession, SubmitOutcome};
use crate::output::formatters::emoji_grid;
use crate::output::{write_board, write_keyboard};
use crate::store::KeyValueStore;
use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::{Duration, Instant};

/// How long to wait for the end-of-game message and explanation
pub const EXPLANATION_WAIT: Duration = Duration::from_secs(3);

/// Run the simple mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<D: Dictionary, S: KeyValueStore>(session: &mut GameSession<D, S>) -> Result<()> {
    let stdin = io::stdin();
    run_simple_with(session, &mut stdin.lock(), &mut io::stdout())
}

/// Run the simple mode over any input and output
///
/// Ends on `quit` or at end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<D, S, R, W>(
    session: &mut GameSession<D, S>,
    input: &mut R,
    out: &mut W,
) -> Result<()>
where
    D: Dictionary,
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n╔════════════════════════════════════════╗")?;
    writeln!(out, "║                 WADDLE                 ║")?;
    writeln!(out, "╚════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Guess the {WORD_LENGTH}-letter word in {MAX_GUESSES} tries. Type 'quit' to leave.\n"
    )?;
    write_status(session, out)?;

    if session.guesses_used() > 0 {
        writeln!(out, "Resuming your last game:\n")?;
        write_board(out, session.board())?;
        writeln!(out)?;
    }

    loop {
        let prompt = format!("Guess {}/{MAX_GUESSES}", session.guesses_used() + 1);
        let Some(line) = read_line(input, out, &prompt)? else {
            break;
        };

        match line.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => break,
            word => {
                if !word.chars().all(|c| c.is_ascii_alphabetic()) || word.len() > WORD_LENGTH {
                    writeln!(
                        out,
                        "{}\n",
                        format!("Enter a {WORD_LENGTH}-letter word").red()
                    )?;
                    continue;
                }
                if !play_guess(session, word, input, out)? {
                    break;
                }
            }
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

/// Play one guess; false once the player does not want another game
fn play_guess<D, S, R, W>(
    session: &mut GameSession<D, S>,
    word: &str,
    input: &mut R,
    out: &mut W,
) -> Result<bool>
where
    D: Dictionary,
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    // Start from an empty row; a rejected word leaves its letters behind
    for _ in 0..COLUMNS {
        session.backspace();
    }
    for ch in word.chars() {
        session.type_letter(ch);
    }

    match session.submit() {
        Ok(SubmitOutcome::Ignored) => Ok(true),
        Ok(SubmitOutcome::Accepted(_)) => {
            writeln!(out)?;
            write_board(out, session.board())?;
            writeln!(out)?;
            write_keyboard(out, session.keyboard())?;
            writeln!(out)?;
            Ok(true)
        }
        Ok(SubmitOutcome::Won(_) | SubmitOutcome::Lost(_)) => {
            writeln!(out)?;
            write_board(out, session.board())?;
            finish_game(session, input, out)
        }
        Err(_) => {
            let notice = session.message().unwrap_or_default().to_string();
            writeln!(out, "{}\n", notice.red().bold())?;
            Ok(true)
        }
    }
}

fn finish_game<D, S, R, W>(
    session: &mut GameSession<D, S>,
    input: &mut R,
    out: &mut W,
) -> Result<bool>
where
    D: Dictionary,
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    wait_for_message(session);

    let message = match (session.message(), session.revealed_answer()) {
        (Some(text), _) => text.to_string(),
        (None, Some(answer)) => answer.shout(),
        (None, None) => String::new(),
    };
    writeln!(out, "\n  {}\n", message.bright_cyan().bold())?;
    writeln!(out, "{}\n", emoji_grid(session.board()))?;
    write_status(session, out)?;

    let again = read_line(input, out, "Play again? (yes/no)")?.unwrap_or_default();
    if matches!(again.to_lowercase().as_str(), "yes" | "y") {
        session.acknowledge();
        writeln!(out, "\n🔄 New game started!\n")?;
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Tick the session until its message and explanation arrive, or time runs out
fn wait_for_message<D: Dictionary, S: KeyValueStore>(session: &mut GameSession<D, S>) {
    session.tick(Instant::now());
    if !session.is_waiting() {
        return;
    }

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Looking up the word...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let deadline = Instant::now() + EXPLANATION_WAIT;
    while session.is_waiting() && Instant::now() < deadline {
        thread::sleep(Duration::from_millis(20));
        session.tick(Instant::now());
    }
    spinner.finish_and_clear();
}

fn write_status<D, S, W: Write>(session: &GameSession<D, S>, out: &mut W) -> io::Result<()>
where
    D: Dictionary,
    S: KeyValueStore,
{
    writeln!(
        out,
        "Streak: {}   Record: {}\n",
        session.streak().to_string().bright_yellow().bold(),
        session.record().to_string().green().bold()
    )
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;
    use crate::dictionary::LocalDictionary;
    use crate::game::Phase;
    use crate::store::MemoryStore;
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;

    fn session() -> GameSession<LocalDictionary, MemoryStore> {
        let dictionary = LocalDictionary::new(
            &words_from_slice(&["slate", "react", "lolly"]),
            words_from_slice(&["crane"]),
        )
        .unwrap();
        GameSession::start(dictionary, MemoryStore::new(), SessionConfig::immediate())
    }

    fn play(session: &mut GameSession<LocalDictionary, MemoryStore>, script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        run_simple_with(session, &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn win_then_quit() {
        let mut session = session();
        let text = play(&mut session, "slate\ncrane\nno\n");

        assert!(text.contains("CRANE 😊"));
        assert!(text.contains("🟩🟩🟩🟩🟩"));
        assert!(text.contains("Thanks for playing"));
        assert_eq!(session.phase(), Phase::Won);
        assert_eq!(session.streak(), 1);
    }

    #[test]
    fn rejected_words_are_reported() {
        let mut session = session();
        let text = play(&mut session, "cran\nxyzzy\nsl4te\nquit\n");

        assert!(text.contains("NOT ENOUGH LETTERS"));
        assert!(text.contains("NOT A WORD: XYZZY"));
        assert!(text.contains("Enter a 5-letter word"));
        assert_eq!(session.guesses_used(), 0);
    }

    #[test]
    fn rejected_word_does_not_leak_into_next_guess() {
        let mut session = session();
        play(&mut session, "xyzzy\nreact\n");
        assert_eq!(session.guesses_used(), 1);
        assert_eq!(session.board().row(0).word(), "react");
    }

    #[test]
    fn loss_reveals_answer_and_plays_again() {
        let mut session = session();
        let script = "lolly\n".repeat(MAX_GUESSES) + "yes\nquit\n";
        let text = play(&mut session, &script);

        assert!(text.contains("THE WORD WAS CRANE"));
        assert!(text.contains("New game started"));
        assert_eq!(session.phase(), Phase::InProgress);
        assert_eq!(session.guesses_used(), 0);
        assert_eq!(session.streak(), 0);
    }
}
