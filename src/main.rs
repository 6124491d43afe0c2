//! Waddle - CLI
//!
//! Word guessing game with TUI and line-based modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{Level, warn};
use waddle::{
    commands::{check_guess, read_stats, reset_stats, run_simple},
    config::{DEFAULT_LOSS_DELAY, DEFAULT_WIN_DELAY, SessionConfig},
    core::Word,
    dictionary::LocalDictionary,
    game::GameSession,
    logging::{LogConfig, init_logging},
    output::{print_check_result, print_stats},
    store::{JsonFileStore, KeyValueStore, MemoryStore},
    wordlists::{ALLOWED, ANSWERS, loader::words_from_slice},
};

/// File name of the saved state
const STATE_FILE: &str = "waddle.json";

#[derive(Parser)]
#[command(
    name = "waddle",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default), 'answers' (answers only), or path to a guess list
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Where streak and game progress are kept (default: ~/waddle.json)
    #[arg(long, global = true)]
    state_file: Option<PathBuf>,

    /// Word explanations, one `word<TAB>text` per line
    #[arg(long, global = true)]
    definitions: Option<PathBuf>,

    /// Delay before the win message shows, in milliseconds
    #[arg(long, global = true, default_value_t = duration_ms(DEFAULT_WIN_DELAY))]
    win_delay_ms: u64,

    /// Delay before the loss message shows, in milliseconds
    #[arg(long, global = true, default_value_t = duration_ms(DEFAULT_LOSS_DELAY))]
    loss_delay_ms: u64,

    /// Append logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "info")]
    log_level: Level,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Score a guess against an answer
    Check {
        /// The secret word
        answer: String,

        /// The word to score
        guess: String,
    },

    /// Show streak and record
    Stats {
        /// Zero the streak and record
        #[arg(long)]
        reset: bool,
    },
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Load wordlists based on the -w flag
///
/// Returns (`guess_pool`, `answer_candidates`)
/// - "all": embedded guess list, embedded answers
/// - "answers": embedded answers for both
/// - "<path>": guess list from file, embedded answers
fn load_wordlists(wordlist_mode: &str) -> Result<(Vec<Word>, Vec<Word>)> {
    use waddle::wordlists::loader::load_from_file;

    let answer_words = words_from_slice(ANSWERS);
    match wordlist_mode {
        "all" => Ok((words_from_slice(ALLOWED), answer_words)),
        "answers" => Ok((answer_words.clone(), answer_words)),
        path => {
            let custom_words = load_from_file(path)
                .with_context(|| format!("failed to read word list {path}"))?;
            Ok((custom_words, answer_words))
        }
    }
}

fn build_dictionary(cli: &Cli) -> Result<LocalDictionary> {
    let (all_words, answer_words) = load_wordlists(&cli.wordlist)?;
    let dictionary = LocalDictionary::new(&all_words, answer_words)?;

    match &cli.definitions {
        Some(path) => Ok(dictionary.with_definitions_file(path)?),
        None => Ok(dictionary),
    }
}

fn default_state_file() -> PathBuf {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map_or_else(|| PathBuf::from(STATE_FILE), |home| Path::new(&home).join(STATE_FILE))
}

/// Open the state file, or keep state in memory if it cannot be used
fn open_store(path: &Path) -> Box<dyn KeyValueStore> {
    match JsonFileStore::open(path) {
        Ok(store) => Box::new(store),
        Err(e) => {
            warn!(error = %e, "state file unusable, progress will not be saved");
            Box::new(MemoryStore::new())
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    // The TUI owns the terminal, so only line-based commands log to stderr
    let log_config = LogConfig::default()
        .with_level(cli.log_level)
        .with_log_file(cli.log_file.clone())
        .with_stderr(!matches!(command, Commands::Play));
    init_logging(&log_config).context("failed to set up logging")?;

    let state_file = cli.state_file.clone().unwrap_or_else(default_state_file);
    let config = SessionConfig {
        win_message_delay: Duration::from_millis(cli.win_delay_ms),
        loss_message_delay: Duration::from_millis(cli.loss_delay_ms),
    };

    match command {
        Commands::Play => run_play_command(&cli, &state_file, config),
        Commands::Simple => run_simple_command(&cli, &state_file, config),
        Commands::Check { answer, guess } => run_check_command(&cli, answer, guess),
        Commands::Stats { reset } => run_stats_command(&state_file, *reset),
    }
}

fn run_play_command(cli: &Cli, state_file: &Path, config: SessionConfig) -> Result<()> {
    use waddle::interactive::{App, run_tui};

    let dictionary = build_dictionary(cli)?;
    let session = GameSession::start(dictionary, open_store(state_file), config);
    run_tui(App::new(session))
}

fn run_simple_command(cli: &Cli, state_file: &Path, config: SessionConfig) -> Result<()> {
    let dictionary = build_dictionary(cli)?;
    let mut session = GameSession::start(dictionary, open_store(state_file), config);
    run_simple(&mut session)
}

fn run_check_command(cli: &Cli, answer: &str, guess: &str) -> Result<()> {
    let dictionary = build_dictionary(cli)?;
    let result = check_guess(answer, guess, &dictionary)?;
    print_check_result(&result);
    Ok(())
}

fn run_stats_command(state_file: &Path, reset: bool) -> Result<()> {
    let mut store = JsonFileStore::open(state_file)
        .with_context(|| format!("failed to open {}", state_file.display()))?;

    let report = if reset {
        reset_stats(&mut store)
    } else {
        read_stats(&store)
    };
    print_stats(&report);
    Ok(())
}
