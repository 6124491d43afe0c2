//! Word list loading utilities
//!
//! Provides functions to load word lists and word explanations from files, or
//! to use the embedded constants.

use crate::core::Word;
use rustc_hash::FxHashMap;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Returns a vector of valid Word instances, skipping any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use waddle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/allowed.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

/// Parse words from text, one per line, skipping blanks and invalid entries
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use waddle::wordlists::loader::words_from_slice;
/// use waddle::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Load word explanations from a tab-separated file
///
/// Each line is `word<TAB>explanation`. Blank lines, `#` comments, lines
/// without a tab and entries whose key is not a valid word are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_definitions<P: AsRef<Path>>(path: P) -> io::Result<FxHashMap<String, String>> {
    let content = fs::read_to_string(path)?;
    Ok(definitions_from_lines(&content))
}

/// Parse `word<TAB>explanation` lines into a lookup table
#[must_use]
pub fn definitions_from_lines(content: &str) -> FxHashMap<String, String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let (word, text) = line.split_once('\t')?;
            let word = Word::new(word).ok()?;
            let text = text.trim();
            (!text.is_empty()).then(|| (word.text().to_string(), text.to_string()))
        })
        .collect()
}
