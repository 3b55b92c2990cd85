//! Word list loading utilities
//!
//! Turns line-delimited text into normalized words. Parsing is forgiving: case
//! and surrounding whitespace are ignored, blank lines are skipped.

use std::fs;
use std::io;
use std::path::Path;

/// Normalize a single word: trim and lowercase
///
/// # Examples
/// ```
/// use wordle_blitz::wordlists::loader::normalize;
///
/// assert_eq!(normalize("  CrAnE \r"), "crane");
/// ```
#[must_use]
pub fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

/// Split line-delimited text into normalized, non-empty words
///
/// # Examples
/// ```
/// use wordle_blitz::wordlists::loader::parse_word_list;
///
/// let words = parse_word_list("Crane\n\n  slate  \r\nTRACE");
/// assert_eq!(words, vec!["crane", "slate", "trace"]);
/// ```
#[must_use]
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(normalize)
        .filter(|word| !word.is_empty())
        .collect()
}

/// Read a whole word list file as text
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_blitz::wordlists::loader::load_from_file;
///
/// let text = load_from_file("data/solutions.txt").unwrap();
/// println!("Read {} bytes", text.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<String> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    log::debug!("read word list {} ({} bytes)", path.display(), text.len());
    Ok(text)
}
