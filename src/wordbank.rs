use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

/// Letter Boxed only accepts words of three letters or more.
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;

/// Where the word list for a run comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordbankSource {
    File(PathBuf),
    Embedded,
}

impl fmt::Display for WordbankSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordbankSource::File(path) => write!(f, "{}", path.display()),
            WordbankSource::Embedded => f.write_str("built-in word list"),
        }
    }
}

fn normalize_word(line: &str, min_len: usize) -> Option<String> {
    let word = line.trim().to_uppercase();
    (word.len() >= min_len.max(1) && word.chars().all(|c| c.is_ascii_alphabetic())).then_some(word)
}

pub fn load_wordbank_from_str(data: &str, min_len: usize) -> Vec<String> {
    data.lines()
        .filter_map(|line| normalize_word(line, min_len))
        .collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P, min_len: usize) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = normalize_word(&line?, min_len) {
            words.push(word);
        }
    }
    Ok(words)
}

/// `<data dir>/letter-boxed/words.txt`, e.g. `~/.local/share/letter-boxed/words.txt`.
pub fn default_wordbank_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("letter-boxed").join("words.txt"))
}

/// An explicit path wins, then the per-user default if it exists, then the
/// embedded list.
pub fn resolve_wordbank_source(explicit: Option<&Path>) -> WordbankSource {
    if let Some(path) = explicit {
        return WordbankSource::File(path.to_path_buf());
    }
    match default_wordbank_path() {
        Some(path) if path.is_file() => WordbankSource::File(path),
        _ => WordbankSource::Embedded,
    }
}

pub fn load_wordbank(source: &WordbankSource, min_len: usize) -> io::Result<Vec<String>> {
    match source {
        WordbankSource::File(path) => load_wordbank_from_file(path, min_len),
        WordbankSource::Embedded => Ok(load_wordbank_from_str(EMBEDDED_WORDBANK, min_len)),
    }
}
