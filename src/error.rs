use crate::puzzle::Side;

/// Problems with puzzle input collected from the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("the {side} side needs exactly 3 letters, got {count}")]
    WrongLetterCount { side: Side, count: usize },

    #[error("the {side} side repeats the letter '{letter}'")]
    DuplicateLetter { side: Side, letter: char },

    #[error("'{0}' is not a letter")]
    NotALetter(char),

    #[error("chain length must be 1, 2, or 3 (got \"{0}\")")]
    InvalidChainLength(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolverError {
    #[error("invalid configuration: target chain length {target_length} is outside 1..=3")]
    InvalidConfiguration { target_length: usize },
}
