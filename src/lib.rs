// Library interface for letter-boxed-solver
// This allows integration tests to access internal modules

pub mod chains;
pub mod cli;
pub mod error;
pub mod finder;
pub mod logging;
pub mod puzzle;
pub mod trie;
pub mod wordbank;

// Re-export the solving pipeline for easier testing
pub use chains::{Chain, Solutions, solve};
pub use error::{SolverError, ValidationError};
pub use finder::find_words;
pub use puzzle::{LetterBox, Side, parse_box_config, parse_chain_length};
pub use trie::{PrefixIndex, build_index};
pub use wordbank::{load_wordbank_from_file, load_wordbank_from_str};
