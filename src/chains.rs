//! Chains candidate words into full-coverage solutions.
//!
//! Each word after the first must begin with the last letter of the word
//! before it, and the chain is complete once every letter on the box has
//! been used. Coverage is tracked as a 26-bit mask that is passed by value
//! down the recursion, so every branch owns its copy.

use crate::debug_log;
use crate::error::SolverError;
use crate::puzzle::{LetterBox, MAX_CHAIN_LENGTH, letter_index, letter_mask};

pub type Chain = Vec<String>;

/// Solutions found by one search, bucketed by word count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solutions {
    pub one_word: Vec<Chain>,
    pub two_word: Vec<Chain>,
    pub three_word: Vec<Chain>,
}

impl Solutions {
    /// The bucket for chains of exactly `length` words.
    pub fn bucket(&self, length: usize) -> Option<&[Chain]> {
        match length {
            1 => Some(&self.one_word),
            2 => Some(&self.two_word),
            3 => Some(&self.three_word),
            _ => None,
        }
    }

    pub fn total(&self) -> usize {
        self.one_word.len() + self.two_word.len() + self.three_word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    fn record(&mut self, chain: Chain) {
        match chain.len() {
            1 => self.one_word.push(chain),
            2 => self.two_word.push(chain),
            3 => self.three_word.push(chain),
            _ => unreachable!("chain length is bounded by MAX_CHAIN_LENGTH"),
        }
    }
}

/// Per-word data the recursion needs, computed once.
struct ChainSearch<'a> {
    words: &'a [String],
    masks: Vec<u32>,
    last_letters: Vec<Option<usize>>,
    /// Indices into `words`, grouped by first letter, candidate order kept.
    by_first_letter: Vec<Vec<usize>>,
    target_length: usize,
}

impl<'a> ChainSearch<'a> {
    fn new(words: &'a [String], target_length: usize) -> Self {
        let mut by_first_letter = vec![Vec::new(); 26];
        for (i, word) in words.iter().enumerate() {
            if let Some(first) = word.chars().next().and_then(letter_index) {
                by_first_letter[first].push(i);
            }
        }
        Self {
            words,
            masks: words.iter().map(|w| letter_mask(w.chars())).collect(),
            last_letters: words
                .iter()
                .map(|w| w.chars().next_back().and_then(letter_index))
                .collect(),
            by_first_letter,
            target_length,
        }
    }

    fn extend(&self, chain: &mut Vec<usize>, remaining: u32, solutions: &mut Solutions) {
        if remaining == 0 {
            solutions.record(chain.iter().map(|&i| self.words[i].clone()).collect());
            return;
        }
        if chain.len() >= self.target_length {
            return;
        }
        let Some(&last) = chain.last() else {
            return;
        };
        let Some(link) = self.last_letters[last] else {
            return;
        };
        for &next in &self.by_first_letter[link] {
            chain.push(next);
            self.extend(chain, remaining & !self.masks[next], solutions);
            chain.pop();
        }
    }
}

/// Finds every chain of at most `target_length` words covering the box.
///
/// Seeds are tried in candidate order and extensions follow candidate order,
/// so identical inputs always give identical output. Chains that complete
/// early land in the shorter buckets.
pub fn solve(
    candidates: &[String],
    letter_box: &LetterBox,
    target_length: usize,
) -> Result<Solutions, SolverError> {
    if !(1..=MAX_CHAIN_LENGTH).contains(&target_length) {
        return Err(SolverError::InvalidConfiguration { target_length });
    }

    let search = ChainSearch::new(candidates, target_length);
    let full = letter_box.letter_mask();
    let mut solutions = Solutions::default();
    let mut chain = Vec::with_capacity(target_length);
    for seed in 0..candidates.len() {
        chain.push(seed);
        search.extend(&mut chain, full & !search.masks[seed], &mut solutions);
        chain.pop();
    }

    debug_log!(
        "solve() - {} candidates, target {}: {}/{}/{} chains",
        candidates.len(),
        target_length,
        solutions.one_word.len(),
        solutions.two_word.len(),
        solutions.three_word.len()
    );
    Ok(solutions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::parse_box_config;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    fn sample_box() -> LetterBox {
        parse_box_config(["B N M", "L K H", "A E S", "T U P"]).unwrap()
    }

    #[test]
    fn test_two_word_solution() {
        let candidates = words(&["BLANK", "BLANKET", "BAT", "HUMP", "THUMPS", "TABS"]);
        let solutions = solve(&candidates, &sample_box(), 2).unwrap();
        assert_eq!(solutions.two_word, vec![words(&["BLANKET", "THUMPS"])]);
        assert!(solutions.one_word.is_empty());
        assert!(solutions.three_word.is_empty());
    }

    #[test]
    fn test_target_one_stops_before_chaining() {
        let candidates = words(&["BLANKET", "THUMPS"]);
        let solutions = solve(&candidates, &sample_box(), 1).unwrap();
        assert!(solutions.is_empty());
    }

    #[test]
    fn test_three_word_solution() {
        let candidates = words(&["BLANK", "KET", "THUMPS"]);
        let solutions = solve(&candidates, &sample_box(), 3).unwrap();
        assert_eq!(solutions.three_word, vec![words(&["BLANK", "KET", "THUMPS"])]);
        assert!(solutions.two_word.is_empty());

        let shorter = solve(&candidates, &sample_box(), 2).unwrap();
        assert!(shorter.is_empty());
    }

    #[test]
    fn test_short_chains_land_in_their_own_bucket() {
        let letter_box = parse_box_config(["ABC", "DEF", "GHI", "JKL"]).unwrap();
        let candidates = words(&["ADGJBEHKCFIL", "ADGJBEH", "HKCFIL"]);
        let solutions = solve(&candidates, &letter_box, 3).unwrap();
        assert_eq!(solutions.one_word, vec![words(&["ADGJBEHKCFIL"])]);
        assert_eq!(solutions.two_word, vec![words(&["ADGJBEH", "HKCFIL"])]);
        assert!(solutions.three_word.is_empty());
    }

    #[test]
    fn test_repeated_letter_covers_once() {
        let letter_box = parse_box_config(["ABC", "DEF", "GHI", "JKL"]).unwrap();
        let candidates = words(&["ADGJBEHKCFILDA"]);
        let solutions = solve(&candidates, &letter_box, 1).unwrap();
        assert_eq!(solutions.one_word, vec![words(&["ADGJBEHKCFILDA"])]);
    }

    #[test]
    fn test_words_may_repeat_within_a_chain() {
        let letter_box = parse_box_config(["ABC", "DEF", "GHI", "JKL"]).unwrap();
        let candidates = words(&["ADA", "AGJBEHKCFIL"]);
        let solutions = solve(&candidates, &letter_box, 3).unwrap();
        assert_eq!(
            solutions.three_word,
            vec![words(&["ADA", "ADA", "AGJBEHKCFIL"])]
        );
        assert_eq!(solutions.two_word, vec![words(&["ADA", "AGJBEHKCFIL"])]);
    }

    #[test]
    fn test_links_and_coverage_hold_for_every_chain() {
        let letter_box = sample_box();
        let candidates = words(&["BLANK", "BLANKET", "BAT", "HUMP", "THUMPS", "TABS", "KET", "SUNK"]);
        let solutions = solve(&candidates, &letter_box, 3).unwrap();
        assert!(!solutions.is_empty());
        for length in 1..=3 {
            for chain in solutions.bucket(length).unwrap() {
                assert_eq!(chain.len(), length);
                for pair in chain.windows(2) {
                    assert_eq!(pair[0].chars().last(), pair[1].chars().next());
                }
                let covered = letter_mask(chain.iter().flat_map(|w| w.chars()));
                assert_eq!(covered, letter_box.letter_mask());
            }
        }
    }

    #[test]
    fn test_empty_candidates() {
        for target in 1..=3 {
            let solutions = solve(&[], &sample_box(), target).unwrap();
            assert_eq!(solutions, Solutions::default());
        }
    }

    #[test]
    fn test_out_of_range_target_is_rejected() {
        let candidates = words(&["BLANKET", "THUMPS"]);
        assert_eq!(
            solve(&candidates, &sample_box(), 0),
            Err(SolverError::InvalidConfiguration { target_length: 0 })
        );
        assert_eq!(
            solve(&candidates, &sample_box(), 4),
            Err(SolverError::InvalidConfiguration { target_length: 4 })
        );
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let candidates = words(&["BLANK", "BLANKET", "BAT", "HUMP", "THUMPS", "TABS", "KET", "SUNK"]);
        let first = solve(&candidates, &sample_box(), 3).unwrap();
        let second = solve(&candidates, &sample_box(), 3).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_bucket_lookup() {
        let solutions = Solutions::default();
        assert!(solutions.bucket(2).is_some());
        assert!(solutions.bucket(4).is_none());
    }
}
