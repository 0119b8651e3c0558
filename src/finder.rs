//! Enumerates the dictionary words that can be traced on a box.
//!
//! A word is playable when consecutive letters always come from different
//! sides. The search walks the box and the prefix index in lockstep, so a
//! branch is dropped as soon as no indexed word starts with it.

use crate::info_log;
use crate::puzzle::{LetterBox, Side};
use crate::trie::{NodeRef, PrefixIndex};
use std::collections::HashSet;

/// Accumulates results for one run of [`find_words`].
struct WordSearch<'a> {
    letter_box: &'a LetterBox,
    seen: HashSet<String>,
    found: Vec<String>,
}

impl WordSearch<'_> {
    fn record(&mut self, word: &str) {
        // A letter shared by two sides can spell the same word twice.
        if self.seen.insert(word.to_string()) {
            self.found.push(word.to_string());
        }
    }

    fn extend(&mut self, node: NodeRef<'_>, side: Side, word: &mut String) {
        if node.is_terminal() {
            self.record(word);
        }
        let letter_box = self.letter_box;
        for next_side in Side::ALL {
            if next_side == side {
                continue;
            }
            for &letter in letter_box.side(next_side) {
                let Some(child) = node.child(letter) else {
                    continue;
                };
                word.push(letter);
                self.extend(child, next_side, word);
                word.pop();
            }
        }
    }
}

/// Returns every indexed word that obeys the side-adjacency rule, in
/// discovery order: starting slot (sides top, right, left, bottom), then
/// depth-first branch order.
///
/// An empty result is not an error; the chain search simply finds nothing.
pub fn find_words(letter_box: &LetterBox, index: &PrefixIndex) -> Vec<String> {
    let mut search = WordSearch {
        letter_box,
        seen: HashSet::new(),
        found: Vec::new(),
    };
    let root = index.root();
    let mut word = String::new();
    for (side, letter) in letter_box.slots() {
        let Some(node) = root.child(letter) else {
            continue;
        };
        word.push(letter);
        search.extend(node, side, &mut word);
        word.pop();
    }

    if search.found.is_empty() {
        log::warn!("find_words() - no playable words for box [{letter_box}]");
    } else {
        info_log!("find_words() - {} playable words", search.found.len());
    }
    search.found
}

/// Side of each letter along one valid tracing of `word`, or `None` when the
/// word cannot be traced on the box.
pub fn trace_sides(letter_box: &LetterBox, word: &str) -> Option<Vec<Side>> {
    fn trace(letter_box: &LetterBox, letters: &[char], previous: Option<Side>, path: &mut Vec<Side>) -> bool {
        let Some((&first, rest)) = letters.split_first() else {
            return true;
        };
        for side in Side::ALL {
            if Some(side) == previous || !letter_box.side(side).contains(&first) {
                continue;
            }
            path.push(side);
            if trace(letter_box, rest, Some(side), path) {
                return true;
            }
            path.pop();
        }
        false
    }

    let letters: Vec<char> = word.chars().collect();
    let mut path = Vec::with_capacity(letters.len());
    trace(letter_box, &letters, None, &mut path).then_some(path)
}
