//! Prefix index over the words playable on one box.
//!
//! Nodes live in a flat arena and hold a 26-slot child table, so a lookup
//! step is a single array index. Slot value `0` means "no child"; the root
//! is node 0 and is never anyone's child.

use crate::puzzle::{LetterBox, letter_index};

const ALPHABET: usize = 26;
const ROOT: usize = 0;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: [u32; ALPHABET],
    terminal: bool,
}

#[derive(Debug, Clone)]
pub struct PrefixIndex {
    nodes: Vec<TrieNode>,
    word_count: usize,
}

impl Default for PrefixIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixIndex {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            word_count: 0,
        }
    }

    /// Adds an uppercase word. Returns `false` when the word was already
    /// present or cannot be indexed (empty, or a character outside `A..=Z`).
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_uppercase()) {
            return false;
        }
        let mut node = ROOT;
        for c in word.chars() {
            let slot = (c as u8 - b'A') as usize;
            let child = self.nodes[node].children[slot] as usize;
            node = if child == ROOT {
                let id = self.nodes.len();
                self.nodes.push(TrieNode::default());
                self.nodes[node].children[slot] = id as u32;
                id
            } else {
                child
            };
        }
        if self.nodes[node].terminal {
            return false;
        }
        self.nodes[node].terminal = true;
        self.word_count += 1;
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        self.walk(word).is_some_and(|node| self.nodes[node].terminal)
    }

    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    pub(crate) fn root(&self) -> NodeRef<'_> {
        NodeRef { index: self, node: ROOT }
    }

    fn walk(&self, letters: &str) -> Option<usize> {
        letters
            .chars()
            .try_fold(self.root(), |node, c| node.child(c))
            .map(|node| node.node)
    }
}

/// A position inside the index, used to extend a prefix one letter at a time
/// without re-walking from the root.
#[derive(Clone, Copy)]
pub(crate) struct NodeRef<'a> {
    index: &'a PrefixIndex,
    node: usize,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn child(self, c: char) -> Option<NodeRef<'a>> {
        let slot = letter_index(c)?;
        match self.index.nodes[self.node].children[slot] as usize {
            ROOT => None,
            child => Some(NodeRef { index: self.index, node: child }),
        }
    }

    pub(crate) fn is_terminal(self) -> bool {
        self.index.nodes[self.node].terminal
    }
}

/// Builds the index from a raw word source, keeping only words spelled
/// entirely with letters on `letter_box`.
///
/// Words are trimmed and uppercased first; anything that still contains a
/// non-letter is skipped.
pub fn build_index<I, S>(words: I, letter_box: &LetterBox) -> PrefixIndex
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut index = PrefixIndex::new();
    let mut skipped = 0usize;
    for word in words {
        let word = word.as_ref().trim().to_ascii_uppercase();
        if word.is_empty() || !word.chars().all(|c| letter_box.contains_letter(c)) {
            skipped += 1;
            continue;
        }
        index.insert(&word);
    }
    log::debug!(
        "build_index() - {} words indexed ({} nodes), {} skipped",
        index.len(),
        index.nodes.len(),
        skipped
    );
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::parse_box_config;

    #[test]
    fn test_insert_and_contains() {
        let mut index = PrefixIndex::new();
        assert!(index.insert("BLANK"));
        assert!(index.insert("BLANKET"));
        assert!(index.contains("BLANK"));
        assert!(index.contains("BLANKET"));
        assert!(!index.contains("BLAN"));
        assert!(!index.contains("BLANKETS"));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut index = PrefixIndex::new();
        assert!(index.insert("HUMP"));
        assert!(!index.insert("HUMP"));
        assert_eq!(index.len(), 1);
        assert!(index.contains("HUMP"));
    }

    #[test]
    fn test_insert_rejects_unindexable_words() {
        let mut index = PrefixIndex::new();
        assert!(!index.insert(""));
        assert!(!index.insert("lower"));
        assert!(!index.insert("DON'T"));
        assert!(index.is_empty());
    }

    #[test]
    fn test_every_prefix_of_an_inserted_word_is_a_prefix() {
        let words = ["THUMPS", "TABS", "BAT", "HUMP"];
        let mut index = PrefixIndex::new();
        for word in words {
            index.insert(word);
        }
        for word in words {
            assert!(index.contains(word));
            for end in 1..=word.len() {
                assert!(index.has_prefix(&word[..end]), "missing prefix {}", &word[..end]);
            }
        }
        assert!(index.has_prefix(""));
        assert!(!index.has_prefix("TX"));
        assert!(!index.has_prefix("THUMPSS"));
    }

    #[test]
    fn test_lookup_with_foreign_characters() {
        let mut index = PrefixIndex::new();
        index.insert("BAT");
        assert!(!index.contains("bat"));
        assert!(!index.has_prefix("B-"));
    }

    #[test]
    fn test_node_ref_walk() {
        let mut index = PrefixIndex::new();
        index.insert("BA");
        index.insert("BAT");
        let b = index.root().child('B').unwrap();
        assert!(!b.is_terminal());
        let ba = b.child('A').unwrap();
        assert!(ba.is_terminal());
        assert!(ba.child('T').unwrap().is_terminal());
        assert!(ba.child('S').is_none());
    }

    #[test]
    fn test_build_index_filters_to_box_letters() {
        let letter_box = parse_box_config(["B N M", "L K H", "A E S", "T U P"]).unwrap();
        let words = ["blanket", " THUMPS ", "zebra", "BAT!", "", "tabs"];
        let index = build_index(words, &letter_box);
        assert_eq!(index.len(), 3);
        assert!(index.contains("BLANKET"));
        assert!(index.contains("THUMPS"));
        assert!(index.contains("TABS"));
        assert!(!index.has_prefix("Z"));
    }

    #[test]
    fn test_build_index_from_owned_strings() {
        let letter_box = parse_box_config(["ABC", "DEF", "GHI", "JKL"]).unwrap();
        let words: Vec<String> = vec!["BAD".into(), "BAD".into(), "DIG".into()];
        let index = build_index(words, &letter_box);
        assert_eq!(index.len(), 2);
    }
}
