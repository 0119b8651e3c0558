//! Puzzle configuration: the four sides of the box and the chain length.
//!
//! Input validation lives here so the search modules can assume a
//! well-formed box. Per-side uniqueness is enforced; a letter appearing on
//! two different sides is tolerated (see [`LetterBox::has_shared_letters`]).

use crate::error::ValidationError;
use std::fmt;

pub const LETTERS_PER_SIDE: usize = 3;
pub const MAX_CHAIN_LENGTH: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Left,
    Bottom,
}

impl Side {
    /// Enumeration order used by the word search.
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Left, Side::Bottom];

    pub fn name(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Left => "left",
            Side::Bottom => "bottom",
        }
    }

    fn index(self) -> usize {
        match self {
            Side::Top => 0,
            Side::Right => 1,
            Side::Left => 2,
            Side::Bottom => 3,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Four sides of three uppercase letters each.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LetterBox {
    sides: [[char; LETTERS_PER_SIDE]; 4],
}

impl LetterBox {
    /// Builds a box from already validated sides, in `Side::ALL` order.
    pub fn new(sides: [[char; LETTERS_PER_SIDE]; 4]) -> Self {
        Self { sides }
    }

    pub fn side(&self, side: Side) -> &[char; LETTERS_PER_SIDE] {
        &self.sides[side.index()]
    }

    /// Every (side, letter) slot, sides in `Side::ALL` order.
    pub fn slots(&self) -> impl Iterator<Item = (Side, char)> + '_ {
        Side::ALL
            .into_iter()
            .flat_map(move |side| self.side(side).iter().map(move |&c| (side, c)))
    }

    pub fn contains_letter(&self, letter: char) -> bool {
        self.sides.iter().flatten().any(|&c| c == letter)
    }

    /// Distinct letters on the box, in slot order.
    pub fn letters(&self) -> Vec<char> {
        let mut letters = Vec::with_capacity(LETTERS_PER_SIDE * 4);
        for (_, c) in self.slots() {
            if !letters.contains(&c) {
                letters.push(c);
            }
        }
        letters
    }

    /// Bit `i` is set when letter `'A' + i` is on the box.
    pub fn letter_mask(&self) -> u32 {
        letter_mask(self.sides.iter().flatten().copied())
    }

    /// True when some letter sits on more than one side.
    pub fn has_shared_letters(&self) -> bool {
        self.letters().len() < LETTERS_PER_SIDE * 4
    }
}

impl fmt::Display for LetterBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = Side::ALL
            .iter()
            .map(|&side| {
                let letters: String = self.side(side).iter().collect();
                format!("{side}: {letters}")
            })
            .collect();
        f.write_str(&rendered.join(", "))
    }
}

/// Maps `'A'..='Z'` to `0..26`.
pub fn letter_index(c: char) -> Option<usize> {
    c.is_ascii_uppercase().then(|| (c as u8 - b'A') as usize)
}

/// Set of uppercase letters as a bitmask. Other characters are ignored.
pub fn letter_mask(letters: impl IntoIterator<Item = char>) -> u32 {
    letters
        .into_iter()
        .filter_map(letter_index)
        .fold(0, |mask, i| mask | (1 << i))
}

/// Parses one side from `"A B C"`, `"abc"` or similar.
pub fn parse_side(side: Side, raw: &str) -> Result<[char; LETTERS_PER_SIDE], ValidationError> {
    let letters: Vec<char> = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if let Some(&bad) = letters.iter().find(|c| !c.is_ascii_uppercase()) {
        return Err(ValidationError::NotALetter(bad));
    }
    let parsed: [char; LETTERS_PER_SIDE] =
        letters
            .as_slice()
            .try_into()
            .map_err(|_| ValidationError::WrongLetterCount {
                side,
                count: letters.len(),
            })?;
    for (i, &c) in parsed.iter().enumerate() {
        if parsed[..i].contains(&c) {
            return Err(ValidationError::DuplicateLetter { side, letter: c });
        }
    }
    Ok(parsed)
}

/// Parses all four sides, given in `Side::ALL` order.
pub fn parse_box_config(raw_sides: [&str; 4]) -> Result<LetterBox, ValidationError> {
    let mut sides = [[' '; LETTERS_PER_SIDE]; 4];
    for (slot, (side, raw)) in sides.iter_mut().zip(Side::ALL.into_iter().zip(raw_sides)) {
        *slot = parse_side(side, raw)?;
    }
    Ok(LetterBox::new(sides))
}

pub fn parse_chain_length(raw: &str) -> Result<usize, ValidationError> {
    let trimmed = raw.trim();
    match trimmed.parse::<usize>() {
        Ok(n) if (1..=MAX_CHAIN_LENGTH).contains(&n) => Ok(n),
        _ => Err(ValidationError::InvalidChainLength(trimmed.to_string())),
    }
}
