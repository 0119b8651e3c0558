use crate::chains::{Chain, Solutions};
use crate::puzzle::{LETTERS_PER_SIDE, LetterBox, Side, parse_chain_length, parse_side};
use crate::wordbank::DEFAULT_MIN_WORD_LENGTH;
use clap::Parser;
use std::error::Error;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::time::Duration;

/// Letter Boxed solver CLI options
///
/// Sides and chain length left off the command line are asked for on stdin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<PathBuf>,

    /// Letters on the top side, e.g. "A B C"
    #[arg(long)]
    pub top: Option<String>,

    /// Letters on the right side
    #[arg(long)]
    pub right: Option<String>,

    /// Letters on the left side
    #[arg(long)]
    pub left: Option<String>,

    /// Letters on the bottom side
    #[arg(long)]
    pub bottom: Option<String>,

    /// Number of words per solution (1, 2, or 3)
    #[arg(short = 'n', long = "length", value_parser = parse_chain_length)]
    pub chain_length: Option<usize>,

    /// Ignore dictionary words shorter than this
    #[arg(long, default_value_t = DEFAULT_MIN_WORD_LENGTH)]
    pub min_word_length: usize,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    fn side_arg(&self, side: Side) -> Option<&str> {
        match side {
            Side::Top => self.top.as_deref(),
            Side::Right => self.right.as_deref(),
            Side::Left => self.left.as_deref(),
            Side::Bottom => self.bottom.as_deref(),
        }
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

fn read_line<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input ended before the puzzle was complete",
        ));
    }
    Ok(input)
}

/// Prompts until the side parses.
pub fn read_side<R: BufRead>(reader: &mut R, side: Side) -> io::Result<[char; LETTERS_PER_SIDE]> {
    loop {
        println!("Enter the letters associated with the {side} side (3 letters separated by spaces):");
        let input = read_line(reader)?;
        match parse_side(side, &input) {
            Ok(letters) => return Ok(letters),
            Err(e) => println!("Invalid input: {e}."),
        }
    }
}

pub fn read_chain_length<R: BufRead>(reader: &mut R) -> io::Result<usize> {
    loop {
        println!("Enter the desired solution length (1 for 1-word, 2 for 2-word, 3 for 3-word):");
        let input = read_line(reader)?;
        match parse_chain_length(&input) {
            Ok(length) => return Ok(length),
            Err(e) => println!("Invalid input: {e}."),
        }
    }
}

/// Takes whatever the command line supplied and prompts for the rest.
///
/// A side given as an argument is not re-prompted: a bad value there is
/// returned as an error.
pub fn collect_puzzle<R: BufRead>(
    cli: &Cli,
    reader: &mut R,
) -> Result<(LetterBox, usize), Box<dyn Error>> {
    let mut sides = [[' '; LETTERS_PER_SIDE]; 4];
    for (slot, side) in sides.iter_mut().zip(Side::ALL) {
        *slot = match cli.side_arg(side) {
            Some(raw) => parse_side(side, raw)?,
            None => read_side(reader, side)?,
        };
    }
    let length = match cli.chain_length {
        Some(length) => length,
        None => read_chain_length(reader)?,
    };
    Ok((LetterBox::new(sides), length))
}

pub fn bucket_title(length: usize) -> &'static str {
    match length {
        1 => "One",
        2 => "Two",
        _ => "Three",
    }
}

pub fn format_chain(chain: &Chain) -> String {
    chain.join(" - ")
}

pub fn display_puzzle(letter_box: &LetterBox) {
    println!("------------------------");
    println!("Letters provided for each side: {letter_box}");
    println!("------------------------");
}

pub fn display_solutions(solutions: &Solutions, length: usize) {
    let chains = solutions.bucket(length).unwrap_or_default();
    println!(
        "\nWinning {}-Word Solutions: ({} solutions)",
        bucket_title(length),
        chains.len()
    );
    for chain in chains {
        println!("{}", format_chain(chain));
    }
}

pub fn display_no_words_message() {
    println!("No playable words found for this box.");
}

/// Wall-clock time spent in each stage of a run.
#[derive(Debug, Default, Clone, Copy)]
pub struct StageTimings {
    pub load_dictionary: Duration,
    pub find_words: Duration,
    pub find_chains: Duration,
    pub total: Duration,
}

pub fn display_timings(timings: &StageTimings) {
    eprintln!();
    eprintln!("load_dictionary: {:.6} seconds", timings.load_dictionary.as_secs_f64());
    eprintln!("find_words: {:.6} seconds", timings.find_words.as_secs_f64());
    eprintln!("find_chains: {:.6} seconds", timings.find_chains.as_secs_f64());
    eprintln!("Total time elapsed: {:.6} seconds", timings.total.as_secs_f64());
}
