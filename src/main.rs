use letter_boxed_solver::cli::{
    Cli, StageTimings, collect_puzzle, display_no_words_message, display_puzzle,
    display_solutions, display_timings, parse_cli,
};
use letter_boxed_solver::logging::init_logger;
use letter_boxed_solver::wordbank::{load_wordbank, resolve_wordbank_source};
use letter_boxed_solver::{build_index, find_words, solve};
use std::error::Error;
use std::io;
use std::process::ExitCode;
use std::time::Instant;

fn main() -> ExitCode {
    let cli = parse_cli();
    init_logger(cli.verbose);

    if let Err(e) = try_main(&cli) {
        eprintln!("Error: {e}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Collects the puzzle, loads the word list, then runs the word search and
/// the chain search, printing the bucket for the requested length.
fn try_main(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let t_total = Instant::now();
    let mut timings = StageTimings::default();

    let stdin = io::stdin();
    let (letter_box, target_length) = collect_puzzle(cli, &mut stdin.lock())?;
    display_puzzle(&letter_box);
    if letter_box.has_shared_letters() {
        log::warn!("some letters appear on more than one side");
    }

    let t_load = Instant::now();
    let source = resolve_wordbank_source(cli.wordbank_path.as_deref());
    log::info!("Loading words from {source}");
    let words = load_wordbank(&source, cli.min_word_length)
        .map_err(|e| format!("failed to load word list from '{source}': {e}"))?;
    let index = build_index(&words, &letter_box);
    timings.load_dictionary = t_load.elapsed();
    log::info!("{} of {} words use only box letters", index.len(), words.len());

    let t_find = Instant::now();
    let candidates = find_words(&letter_box, &index);
    timings.find_words = t_find.elapsed();

    if candidates.is_empty() {
        display_no_words_message();
    } else {
        let t_chains = Instant::now();
        let solutions = solve(&candidates, &letter_box, target_length)?;
        timings.find_chains = t_chains.elapsed();
        display_solutions(&solutions, target_length);
    }

    timings.total = t_total.elapsed();
    display_timings(&timings);
    Ok(())
}
