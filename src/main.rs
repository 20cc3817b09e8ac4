use clap::Parser;
use std::process::ExitCode;
use std::time::Instant;

use tileword::board::Board;
use tileword::errors::GridError;
use tileword::grid;
use tileword::solver;
use tileword::word_list::WordList;

/// Tileword board solver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The board grid: rows separated by ';', cells by ','. A cell is a
    /// letter, a double tile like "Q/U", or '.' for a hole
    /// (e.g. "C,A;T,S").
    grid: String,

    /// Path to the word list file (one word per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/wordlist.txt")
    )]
    word_list: String,

    /// Minimum length of reported words
    #[arg(short = 'm', long, default_value_t = solver::DEFAULT_MIN_LEN)]
    min_len: usize,
}

/// Entry point of the tileword CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    // Set up logging
    let debug_enabled = std::env::var("TILEWORD_DEBUG").is_ok();
    tileword::log::init_logger(debug_enabled);

    log::info!("Starting tileword solver");

    if let Err(e) = try_main() {
        // Print the error message to stderr, with detailed formatting if it's a GridError
        if let Some(grid_err) = e.downcast_ref::<GridError>() {
            eprintln!("Error: {}", grid_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        // Exit explicitly with a nonzero code so scripts can detect failure
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the tileword CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load the word list from disk and build the dictionary trie.
/// 3. Parse the grid text and build the board graph.
/// 4. Run the pruned search and print each word on stdout, longest first.
/// 5. Print performance metrics (timings, counts) on stderr.
///
/// Returns `Ok(())` on success or an error (e.g., malformed grid, missing
/// word-list file) which bubbles up to [`main`].
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let cli = Cli::parse();

    // 1. Load the word list from disk and build the trie
    let t_load = Instant::now();
    let word_list = WordList::load_from_path(&cli.word_list)?;
    let trie = word_list.build_trie();
    let load_secs = t_load.elapsed().as_secs_f64();

    // 2. Build the board from the grid text
    let board = Board::from_grid(&grid::parse_grid(&cli.grid)?)?;

    // 3. Solve and print each word on stdout
    let t_solve = Instant::now();
    let words = solver::solve(&board, &trie, cli.min_len);
    let solve_secs = t_solve.elapsed().as_secs_f64();

    for word in &words {
        println!("{word}");
    }

    // 4. Print diagnostics (dictionary size, board size, timings) to stderr
    eprintln!(
        "Loaded {} words in {:.3}s; searched {} tiles in {:.3}s ({} words found).",
        trie.len(),
        load_secs,
        board.len(),
        solve_secs,
        words.len()
    );

    Ok(())
}
