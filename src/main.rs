use std::process::ExitCode;
use clap::Parser;
use std::time::Instant;

use wordhunt::dictionary::DictionaryIndex;
use wordhunt::solver;
use wordhunt::solver::SolverConfig;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

/// Word Hunt grid solver
#[derive(Parser, Debug)]
#[command(author, version = VERSION, about, long_about = None)]
struct Cli {
    /// All dimension² grid letters in row-major order (e.g. "seatvrneoilcbdmu")
    letters: String,

    /// Side length of the square grid
    #[arg(short, long, default_value_t = 4)]
    dimension: usize,

    /// Path to the word list file (one word per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt")
    )]
    word_list: String,

    /// Shortest word worth reporting
    #[arg(short = 'm', long, default_value_t = solver::DEFAULT_MIN_WORD_SIZE)]
    min_word_size: usize,

    /// Longest word worth searching for
    #[arg(short = 'M', long, default_value_t = solver::DEFAULT_MAX_WORD_SIZE)]
    max_word_size: usize,
}

/// Entry point of the Word Hunt CLI solver.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {

    // Set up logging
    let debug_enabled = std::env::var("WORDHUNT_DEBUG").is_ok();
    wordhunt::log::init_logger(debug_enabled);

    log::debug!("Starting Word Hunt solver");

    if let Err(e) = try_main() {
        // Print the error message to stderr, with detailed formatting if it's a SolverError
        if let Some(solver_err) = e.downcast_ref::<solver::SolverError>() {
            eprintln!("Error: {}", solver_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        // Exit explicitly with a nonzero code so scripts can detect failure
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the Word Hunt CLI solver.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load the word list from disk into a membership/prefix index.
/// 3. Build the grid and solve it against the index.
/// 4. Print each discovered word on stdout, longest first.
/// 5. Print performance metrics (timings, counts) on stderr.
///
/// Returns `Ok(())` on success or an error (e.g., malformed grid input,
/// missing word-list file) which bubbles up to [`main`].
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let cli = Cli::parse();

    // 1. Load the word list from disk, indexing prefixes up to the size cap
    let t_load = Instant::now();
    let dict = DictionaryIndex::load_from_path(&cli.word_list, cli.max_word_size)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    let config = SolverConfig {
        min_word_size: cli.min_word_size,
        max_word_size: cli.max_word_size,
    };

    // 2. Build the grid and solve it
    let t_solve = Instant::now();
    let result = solver::solve_grid(cli.dimension, &cli.letters, &dict, &config)?;
    let solve_secs = t_solve.elapsed().as_secs_f64();

    // 3. Print each word on stdout, longest first
    for word in &result.words {
        println!("{word}");
    }

    // 4. Print diagnostics (word-list size, timings, counts) to stderr
    eprintln!(
        "Loaded {} words in {:.3}s; solved in {:.3}s ({} found, {} prefixes examined).",
        dict.len(),
        load_secs,
        solve_secs,
        result.words.len(),
        result.candidates_examined
    );

    Ok(())
}
