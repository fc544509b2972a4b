//! The main solver: walks every path through a letter grid and collects
//! the dictionary words those paths spell.
//!
//! # Error Handling
//!
//! The solver uses [`SolverError`] with two variants:
//!
//! - S001: `Grid` (Grid construction failed (wraps [`GridError`]))
//! - S002: `InvalidSizeBounds` (Contradictory word-size bounds)
//!
//! Each error has a `code()`, optional `help()`, and `display_detailed()`
//! method.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use wordhunt::dictionary::DictionaryIndex;
//! use wordhunt::solver::{self, SolverConfig};
//!
//! let dict = DictionaryIndex::from_words(["word", "hunt"], 10);
//! let result = solver::solve_grid(4, "wordaaaaaaaaaaaa", &dict, &SolverConfig::default())?;
//!
//! assert_eq!(result.words, vec!["word"]);
//! # Ok::<(), wordhunt::solver::SolverError>(())
//! ```
//!
//! ## Handling Errors with Detailed Messages
//!
//! ```
//! use wordhunt::dictionary::DictionaryIndex;
//! use wordhunt::solver::{self, SolverConfig};
//!
//! let dict = DictionaryIndex::from_words(["word"], 10);
//! // 15 letters for a 4x4 grid
//! match solver::solve_grid(4, "wordaaaaaaaaaaa", &dict, &SolverConfig::default()) {
//!     Ok(result) => println!("Found {} words", result.words.len()),
//!     Err(e) => {
//!         // Show detailed error with code and help
//!         eprintln!("{}", e.display_detailed());
//!     }
//! }
//! ```

use crate::dictionary::DictionaryIndex;
use crate::errors::GridError;
use crate::grid::Grid;
use crate::paths::PathEnumerator;
use log::{debug, info};
use std::collections::HashSet;

/// Shortest word worth reporting (longer words score more in the game).
pub const DEFAULT_MIN_WORD_SIZE: usize = 4;
/// Longest word worth searching for (longer chains are vanishingly rare).
pub const DEFAULT_MAX_WORD_SIZE: usize = 10;

/// Word-length bounds for one solver run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Words shorter than this are not reported.
    pub min_word_size: usize,
    /// Paths longer than this are not explored.
    pub max_word_size: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            min_word_size: DEFAULT_MIN_WORD_SIZE,
            max_word_size: DEFAULT_MAX_WORD_SIZE,
        }
    }
}

/// Successful solver run.
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Discovered words, longest first; equal lengths are ordered
    /// lexicographically.
    pub words: Vec<String>,
    /// Number of candidate prefixes the traversal examined (diagnostic).
    pub candidates_examined: u64,
}

impl SolveResult {
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.words.len()
    }
}

impl IntoIterator for SolveResult {
    type Item = String;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

/// Unified error type for the solver pipeline.
///
/// This consolidates grid-construction failures and configuration mistakes
/// so that callers only need to handle a single `Result<_, SolverError>`.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// Failure while building the grid from raw input.
    ///
    /// These originate from [`GridError`] during input validation.
    #[error("grid construction failed: {0}")]
    Grid(#[from] GridError),

    /// The word-size bounds cannot admit any word.
    #[error("invalid word-size bounds: min={min}, max={max}")]
    InvalidSizeBounds { min: usize, max: usize },
}

impl SolverError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SolverError::Grid(_) => "S001",
            SolverError::InvalidSizeBounds { .. } => "S002",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SolverError::InvalidSizeBounds { .. } => {
                Some("min_word_size must be at least 1 and no greater than max_word_size")
            }
            SolverError::Grid(_) => None, // GridError has its own help
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            SolverError::Grid(ge) => {
                // delegate to GridError's detailed display
                format!("{}\n  caused by: {}", self.code(), ge.display_detailed())
            }
            _ => crate::errors::format_error_with_code_and_help(
                &self.to_string(),
                self.code(),
                self.help(),
            ),
        }
    }
}

/// Convenience wrapper: build the grid from raw input and solve it.
///
/// # Errors
///
/// Returns [`SolverError::Grid`] for malformed input and
/// [`SolverError::InvalidSizeBounds`] for unusable length bounds.
pub fn solve_grid(
    dimension: usize,
    letters: &str,
    dict: &DictionaryIndex,
    config: &SolverConfig,
) -> Result<SolveResult, SolverError> {
    let grid = Grid::build(dimension, letters)?;
    solve(&grid, dict, config)
}

/// Walk every simple path from every cell of `grid`, collect the candidate
/// strings that are dictionary words within the configured length bounds,
/// and rank them longest first.
///
/// A word reachable via several distinct paths is reported once. All run
/// state is owned by this invocation, so repeated or interleaved runs
/// cannot interfere with each other.
///
/// # Errors
///
/// Returns [`SolverError::InvalidSizeBounds`] when `min_word_size` is zero
/// or exceeds `max_word_size`.
pub fn solve(
    grid: &Grid,
    dict: &DictionaryIndex,
    config: &SolverConfig,
) -> Result<SolveResult, SolverError> {
    if config.min_word_size == 0 || config.min_word_size > config.max_word_size {
        return Err(SolverError::InvalidSizeBounds {
            min: config.min_word_size,
            max: config.max_word_size,
        });
    }

    debug!(
        "Solving {0}x{0} grid against {1} dictionary words (sizes {2}..={3})",
        grid.dimension(),
        dict.len(),
        config.min_word_size,
        config.max_word_size
    );

    let mut found: HashSet<String> = HashSet::new();
    let mut candidates_examined = 0u64;
    let mut walker = PathEnumerator::new(grid, config.max_word_size);

    for start in 0..grid.cell_count() {
        walker.walk_from(start, &mut |candidate: &str| {
            candidates_examined += 1;
            if candidate.len() >= config.min_word_size
                && !found.contains(candidate)
                && dict.contains(candidate)
            {
                found.insert(candidate.to_string());
            }
            // Extend only while some dictionary entry starts this way
            dict.is_prefix(candidate)
        });
    }

    let mut words: Vec<String> = found.into_iter().collect();
    // Longest first; lexicographic within a length so output is deterministic
    words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    info!(
        "Found {} words after examining {} candidate prefixes",
        words.len(),
        candidates_examined
    );

    Ok(SolveResult { words, candidates_examined })
}
