//! `grid` — The immutable letter grid and its precomputed adjacency.
//!
//! A grid is built once from a dimension and a row-major string of letters,
//! and never mutated afterwards. Cells are identified by a flat `usize`
//! index (`row * dimension + col`) into parallel vectors, so cell equality
//! is index equality and the structure holds no cross-references between
//! cells.
//!
//! The adjacency relation is the Moore neighborhood: for cell (r, c) every
//! in-bounds cell (r+dr, c+dc) with dr, dc ∈ {-1, 0, 1}, excluding the cell
//! itself. It is computed once during `build` and is the single source of
//! truth for which letter chains are legal; every traversal reuses it.

use crate::errors::GridError;

/// Flat row-major index of one cell. Stable for the grid's lifetime.
pub type CellId = usize;

/// Immutable dimension × dimension letter grid with 8-neighbor adjacency.
#[derive(Debug, Clone)]
pub struct Grid {
    dimension: usize,
    /// Lowercase ASCII letter of each cell, row-major.
    letters: Vec<u8>,
    /// For each cell, the ids of its in-bounds Moore neighbors.
    neighbors: Vec<Vec<CellId>>,
}

impl Grid {
    /// Build a grid from `raw`, which must contain exactly `dimension²`
    /// alphabetic characters in row-major order. Letters are normalized to
    /// lowercase on ingestion.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ZeroDimension`] for `dimension == 0`,
    /// [`GridError::WrongLength`] when the character count is off, and
    /// [`GridError::NonAlphabetic`] for any non-letter character. No
    /// partial grid is constructed on error.
    pub fn build(dimension: usize, raw: &str) -> Result<Grid, GridError> {
        if dimension == 0 {
            return Err(GridError::ZeroDimension);
        }

        let expected = dimension * dimension;
        let actual = raw.chars().count();
        if actual != expected {
            return Err(GridError::WrongLength { dimension, expected, actual });
        }

        let letters = raw
            .chars()
            .enumerate()
            .map(|(position, c)| {
                if c.is_ascii_alphabetic() {
                    Ok(c.to_ascii_lowercase() as u8)
                } else {
                    Err(GridError::NonAlphabetic { invalid_char: c, position })
                }
            })
            .collect::<Result<Vec<u8>, _>>()?;

        let neighbors = compute_neighbors(dimension);

        Ok(Grid { dimension, letters, neighbors })
    }

    /// Side length of the square grid.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Total number of cells (`dimension²`).
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.letters.len()
    }

    /// Lowercase ASCII letter held by `cell`.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of range; valid ids are `0..cell_count()`.
    #[must_use]
    pub fn letter(&self, cell: CellId) -> u8 {
        self.letters[cell]
    }

    /// Precomputed Moore neighbors of `cell` (between 0 and 8 ids, never
    /// including `cell` itself).
    #[must_use]
    pub fn neighbors(&self, cell: CellId) -> &[CellId] {
        &self.neighbors[cell]
    }
}

/// Compute the Moore-neighborhood adjacency lists for a `dimension`-sided
/// square. Bounds are checked explicitly; out-of-range offsets are simply
/// skipped.
fn compute_neighbors(dimension: usize) -> Vec<Vec<CellId>> {
    let dim = dimension as isize;
    let mut neighbors = Vec::with_capacity(dimension * dimension);

    for r in 0..dim {
        for c in 0..dim {
            let mut cell_neighbors = Vec::with_capacity(8);
            for dr in -1..=1isize {
                for dc in -1..=1isize {
                    if dr == 0 && dc == 0 {
                        continue;
                    }
                    let (nr, nc) = (r + dr, c + dc);
                    if nr >= 0 && nr < dim && nc >= 0 && nc < dim {
                        cell_neighbors.push((nr * dim + nc) as CellId);
                    }
                }
            }
            neighbors.push(cell_neighbors);
        }
    }

    neighbors
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_build_normalizes_to_lowercase() {
        let grid = Grid::build(2, "AbCd").unwrap();
        let letters: Vec<u8> = (0..4).map(|i| grid.letter(i)).collect();
        assert_eq!(letters, b"abcd");
    }

    #[test]
    fn test_build_rejects_wrong_length() {
        // 15 characters for a 4x4 grid
        let err = Grid::build(4, "abcdefghijklmno").unwrap_err();
        match err {
            GridError::WrongLength { dimension, expected, actual } => {
                assert_eq!(dimension, 4);
                assert_eq!(expected, 16);
                assert_eq!(actual, 15);
            }
            other => panic!("expected WrongLength, got {other:?}"),
        }
    }

    #[test]
    fn test_build_rejects_non_alphabetic() {
        let err = Grid::build(2, "ab1d").unwrap_err();
        match err {
            GridError::NonAlphabetic { invalid_char, position } => {
                assert_eq!(invalid_char, '1');
                assert_eq!(position, 2);
            }
            other => panic!("expected NonAlphabetic, got {other:?}"),
        }
    }

    #[test]
    fn test_build_rejects_zero_dimension() {
        assert!(matches!(Grid::build(0, "").unwrap_err(), GridError::ZeroDimension));
    }

    #[test]
    fn test_single_cell_grid_has_no_neighbors() {
        let grid = Grid::build(1, "q").unwrap();
        assert_eq!(grid.cell_count(), 1);
        assert!(grid.neighbors(0).is_empty());
    }

    #[test]
    fn test_two_by_two_is_fully_connected() {
        let grid = Grid::build(2, "abcd").unwrap();
        for cell in 0..4 {
            let n: HashSet<CellId> = grid.neighbors(cell).iter().copied().collect();
            assert_eq!(n.len(), 3, "cell {cell} should see the other 3 cells");
            assert!(!n.contains(&cell));
        }
    }

    #[test]
    fn test_neighbor_counts_corner_edge_interior() {
        let grid = Grid::build(3, "abcdefghi").unwrap();
        // corners: (0,0) (0,2) (2,0) (2,2)
        for corner in [0, 2, 6, 8] {
            assert_eq!(grid.neighbors(corner).len(), 3, "corner {corner}");
        }
        // edge midpoints
        for edge in [1, 3, 5, 7] {
            assert_eq!(grid.neighbors(edge).len(), 5, "edge {edge}");
        }
        // center
        assert_eq!(grid.neighbors(4).len(), 8);
    }

    #[test]
    fn test_adjacency_is_symmetric_without_duplicates_or_self_loops() {
        let grid = Grid::build(4, "abcdefghijklmnop").unwrap();
        for cell in 0..grid.cell_count() {
            let n = grid.neighbors(cell);
            let unique: HashSet<CellId> = n.iter().copied().collect();
            assert_eq!(unique.len(), n.len(), "cell {cell} has duplicate neighbors");
            assert!(!unique.contains(&cell), "cell {cell} is its own neighbor");
            assert!((3..=8).contains(&n.len()), "cell {cell} neighbor count {}", n.len());
            for &other in n {
                assert!(
                    grid.neighbors(other).contains(&cell),
                    "adjacency not symmetric between {cell} and {other}"
                );
            }
        }
    }

    #[test]
    fn test_diagonals_are_adjacent() {
        let grid = Grid::build(3, "abcdefghi").unwrap();
        // (0,0) and (1,1)
        assert!(grid.neighbors(0).contains(&4));
        // (0,1) and (1,0)
        assert!(grid.neighbors(1).contains(&3));
        // (0,0) and (2,2) are not adjacent
        assert!(!grid.neighbors(0).contains(&8));
    }
}
