//! `paths` — Bounded depth-first enumeration of simple paths in the grid.
//!
//! A walk starts at one cell and extends through unvisited Moore neighbors,
//! never revisiting a cell within the same path and never growing past the
//! length bound. The caller-supplied visitor sees the accumulated letter
//! string at every prefix of length ≥ 1 and returns whether the branch is
//! worth extending, which is how dictionary prefix pruning plugs in; a
//! visitor that always returns `true` yields the exhaustive candidate
//! space.
//!
//! Path state is one mutable visited arena plus one string buffer, restored
//! by push-before-recurse / pop-after-recurse backtracking, so every
//! sibling branch explores from the identical prefix state without any
//! copying.

use crate::grid::{CellId, Grid};

/// Depth-first walker over a read-only grid. Reusable across start cells;
/// state is fully unwound after each `walk_from` call.
pub struct PathEnumerator<'a> {
    grid: &'a Grid,
    max_len: usize,
    visited: Vec<bool>,
    buf: String,
}

impl<'a> PathEnumerator<'a> {
    /// Create a walker bounded to paths of at most `max_len` cells.
    #[must_use]
    pub fn new(grid: &'a Grid, max_len: usize) -> Self {
        PathEnumerator {
            grid,
            max_len,
            visited: vec![false; grid.cell_count()],
            buf: String::with_capacity(max_len),
        }
    }

    /// Enumerate every simple path starting at `start`, invoking `visit`
    /// with the accumulated letters of each prefix. The branch is extended
    /// into unvisited neighbors only while `visit` returns `true` and the
    /// length bound allows it.
    pub fn walk_from<V>(&mut self, start: CellId, visit: &mut V)
    where
        V: FnMut(&str) -> bool,
    {
        debug_assert!(self.buf.is_empty());
        debug_assert!(self.visited.iter().all(|&v| !v));
        if self.max_len == 0 {
            return;
        }
        self.dfs(start, visit);
    }

    fn dfs<V>(&mut self, cell: CellId, visit: &mut V)
    where
        V: FnMut(&str) -> bool,
    {
        self.visited[cell] = true;
        self.buf.push(self.grid.letter(cell) as char);

        if visit(&self.buf) && self.buf.len() < self.max_len {
            let grid = self.grid;
            for &next in grid.neighbors(cell) {
                if !self.visited[next] {
                    self.dfs(next, visit);
                }
            }
        }

        // Backtrack so sibling branches see the identical prefix state
        self.buf.pop();
        self.visited[cell] = false;
    }
}
