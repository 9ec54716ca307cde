use hashbrown::HashSet;
use thiserror::Error;

use crate::{dims::Cell, grid::Grid};

/// Ordered cells from start to end, each one adjacent to the previous.
pub type Path = Vec<Cell>;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    #[error("cell {0} is outside of the grid")]
    OutOfBounds(Cell),
}

/// Depth first path search over a finished grid.
///
/// Every branch of the search carries its own copy of the path walked so far, but all branches
/// share a single visited set which is never cleared. Once a cell has been entered by one branch,
/// no later branch can go through it again, even if it would form a different simple path. The
/// end cell is the only one never marked, so several branches can still reach it. The result is
/// therefore not every simple path in the graph, only the ones this single exclusive pass runs
/// into, in the order it runs into them. Neighbours are tried down, right, up, left.
///
/// The start cell isn't required to be a passage. It is always entered, and if it equals the end
/// it's reported as a path of length 1.
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<'a> {
    grid: &'a Grid,
}

impl<'a> PathFinder<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    /// All paths found from `start` to `end`, in discovery order.
    ///
    /// An empty result means the end can't be reached, that's not an error.
    pub fn solve(&self, start: Cell, end: Cell) -> Result<Vec<Path>, SolveError> {
        for pos in [start, end] {
            if !self.grid.is_in_bounds(pos) {
                return Err(SolveError::OutOfBounds(pos));
            }
        }

        let mut solutions = Vec::new();
        let mut visited = HashSet::new();
        let mut stack: Vec<(Cell, Path)> = vec![(start, Vec::new())];

        while let Some((current, mut path)) = stack.pop() {
            // checked on entry, a sibling explored earlier may have taken it since it was pushed
            if visited.contains(&current) {
                continue;
            }

            path.push(current);
            if current == end {
                solutions.push(path);
                continue;
            }

            visited.insert(current);

            // reversed, so the first neighbour is entered first
            for next in self.grid.passage_neighbors(current).into_iter().rev() {
                if !visited.contains(&next) {
                    stack.push((next, path.clone()));
                }
            }
        }

        log::debug!(
            "Found {} path(s) from {} to {}, visited {} cells",
            solutions.len(),
            start,
            end,
            visited.len()
        );

        Ok(solutions)
    }
}

/// Runs a [`PathFinder`] on `grid`.
pub fn find_paths(grid: &Grid, start: Cell, end: Cell) -> Result<Vec<Path>, SolveError> {
    PathFinder::new(grid).solve(start, end)
}
