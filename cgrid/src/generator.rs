use std::fmt;

use rand::{seq::SliceRandom as _, Rng as _};
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    dims::*,
    grid::{Grid, Tile},
};

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GenerationError {
    #[error("invalid maze size {height}x{width}, need at least 1 row and 2 columns")]
    InvalidSize { height: usize, width: usize },
}

/// Cell where the maze is entered, second column of the top row.
pub const ENTRANCE: Cell = Cell(0, 1);

/// Cell where the maze is left, second to last column of the bottom row.
///
/// `None` for sizes too small to have one, see [`check_size`].
pub fn exit(height: usize, width: usize) -> Option<Cell> {
    Some(Cell(height.checked_sub(1)?, width.checked_sub(2)?))
}

pub fn check_size(height: usize, width: usize) -> Result<(), GenerationError> {
    if height == 0 || width < 2 {
        return Err(GenerationError::InvalidSize { height, width });
    }
    Ok(())
}

pub trait GridGenerator: fmt::Debug + Sync + Send {
    /// Builds a new grid with opened entrance and exit.
    ///
    /// Every call starts from a fresh, fully walled grid. The only state carried between calls
    /// is whatever the caller keeps in `rng`.
    fn generate(
        &self,
        height: usize,
        width: usize,
        rng: &mut Random,
    ) -> Result<Grid, GenerationError>;
}

/// Randomized depth first carving over cells two apart, also known as recursive backtracker.
///
/// The walk starts at a random cell and only ever moves by two, so it covers the cells that share
/// the start's row and column parity. The wall between two consecutive cells is carved as well.
/// Cells of the other parity classes stay walls unless they happen to be such a midpoint.
///
/// The start cell itself isn't carved when the walk begins, only once some later step moves
/// back onto it. If it never gets a neighbour (1x1 lattice) it simply stays a wall.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecursiveBacktracker;

impl RecursiveBacktracker {
    pub(crate) fn carve_from(grid: &mut Grid, start: Cell, rng: &mut Random) {
        let mut stack = Vec::with_capacity(grid.height() * grid.width() / 4 + 1);
        stack.push(start);

        while let Some(&current) = stack.last() {
            // the wall check doubles as "not visited yet", carved cells are never walls again
            let unvisited_neighbors = Dims::CARVE_STEPS
                .into_iter()
                .filter_map(|step| current.offset(step))
                .filter(|&cell| grid.is_wall(cell))
                .collect::<SmallVec<[_; 4]>>();

            match unvisited_neighbors.choose(rng) {
                Some(&next) => {
                    grid.carve(next);
                    grid.carve(current.midpoint(next));
                    stack.push(next);
                }
                None => {
                    stack.pop();
                }
            }
        }
    }

    fn open_ends(grid: &mut Grid) {
        let (height, width) = grid.size();
        grid.set(ENTRANCE, Tile::Passage);
        if let Some(end) = exit(height, width) {
            grid.set(end, Tile::Passage);
        }
    }
}

impl GridGenerator for RecursiveBacktracker {
    fn generate(
        &self,
        height: usize,
        width: usize,
        rng: &mut Random,
    ) -> Result<Grid, GenerationError> {
        check_size(height, width)?;

        if height % 2 == 0 || width % 2 == 0 {
            log::debug!(
                "Even maze size {}x{}, border cells may stay unreachable",
                height,
                width
            );
        }

        let mut grid = Grid::new(height, width);
        let start = Cell(rng.gen_range(0..height), rng.gen_range(0..width));
        log::debug!("Carving {}x{} maze from {}", height, width, start);

        Self::carve_from(&mut grid, start, rng);
        Self::open_ends(&mut grid);

        Ok(grid)
    }
}

/// Generates a maze with the [`RecursiveBacktracker`].
pub fn generate_grid(
    height: usize,
    width: usize,
    rng: &mut Random,
) -> Result<Grid, GenerationError> {
    RecursiveBacktracker.generate(height, width, rng)
}
