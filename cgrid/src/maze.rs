use crate::{
    dims::Cell,
    generator::{
        check_size, exit, GenerationError, GridGenerator, Random, RecursiveBacktracker, ENTRANCE,
    },
    grid::Grid,
    solver::{Path, PathFinder},
};

/// A finished grid together with the cells it is entered and left through.
///
/// The grid can't be changed once it's wrapped, solving only ever borrows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
    start: Cell,
    end: Cell,
}

impl Maze {
    /// Generates a new maze using the [`RecursiveBacktracker`].
    pub fn generate(
        height: usize,
        width: usize,
        rng: &mut Random,
    ) -> Result<Self, GenerationError> {
        Self::generate_with(&RecursiveBacktracker, height, width, rng)
    }

    pub fn generate_with(
        generator: &dyn GridGenerator,
        height: usize,
        width: usize,
        rng: &mut Random,
    ) -> Result<Self, GenerationError> {
        let grid = generator.generate(height, width, rng)?;
        Self::from_grid(grid)
    }

    /// Wraps an existing grid, entrance and exit are left as they are.
    pub fn from_grid(grid: Grid) -> Result<Self, GenerationError> {
        let (height, width) = grid.size();
        check_size(height, width)?;
        let end = exit(height, width).ok_or(GenerationError::InvalidSize { height, width })?;

        Ok(Maze {
            grid,
            start: ENTRANCE,
            end,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn end(&self) -> Cell {
        self.end
    }

    /// `(height, width)`
    pub fn size(&self) -> (usize, usize) {
        self.grid.size()
    }

    /// Paths from the entrance to the exit, see [`PathFinder`] for which ones are found.
    pub fn solve(&self) -> Vec<Path> {
        // both ends are in bounds, checked when the maze was built
        PathFinder::new(&self.grid)
            .solve(self.start, self.end)
            .unwrap_or_default()
    }

    /// First path found, the one to show when only one is needed.
    pub fn solution(&self) -> Option<Path> {
        self.solve().into_iter().next()
    }
}
