//! Maze generation and path finding on grids of walls and passages.
//!
//! [`generator`] carves a maze into a fully walled [`Grid`], [`solver`] walks the finished grid
//! and collects paths between two cells. [`Maze`] ties both together with the fixed entrance at
//! `(0, 1)` and exit at `(height - 1, width - 2)`.

pub mod array;
pub mod dims;
pub mod generator;
pub mod grid;
pub mod maze;
pub mod solver;

pub use dims::{Cell, Dims};
pub use generator::{generate_grid, GenerationError, GridGenerator, Random, RecursiveBacktracker};
pub use grid::{Grid, ParseGridError, Tile};
pub use maze::Maze;
pub use solver::{find_paths, Path, PathFinder, SolveError};
