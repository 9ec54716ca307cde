use std::{fmt, str::FromStr};

use hashbrown::HashSet;
use smallvec::SmallVec;
use thiserror::Error;

use crate::{array::Array2D, dims::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    #[default]
    Wall,
    Passage,
}

impl Tile {
    pub fn is_passage(self) -> bool {
        self == Tile::Passage
    }

    pub fn is_wall(self) -> bool {
        self == Tile::Wall
    }

    pub fn to_char(self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Passage => ' ',
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseGridError {
    #[error("grid has no rows")]
    Empty,
    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unexpected character {ch:?} at ({row}, {col})")]
    InvalidChar { row: usize, col: usize, ch: char },
}

/// Rectangular board of walls and passages.
///
/// Dimensions never change after construction. Generators are expected to produce odd
/// dimensions, since carving moves two cells at a time; with even dimensions the last row or
/// column can stay walled in. Nothing here corrects that.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    tiles: Array2D<Tile>,
}

impl Grid {
    /// Grid full of walls.
    pub fn new(height: usize, width: usize) -> Self {
        Self::filled(height, width, Tile::Wall)
    }

    pub fn filled(height: usize, width: usize, tile: Tile) -> Self {
        Grid {
            tiles: Array2D::new(tile, height, width),
        }
    }

    /// `(height, width)`
    pub fn size(&self) -> (usize, usize) {
        self.tiles.size()
    }

    pub fn height(&self) -> usize {
        self.tiles.height()
    }

    pub fn width(&self) -> usize {
        self.tiles.width()
    }

    pub fn is_in_bounds(&self, pos: Cell) -> bool {
        pos.0 < self.height() && pos.1 < self.width()
    }

    pub fn get(&self, pos: Cell) -> Option<Tile> {
        self.tiles.get(pos).copied()
    }

    /// `false` for walls and for anything out of bounds.
    pub fn is_passage(&self, pos: Cell) -> bool {
        self.get(pos).is_some_and(Tile::is_passage)
    }

    pub fn is_wall(&self, pos: Cell) -> bool {
        self.get(pos).is_some_and(Tile::is_wall)
    }

    /// Sets a tile, returns `false` and does nothing when `pos` is out of bounds.
    pub fn set(&mut self, pos: Cell, tile: Tile) -> bool {
        match self.tiles.get_mut(pos) {
            Some(t) => {
                *t = tile;
                true
            }
            None => false,
        }
    }

    pub(crate) fn carve(&mut self, pos: Cell) {
        self.set(pos, Tile::Passage);
    }

    /// In-bounds cells one step away, ordered down, right, up, left.
    pub fn neighbors(&self, pos: Cell) -> SmallVec<[Cell; 4]> {
        Dims::ADJACENT
            .into_iter()
            .filter_map(|off| pos.offset(off))
            .filter(|&n| self.is_in_bounds(n))
            .collect()
    }

    /// Same as [`Grid::neighbors`], only passages.
    pub fn passage_neighbors(&self, pos: Cell) -> SmallVec<[Cell; 4]> {
        let mut around = self.neighbors(pos);
        around.retain(|n| self.is_passage(*n));
        around
    }

    pub fn iter_passages(&self) -> impl Iterator<Item = Cell> + '_ {
        self.tiles.iter_pos().filter(|&pos| self.tiles[pos].is_passage())
    }

    pub fn passage_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_passage()).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.rows()
    }

    /// All passages connected to `from` through other passages.
    ///
    /// Empty if `from` itself isn't a passage.
    pub fn reachable_from(&self, from: Cell) -> HashSet<Cell> {
        let mut seen = HashSet::new();
        if !self.is_passage(from) {
            return seen;
        }

        let mut stack = vec![from];
        seen.insert(from);
        while let Some(pos) = stack.pop() {
            for next in self.passage_neighbors(pos) {
                if seen.insert(next) {
                    stack.push(next);
                }
            }
        }

        seen
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Parses `#` as wall and `.` or space as passage, one row per line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        for (row, line) in s.lines().enumerate() {
            let tiles = line
                .chars()
                .enumerate()
                .map(|(col, ch)| match ch {
                    '#' => Ok(Tile::Wall),
                    '.' | ' ' => Ok(Tile::Passage),
                    ch => Err(ParseGridError::InvalidChar { row, col, ch }),
                })
                .collect::<Result<Vec<_>, _>>()?;

            if let Some(first) = rows.first().map(Vec::len) {
                if first != tiles.len() {
                    return Err(ParseGridError::Ragged {
                        row,
                        expected: first,
                        found: tiles.len(),
                    });
                }
            }
            rows.push(tiles);
        }

        if rows.first().map_or(true, Vec::is_empty) {
            return Err(ParseGridError::Empty);
        }

        let tiles = Array2D::from_rows(rows).ok_or(ParseGridError::Empty)?;
        Ok(Grid { tiles })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line = row.iter().map(|t| t.to_char()).collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "\
#.###
#...#
###.#";

    #[test]
    fn parse_and_query() {
        let grid: Grid = SMALL.parse().unwrap();
        assert_eq!(grid.size(), (3, 5));
        assert!(grid.is_passage(Cell(0, 1)));
        assert!(grid.is_wall(Cell(0, 0)));
        assert!(!grid.is_passage(Cell(5, 5)));
        assert!(!grid.is_wall(Cell(5, 5)));
        assert_eq!(grid.passage_count(), 5);
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<Grid>(), Err(ParseGridError::Empty));
        assert_eq!(
            "##\n#".parse::<Grid>(),
            Err(ParseGridError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            "#x".parse::<Grid>(),
            Err(ParseGridError::InvalidChar {
                row: 0,
                col: 1,
                ch: 'x'
            })
        );
    }

    #[test]
    fn display_uses_spaces_for_passages() {
        let grid: Grid = SMALL.parse().unwrap();
        assert_eq!(grid.to_string(), "# ###\n#   #\n### #\n");
        assert_eq!(grid.to_string().parse::<Grid>().unwrap(), grid);
    }

    #[test]
    fn neighbors_clip_to_bounds() {
        let grid = Grid::new(3, 3);
        assert_eq!(grid.neighbors(Cell(0, 0)).as_slice(), &[Cell(1, 0), Cell(0, 1)]);
        assert_eq!(
            grid.neighbors(Cell(1, 1)).as_slice(),
            &[Cell(2, 1), Cell(1, 2), Cell(0, 1), Cell(1, 0)]
        );
        assert_eq!(grid.neighbors(Cell(2, 2)).as_slice(), &[Cell(1, 2), Cell(2, 1)]);
    }

    #[test]
    fn set_out_of_bounds_is_noop() {
        let mut grid = Grid::new(2, 2);
        assert!(!grid.set(Cell(2, 0), Tile::Passage));
        assert!(grid.set(Cell(1, 1), Tile::Passage));
        assert_eq!(grid.passage_count(), 1);
    }

    #[test]
    fn flood_fill() {
        let grid: Grid = "\
.#.
.#.
...
##."
        .parse()
        .unwrap();

        let reached = grid.reachable_from(Cell(0, 0));
        assert_eq!(reached.len(), grid.passage_count());
        assert!(grid.reachable_from(Cell(0, 1)).is_empty());

        let walled: Grid = ".#.".parse().unwrap();
        assert_eq!(walled.reachable_from(Cell(0, 0)).len(), 1);
    }
}
