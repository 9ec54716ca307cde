use std::fmt::Write as _;

use cgrid::{Cell, Maze, Path, Tile};
use crossterm::style::Stylize as _;
use hashbrown::HashSet;

use crate::settings::ColorScheme;

const BLOCK: &str = "██";

/// What ends up drawn in a single cell, highest priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    End,
    Path,
    Wall,
    Empty,
}

impl Mark {
    fn plain(self) -> char {
        match self {
            Mark::End => 'o',
            Mark::Path => '.',
            Mark::Wall => '#',
            Mark::Empty => ' ',
        }
    }
}

/// Turns a maze and an optional path into terminal text.
#[derive(Debug, Clone)]
pub struct Renderer {
    scheme: ColorScheme,
    plain: bool,
}

impl Renderer {
    pub fn new(scheme: ColorScheme, plain: bool) -> Self {
        Self { scheme, plain }
    }

    pub fn plain() -> Self {
        Self::new(ColorScheme::default(), true)
    }

    fn mark(maze: &Maze, path: &HashSet<Cell>, pos: Cell, tile: Tile) -> Mark {
        if pos == maze.start() || pos == maze.end() {
            Mark::End
        } else if path.contains(&pos) {
            Mark::Path
        } else if tile.is_wall() {
            Mark::Wall
        } else {
            Mark::Empty
        }
    }

    /// One line per grid row. Plain output uses a character per cell, colored output a two
    /// column block so cells come out roughly square.
    pub fn render(&self, maze: &Maze, path: Option<&Path>) -> String {
        let path = path.into_iter().flatten().copied().collect::<HashSet<_>>();
        let mut out = String::new();

        for (row, tiles) in maze.grid().rows().enumerate() {
            for (col, &tile) in tiles.iter().enumerate() {
                let mark = Self::mark(maze, &path, Cell(row, col), tile);
                if self.plain {
                    out.push(mark.plain());
                    continue;
                }

                // writing into a String can't fail
                let _ = match mark {
                    Mark::End => write!(out, "{}", BLOCK.with(self.scheme.ends)),
                    Mark::Path => write!(out, "{}", "()".with(self.scheme.path).bold()),
                    Mark::Wall => write!(out, "{}", BLOCK.with(self.scheme.wall)),
                    Mark::Empty => write!(out, "  "),
                };
            }
            out.push('\n');
        }

        out
    }
}

/// Formats a path the way it's listed with `--all-paths`.
pub fn format_path(path: &Path) -> String {
    let cells = path.iter().map(Cell::to_string).collect::<Vec<_>>();
    format!("[{}]", cells.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgrid::Grid;

    fn maze() -> Maze {
        let grid: Grid = "\
#.###
#...#
###.#"
            .parse()
            .unwrap();
        Maze::from_grid(grid).unwrap()
    }

    #[test]
    fn plain_without_path() {
        let out = Renderer::plain().render(&maze(), None);
        assert_eq!(out, "#o###\n#   #\n###o#\n");
    }

    #[test]
    fn plain_with_path() {
        let maze = maze();
        let path = maze.solution().unwrap();
        let out = Renderer::plain().render(&maze, Some(&path));
        assert_eq!(out, "#o###\n#...#\n###o#\n");
    }

    #[test]
    fn colored_rows_keep_line_count() {
        let maze = maze();
        let renderer = Renderer::new(ColorScheme::default(), false);
        let out = renderer.render(&maze, maze.solve().first());
        assert_eq!(out.lines().count(), 3);
        assert!(out.contains(BLOCK));
        assert!(out.contains("()"));
    }

    #[test]
    fn path_listing() {
        let path = vec![Cell(0, 1), Cell(1, 1)];
        assert_eq!(format_path(&path), "[(0, 1), (1, 1)]");
    }
}
