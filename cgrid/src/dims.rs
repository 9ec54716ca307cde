use std::fmt;

/// Signed offset between two cells, `(rows, columns)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dims(pub i32, pub i32);

/// Address of a single grid cell, `(row, column)`, both 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell(pub usize, pub usize);

impl Dims {
    pub const DOWN: Dims = Dims(1, 0);
    pub const RIGHT: Dims = Dims(0, 1);
    pub const UP: Dims = Dims(-1, 0);
    pub const LEFT: Dims = Dims(0, -1);

    /// Unit steps in the order the solver explores them.
    pub const ADJACENT: [Dims; 4] = [Dims::DOWN, Dims::RIGHT, Dims::UP, Dims::LEFT];

    /// Two-cell steps in the order the generator collects them.
    pub const CARVE_STEPS: [Dims; 4] = [Dims(-2, 0), Dims(2, 0), Dims(0, -2), Dims(0, 2)];

    pub fn abs_sum(self) -> i32 {
        self.0.abs() + self.1.abs()
    }
}

impl Cell {
    /// Moves the cell by `off`, `None` if either coordinate would become negative.
    ///
    /// The upper bound is not checked here, that is up to the grid.
    pub fn offset(self, off: Dims) -> Option<Cell> {
        let row = self.0.checked_add_signed(off.0 as isize)?;
        let col = self.1.checked_add_signed(off.1 as isize)?;
        Some(Cell(row, col))
    }

    /// Signed difference `other - self`.
    pub fn delta(self, other: Cell) -> Dims {
        Dims(
            other.0 as i32 - self.0 as i32,
            other.1 as i32 - self.1 as i32,
        )
    }

    /// Cell halfway between `self` and `other`. Exact only when both coordinates differ by an
    /// even amount, which is always the case for carving steps.
    pub fn midpoint(self, other: Cell) -> Cell {
        Cell((self.0 + other.0) / 2, (self.1 + other.1) / 2)
    }

    pub fn is_adjacent(self, other: Cell) -> bool {
        self.delta(other).abs_sum() == 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, Dims};

    #[test]
    fn offset_stops_at_zero() {
        assert_eq!(Cell(0, 3).offset(Dims::UP), None);
        assert_eq!(Cell(0, 0).offset(Dims::LEFT), None);
        assert_eq!(Cell(2, 3).offset(Dims(-2, 0)), Some(Cell(0, 3)));
        assert_eq!(Cell(2, 3).offset(Dims::RIGHT), Some(Cell(2, 4)));
    }

    #[test]
    fn midpoint_of_carve_step() {
        let from = Cell(3, 5);
        for step in Dims::CARVE_STEPS {
            let to = from.offset(step).unwrap();
            let mid = from.midpoint(to);
            assert_eq!(from.delta(mid), Dims(step.0 / 2, step.1 / 2));
            assert!(from.is_adjacent(mid));
            assert!(mid.is_adjacent(to));
        }
    }

    #[test]
    fn adjacent_order() {
        let c = Cell(1, 1);
        let around = Dims::ADJACENT
            .iter()
            .filter_map(|&d| c.offset(d))
            .collect::<Vec<_>>();
        assert_eq!(around, vec![Cell(2, 1), Cell(1, 2), Cell(0, 1), Cell(1, 0)]);
    }
}
