use std::ops;

use crate::dims::Cell;

/// Row-major 2D storage addressed by [`Cell`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Array2D<T> {
    buf: Vec<T>,
    height: usize,
    width: usize,
}

impl<T> Array2D<T> {
    /// `(height, width)`
    pub fn size(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn cell_to_idx(&self, pos: Cell) -> Option<usize> {
        let Cell(row, col) = pos;

        if row >= self.height || col >= self.width {
            return None;
        }

        Some(row * self.width + col)
    }

    pub fn idx_to_cell(&self, idx: usize) -> Option<Cell> {
        if idx >= self.buf.len() {
            return None;
        }

        Some(Cell(idx / self.width, idx % self.width))
    }

    pub fn get(&self, pos: Cell) -> Option<&T> {
        self.cell_to_idx(pos).and_then(|i| self.buf.get(i))
    }

    pub fn get_mut(&mut self, pos: Cell) -> Option<&mut T> {
        self.cell_to_idx(pos).and_then(|i| self.buf.get_mut(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    /// Positions in storage order, so row by row.
    pub fn iter_pos(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.buf.len()).filter_map(move |i| self.idx_to_cell(i))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.buf.chunks(self.width.max(1))
    }

    pub fn from_rows(rows: Vec<Vec<T>>) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map(Vec::len)?;
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }

        Some(Self {
            buf: rows.into_iter().flatten().collect(),
            height,
            width,
        })
    }
}

impl<T: Clone> Array2D<T> {
    pub fn new(item: T, height: usize, width: usize) -> Self {
        Self {
            buf: vec![item; width * height],
            height,
            width,
        }
    }
}

impl<T> ops::Index<Cell> for Array2D<T> {
    type Output = T;

    fn index(&self, index: Cell) -> &Self::Output {
        self.get(index).expect("Index out of bounds")
    }
}

impl<T> ops::IndexMut<Cell> for Array2D<T> {
    fn index_mut(&mut self, index: Cell) -> &mut Self::Output {
        self.get_mut(index).expect("Index out of bounds")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idx_roundtrip_is_row_major() {
        let arr = Array2D::new(0u8, 3, 4);
        assert_eq!(arr.cell_to_idx(Cell(0, 3)), Some(3));
        assert_eq!(arr.cell_to_idx(Cell(1, 0)), Some(4));
        assert_eq!(arr.idx_to_cell(11), Some(Cell(2, 3)));
        assert_eq!(arr.cell_to_idx(Cell(3, 0)), None);
        assert_eq!(arr.cell_to_idx(Cell(0, 4)), None);
        assert_eq!(arr.idx_to_cell(12), None);
    }

    #[test]
    fn from_rows_rejects_ragged() {
        assert!(Array2D::from_rows(vec![vec![1, 2], vec![3]]).is_none());
        assert!(Array2D::<u8>::from_rows(vec![]).is_none());

        let arr = Array2D::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();
        assert_eq!(arr.size(), (3, 2));
        assert_eq!(arr[Cell(2, 1)], 6);
        assert_eq!(arr.rows().count(), 3);
    }
}
