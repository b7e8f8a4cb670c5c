//! Dense 2D grid storage with a flat row-major backing array.

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// 2D grid stored in row-major order (the column index varies fastest).
///
/// Rows follow the first swept parameter and columns the second, so a grid
/// built from axes `x` and `y` has shape `(x.len(), y.len())`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Clone> Grid<T> {
    /// Create a new grid with the given shape, filled with `fill`.
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            data: vec![fill; rows * cols],
            rows,
            cols,
        }
    }
}

impl<T> Grid<T> {
    /// Reshape a flat row-major sequence into a grid.
    pub fn from_data(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(GridError::ShapeMismatch {
                rows,
                cols,
                samples: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Build a grid by evaluating `f(row, col)` for every cell.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                data.push(f(row, col));
            }
        }
        Self { data, rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Convert `(row, col)` to a flat index
    pub fn flat_index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.flat_index(row, col).map(|i| &self.data[i])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.flat_index(row, col).map(|i| &mut self.data[i])
    }

    /// Set a cell, returning `false` when out of bounds
    pub fn set(&mut self, row: usize, col: usize, value: T) -> bool {
        match self.get_mut(row, col) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Row-major view of the cells
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Flatten into the row-major backing vector
    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    pub fn row(&self, row: usize) -> Option<&[T]> {
        (row < self.rows).then(|| &self.data[row * self.cols..(row + 1) * self.cols])
    }

    /// Iterate over `((row, col), value)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> {
        let cols = self.cols.max(1);
        self.data
            .iter()
            .enumerate()
            .map(move |(i, v)| ((i / cols, i % cols), v))
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            data: self.data.iter().map(f).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Nested rows, as a JSON-friendly matrix
    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        (0..self.rows)
            .map(|r| self.data[r * self.cols..(r + 1) * self.cols].to_vec())
            .collect()
    }
}

impl<T: Clone> Grid<T> {
    /// Rotate 90 degrees counter-clockwise. Shape `(r, c)` becomes `(c, r)`.
    ///
    /// `out[i][j] = self[j][c - 1 - i]`, the same layout as numpy's `rot90`.
    pub fn rot90(&self) -> Grid<T> {
        let (rows, cols) = (self.cols, self.rows);
        Grid::from_fn(rows, cols, |i, j| {
            self.data[j * self.cols + (self.cols - 1 - i)].clone()
        })
    }

    /// Reverse the order of the rows
    pub fn flip_ud(&self) -> Grid<T> {
        Grid::from_fn(self.rows, self.cols, |i, j| {
            self.data[(self.rows - 1 - i) * self.cols + j].clone()
        })
    }

    pub fn transpose(&self) -> Grid<T> {
        Grid::from_fn(self.cols, self.rows, |i, j| {
            self.data[j * self.cols + i].clone()
        })
    }
}
