use std::ops::{Index, IndexMut};

/// A dense, square table with one row and one column per Node.
///
/// Stored in row-major order and indexed with `(row, column)`.
#[derive(Clone, Debug, PartialEq)]
pub struct AdjacencyMatrix<T> {
    cells: Vec<T>,
    len: usize,
}

impl<T: Copy + Default> AdjacencyMatrix<T> {
    /// Creates a `len × len` matrix filled with `T::default()`
    pub fn new(len: usize) -> Self {
        AdjacencyMatrix {
            cells: vec![T::default(); len * len],
            len,
        }
    }

    /// Creates a matrix by evaluating `f(row, column)` for every cell
    pub fn from_fn(len: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut cells = Vec::with_capacity(len * len);
        for row in 0..len {
            for col in 0..len {
                cells.push(f(row, col));
            }
        }
        AdjacencyMatrix { cells, len }
    }

    /// Copies the matrix into nested rows
    pub fn to_nested(&self) -> Vec<Vec<T>> {
        self.rows().map(|row| row.to_vec()).collect()
    }
}

impl<T> AdjacencyMatrix<T> {
    /// The number of rows (and columns)
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if the matrix has no Nodes
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The cells of a single row
    #[track_caller]
    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.len..(row + 1) * self.len]
    }

    /// Iterates over all rows in order
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.len).map(move |row| self.row(row))
    }

    #[cfg_attr(feature = "parallel", allow(dead_code))]
    pub(crate) fn rows_mut(&mut self) -> std::slice::ChunksMut<'_, T> {
        // chunks_mut(0) panics. The empty matrix has no cells, so any size yields no rows
        self.cells.chunks_mut(self.len.max(1))
    }

    #[cfg(feature = "parallel")]
    pub(crate) fn par_rows_mut(&mut self) -> rayon::slice::ChunksMut<'_, T>
    where
        T: Send,
    {
        use rayon::prelude::*;
        self.cells.par_chunks_mut(self.len.max(1))
    }
}

impl<T: PartialEq> AdjacencyMatrix<T> {
    /// Checks if `self[(i, j)] == self[(j, i)]` for every pair of Nodes
    pub fn is_symmetric(&self) -> bool {
        (0..self.len).all(|i| (i + 1..self.len).all(|j| self[(i, j)] == self[(j, i)]))
    }
}

// (row, column)
impl<T> Index<(usize, usize)> for AdjacencyMatrix<T> {
    type Output = T;
    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(col < self.len, "column {} out of bounds for {} Nodes", col, self.len);
        &self.cells[row * self.len + col]
    }
}

// (row, column)
impl<T> IndexMut<(usize, usize)> for AdjacencyMatrix<T> {
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(col < self.len, "column {} out of bounds for {} Nodes", col, self.len);
        &mut self.cells[row * self.len + col]
    }
}
