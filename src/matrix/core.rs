use crate::errors::MatrixError;
use crate::floats::FloatT;
use crate::interval::Interval;
use std::ops::{Index, IndexMut};

/// Dense matrix over a single contiguous row-major buffer.
///
/// Element `(i, j)` lives at linear offset `i * ncols + j`.  The
/// backing buffer is exclusively owned: slicing reads copy into a
/// fresh `Matrix`, slicing writes mutate this matrix's buffer in
/// place.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix<T = f64> {
    /// number of rows
    pub(crate) m: usize,
    /// number of columns
    pub(crate) n: usize,
    /// vector of data in row major format
    pub(crate) data: Vec<T>,
}

impl<T> Matrix<T>
where
    T: FloatT,
{
    /// New matrix of zeros.
    pub fn zeros(size: (usize, usize)) -> Self {
        let (m, n) = size;
        let data = vec![T::zero(); m * n];
        Self { m, n, data }
    }

    /// New matrix with every element set to `value`.
    pub fn filled(size: (usize, usize), value: T) -> Self {
        let (m, n) = size;
        let data = vec![value; m * n];
        Self { m, n, data }
    }

    /// Identity matrix of size `n`.
    pub fn identity(n: usize) -> Self {
        let mut mat = Matrix::zeros((n, n));
        mat.set_identity();
        mat
    }

    /// Rectangular identity of shape `size` with ones on the
    /// `offset`-th diagonal: 0 is the main diagonal, positive offsets
    /// select an upper diagonal, negative offsets a lower one.
    pub fn identity_with_size(size: (usize, usize), offset: isize) -> Self {
        let (m, n) = size;
        let mut mat = Matrix::zeros(size);
        for i in 0..m {
            let j = i as isize + offset;
            if (0..n as isize).contains(&j) {
                mat[(i, j as usize)] = T::one();
            }
        }
        mat
    }

    /// Overwrite `self` with the identity.  Requires a square matrix.
    pub fn set_identity(&mut self) {
        assert!(self.m == self.n);
        self.data.fill(T::zero());
        for i in 0..self.n {
            self[(i, i)] = T::one();
        }
    }

    /// Take ownership of a row-major buffer with the given shape.
    ///
    /// Fails with `DimensionMismatch` unless `rows * cols == data.len()`
    /// and both dimensions are nonzero.
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Result<Self, MatrixError> {
        if rows == 0 || cols == 0 || rows * cols != data.len() {
            return Err(MatrixError::DimensionMismatch);
        }
        Ok(Self {
            m: rows,
            n: cols,
            data,
        })
    }

    /// As [`from_vec`](Matrix::from_vec), with the column count
    /// inferred as `data.len() / rows`.
    pub fn from_vec_rows(data: Vec<T>, rows: usize) -> Result<Self, MatrixError> {
        if rows == 0 || data.len() % rows != 0 {
            return Err(MatrixError::DimensionMismatch);
        }
        let cols = data.len() / rows;
        Self::from_vec(data, rows, cols)
    }

    /// Unpack nested row sequences, validating rectangularity.
    pub fn from_nested(rows: &[Vec<T>]) -> Result<Self, MatrixError> {
        let m = rows.len();
        if m == 0 {
            return Err(MatrixError::DimensionMismatch);
        }
        let n = rows[0].len();
        if rows.iter().any(|r| r.len() != n) {
            return Err(MatrixError::DimensionMismatch);
        }
        let data = rows.iter().flatten().copied().collect();
        Self::from_vec(data, m, n)
    }

    /// Zero matrix of shape `size` with `diag` placed on the main
    /// diagonal.  Diagonal entries beyond `min(size)` are dropped.
    pub fn diagonal_with_size(diag: &[T], size: (usize, usize)) -> Self {
        let mut mat = Matrix::zeros(size);
        let total = diag.len().min(size.0).min(size.1);
        for (i, &v) in diag.iter().take(total).enumerate() {
            mat[(i, i)] = v;
        }
        mat
    }

    /// Square matrix with `diag` on the main diagonal.
    pub fn diagonal(diag: &[T]) -> Self {
        Self::diagonal_with_size(diag, (diag.len(), diag.len()))
    }

    /// Single-row matrix (`1 x len`).
    pub fn from_row(row: &[T]) -> Self {
        Self {
            m: 1,
            n: row.len(),
            data: row.to_vec(),
        }
    }

    /// Single-column matrix (`len x 1`).
    pub fn from_col(col: &[T]) -> Self {
        Self {
            m: col.len(),
            n: 1,
            data: col.to_vec(),
        }
    }

    /// number of rows
    pub fn nrows(&self) -> usize {
        self.m
    }
    /// number of columns
    pub fn ncols(&self) -> usize {
        self.n
    }
    /// `(nrows, ncols)`
    pub fn size(&self) -> (usize, usize) {
        (self.m, self.n)
    }
    /// true if `self.nrows() == self.ncols()`
    pub fn is_square(&self) -> bool {
        self.m == self.n
    }

    /// the backing row-major buffer
    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    pub(crate) fn index_linear(&self, idx: (usize, usize)) -> usize {
        idx.0 * self.n + idx.1
    }

    fn check_index(&self, row: usize, col: usize) -> Result<(), MatrixError> {
        if row < self.m && col < self.n {
            Ok(())
        } else {
            Err(MatrixError::IndexOutOfBounds)
        }
    }

    /// Bounds-checked element read.
    pub fn get(&self, row: usize, col: usize) -> Result<T, MatrixError> {
        self.check_index(row, col)?;
        Ok(self.data[self.index_linear((row, col))])
    }

    /// Bounds-checked element write.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), MatrixError> {
        self.check_index(row, col)?;
        let lidx = self.index_linear((row, col));
        self.data[lidx] = value;
        Ok(())
    }

    /// Contiguous slice view of one row.
    pub fn row_slice(&self, row: usize) -> &[T] {
        assert!(row < self.m);
        &self.data[(row * self.n)..(row + 1) * self.n]
    }

    pub fn row_slice_mut(&mut self, row: usize) -> &mut [T] {
        assert!(row < self.m);
        &mut self.data[(row * self.n)..(row + 1) * self.n]
    }

    /// Bounds-checked owned copy of one row.
    pub fn row(&self, row: usize) -> Result<Vec<T>, MatrixError> {
        if row >= self.m {
            return Err(MatrixError::IndexOutOfBounds);
        }
        Ok(self.row_slice(row).to_vec())
    }

    /// Replace one row; the replacement length must equal `ncols`.
    pub fn set_row(&mut self, row: usize, values: &[T]) -> Result<(), MatrixError> {
        if row >= self.m {
            return Err(MatrixError::IndexOutOfBounds);
        }
        if values.len() != self.n {
            return Err(MatrixError::DimensionMismatch);
        }
        self.row_slice_mut(row).copy_from_slice(values);
        Ok(())
    }

    /// Gathered copy of one column (stride `ncols` through the buffer).
    pub fn col(&self, col: usize) -> Result<Vec<T>, MatrixError> {
        if col >= self.n {
            return Err(MatrixError::IndexOutOfBounds);
        }
        Ok(self.data[col..].iter().step_by(self.n).copied().collect())
    }

    /// Replace one column; the replacement length must equal `nrows`.
    pub fn set_col(&mut self, col: usize, values: &[T]) -> Result<(), MatrixError> {
        if col >= self.n {
            return Err(MatrixError::IndexOutOfBounds);
        }
        if values.len() != self.m {
            return Err(MatrixError::DimensionMismatch);
        }
        for (i, &v) in values.iter().enumerate() {
            let lidx = self.index_linear((i, col));
            self.data[lidx] = v;
        }
        Ok(())
    }

    /// Copy the sub-block selected by a pair of [`Interval`]s into a
    /// fresh matrix.  Open interval bounds resolve to the matrix
    /// extents; resolved bounds outside them are `IndexOutOfBounds`.
    pub fn block(
        &self,
        rows: impl Into<Interval>,
        cols: impl Into<Interval>,
    ) -> Result<Matrix<T>, MatrixError> {
        let (r0, r1) = rows.into().resolve(self.m)?;
        let (c0, c1) = cols.into().resolve(self.n)?;

        let mut data = Vec::with_capacity((r1 - r0 + 1) * (c1 - c0 + 1));
        for row in r0..=r1 {
            data.extend_from_slice(&self.row_slice(row)[c0..=c1]);
        }
        Matrix::from_vec(data, r1 - r0 + 1, c1 - c0 + 1)
    }

    /// Overwrite the sub-block selected by a pair of [`Interval`]s with
    /// the rows of `src`, whose shape must equal the resolved block
    /// shape.
    pub fn set_block(
        &mut self,
        rows: impl Into<Interval>,
        cols: impl Into<Interval>,
        src: &Matrix<T>,
    ) -> Result<(), MatrixError> {
        let (r0, r1) = rows.into().resolve(self.m)?;
        let (c0, c1) = cols.into().resolve(self.n)?;

        if src.m != r1 - r0 + 1 || src.n != c1 - c0 + 1 {
            return Err(MatrixError::DimensionMismatch);
        }
        for (i, row) in (r0..=r1).enumerate() {
            self.row_slice_mut(row)[c0..=c1].copy_from_slice(src.row_slice(i));
        }
        Ok(())
    }

    /// Lazy, restartable iterator over rows in row-major order.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.data.chunks_exact(self.n)
    }
}

// `Matrix::from(&[[..], [..]])` builds from row literals; handy for
// writing matrices out in display order in tests and examples.
impl<T, const R: usize, const C: usize> From<&[[T; C]; R]> for Matrix<T>
where
    T: FloatT,
{
    fn from(rows: &[[T; C]; R]) -> Self {
        let data = rows.iter().flatten().copied().collect();
        Self {
            m: R,
            n: C,
            data,
        }
    }
}

impl<T> Index<(usize, usize)> for Matrix<T>
where
    T: FloatT,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        assert!(idx.0 < self.m && idx.1 < self.n);
        &self.data[self.index_linear(idx)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T>
where
    T: FloatT,
{
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        assert!(idx.0 < self.m && idx.1 < self.n);
        let lidx = self.index_linear(idx);
        &mut self.data[lidx]
    }
}

impl<T> std::fmt::Display for Matrix<T>
where
    T: FloatT,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, row) in self.rows().enumerate() {
            let contents = row
                .iter()
                .map(|v| format!("{v}"))
                .collect::<Vec<_>>()
                .join(" ");

            let line = match (i, self.m) {
                (0, 1) => format!("( {contents} )"),
                (0, _) => format!("⎛ {contents} ⎞"),
                (i, m) if i == m - 1 => format!("⎝ {contents} ⎠"),
                _ => format!("⎜ {contents} ⎥"),
            };
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
