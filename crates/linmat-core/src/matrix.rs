use num_traits::{AsPrimitive, One};

use crate::element::{abs_diff, Element};
use crate::error::MatrixError;
use crate::index::{MatrixEntry, MatrixSize};

/// How a flat sequence is laid out by [`Matrix::from_replicated`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Replicate {
    /// Every row is a copy of the sequence.
    AsRows,
    /// Every column is a copy of the sequence.
    AsColumns,
}

/// A dense two-dimensional container stored as a sequence of rows.
///
/// The matrix has `size.x()` columns and `size.y()` rows. Every row has exactly
/// `size.x()` entries at all times; a `0x0` matrix has no rows.
///
/// Entries are addressed with a [`MatrixEntry`], where `x` is the column and `y` is the
/// row. Addressed access is bounds-checked and reports [`MatrixError::InvalidIndices`].
///
/// # Examples
///
/// ```
/// use linmat_core::{Matrix, MatrixError, MatrixIndices};
///
/// let mut m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]])?;
/// assert_eq!(m.size(), MatrixIndices::new(2, 2));
/// assert_eq!(*m.at((1, 0))?, 2);
///
/// *m.at_mut((0, 1))? = 7;
/// assert_eq!(m.to_string(), "1 2\n7 4");
///
/// assert_eq!(
///     m.at((2, 0)),
///     Err(MatrixError::InvalidIndices { pos: MatrixIndices::new(2, 0) })
/// );
/// # Ok::<(), MatrixError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    size: MatrixSize,
    data: Vec<Vec<T>>,
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Matrix<T> {
    /// Create an empty `0x0` matrix.
    pub fn new() -> Self {
        Self {
            size: MatrixSize::new(0, 0),
            data: Vec::new(),
        }
    }

    /// Create a matrix of the given size with every entry set to `value`.
    ///
    /// # Arguments
    ///
    /// * `size` - The number of columns (`x`) and rows (`y`).
    /// * `value` - The value of every entry.
    pub fn from_size_val(size: MatrixSize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            size,
            data: vec![vec![value; size.x()]; size.y()],
        }
    }

    /// Create a matrix by taking ownership of rectangular row data.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidVecOfRows`] if the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let size = validate_rows(&rows)?;
        Ok(Self { size, data: rows })
    }

    /// Create a matrix by copying rectangular row data.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidVecOfRows`] if the rows differ in length.
    pub fn from_rows_slice(rows: &[Vec<T>]) -> Result<Self, MatrixError>
    where
        T: Clone,
    {
        let size = validate_rows(rows)?;
        Ok(Self {
            size,
            data: rows.to_vec(),
        })
    }

    /// Create a matrix by replicating a flat sequence `count` times.
    ///
    /// With [`Replicate::AsRows`] the result has `count` rows equal to `values`. With
    /// [`Replicate::AsColumns`] it is the transpose of that: `count` columns equal to
    /// `values`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linmat_core::{Matrix, Replicate};
    ///
    /// let m = Matrix::from_replicated(&[1, 2, 3], 2, Replicate::AsColumns);
    /// assert_eq!(m.to_string(), "1 1\n2 2\n3 3");
    /// ```
    pub fn from_replicated(values: &[T], count: usize, layout: Replicate) -> Self
    where
        T: Clone,
    {
        let matrix = Self {
            size: MatrixSize::new(values.len(), count),
            data: vec![values.to_vec(); count],
        };

        match layout {
            Replicate::AsRows => matrix,
            Replicate::AsColumns => matrix.transposed(),
        }
    }

    /// The size of the matrix: `x` columns by `y` rows.
    #[inline]
    pub fn size(&self) -> MatrixSize {
        self.size
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.size.y()
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.size.x()
    }

    /// Whether the matrix has as many rows as columns.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.size.x() == self.size.y()
    }

    /// Whether the matrix has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.area() == 0
    }

    /// Access the entry at column `pos.x()`, row `pos.y()`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidIndices`] carrying `pos` if it lies outside the matrix.
    pub fn at(&self, pos: impl Into<MatrixEntry>) -> Result<&T, MatrixError> {
        let pos = self.check_entry(pos.into())?;
        Ok(&self.data[pos.y()][pos.x()])
    }

    /// Mutably access the entry at column `pos.x()`, row `pos.y()`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidIndices`] carrying `pos` if it lies outside the matrix.
    pub fn at_mut(&mut self, pos: impl Into<MatrixEntry>) -> Result<&mut T, MatrixError> {
        let pos = self.check_entry(pos.into())?;
        Ok(&mut self.data[pos.y()][pos.x()])
    }

    /// The entries of row `y`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidIndices`] if `y` is not a row of the matrix.
    pub fn row(&self, y: usize) -> Result<&[T], MatrixError> {
        self.check_row(y)?;
        Ok(&self.data[y])
    }

    /// Iterate over the rows from top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.data.iter().map(Vec::as_slice)
    }

    /// Borrow the row storage.
    pub fn as_rows(&self) -> &[Vec<T>] {
        &self.data
    }

    /// Consume the matrix and return its rows.
    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.data
    }

    /// Sum of the main diagonal; zero for a matrix without entries.
    pub fn trace(&self) -> T
    where
        T: Element,
    {
        let len = self.size.x().min(self.size.y());
        (0..len).fold(T::zero(), |acc, i| acc + self.data[i][i].clone())
    }

    /// Positions of all entries whose distance to `val` is at most `tolerance`.
    ///
    /// Entries are scanned column by column (`x` outer, `y` inner), which fixes the order
    /// of the result.
    pub fn find(&self, val: &T, tolerance: &T) -> Vec<MatrixEntry>
    where
        T: Element + PartialOrd,
    {
        let mut found = Vec::new();
        for x in 0..self.size.x() {
            for y in 0..self.size.y() {
                if abs_diff(&self.data[y][x], val) <= *tolerance {
                    found.push(MatrixEntry::new(x, y));
                }
            }
        }
        found
    }

    /// Copy out the block starting at `origin`.
    ///
    /// The requested `size` is clipped per axis so the block never extends past this
    /// matrix: the effective size is `min(size, self.size() - origin)`, where an origin past
    /// the edge gives zero along that axis.
    ///
    /// # Examples
    ///
    /// ```
    /// use linmat_core::{Matrix, MatrixIndices};
    ///
    /// let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    /// let sub = m.submatrix((1, 1), (5, 5));
    /// assert_eq!(sub.size(), MatrixIndices::new(1, 1));
    /// assert_eq!(sub.as_rows(), &[vec![4]]);
    /// ```
    pub fn submatrix(
        &self,
        origin: impl Into<MatrixEntry>,
        size: impl Into<MatrixSize>,
    ) -> Matrix<T>
    where
        T: Clone,
    {
        let (origin, size) = (origin.into(), size.into());
        let size = MatrixSize::new(
            size.x().min(self.size.x().saturating_sub(origin.x())),
            size.y().min(self.size.y().saturating_sub(origin.y())),
        );

        let data = self
            .data
            .iter()
            .skip(origin.y())
            .take(size.y())
            .map(|row| row.iter().skip(origin.x()).take(size.x()).cloned().collect())
            .collect();

        Self { size, data }
    }

    /// Return the transposed matrix, leaving this one untouched.
    pub fn transposed(&self) -> Matrix<T>
    where
        T: Clone,
    {
        let data = (0..self.size.x())
            .map(|x| self.data.iter().map(|row| row[x].clone()).collect())
            .collect();

        Self {
            size: self.size.flipped(),
            data,
        }
    }

    /// Transpose the matrix in place.
    pub fn transpose(&mut self)
    where
        T: Clone,
    {
        *self = self.transposed();
    }

    /// Grow or shrink the matrix to `size`.
    ///
    /// Existing entries inside the new bounds are kept, new entries take `fill` and entries
    /// outside the new bounds are dropped.
    pub fn resize(&mut self, size: impl Into<MatrixSize>, fill: T)
    where
        T: Clone,
    {
        let size = size.into();
        for row in self.data.iter_mut() {
            row.resize(size.x(), fill.clone());
        }
        self.data.resize(size.y(), vec![fill; size.x()]);
        self.size = size;
    }

    /// Overwrite every entry with `value`.
    pub fn fill_with(&mut self, value: T)
    where
        T: Clone,
    {
        for row in self.data.iter_mut() {
            row.fill(value.clone());
        }
    }

    /// Apply `f` to every entry together with its position, row by row.
    pub fn for_each_entry<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut T, MatrixEntry),
    {
        for (y, row) in self.data.iter_mut().enumerate() {
            for (x, entry) in row.iter_mut().enumerate() {
                f(entry, MatrixEntry::new(x, y));
            }
        }
    }

    /// Build a new matrix of the same size by applying `f` to every entry.
    pub fn map<U, F>(&self, mut f: F) -> Matrix<U>
    where
        F: FnMut(&T) -> U,
    {
        Matrix {
            size: self.size,
            data: self
                .data
                .iter()
                .map(|row| row.iter().map(&mut f).collect())
                .collect(),
        }
    }

    /// Convert every entry with an `as`-style numeric cast.
    ///
    /// # Examples
    ///
    /// ```
    /// use linmat_core::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![1u8, 2], vec![3, 4]]).unwrap();
    /// let m: Matrix<f64> = m.cast();
    /// assert_eq!(m.as_rows(), &[vec![1.0, 2.0], vec![3.0, 4.0]]);
    /// ```
    pub fn cast<U>(&self) -> Matrix<U>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        self.map(|v| v.as_())
    }

    /// Swap two rows.
    pub(crate) fn swap_rows(&mut self, r1: usize, r2: usize) -> Result<(), MatrixError> {
        self.check_row(r1)?;
        self.check_row(r2)?;
        self.data.swap(r1, r2);
        Ok(())
    }

    /// Multiply every entry of `row` by `factor`.
    pub(crate) fn multiply_row_by(&mut self, row: usize, factor: T) -> Result<(), MatrixError>
    where
        T: Element,
    {
        self.check_row(row)?;
        for entry in self.data[row].iter_mut() {
            *entry = entry.clone() * factor.clone();
        }
        Ok(())
    }

    /// Subtract row `subtrahend` from row `minuend`, entry by entry.
    pub(crate) fn subtract_rows(
        &mut self,
        minuend: usize,
        subtrahend: usize,
    ) -> Result<(), MatrixError>
    where
        T: Element,
    {
        self.check_row(minuend)?;
        self.check_row(subtrahend)?;

        let (target, source) = match minuend.cmp(&subtrahend) {
            std::cmp::Ordering::Equal => {
                self.data[minuend].fill(T::zero());
                return Ok(());
            }
            std::cmp::Ordering::Less => {
                let (head, tail) = self.data.split_at_mut(subtrahend);
                (&mut head[minuend], &tail[0])
            }
            std::cmp::Ordering::Greater => {
                let (head, tail) = self.data.split_at_mut(minuend);
                (&mut tail[0], &head[subtrahend])
            }
        };

        for (a, b) in target.iter_mut().zip(source.iter()) {
            *a = a.clone() - b.clone();
        }
        Ok(())
    }

    fn check_entry(&self, pos: MatrixEntry) -> Result<MatrixEntry, MatrixError> {
        if pos.x() >= self.size.x() || pos.y() >= self.size.y() {
            return Err(MatrixError::InvalidIndices { pos });
        }
        Ok(pos)
    }

    fn check_row(&self, row: usize) -> Result<(), MatrixError> {
        if row >= self.size.y() {
            return Err(MatrixError::invalid_row(row));
        }
        Ok(())
    }

    pub(crate) fn rows_mut(&mut self) -> std::slice::IterMut<'_, Vec<T>> {
        self.data.iter_mut()
    }

    pub(crate) fn from_parts(size: MatrixSize, data: Vec<Vec<T>>) -> Self {
        debug_assert_eq!(data.len(), size.y());
        debug_assert!(data.iter().all(|row| row.len() == size.x()));
        Self { size, data }
    }
}

impl<T: Element + One> Matrix<T> {
    /// Create an `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::from_size_val(MatrixSize::new(n, n), T::zero());
        for (i, row) in matrix.data.iter_mut().enumerate() {
            row[i] = T::one();
        }
        matrix
    }
}

/// Computes the size of rectangular row data, rejecting rows of differing length.
fn validate_rows<T>(rows: &[Vec<T>]) -> Result<MatrixSize, MatrixError> {
    let size = match rows.first() {
        Some(first) => MatrixSize::new(first.len(), rows.len()),
        None => MatrixSize::new(0, 0),
    };

    if let Some((y, row)) = rows
        .iter()
        .enumerate()
        .find(|(_, row)| row.len() != size.x())
    {
        return Err(MatrixError::InvalidVecOfRows(format!(
            "row {y} has {} entries but row 0 has {}",
            row.len(),
            size.x()
        )));
    }

    Ok(size)
}

impl<T> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (y, row) in self.data.iter().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for (x, v) in row.iter().enumerate() {
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{v}")?;
            }
        }
        Ok(())
    }
}
