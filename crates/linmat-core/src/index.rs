/// Cartesian-style coordinates: `x` is the column, `y` is the row.
///
/// # Examples
///
/// ```
/// use linmat_core::{MatrixIndices, Xy};
///
/// let pos = MatrixIndices::from(Xy { x: 2, y: 0 });
/// assert_eq!(pos.x(), 2);
/// assert_eq!(pos.m(), 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Xy {
    /// Column coordinate.
    pub x: usize,
    /// Row coordinate.
    pub y: usize,
}

/// Linear-algebra-style coordinates: `m` is the row, `n` is the column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Mn {
    /// Row coordinate.
    pub m: usize,
    /// Column coordinate.
    pub n: usize,
}

/// A pair of unsigned coordinates addressing a matrix entry or describing a matrix size.
///
/// The value can be read under two naming conventions that alias the same two fields:
///
/// * `(x, y)`: column, row.
/// * `(m, n)`: row, column.
///
/// `m` is always `y` and `n` is always `x`. There is a single storage, so both views can
/// never disagree.
///
/// No bounds are checked here. Validity is enforced by [`crate::Matrix`] at the point of use.
///
/// # Examples
///
/// ```
/// use linmat_core::{MatrixIndices, Mn};
///
/// let mut size = MatrixIndices::from(Mn { m: 2, n: 3 });
/// assert_eq!((size.x(), size.y()), (3, 2));
///
/// size.flip();
/// assert_eq!(size.mn(), Mn { m: 3, n: 2 });
/// assert_eq!(size.to_string(), "(2, 3)");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MatrixIndices {
    x: usize,
    y: usize,
}

/// A matrix size: `x` columns by `y` rows.
pub type MatrixSize = MatrixIndices;

/// The position of a single matrix entry: column `x`, row `y`.
pub type MatrixEntry = MatrixIndices;

impl MatrixIndices {
    /// Create a new value from Cartesian `(x, y)` coordinates.
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Create a new value from row/column `(m, n)` coordinates.
    #[inline]
    pub const fn from_mn(m: usize, n: usize) -> Self {
        Self { x: n, y: m }
    }

    /// The column coordinate.
    #[inline]
    pub fn x(&self) -> usize {
        self.x
    }

    /// The row coordinate.
    #[inline]
    pub fn y(&self) -> usize {
        self.y
    }

    /// The row coordinate. Same storage as [`MatrixIndices::y`].
    #[inline]
    pub fn m(&self) -> usize {
        self.y
    }

    /// The column coordinate. Same storage as [`MatrixIndices::x`].
    #[inline]
    pub fn n(&self) -> usize {
        self.x
    }

    /// Mutable access to the column coordinate.
    #[inline]
    pub fn x_mut(&mut self) -> &mut usize {
        &mut self.x
    }

    /// Mutable access to the row coordinate.
    #[inline]
    pub fn y_mut(&mut self) -> &mut usize {
        &mut self.y
    }

    /// Mutable access to the row coordinate, aliasing [`MatrixIndices::y_mut`].
    #[inline]
    pub fn m_mut(&mut self) -> &mut usize {
        &mut self.y
    }

    /// Mutable access to the column coordinate, aliasing [`MatrixIndices::x_mut`].
    #[inline]
    pub fn n_mut(&mut self) -> &mut usize {
        &mut self.x
    }

    /// The value under the `(x, y)` naming.
    pub fn xy(&self) -> Xy {
        Xy {
            x: self.x,
            y: self.y,
        }
    }

    /// The value under the `(m, n)` naming.
    pub fn mn(&self) -> Mn {
        Mn {
            m: self.y,
            n: self.x,
        }
    }

    /// Swap both components in place, turning a size into its transposed size.
    pub fn flip(&mut self) {
        std::mem::swap(&mut self.x, &mut self.y);
    }

    /// Return a copy with both components swapped.
    pub fn flipped(self) -> Self {
        Self {
            x: self.y,
            y: self.x,
        }
    }

    /// Number of cells covered when the value is read as a size.
    pub fn area(&self) -> usize {
        self.x * self.y
    }
}

impl std::fmt::Display for MatrixIndices {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<Xy> for MatrixIndices {
    fn from(xy: Xy) -> Self {
        Self::new(xy.x, xy.y)
    }
}

impl From<Mn> for MatrixIndices {
    fn from(mn: Mn) -> Self {
        Self::from_mn(mn.m, mn.n)
    }
}

/// Read as `[x, y]`.
impl From<[usize; 2]> for MatrixIndices {
    fn from(xy: [usize; 2]) -> Self {
        Self::new(xy[0], xy[1])
    }
}

/// Read as `(x, y)`.
impl From<(usize, usize)> for MatrixIndices {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl From<MatrixIndices> for Xy {
    fn from(indices: MatrixIndices) -> Self {
        indices.xy()
    }
}

impl From<MatrixIndices> for Mn {
    fn from(indices: MatrixIndices) -> Self {
        indices.mn()
    }
}

#[cfg(test)]
mod tests {
    use super::{MatrixIndices, Mn, Xy};

    #[test]
    fn aliases_share_storage() {
        let mut pos = MatrixIndices::new(4, 7);
        assert_eq!(pos.m(), pos.y());
        assert_eq!(pos.n(), pos.x());

        *pos.m_mut() = 1;
        assert_eq!(pos.y(), 1);
        *pos.n_mut() = 9;
        assert_eq!(pos.x(), 9);
        assert_eq!(pos.xy(), Xy { x: 9, y: 1 });
        assert_eq!(pos.mn(), Mn { m: 1, n: 9 });
    }

    #[test]
    fn from_mn_transposes_labels() {
        let size = MatrixIndices::from(Mn { m: 2, n: 5 });
        assert_eq!(size, MatrixIndices::new(5, 2));
        assert_eq!(MatrixIndices::from_mn(2, 5), size);
        assert_eq!(MatrixIndices::from([5, 2]), size);
        assert_eq!(MatrixIndices::from((5, 2)), size);
    }

    #[test]
    fn flip() {
        let mut size = MatrixIndices::new(3, 1);
        size.flip();
        assert_eq!(size, MatrixIndices::new(1, 3));
        assert_eq!(size.flipped(), MatrixIndices::new(3, 1));
        assert_ne!(size, size.flipped());
    }

    #[test]
    fn display() {
        assert_eq!(MatrixIndices::new(2, 0).to_string(), "(2, 0)");
        assert_eq!(MatrixIndices::from_mn(2, 0).to_string(), "(0, 2)");
    }
}
