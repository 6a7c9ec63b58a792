use num_traits::AsPrimitive;

use crate::error::MatrixError;
use crate::matrix::Matrix;

/// The result of a row-echelon reduction.
///
/// Every elimination step scales one row by a multiplier before subtracting the pivot row,
/// and every row swap flips the sign. `product_of_gauss_factors` accumulates both effects,
/// so the determinant of the source matrix is
/// `matrix.diagonal_product() / product_of_gauss_factors`.
#[derive(Clone, Debug, PartialEq)]
pub struct RowEchelonForm {
    /// The reduced matrix, same size as the source.
    pub matrix: Matrix<f64>,
    /// Product of all row multipliers and `-1.0` per row swap, seeded at `1.0`.
    pub product_of_gauss_factors: f64,
}

impl RowEchelonForm {
    /// Product of the main diagonal of the reduced matrix.
    pub fn diagonal_product(&self) -> f64 {
        let len = self.matrix.rows().min(self.matrix.cols());
        self.matrix
            .iter_rows()
            .take(len)
            .enumerate()
            .map(|(i, row)| row[i])
            .product()
    }
}

impl Matrix<f64> {
    /// Reduce a copy of the matrix to row-echelon form by Gaussian elimination.
    ///
    /// For each pivot column `x`:
    ///
    /// 1. Rows from `x` down whose entry in column `x` is exactly zero are swapped with the
    ///    first row below them holding a nonzero entry there. This is a "first nonzero"
    ///    search, not a largest-magnitude pivot search, and zero is compared exactly.
    /// 2. If the pivot `(x, x)` is nonzero, every lower row `y` with a nonzero entry in
    ///    column `x` is scaled by `pivot / entry` and the pivot row is subtracted from it.
    ///
    /// Pivot columns run up to `min(cols, rows)`, so the pivot is always addressable.
    ///
    /// # Errors
    ///
    /// Only the bounds checks of the row operations can fail, and they are propagated.
    ///
    /// # Examples
    ///
    /// ```
    /// use linmat_core::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![0.0, 1.0], vec![2.0, 3.0]]).unwrap();
    /// let echelon = m.row_echelon_form().unwrap();
    /// assert_eq!(echelon.matrix.as_rows(), &[vec![2.0, 3.0], vec![0.0, 1.0]]);
    /// assert_eq!(echelon.product_of_gauss_factors, -1.0);
    /// ```
    pub fn row_echelon_form(&self) -> Result<RowEchelonForm, MatrixError> {
        let mut matrix = self.clone();
        let mut product_of_gauss_factors = 1.0;

        let size = matrix.size();
        log::debug!("row echelon reduction of a {}x{} matrix", size.m(), size.n());

        for x in 0..size.x().min(size.y()) {
            // move rows with a zero in column x below the first nonzero one
            for y in x..size.y() {
                if *matrix.at((x, y))? != 0.0 {
                    continue;
                }
                for n in y + 1..size.y() {
                    if *matrix.at((x, n))? != 0.0 {
                        matrix.swap_rows(y, n)?;
                        product_of_gauss_factors = -product_of_gauss_factors;
                        log::trace!("column {x}: swapped rows {y} and {n}");
                        break;
                    }
                }
            }

            let pivot = *matrix.at((x, x))?;
            if pivot == 0.0 {
                continue;
            }

            for y in x + 1..size.y() {
                let entry = *matrix.at((x, y))?;
                if entry == 0.0 {
                    continue;
                }
                let multiplier = pivot / entry;
                matrix.multiply_row_by(y, multiplier)?;
                matrix.subtract_rows(y, x)?;
                product_of_gauss_factors *= multiplier;
                log::trace!("column {x}: eliminated row {y} with multiplier {multiplier}");
            }
        }

        log::debug!("row echelon reduction done, product of factors {product_of_gauss_factors}");

        Ok(RowEchelonForm {
            matrix,
            product_of_gauss_factors,
        })
    }
}

impl<T> Matrix<T> {
    /// Compute the determinant in `f64`.
    ///
    /// The matrix is cast to `f64`, reduced with [`Matrix::row_echelon_form`], and the
    /// product of the reduced diagonal is divided by the product of the elimination factors.
    /// Non-square and `0x0` matrices have determinant `0.0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linmat_core::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![0, 1], vec![1, 0]]).unwrap();
    /// assert_eq!(m.determinant().unwrap(), -1.0);
    /// ```
    pub fn determinant(&self) -> Result<f64, MatrixError>
    where
        T: AsPrimitive<f64>,
    {
        if !self.is_square() || self.cols() == 0 {
            return Ok(0.0);
        }

        let echelon = self.cast::<f64>().row_echelon_form()?;
        Ok(echelon.diagonal_product() / echelon.product_of_gauss_factors)
    }

    /// Compute the determinant and cast it back to the element type.
    ///
    /// For integer element types the `f64` result is rounded to the nearest integer before
    /// the cast.
    ///
    /// # Examples
    ///
    /// ```
    /// use linmat_core::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![6, 1], vec![7, 3]]).unwrap();
    /// assert_eq!(m.det().unwrap(), 11);
    /// ```
    pub fn det(&self) -> Result<T, MatrixError>
    where
        T: AsPrimitive<f64>,
        f64: AsPrimitive<T>,
    {
        let det = self.determinant()?;

        // an integer type truncates one half to zero
        let half: T = 0.5f64.as_();
        let half: f64 = half.as_();
        if half == 0.0 {
            return Ok(det.round().as_());
        }

        Ok(det.as_())
    }
}
