//! Arithmetic operators for [`Matrix`] and [`Vector`].
//!
//! Operations between two containers check sizes and therefore return a `Result`. Scalar
//! operations and negation always succeed. Fallible compound assignment is exposed as
//! `try_add_assign`/`try_sub_assign`, each defined as the binary operation followed by
//! reassignment.

use std::ops::{Add, Div, DivAssign, Mul, MulAssign, Neg, Sub};

use crate::element::Element;
use crate::error::{MatrixError, VectorError};
use crate::index::MatrixSize;
use crate::matrix::Matrix;
use crate::vector::Vector;

fn zip_rows<T, F>(
    op: &'static str,
    lhs: &Matrix<T>,
    rhs: &Matrix<T>,
    f: F,
) -> Result<Matrix<T>, MatrixError>
where
    T: Element,
    F: Fn(T, T) -> T,
{
    if lhs.size() != rhs.size() {
        return Err(MatrixError::incompatible_sizes(op, lhs.size(), rhs.size()));
    }

    let data = lhs
        .iter_rows()
        .zip(rhs.iter_rows())
        .map(|(a, b)| {
            a.iter()
                .zip(b.iter())
                .map(|(a, b)| f(a.clone(), b.clone()))
                .collect()
        })
        .collect();

    Ok(Matrix::from_parts(lhs.size(), data))
}

impl<T: Element> Add<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn add(self, rhs: &Matrix<T>) -> Self::Output {
        zip_rows("entrywise addition", self, rhs, |a, b| a + b)
    }
}

impl<T: Element> Add for Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn add(self, rhs: Matrix<T>) -> Self::Output {
        &self + &rhs
    }
}

impl<T: Element> Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn sub(self, rhs: &Matrix<T>) -> Self::Output {
        zip_rows("entrywise subtraction", self, rhs, |a, b| a - b)
    }
}

impl<T: Element> Sub for Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn sub(self, rhs: Matrix<T>) -> Self::Output {
        &self - &rhs
    }
}

/// Matrix product.
impl<T: Element> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn mul(self, rhs: &Matrix<T>) -> Self::Output {
        let (lhs_size, rhs_size) = (self.size(), rhs.size());
        if lhs_size.n() != rhs_size.m() {
            return Err(MatrixError::incompatible_sizes(
                "matrix product",
                lhs_size,
                rhs_size,
            ));
        }

        let a = self.as_rows();
        let b = rhs.as_rows();
        let data = (0..lhs_size.m())
            .map(|i| {
                (0..rhs_size.n())
                    .map(|j| {
                        (0..lhs_size.n())
                            .fold(T::zero(), |acc, k| acc + a[i][k].clone() * b[k][j].clone())
                    })
                    .collect()
            })
            .collect();

        Ok(Matrix::from_parts(
            MatrixSize::from_mn(lhs_size.m(), rhs_size.n()),
            data,
        ))
    }
}

impl<T: Element> Mul for Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn mul(self, rhs: Matrix<T>) -> Self::Output {
        &self * &rhs
    }
}

/// Matrix-vector product. A size mismatch reports the vector as a single column.
impl<T: Element> Mul<&Vector<T>> for &Matrix<T> {
    type Output = Result<Vector<T>, MatrixError>;

    fn mul(self, rhs: &Vector<T>) -> Self::Output {
        if self.cols() != rhs.size() {
            return Err(MatrixError::incompatible_sizes(
                "matrix-vector product",
                self.size(),
                MatrixSize::new(1, rhs.size()),
            ));
        }

        Ok(self
            .iter_rows()
            .map(|row| {
                row.iter()
                    .zip(rhs.iter())
                    .fold(T::zero(), |acc, (a, b)| acc + a.clone() * b.clone())
            })
            .collect())
    }
}

impl<T: Element> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|v| v.clone() * rhs.clone())
    }
}

impl<T: Element> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(mut self, rhs: T) -> Self::Output {
        self.rows_mut()
            .flat_map(|row| row.iter_mut())
            .for_each(|v| *v = v.clone() * rhs.clone());
        self
    }
}

impl<T: Element> Div<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn div(self, rhs: T) -> Self::Output {
        self.map(|v| v.clone() / rhs.clone())
    }
}

impl<T: Element> Div<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn div(mut self, rhs: T) -> Self::Output {
        self.rows_mut()
            .flat_map(|row| row.iter_mut())
            .for_each(|v| *v = v.clone() / rhs.clone());
        self
    }
}

impl<T: Element + Neg<Output = T>> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Self::Output {
        self.map(|v| -v.clone())
    }
}

impl<T: Element + Neg<Output = T>> Neg for Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<T: Element> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = &*self * rhs;
    }
}

impl<T: Element> DivAssign<T> for Matrix<T> {
    fn div_assign(&mut self, rhs: T) {
        *self = &*self / rhs;
    }
}

impl<T: Element> Matrix<T> {
    /// Add `rhs` to this matrix, entry by entry.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IncompatibleSizes`] and leaves `self` unchanged if the sizes
    /// differ.
    pub fn try_add_assign(&mut self, rhs: &Matrix<T>) -> Result<(), MatrixError> {
        *self = (&*self + rhs)?;
        Ok(())
    }

    /// Subtract `rhs` from this matrix, entry by entry.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IncompatibleSizes`] and leaves `self` unchanged if the sizes
    /// differ.
    pub fn try_sub_assign(&mut self, rhs: &Matrix<T>) -> Result<(), MatrixError> {
        *self = (&*self - rhs)?;
        Ok(())
    }
}

fn zip_entries<T, F>(
    op: &'static str,
    lhs: &Vector<T>,
    rhs: &Vector<T>,
    f: F,
) -> Result<Vector<T>, VectorError>
where
    T: Element,
    F: Fn(T, T) -> T,
{
    lhs.check_same_size(op, rhs)?;
    Ok(lhs
        .iter()
        .zip(rhs.iter())
        .map(|(a, b)| f(a.clone(), b.clone()))
        .collect())
}

impl<T: Element> Add<&Vector<T>> for &Vector<T> {
    type Output = Result<Vector<T>, VectorError>;

    fn add(self, rhs: &Vector<T>) -> Self::Output {
        zip_entries("entrywise addition", self, rhs, |a, b| a + b)
    }
}

impl<T: Element> Add for Vector<T> {
    type Output = Result<Vector<T>, VectorError>;

    fn add(self, rhs: Vector<T>) -> Self::Output {
        &self + &rhs
    }
}

impl<T: Element> Sub<&Vector<T>> for &Vector<T> {
    type Output = Result<Vector<T>, VectorError>;

    fn sub(self, rhs: &Vector<T>) -> Self::Output {
        zip_entries("entrywise subtraction", self, rhs, |a, b| a - b)
    }
}

impl<T: Element> Sub for Vector<T> {
    type Output = Result<Vector<T>, VectorError>;

    fn sub(self, rhs: Vector<T>) -> Self::Output {
        &self - &rhs
    }
}

/// Inner product.
impl<T: Element> Mul<&Vector<T>> for &Vector<T> {
    type Output = Result<T, VectorError>;

    fn mul(self, rhs: &Vector<T>) -> Self::Output {
        self.dot(rhs)
    }
}

impl<T: Element> Mul<T> for &Vector<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.iter().map(|v| v.clone() * rhs.clone()).collect()
    }
}

impl<T: Element> Mul<T> for Vector<T> {
    type Output = Vector<T>;

    fn mul(mut self, rhs: T) -> Self::Output {
        self.as_mut_slice()
            .iter_mut()
            .for_each(|v| *v = v.clone() * rhs.clone());
        self
    }
}

impl<T: Element> Div<T> for &Vector<T> {
    type Output = Vector<T>;

    fn div(self, rhs: T) -> Self::Output {
        self.iter().map(|v| v.clone() / rhs.clone()).collect()
    }
}

impl<T: Element> Div<T> for Vector<T> {
    type Output = Vector<T>;

    fn div(mut self, rhs: T) -> Self::Output {
        self.as_mut_slice()
            .iter_mut()
            .for_each(|v| *v = v.clone() / rhs.clone());
        self
    }
}

impl<T: Element + Neg<Output = T>> Neg for &Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Self::Output {
        self.iter().map(|v| -v.clone()).collect()
    }
}

impl<T: Element + Neg<Output = T>> Neg for Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<T: Element> MulAssign<T> for Vector<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = &*self * rhs;
    }
}

impl<T: Element> DivAssign<T> for Vector<T> {
    fn div_assign(&mut self, rhs: T) {
        *self = &*self / rhs;
    }
}

impl<T: Element> Vector<T> {
    /// Add `rhs` to this vector, entry by entry.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::IncompatibleVectorSizes`] and leaves `self` unchanged if the
    /// sizes differ.
    pub fn try_add_assign(&mut self, rhs: &Vector<T>) -> Result<(), VectorError> {
        *self = (&*self + rhs)?;
        Ok(())
    }

    /// Subtract `rhs` from this vector, entry by entry.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::IncompatibleVectorSizes`] and leaves `self` unchanged if the
    /// sizes differ.
    pub fn try_sub_assign(&mut self, rhs: &Vector<T>) -> Result<(), VectorError> {
        *self = (&*self - rhs)?;
        Ok(())
    }
}

// Scalar on the left. Coherence only allows this for concrete scalar types.
macro_rules! impl_scalar_lhs_mul {
    ($($scalar:ty),+) => {
        $(
        impl Mul<&Matrix<$scalar>> for $scalar {
            type Output = Matrix<$scalar>;

            #[inline]
            fn mul(self, rhs: &Matrix<$scalar>) -> Self::Output {
                rhs.map(|v| self * *v)
            }
        }

        impl Mul<Matrix<$scalar>> for $scalar {
            type Output = Matrix<$scalar>;

            #[inline]
            fn mul(self, rhs: Matrix<$scalar>) -> Self::Output {
                self * &rhs
            }
        }

        impl Mul<&Vector<$scalar>> for $scalar {
            type Output = Vector<$scalar>;

            #[inline]
            fn mul(self, rhs: &Vector<$scalar>) -> Self::Output {
                rhs.iter().map(|v| self * *v).collect()
            }
        }

        impl Mul<Vector<$scalar>> for $scalar {
            type Output = Vector<$scalar>;

            #[inline]
            fn mul(self, rhs: Vector<$scalar>) -> Self::Output {
                self * &rhs
            }
        }
        )+
    };
}

impl_scalar_lhs_mul!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

#[cfg(test)]
mod tests {
    use crate::error::{MatrixError, VectorError};
    use crate::index::MatrixIndices;
    use crate::matrix::Matrix;
    use crate::vector::Vector;

    fn m(rows: Vec<Vec<i32>>) -> Result<Matrix<i32>, MatrixError> {
        Matrix::from_rows(rows)
    }

    #[test]
    fn add_sub() -> Result<(), MatrixError> {
        let a = m(vec![vec![1, 2], vec![3, 4]])?;
        let b = m(vec![vec![10, 20], vec![30, 40]])?;

        let sum = (&a + &b)?;
        assert_eq!(sum.as_rows(), &[vec![11, 22], vec![33, 44]]);
        assert_eq!((&sum - &b)?, a);
        assert_eq!((a.clone() + b.clone())?, sum);
        assert_eq!((b.clone() - a.clone())?.as_rows(), &[vec![9, 18], vec![27, 36]]);

        let c = m(vec![vec![1, 2, 3]])?;
        assert_eq!(
            &a + &c,
            Err(MatrixError::IncompatibleSizes {
                op: "entrywise addition",
                lhs: MatrixIndices::new(2, 2),
                rhs: MatrixIndices::new(3, 1),
            })
        );
        assert!(matches!(
            &a - &c,
            Err(MatrixError::IncompatibleSizes { .. })
        ));
        Ok(())
    }

    #[test]
    fn matrix_product() -> Result<(), MatrixError> {
        let a = m(vec![vec![1, 2], vec![3, 4]])?;
        let b = m(vec![vec![5, 6], vec![7, 8]])?;
        assert_eq!((&a * &b)?.as_rows(), &[vec![19, 22], vec![43, 50]]);

        let row = m(vec![vec![1, 2, 3]])?;
        let col = row.transposed();
        let outer = (&col * &row)?;
        assert_eq!(outer.size(), MatrixIndices::new(3, 3));
        assert_eq!(outer.as_rows()[2], vec![3, 6, 9]);
        assert_eq!((row.clone() * col)?.as_rows(), &[vec![14]]);

        assert_eq!(
            &a * &row,
            Err(MatrixError::IncompatibleSizes {
                op: "matrix product",
                lhs: MatrixIndices::new(2, 2),
                rhs: MatrixIndices::new(3, 1),
            })
        );
        Ok(())
    }

    #[test]
    fn matrix_vector_product() -> Result<(), MatrixError> {
        let a = m(vec![vec![1, 2, 3], vec![4, 5, 6]])?;
        let v = Vector::from(vec![1, 0, -1]);
        assert_eq!((&a * &v)?.as_slice(), &[-2, -2]);

        let w = Vector::from(vec![1, 1]);
        assert_eq!(
            &a * &w,
            Err(MatrixError::IncompatibleSizes {
                op: "matrix-vector product",
                lhs: MatrixIndices::new(3, 2),
                rhs: MatrixIndices::new(1, 2),
            })
        );
        Ok(())
    }

    #[test]
    fn scalar_and_negation() -> Result<(), MatrixError> {
        let a = m(vec![vec![2, 4], vec![6, 8]])?;
        assert_eq!((&a * 2).as_rows(), &[vec![4, 8], vec![12, 16]]);
        assert_eq!(2 * &a, &a * 2);
        assert_eq!((a.clone() / 2).as_rows(), &[vec![1, 2], vec![3, 4]]);
        assert_eq!((-&a).as_rows(), &[vec![-2, -4], vec![-6, -8]]);
        assert_eq!(-(-a.clone()), a);

        let f = Matrix::from_rows(vec![vec![1.0f64, -0.5]])?;
        assert_eq!((0.5 * f).as_rows(), &[vec![0.5, -0.25]]);
        Ok(())
    }

    #[test]
    fn compound_assignment() -> Result<(), MatrixError> {
        let mut a = m(vec![vec![1, 2], vec![3, 4]])?;
        let b = m(vec![vec![1, 1], vec![1, 1]])?;

        a.try_add_assign(&b)?;
        assert_eq!(a.as_rows(), &[vec![2, 3], vec![4, 5]]);
        a.try_sub_assign(&b)?;
        a *= 3;
        assert_eq!(a.as_rows(), &[vec![3, 6], vec![9, 12]]);
        a /= 3;
        assert_eq!(a.as_rows(), &[vec![1, 2], vec![3, 4]]);

        let before = a.clone();
        assert!(a.try_add_assign(&m(vec![vec![1]])?).is_err());
        assert_eq!(a, before);
        Ok(())
    }

    #[test]
    fn vector_ops() -> Result<(), VectorError> {
        let a = Vector::from(vec![1.0, 2.0, 3.0]);
        let b = Vector::from(vec![0.5, 0.5, 0.5]);

        assert_eq!((&a + &b)?.as_slice(), &[1.5, 2.5, 3.5]);
        assert_eq!(((&a - &b)? + b.clone())?, a);
        assert_eq!((&a * &b)?, 3.0);
        assert_eq!((&a * 2.0).as_slice(), &[2.0, 4.0, 6.0]);
        assert_eq!(2.0 * &a, a.clone() * 2.0);
        assert_eq!((a.clone() / 2.0).as_slice(), &[0.5, 1.0, 1.5]);
        assert_eq!((-&a).as_slice(), &[-1.0, -2.0, -3.0]);

        let short = Vector::from(vec![1.0]);
        assert_eq!(
            &a + &short,
            Err(VectorError::IncompatibleVectorSizes {
                op: "entrywise addition",
                lhs: 3,
                rhs: 1,
            })
        );
        assert!((&a * &short).is_err());
        Ok(())
    }

    #[test]
    fn vector_compound_assignment() -> Result<(), VectorError> {
        let mut v = Vector::from(vec![1, 2]);
        v.try_add_assign(&Vector::from(vec![1, 1]))?;
        assert_eq!(v.as_slice(), &[2, 3]);
        v.try_sub_assign(&Vector::from(vec![2, 2]))?;
        v *= 4;
        assert_eq!(v.as_slice(), &[0, 4]);
        v /= 2;
        assert_eq!(v.as_slice(), &[0, 2]);
        assert!(v.try_sub_assign(&Vector::new()).is_err());
        Ok(())
    }
}
