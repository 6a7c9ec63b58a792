use num_traits::AsPrimitive;

use crate::element::{abs_diff, Element};
use crate::error::VectorError;

/// A dense one-dimensional container.
///
/// # Examples
///
/// ```
/// use linmat_core::Vector;
///
/// let v = Vector::from(vec![1, 2, 3]);
/// assert_eq!(v.size(), 3);
/// assert_eq!(v.at(1), Ok(&2));
/// assert!(v.at(3).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T> Vector<T> {
    /// Create an empty vector of size 0.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create a vector of `size` copies of `value`.
    pub fn from_size_val(size: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: vec![value; size],
        }
    }

    /// Create a vector by copying the given elements.
    pub fn from_slice(data: &[T]) -> Self
    where
        T: Clone,
    {
        Self {
            data: data.to_vec(),
        }
    }

    /// Number of elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Whether the vector has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Access the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::InvalidIndex`] if `index >= self.size()`.
    pub fn at(&self, index: usize) -> Result<&T, VectorError> {
        let size = self.size();
        self.data
            .get(index)
            .ok_or(VectorError::InvalidIndex { index, size })
    }

    /// Mutably access the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::InvalidIndex`] if `index >= self.size()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, VectorError> {
        let size = self.size();
        self.data
            .get_mut(index)
            .ok_or(VectorError::InvalidIndex { index, size })
    }

    /// The elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterate over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consume the vector and return its elements.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Indices of all elements whose distance to `val` is at most `tolerance`, in ascending
    /// order.
    pub fn find(&self, val: &T, tolerance: &T) -> Vec<usize>
    where
        T: Element + PartialOrd,
    {
        self.data
            .iter()
            .enumerate()
            .filter(|(_, v)| abs_diff(*v, val) <= *tolerance)
            .map(|(i, _)| i)
            .collect()
    }

    /// Copy out the elements starting at `origin`.
    ///
    /// The result holds at most `size` elements and never extends past the end of this
    /// vector; an `origin` past the end yields an empty vector.
    pub fn subvector(&self, origin: usize, size: usize) -> Vector<T>
    where
        T: Clone,
    {
        let size = size.min(self.size().saturating_sub(origin));
        Self {
            data: self.data.iter().skip(origin).take(size).cloned().collect(),
        }
    }

    /// Resize the vector; new elements take `fill`, extra elements are dropped.
    pub fn resize(&mut self, size: usize, fill: T)
    where
        T: Clone,
    {
        self.data.resize(size, fill);
    }

    /// Overwrite every element with `value`.
    pub fn fill_with(&mut self, value: T)
    where
        T: Clone,
    {
        self.data.fill(value);
    }

    /// Apply `f` to every element together with its index.
    pub fn for_each_entry<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut T, usize),
    {
        self.data
            .iter_mut()
            .enumerate()
            .for_each(|(i, v)| f(v, i));
    }

    /// Convert every element with an `as`-style numeric cast.
    pub fn cast<U>(&self) -> Vector<U>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        Vector {
            data: self.data.iter().map(|v| v.as_()).collect(),
        }
    }

    /// Inner product.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::IncompatibleVectorSizes`] if the sizes differ.
    pub fn dot(&self, other: &Vector<T>) -> Result<T, VectorError>
    where
        T: Element,
    {
        self.check_same_size("inner product", other)?;
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .fold(T::zero(), |acc, (a, b)| acc + a.clone() * b.clone()))
    }

    pub(crate) fn check_same_size(
        &self,
        op: &'static str,
        other: &Vector<T>,
    ) -> Result<(), VectorError> {
        if self.size() != other.size() {
            return Err(VectorError::IncompatibleVectorSizes {
                op,
                lhs: self.size(),
                rhs: other.size(),
            });
        }
        Ok(())
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, v) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}
