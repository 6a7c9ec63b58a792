#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use linmat_core as linalg;

pub use linmat_core::{
    Element, Matrix, MatrixEntry, MatrixError, MatrixIndices, MatrixSize, Mn, Replicate,
    RowEchelonForm, Vector, VectorError, Xy,
};
