use serde::ser::SerializeStruct;
use serde::Deserialize;

use crate::{Matrix, MatrixIndices, Vector};

impl serde::Serialize for MatrixIndices {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("MatrixIndices", 2)?;
        state.serialize_field("x", &self.x())?;
        state.serialize_field("y", &self.y())?;
        state.end()
    }
}

impl<'de> serde::Deserialize<'de> for MatrixIndices {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct IndicesData {
            x: usize,
            y: usize,
        }

        let IndicesData { x, y } = IndicesData::deserialize(deserializer)?;
        Ok(MatrixIndices::new(x, y))
    }
}

impl<T> serde::Serialize for Matrix<T>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Matrix", 2)?;
        state.serialize_field("size", &self.size())?;
        state.serialize_field("rows", self.as_rows())?;
        state.end()
    }
}

/// Rows are validated again, and the stored size must agree with them.
impl<'de, T> serde::Deserialize<'de> for Matrix<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct MatrixData<T> {
            size: MatrixIndices,
            rows: Vec<Vec<T>>,
        }

        let MatrixData { size, rows } = MatrixData::deserialize(deserializer)?;

        // a size with zero rows still records its column count
        if rows.is_empty() && size.y() == 0 {
            return Ok(Matrix::from_parts(size, rows));
        }

        let matrix = Matrix::from_rows(rows).map_err(serde::de::Error::custom)?;
        if matrix.size() != size {
            return Err(serde::de::Error::custom(format!(
                "Invalid size: rows describe {} but size is {}",
                matrix.size(),
                size
            )));
        }

        Ok(matrix)
    }
}

impl<T> serde::Serialize for Vector<T>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(self.as_slice(), serializer)
    }
}

impl<'de, T> serde::Deserialize<'de> for Vector<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(Vector::from(Vec::<T>::deserialize(deserializer)?))
    }
}
