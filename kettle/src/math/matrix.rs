use super::common::FloatValueType;

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Transformations.html

/// A 4×4 matrix with row-major storage.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix4x4<T>
where
    T: FloatValueType,
{
    pub m: [[T; 4]; 4],
}

impl<T> Matrix4x4<T>
where
    T: FloatValueType,
{
    /// Creates a new `Matrix4x4` from rows.
    pub fn new(m: [[T; 4]; 4]) -> Self {
        Self { m }
    }

    /// Creates a new identity `Matrix4x4`.
    pub fn identity() -> Self {
        let zero = T::zero();
        let one = T::one();
        Self {
            m: [
                [one, zero, zero, zero],
                [zero, one, zero, zero],
                [zero, zero, one, zero],
                [zero, zero, zero, one],
            ],
        }
    }

    /// Creates a new `Matrix4x4` from a flat column-major array, the layout
    /// callers hand transforms over in.
    pub fn from_column_major(v: &[T; 16]) -> Self {
        let mut m = [[T::zero(); 4]; 4];
        for (row, row_values) in m.iter_mut().enumerate() {
            for (col, value) in row_values.iter_mut().enumerate() {
                *value = v[col * 4 + row];
            }
        }
        Self { m }
    }

    /// Returns the transpose of this `Matrix4x4`.
    pub fn transposed(&self) -> Self {
        let mut m = [[T::zero(); 4]; 4];
        for (row, row_values) in m.iter_mut().enumerate() {
            for (col, value) in row_values.iter_mut().enumerate() {
                *value = self.m[col][row];
            }
        }
        Self { m }
    }

    /// Checks if any element is NaN.
    pub fn has_nans(&self) -> bool {
        self.m.iter().flatten().any(|v| v.is_nan())
    }
}

/// A 3×3 matrix with row-major storage.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix3x3<T>
where
    T: FloatValueType,
{
    pub m: [[T; 3]; 3],
}

impl<T> Matrix3x3<T>
where
    T: FloatValueType,
{
    /// Creates a new `Matrix3x3` from rows.
    pub fn new(m: [[T; 3]; 3]) -> Self {
        Self { m }
    }

    /// Creates a new identity `Matrix3x3`.
    pub fn identity() -> Self {
        let zero = T::zero();
        let one = T::one();
        Self {
            m: [[one, zero, zero], [zero, one, zero], [zero, zero, one]],
        }
    }

    /// Creates a new `Matrix3x3` from a flat column-major array.
    pub fn from_column_major(v: &[T; 9]) -> Self {
        let mut m = [[T::zero(); 3]; 3];
        for (row, row_values) in m.iter_mut().enumerate() {
            for (col, value) in row_values.iter_mut().enumerate() {
                *value = v[col * 3 + row];
            }
        }
        Self { m }
    }

    /// Checks if any element is NaN.
    pub fn has_nans(&self) -> bool {
        self.m.iter().flatten().any(|v| v.is_nan())
    }
}
