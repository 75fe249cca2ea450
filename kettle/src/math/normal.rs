use approx::{AbsDiffEq, RelativeEq};
use std::ops::{Add, Mul, Neg};

use super::{common::FloatValueType, vector::Vec3};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Normals.html

/// A three-dimensional surface normal.
///
/// Note that a [Normal] is not necessarily normalized as it is merely a vector
/// perpendicular to a surface at a position on it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Normal<T>
where
    T: FloatValueType,
{
    /// The x component of the normal.
    pub x: T,
    /// The y component of the normal.
    pub y: T,
    /// The z component of the normal.
    pub z: T,
}

impl<T> Normal<T>
where
    T: FloatValueType,
{
    /// Constructs a new normal.
    ///
    /// Has a debug assert that checks for NaNs.
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        let n = Self { x, y, z };
        debug_assert!(!n.has_nans());
        n
    }

    /// Returns `true` if any component is NaN.
    #[inline]
    pub fn has_nans(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Calculates the dot product of this `Normal` and a [Vec3].
    #[inline]
    pub fn dot_v(&self, v: Vec3<T>) -> T {
        self.x * v.x + self.y * v.y + self.z * v.z
    }

    /// Calculates the dot product of the two normals.
    #[inline]
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the squared length of this `Normal`.
    #[inline]
    pub fn len_sqr(&self) -> T {
        self.dot(*self)
    }

    /// Returns the normalized version of this `Normal`.
    #[inline]
    pub fn normalized(&self) -> Self {
        debug_assert!(!self.has_nans());

        let inv_len = T::one() / self.len_sqr().sqrt();
        Self::new(self.x * inv_len, self.y * inv_len, self.z * inv_len)
    }
}

impl<T> Neg for Normal<T>
where
    T: FloatValueType,
{
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T> Add for Normal<T>
where
    T: FloatValueType,
{
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl<T> Mul<T> for Normal<T>
where
    T: FloatValueType,
{
    type Output = Self;

    fn mul(self, s: T) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }
}

impl<T> From<Vec3<T>> for Normal<T>
where
    T: FloatValueType,
{
    fn from(v: Vec3<T>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl<T> AbsDiffEq for Normal<T>
where
    T: FloatValueType + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        T::abs_diff_eq(&self.x, &other.x, epsilon)
            && T::abs_diff_eq(&self.y, &other.y, epsilon)
            && T::abs_diff_eq(&self.z, &other.z, epsilon)
    }
}

impl<T> RelativeEq for Normal<T>
where
    T: FloatValueType + RelativeEq<Epsilon = T>,
{
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        T::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && T::relative_eq(&self.y, &other.y, epsilon, max_relative)
            && T::relative_eq(&self.z, &other.z, epsilon, max_relative)
    }
}
