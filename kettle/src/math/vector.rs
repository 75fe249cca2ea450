use approx::{AbsDiffEq, RelativeEq};
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Neg, Sub, SubAssign};

use super::{
    common::{FloatValueType, ValueType},
    normal::Normal,
};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Vectors.html

/// A two-dimensional vector.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vec2<T>
where
    T: ValueType,
{
    /// The x component of the vector.
    pub x: T,
    /// The y component of the vector.
    pub y: T,
}

/// A three-dimensional vector.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vec3<T>
where
    T: ValueType,
{
    /// The x component of the vector.
    pub x: T,
    /// The y component of the vector.
    pub y: T,
    /// The z component of the vector.
    pub z: T,
}

macro_rules! impl_vec {
    ( $( $vec:ident { $( $c:ident : $i:tt ),+ } )+ ) => {
        $(
            impl<T> $vec<T>
            where
                T: ValueType,
            {
                /// Constructs a new vector.
                ///
                /// Has a debug assert that checks for NaNs.
                #[inline]
                pub fn new($($c: T),+) -> Self {
                    let v = Self { $($c),+ };
                    debug_assert!(!v.has_nans());
                    v
                }

                /// Constructs a new vector of 0s.
                #[inline]
                pub fn zeros() -> Self {
                    Self { $($c: T::zero()),+ }
                }

                /// Constructs a new vector of 1s.
                #[inline]
                pub fn ones() -> Self {
                    Self { $($c: T::one()),+ }
                }

                /// Returns `true` if any component is NaN.
                #[inline]
                pub fn has_nans(&self) -> bool {
                    // Not all T have is_nan()
                    $(self.$c != self.$c)||+
                }

                /// Returns the dot product of the two vectors.
                #[inline]
                pub fn dot(&self, other: Self) -> T {
                    debug_assert!(!self.has_nans());
                    debug_assert!(!other.has_nans());

                    T::zero() $(+ self.$c * other.$c)+
                }

                /// Returns the vector's squared length.
                #[inline]
                pub fn len_sqr(&self) -> T {
                    self.dot(*self)
                }

                /// Returns the component-wise minimum of the two vectors.
                #[inline]
                pub fn min(&self, other: Self) -> Self {
                    Self { $($c: self.$c.mini(other.$c)),+ }
                }

                /// Returns the component-wise maximum of the two vectors.
                #[inline]
                pub fn max(&self, other: Self) -> Self {
                    Self { $($c: self.$c.maxi(other.$c)),+ }
                }
            }

            impl<T> $vec<T>
            where
                T: FloatValueType,
            {
                /// Returns the vector's length.
                #[inline]
                pub fn len(&self) -> T {
                    self.len_sqr().sqrt()
                }

                /// Returns the normalized vector.
                #[inline]
                pub fn normalized(&self) -> Self {
                    debug_assert!(!self.has_nans());

                    *self / self.len()
                }
            }

            impl<T> Add for $vec<T>
            where
                T: ValueType,
            {
                type Output = Self;

                fn add(self, other: Self) -> Self {
                    Self::new($(self.$c + other.$c),+)
                }
            }

            impl<T> AddAssign for $vec<T>
            where
                T: ValueType,
            {
                fn add_assign(&mut self, other: Self) {
                    $(self.$c += other.$c;)+
                }
            }

            impl<T> Sub for $vec<T>
            where
                T: ValueType,
            {
                type Output = Self;

                fn sub(self, other: Self) -> Self {
                    Self::new($(self.$c - other.$c),+)
                }
            }

            impl<T> SubAssign for $vec<T>
            where
                T: ValueType,
            {
                fn sub_assign(&mut self, other: Self) {
                    $(self.$c -= other.$c;)+
                }
            }

            impl<T> Neg for $vec<T>
            where
                T: FloatValueType,
            {
                type Output = Self;

                fn neg(self) -> Self {
                    Self::new($(-self.$c),+)
                }
            }

            impl<T> Mul<T> for $vec<T>
            where
                T: ValueType,
            {
                type Output = Self;

                fn mul(self, s: T) -> Self {
                    Self::new($(self.$c * s),+)
                }
            }

            impl<T> Div<T> for $vec<T>
            where
                T: ValueType,
            {
                type Output = Self;

                fn div(self, s: T) -> Self {
                    Self::new($(self.$c / s),+)
                }
            }

            impl<T> Index<usize> for $vec<T>
            where
                T: ValueType,
            {
                type Output = T;

                fn index(&self, i: usize) -> &T {
                    match i {
                        $($i => &self.$c,)+
                        _ => panic!("component index {} out of bounds", i),
                    }
                }
            }

            impl<T> IndexMut<usize> for $vec<T>
            where
                T: ValueType,
            {
                fn index_mut(&mut self, i: usize) -> &mut T {
                    match i {
                        $($i => &mut self.$c,)+
                        _ => panic!("component index {} out of bounds", i),
                    }
                }
            }

            impl<T> AbsDiffEq for $vec<T>
            where
                T: ValueType + AbsDiffEq<Epsilon = T>,
            {
                type Epsilon = T;

                fn default_epsilon() -> T {
                    T::default_epsilon()
                }

                fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
                    $(T::abs_diff_eq(&self.$c, &other.$c, epsilon))&&+
                }
            }

            impl<T> RelativeEq for $vec<T>
            where
                T: ValueType + RelativeEq<Epsilon = T>,
            {
                fn default_max_relative() -> T {
                    T::default_max_relative()
                }

                fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
                    $(T::relative_eq(&self.$c, &other.$c, epsilon, max_relative))&&+
                }
            }
        )+
    };
}

impl_vec!(
    Vec2 { x: 0, y: 1 }
    Vec3 { x: 0, y: 1, z: 2 }
);

impl<T> Vec3<T>
where
    T: ValueType,
{
    /// Returns the cross product of the two vectors.
    #[inline]
    pub fn cross(&self, other: Self) -> Self {
        debug_assert!(!self.has_nans());
        debug_assert!(!other.has_nans());

        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }
}

impl<T> Vec3<T>
where
    T: FloatValueType,
{
    /// Returns the dot product of this vector and a [Normal].
    #[inline]
    pub fn dot_n(&self, n: Normal<T>) -> T {
        n.dot_v(*self)
    }
}

impl<T> From<Normal<T>> for Vec3<T>
where
    T: FloatValueType,
{
    fn from(n: Normal<T>) -> Self {
        Self::new(n.x, n.y, n.z)
    }
}
