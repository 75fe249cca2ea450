use approx::{AbsDiffEq, RelativeEq};
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Sub};

use super::{
    common::ValueType,
    vector::{Vec2, Vec3},
};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Points.html

/// A two-dimensional point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point2<T>
where
    T: ValueType,
{
    /// The x component of the point.
    pub x: T,
    /// The y component of the point.
    pub y: T,
}

/// A three-dimensional point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point3<T>
where
    T: ValueType,
{
    /// The x component of the point.
    pub x: T,
    /// The y component of the point.
    pub y: T,
    /// The z component of the point.
    pub z: T,
}

macro_rules! impl_point {
    ( $( $point:ident, $vec:ident { $( $c:ident : $i:tt ),+ } )+ ) => {
        $(
            impl<T> $point<T>
            where
                T: ValueType,
            {
                /// Constructs a new point.
                ///
                /// Has a debug assert that checks for NaNs.
                #[inline]
                pub fn new($($c: T),+) -> Self {
                    let p = Self { $($c),+ };
                    debug_assert!(!p.has_nans());
                    p
                }

                /// Constructs a new point at the origin.
                #[inline]
                pub fn zeros() -> Self {
                    Self { $($c: T::zero()),+ }
                }

                /// Returns `true` if any component is NaN.
                #[inline]
                pub fn has_nans(&self) -> bool {
                    $(self.$c != self.$c)||+
                }

                /// Returns the component-wise minimum of the two points.
                #[inline]
                pub fn min(&self, other: Self) -> Self {
                    Self { $($c: self.$c.mini(other.$c)),+ }
                }

                /// Returns the component-wise maximum of the two points.
                #[inline]
                pub fn max(&self, other: Self) -> Self {
                    Self { $($c: self.$c.maxi(other.$c)),+ }
                }
            }

            // point - point = vector
            impl<T> Sub for $point<T>
            where
                T: ValueType,
            {
                type Output = $vec<T>;

                fn sub(self, other: Self) -> $vec<T> {
                    $vec::new($(self.$c - other.$c),+)
                }
            }

            impl<T> Add<$vec<T>> for $point<T>
            where
                T: ValueType,
            {
                type Output = Self;

                fn add(self, v: $vec<T>) -> Self {
                    Self::new($(self.$c + v.$c),+)
                }
            }

            impl<T> AddAssign<$vec<T>> for $point<T>
            where
                T: ValueType,
            {
                fn add_assign(&mut self, v: $vec<T>) {
                    $(self.$c += v.$c;)+
                }
            }

            impl<T> Sub<$vec<T>> for $point<T>
            where
                T: ValueType,
            {
                type Output = Self;

                fn sub(self, v: $vec<T>) -> Self {
                    Self::new($(self.$c - v.$c),+)
                }
            }

            // Scaling doesn't make mathematical sense for points but is
            // useful in weighted sums.
            impl<T> Mul<T> for $point<T>
            where
                T: ValueType,
            {
                type Output = Self;

                fn mul(self, s: T) -> Self {
                    Self::new($(self.$c * s),+)
                }
            }

            impl<T> Div<T> for $point<T>
            where
                T: ValueType,
            {
                type Output = Self;

                fn div(self, s: T) -> Self {
                    Self::new($(self.$c / s),+)
                }
            }

            impl<T> Index<usize> for $point<T>
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

            impl<T> IndexMut<usize> for $point<T>
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

            impl<T> AbsDiffEq for $point<T>
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

            impl<T> RelativeEq for $point<T>
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

impl_point!(
    Point2, Vec2 { x: 0, y: 1 }
    Point3, Vec3 { x: 0, y: 1, z: 2 }
);
