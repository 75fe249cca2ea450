use std::ops::{Index, IndexMut};

use super::{
    common::{FloatValueType, ValueType},
    point::{Point2, Point3},
    ray::Ray,
    vector::{Vec2, Vec3},
};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Bounding_Boxes.html

/// Two-dimensional bounds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds2<T>
where
    T: ValueType,
{
    /// The minimum extent of the bounds.
    pub p_min: Point2<T>,
    /// The maximum extent of the bounds.
    pub p_max: Point2<T>,
}

/// Three-dimensional bounds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds3<T>
where
    T: ValueType,
{
    /// The minimum extent of the bounds.
    pub p_min: Point3<T>,
    /// The maximum extent of the bounds.
    pub p_max: Point3<T>,
}

impl<T> Bounds2<T>
where
    T: ValueType,
{
    /// Creates a new `Bounds2` spanning the two points.
    pub fn new(p0: Point2<T>, p1: Point2<T>) -> Self {
        Self {
            p_min: p0.min(p1),
            p_max: p0.max(p1),
        }
    }

    /// Returns the [Vec2] from `p_min` to `p_max`.
    #[inline]
    pub fn diagonal(&self) -> Vec2<T> {
        self.p_max - self.p_min
    }

    /// Calculates the area of this `Bounds2`.
    #[inline]
    pub fn area(&self) -> T {
        let d = self.diagonal();
        d.x * d.y
    }
}

impl<T> Bounds3<T>
where
    T: ValueType,
{
    /// Creates a new `Bounds3` spanning the two points.
    pub fn new(p0: Point3<T>, p1: Point3<T>) -> Self {
        Self {
            p_min: p0.min(p1),
            p_max: p0.max(p1),
        }
    }

    /// Returns the [Vec3] from `p_min` to `p_max`.
    #[inline]
    pub fn diagonal(&self) -> Vec3<T> {
        self.p_max - self.p_min
    }

    /// Returns the union of this `Bounds3` and a [Point3].
    #[inline]
    pub fn union_p(&self, p: Point3<T>) -> Self {
        Self {
            p_min: self.p_min.min(p),
            p_max: self.p_max.max(p),
        }
    }

    /// Returns the union of the two bounds.
    #[inline]
    pub fn union_b(&self, other: Self) -> Self {
        Self {
            p_min: self.p_min.min(other.p_min),
            p_max: self.p_max.max(other.p_max),
        }
    }

    /// Finds the axis of the maximum extent of this `Bounds3`.
    #[inline]
    pub fn maximum_extent(&self) -> usize {
        let d = self.diagonal();
        if d.x > d.y && d.x > d.z {
            0
        } else if d.y > d.z {
            1
        } else {
            2
        }
    }
}

impl<T> Default for Bounds3<T>
where
    T: ValueType,
{
    /// An inverted empty `Bounds3` that unions correctly with points and bounds.
    fn default() -> Self {
        Self {
            p_min: Point3::new(T::max_value(), T::max_value(), T::max_value()),
            p_max: Point3::new(T::min_value(), T::min_value(), T::min_value()),
        }
    }
}

impl<T> Bounds3<T>
where
    T: FloatValueType,
{
    /// Checks if `ray` hits this `Bounds3`.
    ///
    /// `inv_dir` and `dir_is_neg` precomputed from `ray` are supplied as an
    /// optimization for traversal loops. Zero direction components yield
    /// infinite inverses per IEEE; the `0 * inf` NaNs that can follow are
    /// dropped by `maxi`/`mini` instead of propagating, and zero-width slabs
    /// produce a valid zero-width interval.
    pub fn intersect(&self, ray: Ray<T>, inv_dir: Vec3<T>, dir_is_neg: [bool; 3]) -> bool {
        let mut t0 = T::zero();
        let mut t1 = ray.t_max;

        for i in 0..3 {
            let near = self[dir_is_neg[i] as usize][i];
            let far = self[1 - (dir_is_neg[i] as usize)][i];
            let tn = (near - ray.o[i]) * inv_dir[i];
            let tf = (far - ray.o[i]) * inv_dir[i];
            t0 = t0.maxi(tn);
            t1 = t1.mini(tf);
            if t0 > t1 {
                return false;
            }
        }

        true
    }
}

macro_rules! impl_bounds_index {
    ( $( $bounds:ident, $point:ident )+ ) => {
        $(
            impl<T> Index<usize> for $bounds<T>
            where
                T: ValueType,
            {
                type Output = $point<T>;

                fn index(&self, i: usize) -> &$point<T> {
                    match i {
                        0 => &self.p_min,
                        1 => &self.p_max,
                        _ => panic!("bounds index {} out of bounds", i),
                    }
                }
            }

            impl<T> IndexMut<usize> for $bounds<T>
            where
                T: ValueType,
            {
                fn index_mut(&mut self, i: usize) -> &mut $point<T> {
                    match i {
                        0 => &mut self.p_min,
                        1 => &mut self.p_max,
                        _ => panic!("bounds index {} out of bounds", i),
                    }
                }
            }
        )+
    };
}

impl_bounds_index!(
    Bounds2, Point2
    Bounds3, Point3
);
