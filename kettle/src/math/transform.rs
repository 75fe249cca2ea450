use std::ops::Mul;

use super::{
    matrix::{Matrix3x3, Matrix4x4},
    normal::Normal,
    point::Point3,
};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transforms/Transforms.html

/// A model-view transform paired with the matching normal transform.
///
/// The normal matrix is supplied by the caller with inverse-transpose
/// semantics already applied; it is used verbatim. Transforms are applied
/// exactly once per mesh instance at scene build, never per ray.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transform {
    m: Matrix4x4<f32>,
    n: Matrix3x3<f32>,
}

impl Transform {
    /// Creates a new `Transform` from a model-view matrix and its normal matrix.
    pub fn new(m: Matrix4x4<f32>, n: Matrix3x3<f32>) -> Self {
        Self { m, n }
    }

    /// Creates a new identity `Transform`.
    pub fn identity() -> Self {
        Self {
            m: Matrix4x4::identity(),
            n: Matrix3x3::identity(),
        }
    }

    /// Returns a reference to the model-view [Matrix4x4].
    pub fn m(&self) -> &Matrix4x4<f32> {
        &self.m
    }

    /// Returns a reference to the normal [Matrix3x3].
    pub fn n(&self) -> &Matrix3x3<f32> {
        &self.n
    }

    /// Checks if either matrix contains NaNs.
    pub fn has_nans(&self) -> bool {
        self.m.has_nans() || self.n.has_nans()
    }
}

impl<'a> Mul<Point3<f32>> for &'a Transform {
    type Output = Point3<f32>;

    fn mul(self, p: Point3<f32>) -> Point3<f32> {
        let m = &self.m.m;
        let (x, y, z) = (p.x, p.y, p.z);
        let xp = m[0][0] * x + m[0][1] * y + m[0][2] * z + m[0][3];
        let yp = m[1][0] * x + m[1][1] * y + m[1][2] * z + m[1][3];
        let zp = m[2][0] * x + m[2][1] * y + m[2][2] * z + m[2][3];
        let wp = m[3][0] * x + m[3][1] * y + m[3][2] * z + m[3][3];
        if wp == 1.0 {
            Point3::new(xp, yp, zp)
        } else {
            Point3::new(xp, yp, zp) / wp
        }
    }
}

impl<'a> Mul<Normal<f32>> for &'a Transform {
    type Output = Normal<f32>;

    fn mul(self, n: Normal<f32>) -> Normal<f32> {
        let m = &self.n.m;
        let (x, y, z) = (n.x, n.y, n.z);
        Normal::new(
            m[0][0] * x + m[0][1] * y + m[0][2] * z,
            m[1][0] * x + m[1][1] * y + m[1][2] * z,
            m[2][0] * x + m[2][1] * y + m[2][2] * z,
        )
    }
}
