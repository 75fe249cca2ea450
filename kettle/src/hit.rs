use crate::math::{Normal, Point3};

/// Surface interaction returned by intersection queries.
///
/// `n` is the interpolated shading normal, oriented against the incoming ray.
/// `front_face` tells whether the outward-facing side of the surface was hit,
/// which materials use to pick refraction index ratios.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hit {
    pub t: f32,
    pub p: Point3<f32>,
    pub n: Normal<f32>,
    pub front_face: bool,
    pub material: u32,
}
