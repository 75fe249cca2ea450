use crate::{
    hit::Hit,
    math::{Bounds3, Normal, Point3, Ray, RAY_EPSILON},
};

// Möller-Trumbore from
// https://en.wikipedia.org/wiki/M%C3%B6ller%E2%80%93Trumbore_intersection_algorithm

const DETERMINANT_EPSILON: f32 = 1e-8;

/// A world-space triangle with per-vertex shading normals.
#[derive(Copy, Clone, Debug)]
pub struct Triangle {
    pub p: [Point3<f32>; 3],
    pub n: [Normal<f32>; 3],
    pub material: u32,
}

impl Triangle {
    /// Intersects `ray` with this `Triangle`, accepting hits on either side.
    ///
    /// Hits closer than [RAY_EPSILON] or beyond `ray.t_max` are rejected. The
    /// returned normal is interpolated from the vertex normals and flipped to
    /// oppose the ray, with `front_face` recording which side was hit.
    pub fn intersect(&self, ray: &Ray<f32>) -> Option<Hit> {
        let edge0 = self.p[1] - self.p[0];
        let edge1 = self.p[2] - self.p[0];

        let pv = ray.d.cross(edge1);
        let det = edge0.dot(pv);
        // Cull near-parallel rays, not backfaces
        if det.abs() < DETERMINANT_EPSILON {
            return None;
        }

        let inv_det = 1.0 / det;
        let tv = ray.o - self.p[0];
        let u = tv.dot(pv) * inv_det;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let qv = tv.cross(edge0);
        let v = ray.d.dot(qv) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = edge1.dot(qv) * inv_det;
        if t <= RAY_EPSILON || t > ray.t_max {
            return None;
        }

        let ns = (self.n[0] * (1.0 - u - v) + self.n[1] * u + self.n[2] * v).normalized();
        let front_face = ray.d.dot_n(ns) < 0.0;
        let n = if front_face { ns } else { -ns };

        Some(Hit {
            t,
            p: ray.point(t),
            n,
            front_face,
            material: self.material,
        })
    }

    /// Returns the axis-aligned bounding box of this `Triangle`.
    pub fn world_bound(&self) -> Bounds3<f32> {
        Bounds3::new(self.p[0], self.p[1]).union_p(self.p[2])
    }
}
