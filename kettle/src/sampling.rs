use rand::{distributions::Standard, Rng};
use rand_pcg::Pcg32;

use crate::math::{Point2, Vec2, Vec3};

/// A pseudorandom sample source for one worker.
///
/// Pcg has uncorrelated streams, so workers get reproducible, independent
/// sequences from a shared base seed and a per-tile stream index.
pub struct Sampler {
    rng: Pcg32,
}

impl Sampler {
    /// Creates a new `Sampler` on stream `stream` of `seed`.
    pub fn new(seed: u64, stream: u64) -> Self {
        Self {
            rng: Pcg32::new(seed, stream),
        }
    }

    /// Returns a uniform sample in `[0, 1)`.
    pub fn get_1d(&mut self) -> f32 {
        self.rng.sample(Standard)
    }

    /// Returns two uniform samples in `[0, 1)`.
    pub fn get_2d(&mut self) -> Point2<f32> {
        Point2::new(self.rng.sample(Standard), self.rng.sample(Standard))
    }
}

// Based on Physically Based Rendering 3rd ed.
// https://www.pbr-book.org/3ed-2018/Monte_Carlo_Integration/2D_Sampling_with_Multidimensional_Transformations

/// Maps a uniform square sample to a cosine-weighted direction around +Z.
pub fn cosine_sample_hemisphere(u: Point2<f32>) -> Vec3<f32> {
    let d = concentric_sample_disk(u);
    let z = (1.0 - d.x * d.x - d.y * d.y).max(0.0).sqrt();
    Vec3::new(d.x, d.y, z)
}

/// Maps a uniform square sample to the unit disk.
pub fn concentric_sample_disk(u: Point2<f32>) -> Point2<f32> {
    let offset = u * 2.0 - Vec2::new(1.0, 1.0);
    if offset == Point2::zeros() {
        return Point2::zeros();
    }

    let (theta, r) = if offset.x.abs() > offset.y.abs() {
        (
            std::f32::consts::FRAC_PI_4 * (offset.y / offset.x),
            offset.x,
        )
    } else {
        (
            std::f32::consts::FRAC_PI_2 - std::f32::consts::FRAC_PI_4 * (offset.x / offset.y),
            offset.y,
        )
    };

    Point2::new(theta.cos(), theta.sin()) * r
}

/// Maps a uniform square sample to the unit sphere surface.
pub fn uniform_sample_sphere(u: Point2<f32>) -> Vec3<f32> {
    let z = 1.0 - 2.0 * u.x;
    let r = (1.0 - z * z).max(0.0).sqrt();
    let phi = 2.0 * std::f32::consts::PI * u.y;
    Vec3::new(r * phi.cos(), r * phi.sin(), z)
}

/// Builds a right-handed orthonormal basis around a normalized vector.
pub fn coordinate_system(v: Vec3<f32>) -> (Vec3<f32>, Vec3<f32>) {
    let v2 = if v.x.abs() > v.y.abs() {
        Vec3::new(-v.z, 0.0, v.x) / (v.x * v.x + v.z * v.z).sqrt()
    } else {
        Vec3::new(0.0, v.z, -v.y) / (v.y * v.y + v.z * v.z).sqrt()
    };
    let v3 = v.cross(v2);
    (v2, v3)
}
