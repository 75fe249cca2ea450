use crate::{
    math::{Ray, Spectrum},
    sampling::Sampler,
    scene::Scene,
};

/// Radiance estimate for one camera ray.
pub struct RadianceResult {
    pub li: Spectrum,
    /// Rays traced for the estimate, including the camera ray.
    pub rays: usize,
}

/// An iterative path tracer.
///
/// Paths terminate on miss (background light), absorption, or after
/// `max_depth` scattering events. Paths cut off at the depth limit
/// contribute nothing.
pub struct PathIntegrator {
    pub max_depth: u32,
}

impl PathIntegrator {
    pub fn li(&self, mut ray: Ray<f32>, scene: &Scene, sampler: &mut Sampler) -> RadianceResult {
        let mut throughput = Spectrum::ones();
        let mut rays = 1;

        for _ in 0..self.max_depth {
            let hit = match scene.intersect(ray) {
                Some(hit) => hit,
                None => {
                    return RadianceResult {
                        li: throughput * scene.background.radiance(ray.d),
                        rays,
                    };
                }
            };

            let material = &scene.materials[hit.material as usize];
            match material.scatter(&ray, &hit, sampler) {
                Some(sample) => {
                    throughput *= sample.attenuation;
                    ray = sample.ray;
                    rays += 1;
                }
                None => {
                    return RadianceResult {
                        li: Spectrum::zeros(),
                        rays,
                    };
                }
            }
        }

        RadianceResult {
            li: Spectrum::zeros(),
            rays,
        }
    }
}
