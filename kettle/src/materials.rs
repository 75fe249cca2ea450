use crate::{
    hit::Hit,
    math::{Normal, Ray, Spectrum, Vec3},
    sampling::{coordinate_system, cosine_sample_hemisphere, uniform_sample_sphere, Sampler},
};

// Based on Ray Tracing in One Weekend.
// https://raytracing.github.io/books/RayTracingInOneWeekend.html#metal
// https://raytracing.github.io/books/RayTracingInOneWeekend.html#dielectrics

/// A scattered ray with the reflectance it carries.
pub struct ScatterSample {
    pub ray: Ray<f32>,
    pub attenuation: Spectrum,
}

/// Surface response at a hit point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Material {
    /// A lambertian surface scattering cosine-weighted around the normal.
    Diffuse { albedo: Spectrum },
    /// A mirror with optional fuzz perturbing the reflection.
    Metal { albedo: Spectrum, fuzz: f32 },
    /// Clear glass choosing reflection or refraction by Schlick's fresnel.
    Dielectric { refractive_index: f32 },
}

impl Material {
    /// Samples an outgoing ray at `hit`, or `None` if the surface absorbs.
    ///
    /// Scattered rays start at the hit point with unit direction and infinite
    /// extent; the intersection epsilon keeps them off the spawning surface.
    pub fn scatter(&self, ray: &Ray<f32>, hit: &Hit, sampler: &mut Sampler) -> Option<ScatterSample> {
        match *self {
            Material::Diffuse { albedo } => {
                let n = Vec3::from(hit.n);
                let (t0, t1) = coordinate_system(n);
                let local = cosine_sample_hemisphere(sampler.get_2d());
                let dir = (t0 * local.x + t1 * local.y + n * local.z).normalized();
                Some(ScatterSample {
                    ray: Ray::new(hit.p, dir, f32::INFINITY),
                    attenuation: albedo,
                })
            }
            Material::Metal { albedo, fuzz } => {
                let reflected = reflect(ray.d.normalized(), hit.n);
                let dir = reflected + uniform_sample_sphere(sampler.get_2d()) * fuzz;
                // Fuzz can push the direction into the surface
                if dir.dot_n(hit.n) <= 0.0 {
                    return None;
                }
                Some(ScatterSample {
                    ray: Ray::new(hit.p, dir.normalized(), f32::INFINITY),
                    attenuation: albedo,
                })
            }
            Material::Dielectric { refractive_index } => {
                let ratio = if hit.front_face {
                    1.0 / refractive_index
                } else {
                    refractive_index
                };

                let unit_d = ray.d.normalized();
                let cos_theta = (-unit_d).dot_n(hit.n).min(1.0);
                let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

                let total_internal_reflection = ratio * sin_theta > 1.0;
                let dir = if total_internal_reflection
                    || schlick(cos_theta, ratio) > sampler.get_1d()
                {
                    reflect(unit_d, hit.n)
                } else {
                    refract(unit_d, hit.n, cos_theta, ratio)
                };

                Some(ScatterSample {
                    ray: Ray::new(hit.p, dir.normalized(), f32::INFINITY),
                    attenuation: Spectrum::ones(),
                })
            }
        }
    }
}

fn reflect(v: Vec3<f32>, n: Normal<f32>) -> Vec3<f32> {
    v - Vec3::from(n) * (2.0 * v.dot_n(n))
}

fn refract(v: Vec3<f32>, n: Normal<f32>, cos_theta: f32, ratio: f32) -> Vec3<f32> {
    let out_perp = (v + Vec3::from(n) * cos_theta) * ratio;
    let out_parallel = Vec3::from(n) * -(1.0 - out_perp.len_sqr()).abs().sqrt();
    out_perp + out_parallel
}

fn schlick(cos_theta: f32, ratio: f32) -> f32 {
    let r0 = (1.0 - ratio) / (1.0 + ratio);
    let r0 = r0 * r0;
    r0 + (1.0 - r0) * (1.0 - cos_theta).powi(5)
}
