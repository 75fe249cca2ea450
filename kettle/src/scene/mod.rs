mod desc;

pub use desc::{
    BackgroundDesc, CameraDesc, FovDesc, MaterialDesc, ObjectDesc, RenderDesc,
};

use std::time::Instant;

use crate::{
    bvh::{BoundingVolumeHierarchy, SplitMethod},
    error::InputError,
    hit::Hit,
    materials::Material,
    math::{Ray, Spectrum, Transform, Vec3},
    shapes::{Mesh, Triangle},
};

/// Light arriving from escaped rays.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Background {
    Constant(Spectrum),
    /// Vertical gradient blended on the ray direction's y component.
    Gradient { horizon: Spectrum, zenith: Spectrum },
}

impl Background {
    /// Evaluates the background radiance for direction `d`.
    pub fn radiance(&self, d: Vec3<f32>) -> Spectrum {
        match *self {
            Background::Constant(c) => c,
            Background::Gradient { horizon, zenith } => {
                let t = (d.normalized().y + 1.0) * 0.5;
                horizon.lerp(zenith, t)
            }
        }
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::Gradient {
            horizon: Spectrum::ones(),
            zenith: Spectrum::new(0.5, 0.7, 1.0),
        }
    }
}

/// One placement of the scene mesh.
pub struct Instance {
    pub transform: Transform,
    pub material: u32,
}

/// World-space triangles behind an acceleration structure, with the materials
/// and background light they reference.
pub struct Scene {
    pub triangles: Vec<Triangle>,
    pub materials: Vec<Material>,
    pub background: Background,
    bvh: BoundingVolumeHierarchy,
}

impl Scene {
    /// Builds a `Scene` by instancing `mesh` once per [Instance].
    ///
    /// All inputs are validated before any triangle is transformed so that a
    /// bad description never yields a partially built scene.
    pub fn new(
        mesh: &Mesh,
        instances: &[Instance],
        materials: Vec<Material>,
        background: Background,
        max_tris_in_leaf: usize,
        split_method: SplitMethod,
    ) -> Result<Self, InputError> {
        for (i, instance) in instances.iter().enumerate() {
            if instance.transform.has_nans() {
                return Err(InputError::NonFiniteTransform { object: i });
            }
            if (instance.material as usize) >= materials.len() {
                return Err(InputError::MaterialIndexOutOfRange {
                    index: instance.material,
                    count: materials.len(),
                });
            }
        }
        for (i, material) in materials.iter().enumerate() {
            validate_material(i, material)?;
        }

        let start = Instant::now();

        let mut triangles = Vec::with_capacity(mesh.triangle_count() * instances.len());
        for instance in instances {
            let t = &instance.transform;
            for (ps, ns) in mesh.points.chunks_exact(3).zip(mesh.normals.chunks_exact(3)) {
                let n = [t * ns[0], t * ns[1], t * ns[2]].map(|n| {
                    if n.len_sqr() > 0.0 {
                        n.normalized()
                    } else {
                        n
                    }
                });
                triangles.push(Triangle {
                    p: [t * ps[0], t * ps[1], t * ps[2]],
                    n,
                    material: instance.material,
                });
            }
        }

        let (bvh, triangles) =
            BoundingVolumeHierarchy::new(triangles, max_tris_in_leaf, split_method);

        log::info!(
            "Built scene with {} triangles in {:.2}ms",
            triangles.len(),
            start.elapsed().as_secs_f32() * 1e3
        );

        Ok(Self {
            triangles,
            materials,
            background,
            bvh,
        })
    }

    /// Finds the nearest [Hit] for `ray`, if any.
    pub fn intersect(&self, ray: Ray<f32>) -> Option<Hit> {
        self.bvh.intersect(&self.triangles, ray)
    }

    /// Checks if `ray` hits anything within its `t_max`.
    pub fn intersect_any(&self, ray: Ray<f32>) -> bool {
        self.bvh.intersect_any(&self.triangles, ray)
    }
}

fn validate_material(index: usize, material: &Material) -> Result<(), InputError> {
    let err = |reason: &str| {
        Err(InputError::MaterialParameter {
            index,
            reason: reason.into(),
        })
    };
    match *material {
        Material::Diffuse { albedo } | Material::Metal { albedo, .. }
            if !(albedo.r.is_finite() && albedo.g.is_finite() && albedo.b.is_finite()) =>
        {
            err("albedo must be finite")
        }
        Material::Metal { fuzz, .. } if !fuzz.is_finite() || fuzz < 0.0 => {
            err("fuzz must be finite and non-negative")
        }
        Material::Dielectric { refractive_index }
            if !refractive_index.is_finite() || refractive_index <= 0.0 =>
        {
            err("refractive index must be finite and positive")
        }
        _ => Ok(()),
    }
}
