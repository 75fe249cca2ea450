use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{
    camera::{CameraParameters, FoV},
    error::{Error, InputError},
    film::FilmSettings,
    materials::Material,
    math::{Matrix3x3, Matrix4x4, Point3, Spectrum, Transform, Vec2, Vec3},
    scene::{Background, Instance},
};

/// A render description parsed from YAML.
///
/// Flat matrices are column-major, the layout GL-style pipelines hand out.
#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct RenderDesc {
    pub samples_per_pixel: u32,
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,
    #[serde(default)]
    pub seed: u64,
    pub resolution: [u16; 2],
    #[serde(default = "default_tile_dim")]
    pub tile_dim: u16,
    pub camera: CameraDesc,
    #[serde(default)]
    pub background: BackgroundDesc,
    pub mesh: PathBuf,
    pub materials: Vec<MaterialDesc>,
    pub objects: Vec<ObjectDesc>,
}

fn default_max_depth() -> u32 {
    50
}

fn default_tile_dim() -> u16 {
    16
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct CameraDesc {
    pub position: [f32; 3],
    pub target: [f32; 3],
    pub up: [f32; 3],
    pub fov: FovDesc,
}

#[derive(Deserialize, Debug, Copy, Clone)]
#[serde(rename_all = "lowercase")]
pub enum FovDesc {
    X(f32),
    Y(f32),
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundDesc {
    Constant { color: [f32; 3] },
    Gradient { horizon: [f32; 3], zenith: [f32; 3] },
}

impl Default for BackgroundDesc {
    fn default() -> Self {
        Self::Gradient {
            horizon: [1.0, 1.0, 1.0],
            zenith: [0.5, 0.7, 1.0],
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MaterialDesc {
    Diffuse { albedo: [f32; 3] },
    Metal { albedo: [f32; 3], fuzz: f32 },
    Dielectric { refractive_index: f32 },
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct ObjectDesc {
    /// Column-major 4x4 model-view matrix, 16 values.
    pub model_view: Vec<f32>,
    /// Column-major 3x3 normal matrix, 9 values.
    pub normal_matrix: Vec<f32>,
    pub material: u32,
}

impl RenderDesc {
    /// Loads and validates a `RenderDesc` from the YAML file at `path`.
    ///
    /// A relative mesh path is resolved against the description's directory.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path)?;
        let mut desc: Self = serde_yaml::from_str(&text)?;
        desc.validate()?;

        if desc.mesh.is_relative() {
            if let Some(dir) = path.parent() {
                desc.mesh = dir.join(&desc.mesh);
            }
        }

        Ok(desc)
    }

    /// Checks every field against the renderer's requirements.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.samples_per_pixel == 0 {
            return Err(InputError::NonPositiveSampleCount);
        }
        if self.max_depth == 0 {
            return Err(InputError::NonPositiveMaxDepth);
        }
        if self.resolution[0] == 0 || self.resolution[1] == 0 {
            return Err(InputError::ZeroResolution);
        }
        if self.tile_dim == 0 {
            return Err(InputError::ZeroTileDim);
        }

        self.validate_camera()?;

        for (i, object) in self.objects.iter().enumerate() {
            if object.model_view.len() != 16 {
                return Err(InputError::MatrixDimension {
                    object: i,
                    expected: 16,
                    got: object.model_view.len(),
                });
            }
            if object.normal_matrix.len() != 9 {
                return Err(InputError::MatrixDimension {
                    object: i,
                    expected: 9,
                    got: object.normal_matrix.len(),
                });
            }
            let finite = object
                .model_view
                .iter()
                .chain(object.normal_matrix.iter())
                .all(|v| v.is_finite());
            if !finite {
                return Err(InputError::NonFiniteTransform { object: i });
            }
            if (object.material as usize) >= self.materials.len() {
                return Err(InputError::MaterialIndexOutOfRange {
                    index: object.material,
                    count: self.materials.len(),
                });
            }
        }

        for (i, material) in self.materials.iter().enumerate() {
            let err = |reason: &str| {
                Err(InputError::MaterialParameter {
                    index: i,
                    reason: reason.into(),
                })
            };
            match *material {
                MaterialDesc::Diffuse { albedo } | MaterialDesc::Metal { albedo, .. }
                    if !albedo.iter().all(|c| c.is_finite()) =>
                {
                    return err("albedo must be finite");
                }
                MaterialDesc::Metal { fuzz, .. } if !fuzz.is_finite() || fuzz < 0.0 => {
                    return err("fuzz must be finite and non-negative");
                }
                MaterialDesc::Dielectric { refractive_index }
                    if !refractive_index.is_finite() || refractive_index <= 0.0 =>
                {
                    return err("refractive index must be finite and positive");
                }
                _ => {}
            }
        }

        Ok(())
    }

    fn validate_camera(&self) -> Result<(), InputError> {
        let c = &self.camera;
        let finite = c
            .position
            .iter()
            .chain(c.target.iter())
            .chain(c.up.iter())
            .all(|v| v.is_finite());
        let fov_ok = match c.fov {
            FovDesc::X(angle) | FovDesc::Y(angle) => angle.is_finite() && 0.0 < angle && angle < 180.0,
        };
        if !finite || !fov_ok {
            return Err(InputError::DegenerateCamera);
        }

        let position = vec3(c.position);
        let target = vec3(c.target);
        let up = vec3(c.up);
        let view = position - target;
        if view.len_sqr() == 0.0 || up.cross(view).len_sqr() == 0.0 {
            return Err(InputError::DegenerateCamera);
        }

        Ok(())
    }

    pub fn camera_parameters(&self) -> CameraParameters {
        let c = &self.camera;
        CameraParameters {
            position: point3(c.position),
            target: point3(c.target),
            up: vec3(c.up),
            fov: match c.fov {
                FovDesc::X(angle) => FoV::X(angle),
                FovDesc::Y(angle) => FoV::Y(angle),
            },
        }
    }

    pub fn film_settings(&self) -> FilmSettings {
        FilmSettings {
            res: Vec2::new(self.resolution[0], self.resolution[1]),
            tile_dim: self.tile_dim,
        }
    }

    pub fn background(&self) -> Background {
        match self.background {
            BackgroundDesc::Constant { color } => Background::Constant(spectrum(color)),
            BackgroundDesc::Gradient { horizon, zenith } => Background::Gradient {
                horizon: spectrum(horizon),
                zenith: spectrum(zenith),
            },
        }
    }

    pub fn materials(&self) -> Vec<Material> {
        self.materials
            .iter()
            .map(|m| match *m {
                MaterialDesc::Diffuse { albedo } => Material::Diffuse {
                    albedo: spectrum(albedo),
                },
                MaterialDesc::Metal { albedo, fuzz } => Material::Metal {
                    albedo: spectrum(albedo),
                    fuzz,
                },
                MaterialDesc::Dielectric { refractive_index } => {
                    Material::Dielectric { refractive_index }
                }
            })
            .collect()
    }

    /// Converts the object list into [Instance]s, checking matrix dimensions.
    pub fn instances(&self) -> Result<Vec<Instance>, InputError> {
        self.objects
            .iter()
            .enumerate()
            .map(|(i, object)| {
                let mv: &[f32; 16] = object.model_view.as_slice().try_into().map_err(|_| {
                    InputError::MatrixDimension {
                        object: i,
                        expected: 16,
                        got: object.model_view.len(),
                    }
                })?;
                let nm: &[f32; 9] = object.normal_matrix.as_slice().try_into().map_err(|_| {
                    InputError::MatrixDimension {
                        object: i,
                        expected: 9,
                        got: object.normal_matrix.len(),
                    }
                })?;
                Ok(Instance {
                    transform: Transform::new(
                        Matrix4x4::from_column_major(mv),
                        Matrix3x3::from_column_major(nm),
                    ),
                    material: object.material,
                })
            })
            .collect()
    }
}

fn vec3(v: [f32; 3]) -> Vec3<f32> {
    Vec3::new(v[0], v[1], v[2])
}

fn point3(v: [f32; 3]) -> Point3<f32> {
    Point3::new(v[0], v[1], v[2])
}

fn spectrum(v: [f32; 3]) -> Spectrum {
    Spectrum::new(v[0], v[1], v[2])
}
