use crate::math::{Point2, Point3, Ray, Vec2, Vec3};

// Based on Ray Tracing in One Weekend.
// https://raytracing.github.io/books/RayTracingInOneWeekend.html#positionablecamera

/// Values needed to specify a camera ray.
pub struct CameraSample {
    /// Continuous raster position, i.e. pixel coordinate plus sub-pixel
    /// jitter, with row 0 at the top scanline.
    pub p_film: Point2<f32>,
}

/// Field of view angle in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FoV {
    X(f32),
    Y(f32),
}

#[derive(Copy, Clone, Debug)]
pub struct CameraParameters {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vec3<f32>,
    pub fov: FoV,
}

impl Default for CameraParameters {
    fn default() -> Self {
        Self {
            position: Point3::zeros(),
            target: Point3::new(0.0, 0.0, -1.0),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov: FoV::Y(90.0),
        }
    }
}

/// A simple pinhole camera.
///
/// `ray` is a pure function of the camera configuration and the sample; the
/// same `(pixel, jitter)` always yields the same ray.
#[derive(Clone)]
pub struct Camera {
    origin: Point3<f32>,
    lower_left: Point3<f32>,
    horizontal: Vec3<f32>,
    vertical: Vec3<f32>,
    inv_res: Vec2<f32>,
}

impl Camera {
    /// Creates a new `Camera` for a film of resolution `res`.
    ///
    /// Expects non-degenerate parameters: the position must differ from the
    /// target and the up vector must not be parallel to the view direction.
    /// The input layer validates this before construction.
    pub fn new(params: CameraParameters, res: Vec2<u16>) -> Self {
        let aspect = f32::from(res.x) / f32::from(res.y);
        let (viewport_w, viewport_h) = match params.fov {
            FoV::X(angle) => {
                let w = 2.0 * (angle.to_radians() / 2.0).tan();
                (w, w / aspect)
            }
            FoV::Y(angle) => {
                let h = 2.0 * (angle.to_radians() / 2.0).tan();
                (aspect * h, h)
            }
        };

        let w = (params.position - params.target).normalized();
        let u = params.up.cross(w).normalized();
        let v = w.cross(u);

        let horizontal = u * viewport_w;
        let vertical = v * viewport_h;
        let lower_left = params.position - horizontal * 0.5 - vertical * 0.5 - w;

        Self {
            origin: params.position,
            lower_left,
            horizontal,
            vertical,
            inv_res: Vec2::new(1.0 / f32::from(res.x), 1.0 / f32::from(res.y)),
        }
    }

    /// Creates a new [Ray] at the camera sample with this `Camera`.
    pub fn ray(&self, sample: &CameraSample) -> Ray<f32> {
        let s = sample.p_film.x * self.inv_res.x;
        let t = 1.0 - sample.p_film.y * self.inv_res.y;
        let d = (self.lower_left + self.horizontal * s + self.vertical * t) - self.origin;
        Ray::new(self.origin, d.normalized(), f32::INFINITY)
    }
}
