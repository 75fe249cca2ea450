mod bounds;
mod common;
mod matrix;
mod normal;
mod point;
mod ray;
mod spectrum;
mod transform;
mod vector;

pub use bounds::{Bounds2, Bounds3};
pub use common::{FloatValueType, ValueType};
pub use matrix::{Matrix3x3, Matrix4x4};
pub use normal::Normal;
pub use point::{Point2, Point3};
pub use ray::{Ray, RAY_EPSILON};
pub use spectrum::Spectrum;
pub use transform::Transform;
pub use vector::{Vec2, Vec3};
