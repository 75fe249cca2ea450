pub mod bvh;
pub mod camera;
pub mod error;
pub mod film;
pub mod hit;
pub mod integrator;
pub mod materials;
pub mod math;
pub mod ppm;
pub mod renderer;
pub mod sampling;
pub mod scene;
pub mod shapes;
