mod film;
mod materials;
mod ppm;
mod sampling;
mod transform;
mod vector;
