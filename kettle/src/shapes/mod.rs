mod mesh;
mod triangle;

pub use mesh::Mesh;
pub use triangle::Triangle;
