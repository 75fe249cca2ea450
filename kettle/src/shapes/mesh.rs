use std::path::Path;

use crate::{
    error::{Error, InputError},
    math::{Normal, Point3},
};

/// A triangle soup loaded from a mesh file.
///
/// Every three consecutive points form one triangle, with per-vertex normals
/// at matching indices.
pub struct Mesh {
    pub points: Vec<Point3<f32>>,
    pub normals: Vec<Normal<f32>>,
}

impl Mesh {
    /// Parses a `Mesh` from two-line text content.
    ///
    /// The first line holds comma-separated vertex positions, the second the
    /// matching vertex normals, nine floats per triangle on each line.
    pub fn from_text(text: &str) -> Result<Self, InputError> {
        let mut lines = text.lines().filter(|l| !l.trim().is_empty());
        let point_line = lines
            .next()
            .ok_or_else(|| InputError::MeshFormat("Missing vertex line".into()))?;
        let normal_line = lines
            .next()
            .ok_or_else(|| InputError::MeshFormat("Missing normal line".into()))?;
        if lines.next().is_some() {
            return Err(InputError::MeshFormat("Trailing content after normal line".into()));
        }

        let point_floats = parse_floats(point_line, "vertex")?;
        let normal_floats = parse_floats(normal_line, "normal")?;

        if point_floats.len() != normal_floats.len() {
            return Err(InputError::MeshFormat(format!(
                "Vertex and normal counts differ ({} vs {})",
                point_floats.len(),
                normal_floats.len()
            )));
        }
        if point_floats.is_empty() || point_floats.len() % 9 != 0 {
            return Err(InputError::MeshFormat(format!(
                "Expected a positive multiple of 9 vertex floats, got {}",
                point_floats.len()
            )));
        }

        let points = point_floats
            .chunks_exact(3)
            .map(|c| Point3::new(c[0], c[1], c[2]))
            .collect();
        let normals = normal_floats
            .chunks_exact(3)
            .map(|c| Normal::new(c[0], c[1], c[2]))
            .collect();

        Ok(Self { points, normals })
    }

    /// Loads a `Mesh` from the file at `path`.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_text(&text)?)
    }

    /// Returns the number of triangles in this `Mesh`.
    pub fn triangle_count(&self) -> usize {
        self.points.len() / 3
    }
}

fn parse_floats(line: &str, what: &str) -> Result<Vec<f32>, InputError> {
    line.split(',')
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(|t| {
            t.parse::<f32>()
                .map_err(|_| InputError::MeshFormat(format!("Invalid {} float '{}'", what, t)))
        })
        .collect()
}
