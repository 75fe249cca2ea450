use thiserror::Error;

/// Top-level error for loading and rendering.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Validation failure in a render description or mesh.
///
/// Every variant is reported before any geometry is built.
#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("samples per pixel must be positive")]
    NonPositiveSampleCount,
    #[error("max depth must be positive")]
    NonPositiveMaxDepth,
    #[error("resolution dimensions must be positive")]
    ZeroResolution,
    #[error("tile dimension must be positive")]
    ZeroTileDim,
    #[error("camera position, target and up vector are degenerate")]
    DegenerateCamera,
    #[error("object {object}: expected {expected} matrix elements, got {got}")]
    MatrixDimension {
        object: usize,
        expected: usize,
        got: usize,
    },
    #[error("object {object}: transform contains non-finite values")]
    NonFiniteTransform { object: usize },
    #[error("material index {index} out of range for {count} materials")]
    MaterialIndexOutOfRange { index: u32, count: usize },
    #[error("material {index}: {reason}")]
    MaterialParameter { index: usize, reason: String },
    #[error("mesh format error: {0}")]
    MeshFormat(String),
}
