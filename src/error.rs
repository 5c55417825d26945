use thiserror::Error;

/// Failures raised while building a scene from a description.
#[derive(Error, Debug)]
pub enum SceneError {
    /// Geometry or lighting that cannot be traced: non-positive radii,
    /// zero-length normals, non-positive light intensities.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),
    #[error("failed to read scene file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse scene file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Whole-frame failures; there is no per-pixel error reporting.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("cannot render a {width}x{height} frame")]
    InvalidResolution { width: usize, height: usize },
}
