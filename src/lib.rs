//! A minimal CPU ray tracer: sphere and plane primitives, a fixed pinhole
//! camera, nearest-hit tracing, and flat / facing-ratio / Lambertian shading
//! over a row-major RGBA byte buffer. Display and encoding sinks live
//! outside the library; it only ever hands back finished buffers.

pub mod camera;
pub mod error;
pub mod film;
pub mod geometry;
pub mod math;
pub mod parsing;
pub mod renderer;
pub mod scene;
pub mod shading;

pub use camera::Camera;
pub use error::{RenderError, SceneError};
pub use film::Film;
pub use renderer::{render, render_film, RenderOptions};
pub use scene::{PointLight, Scene};
pub use shading::Shading;
