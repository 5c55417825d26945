use serde::{Deserialize, Serialize};

use crate::error::SceneError;
use crate::geometry::{Plane, PrimitiveEnum, Sphere};
use crate::math::{Color, Point3, Vec3};

#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PrimitiveData {
    Sphere {
        center: [f32; 3],
        radius: f32,
        color: [f32; 3],
    },
    Plane {
        origin: [f32; 3],
        normal: [f32; 3],
        color: [f32; 3],
    },
}

impl PrimitiveData {
    /// Validate and build the runtime shape. Degenerate descriptions fail
    /// here instead of propagating NaNs through a render.
    pub fn build(self) -> Result<PrimitiveEnum, SceneError> {
        match self {
            Self::Sphere {
                center,
                radius,
                color,
            } => {
                if !(radius > 0.0) {
                    return Err(SceneError::DegenerateGeometry(format!(
                        "sphere radius must be positive, got {}",
                        radius
                    )));
                }
                Ok(PrimitiveEnum::Sphere(Sphere::new(
                    Point3::from(center),
                    radius,
                    Color::from(color),
                )))
            }
            Self::Plane {
                origin,
                normal,
                color,
            } => {
                let normal = Vec3::from(normal);
                if normal.norm_squared() == 0.0 {
                    return Err(SceneError::DegenerateGeometry(
                        "plane normal must have non-zero length".to_string(),
                    ));
                }
                Ok(PrimitiveEnum::Plane(Plane::new(
                    Point3::from(origin),
                    normal.normalized(),
                    Color::from(color),
                )))
            }
        }
    }
}
