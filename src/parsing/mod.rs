mod primitives;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

pub use primitives::PrimitiveData;

use crate::camera::Camera;
use crate::error::SceneError;
use crate::math::{Color, Point3};
use crate::scene::{PointLight, Scene};

#[derive(Clone, Serialize, Deserialize)]
pub struct CameraData {
    pub origin: [f32; 3],
    pub fov: f32,
}

impl From<CameraData> for Camera {
    fn from(data: CameraData) -> Camera {
        Camera::new(Point3::from(data.origin), data.fov)
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct LightData {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub intensity: f32,
}

impl LightData {
    pub fn build(self) -> Result<PointLight, SceneError> {
        if !(self.intensity > 0.0) {
            return Err(SceneError::DegenerateGeometry(format!(
                "light intensity must be positive, got {}",
                self.intensity
            )));
        }
        Ok(PointLight::new(
            Point3::from(self.position),
            Color::from(self.color),
            self.intensity,
        ))
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct SceneData {
    pub background: [f32; 3],
    #[serde(default)]
    pub camera: Option<CameraData>,
    pub primitives: Vec<PrimitiveData>,
    #[serde(default)]
    pub lights: Vec<LightData>,
}

impl SceneData {
    /// Validate and build the runtime scene plus the camera it was authored
    /// for (the fixed default eye when none is given).
    pub fn build(self) -> Result<(Scene, Camera), SceneError> {
        let camera = self.camera.map(Camera::from).unwrap_or_default();
        let primitives = self
            .primitives
            .into_iter()
            .map(PrimitiveData::build)
            .collect::<Result<Vec<_>, _>>()?;
        let lights = self
            .lights
            .into_iter()
            .map(LightData::build)
            .collect::<Result<Vec<_>, _>>()?;
        let scene = Scene::new(primitives, lights, Color::from(self.background));
        Ok((scene, camera))
    }
}

pub fn load_json<T>(path: &Path) -> Result<T, SceneError>
where
    T: DeserializeOwned,
{
    let mut input = String::new();
    File::open(path).and_then(|mut f| f.read_to_string(&mut input))?;
    let data: T = serde_json::from_str(&input)?;
    Ok(data)
}

pub fn load_scene(path: &Path) -> Result<(Scene, Camera), SceneError> {
    load_json::<SceneData>(path)?.build()
}
