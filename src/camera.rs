use crate::math::{Point3, Ray};

/// Pinhole camera at a fixed eye point looking down -z. There is no
/// camera-to-world transform; the image plane sits at z = -1.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    pub origin: Point3,
    /// Field of view in degrees.
    pub fov: f32,
}

impl Camera {
    pub fn new(origin: Point3, fov: f32) -> Camera {
        Camera { origin, fov }
    }

    /// One ray through the center of pixel (x, y) of a width x height raster.
    pub fn get_ray(&self, x: usize, y: usize, width: usize, height: usize) -> Ray {
        let aspect = width as f32 / height as f32;
        let scale = (self.fov.to_radians() * 0.5).tan();

        // pixel center -> ndc -> screen space in [-1, 1]; raster rows grow
        // downward while screen y grows upward, hence the flip
        let sx = ((x as f32 + 0.5) / width as f32 * 2.0 - 1.0) * aspect * scale;
        let sy = (1.0 - (y as f32 + 0.5) / height as f32 * 2.0) * scale;

        let target = Point3::new(sx, sy, -1.0);
        Ray::new(self.origin, target - self.origin)
    }
}

impl Default for Camera {
    fn default() -> Camera {
        Camera::new(Point3::new(0.0, 0.0, 1.0), 90.0)
    }
}
