use crate::geometry::Primitive;
use crate::math::{Color, Point3, Ray, Vec3};

/// Rays closer than this to parallel are treated as misses; the division
/// below would otherwise blow up.
const PARALLEL_EPSILON: f32 = 1e-6;

/// An infinite plane through `origin`. The normal is expected unit length by
/// convention, not enforced.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Plane {
    pub origin: Point3,
    pub normal: Vec3,
    pub color: Color,
}

impl Plane {
    pub fn new(origin: Point3, normal: Vec3, color: Color) -> Plane {
        Plane {
            origin,
            normal,
            color,
        }
    }
}

impl Primitive for Plane {
    fn intersect(&self, r: Ray) -> Option<f32> {
        let denom = r.direction * self.normal;
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }
        let t = ((self.origin - r.origin) * self.normal) / denom;
        if t >= 0.0 {
            Some(t)
        } else {
            None
        }
    }

    fn normal(&self, _p: Point3) -> Vec3 {
        self.normal
    }
}
