use crate::geometry::Primitive;
use crate::math::{Color, Point3, Ray, Vec3};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    pub center: Point3,
    pub radius: f32,
    pub color: Color,
}

impl Sphere {
    /// Caller contract: `radius` must be positive. Scene construction
    /// validates this before any sphere reaches a render.
    pub fn new(center: Point3, radius: f32, color: Color) -> Sphere {
        debug_assert!(radius > 0.0, "sphere radius {}", radius);
        Sphere {
            center,
            radius,
            color,
        }
    }
}

impl Primitive for Sphere {
    fn intersect(&self, r: Ray) -> Option<f32> {
        let oc: Vec3 = r.origin - self.center;
        let a = r.direction * r.direction;
        let b = 2.0 * (oc * r.direction);
        let c = oc * oc - self.radius * self.radius;
        let discriminant = b * b - 4.0 * a * c;

        if discriminant < 0.0 {
            None
        } else if discriminant == 0.0 {
            // grazing hit, double root
            Some(-b / (2.0 * a))
        } else {
            let discriminant_sqrt = discriminant.sqrt();
            let t0 = (-b - discriminant_sqrt) / (2.0 * a);
            let t1 = (-b + discriminant_sqrt) / (2.0 * a);
            // the nearer crossing; may be negative, see the trait contract
            Some(t0.min(t1))
        }
    }

    fn normal(&self, p: Point3) -> Vec3 {
        (p - self.center).normalized()
    }
}
