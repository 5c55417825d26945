use super::{Point3, Vec3};

/// Origin plus unit direction, the parametrized point `origin + direction * t`.
#[derive(Copy, Clone, Debug)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vec3,
}

impl Ray {
    /// The direction is normalized here, so a `Ray` always carries a unit
    /// direction. Caller contract: `direction` must have non-zero magnitude.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Ray {
            origin,
            direction: direction.normalized(),
        }
    }

    pub fn point_at_parameter(self, t: f32) -> Point3 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn direction_is_normalized_at_construction() {
        let r = Ray::new(Point3::ORIGIN, Vec3::new(0.0, 3.0, -4.0));
        assert!((r.direction.norm() - 1.0).abs() < 1e-6);
        assert!((r.direction.y - 0.6).abs() < 1e-6);
        assert!((r.direction.z + 0.8).abs() < 1e-6);
    }

    #[test]
    fn point_at_parameter_walks_along_the_ray() {
        let r = Ray::new(Point3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -2.0));
        let p = r.point_at_parameter(3.0);
        assert_eq!(p, Point3::new(1.0, 0.0, -3.0));
    }
}
