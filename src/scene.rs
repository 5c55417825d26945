use crate::geometry::{Primitive, PrimitiveEnum};
use crate::math::{Color, Point3, Ray, Vec3};

/// A point light with a flat intensity multiplier; there is no falloff with
/// distance. The color is a unit-scale RGB multiplier, unlike the 0-255
/// surface colors.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointLight {
    pub position: Point3,
    pub color: Color,
    pub intensity: f32,
}

impl PointLight {
    /// Caller contract: `intensity` must be positive. Scene construction
    /// validates this.
    pub fn new(position: Point3, color: Color, intensity: f32) -> PointLight {
        debug_assert!(intensity > 0.0, "light intensity {}", intensity);
        PointLight {
            position,
            color,
            intensity,
        }
    }
}

/// Data derived from the nearest intersection, handed to shading.
#[derive(Copy, Clone, Debug)]
pub struct HitRecord<'a> {
    pub t: f32,
    pub point: Point3,
    pub normal: Vec3,
    pub primitive: &'a PrimitiveEnum,
}

/// An ordered list of primitives plus lights and a fallback color.
///
/// Scenes are immutable for the duration of a render and always passed by
/// reference; nothing here is global.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub primitives: Vec<PrimitiveEnum>,
    pub lights: Vec<PointLight>,
    pub background: Color,
}

impl Scene {
    pub fn new(
        primitives: Vec<PrimitiveEnum>,
        lights: Vec<PointLight>,
        background: Color,
    ) -> Scene {
        Scene {
            primitives,
            lights,
            background,
        }
    }

    /// Nearest valid intersection across every primitive, in list order.
    ///
    /// Every primitive is tested; a candidate only replaces the current best
    /// when its distance is strictly smaller, so ties keep the earlier
    /// primitive. Hits behind the ray origin (negative t) and non-finite
    /// distances are rejected here, since primitives report raw roots.
    pub fn trace(&self, r: Ray) -> Option<HitRecord<'_>> {
        let mut nearest_t = f32::INFINITY;
        let mut nearest: Option<&PrimitiveEnum> = None;

        for primitive in self.primitives.iter() {
            if let Some(t) = primitive.intersect(r) {
                if t.is_finite() && t >= 0.0 && t < nearest_t {
                    nearest_t = t;
                    nearest = Some(primitive);
                }
            }
        }

        nearest.map(|primitive| {
            let point = r.point_at_parameter(nearest_t);
            HitRecord {
                t: nearest_t,
                point,
                normal: primitive.normal(point),
                primitive,
            }
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::Sphere;

    fn sphere_at_z(z: f32, color: Color) -> PrimitiveEnum {
        PrimitiveEnum::Sphere(Sphere::new(Point3::new(0.0, 0.0, z), 1.0, color))
    }

    #[test]
    fn nearest_of_two_overlapping_spheres_wins() {
        let near = Color::new(255.0, 0.0, 0.0);
        let far = Color::new(0.0, 255.0, 0.0);
        let scene = Scene::new(
            vec![sphere_at_z(-5.0, far), sphere_at_z(-3.0, near)],
            vec![],
            Color::BLACK,
        );
        let r = Ray::new(Point3::ORIGIN, Vec3::new(0.0, 0.0, -1.0));
        let hit = scene.trace(r).unwrap();
        assert_eq!(hit.primitive.color(), near);
        assert!((hit.t - 2.0).abs() < 1e-4);
    }

    #[test]
    fn equal_distances_keep_scene_order() {
        let first = sphere_at_z(-3.0, Color::new(255.0, 0.0, 0.0));
        let second = sphere_at_z(-3.0, Color::new(0.0, 255.0, 0.0));
        let scene = Scene::new(vec![first, second], vec![], Color::BLACK);
        let r = Ray::new(Point3::ORIGIN, Vec3::new(0.0, 0.0, -1.0));
        let hit = scene.trace(r).unwrap();
        assert!(std::ptr::eq(hit.primitive, &scene.primitives[0]));
    }

    #[test]
    fn hits_behind_the_ray_origin_are_rejected() {
        let scene = Scene::new(
            vec![sphere_at_z(5.0, Color::WHITE)],
            vec![],
            Color::BLACK,
        );
        let r = Ray::new(Point3::ORIGIN, Vec3::new(0.0, 0.0, -1.0));
        assert!(scene.trace(r).is_none());
    }

    #[test]
    fn empty_scene_traces_to_none() {
        let scene = Scene::default();
        let r = Ray::new(Point3::ORIGIN, Vec3::new(0.0, 0.0, -1.0));
        assert!(scene.trace(r).is_none());
    }

    #[test]
    fn hit_point_and_normal_are_derived_from_the_winner() {
        let scene = Scene::new(
            vec![sphere_at_z(-3.0, Color::WHITE)],
            vec![],
            Color::BLACK,
        );
        let r = Ray::new(Point3::ORIGIN, Vec3::new(0.0, 0.0, -1.0));
        let hit = scene.trace(r).unwrap();
        assert!((hit.point.z + 2.0).abs() < 1e-4);
        // front side of the sphere faces +z, back toward the ray
        assert!((hit.normal.z - 1.0).abs() < 1e-4);
    }
}
