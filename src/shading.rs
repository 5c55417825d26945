use std::f32::consts::PI;

use crate::math::{Color, Ray};
use crate::scene::{HitRecord, PointLight};

/// Diffuse reflectance used when none is configured; roughly the reflectance
/// of an average matte surface.
pub const DEFAULT_ALBEDO: f32 = 0.18;

/// How a hit becomes a pixel color. One policy is selected per render.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shading {
    /// The primitive's base color, unshaded.
    Flat,
    /// Scale the base color by how squarely the surface faces the viewer.
    /// Not physical, but enough to read depth.
    FacingRatio,
    /// Diffuse reflection of the scene's point light. Intensity is a flat
    /// multiplier with no inverse-square falloff.
    Lambertian { albedo: f32 },
}

impl Default for Shading {
    fn default() -> Shading {
        Shading::Lambertian {
            albedo: DEFAULT_ALBEDO,
        }
    }
}

impl Shading {
    /// Color for a hit. The result is always clamped into the storable
    /// 0..=255 range per channel.
    pub fn shade(&self, hit: &HitRecord<'_>, r: Ray, lights: &[PointLight]) -> Color {
        let base = hit.primitive.color();
        let color = match *self {
            Shading::Flat => base,
            Shading::FacingRatio => {
                let mut ratio = (hit.normal * -r.direction).max(0.0);
                // exaggerate the falloff toward silhouettes
                ratio *= ratio.sin();
                base * ratio
            }
            Shading::Lambertian { albedo } => match lights.first() {
                Some(light) => {
                    let light_dir = (light.position - hit.point).normalized();
                    let diffuse = (hit.normal * light_dir).max(0.0);
                    light.color * (albedo / PI * light.intensity) * diffuse * base
                }
                // single-light model; nothing to reflect
                None => Color::BLACK,
            },
        };
        color.clamped()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::{PrimitiveEnum, Sphere};
    use crate::math::{Point3, Vec3};

    fn white_sphere() -> PrimitiveEnum {
        PrimitiveEnum::Sphere(Sphere::new(Point3::new(0.0, 0.0, -3.0), 1.0, Color::WHITE))
    }

    fn hit_with_normal(primitive: &PrimitiveEnum, normal: Vec3) -> HitRecord<'_> {
        HitRecord {
            t: 2.0,
            point: Point3::new(0.0, 0.0, -2.0),
            normal,
            primitive,
        }
    }

    fn brightness(c: Color) -> f32 {
        c.r + c.g + c.b
    }

    fn overhead_light() -> PointLight {
        PointLight::new(Point3::new(0.0, 10.0, -2.0), Color::new(1.0, 1.0, 1.0), 20.0)
    }

    #[test]
    fn surface_facing_the_light_outshines_one_rotated_away() {
        let primitive = white_sphere();
        let r = Ray::new(Point3::ORIGIN, Vec3::new(0.0, 0.0, -1.0));
        let lights = [overhead_light()];
        let shading = Shading::default();

        let facing = shading.shade(&hit_with_normal(&primitive, Vec3::Y), r, &lights);
        let sideways = shading.shade(&hit_with_normal(&primitive, Vec3::X), r, &lights);
        assert!(brightness(facing) > brightness(sideways));
        assert_eq!(brightness(sideways), 0.0);
    }

    #[test]
    fn lambertian_without_lights_shades_black() {
        let primitive = white_sphere();
        let r = Ray::new(Point3::ORIGIN, Vec3::new(0.0, 0.0, -1.0));
        let shaded = Shading::default().shade(&hit_with_normal(&primitive, Vec3::Y), r, &[]);
        assert_eq!(shaded, Color::BLACK);
    }

    #[test]
    fn shaded_channels_stay_storable_under_overbright_lights() {
        let primitive = white_sphere();
        let r = Ray::new(Point3::ORIGIN, Vec3::new(0.0, 0.0, -1.0));
        let blinding = [PointLight::new(
            Point3::new(0.0, 10.0, -2.0),
            Color::new(1.0, 1.0, 1.0),
            1e6,
        )];
        let shaded = Shading::default().shade(&hit_with_normal(&primitive, Vec3::Y), r, &blinding);
        assert!(shaded.r <= 255.0 && shaded.g <= 255.0 && shaded.b <= 255.0);
        assert!(shaded.r >= 0.0 && shaded.g >= 0.0 && shaded.b >= 0.0);
    }

    #[test]
    fn facing_ratio_dims_glancing_surfaces() {
        let primitive = white_sphere();
        let r = Ray::new(Point3::ORIGIN, Vec3::new(0.0, 0.0, -1.0));

        let head_on = Shading::FacingRatio.shade(&hit_with_normal(&primitive, Vec3::Z), r, &[]);
        let glancing = Shading::FacingRatio.shade(&hit_with_normal(&primitive, Vec3::X), r, &[]);
        assert!(brightness(head_on) > 0.0);
        assert_eq!(brightness(glancing), 0.0);
        // the sin boost keeps even a head-on surface below the base color
        assert!(head_on.r < 255.0);
    }

    #[test]
    fn flat_shading_passes_the_base_color_through() {
        let primitive = white_sphere();
        let r = Ray::new(Point3::ORIGIN, Vec3::new(0.0, 0.0, -1.0));
        let shaded = Shading::Flat.shade(&hit_with_normal(&primitive, Vec3::Z), r, &[]);
        assert_eq!(shaded, Color::WHITE);
    }
}
