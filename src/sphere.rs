//! Sphere primitive for ray tracing.
//!
//! Intersection uses the geometric (projection) form rather than the
//! quadratic formula: project the center onto the ray, then measure the
//! perpendicular distance.

use crate::error::RenderError;
use crate::material::Material;
use crate::ray::Ray;
use crate::vector::{Color, Point3};

/// Sphere primitive defined by center, radius, and material.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Point3,

    /// Radius of the sphere, always positive and finite.
    radius: f32,

    /// Material properties determining light interaction.
    pub material: Material,
}

impl Sphere {
    /// Create a sphere with the default Phong material in the given color.
    ///
    /// Fails with [`RenderError::InvalidGeometry`] if `radius <= 0` or is not finite.
    pub fn new(center: Point3, radius: f32, color: Color) -> Result<Self, RenderError> {
        Self::with_material(center, radius, Material::phong(color))
    }

    /// Create a sphere with an explicit material.
    pub fn with_material(center: Point3, radius: f32, material: Material) -> Result<Self, RenderError> {
        // Written as a negated comparison so NaN is rejected too.
        if !(radius > 0.0) || !radius.is_finite() {
            return Err(RenderError::InvalidGeometry { radius });
        }
        Ok(Self { center, radius, material })
    }

    /// Radius of the sphere.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Surface color of the sphere.
    pub fn surface_color(&self) -> Color {
        self.material.color
    }

    /// Outward unit normal at a point on the surface.
    ///
    /// A point at the center has no normal and yields the zero vector.
    pub fn normal_at(&self, p: Point3) -> Point3 {
        (p - self.center).normalize_or_zero()
    }

    /// Intersect a ray with this sphere.
    ///
    /// Returns the entry and exit parameters `(t0, t1)` along the ray. The
    /// ray direction must already be unit length.
    ///
    /// Spheres whose center projects behind the origin (`tca < 0`) are
    /// rejected even if the origin lies inside them. A tangent ray
    /// (`d2 == r²`) counts as a hit with `t0 == t1 == tca`.
    pub fn intersect(&self, ray: &Ray) -> Option<(f32, f32)> {
        let l = self.center - ray.origin;
        let tca = l.dot(ray.direction);
        if tca < 0.0 {
            return None;
        }

        let d2 = l.dot(l) - tca * tca;
        let r2 = self.radius * self.radius;
        if d2 > r2 {
            return None;
        }

        let thc = (r2 - d2).sqrt();
        Some((tca - thc, tca + thc))
    }
}
