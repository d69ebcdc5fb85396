//! Ray representation for 3D ray tracing.
//!
//! A ray is defined as r(t) = origin + t * direction. Every ray built through
//! [`Ray::new`] carries a unit-length direction; the intersection code relies
//! on that and does no normalization of its own.

use glam::Vec3A;

use crate::error::RenderError;
use crate::vector::{normalize, Point3};

/// Ray in 3D space defined by origin and direction.
///
/// Mathematical representation: r(t) = origin + t * direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    ///
    /// The camera position for primary rays, a surface point for shadow rays.
    pub origin: Point3,

    /// Unit direction of the ray.
    pub direction: Vec3A,
}

impl Ray {
    /// Create a ray, normalizing `direction`.
    ///
    /// Fails with [`RenderError::DegenerateVector`] for a zero direction.
    pub fn new(origin: Point3, direction: Vec3A) -> Result<Self, RenderError> {
        Ok(Self {
            origin,
            direction: normalize(direction)?,
        })
    }

    /// Build a ray from a direction the caller already normalized.
    pub(crate) fn from_unit(origin: Point3, direction: Vec3A) -> Self {
        debug_assert!(direction.is_normalized());
        Self { origin, direction }
    }

    /// Compute a point at parameter t along the ray.
    ///
    /// Returns r(t) = origin + t * direction.
    pub fn at(&self, t: f32) -> Point3 {
        self.origin + t * self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_direction() {
        let ray = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -5.0)).unwrap();
        assert_eq!(ray.direction, Vec3A::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_new_rejects_zero_direction() {
        assert!(matches!(
            Ray::new(Vec3A::ONE, Vec3A::ZERO),
            Err(RenderError::DegenerateVector)
        ));
    }

    #[test]
    fn test_at() {
        let ray = Ray::new(Vec3A::new(1.0, 0.0, 0.0), Vec3A::Y).unwrap();
        assert_eq!(ray.at(2.5), Vec3A::new(1.0, 2.5, 0.0));
    }
}
