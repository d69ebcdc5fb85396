//! Ray-object intersection queries.
//!
//! Defines the [`Hittable`] trait used by the tracer for nearest-hit and
//! shadow queries, and implements it for a plain slice of spheres with a
//! linear scan.

use crate::ray::Ray;
use crate::sphere::Sphere;
use crate::vector::Point3;

/// Ray-sphere intersection information.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// Near intersection parameter (entry point).
    pub t0: f32,
    /// Far intersection parameter (exit point).
    pub t1: f32,
    /// The sphere that was hit.
    pub sphere: &'a Sphere,
}

impl Hit<'_> {
    /// World-space position of the near intersection along `ray`.
    pub fn point(&self, ray: &Ray) -> Point3 {
        ray.at(self.t0)
    }
}

/// Trait for geometry that can be queried with rays.
///
/// Must be thread-safe (Sync + Send) so one scene can be shared by all
/// rendering threads.
pub trait Hittable: Sync + Send {
    /// Closest object along the ray, by smallest `t0`.
    fn nearest_hit(&self, ray: &Ray) -> Option<Hit<'_>>;

    /// True if the ray intersects anything at all.
    ///
    /// Used for shadow rays, where any blocker is enough.
    fn occludes(&self, ray: &Ray) -> bool;
}

impl Hittable for [Sphere] {
    fn nearest_hit(&self, ray: &Ray) -> Option<Hit<'_>> {
        let mut nearest: Option<Hit<'_>> = None;

        for sphere in self {
            if let Some((t0, t1)) = sphere.intersect(ray) {
                // Strict comparison keeps the first sphere on ties.
                let closer = nearest.map_or(true, |best| t0 < best.t0);
                if closer {
                    nearest = Some(Hit { t0, t1, sphere });
                }
            }
        }

        nearest
    }

    fn occludes(&self, ray: &Ray) -> bool {
        self.iter().any(|sphere| sphere.intersect(ray).is_some())
    }
}

impl Hittable for Vec<Sphere> {
    fn nearest_hit(&self, ray: &Ray) -> Option<Hit<'_>> {
        self.as_slice().nearest_hit(ray)
    }

    fn occludes(&self, ray: &Ray) -> bool {
        self.as_slice().occludes(ray)
    }
}
