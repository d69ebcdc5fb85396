//! Recursive Whitted-style tracer.
//!
//! For every hit the tracer sums a Phong contribution from each unoccluded
//! light, then adds a weighted recursive term until the depth bound is hit.

use std::fmt;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};

use clap::ValueEnum;
use serde::Deserialize;

use crate::error::RenderError;
use crate::hittable::Hittable;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::vector::{normalize, reflect, Color, Point3};

/// Default recursion bound: primary hit plus at most one reflection.
pub const DEFAULT_MAX_DEPTH: u32 = 2;

/// Largest accepted recursion bound. Each level is one stack frame per pixel.
pub const MAX_DEPTH_LIMIT: u32 = 64;

/// Fraction of the recursive color added to the local shading.
pub const REFLECTION_WEIGHT: f32 = 0.333;

/// Offset along the normal for mirror rays, keeps them off their own surface.
const SURFACE_BIAS: f32 = 1e-4;

/// How the secondary ray of a reflective hit is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReflectionMode {
    /// Re-trace the incoming ray unchanged. Reproduces the classic output of
    /// this renderer: the nearest hit is shaded again and added at 1/3 weight.
    #[default]
    Primary,
    /// Trace a true mirror reflection from the hit point.
    Mirror,
}

/// Ray counters collected while rendering.
#[derive(Debug, Default)]
pub struct TraceStats {
    primary: AtomicU64,
    shadow: AtomicU64,
    reflection: AtomicU64,
    deepest: AtomicU32,
}

/// Point-in-time copy of [`TraceStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RayCounts {
    /// Camera rays.
    pub primary: u64,
    /// Light visibility rays.
    pub shadow: u64,
    /// Recursive reflection rays.
    pub reflection: u64,
    /// Deepest recursion level reached (0 = primary only).
    pub deepest: u32,
}

impl TraceStats {
    /// Current counter values.
    pub fn snapshot(&self) -> RayCounts {
        RayCounts {
            primary: self.primary.load(Ordering::Relaxed),
            shadow: self.shadow.load(Ordering::Relaxed),
            reflection: self.reflection.load(Ordering::Relaxed),
            deepest: self.deepest.load(Ordering::Relaxed),
        }
    }

    /// Zero all counters.
    pub fn reset(&self) {
        self.primary.store(0, Ordering::Relaxed);
        self.shadow.store(0, Ordering::Relaxed);
        self.reflection.store(0, Ordering::Relaxed);
        self.deepest.store(0, Ordering::Relaxed);
    }
}

impl fmt::Display for RayCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} primary, {} shadow, {} reflection rays (max depth {})",
            self.primary, self.shadow, self.reflection, self.deepest
        )
    }
}

/// The recursive ray tracer. Holds no per-pixel state, so one instance is
/// shared by all render threads.
#[derive(Debug)]
pub struct Tracer {
    max_depth: u32,
    /// Secondary ray construction.
    pub reflection: ReflectionMode,
    stats: TraceStats,
}

impl Default for Tracer {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            reflection: ReflectionMode::default(),
            stats: TraceStats::default(),
        }
    }
}

impl Tracer {
    /// Create a tracer with the given recursion bound and reflection mode.
    ///
    /// A reflection is traced only while `depth + 1 < max_depth`. Fails with
    /// [`RenderError::DepthOutOfRange`] unless `1 <= max_depth <= MAX_DEPTH_LIMIT`.
    pub fn new(max_depth: u32, reflection: ReflectionMode) -> Result<Self, RenderError> {
        if !(1..=MAX_DEPTH_LIMIT).contains(&max_depth) {
            return Err(RenderError::DepthOutOfRange {
                depth: max_depth,
                limit: MAX_DEPTH_LIMIT,
            });
        }
        Ok(Self {
            max_depth,
            reflection,
            stats: TraceStats::default(),
        })
    }

    /// Recursion bound.
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Ray counters accumulated so far.
    pub fn stats(&self) -> &TraceStats {
        &self.stats
    }

    /// Trace a camera ray.
    pub fn trace_primary(&self, ray: &Ray, scene: &Scene) -> Color {
        self.stats.primary.fetch_add(1, Ordering::Relaxed);
        self.trace(ray, scene, 0)
    }

    /// Compute the unclamped color seen along `ray` at recursion level `depth`.
    ///
    /// Returns the scene background when nothing is hit. A light that sits
    /// exactly on the hit point has no direction and is skipped.
    pub fn trace(&self, ray: &Ray, scene: &Scene, depth: u32) -> Color {
        self.stats.deepest.fetch_max(depth, Ordering::Relaxed);

        let Some(hit) = scene.spheres.nearest_hit(ray) else {
            return scene.background;
        };

        let p = hit.point(ray);
        let n = hit.sphere.normal_at(p);
        let v = -ray.direction;
        let material = &hit.sphere.material;

        let mut color = Color::ZERO;
        for light in &scene.lights {
            let Ok(l) = normalize(light.position - p) else {
                continue;
            };

            self.stats.shadow.fetch_add(1, Ordering::Relaxed);
            if scene.spheres.occludes(&Ray::from_unit(p, l)) {
                continue;
            }
            color += material.shade(l, n, v);
        }

        if depth + 1 < self.max_depth && material.reflectivity > 0.0 {
            if let Some(secondary) = self.secondary_ray(ray, p, n) {
                self.stats.reflection.fetch_add(1, Ordering::Relaxed);
                let weight = REFLECTION_WEIGHT * material.reflectivity;
                color += weight * self.trace(&secondary, scene, depth + 1);
            }
        }

        color
    }

    fn secondary_ray(&self, incoming: &Ray, p: Point3, n: Point3) -> Option<Ray> {
        match self.reflection {
            ReflectionMode::Primary => Some(*incoming),
            ReflectionMode::Mirror => {
                Ray::new(p + SURFACE_BIAS * n, reflect(incoming.direction, n)).ok()
            }
        }
    }
}
