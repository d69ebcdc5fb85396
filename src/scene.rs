//! Scene description: spheres, point lights and a background color.

use glam::Vec3A;

use crate::error::RenderError;
use crate::sphere::Sphere;
use crate::vector::{Color, Point3};

/// Omnidirectional point light. All lights have the same implicit intensity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    /// World-space position.
    pub position: Point3,
}

impl Light {
    /// Create a light at `position`.
    pub fn new(position: Point3) -> Self {
        Self { position }
    }
}

/// Everything the tracer reads while rendering. Built once, never mutated
/// during a render.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Spheres in insertion order; order decides nearest-hit ties.
    pub spheres: Vec<Sphere>,
    /// Point lights.
    pub lights: Vec<Light>,
    /// Color returned for rays that hit nothing.
    pub background: Color,
}

impl Scene {
    /// Create an empty scene with the given background.
    pub fn new(background: Color) -> Self {
        Self {
            spheres: Vec::new(),
            lights: Vec::new(),
            background,
        }
    }

    /// Add a sphere to the scene.
    pub fn add_sphere(&mut self, sphere: Sphere) -> &mut Self {
        self.spheres.push(sphere);
        self
    }

    /// Add a point light to the scene.
    pub fn add_light(&mut self, light: Light) -> &mut Self {
        self.lights.push(light);
        self
    }

    /// The five-sphere, three-light reference scene on a white background.
    pub fn reference() -> Result<Self, RenderError> {
        let mut scene = Scene::new(Color::ONE);

        // Ground: a huge sphere whose top sits at y = -4
        scene.add_sphere(Sphere::new(Vec3A::new(0.0, -10004.0, -20.0), 10000.0, Color::new(0.50, 0.50, 0.50))?);
        scene.add_sphere(Sphere::new(Vec3A::new(0.0, 0.0, -20.0), 4.0, Color::new(1.00, 0.32, 0.36))?);
        scene.add_sphere(Sphere::new(Vec3A::new(5.0, -1.0, -15.0), 2.0, Color::new(0.90, 0.76, 0.46))?);
        scene.add_sphere(Sphere::new(Vec3A::new(5.0, 0.0, -25.0), 3.0, Color::new(0.65, 0.77, 0.99))?);
        scene.add_sphere(Sphere::new(Vec3A::new(-5.5, 0.0, -13.0), 3.0, Color::new(0.90, 0.90, 0.90))?);

        scene
            .add_light(Light::new(Vec3A::new(0.0, 140.0, 60.0)))
            .add_light(Light::new(Vec3A::new(-60.0, 60.0, 60.0)))
            .add_light(Light::new(Vec3A::new(60.0, 60.0, 60.0)));

        Ok(scene)
    }
}
