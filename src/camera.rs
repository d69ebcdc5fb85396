//! Pinhole camera and frame driver.

use glam::Vec3A;
use image::{ImageBuffer, Rgb};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rayon::prelude::*;

use crate::error::RenderError;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::tracer::Tracer;
use crate::vector::Point3;

/// Linear, unclamped RGB pixels in row-major order, row 0 at the top.
pub type Framebuffer = ImageBuffer<Rgb<f32>, Vec<f32>>;

/// Fixed pinhole camera looking down -Z with +Y up.
///
/// Maps each pixel center to normalized device coordinates in [-1, 1],
/// scales by `tan(fov / 2)` (and the aspect ratio horizontally) and places
/// the image plane at z = -1.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Rendered image width in pixel count
    pub image_width: u32,
    /// Rendered image height in pixel count
    pub image_height: u32,
    /// Vertical field of view in degrees, strictly inside (0, 180)
    fov: f32,
    /// Camera position in world space
    pub origin: Point3,
    /// Draw a progress bar on stderr while rendering
    pub show_progress: bool,
}

impl Default for Camera {
    /// 640x480, 30 degree field of view, at the origin.
    fn default() -> Self {
        Self {
            image_width: 640,
            image_height: 480,
            fov: 30.0,
            origin: Vec3A::ZERO,
            show_progress: false,
        }
    }
}

impl Camera {
    /// Creates a camera at the origin.
    ///
    /// Fails with [`RenderError::InvalidFieldOfView`] unless `0 < fov < 180`;
    /// outside that range `tan(fov / 2)` is negative, infinite or NaN.
    pub fn new(image_width: u32, image_height: u32, fov: f32) -> Result<Self, RenderError> {
        // Negated so NaN is rejected too
        if !(fov > 0.0 && fov < 180.0) {
            return Err(RenderError::InvalidFieldOfView { fov });
        }
        Ok(Self {
            image_width,
            image_height,
            fov,
            ..Self::default()
        })
    }

    /// Vertical field of view in degrees.
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Primary ray through the center of pixel `(x, y)`.
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        let inv_width = 1.0 / self.image_width as f32;
        let inv_height = 1.0 / self.image_height as f32;
        let aspect_ratio = self.image_width as f32 / self.image_height as f32;
        let angle = (std::f32::consts::PI * 0.5 * self.fov / 180.0).tan();

        let ray_x = (2.0 * ((x as f32 + 0.5) * inv_width) - 1.0) * angle * aspect_ratio;
        let ray_y = (1.0 - 2.0 * ((y as f32 + 0.5) * inv_height)) * angle;

        // z is fixed at -1, so the direction is never degenerate.
        Ray::from_unit(self.origin, Vec3A::new(ray_x, ray_y, -1.0).normalize())
    }

    /// Renders the scene, one tracer call per pixel.
    ///
    /// Pixels are independent, so they are traced in parallel with Rayon; the
    /// result does not depend on scheduling.
    pub fn render(&self, scene: &Scene, tracer: &Tracer) -> Framebuffer {
        let mut image = Framebuffer::new(self.image_width, self.image_height);

        info!("Tracing {}x{} pixels using {} CPU cores...", self.image_width, self.image_height, rayon::current_num_threads());
        let generation_start = std::time::Instant::now();
        let pb = self.progress_bar();

        image.enumerate_pixels_mut().par_bridge().for_each(|(x, y, pixel)| {
            let ray = self.primary_ray(x, y);
            let color = tracer.trace_primary(&ray, scene);
            *pixel = Rgb([color.x, color.y, color.z]);
            pb.inc(1);
        });

        pb.finish_and_clear();
        info!("Image generated in {:.2?}", generation_start.elapsed());
        debug!("Ray statistics: {}", tracer.stats().snapshot());

        image
    }

    fn progress_bar(&self) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(self.image_width as u64 * self.image_height as u64);
        if let Ok(style) = ProgressStyle::default_bar().template("{bar:40} {pos}/{len} ETA: {eta}") {
            pb.set_style(style);
        }
        pb
    }
}
