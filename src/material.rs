//! Surface materials and the Phong reflection model.
//!
//! Every light contributes through [`phong`], which adds a specular highlight
//! on top of the [`diffuse`] term. Both terms carry a fixed 0.25 brightness
//! scale so that three lights on a white surface stay close to 1.0.

use glam::Vec3A;

use crate::vector::Color;

/// Brightness scale applied to both the diffuse and the specular term.
pub const SHADING_SCALE: f32 = 0.25;

/// Surface properties of a sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Diffuse surface color.
    pub color: Color,
    /// Specular highlight color.
    pub specular_color: Color,
    /// Diffuse reflection constant.
    pub kd: f32,
    /// Specular reflection constant.
    pub ks: f32,
    /// Phong shininess exponent.
    pub shininess: f32,
    /// Weight of the recursive reflection term, 0.0 disables recursion.
    pub reflectivity: f32,
}

impl Material {
    /// Default shiny material: kd 1, ks 3, shininess 100, white highlights,
    /// fully reflective.
    pub fn phong(color: Color) -> Self {
        Self {
            color,
            specular_color: Color::ONE,
            kd: 1.0,
            ks: 3.0,
            shininess: 100.0,
            reflectivity: 1.0,
        }
    }

    /// Same material with a different reflectivity.
    pub fn with_reflectivity(mut self, reflectivity: f32) -> Self {
        self.reflectivity = reflectivity;
        self
    }

    /// Evaluate the full Phong model for this material.
    pub fn shade(&self, l: Vec3A, n: Vec3A, v: Vec3A) -> Color {
        phong(
            l,
            n,
            v,
            self.color,
            self.specular_color,
            self.kd,
            self.ks,
            self.shininess,
        )
    }
}

/// Lambertian term: `0.25 * kd * max(L·N, 0) * color`.
///
/// `l` points from the surface towards the light, `n` is the surface normal.
pub fn diffuse(l: Vec3A, n: Vec3A, diffuse_color: Color, kd: f32) -> Color {
    SHADING_SCALE * kd * l.dot(n).max(0.0) * diffuse_color
}

/// Phong model: diffuse term plus `0.25 * ks * specular * max(R·V, 0)^shininess`
/// where `R = 2N·max(N·L, 0) - L`.
///
/// `l`, `n` and `v` are expected to be unit vectors; `v` points towards the viewer.
#[allow(clippy::too_many_arguments)]
pub fn phong(
    l: Vec3A,
    n: Vec3A,
    v: Vec3A,
    diffuse_color: Color,
    specular_color: Color,
    kd: f32,
    ks: f32,
    shininess: f32,
) -> Color {
    let ed = diffuse(l, n, diffuse_color, kd);
    let r = 2.0 * n * n.dot(l).max(0.0) - l;
    let es = SHADING_SCALE * ks * r.dot(v).max(0.0).powf(shininess) * specular_color;
    ed + es
}
