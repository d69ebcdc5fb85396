//! Vector helpers on top of `glam::Vec3A`.
//!
//! glam already provides add/sub/scale/dot/cross/length. What it does not give
//! us is a normalization that refuses degenerate input with a typed error, and
//! the mirror reflection used by the corrected reflection mode.

use glam::Vec3A;

use crate::error::RenderError;

/// RGB color type using Vec3A for SIMD optimization.
///
/// Channels are nominally in [0, 1] but are left unclamped until output.
pub type Color = Vec3A;

/// Position in world space.
pub type Point3 = Vec3A;

/// Normalize `v` to unit length.
///
/// Fails with [`RenderError::DegenerateVector`] when `v` has zero length or
/// contains NaN/infinite components, instead of producing NaNs.
pub fn normalize(v: Vec3A) -> Result<Vec3A, RenderError> {
    v.try_normalize().ok_or(RenderError::DegenerateVector)
}

/// Mirror `v` about the surface normal `n` (unit length).
pub fn reflect(v: Vec3A, n: Vec3A) -> Vec3A {
    v - 2.0 * v.dot(n) * n
}
