//! Sphere tracer
//!
//! Recursive ray tracer for scenes of spheres lit by point lights: analytic
//! ray-sphere intersection, hard shadows, Phong shading and a bounded
//! reflection term. Frames are written as binary PPM or PNG.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod config;
pub mod error;
pub mod hittable;
pub mod material;
pub mod output;
pub mod ray;
pub mod scene;
pub mod sphere;
pub mod tracer;
pub mod vector;

pub use camera::{Camera, Framebuffer};
pub use error::{ConfigError, RenderError};
pub use scene::{Light, Scene};
pub use sphere::Sphere;
pub use tracer::{ReflectionMode, Tracer};
