//! Error types for scene construction, rendering output and scene files.

use std::path::PathBuf;

/// Failures raised by the tracing core and the image sinks.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A sphere was built with a radius that is zero, negative or not finite.
    #[error("invalid sphere geometry: radius must be positive and finite, got {radius}")]
    InvalidGeometry {
        /// The rejected radius.
        radius: f32,
    },

    /// The recursion bound is outside `1..=MAX_DEPTH_LIMIT`.
    #[error("max depth must be between 1 and {limit}, got {depth}")]
    DepthOutOfRange {
        /// The rejected depth.
        depth: u32,
        /// Largest accepted depth.
        limit: u32,
    },

    /// The field of view is not strictly between 0 and 180 degrees.
    #[error("field of view must be between 0 and 180 degrees (exclusive), got {fov}")]
    InvalidFieldOfView {
        /// The rejected angle in degrees.
        fov: f32,
    },

    /// A zero-length (or non-finite) vector was passed to `normalize`.
    #[error("cannot normalize a zero-length or non-finite vector")]
    DegenerateVector,

    /// The output image could not be written.
    #[error("failed to write image to {}: {source}", .path.display())]
    IoWriteFailure {
        /// Destination that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The output path has an extension no sink knows how to write.
    #[error("unsupported output format '{0}' (expected .ppm or .png)")]
    UnsupportedFormat(String),

    /// The image encoder rejected the framebuffer.
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

/// Failures raised while loading a scene description file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The scene file does not exist.
    #[error("Scene file not found: {0}")]
    NotFound(String),

    /// The scene file could not be read.
    #[error("Failed to read scene file: {0}")]
    Io(#[from] std::io::Error),

    /// The scene file is not valid YAML or has unexpected fields.
    #[error("Failed to parse scene file: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The scene parsed but describes invalid geometry.
    #[error("Invalid scene: {0}")]
    Scene(#[from] RenderError),
}
