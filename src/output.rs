//! # Output Module
//!
//! Writes a finished [`Framebuffer`] to disk:
//! - binary PPM (P6), the native format of this renderer
//! - PNG via the `image` crate
//!
//! Both formats share the same 8-bit conversion: each channel is clamped to
//! [0.0, 1.0], scaled by 255 and truncated. No gamma curve is applied.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::{ImageBuffer, Rgb};
use log::info;

use crate::camera::Framebuffer;
use crate::error::RenderError;

/// Destination for a rendered frame.
pub trait ImageSink {
    /// Consume a finished frame.
    fn write(&mut self, image: &Framebuffer) -> Result<(), RenderError>;
}

/// Convert one linear channel value to a byte, truncating.
///
/// Values above 1.0 saturate at 255, negatives at 0.
pub fn quantize(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0) as u8
}

/// Convert an f32 framebuffer to 8-bit RGB.
pub fn to_rgb8(image: &Framebuffer) -> ImageBuffer<Rgb<u8>, Vec<u8>> {
    ImageBuffer::from_fn(image.width(), image.height(), |x, y| {
        let pixel = image.get_pixel(x, y);
        Rgb([quantize(pixel[0]), quantize(pixel[1]), quantize(pixel[2])])
    })
}

/// Encode a framebuffer as binary PPM into any writer.
///
/// Layout: `P6\n{width} {height}\n255\n` followed by RGB bytes, rows top to
/// bottom.
pub fn encode_ppm<W: Write>(image: &Framebuffer, mut writer: W) -> std::io::Result<()> {
    write!(writer, "P6\n{} {}\n255\n", image.width(), image.height())?;
    writer.write_all(to_rgb8(image).as_raw())?;
    writer.flush()
}

/// Binary PPM file sink.
#[derive(Debug, Clone)]
pub struct PpmFile {
    path: PathBuf,
}

impl PpmFile {
    /// Sink writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ImageSink for PpmFile {
    fn write(&mut self, image: &Framebuffer) -> Result<(), RenderError> {
        let io_failure = |source| RenderError::IoWriteFailure {
            path: self.path.clone(),
            source,
        };

        let file = File::create(&self.path).map_err(io_failure)?;
        encode_ppm(image, BufWriter::new(file)).map_err(io_failure)?;

        info!("Image saved as {}", self.path.display());
        Ok(())
    }
}

/// PNG file sink.
#[derive(Debug, Clone)]
pub struct PngFile {
    path: PathBuf,
}

impl PngFile {
    /// Sink writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ImageSink for PngFile {
    fn write(&mut self, image: &Framebuffer) -> Result<(), RenderError> {
        match to_rgb8(image).save_with_format(&self.path, image::ImageFormat::Png) {
            Ok(()) => {
                info!("Image saved as {}", self.path.display());
                Ok(())
            }
            Err(image::ImageError::IoError(source)) => Err(RenderError::IoWriteFailure {
                path: self.path.clone(),
                source,
            }),
            Err(e) => Err(RenderError::Encode(e)),
        }
    }
}

/// Pick a sink from the file extension (`.ppm` or `.png`, case-insensitive).
pub fn sink_for_path(path: &Path) -> Result<Box<dyn ImageSink>, RenderError> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "ppm" => Ok(Box::new(PpmFile::new(path))),
        "png" => Ok(Box::new(PngFile::new(path))),
        _ => Err(RenderError::UnsupportedFormat(extension)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_one() -> Framebuffer {
        let mut image = Framebuffer::new(2, 1);
        image.put_pixel(0, 0, Rgb([1.5, 0.5, -0.2]));
        image.put_pixel(1, 0, Rgb([0.999, 1.0, 0.0]));
        image
    }

    #[test]
    fn test_quantize_truncates_and_clamps() {
        assert_eq!(quantize(0.0), 0);
        assert_eq!(quantize(1.0), 255);
        assert_eq!(quantize(7.3), 255);
        assert_eq!(quantize(-1.0), 0);
        // 0.5 * 255 = 127.5 truncates to 127, not rounded to 128
        assert_eq!(quantize(0.5), 127);
        assert_eq!(quantize(0.999), 254);
    }

    #[test]
    fn test_encode_ppm_layout() {
        let mut bytes = Vec::new();
        encode_ppm(&two_by_one(), &mut bytes).unwrap();

        let header = b"P6\n2 1\n255\n";
        assert_eq!(&bytes[..header.len()], header);
        assert_eq!(&bytes[header.len()..], &[255, 127, 0, 254, 255, 0]);
    }

    #[test]
    fn test_ppm_rows_top_to_bottom() {
        let mut image = Framebuffer::new(1, 2);
        image.put_pixel(0, 0, Rgb([1.0, 1.0, 1.0]));
        let mut bytes = Vec::new();
        encode_ppm(&image, &mut bytes).unwrap();
        assert_eq!(&bytes[bytes.len() - 6..], &[255, 255, 255, 0, 0, 0]);
    }

    #[test]
    fn test_sink_for_path_by_extension() {
        assert!(sink_for_path(Path::new("out.ppm")).is_ok());
        assert!(sink_for_path(Path::new("OUT.PNG")).is_ok());
        assert!(matches!(
            sink_for_path(Path::new("out.exr")),
            Err(RenderError::UnsupportedFormat(ext)) if ext == "exr"
        ));
        assert!(matches!(
            sink_for_path(Path::new("out")),
            Err(RenderError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_ppm_write_failure_is_reported() {
        let path = std::env::temp_dir().join(format!("sphere_tracer_missing_dir_{}", std::process::id())).join("nested").join("out.ppm");
        let result = PpmFile::new(&path).write(&two_by_one());
        assert!(matches!(result, Err(RenderError::IoWriteFailure { .. })));
    }

    #[test]
    fn test_png_round_trip_matches_ppm_bytes() {
        let path = std::env::temp_dir().join(format!("sphere_tracer_test_output_{}.png", std::process::id()));
        PngFile::new(&path).write(&two_by_one()).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.as_raw(), to_rgb8(&two_by_one()).as_raw());

        let _ = std::fs::remove_file(&path);
    }
}
