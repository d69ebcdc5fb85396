//! Scene description files.
//!
//! A scene file is YAML:
//!
//! ```yaml
//! background: [1.0, 1.0, 1.0]
//! reflection: primary
//! lights:
//!   - [0.0, 140.0, 60.0]
//! spheres:
//!   - center: [0.0, 0.0, -20.0]
//!     radius: 4.0
//!     color: [1.0, 0.32, 0.36]
//!     reflectivity: 1.0
//! ```

use std::path::Path;

use glam::Vec3A;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::material::Material;
use crate::scene::{Light, Scene};
use crate::sphere::Sphere;
use crate::tracer::ReflectionMode;

/// Top-level scene file contents.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneConfig {
    /// Color of rays that hit nothing, white if omitted.
    #[serde(default = "default_background")]
    pub background: [f32; 3],

    /// Overrides the reflection mode chosen on the command line.
    #[serde(default)]
    pub reflection: Option<ReflectionMode>,

    /// Point light positions.
    #[serde(default)]
    pub lights: Vec<[f32; 3]>,

    /// Spheres in tie-break order.
    #[serde(default)]
    pub spheres: Vec<SphereConfig>,
}

/// One sphere entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SphereConfig {
    /// Center position.
    pub center: [f32; 3],
    /// Radius, must be positive.
    pub radius: f32,
    /// Diffuse surface color.
    pub color: [f32; 3],
    /// Weight of the reflection term, defaults to 1.0.
    #[serde(default = "default_reflectivity")]
    pub reflectivity: f32,
}

fn default_background() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

fn default_reflectivity() -> f32 {
    1.0
}

impl SceneConfig {
    /// Build a validated scene. Sphere radii are checked by [`Sphere::with_material`].
    pub fn into_scene(self) -> Result<Scene, ConfigError> {
        let mut scene = Scene::new(Vec3A::from_array(self.background));

        for sphere in self.spheres {
            let material = Material::phong(Vec3A::from_array(sphere.color)).with_reflectivity(sphere.reflectivity);
            scene.add_sphere(Sphere::with_material(Vec3A::from_array(sphere.center), sphere.radius, material)?);
        }
        for position in self.lights {
            scene.add_light(Light::new(Vec3A::from_array(position)));
        }

        Ok(scene)
    }
}

/// Parse a scene description from YAML text.
pub fn parse_scene(content: &str) -> Result<SceneConfig, ConfigError> {
    Ok(serde_yaml::from_str(content)?)
}

/// Load a scene description from a YAML file
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<SceneConfig, ConfigError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::NotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    parse_scene(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;

    #[test]
    fn test_load_missing_scene() {
        let result = load_scene("/nonexistent/scene.yaml");
        assert!(matches!(result.unwrap_err(), ConfigError::NotFound(_)));
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let result = parse_scene("spheres: [");
        assert!(matches!(result.unwrap_err(), ConfigError::Parse(_)));
    }

    #[test]
    fn test_parse_unknown_field() {
        let result = parse_scene("fog: 0.5\n");
        assert!(matches!(result.unwrap_err(), ConfigError::Parse(_)));
    }

    #[test]
    fn test_parse_full_scene() {
        let config = parse_scene(
            r#"
background: [0.0, 0.0, 0.0]
reflection: mirror
lights:
  - [0.0, 140.0, 60.0]
  - [-60.0, 60.0, 60.0]
spheres:
  - center: [0.0, 0.0, -20.0]
    radius: 4.0
    color: [1.0, 0.32, 0.36]
  - center: [5.0, -1.0, -15.0]
    radius: 2.0
    color: [0.9, 0.76, 0.46]
    reflectivity: 0.0
"#,
        )
        .unwrap();
        assert_eq!(config.reflection, Some(ReflectionMode::Mirror));

        let scene = config.into_scene().unwrap();
        assert_eq!(scene.background, Vec3A::ZERO);
        assert_eq!(scene.lights.len(), 2);
        assert_eq!(scene.spheres.len(), 2);
        assert_eq!(scene.spheres[0].material.reflectivity, 1.0);
        assert_eq!(scene.spheres[1].material.reflectivity, 0.0);
        assert_eq!(scene.spheres[1].radius(), 2.0);
    }

    #[test]
    fn test_defaults_for_empty_document() {
        let config = parse_scene("{}").unwrap();
        assert!(config.reflection.is_none());
        let scene = config.into_scene().unwrap();
        assert_eq!(scene.background, Vec3A::ONE);
        assert!(scene.spheres.is_empty());
    }

    #[test]
    fn test_bad_radius_is_rejected() {
        let config = parse_scene(
            r#"
spheres:
  - center: [0.0, 0.0, -5.0]
    radius: -1.0
    color: [1.0, 1.0, 1.0]
"#,
        )
        .unwrap();
        assert!(matches!(
            config.into_scene(),
            Err(ConfigError::Scene(RenderError::InvalidGeometry { .. }))
        ));
    }

    #[test]
    fn test_load_scene_from_file() {
        let path = std::env::temp_dir().join(format!("sphere_tracer_test_scene_{}.yaml", std::process::id()));
        std::fs::write(&path, "lights:\n  - [1.0, 2.0, 3.0]\n").unwrap();

        let scene = load_scene(&path).unwrap().into_scene().unwrap();
        assert_eq!(scene.lights[0].position, Vec3A::new(1.0, 2.0, 3.0));

        let _ = std::fs::remove_file(&path);
    }
}
