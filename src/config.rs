//! Demo configuration with TOML file support.
//!
//! Every section uses `#[serde(default)]` so a partial file (e.g. only a
//! `[camera]` table) overrides just what it names.

use std::path::{Path, PathBuf};

use cgmath::Point3;
use serde::{Deserialize, Serialize};

use crate::camera::{Camera, Orientation};
use crate::consts;
use crate::error::DemoError;
use crate::float::*;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub shaders: ShaderConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Initial width of the window in logical pixels
    pub width: u32,
    /// Initial height of the window in logical pixels
    pub height: u32,
    pub title: String,
    /// Color the framebuffer is cleared to before the quad is drawn
    pub clear_color: [f32; 4],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1400,
            height: 920,
            title: "RayTracing(lab_work_3)".to_string(),
            clear_color: [0.15, 0.15, 0.15, 0.0],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Starting position in world coordinates
    pub position: [Float; 3],
    /// Starting yaw in degrees
    pub yaw: Float,
    /// Starting pitch in degrees
    pub pitch: Float,
    /// Starting vertical field of view in degrees
    pub fov: Float,
    /// Movement speed in world units per second
    pub speed: Float,
    /// Mouse look sensitivity in degrees per pixel
    pub sensitivity: Float,
    /// Narrowest field of view reachable with the scroll wheel
    pub zoom_min: Float,
    /// Widest field of view reachable with the scroll wheel
    pub zoom_max: Float,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, -7.0],
            yaw: 90.0,
            pitch: 0.0,
            fov: 90.0,
            speed: 2.5,
            sensitivity: 0.1,
            zoom_min: 10.0,
            zoom_max: 90.0,
        }
    }
}

/// Optional shader files used instead of the built-in sources
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShaderConfig {
    pub vertex: Option<PathBuf>,
    pub fragment: Option<PathBuf>,
}

impl DemoConfig {
    /// Load the config from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, DemoError> {
        let content = std::fs::read_to_string(path).map_err(|source| DemoError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self, DemoError> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Use the file named by the first command line argument, or the defaults
    pub fn from_args() -> Result<Self, DemoError> {
        match std::env::args_os().nth(1) {
            Some(path) => Self::load(Path::new(&path)),
            None => {
                log::info!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<(), DemoError> {
        let cam = &self.camera;
        let numbers = [
            ("camera.position.x", cam.position[0]),
            ("camera.position.y", cam.position[1]),
            ("camera.position.z", cam.position[2]),
            ("camera.yaw", cam.yaw),
            ("camera.pitch", cam.pitch),
            ("camera.fov", cam.fov),
            ("camera.speed", cam.speed),
            ("camera.sensitivity", cam.sensitivity),
            ("camera.zoom_min", cam.zoom_min),
            ("camera.zoom_max", cam.zoom_max),
        ];
        for (what, value) in numbers.iter() {
            if !value.is_finite() {
                return Err(DemoError::NonFinite {
                    what: *what,
                    value: *value,
                });
            }
        }
        if cam.speed <= 0.0 {
            return Err(DemoError::ConfigParse(format!(
                "camera.speed must be positive, got {}",
                cam.speed
            )));
        }
        if cam.sensitivity <= 0.0 {
            return Err(DemoError::ConfigParse(format!(
                "camera.sensitivity must be positive, got {}",
                cam.sensitivity
            )));
        }
        if cam.zoom_min < consts::MIN_FOV
            || cam.zoom_max > consts::MAX_FOV
            || cam.zoom_min > cam.zoom_max
        {
            return Err(DemoError::ConfigParse(format!(
                "zoom band [{}, {}] must be a non-empty range inside [{}, {}]",
                cam.zoom_min,
                cam.zoom_max,
                consts::MIN_FOV,
                consts::MAX_FOV
            )));
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(DemoError::ConfigParse(
                "window size must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the starting camera described by this config
    pub fn initial_camera(&self) -> Result<Camera, DemoError> {
        let cam = &self.camera;
        let orientation = Orientation::new(cam.yaw, cam.pitch, cam.fov)?;
        #[allow(clippy::cast_lossless)]
        let aspect_ratio = self.window.width as Float / self.window.height as Float;
        let [x, y, z] = cam.position;
        Camera::new(Point3::new(x, y, z), orientation, aspect_ratio)
    }
}
