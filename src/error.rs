//! Crate-level error type.

use std::fmt;
use std::path::PathBuf;

use crate::float::Float;

#[derive(Debug)]
pub enum DemoError {
    /// Aspect ratio was zero, negative or not a number
    InvalidAspectRatio(Float),
    /// A camera quantity that must be finite was NaN or infinite
    NonFinite { what: &'static str, value: Float },
    /// Clip planes must satisfy 0 < near < far
    InvalidClipPlanes { near: Float, far: Float },
    /// Reading a config or shader file failed
    Io { path: PathBuf, source: std::io::Error },
    /// The config file was not valid TOML or failed validation
    ConfigParse(String),
    /// Window or GL context creation failed
    Display(String),
    /// Shader compilation or linking failed
    Shader(String),
    /// Vertex or index buffer creation failed
    Buffer(String),
    /// Issuing the draw call failed
    Draw(glium::DrawError),
    /// Presenting the frame failed
    SwapBuffers(glium::SwapBuffersError),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAspectRatio(aspect) => {
                write!(f, "aspect ratio must be positive and finite, got {}", aspect)
            }
            Self::NonFinite { what, value } => write!(f, "{} must be finite, got {}", what, value),
            Self::InvalidClipPlanes { near, far } => write!(
                f,
                "clip planes must satisfy 0 < near < far, got near {} far {}",
                near, far
            ),
            Self::Io { path, source } => write!(f, "failed to read {}: {}", path.display(), source),
            Self::ConfigParse(msg) => write!(f, "config error: {}", msg),
            Self::Display(msg) => write!(f, "failed to create display: {}", msg),
            Self::Shader(msg) => write!(f, "failed to build shader program: {}", msg),
            Self::Buffer(msg) => write!(f, "failed to create buffer: {}", msg),
            Self::Draw(e) => write!(f, "draw failed: {}", e),
            Self::SwapBuffers(e) => write!(f, "failed to present frame: {}", e),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Draw(e) => Some(e),
            Self::SwapBuffers(e) => Some(e),
            _ => None,
        }
    }
}

impl From<glium::DrawError> for DemoError {
    fn from(e: glium::DrawError) -> Self {
        Self::Draw(e)
    }
}

impl From<glium::SwapBuffersError> for DemoError {
    fn from(e: glium::SwapBuffersError) -> Self {
        Self::SwapBuffers(e)
    }
}

impl From<glium::ProgramCreationError> for DemoError {
    fn from(e: glium::ProgramCreationError) -> Self {
        Self::Shader(e.to_string())
    }
}

impl From<toml::de::Error> for DemoError {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e.to_string())
    }
}
