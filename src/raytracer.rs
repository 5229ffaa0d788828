use std::borrow::Cow;
use std::path::Path;

use glium::backend::Facade;
use glium::index::PrimitiveType;
use glium::{IndexBuffer, Surface, VertexBuffer};

use crate::camera::Camera;
use crate::config::ShaderConfig;
use crate::error::DemoError;
use crate::uniforms::CameraUniforms;
use crate::vertex::{QuadVertex, QUAD_INDICES, QUAD_VERTICES};

const BUILTIN_VERTEX: &str = include_str!("shaders/raytracing.vert");
const BUILTIN_FRAGMENT: &str = include_str!("shaders/raytracing.frag");

/// Read a shader override from disk, or fall back to the built-in source
fn load_source(path: Option<&Path>, builtin: &'static str) -> Result<Cow<'static, str>, DemoError> {
    match path {
        Some(path) => {
            let source = std::fs::read_to_string(path).map_err(|source| DemoError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            log::info!("Using shader {}", path.display());
            Ok(Cow::Owned(source))
        }
        None => Ok(Cow::Borrowed(builtin)),
    }
}

/// Fullscreen quad drawn with the raytracing shader
pub struct RayTracer {
    shader: glium::Program,
    vertex_buffer: VertexBuffer<QuadVertex>,
    index_buffer: IndexBuffer<u16>,
}

impl RayTracer {
    pub fn new<F: Facade>(facade: &F, shaders: &ShaderConfig) -> Result<RayTracer, DemoError> {
        let vertex_buffer = VertexBuffer::new(facade, &QUAD_VERTICES)
            .map_err(|e| DemoError::Buffer(e.to_string()))?;
        let index_buffer = IndexBuffer::new(facade, PrimitiveType::TrianglesList, &QUAD_INDICES)
            .map_err(|e| DemoError::Buffer(e.to_string()))?;

        let vertex_shader_src = load_source(shaders.vertex.as_deref(), BUILTIN_VERTEX)?;
        let fragment_shader_src = load_source(shaders.fragment.as_deref(), BUILTIN_FRAGMENT)?;
        let shader =
            glium::Program::from_source(facade, &vertex_shader_src, &fragment_shader_src, None)?;
        log::info!("Raytracing program built");

        Ok(RayTracer {
            shader,
            vertex_buffer,
            index_buffer,
        })
    }

    pub fn render<S: Surface>(&self, target: &mut S, camera: &Camera) -> Result<(), DemoError> {
        let uniforms = CameraUniforms::new(camera);
        target.draw(
            &self.vertex_buffer,
            &self.index_buffer,
            &self.shader,
            &uniforms,
            &Default::default(),
        )?;
        Ok(())
    }
}
