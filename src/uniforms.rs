//! Camera values handed to the raytracing shader each frame.

use cgmath::Vector2;

use glium::uniforms::{UniformValue, Uniforms};

use crate::camera::Camera;
use crate::util::IntoArray;

pub const POSITION: &str = "camera.Position";
pub const VIEW: &str = "camera.View";
pub const UP: &str = "camera.Up";
pub const SIDE: &str = "camera.Side";
pub const SCALE: &str = "camera.Scale";

/// Snapshot of the live camera in the layout the shader expects
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraUniforms {
    pub position: [f32; 3],
    pub view: [f32; 3],
    pub up: [f32; 3],
    pub side: [f32; 3],
    /// (aspect ratio, 1.0)
    pub scale: [f32; 2],
}

impl CameraUniforms {
    pub fn new(camera: &Camera) -> CameraUniforms {
        let basis = camera.basis();
        CameraUniforms {
            position: camera.pos.into_array(),
            view: basis.front.into_array(),
            up: basis.up.into_array(),
            side: basis.right.into_array(),
            scale: Vector2::new(camera.aspect_ratio(), 1.0).into_array(),
        }
    }
}

impl Uniforms for CameraUniforms {
    fn visit_values<'a, F: FnMut(&str, UniformValue<'a>)>(&'a self, mut output: F) {
        output(POSITION, UniformValue::Vec3(self.position));
        output(VIEW, UniformValue::Vec3(self.view));
        output(UP, UniformValue::Vec3(self.up));
        output(SIDE, UniformValue::Vec3(self.side));
        output(SCALE, UniformValue::Vec2(self.scale));
    }
}
