//! First-person camera: yaw/pitch orientation, basis vectors and the
//! view/projection transforms derived from them.

use cgmath::prelude::*;
use cgmath::{Deg, Matrix4, Point3, Rad, Vector3};

use crate::consts;
use crate::error::DemoError;
use crate::float::*;

/// World up reference shared by the basis and the look-at transform
fn world_up() -> Vector3<Float> {
    Vector3::unit_y()
}

fn check_finite(what: &'static str, value: Float) -> Result<Float, DemoError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DemoError::NonFinite { what, value })
    }
}

/// Orthonormal frame describing where the camera looks
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Basis {
    pub front: Vector3<Float>,
    pub right: Vector3<Float>,
    pub up: Vector3<Float>,
}

impl Basis {
    /// Build the basis for the given yaw and pitch
    fn from_angles(yaw: Rad<Float>, pitch: Rad<Float>) -> Basis {
        let (sin_pitch, cos_pitch) = pitch.0.sin_cos();
        let (sin_yaw, cos_yaw) = yaw.0.sin_cos();
        let front = Vector3::new(cos_pitch * cos_yaw, sin_pitch, cos_pitch * sin_yaw).normalize();
        let right = front.cross(world_up()).normalize();
        let up = right.cross(front);
        Basis { front, right, up }
    }
}

/// Yaw, pitch and field of view of the camera.
///
/// Angles are set in degrees and stored in radians. The basis is
/// recomputed on every write so it is never stale.
#[derive(Clone, Debug)]
pub struct Orientation {
    yaw: Rad<Float>,
    pitch: Rad<Float>,
    fov: Rad<Float>,
    basis: Basis,
}

impl Default for Orientation {
    fn default() -> Orientation {
        let yaw = Rad::from(Deg(90.0));
        let pitch = Rad(0.0);
        Orientation {
            yaw,
            pitch,
            fov: Rad::from(Deg(90.0)),
            basis: Basis::from_angles(yaw, pitch),
        }
    }
}

impl Orientation {
    pub fn new(yaw: Float, pitch: Float, fov: Float) -> Result<Orientation, DemoError> {
        let mut orientation = Orientation::default();
        orientation.set_yaw(yaw)?;
        orientation.set_pitch(pitch)?;
        orientation.set_fov(fov)?;
        Ok(orientation)
    }

    /// Yaw in degrees, normalized to [0, 360)
    pub fn yaw(&self) -> Float {
        Deg::from(self.yaw).0
    }

    /// Pitch in degrees
    pub fn pitch(&self) -> Float {
        Deg::from(self.pitch).0
    }

    /// Vertical field of view in degrees
    pub fn fov(&self) -> Float {
        Deg::from(self.fov).0
    }

    pub fn set_yaw(&mut self, degrees: Float) -> Result<(), DemoError> {
        let degrees = check_finite("yaw", degrees)?;
        // Keep the stored angle bounded over long sessions
        self.yaw = Rad::from(Deg(degrees.rem_euclid(360.0)));
        self.update_basis();
        Ok(())
    }

    /// Set the pitch, clamped to stay clear of the poles
    pub fn set_pitch(&mut self, degrees: Float) -> Result<(), DemoError> {
        let degrees = check_finite("pitch", degrees)?;
        let clamped = degrees.clamp(-consts::PITCH_LIMIT, consts::PITCH_LIMIT);
        self.pitch = Rad::from(Deg(clamped));
        self.update_basis();
        Ok(())
    }

    pub fn set_fov(&mut self, degrees: Float) -> Result<(), DemoError> {
        let degrees = check_finite("field of view", degrees)?;
        let clamped = degrees.clamp(consts::MIN_FOV, consts::MAX_FOV);
        self.fov = Rad::from(Deg(clamped));
        Ok(())
    }

    pub fn basis(&self) -> Basis {
        self.basis
    }

    fn update_basis(&mut self) {
        self.basis = Basis::from_angles(self.yaw, self.pitch);
    }

    /// Perspective projection with explicit clip planes
    pub fn projection_with_planes(
        &self,
        aspect_ratio: Float,
        near: Float,
        far: Float,
    ) -> Result<Matrix4<Float>, DemoError> {
        if !(aspect_ratio.is_finite() && aspect_ratio > 0.0) {
            return Err(DemoError::InvalidAspectRatio(aspect_ratio));
        }
        if !(near.is_finite() && far.is_finite() && near > 0.0 && near < far) {
            return Err(DemoError::InvalidClipPlanes { near, far });
        }
        Ok(cgmath::perspective(self.fov, aspect_ratio, near, far))
    }

    /// Perspective projection using the default clip planes
    pub fn projection(&self, aspect_ratio: Float) -> Result<Matrix4<Float>, DemoError> {
        self.projection_with_planes(aspect_ratio, consts::NEAR_PLANE, consts::FAR_PLANE)
    }
}

/// Representation of a first-person camera
#[derive(Clone, Debug)]
pub struct Camera {
    /// Position of the camera in world coordinates
    pub pos: Point3<Float>,
    /// Look direction and zoom
    pub orientation: Orientation,
    /// Width over height of the viewport
    aspect_ratio: Float,
}

impl Camera {
    pub fn new(
        pos: Point3<Float>,
        orientation: Orientation,
        aspect_ratio: Float,
    ) -> Result<Camera, DemoError> {
        let mut camera = Camera {
            pos,
            orientation,
            aspect_ratio: 1.0,
        };
        camera.set_aspect_ratio(aspect_ratio)?;
        Ok(camera)
    }

    pub fn aspect_ratio(&self) -> Float {
        self.aspect_ratio
    }

    pub fn set_aspect_ratio(&mut self, aspect_ratio: Float) -> Result<(), DemoError> {
        if !(aspect_ratio.is_finite() && aspect_ratio > 0.0) {
            return Err(DemoError::InvalidAspectRatio(aspect_ratio));
        }
        self.aspect_ratio = aspect_ratio;
        Ok(())
    }

    /// Follow the framebuffer size. A zero-sized viewport is rejected and
    /// leaves the camera unchanged.
    pub fn update_viewport(&mut self, size: (u32, u32)) -> Result<(), DemoError> {
        let (width, height) = size;
        let aspect_ratio = width as Float / height as Float;
        if aspect_ratio != self.aspect_ratio {
            self.set_aspect_ratio(aspect_ratio)?;
            log::debug!("Viewport resized to {}x{}", width, height);
        }
        Ok(())
    }

    pub fn basis(&self) -> Basis {
        self.orientation.basis()
    }

    /// Move the camera along a world-space direction
    pub fn translate(&mut self, dir: Vector3<Float>, distance: Float) {
        self.pos += distance * dir;
    }

    /// Get the world to camera transformation matrix
    pub fn world_to_camera(&self) -> Matrix4<Float> {
        let target = self.pos + self.basis().front;
        Matrix4::look_at_rh(self.pos, target, world_up())
    }

    /// Get the camera to clip space transformation matrix
    pub fn camera_to_clip(&self) -> Result<Matrix4<Float>, DemoError> {
        self.orientation.projection(self.aspect_ratio)
    }
}
