//! First-person controller that turns held keys, cursor motion and scroll
//! into camera movement, look and zoom.

use std::time::Duration;

use cgmath::Vector3;

use glium::glutin::event::VirtualKeyCode;

use crate::camera::Camera;
use crate::config::CameraConfig;
use crate::error::DemoError;
use crate::float::*;
use crate::input::InputState;

/// Directions the camera can be moved in with the keyboard
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Movement {
    Forward,
    Backward,
    Left,
    Right,
    Down,
    Up,
}

impl Movement {
    /// Move with wasd, shift and space for down and up
    pub fn from_key(key: VirtualKeyCode) -> Option<Movement> {
        match key {
            VirtualKeyCode::W => Some(Movement::Forward),
            VirtualKeyCode::S => Some(Movement::Backward),
            VirtualKeyCode::A => Some(Movement::Left),
            VirtualKeyCode::D => Some(Movement::Right),
            VirtualKeyCode::LShift => Some(Movement::Down),
            VirtualKeyCode::Space => Some(Movement::Up),
            _ => None,
        }
    }

    /// World-space direction of the movement for the camera's current basis
    fn direction(self, camera: &Camera) -> Vector3<Float> {
        let basis = camera.basis();
        match self {
            Movement::Forward => basis.front,
            Movement::Backward => -basis.front,
            Movement::Left => -basis.right,
            Movement::Right => basis.right,
            Movement::Down => -basis.up,
            Movement::Up => basis.up,
        }
    }
}

pub struct CameraController {
    /// Movement speed in world units per second
    speed: Float,
    /// Degrees of rotation per pixel of cursor motion
    sensitivity: Float,
    zoom_min: Float,
    zoom_max: Float,
    /// Previous cursor sample, None until the first sample arrives
    last_cursor: Option<(Float, Float)>,
}

impl CameraController {
    pub fn new(config: &CameraConfig) -> CameraController {
        CameraController {
            speed: config.speed,
            sensitivity: config.sensitivity,
            zoom_min: config.zoom_min,
            zoom_max: config.zoom_max,
            last_cursor: None,
        }
    }

    /// Apply one frame of input to the camera
    pub fn process_input(
        &mut self,
        camera: &mut Camera,
        input: &InputState,
        dt: Duration,
    ) -> Result<(), DemoError> {
        if !input.focused {
            // Start from a fresh baseline when focus returns
            self.last_cursor = None;
            return Ok(());
        }
        let movements = input
            .key_presses
            .iter()
            .filter_map(|&key| Movement::from_key(key));
        self.apply_movement(camera, movements, dt);
        match input.cursor_pos {
            Some((x, y)) => self.look(camera, x, y)?,
            // Cursor is outside the window
            None => self.last_cursor = None,
        }
        if input.scroll != 0.0 {
            self.zoom(camera, input.scroll)?;
        }
        Ok(())
    }

    /// Translate the camera by every held movement. Opposite movements cancel.
    pub fn apply_movement<I>(&self, camera: &mut Camera, movements: I, dt: Duration)
    where
        I: IntoIterator<Item = Movement>,
    {
        let distance = self.speed * dt.as_secs_f64().to_float();
        for movement in movements {
            let dir = movement.direction(camera);
            camera.translate(dir, distance);
        }
    }

    /// Rotate the camera toward a new cursor sample
    pub fn look(&mut self, camera: &mut Camera, x: Float, y: Float) -> Result<(), DemoError> {
        let (last_x, last_y) = match self.last_cursor.replace((x, y)) {
            Some(last) => last,
            // First sample only sets the baseline
            None => return Ok(()),
        };
        let dx = x - last_x;
        let dy = y - last_y;
        if dx == 0.0 && dy == 0.0 {
            return Ok(());
        }
        let orientation = &mut camera.orientation;
        orientation.set_yaw(orientation.yaw() + dx * self.sensitivity)?;
        // Screen y grows downward, so moving the mouse up pitches up
        orientation.set_pitch(orientation.pitch() - dy * self.sensitivity)
    }

    /// Narrow or widen the field of view by scroll lines
    pub fn zoom(&self, camera: &mut Camera, lines: Float) -> Result<(), DemoError> {
        let orientation = &mut camera.orientation;
        orientation.set_fov(orientation.fov() - lines)?;
        let fov = orientation.fov().clamp(self.zoom_min, self.zoom_max);
        orientation.set_fov(fov)?;
        log::debug!("Field of view: {:.1}", fov);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use cgmath::prelude::*;
    use cgmath::Point3;

    use crate::camera::Orientation;
    use crate::consts;

    fn camera() -> Camera {
        let orientation = Orientation::new(90.0, 0.0, 90.0).unwrap();
        Camera::new(Point3::origin(), orientation, 1.0).unwrap()
    }

    fn controller() -> CameraController {
        CameraController::new(&CameraConfig::default())
    }

    fn assert_close(a: Point3<Float>, b: Point3<Float>) {
        assert!((a - b).magnitude() < consts::BASIS_TOLERANCE, "{:?} != {:?}", a, b);
    }

    #[test]
    fn keys_map_to_movements() {
        assert_eq!(Movement::from_key(VirtualKeyCode::W), Some(Movement::Forward));
        assert_eq!(Movement::from_key(VirtualKeyCode::LShift), Some(Movement::Down));
        assert_eq!(Movement::from_key(VirtualKeyCode::Space), Some(Movement::Up));
        assert_eq!(Movement::from_key(VirtualKeyCode::Escape), None);
    }

    #[test]
    fn movement_scales_with_speed_and_time() {
        let mut camera = camera();
        let controller = controller();
        controller.apply_movement(&mut camera, [Movement::Forward], Duration::from_secs(2));
        // front is +z at yaw 90, speed 2.5
        assert_close(camera.pos, Point3::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn held_movements_compose() {
        let mut camera = camera();
        let controller = controller();
        let dt = Duration::from_millis(400);
        controller.apply_movement(&mut camera, [Movement::Forward, Movement::Up], dt);
        assert_close(camera.pos, Point3::new(0.0, 1.0, 1.0));
        controller.apply_movement(&mut camera, [Movement::Left, Movement::Right], dt);
        assert_close(camera.pos, Point3::new(0.0, 1.0, 1.0));
        controller.apply_movement(&mut camera, [Movement::Right], dt);
        // right is -x when looking down +z
        assert_close(camera.pos, Point3::new(-1.0, 1.0, 1.0));
    }

    #[test]
    fn first_cursor_sample_does_not_rotate() {
        let mut camera = camera();
        let mut controller = controller();
        let before = camera.basis();
        controller.look(&mut camera, 500.0, 300.0).unwrap();
        assert_eq!(camera.basis(), before);
        controller.look(&mut camera, 510.0, 280.0).unwrap();
        assert!((camera.orientation.yaw() - 91.0).abs() < 1e-6);
        assert!((camera.orientation.pitch() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn looking_up_stops_at_pitch_limit() {
        let mut camera = camera();
        let mut controller = controller();
        controller.look(&mut camera, 0.0, 0.0).unwrap();
        controller.look(&mut camera, 0.0, -5000.0).unwrap();
        assert!((camera.orientation.pitch() - consts::PITCH_LIMIT).abs() < 1e-6);
    }

    #[test]
    fn scroll_zooms_within_band() {
        let mut camera = camera();
        let controller = controller();
        controller.zoom(&mut camera, 10.0).unwrap();
        assert!((camera.orientation.fov() - 80.0).abs() < 1e-6);
        controller.zoom(&mut camera, 100.0).unwrap();
        assert!((camera.orientation.fov() - 10.0).abs() < 1e-6);
        controller.zoom(&mut camera, -500.0).unwrap();
        assert!((camera.orientation.fov() - 90.0).abs() < 1e-6);
    }

    #[test]
    fn unfocused_input_is_ignored_and_resets_baseline() {
        let mut camera = camera();
        let mut controller = controller();
        let mut input = InputState::new();
        input.move_cursor(100.0, 100.0);
        controller
            .process_input(&mut camera, &input, Duration::from_millis(16))
            .unwrap();

        input.set_focused(false);
        input.move_cursor(400.0, 100.0);
        input.add_scroll(5.0);
        controller
            .process_input(&mut camera, &input, Duration::from_millis(16))
            .unwrap();
        assert!((camera.orientation.fov() - 90.0).abs() < 1e-6);

        // The jump that happened while unfocused is not applied
        input.set_focused(true);
        input.reset_deltas();
        controller
            .process_input(&mut camera, &input, Duration::from_millis(16))
            .unwrap();
        assert!((camera.orientation.yaw() - 90.0).abs() < 1e-6);
    }

    #[test]
    fn reentering_cursor_starts_new_baseline() {
        let mut camera = camera();
        let mut controller = controller();
        let mut input = InputState::new();
        let dt = Duration::from_millis(16);
        input.move_cursor(1390.0, 400.0);
        controller.process_input(&mut camera, &input, dt).unwrap();

        // Leave on the right edge, come back on the left edge
        input.leave_window();
        controller.process_input(&mut camera, &input, dt).unwrap();
        input.move_cursor(5.0, 400.0);
        controller.process_input(&mut camera, &input, dt).unwrap();
        assert!((camera.orientation.yaw() - 90.0).abs() < 1e-6);

        input.move_cursor(15.0, 400.0);
        controller.process_input(&mut camera, &input, dt).unwrap();
        assert!((camera.orientation.yaw() - 91.0).abs() < 1e-6);
    }

    #[test]
    fn process_input_applies_keys_cursor_and_scroll() {
        let mut camera = camera();
        let mut controller = controller();
        let mut input = InputState::new();
        input.press(VirtualKeyCode::W);
        input.press(VirtualKeyCode::Escape);
        input.move_cursor(0.0, 0.0);
        input.add_scroll(10.0);
        controller
            .process_input(&mut camera, &input, Duration::from_secs(1))
            .unwrap();
        assert_close(camera.pos, Point3::new(0.0, 0.0, 2.5));
        assert!((camera.orientation.fov() - 80.0).abs() < 1e-6);

        input.reset_deltas();
        input.move_cursor(-900.0, 0.0);
        controller
            .process_input(&mut camera, &input, Duration::from_secs(0))
            .unwrap();
        assert!(camera.orientation.yaw().abs() < 1e-6 || (camera.orientation.yaw() - 360.0).abs() < 1e-6);
    }
}
