use std::collections::HashSet;

use glium::glutin::event::{
    ElementState, KeyboardInput, MouseScrollDelta, VirtualKeyCode, WindowEvent,
};

use crate::float::*;

/// Touchpads report pixels, scroll wheels report lines
const PIXELS_PER_LINE: Float = 20.0;

pub struct InputState {
    /// Latest cursor position in physical pixels, if any has been observed
    pub cursor_pos: Option<(Float, Float)>,
    /// Scroll accumulated since the last reset, in lines
    pub scroll: Float,
    /// Currently held keys
    pub key_presses: HashSet<VirtualKeyCode>,
    /// Whether the window currently has focus
    pub focused: bool,
}

impl Default for InputState {
    fn default() -> InputState {
        InputState {
            cursor_pos: None,
            scroll: 0.0,
            key_presses: HashSet::new(),
            focused: true,
        }
    }
}

impl InputState {
    /// Get a new empty input state
    pub fn new() -> InputState {
        InputState::default()
    }

    /// Update the state with a window event
    pub fn update(&mut self, event: &WindowEvent<'_>) {
        match *event {
            WindowEvent::CursorMoved { position, .. } => {
                self.move_cursor(position.x.to_float(), position.y.to_float());
            }
            WindowEvent::CursorLeft { .. } => self.leave_window(),
            WindowEvent::MouseWheel { delta, .. } => match delta {
                MouseScrollDelta::LineDelta(_, y) => self.add_scroll(y.to_float()),
                MouseScrollDelta::PixelDelta(pos) => {
                    self.add_scroll(pos.y.to_float() / PIXELS_PER_LINE)
                }
            },
            WindowEvent::KeyboardInput {
                input:
                    KeyboardInput {
                        state,
                        virtual_keycode: Some(key),
                        ..
                    },
                ..
            } => match state {
                ElementState::Pressed => self.press(key),
                ElementState::Released => self.release(key),
            },
            WindowEvent::Focused(focused) => self.set_focused(focused),
            _ => (),
        }
    }

    pub fn move_cursor(&mut self, x: Float, y: Float) {
        self.cursor_pos = Some((x, y));
    }

    /// Forget the cursor so re-entering elsewhere starts a new baseline
    pub fn leave_window(&mut self) {
        self.cursor_pos = None;
    }

    pub fn add_scroll(&mut self, lines: Float) {
        self.scroll += lines;
    }

    pub fn press(&mut self, key: VirtualKeyCode) {
        self.key_presses.insert(key);
    }

    pub fn release(&mut self, key: VirtualKeyCode) {
        self.key_presses.remove(&key);
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if !focused {
            // Releases that happen while unfocused are never delivered
            self.key_presses.clear();
        }
    }

    /// Clear the per-frame accumulators
    pub fn reset_deltas(&mut self) {
        self.scroll = 0.0;
    }
}
