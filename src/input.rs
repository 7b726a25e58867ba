use std::collections::HashSet;

use winit::event::{DeviceEvent, ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::camera::{Camera, Movement};

// pixel deltas come from touchpads; roughly one wheel notch
const PIXELS_PER_LINE: f32 = 20.0;

/// Input collected between two frames.
///
/// Movement keys are tracked as held state, so the camera keeps moving every
/// frame while a key is down. Cursor and scroll offsets accumulate until
/// [`InputState::end_frame`].
///
/// A free cursor is tracked through absolute window positions. Once the
/// pointer is captured, look comes from raw device motion instead, which is
/// not clamped at the window edge.
#[derive(Debug)]
pub struct InputState {
    held: HashSet<Movement>,
    exit_requested: bool,

    captured: bool,
    first_mouse: bool,
    last_x: f32,
    last_y: f32,
    mouse_dx: f32,
    mouse_dy: f32,

    scroll: f32,
}

impl InputState {
    /// `width`/`height` place the initial cursor at the window centre.
    #[allow(clippy::cast_precision_loss)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            held: HashSet::new(),
            exit_requested: false,
            captured: false,
            first_mouse: true,
            last_x: width as f32 / 2.0,
            last_y: height as f32 / 2.0,
            mouse_dx: 0.0,
            mouse_dy: 0.0,
            scroll: 0.0,
        }
    }

    /// Switches mouse look to relative device motion.
    pub fn capture_pointer(&mut self) {
        self.captured = true;
    }

    pub fn is_captured(&self) -> bool {
        self.captured
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let pressed = event.state == ElementState::Pressed;
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.key(code, pressed);
                }
            }
            WindowEvent::CursorMoved { position, .. } if !self.captured => {
                self.cursor_moved(position.x as f32, position.y as f32);
            }
            WindowEvent::MouseWheel { delta, .. } => match delta {
                MouseScrollDelta::LineDelta(_, y) => self.scrolled(*y),
                MouseScrollDelta::PixelDelta(p) => self.scrolled(p.y as f32 / PIXELS_PER_LINE),
            },
            _ => (),
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn handle_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            if self.captured {
                self.mouse_moved(*dx as f32, *dy as f32);
            }
        }
    }

    pub fn key(&mut self, code: KeyCode, pressed: bool) {
        let movement = match code {
            KeyCode::KeyW => Movement::Forward,
            KeyCode::KeyS => Movement::Backward,
            KeyCode::KeyA => Movement::Left,
            KeyCode::KeyD => Movement::Right,
            KeyCode::Escape => {
                self.exit_requested |= pressed;
                return;
            }
            _ => return,
        };
        if pressed {
            self.held.insert(movement);
        } else {
            self.held.remove(&movement);
        }
    }

    pub fn cursor_moved(&mut self, x: f32, y: f32) {
        // the first event after the cursor enters would otherwise snap the view
        if self.first_mouse {
            self.last_x = x;
            self.last_y = y;
            self.first_mouse = false;
        }

        // window y grows downwards, pitch grows upwards
        self.mouse_dx += x - self.last_x;
        self.mouse_dy += self.last_y - y;

        self.last_x = x;
        self.last_y = y;
    }

    /// Relative motion of a captured pointer, in device units.
    pub fn mouse_moved(&mut self, dx: f32, dy: f32) {
        self.mouse_dx += dx;
        self.mouse_dy -= dy;
    }

    pub fn scrolled(&mut self, lines: f32) {
        self.scroll += lines;
    }

    pub fn is_held(&self, movement: Movement) -> bool {
        self.held.contains(&movement)
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    pub fn mouse_offset(&self) -> (f32, f32) {
        (self.mouse_dx, self.mouse_dy)
    }

    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    /// Feeds this frame's input into `camera`.
    pub fn apply_to(&self, camera: &mut Camera, delta_time: f32) {
        for movement in [
            Movement::Forward,
            Movement::Backward,
            Movement::Left,
            Movement::Right,
        ] {
            if self.is_held(movement) {
                camera.process_keyboard(movement, delta_time);
            }
        }

        if self.mouse_dx != 0.0 || self.mouse_dy != 0.0 {
            camera.process_mouse_movement(self.mouse_dx, self.mouse_dy, true);
        }

        if self.scroll != 0.0 {
            camera.process_mouse_scroll(self.scroll);
        }
    }

    pub fn end_frame(&mut self) {
        self.mouse_dx = 0.0;
        self.mouse_dy = 0.0;
        self.scroll = 0.0;
    }
}
