use glam::{Mat4, Vec3};

use crate::conversion::{Basis, EulerAngles};

pub const YAW: f32 = -90.0;
pub const PITCH: f32 = 0.0;
pub const SPEED: f32 = 2.5;
pub const SENSITIVITY: f32 = 0.1;
pub const ZOOM: f32 = 45.0;

const PITCH_LIMIT: f32 = 89.0;
const ZOOM_MIN: f32 = 1.0;
const ZOOM_MAX: f32 = 45.0;
const Z_NEAR: f32 = 0.1;
const Z_FAR: f32 = 100.0;

/// Keyboard-driven translation, relative to where the camera looks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Movement {
    Forward,
    Backward,
    Left,
    Right,
}

/// First-person camera. Angles are kept in degrees and the basis is
/// rebuilt whenever they change, so `front`, `right` and `up` stay unit length.
#[derive(Clone, Debug)]
pub struct Camera {
    position: Vec3,
    world_up: Vec3,
    angles: EulerAngles,
    basis: Basis,

    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    zoom: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl Camera {
    pub fn new(position: Vec3) -> Self {
        Self::with_orientation(position, Vec3::Y, YAW, PITCH)
    }

    pub fn with_orientation(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let angles = EulerAngles::new(yaw, pitch);
        Self {
            position,
            world_up,
            angles,
            basis: Basis::from_angles(angles, world_up),
            movement_speed: SPEED,
            mouse_sensitivity: SENSITIVITY,
            zoom: ZOOM,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn front(&self) -> Vec3 {
        self.basis.front
    }

    pub fn right(&self) -> Vec3 {
        self.basis.right
    }

    pub fn up(&self) -> Vec3 {
        self.basis.up
    }

    pub fn yaw(&self) -> f32 {
        self.angles.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.angles.pitch
    }

    /// Vertical field of view in degrees.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.basis.front, self.basis.up)
    }

    /// OpenGL clip space (depth in -1..1).
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.zoom.to_radians(), aspect, Z_NEAR, Z_FAR)
    }

    pub fn process_keyboard(&mut self, direction: Movement, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        match direction {
            Movement::Forward => self.position += self.basis.front * velocity,
            Movement::Backward => self.position -= self.basis.front * velocity,
            Movement::Left => self.position -= self.basis.right * velocity,
            Movement::Right => self.position += self.basis.right * velocity,
        }
    }

    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32, constrain_pitch: bool) {
        self.angles.sum_with(
            x_offset * self.mouse_sensitivity,
            y_offset * self.mouse_sensitivity,
        );

        // past 90 degrees the look-at flips
        if constrain_pitch {
            self.angles.pitch = self.angles.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.basis = self.basis.reoriented(self.angles, self.world_up);
    }

    pub fn process_mouse_scroll(&mut self, y_offset: f32) {
        self.zoom = (self.zoom - y_offset).clamp(ZOOM_MIN, ZOOM_MAX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_looking_down_negative_z() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
        assert!((camera.front() - Vec3::NEG_Z).length() < 1e-5);
        assert!((camera.right() - Vec3::X).length() < 1e-5);
        assert!((camera.up() - Vec3::Y).length() < 1e-5);
        assert_eq!(camera.zoom(), ZOOM);
    }

    #[test]
    fn keyboard_moves_by_speed_times_delta() {
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
        camera.process_keyboard(Movement::Forward, 0.4);
        assert!((camera.position() - Vec3::new(0.0, 0.0, 2.0)).length() < 1e-5);

        camera.process_keyboard(Movement::Right, 0.2);
        assert!((camera.position() - Vec3::new(0.5, 0.0, 2.0)).length() < 1e-5);

        camera.process_keyboard(Movement::Left, 0.2);
        camera.process_keyboard(Movement::Backward, 0.4);
        assert!((camera.position() - Vec3::new(0.0, 0.0, 3.0)).length() < 1e-5);
    }

    #[test]
    fn pitch_is_clamped_when_constrained() {
        let mut camera = Camera::default();
        camera.process_mouse_movement(0.0, 10_000.0, true);
        assert_eq!(camera.pitch(), PITCH_LIMIT);

        camera.process_mouse_movement(0.0, -20_000.0, true);
        assert_eq!(camera.pitch(), -PITCH_LIMIT);
    }

    #[test]
    fn pitch_is_free_when_unconstrained() {
        let mut camera = Camera::default();
        camera.process_mouse_movement(0.0, 1000.0, false);
        assert!((camera.pitch() - 100.0).abs() < 1e-3);
    }

    #[test]
    fn unconstrained_vertical_look_stays_finite() {
        let mut camera = Camera::default();
        camera.process_mouse_movement(0.0, 900.0, false);
        assert!((camera.pitch() - 90.0).abs() < 1e-3);
        assert!(camera.view_matrix().is_finite());

        camera.process_keyboard(Movement::Right, 1.0);
        assert!(camera.position().is_finite());
        assert!((camera.position() - Vec3::new(SPEED, 0.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn mouse_offsets_are_scaled_by_sensitivity() {
        let mut camera = Camera::default();
        camera.process_mouse_movement(50.0, 0.0, true);
        assert!((camera.yaw() - (YAW + 5.0)).abs() < 1e-4);
    }

    #[test]
    fn scroll_zoom_stays_in_range() {
        let mut camera = Camera::default();
        camera.process_mouse_scroll(10.0);
        assert_eq!(camera.zoom(), 35.0);
        camera.process_mouse_scroll(100.0);
        assert_eq!(camera.zoom(), ZOOM_MIN);
        camera.process_mouse_scroll(-100.0);
        assert_eq!(camera.zoom(), ZOOM_MAX);
    }

    #[test]
    fn view_matrix_moves_world_opposite_to_camera() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
        let origin = camera.view_matrix().transform_point3(Vec3::ZERO);
        assert!((origin - Vec3::new(0.0, 0.0, -3.0)).length() < 1e-5);
    }
}
