use glam::Vec3;

/// Orientation in degrees, yaw measured around +Y from +X and pitch above the XZ plane.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct EulerAngles {
    pub yaw: f32,
    pub pitch: f32,
}

impl EulerAngles {
    pub fn new(yaw: f32, pitch: f32) -> Self {
        Self { yaw, pitch }
    }

    pub fn sum_with(&mut self, yaw: f32, pitch: f32) {
        self.yaw += yaw;
        self.pitch += pitch;
    }
}

impl From<EulerAngles> for Vec3 {
    fn from(angles: EulerAngles) -> Self {
        let (yaw, pitch) = (angles.yaw.to_radians(), angles.pitch.to_radians());
        Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos()).normalize()
    }
}

/// Orthonormal camera frame derived from a front direction and the world up axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Basis {
    pub front: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

// below this the front is treated as parallel to world up
const MIN_RIGHT_LENGTH_SQUARED: f32 = 1e-6;

impl Basis {
    pub fn from_angles(angles: EulerAngles, world_up: Vec3) -> Self {
        let start = Self {
            front: Vec3::NEG_Z,
            right: world_up.any_orthonormal_vector(),
            up: world_up,
        };
        start.reoriented(angles, world_up)
    }

    /// Rebuilds the frame for `angles`. Looking straight along `world_up` leaves
    /// no horizontal right vector, so the current one is kept.
    pub fn reoriented(self, angles: EulerAngles, world_up: Vec3) -> Self {
        let front: Vec3 = angles.into();
        let cross = front.cross(world_up);
        let right = if cross.length_squared() < MIN_RIGHT_LENGTH_SQUARED {
            self.right
        } else {
            cross.normalize()
        };
        let up = right.cross(front).normalize();
        let right = front.cross(up).normalize();
        Self { front, right, up }
    }
}
