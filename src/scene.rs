use glam::{Mat4, Vec3};

use crate::geometry::{CUBE_POSITIONS, POINT_LIGHT_POSITIONS};

const LAMP_SCALE: f32 = 0.2;

fn rotation_axis() -> Vec3 {
    Vec3::new(1.0, 0.3, 0.5).normalize()
}

/// Cubes spin at their own rate; the i-th turns 20*(i+1) degrees per second.
pub fn spinning_cubes(elapsed: f32) -> impl Iterator<Item = Mat4> {
    let rank = (1u16..).map(f32::from);
    CUBE_POSITIONS.into_iter().zip(rank).map(move |(position, n)| {
        let angle = (20.0 * n).to_radians() * elapsed;
        Mat4::from_translation(position) * Mat4::from_axis_angle(rotation_axis(), angle)
    })
}

/// Same placement as [`spinning_cubes`] but frozen, the i-th tilted by 20*i degrees.
pub fn resting_cubes() -> impl Iterator<Item = Mat4> {
    let index = (0u16..).map(f32::from);
    CUBE_POSITIONS.into_iter().zip(index).map(|(position, i)| {
        let angle = (20.0 * i).to_radians();
        Mat4::from_translation(position) * Mat4::from_axis_angle(rotation_axis(), angle)
    })
}

pub fn lamps() -> impl Iterator<Item = Mat4> {
    POINT_LIGHT_POSITIONS
        .into_iter()
        .map(|position| Mat4::from_translation(position) * Mat4::from_scale(Vec3::splat(LAMP_SCALE)))
}
