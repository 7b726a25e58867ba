use glium::implement_vertex;
use glam::Vec3;

/// Interleaved vertex with a unit face normal, as the lit cube uses it.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub tex_coords: [f32; 2],
}

impl Vertex {
    pub const fn new(position: [f32; 3], normal: [f32; 3], tex_coords: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            tex_coords,
        }
    }
}

implement_vertex!(Vertex, position, normal, tex_coords);

/// Same layout as [`Vertex`] with a per-vertex color in the middle slot.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ColoredVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub tex_coords: [f32; 2],
}

impl ColoredVertex {
    pub const fn new(position: [f32; 3], color: [f32; 3], tex_coords: [f32; 2]) -> Self {
        Self {
            position,
            color,
            tex_coords,
        }
    }
}

implement_vertex!(ColoredVertex, position, color, tex_coords);

pub const CUBE_VERTEX_COUNT: usize = 36;

/// Unit cube centred on the origin, two triangles per face.
pub const LIT_CUBE: [Vertex; CUBE_VERTEX_COUNT] = [
    Vertex::new([-0.5, -0.5, -0.5], [0.0, 0.0, -1.0], [0.0, 0.0]),
    Vertex::new([0.5, -0.5, -0.5], [0.0, 0.0, -1.0], [1.0, 0.0]),
    Vertex::new([0.5, 0.5, -0.5], [0.0, 0.0, -1.0], [1.0, 1.0]),
    Vertex::new([0.5, 0.5, -0.5], [0.0, 0.0, -1.0], [1.0, 1.0]),
    Vertex::new([-0.5, 0.5, -0.5], [0.0, 0.0, -1.0], [0.0, 1.0]),
    Vertex::new([-0.5, -0.5, -0.5], [0.0, 0.0, -1.0], [0.0, 0.0]),

    Vertex::new([-0.5, -0.5, 0.5], [0.0, 0.0, 1.0], [0.0, 0.0]),
    Vertex::new([0.5, -0.5, 0.5], [0.0, 0.0, 1.0], [1.0, 0.0]),
    Vertex::new([0.5, 0.5, 0.5], [0.0, 0.0, 1.0], [1.0, 1.0]),
    Vertex::new([0.5, 0.5, 0.5], [0.0, 0.0, 1.0], [1.0, 1.0]),
    Vertex::new([-0.5, 0.5, 0.5], [0.0, 0.0, 1.0], [0.0, 1.0]),
    Vertex::new([-0.5, -0.5, 0.5], [0.0, 0.0, 1.0], [0.0, 0.0]),

    Vertex::new([-0.5, 0.5, 0.5], [-1.0, 0.0, 0.0], [1.0, 0.0]),
    Vertex::new([-0.5, 0.5, -0.5], [-1.0, 0.0, 0.0], [1.0, 1.0]),
    Vertex::new([-0.5, -0.5, -0.5], [-1.0, 0.0, 0.0], [0.0, 1.0]),
    Vertex::new([-0.5, -0.5, -0.5], [-1.0, 0.0, 0.0], [0.0, 1.0]),
    Vertex::new([-0.5, -0.5, 0.5], [-1.0, 0.0, 0.0], [0.0, 0.0]),
    Vertex::new([-0.5, 0.5, 0.5], [-1.0, 0.0, 0.0], [1.0, 0.0]),

    Vertex::new([0.5, 0.5, 0.5], [1.0, 0.0, 0.0], [1.0, 0.0]),
    Vertex::new([0.5, 0.5, -0.5], [1.0, 0.0, 0.0], [1.0, 1.0]),
    Vertex::new([0.5, -0.5, -0.5], [1.0, 0.0, 0.0], [0.0, 1.0]),
    Vertex::new([0.5, -0.5, -0.5], [1.0, 0.0, 0.0], [0.0, 1.0]),
    Vertex::new([0.5, -0.5, 0.5], [1.0, 0.0, 0.0], [0.0, 0.0]),
    Vertex::new([0.5, 0.5, 0.5], [1.0, 0.0, 0.0], [1.0, 0.0]),

    Vertex::new([-0.5, -0.5, -0.5], [0.0, -1.0, 0.0], [0.0, 1.0]),
    Vertex::new([0.5, -0.5, -0.5], [0.0, -1.0, 0.0], [1.0, 1.0]),
    Vertex::new([0.5, -0.5, 0.5], [0.0, -1.0, 0.0], [1.0, 0.0]),
    Vertex::new([0.5, -0.5, 0.5], [0.0, -1.0, 0.0], [1.0, 0.0]),
    Vertex::new([-0.5, -0.5, 0.5], [0.0, -1.0, 0.0], [0.0, 0.0]),
    Vertex::new([-0.5, -0.5, -0.5], [0.0, -1.0, 0.0], [0.0, 1.0]),

    Vertex::new([-0.5, 0.5, -0.5], [0.0, 1.0, 0.0], [0.0, 1.0]),
    Vertex::new([0.5, 0.5, -0.5], [0.0, 1.0, 0.0], [1.0, 1.0]),
    Vertex::new([0.5, 0.5, 0.5], [0.0, 1.0, 0.0], [1.0, 0.0]),
    Vertex::new([0.5, 0.5, 0.5], [0.0, 1.0, 0.0], [1.0, 0.0]),
    Vertex::new([-0.5, 0.5, 0.5], [0.0, 1.0, 0.0], [0.0, 0.0]),
    Vertex::new([-0.5, 0.5, -0.5], [0.0, 1.0, 0.0], [0.0, 1.0]),
];

/// Unit cube for the texture-only demo; the colors are placeholders the shader ignores.
pub const COLORED_CUBE: [ColoredVertex; CUBE_VERTEX_COUNT] = [
    ColoredVertex::new([-0.5, -0.5, -0.5], [-0.5, -0.5, -0.5], [0.0, 0.0]),
    ColoredVertex::new([0.5, -0.5, -0.5], [-0.5, -0.5, -0.5], [1.0, 0.0]),
    ColoredVertex::new([0.5, 0.5, -0.5], [-0.5, -0.5, -0.5], [1.0, 1.0]),
    ColoredVertex::new([0.5, 0.5, -0.5], [-0.5, -0.5, -0.5], [1.0, 1.0]),
    ColoredVertex::new([-0.5, 0.5, -0.5], [-0.5, -0.5, -0.5], [0.0, 1.0]),
    ColoredVertex::new([-0.5, -0.5, -0.5], [-0.5, -0.5, -0.5], [0.0, 0.0]),

    ColoredVertex::new([-0.5, -0.5, 0.5], [-0.5, -0.5, -0.5], [0.0, 0.0]),
    ColoredVertex::new([0.5, -0.5, 0.5], [-0.5, -0.5, -0.5], [1.0, 0.0]),
    ColoredVertex::new([0.5, 0.5, 0.5], [-0.5, -0.5, -0.5], [1.0, 1.0]),
    ColoredVertex::new([0.5, 0.5, 0.5], [-0.5, -0.5, -0.5], [1.0, 1.0]),
    ColoredVertex::new([-0.5, 0.5, 0.5], [-0.5, -0.5, -0.5], [0.0, 1.0]),
    ColoredVertex::new([-0.5, -0.5, 0.5], [-0.5, -0.5, -0.5], [0.0, 0.0]),

    ColoredVertex::new([-0.5, 0.5, 0.5], [-0.5, -0.5, -0.5], [1.0, 0.0]),
    ColoredVertex::new([-0.5, 0.5, -0.5], [-0.5, -0.5, -0.5], [1.0, 1.0]),
    ColoredVertex::new([-0.5, -0.5, -0.5], [-0.5, -0.5, -0.5], [0.0, 1.0]),
    ColoredVertex::new([-0.5, -0.5, -0.5], [-0.5, -0.5, -0.5], [0.0, 1.0]),
    ColoredVertex::new([-0.5, -0.5, 0.5], [-0.5, -0.5, -0.5], [0.0, 0.0]),
    ColoredVertex::new([-0.5, 0.5, 0.5], [-0.5, -0.5, -0.5], [1.0, 0.0]),

    ColoredVertex::new([0.5, 0.5, 0.5], [-0.5, -0.5, -0.5], [1.0, 0.0]),
    ColoredVertex::new([0.5, 0.5, -0.5], [-0.5, -0.5, -0.5], [1.0, 1.0]),
    ColoredVertex::new([0.5, -0.5, -0.5], [-0.5, -0.5, -0.5], [0.0, 1.0]),
    ColoredVertex::new([0.5, -0.5, -0.5], [-0.5, -0.5, -0.5], [0.0, 1.0]),
    ColoredVertex::new([0.5, -0.5, 0.5], [-0.5, -0.5, -0.5], [0.0, 0.0]),
    ColoredVertex::new([0.5, 0.5, 0.5], [-0.5, -0.5, -0.5], [1.0, 0.0]),

    ColoredVertex::new([-0.5, -0.5, -0.5], [-0.5, -0.5, -0.5], [0.0, 1.0]),
    ColoredVertex::new([0.5, -0.5, -0.5], [-0.5, -0.5, -0.5], [1.0, 1.0]),
    ColoredVertex::new([0.5, -0.5, 0.5], [-0.5, -0.5, -0.5], [1.0, 0.0]),
    ColoredVertex::new([0.5, -0.5, 0.5], [-0.5, -0.5, -0.5], [1.0, 0.0]),
    ColoredVertex::new([-0.5, -0.5, 0.5], [-0.5, -0.5, -0.5], [0.0, 0.0]),
    ColoredVertex::new([-0.5, -0.5, -0.5], [-0.5, -0.5, -0.5], [0.0, 1.0]),

    ColoredVertex::new([-0.5, 0.5, -0.5], [-0.5, -0.5, -0.5], [0.0, 1.0]),
    ColoredVertex::new([0.5, 0.5, -0.5], [-0.5, -0.5, -0.5], [1.0, 1.0]),
    ColoredVertex::new([0.5, 0.5, 0.5], [-0.5, -0.5, -0.5], [1.0, 0.0]),
    ColoredVertex::new([0.5, 0.5, 0.5], [-0.5, -0.5, -0.5], [1.0, 0.0]),
    ColoredVertex::new([-0.5, 0.5, 0.5], [-0.5, -0.5, -0.5], [0.0, 0.0]),
    ColoredVertex::new([-0.5, 0.5, -0.5], [-0.5, -0.5, -0.5], [0.0, 1.0]),
];

pub const CUBE_POSITIONS: [Vec3; 10] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(2.0, 5.0, -15.0),
    Vec3::new(-1.5, -2.2, -2.5),
    Vec3::new(-3.8, -2.0, -12.3),
    Vec3::new(2.4, -0.4, -3.5),
    Vec3::new(-1.7, 3.0, -7.5),
    Vec3::new(1.3, -2.0, -2.5),
    Vec3::new(1.5, 2.0, -2.5),
    Vec3::new(1.5, 0.2, -1.5),
    Vec3::new(-1.3, 1.0, -1.5),
];

pub const POINT_LIGHT_POSITIONS: [Vec3; 4] = [
    Vec3::new(0.7, 0.2, 2.0),
    Vec3::new(2.3, -3.3, -4.0),
    Vec3::new(-4.0, 2.0, -12.0),
    Vec3::new(0.0, 0.0, -3.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lit_cube_normals_are_unit_and_face_outwards() {
        for vertex in LIT_CUBE {
            let normal = Vec3::from(vertex.normal);
            let position = Vec3::from(vertex.position);
            assert!((normal.length() - 1.0).abs() < 1e-6);
            // on a unit cube the normal axis coordinate is +-0.5 in the normal's direction
            assert!((position.dot(normal) - 0.5).abs() < 1e-6);
        }
    }

    #[test]
    fn cube_stays_inside_unit_box() {
        for vertex in COLORED_CUBE {
            assert!(vertex.position.iter().all(|c| c.abs() == 0.5));
            assert!(vertex.tex_coords.iter().all(|t| (0.0..=1.0).contains(t)));
        }
    }

    #[test]
    fn front_face_winds_counter_clockwise() {
        let [a, b, c] = [6, 7, 8].map(|i| Vec3::from(LIT_CUBE[i].position));
        let normal = (b - a).cross(c - a);
        assert!(normal.dot(Vec3::from(LIT_CUBE[6].normal)) > 0.0);
    }
}
