//! Light descriptors for the lit scene and their mapping onto shader uniforms.
//!
//! Values are fixed, except the spot light which follows the camera like a
//! flashlight. The helpers on [`Attenuation`] and [`SpotLight`] evaluate the
//! same formulas the fragment shader does.

use glam::{Mat4, Vec3};
use glium::uniforms::{UniformValue, Uniforms};

use crate::camera::Camera;
use crate::geometry::POINT_LIGHT_POSITIONS;
use crate::texture::Texture;

pub const SHININESS: f32 = 32.0;

/// Distance falloff `1 / (constant + linear * d + quadratic * d^2)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Attenuation {
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

impl Attenuation {
    /// Reaches roughly 50 units.
    pub const MEDIUM_RANGE: Self = Self {
        constant: 1.0,
        linear: 0.09,
        quadratic: 0.032,
    };

    pub fn factor(&self, distance: f32) -> f32 {
        1.0 / (self.constant + self.linear * distance + self.quadratic * distance * distance)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Phong {
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

impl Phong {
    pub fn grey(ambient: f32, diffuse: f32, specular: f32) -> Self {
        Self {
            ambient: Vec3::splat(ambient),
            diffuse: Vec3::splat(diffuse),
            specular: Vec3::splat(specular),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub direction: Vec3,
    pub color: Phong,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Phong,
    pub attenuation: Attenuation,
}

/// Cone light with a soft edge between `cut_off` and `outer_cut_off`.
/// Both are stored as cosines so the shader compares them against a dot product.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpotLight {
    pub position: Vec3,
    pub direction: Vec3,
    pub color: Phong,
    pub attenuation: Attenuation,
    pub cut_off: f32,
    pub outer_cut_off: f32,
}

impl SpotLight {
    pub fn flashlight(camera: &Camera) -> Self {
        Self {
            position: camera.position(),
            direction: camera.front(),
            color: Phong::grey(0.0, 1.0, 1.0),
            attenuation: Attenuation::MEDIUM_RANGE,
            cut_off: 12.5f32.to_radians().cos(),
            outer_cut_off: 15.0f32.to_radians().cos(),
        }
    }

    /// 1 inside the inner cone, 0 outside the outer cone, linear in between.
    pub fn intensity(&self, cos_theta: f32) -> f32 {
        let epsilon = self.cut_off - self.outer_cut_off;
        ((cos_theta - self.outer_cut_off) / epsilon).clamp(0.0, 1.0)
    }
}

/// Every light in the lit scene.
#[derive(Clone, Debug, PartialEq)]
pub struct LightRig {
    pub directional: DirectionalLight,
    pub points: [PointLight; 4],
    pub spot: SpotLight,
}

impl LightRig {
    pub fn new(camera: &Camera) -> Self {
        Self {
            directional: DirectionalLight {
                direction: Vec3::new(-0.2, -1.0, -0.3),
                color: Phong::grey(0.05, 0.4, 0.5),
            },
            points: POINT_LIGHT_POSITIONS.map(|position| PointLight {
                position,
                color: Phong::grey(0.05, 0.8, 1.0),
                attenuation: Attenuation::MEDIUM_RANGE,
            }),
            spot: SpotLight::flashlight(camera),
        }
    }

    pub fn follow(&mut self, camera: &Camera) {
        self.spot.position = camera.position();
        self.spot.direction = camera.front();
    }

    fn visit_values<'a, F: FnMut(&str, UniformValue<'a>)>(&'a self, f: &mut F) {
        let d = &self.directional;
        f("dirLight.direction", vec3(d.direction));
        visit_phong("dirLight", &d.color, f);

        for (i, point) in self.points.iter().enumerate() {
            let prefix = format!("pointLights[{i}]");
            f(&format!("{prefix}.position"), vec3(point.position));
            visit_phong(&prefix, &point.color, f);
            visit_attenuation(&prefix, &point.attenuation, f);
        }

        let s = &self.spot;
        f("spotLight.position", vec3(s.position));
        f("spotLight.direction", vec3(s.direction));
        visit_phong("spotLight", &s.color, f);
        visit_attenuation("spotLight", &s.attenuation, f);
        f("spotLight.cutOff", UniformValue::Float(s.cut_off));
        f("spotLight.outerCutOff", UniformValue::Float(s.outer_cut_off));
    }
}

fn vec3<'a>(v: Vec3) -> UniformValue<'a> {
    UniformValue::Vec3(v.to_array())
}

fn mat4<'a>(m: Mat4) -> UniformValue<'a> {
    UniformValue::Mat4(m.to_cols_array_2d())
}

fn visit_phong<'a, F: FnMut(&str, UniformValue<'a>)>(prefix: &str, color: &Phong, f: &mut F) {
    f(&format!("{prefix}.ambient"), vec3(color.ambient));
    f(&format!("{prefix}.diffuse"), vec3(color.diffuse));
    f(&format!("{prefix}.specular"), vec3(color.specular));
}

fn visit_attenuation<'a, F: FnMut(&str, UniformValue<'a>)>(
    prefix: &str,
    attenuation: &Attenuation,
    f: &mut F,
) {
    f(&format!("{prefix}.constant"), UniformValue::Float(attenuation.constant));
    f(&format!("{prefix}.linear"), UniformValue::Float(attenuation.linear));
    f(&format!("{prefix}.quadratic"), UniformValue::Float(attenuation.quadratic));
}

/// Diffuse and specular maps of the lit cube.
pub struct Material {
    pub diffuse: Texture,
    pub specular: Texture,
    pub shininess: f32,
}

/// Everything the lit-object program reads for one draw call.
pub struct LitUniforms<'a> {
    pub model: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
    pub view_pos: Vec3,
    pub material: &'a Material,
    pub lights: &'a LightRig,
}

impl Uniforms for LitUniforms<'_> {
    fn visit_values<'a, F: FnMut(&str, UniformValue<'a>)>(&'a self, mut f: F) {
        f("model", mat4(self.model));
        f("view", mat4(self.view));
        f("projection", mat4(self.projection));
        f("viewPos", vec3(self.view_pos));

        f("material.diffuse", self.material.diffuse.uniform_value());
        f("material.specular", self.material.specular.uniform_value());
        f("material.shininess", UniformValue::Float(self.material.shininess));

        self.lights.visit_values(&mut f);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn collect(rig: &LightRig) -> HashMap<String, Option<[f32; 3]>> {
        let mut seen = HashMap::new();
        rig.visit_values(&mut |name: &str, value| {
            let v = match value {
                UniformValue::Vec3(v) => Some(v),
                _ => None,
            };
            seen.insert(name.to_owned(), v);
        });
        seen
    }

    #[test]
    fn attenuation_is_one_at_the_light() {
        assert_eq!(Attenuation::MEDIUM_RANGE.factor(0.0), 1.0);
    }

    #[test]
    fn attenuation_falls_off_with_distance() {
        let a = Attenuation::MEDIUM_RANGE;
        let expected = 1.0 / (1.0 + 0.9 + 3.2);
        assert!((a.factor(10.0) - expected).abs() < 1e-6);
        assert!(a.factor(50.0) < a.factor(10.0));
    }

    #[test]
    fn spot_edge_is_soft() {
        let spot = SpotLight::flashlight(&Camera::default());
        assert_eq!(spot.intensity(1.0), 1.0);
        assert_eq!(spot.intensity(20.0f32.to_radians().cos()), 0.0);

        let between = spot.intensity(13.75f32.to_radians().cos());
        assert!(between > 0.0 && between < 1.0);
    }

    #[test]
    fn flashlight_follows_camera() {
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
        let mut rig = LightRig::new(&camera);
        assert_eq!(rig.spot.position, camera.position());

        camera.process_mouse_movement(200.0, 0.0, true);
        camera.process_keyboard(crate::camera::Movement::Forward, 1.0);
        rig.follow(&camera);
        assert_eq!(rig.spot.position, camera.position());
        assert_eq!(rig.spot.direction, camera.front());
    }

    #[test]
    fn rig_writes_every_shader_field() {
        let seen = collect(&LightRig::new(&Camera::default()));
        // direction + 3 colors, 4 x (position + 3 colors + 3 terms), spot 2 + 3 + 3 + 2
        assert_eq!(seen.len(), 4 + 4 * 7 + 10);
        for i in 0..4 {
            assert!(seen.contains_key(&format!("pointLights[{i}].quadratic")));
        }
        assert_eq!(seen["dirLight.direction"], Some([-0.2, -1.0, -0.3]));
        assert_eq!(seen["pointLights[2].position"], Some([-4.0, 2.0, -12.0]));
        assert!(seen.contains_key("spotLight.outerCutOff"));
    }
}
