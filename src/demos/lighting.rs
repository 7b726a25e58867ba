use std::path::Path;

use glium::{backend::Facade, uniform, DrawParameters, Frame, Program, Surface};

use crate::{
    buffer::Mesh,
    camera::Camera,
    error::Error,
    frame::{draw_parameters, Demo, FrameContext},
    geometry::{Vertex, LIT_CUBE},
    lighting::{LightRig, LitUniforms, Material, SHININESS},
    scene, shader,
    texture::{Texture, TextureOptions},
};

pub const DIFFUSE_MAP: &str = "container2.png";
pub const SPECULAR_MAP: &str = "container2_specular.png";

/// Ten resting cubes shaded by the full light rig, plus a small lamp at each point light.
pub struct LightingDemo {
    mesh: Mesh<Vertex>,
    lit: Program,
    lamp: Program,
    material: Material,
    lights: LightRig,
    params: DrawParameters<'static>,
}

impl LightingDemo {
    pub fn new<F: Facade + ?Sized>(facade: &F, assets: &Path) -> Result<Self, Error> {
        let options = TextureOptions::mipmapped();
        let material = Material {
            diffuse: Texture::load_or_white(facade, &assets.join(DIFFUSE_MAP), options)?,
            specular: Texture::load_or_white(facade, &assets.join(SPECULAR_MAP), options)?,
            shininess: SHININESS,
        };
        Ok(Self {
            mesh: Mesh::upload(facade, &LIT_CUBE)?,
            lit: shader::lit(facade)?,
            lamp: shader::lamp(facade)?,
            material,
            lights: LightRig::new(&Camera::default()),
            params: draw_parameters(),
        })
    }
}

impl Demo for LightingDemo {
    fn clear_color(&self) -> (f32, f32, f32, f32) {
        (0.1, 0.1, 0.1, 1.0)
    }

    fn draw(&mut self, target: &mut Frame, frame: &FrameContext<'_>) -> Result<(), Error> {
        self.lights.follow(frame.camera);
        let view = frame.view();
        let projection = frame.projection();

        for model in scene::resting_cubes() {
            let uniforms = LitUniforms {
                model,
                view,
                projection,
                view_pos: frame.camera.position(),
                material: &self.material,
                lights: &self.lights,
            };
            target.draw(
                &self.mesh.vertices,
                self.mesh.indices,
                &self.lit,
                &uniforms,
                &self.params,
            )?;
        }

        // lamps share the cube buffer, reading positions only
        for model in scene::lamps() {
            let uniforms = uniform! {
                model: model.to_cols_array_2d(),
                view: view.to_cols_array_2d(),
                projection: projection.to_cols_array_2d(),
            };
            target.draw(
                &self.mesh.vertices,
                self.mesh.indices,
                &self.lamp,
                &uniforms,
                &self.params,
            )?;
        }
        Ok(())
    }
}
