use std::path::Path;

use glium::{backend::Facade, uniform, DrawParameters, Frame, Program, Surface};

use crate::{
    buffer::Mesh,
    error::Error,
    frame::{draw_parameters, Demo, FrameContext},
    geometry::{ColoredVertex, COLORED_CUBE},
    scene, shader,
    texture::{Texture, TextureOptions},
};

pub const CONTAINER: &str = "container.jpg";
pub const FACE: &str = "awesomeface.png";

/// Ten textured cubes, each spinning about the same axis at its own rate.
pub struct TriangleDemo {
    mesh: Mesh<ColoredVertex>,
    program: Program,
    container: Texture,
    face: Texture,
    params: DrawParameters<'static>,
}

impl TriangleDemo {
    pub fn new<F: Facade + ?Sized>(facade: &F, assets: &Path) -> Result<Self, Error> {
        let options = TextureOptions::linear();
        Ok(Self {
            mesh: Mesh::upload(facade, &COLORED_CUBE)?,
            program: shader::textured(facade)?,
            container: Texture::load_or_white(facade, &assets.join(CONTAINER), options)?,
            face: Texture::load_or_white(facade, &assets.join(FACE), options)?,
            params: draw_parameters(),
        })
    }
}

impl Demo for TriangleDemo {
    fn clear_color(&self) -> (f32, f32, f32, f32) {
        (0.2, 0.3, 0.3, 1.0)
    }

    fn draw(&mut self, target: &mut Frame, frame: &FrameContext<'_>) -> Result<(), Error> {
        let view = frame.view().to_cols_array_2d();
        let projection = frame.projection().to_cols_array_2d();

        for model in scene::spinning_cubes(frame.time.elapsed) {
            let uniforms = uniform! {
                model: model.to_cols_array_2d(),
                view: view,
                projection: projection,
                texture1: self.container.sampled(),
                texture2: self.face.sampled(),
            };
            target.draw(
                &self.mesh.vertices,
                self.mesh.indices,
                &self.program,
                &uniforms,
                &self.params,
            )?;
        }
        Ok(())
    }
}
