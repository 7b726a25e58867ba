use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to create window: {0}")]
    Window(String),

    #[error("failed to build event loop")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to compile {name} shader program")]
    Shader {
        name: &'static str,
        #[source]
        source: glium::program::ProgramChooserCreationError,
    },

    #[error("failed to upload vertex data")]
    Buffer(#[from] glium::vertex::BufferCreationError),

    #[error("texture failed to load at path: {}", path.display())]
    Texture {
        path: PathBuf,
        #[source]
        source: TextureError,
    },

    #[error("draw call failed")]
    Draw(#[from] glium::DrawError),

    #[error("failed to swap buffers")]
    Swap(#[from] glium::SwapBuffersError),
}

#[derive(Debug, Error)]
pub enum TextureError {
    #[error(transparent)]
    Decode(#[from] image::ImageError),

    #[error(transparent)]
    Upload(#[from] glium::texture::TextureCreationError),
}
