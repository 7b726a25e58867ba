//! Textured, lit cube demos on top of glium.
//!
//! The library holds everything the `triangle` and `lighting` binaries share: the
//! windowed render loop, a first-person camera, texture loading, the light rig and
//! the GLSL programs. Only [`app::run`] needs a GL context; the camera, input,
//! lighting and placement math can be used on their own.
#![warn(clippy::pedantic)]

pub mod app;
pub mod buffer;
pub mod camera;
pub mod config;
pub mod conversion;
pub mod demos;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod input;
pub mod lighting;
pub mod scene;
pub mod shader;
pub mod texture;

pub use camera::{Camera, Movement};
pub use config::Settings;
pub use error::{Error, Result};
pub use frame::{Demo, FrameClock, FrameContext, FrameTime};
pub use input::InputState;
pub use lighting::{Attenuation, LightRig, SpotLight};
