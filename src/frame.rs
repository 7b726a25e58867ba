use std::time::Instant;

use glam::Mat4;
use glium::{DrawParameters, Frame};

use crate::{camera::Camera, error::Error};

/// Depth-tested, opaque triangles.
pub fn draw_parameters() -> DrawParameters<'static> {
    DrawParameters {
        depth: glium::Depth {
            test: glium::DepthTest::IfLess,
            write: true,
            ..Default::default()
        },
        ..Default::default()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    /// Seconds since the previous frame; scales movement so speed is frame-rate independent.
    pub delta: f32,
    /// Seconds since the clock started.
    pub elapsed: f32,
}

pub struct FrameClock {
    start: Instant,
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(now: Instant) -> Self {
        Self {
            start: now,
            last: now,
        }
    }

    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let delta = now.saturating_duration_since(self.last).as_secs_f32();
        self.last = now;
        FrameTime {
            delta,
            elapsed: now.saturating_duration_since(self.start).as_secs_f32(),
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-frame state handed to a [`Demo`].
pub struct FrameContext<'a> {
    pub camera: &'a Camera,
    pub time: FrameTime,
    pub aspect: f32,
}

impl FrameContext<'_> {
    pub fn view(&self) -> Mat4 {
        self.camera.view_matrix()
    }

    pub fn projection(&self) -> Mat4 {
        self.camera.projection_matrix(self.aspect)
    }
}

/// One of the demo scenes. GPU resources are created up front and only
/// uniforms change between frames.
pub trait Demo {
    fn clear_color(&self) -> (f32, f32, f32, f32);

    fn draw(&mut self, target: &mut Frame, frame: &FrameContext<'_>) -> Result<(), Error>;
}
