//! The two scenes: textured spinning cubes, and the same cubes lit by a light rig.

mod lighting;
mod triangle;

pub use lighting::LightingDemo;
pub use triangle::TriangleDemo;
