//! Rendering
//!
//! Frames are drawn on the CPU into a `Canvas`, then presented through wgpu
//! as one textured quad.

pub mod canvas;
pub mod pipeline;
pub mod scene;
pub mod text;
pub mod vertex;

pub use canvas::Canvas;
pub use pipeline::{GpuSurface, RenderError};
pub use scene::draw;
pub use text::{ScoreGlyphs, ScoreText};
