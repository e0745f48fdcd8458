//! Frame composition.
//!
//! [`Graphics`] owns everything a frame is built from. Each frame:
//! - `update` advances scrolling cameras
//! - `plan` resolves cameras against the sorted surface list into a [`DrawPlan`]
//! - `draw` hands each window's passes to its native renderer
//! - `flip` presents

mod graphics;
mod plan;

pub use graphics::Graphics;
pub use plan::{project, CameraPass, DrawPlan, SpriteQuad, WindowPlan};
