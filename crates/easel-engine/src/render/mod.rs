//! GPU side of the frame.
//!
//! Renderers consume the [`DrawPlan`](crate::compositor::DrawPlan) passes and
//! own every GPU resource they create (pipelines, buffers, uploaded textures).
//!
//! Convention:
//! - quad corners arrive in camera resolution units (top-left origin, +Y down)
//! - the vertex shader maps them to NDC using the pass resolution
//! - each pass is clipped to its camera viewport

mod common;
mod ctx;
mod sprite;

pub use ctx::{RenderCtx, RenderTarget};
pub use sprite::SpriteRenderer;
