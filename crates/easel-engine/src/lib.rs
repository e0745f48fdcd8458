//! easel: a small 2D engine.
//!
//! Surfaces (textured quads) live in numbered world-spaces; cameras look into
//! one world-space each and draw into a rectangle of a window. Everything is
//! owned by a [`Graphics`](compositor::Graphics) registry that the
//! [`Runtime`](window::Runtime) drives once per frame.

pub mod camera;
pub mod compositor;
pub mod coords;
pub mod core;
pub mod device;
pub mod error;
pub mod input;
pub mod logging;
pub mod render;
pub mod surface;
pub mod window;

pub use compositor::Graphics;
pub use error::{GraphicsError, Result};
