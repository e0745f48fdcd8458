//! Contracts between the runtime and game code.
//!
//! Games implement [`GameLoop`]; the runtime drives it once per frame and
//! never exposes winit or wgpu types through it.

mod game;

pub use game::{Control, EventHandler, GameLoop};
