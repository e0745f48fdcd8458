//! Input events.
//!
//! The public types here never expose winit. The runtime feeds raw window
//! events through a per-window [`InputTracker`] to produce [`Event`]s.

mod event;
pub(crate) mod platform;
mod tracker;
mod types;

pub use event::Event;
pub use tracker::InputTracker;
pub use types::{Key, Modifiers, MouseButton};
