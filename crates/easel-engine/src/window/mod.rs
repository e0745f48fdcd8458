//! Windows and the platform loop.
//!
//! [`Window`] is plain state the compositor can reason about without a
//! display. The runtime attaches a [`NativeWindow`] (winit window plus GPU
//! context) to each one and replays buffered [`WindowCommand`]s onto it.

mod native;
mod runtime;
mod state;

pub use native::NativeWindow;
pub use runtime::Runtime;
pub use state::{MonitorInfo, Window, WindowCommand, WindowConfig, WindowIndex};
