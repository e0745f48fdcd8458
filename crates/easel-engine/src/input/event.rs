use crate::window::WindowIndex;

use super::{Key, Modifiers, MouseButton};

/// Everything the runtime reports to a game, already detached from winit.
///
/// Pointer coordinates are logical pixels from the window's top-left.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    KeyDown {
        key: Key,
        modifiers: Modifiers,
        /// Platform key code, stable across layouts.
        scancode: u32,
        repeat: bool,
    },
    KeyUp {
        key: Key,
        modifiers: Modifiers,
        scancode: u32,
        repeat: bool,
    },

    MouseMove {
        x: f32,
        y: f32,
        /// Motion since the previous move event.
        dx: f32,
        dy: f32,
        left: bool,
        right: bool,
        middle: bool,
    },
    MouseButtonDown {
        button: MouseButton,
        x: f32,
        y: f32,
    },
    MouseButtonUp {
        button: MouseButton,
        x: f32,
        y: f32,
    },
    MouseWheel {
        up: bool,
        down: bool,
    },

    /// Keyboard focus gained.
    InputFocus,
    InputBlur,
    /// Pointer entered the window.
    MouseFocus,
    MouseBlur,

    /// Logical size after the platform resized a window. By the time this is
    /// delivered the registry and its cameras already reflect it.
    Resize {
        window: WindowIndex,
        width: u32,
        height: u32,
    },
    Minimize,
    Restore,
    Expose,

    /// The last window was closed.
    Exit,
}
