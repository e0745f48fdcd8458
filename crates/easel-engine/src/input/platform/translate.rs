use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton as WinitMouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};
use winit::window::Window;

use crate::input::{Event, InputTracker, Key, Modifiers, MouseButton};

/// Turns a winit window event into an [`Event`], updating `tracker`.
///
/// Resizes and close requests are not translated here; the runtime handles
/// them because they touch the registry first.
pub(crate) fn translate_window_event(
    window: &Window,
    tracker: &mut InputTracker,
    event: &WindowEvent,
) -> Option<Event> {
    match event {
        WindowEvent::ModifiersChanged(m) => {
            tracker.set_modifiers(map_modifiers(m.state()));
            None
        }

        WindowEvent::Focused(focused) => Some(tracker.focus(*focused)),
        WindowEvent::CursorEntered { .. } => Some(tracker.pointer_entered()),
        WindowEvent::CursorLeft { .. } => Some(tracker.pointer_left()),

        WindowEvent::CursorMoved { position, .. } => {
            let (x, y) = to_logical(window, *position);
            Some(tracker.pointer_moved(x, y))
        }

        WindowEvent::MouseInput { state, button, .. } => {
            Some(tracker.button(map_mouse_button(*button), *state == ElementState::Pressed))
        }

        WindowEvent::MouseWheel { delta, .. } => {
            let dy = match delta {
                MouseScrollDelta::LineDelta(_, y) => *y,
                MouseScrollDelta::PixelDelta(p) => p.y as f32,
            };
            tracker.wheel(dy)
        }

        WindowEvent::KeyboardInput { event, .. } => {
            let (key, scancode) = map_key(event.physical_key);
            Some(tracker.key(key, scancode, event.state == ElementState::Pressed, event.repeat))
        }

        WindowEvent::Occluded(true) => Some(Event::Minimize),
        WindowEvent::Occluded(false) => Some(Event::Restore),
        WindowEvent::RedrawRequested => Some(Event::Expose),

        _ => None,
    }
}

fn to_logical(window: &Window, pos: PhysicalPosition<f64>) -> (f32, f32) {
    let logical = pos.to_logical::<f64>(window.scale_factor());
    (logical.x as f32, logical.y as f32)
}

fn map_modifiers(m: ModifiersState) -> Modifiers {
    Modifiers {
        shift: m.shift_key(),
        ctrl: m.control_key(),
        alt: m.alt_key(),
        meta: m.super_key(),
    }
}

fn map_mouse_button(b: WinitMouseButton) -> MouseButton {
    match b {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Back,
        WinitMouseButton::Forward => MouseButton::Forward,
        WinitMouseButton::Other(v) => MouseButton::Other(v),
    }
}

/// Key plus a platform code that survives layout changes.
fn map_key(pk: PhysicalKey) -> (Key, u32) {
    match pk {
        PhysicalKey::Code(code) => {
            let key = match code {
                KeyCode::Escape => Key::Escape,
                KeyCode::Enter => Key::Enter,
                KeyCode::Tab => Key::Tab,
                KeyCode::Backspace => Key::Backspace,
                KeyCode::Space => Key::Space,

                KeyCode::Insert => Key::Insert,
                KeyCode::Delete => Key::Delete,
                KeyCode::Home => Key::Home,
                KeyCode::End => Key::End,
                KeyCode::PageUp => Key::PageUp,
                KeyCode::PageDown => Key::PageDown,

                KeyCode::ArrowUp => Key::ArrowUp,
                KeyCode::ArrowDown => Key::ArrowDown,
                KeyCode::ArrowLeft => Key::ArrowLeft,
                KeyCode::ArrowRight => Key::ArrowRight,

                KeyCode::ShiftLeft | KeyCode::ShiftRight => Key::Shift,
                KeyCode::ControlLeft | KeyCode::ControlRight => Key::Control,
                KeyCode::AltLeft | KeyCode::AltRight => Key::Alt,
                KeyCode::SuperLeft | KeyCode::SuperRight => Key::Meta,

                KeyCode::KeyA => Key::A,
                KeyCode::KeyB => Key::B,
                KeyCode::KeyC => Key::C,
                KeyCode::KeyD => Key::D,
                KeyCode::KeyE => Key::E,
                KeyCode::KeyF => Key::F,
                KeyCode::KeyG => Key::G,
                KeyCode::KeyH => Key::H,
                KeyCode::KeyI => Key::I,
                KeyCode::KeyJ => Key::J,
                KeyCode::KeyK => Key::K,
                KeyCode::KeyL => Key::L,
                KeyCode::KeyM => Key::M,
                KeyCode::KeyN => Key::N,
                KeyCode::KeyO => Key::O,
                KeyCode::KeyP => Key::P,
                KeyCode::KeyQ => Key::Q,
                KeyCode::KeyR => Key::R,
                KeyCode::KeyS => Key::S,
                KeyCode::KeyT => Key::T,
                KeyCode::KeyU => Key::U,
                KeyCode::KeyV => Key::V,
                KeyCode::KeyW => Key::W,
                KeyCode::KeyX => Key::X,
                KeyCode::KeyY => Key::Y,
                KeyCode::KeyZ => Key::Z,

                KeyCode::Digit0 => Key::Digit0,
                KeyCode::Digit1 => Key::Digit1,
                KeyCode::Digit2 => Key::Digit2,
                KeyCode::Digit3 => Key::Digit3,
                KeyCode::Digit4 => Key::Digit4,
                KeyCode::Digit5 => Key::Digit5,
                KeyCode::Digit6 => Key::Digit6,
                KeyCode::Digit7 => Key::Digit7,
                KeyCode::Digit8 => Key::Digit8,
                KeyCode::Digit9 => Key::Digit9,

                KeyCode::F1 => Key::F1,
                KeyCode::F2 => Key::F2,
                KeyCode::F3 => Key::F3,
                KeyCode::F4 => Key::F4,
                KeyCode::F5 => Key::F5,
                KeyCode::F6 => Key::F6,
                KeyCode::F7 => Key::F7,
                KeyCode::F8 => Key::F8,
                KeyCode::F9 => Key::F9,
                KeyCode::F10 => Key::F10,
                KeyCode::F11 => Key::F11,
                KeyCode::F12 => Key::F12,

                other => Key::Unknown(other as u32),
            };

            (key, code as u32)
        }

        PhysicalKey::Unidentified(_) => (Key::Unknown(0), 0),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_function_keys_map() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::ArrowLeft)).0, Key::ArrowLeft);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::F11)).0, Key::F11);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::ShiftRight)).0, Key::Shift);
    }

    #[test]
    fn unmapped_code_keeps_platform_code() {
        let (key, code) = map_key(PhysicalKey::Code(KeyCode::NumpadAdd));
        assert_eq!(key, Key::Unknown(code));
    }

    #[test]
    fn modifier_state_maps_each_flag() {
        let m = map_modifiers(ModifiersState::SHIFT | ModifiersState::SUPER);
        assert_eq!(m, Modifiers { shift: true, meta: true, ..Modifiers::default() });
    }

    #[test]
    fn mouse_buttons_map() {
        assert_eq!(map_mouse_button(WinitMouseButton::Middle), MouseButton::Middle);
        assert_eq!(map_mouse_button(WinitMouseButton::Other(9)), MouseButton::Other(9));
    }
}
