use std::collections::HashSet;

use super::{Event, Key, Modifiers, MouseButton};

/// Per-window input bookkeeping needed to build [`Event`]s.
///
/// winit reports deltas and button state piecemeal; this keeps enough history
/// to fill in pointer motion, held buttons and current modifiers.
#[derive(Debug, Default)]
pub struct InputTracker {
    pub modifiers: Modifiers,
    /// Logical pixels. `None` while the pointer is outside the window.
    pub pointer: Option<(f32, f32)>,
    pub buttons_down: HashSet<MouseButton>,
}

impl InputTracker {
    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
    }

    pub fn key(&self, key: Key, scancode: u32, pressed: bool, repeat: bool) -> Event {
        let modifiers = self.modifiers;
        if pressed {
            Event::KeyDown { key, modifiers, scancode, repeat }
        } else {
            Event::KeyUp { key, modifiers, scancode, repeat }
        }
    }

    /// The first move after entering reports zero motion.
    pub fn pointer_moved(&mut self, x: f32, y: f32) -> Event {
        let (px, py) = self.pointer.unwrap_or((x, y));
        self.pointer = Some((x, y));
        Event::MouseMove {
            x,
            y,
            dx: x - px,
            dy: y - py,
            left: self.buttons_down.contains(&MouseButton::Left),
            right: self.buttons_down.contains(&MouseButton::Right),
            middle: self.buttons_down.contains(&MouseButton::Middle),
        }
    }

    pub fn button(&mut self, button: MouseButton, pressed: bool) -> Event {
        let (x, y) = self.pointer.unwrap_or((0.0, 0.0));
        if pressed {
            self.buttons_down.insert(button);
            Event::MouseButtonDown { button, x, y }
        } else {
            self.buttons_down.remove(&button);
            Event::MouseButtonUp { button, x, y }
        }
    }

    /// Vertical wheel motion; positive is away from the user.
    pub fn wheel(&self, dy: f32) -> Option<Event> {
        if dy == 0.0 {
            return None;
        }
        Some(Event::MouseWheel { up: dy > 0.0, down: dy < 0.0 })
    }

    /// Losing focus drops held buttons so none stay stuck.
    pub fn focus(&mut self, focused: bool) -> Event {
        if focused {
            Event::InputFocus
        } else {
            self.buttons_down.clear();
            self.modifiers = Modifiers::default();
            Event::InputBlur
        }
    }

    pub fn pointer_entered(&mut self) -> Event {
        Event::MouseFocus
    }

    pub fn pointer_left(&mut self) -> Event {
        self.pointer = None;
        Event::MouseBlur
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_reports_delta_from_previous_position() {
        let mut t = InputTracker::default();
        assert!(matches!(t.pointer_moved(10.0, 10.0), Event::MouseMove { dx, dy, .. } if dx == 0.0 && dy == 0.0));
        assert_eq!(
            t.pointer_moved(13.0, 6.0),
            Event::MouseMove {
                x: 13.0,
                y: 6.0,
                dx: 3.0,
                dy: -4.0,
                left: false,
                right: false,
                middle: false,
            }
        );
    }

    #[test]
    fn held_buttons_show_in_move_events() {
        let mut t = InputTracker::default();
        t.pointer_moved(1.0, 2.0);
        assert_eq!(
            t.button(MouseButton::Left, true),
            Event::MouseButtonDown { button: MouseButton::Left, x: 1.0, y: 2.0 }
        );
        assert!(matches!(t.pointer_moved(2.0, 2.0), Event::MouseMove { left: true, right: false, .. }));

        t.button(MouseButton::Left, false);
        assert!(matches!(t.pointer_moved(3.0, 2.0), Event::MouseMove { left: false, .. }));
    }

    #[test]
    fn blur_releases_buttons_and_modifiers() {
        let mut t = InputTracker::default();
        t.set_modifiers(Modifiers { shift: true, ..Modifiers::default() });
        t.button(MouseButton::Right, true);

        assert_eq!(t.focus(false), Event::InputBlur);
        assert!(t.buttons_down.is_empty());
        assert!(!t.modifiers.any());
    }

    #[test]
    fn wheel_direction() {
        let t = InputTracker::default();
        assert_eq!(t.wheel(1.0), Some(Event::MouseWheel { up: true, down: false }));
        assert_eq!(t.wheel(-0.5), Some(Event::MouseWheel { up: false, down: true }));
        assert_eq!(t.wheel(0.0), None);
    }

    #[test]
    fn keys_carry_current_modifiers() {
        let mut t = InputTracker::default();
        t.set_modifiers(Modifiers { ctrl: true, ..Modifiers::default() });
        assert_eq!(
            t.key(Key::S, 31, true, false),
            Event::KeyDown {
                key: Key::S,
                modifiers: Modifiers { ctrl: true, ..Modifiers::default() },
                scancode: 31,
                repeat: false,
            }
        );
    }

    #[test]
    fn leaving_forgets_pointer() {
        let mut t = InputTracker::default();
        t.pointer_moved(5.0, 5.0);
        assert_eq!(t.pointer_left(), Event::MouseBlur);
        assert!(matches!(t.pointer_moved(9.0, 9.0), Event::MouseMove { dx, .. } if dx == 0.0));
    }
}
