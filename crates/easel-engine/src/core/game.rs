use crate::compositor::Graphics;
use crate::input::{Event, Key, Modifiers, MouseButton};
use crate::window::WindowIndex;

/// Returned by game callbacks.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Control {
    #[default]
    Continue,
    Exit,
}

impl Control {
    /// `Exit` wins.
    #[inline]
    pub fn and(self, other: Control) -> Control {
        if self == Control::Exit { self } else { other }
    }
}

/// Per-kind event callbacks.
///
/// Override only what you need. `on_event` dispatches to the per-kind methods
/// and can itself be overridden to see every event first.
#[allow(unused_variables)]
pub trait EventHandler {
    fn on_event(&mut self, gfx: &mut Graphics, event: &Event) -> Control {
        match *event {
            Event::KeyDown { key, modifiers, scancode, repeat } => {
                self.on_key_down(gfx, key, modifiers, scancode, repeat)
            }
            Event::KeyUp { key, modifiers, scancode, .. } => {
                self.on_key_up(gfx, key, modifiers, scancode)
            }
            Event::MouseMove { x, y, dx, dy, left, right, middle } => {
                self.on_mouse_move(gfx, x, y, dx, dy, [left, right, middle])
            }
            Event::MouseButtonDown { button, x, y } => self.on_mouse_button_down(gfx, button, x, y),
            Event::MouseButtonUp { button, x, y } => self.on_mouse_button_up(gfx, button, x, y),
            Event::MouseWheel { up, down } => self.on_mouse_wheel(gfx, up, down),
            Event::InputFocus => self.on_input_focus(gfx),
            Event::InputBlur => self.on_input_blur(gfx),
            Event::MouseFocus => self.on_mouse_focus(gfx),
            Event::MouseBlur => self.on_mouse_blur(gfx),
            Event::Resize { window, width, height } => self.on_resize(gfx, window, width, height),
            Event::Minimize => self.on_minimize(gfx),
            Event::Restore => self.on_restore(gfx),
            Event::Expose => self.on_expose(gfx),
            Event::Exit => self.on_exit(gfx),
        }
    }

    fn on_key_down(
        &mut self,
        gfx: &mut Graphics,
        key: Key,
        modifiers: Modifiers,
        scancode: u32,
        repeat: bool,
    ) -> Control {
        Control::Continue
    }

    fn on_key_up(&mut self, gfx: &mut Graphics, key: Key, modifiers: Modifiers, scancode: u32) -> Control {
        Control::Continue
    }

    /// `buttons` is `[left, right, middle]`.
    fn on_mouse_move(
        &mut self,
        gfx: &mut Graphics,
        x: f32,
        y: f32,
        dx: f32,
        dy: f32,
        buttons: [bool; 3],
    ) -> Control {
        Control::Continue
    }

    fn on_mouse_button_down(&mut self, gfx: &mut Graphics, button: MouseButton, x: f32, y: f32) -> Control {
        Control::Continue
    }

    fn on_mouse_button_up(&mut self, gfx: &mut Graphics, button: MouseButton, x: f32, y: f32) -> Control {
        Control::Continue
    }

    fn on_mouse_wheel(&mut self, gfx: &mut Graphics, up: bool, down: bool) -> Control {
        Control::Continue
    }

    fn on_input_focus(&mut self, gfx: &mut Graphics) -> Control {
        Control::Continue
    }

    fn on_input_blur(&mut self, gfx: &mut Graphics) -> Control {
        Control::Continue
    }

    fn on_mouse_focus(&mut self, gfx: &mut Graphics) -> Control {
        Control::Continue
    }

    fn on_mouse_blur(&mut self, gfx: &mut Graphics) -> Control {
        Control::Continue
    }

    fn on_resize(&mut self, gfx: &mut Graphics, window: WindowIndex, width: u32, height: u32) -> Control {
        Control::Continue
    }

    fn on_minimize(&mut self, gfx: &mut Graphics) -> Control {
        Control::Continue
    }

    fn on_restore(&mut self, gfx: &mut Graphics) -> Control {
        Control::Continue
    }

    fn on_expose(&mut self, gfx: &mut Graphics) -> Control {
        Control::Continue
    }

    /// The last window closed. Returning `Continue` does not keep the
    /// session alive; there is nothing left to draw into.
    fn on_exit(&mut self, gfx: &mut Graphics) -> Control {
        Control::Exit
    }
}

/// A game driven by [`Runtime`](crate::window::Runtime).
///
/// Per frame, after all pending events went through `on_event`:
/// `update` → `Graphics::update` → `late_update` → `draw` → `Graphics::draw`
/// → `Graphics::flip`.
#[allow(unused_variables)]
pub trait GameLoop: EventHandler {
    fn update(&mut self, gfx: &mut Graphics) -> Control {
        Control::Continue
    }

    /// Runs after cameras have scrolled; the place to pin things to them.
    fn late_update(&mut self, gfx: &mut Graphics) -> Control {
        Control::Continue
    }

    /// Last chance to touch surfaces before the frame is planned.
    fn draw(&mut self, gfx: &mut Graphics) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        keys: Vec<Key>,
        wheel: Vec<(bool, bool)>,
    }

    impl EventHandler for Recorder {
        fn on_key_down(&mut self, _: &mut Graphics, key: Key, _: Modifiers, _: u32, _: bool) -> Control {
            self.keys.push(key);
            if key == Key::Escape { Control::Exit } else { Control::Continue }
        }

        fn on_mouse_wheel(&mut self, _: &mut Graphics, up: bool, down: bool) -> Control {
            self.wheel.push((up, down));
            Control::Continue
        }
    }

    fn key_down(key: Key) -> Event {
        Event::KeyDown { key, modifiers: Modifiers::default(), scancode: 0, repeat: false }
    }

    #[test]
    fn dispatches_to_overridden_methods() {
        let mut gfx = Graphics::new();
        let mut r = Recorder::default();

        assert_eq!(r.on_event(&mut gfx, &key_down(Key::A)), Control::Continue);
        assert_eq!(r.on_event(&mut gfx, &Event::MouseWheel { up: true, down: false }), Control::Continue);
        assert_eq!(r.on_event(&mut gfx, &key_down(Key::Escape)), Control::Exit);

        assert_eq!(r.keys, vec![Key::A, Key::Escape]);
        assert_eq!(r.wheel, vec![(true, false)]);
    }

    #[test]
    fn unhandled_events_continue_except_exit() {
        let mut gfx = Graphics::new();
        let mut r = Recorder::default();

        for e in [Event::InputBlur, Event::Minimize, Event::Expose, Event::MouseFocus] {
            assert_eq!(r.on_event(&mut gfx, &e), Control::Continue);
        }
        assert_eq!(r.on_event(&mut gfx, &Event::Exit), Control::Exit);
    }

    #[test]
    fn exit_is_sticky() {
        assert_eq!(Control::Exit.and(Control::Continue), Control::Exit);
        assert_eq!(Control::Continue.and(Control::Exit), Control::Exit);
        assert_eq!(Control::Continue.and(Control::Continue), Control::Continue);
    }
}
