use crate::coords::{Point2, Size2};

use super::native::NativeWindow;

/// Position of a window in the [`Graphics`](crate::compositor::Graphics) window list.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct WindowIndex(pub usize);

/// A display as reported by the platform.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorInfo {
    pub name: Option<String>,
    /// Logical size of the monitor's current video mode.
    pub size: Size2<u32>,
}

/// Parameters for [`Graphics::new_window`](crate::compositor::Graphics::new_window).
#[derive(Debug, Clone)]
pub struct WindowConfig {
    /// Internal render resolution cameras are derived from.
    pub resolution: Size2<u32>,
    pub fullscreen: bool,
    /// Logical width and height.
    pub dimensions: Size2<u32>,
    pub title: String,
    pub monitor: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            resolution: Size2::new(1600, 900),
            fullscreen: false,
            dimensions: Size2::new(1600, 900),
            title: "New Window".to_string(),
            monitor: 0,
        }
    }
}

/// Changes the runtime still has to apply to the platform window.
#[derive(Debug, Clone, PartialEq)]
pub enum WindowCommand {
    Resize { dimensions: Size2<u32>, monitor: usize },
    Rename(String),
    SetFullscreen { fullscreen: bool, monitor: usize },
}

/// One output window.
///
/// Holds the logical metrics the compositor works with. The platform side
/// (winit window + GPU context) is attached by the runtime once the event
/// loop is live; until then every mutator only updates metrics and records a
/// [`WindowCommand`].
pub struct Window {
    title: String,
    dimensions: Size2<u32>,
    /// Last windowed-mode size, restored when leaving fullscreen.
    non_fullscreen: Size2<u32>,
    resolution: Size2<u32>,

    viewport: Size2<u32>,
    view_offset: Point2<u32>,

    fullscreen: bool,
    monitor: usize,
    monitors: Vec<MonitorInfo>,

    pending: Vec<WindowCommand>,
    native: Option<NativeWindow>,
}

impl Window {
    pub fn new(config: WindowConfig) -> Self {
        let mut window = Self {
            title: config.title,
            dimensions: config.dimensions,
            non_fullscreen: config.dimensions,
            resolution: config.resolution,
            viewport: Size2::default(),
            view_offset: Point2::default(),
            fullscreen: config.fullscreen,
            monitor: config.monitor,
            monitors: Vec::new(),
            pending: Vec::new(),
            native: None,
        };
        window.update_viewport();
        window
    }

    /// Sets a new logical size and target monitor.
    ///
    /// An empty size is refused and `false` returned. The monitor index is
    /// not validated here; the runtime ignores indices the platform does not
    /// know about.
    pub fn resize(&mut self, dimensions: Size2<u32>, monitor: usize) -> bool {
        if dimensions.is_empty() {
            return false;
        }
        self.dimensions = dimensions;
        self.monitor = monitor;
        if !self.fullscreen {
            self.non_fullscreen = dimensions;
        }
        self.update_viewport();
        self.pending.push(WindowCommand::Resize { dimensions, monitor });
        true
    }

    pub fn rename(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.pending.push(WindowCommand::Rename(self.title.clone()));
    }

    /// Flips fullscreen. Leaving fullscreen restores the last windowed size.
    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;

        if self.fullscreen {
            self.non_fullscreen = self.dimensions;
            if let Some(m) = self.monitors.get(self.monitor) {
                if !m.size.is_empty() {
                    self.dimensions = m.size;
                }
            }
        } else {
            self.dimensions = self.non_fullscreen;
        }

        self.update_viewport();
        self.pending.push(WindowCommand::SetFullscreen {
            fullscreen: self.fullscreen,
            monitor: self.monitor,
        });
    }

    /// Records a size change that originated from the platform.
    ///
    /// Returns `false` when the size did not change.
    pub fn apply_os_resize(&mut self, dimensions: Size2<u32>) -> bool {
        if dimensions == self.dimensions || dimensions.is_empty() {
            return false;
        }
        self.dimensions = dimensions;
        if !self.fullscreen {
            self.non_fullscreen = dimensions;
        }
        self.update_viewport();
        true
    }

    /// Presents the frame recorded by the last draw pass, if any.
    pub fn flip(&mut self) {
        if let Some(native) = self.native.as_mut() {
            native.present();
        }
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn dimensions(&self) -> Size2<u32> {
        self.dimensions
    }

    #[inline]
    pub fn non_fullscreen(&self) -> Size2<u32> {
        self.non_fullscreen
    }

    #[inline]
    pub fn resolution(&self) -> Size2<u32> {
        self.resolution
    }

    /// Size of the area `resolution` maps onto at its own aspect ratio.
    ///
    /// Informational, for games that want to letterbox their own cameras.
    /// Camera rectangles are placed against the whole window and the
    /// compositor does not read this.
    #[inline]
    pub fn viewport(&self) -> Size2<u32> {
        self.viewport
    }

    /// Top-left of the letterboxed viewport inside the window.
    #[inline]
    pub fn view_offset(&self) -> Point2<u32> {
        self.view_offset
    }

    #[inline]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    #[inline]
    pub fn monitor(&self) -> usize {
        self.monitor
    }

    #[inline]
    pub fn monitors(&self) -> &[MonitorInfo] {
        &self.monitors
    }

    pub fn set_monitors(&mut self, monitors: Vec<MonitorInfo>) {
        self.monitors = monitors;
    }

    #[inline]
    pub fn native(&self) -> Option<&NativeWindow> {
        self.native.as_ref()
    }

    #[inline]
    pub fn native_mut(&mut self) -> Option<&mut NativeWindow> {
        self.native.as_mut()
    }

    pub(crate) fn attach_native(&mut self, native: NativeWindow) {
        self.native = Some(native);
    }

    pub(crate) fn detach_native(&mut self) -> Option<NativeWindow> {
        self.native.take()
    }

    pub(crate) fn take_commands(&mut self) -> Vec<WindowCommand> {
        std::mem::take(&mut self.pending)
    }

    fn update_viewport(&mut self) {
        let (viewport, offset) = letterbox(self.dimensions, self.resolution);
        self.viewport = viewport;
        self.view_offset = offset;
    }
}

impl std::fmt::Debug for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("title", &self.title)
            .field("dimensions", &self.dimensions)
            .field("resolution", &self.resolution)
            .field("fullscreen", &self.fullscreen)
            .field("monitor", &self.monitor)
            .field("native", &self.native.is_some())
            .finish()
    }
}

/// Largest rectangle with the aspect ratio of `resolution` that fits in
/// `dimensions`, centered.
fn letterbox(dimensions: Size2<u32>, resolution: Size2<u32>) -> (Size2<u32>, Point2<u32>) {
    if resolution.is_empty() || dimensions.is_empty() {
        return (dimensions, Point2::default());
    }

    let d = dimensions.as_f32();
    let r = resolution.as_f32();
    let scale = (d.w / r.w).min(d.h / r.h);
    let viewport = Size2::new(r.w * scale, r.h * scale)
        .round_u32();
    let viewport = Size2::new(viewport.w.min(dimensions.w), viewport.h.min(dimensions.h));

    let offset = Point2::new(
        (dimensions.w - viewport.w) / 2,
        (dimensions.h - viewport.h) / 2,
    );
    (viewport, offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(dims: (u32, u32), res: (u32, u32)) -> Window {
        Window::new(WindowConfig {
            resolution: Size2::new(res.0, res.1),
            dimensions: Size2::new(dims.0, dims.1),
            ..WindowConfig::default()
        })
    }

    #[test]
    fn config_defaults() {
        let c = WindowConfig::default();
        assert_eq!(c.title, "New Window");
        assert_eq!(c.monitor, 0);
        assert!(!c.fullscreen);
    }

    #[test]
    fn matching_aspect_fills_window() {
        let w = window((1600, 900), (1600, 900));
        assert_eq!(w.viewport(), Size2::new(1600, 900));
        assert_eq!(w.view_offset(), Point2::new(0, 0));
    }

    #[test]
    fn wider_window_is_pillarboxed() {
        let w = window((2000, 900), (1600, 900));
        assert_eq!(w.viewport(), Size2::new(1600, 900));
        assert_eq!(w.view_offset(), Point2::new(200, 0));
    }

    #[test]
    fn resize_updates_windowed_size_and_records_command() {
        let mut w = window((800, 600), (800, 600));
        w.resize(Size2::new(1024, 768), 1);
        assert_eq!(w.dimensions(), Size2::new(1024, 768));
        assert_eq!(w.non_fullscreen(), Size2::new(1024, 768));
        assert_eq!(w.monitor(), 1);
        assert_eq!(
            w.take_commands(),
            vec![WindowCommand::Resize { dimensions: Size2::new(1024, 768), monitor: 1 }]
        );
        assert!(w.take_commands().is_empty());
    }

    #[test]
    fn leaving_fullscreen_restores_windowed_size() {
        let mut w = window((800, 600), (800, 600));
        w.set_monitors(vec![MonitorInfo { name: None, size: Size2::new(1920, 1080) }]);

        w.toggle_fullscreen();
        assert!(w.is_fullscreen());
        assert_eq!(w.dimensions(), Size2::new(1920, 1080));
        assert_eq!(w.non_fullscreen(), Size2::new(800, 600));

        // Platform confirms the new size; windowed size must not follow it.
        assert!(!w.apply_os_resize(Size2::new(1920, 1080)));
        w.resize(Size2::new(1280, 1024), 0);
        assert_eq!(w.non_fullscreen(), Size2::new(800, 600));

        w.toggle_fullscreen();
        assert!(!w.is_fullscreen());
        assert_eq!(w.dimensions(), Size2::new(800, 600));
    }

    #[test]
    fn fullscreen_without_monitor_info_keeps_size() {
        let mut w = window((800, 600), (800, 600));
        w.toggle_fullscreen();
        assert_eq!(w.dimensions(), Size2::new(800, 600));
    }

    #[test]
    fn os_resize_ignores_minimized_size() {
        let mut w = window((800, 600), (800, 600));
        assert!(!w.apply_os_resize(Size2::new(0, 0)));
        assert!(w.apply_os_resize(Size2::new(640, 480)));
        assert_eq!(w.non_fullscreen(), Size2::new(640, 480));
        assert!(w.take_commands().is_empty());
    }

    #[test]
    fn empty_resize_is_refused() {
        let mut w = window((800, 600), (800, 600));
        assert!(!w.resize(Size2::new(0, 0), 0));
        assert!(!w.resize(Size2::new(640, 0), 0));
        assert_eq!(w.dimensions(), Size2::new(800, 600));
        assert_eq!(w.non_fullscreen(), Size2::new(800, 600));
        assert!(w.take_commands().is_empty());
    }

    #[test]
    fn rename_records_command() {
        let mut w = window((800, 600), (800, 600));
        w.rename("Level 2");
        assert_eq!(w.title(), "Level 2");
        assert_eq!(w.take_commands(), vec![WindowCommand::Rename("Level 2".into())]);
    }
}
