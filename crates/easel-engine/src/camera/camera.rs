use crate::coords::{AngularVel, Point2, Rect, Size2};
use crate::error::Result;
use crate::window::{Window, WindowIndex};

use super::{AnchorId, Anchors};

/// Position of a camera in the [`Graphics`](crate::compositor::Graphics) camera list.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct CameraIndex(pub usize);

/// Every field a camera needs. There is no default: a camera without a
/// window, world-space and placement has nothing to render.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraParts {
    /// Bottom-left of the viewport, in window pixels (origin bottom-left).
    pub screen_pos: Point2<f32>,
    pub world_pos: Point2<f32>,
    pub anchor: Option<AnchorId>,
    /// Viewport size in window pixels.
    pub dimensions: Size2<f32>,
    /// Internal render resolution of the viewport.
    pub resolution: Size2<f32>,
    pub zoom: Size2<f32>,
    /// Degrees.
    pub rotation: f32,
    pub scrolling: bool,
    pub velocity: AngularVel,
    pub window: WindowIndex,
    pub world_space: u32,
}

/// Creation parameters in window-relative percentages.
///
/// This is what [`Graphics::new_camera`](crate::compositor::Graphics::new_camera)
/// takes; [`CameraDesc::place`] turns it into pixel-space [`CameraParts`].
#[derive(Debug, Clone, PartialEq)]
pub struct CameraDesc {
    /// Placement in percent. `(0, 0)` is the top-left corner, `(100, 100)` bottom-right.
    pub screen_pos: Point2<f32>,
    pub world_pos: Point2<f32>,
    pub anchor: Option<AnchorId>,
    /// Size in percent of the window.
    pub dimensions: Size2<f32>,
    pub zoom: Size2<f32>,
    pub rotation: f32,
    pub scrolling: bool,
    pub velocity: AngularVel,
    pub window: WindowIndex,
    pub world_space: u32,
}

impl Default for CameraDesc {
    fn default() -> Self {
        Self {
            screen_pos: Point2::zero(),
            world_pos: Point2::zero(),
            anchor: None,
            dimensions: Size2::splat(100.0),
            zoom: Size2::splat(1.0),
            rotation: 0.0,
            scrolling: false,
            velocity: AngularVel::default(),
            window: WindowIndex(0),
            world_space: 0,
        }
    }
}

impl CameraDesc {
    /// Resolves percentages against `window`.
    ///
    /// - `size = dims% * window / 100`
    /// - `screen.x = pos.x * (window.w - size.w) / 100`
    /// - `screen.y = |pos.y - 100| * (window.h - size.h) / 100` (y flipped to a bottom-left origin)
    /// - `resolution = window.resolution * size / window`
    pub fn place(&self, window: &Window) -> CameraParts {
        let win = window.dimensions().as_f32();

        let size = Size2::new(
            self.dimensions.w * win.w / 100.0,
            self.dimensions.h * win.h / 100.0,
        );
        let screen_pos = Point2::new(
            self.screen_pos.x * (win.w - size.w) / 100.0,
            (self.screen_pos.y - 100.0).abs() * (win.h - size.h) / 100.0,
        );

        CameraParts {
            screen_pos,
            world_pos: self.world_pos,
            anchor: self.anchor,
            dimensions: size,
            resolution: derive_resolution(window, size),
            zoom: self.zoom,
            rotation: self.rotation,
            scrolling: self.scrolling,
            velocity: self.velocity,
            window: self.window,
            world_space: self.world_space,
        }
    }
}

/// `window.resolution * (dimensions / window.dimensions)`, per axis.
pub fn derive_resolution(window: &Window, dimensions: Size2<f32>) -> Size2<f32> {
    let win = window.dimensions().as_f32();
    let res = window.resolution().as_f32();
    let ratio = |part: f32, whole: f32| if whole > 0.0 { part / whole } else { 0.0 };
    Size2::new(res.w * ratio(dimensions.w, win.w), res.h * ratio(dimensions.h, win.h))
}

/// A view into one world-space, drawn into a rectangle of one window.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    screen_pos: Point2<f32>,
    world_pos: Point2<f32>,
    anchor: Option<AnchorId>,

    dimensions: Size2<f32>,
    resolution: Size2<f32>,

    zoom: Size2<f32>,
    rotation: f32,

    scrolling: bool,
    velocity: AngularVel,

    window: WindowIndex,
    world_space: u32,
}

impl Camera {
    pub fn new(parts: CameraParts) -> Self {
        let CameraParts {
            screen_pos,
            world_pos,
            anchor,
            dimensions,
            resolution,
            zoom,
            rotation,
            scrolling,
            velocity,
            window,
            world_space,
        } = parts;

        Self {
            screen_pos,
            world_pos,
            anchor,
            dimensions,
            resolution,
            zoom,
            rotation,
            scrolling,
            velocity,
            window,
            world_space,
        }
    }

    /// Replaces the viewport size. `resolution` is left as is; see
    /// [`Graphics::resize_camera`](crate::compositor::Graphics::resize_camera)
    /// for the variant that keeps it consistent with the window.
    pub fn resize(&mut self, dimensions: Size2<f32>) {
        self.dimensions = dimensions;
    }

    pub fn reposition(&mut self, screen_pos: Point2<f32>) {
        self.screen_pos = screen_pos;
    }

    /// Follows a different anchor, or none.
    pub fn rebind(&mut self, anchor: Option<AnchorId>) {
        self.anchor = anchor;
    }

    /// Advances a scrolling camera by one velocity step.
    pub fn update(&mut self) {
        if self.scrolling {
            self.world_pos += self.velocity;
        }
    }

    /// Stored world position plus the current anchor value.
    pub fn world_pos(&self, anchors: &Anchors) -> Result<Point2<f32>> {
        match self.anchor {
            Some(id) => Ok(self.world_pos + anchors.get(id)?),
            None => Ok(self.world_pos),
        }
    }

    /// World position without the anchor.
    #[inline]
    pub fn stored_world_pos(&self) -> Point2<f32> {
        self.world_pos
    }

    /// Viewport rectangle with a top-left origin, for a window `window_height` tall.
    pub fn viewport_rect(&self, window_height: f32) -> Rect {
        let top = window_height - self.screen_pos.y - self.dimensions.h;
        Rect::new(self.screen_pos.x, top, self.dimensions.w, self.dimensions.h)
    }

    /// Scales placement and size by `new / old` per axis and re-derives the
    /// resolution against `window`, which must already carry the new size.
    pub fn fit_to_window(&mut self, old: Size2<u32>, window: &Window) {
        if old.is_empty() || window.dimensions().is_empty() {
            self.resolution = derive_resolution(window, self.dimensions);
            return;
        }
        let new = window.dimensions().as_f32();
        let old = old.as_f32();
        let (sx, sy) = (new.w / old.w, new.h / old.h);

        self.screen_pos = Point2::new(self.screen_pos.x * sx, self.screen_pos.y * sy);
        self.dimensions = Size2::new(self.dimensions.w * sx, self.dimensions.h * sy);
        self.resolution = derive_resolution(window, self.dimensions);
    }

    pub fn set_world_pos(&mut self, world_pos: Point2<f32>) {
        self.world_pos = world_pos;
    }

    pub fn set_resolution(&mut self, resolution: Size2<f32>) {
        self.resolution = resolution;
    }

    pub fn set_zoom(&mut self, zoom: Size2<f32>) {
        self.zoom = zoom;
    }

    pub fn set_rotation(&mut self, degrees: f32) {
        self.rotation = degrees;
    }

    pub fn set_scrolling(&mut self, scrolling: bool) {
        self.scrolling = scrolling;
    }

    pub fn set_velocity(&mut self, velocity: AngularVel) {
        self.velocity = velocity;
    }

    #[inline]
    pub fn screen_pos(&self) -> Point2<f32> {
        self.screen_pos
    }

    #[inline]
    pub fn anchor(&self) -> Option<AnchorId> {
        self.anchor
    }

    #[inline]
    pub fn dimensions(&self) -> Size2<f32> {
        self.dimensions
    }

    #[inline]
    pub fn resolution(&self) -> Size2<f32> {
        self.resolution
    }

    #[inline]
    pub fn zoom(&self) -> Size2<f32> {
        self.zoom
    }

    #[inline]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    #[inline]
    pub fn is_scrolling(&self) -> bool {
        self.scrolling
    }

    #[inline]
    pub fn velocity(&self) -> AngularVel {
        self.velocity
    }

    #[inline]
    pub fn window(&self) -> WindowIndex {
        self.window
    }

    #[inline]
    pub fn world_space(&self) -> u32 {
        self.world_space
    }
}
