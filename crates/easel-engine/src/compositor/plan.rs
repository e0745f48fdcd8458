use crate::camera::{Camera, CameraIndex};
use crate::coords::{Color, Point2, Rect, Size2};
use crate::surface::{Surface, SurfaceId, TextureId};
use crate::window::WindowIndex;

/// One surface, projected into a camera's resolution space.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteQuad {
    pub surface: SurfaceId,
    pub texture: TextureId,
    /// Top-left, top-right, bottom-right, bottom-left of the quad, in camera
    /// resolution units (origin top-left of the camera view).
    pub corners: [Point2<f32>; 4],
    pub color: Color,
}

/// Everything one camera draws this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraPass {
    pub camera: CameraIndex,
    /// Viewport inside the window, logical pixels, top-left origin.
    pub viewport: Rect,
    /// Size of the coordinate space `quads` are expressed in.
    pub resolution: Size2<f32>,
    pub quads: Vec<SpriteQuad>,
}

/// The cameras bound to one window, in creation order.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowPlan {
    pub window: WindowIndex,
    pub passes: Vec<CameraPass>,
}

/// Renderer-agnostic description of a whole frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawPlan {
    pub windows: Vec<WindowPlan>,
}

impl DrawPlan {
    pub fn window(&self, index: WindowIndex) -> Option<&WindowPlan> {
        self.windows.iter().find(|w| w.window == index)
    }
}

/// Projects `surface` through `camera`, whose anchor-adjusted world position
/// is `camera_pos`.
///
/// 1. the quad (`size_offset * scale`) is rotated about `center * scale`
/// 2. placed at `pos + pos_offset`
/// 3. shifted by `-camera_pos` and scaled by `zoom`
/// 4. rotated by the camera rotation about the center of its resolution
pub fn project(surface: &Surface, camera: &Camera, camera_pos: Point2<f32>) -> [Point2<f32>; 4] {
    let size = surface.drawn_size();
    let pivot = surface.center * surface.scale;
    let origin = surface.pos + surface.pos_offset;

    let res = camera.resolution();
    let view_center = Point2::new(res.w / 2.0, res.h / 2.0);

    let local = [
        Point2::new(0.0, 0.0),
        Point2::new(size.w, 0.0),
        Point2::new(size.w, size.h),
        Point2::new(0.0, size.h),
    ];

    local.map(|corner| {
        let world = origin + corner.rotated_about(pivot, surface.rotation);
        let view = (world - camera_pos) * camera.zoom();
        view.rotated_about(view_center, camera.rotation())
    })
}
