use std::collections::HashSet;
use std::path::Path;

use crate::camera::{derive_resolution, Anchors, Camera, CameraDesc, CameraIndex};
use crate::coords::Size2;
use crate::device::SurfaceErrorAction;
use crate::error::{GraphicsError, Result};
use crate::surface::{Surface, SurfaceId, SurfaceList, TextureStore};
use crate::window::{Window, WindowConfig, WindowIndex};

use super::plan::{project, CameraPass, DrawPlan, SpriteQuad, WindowPlan};

/// The registry every pipeline stage works against.
///
/// Owns windows, cameras, surfaces, anchors and decoded textures for one
/// session. Nothing here touches the GPU until a [`Runtime`] has attached
/// native windows; until then `draw` and `flip` only plan.
///
/// [`Runtime`]: crate::window::Runtime
#[derive(Debug)]
pub struct Graphics {
    windows: Vec<Window>,
    cameras: Vec<Camera>,
    surfaces: SurfaceList,
    anchors: Anchors,
    textures: TextureStore,
    /// Largest texture side the GPU is asked to support.
    max_texture_dimension: u32,
}

impl Default for Graphics {
    fn default() -> Self {
        Self {
            windows: Vec::new(),
            cameras: Vec::new(),
            surfaces: SurfaceList::default(),
            anchors: Anchors::default(),
            textures: TextureStore::default(),
            max_texture_dimension: wgpu::Limits::default().max_texture_dimension_2d,
        }
    }
}

impl Graphics {
    pub fn new() -> Self {
        Self::default()
    }

    // ── windows ───────────────────────────────────────────────────────────

    /// Registers a window. The platform window is created when the runtime starts.
    pub fn new_window(&mut self, config: WindowConfig) -> WindowIndex {
        log::info!(
            "window \"{}\" registered ({}x{}, resolution {}x{})",
            config.title,
            config.dimensions.w,
            config.dimensions.h,
            config.resolution.w,
            config.resolution.h,
        );
        self.windows.push(Window::new(config));
        WindowIndex(self.windows.len() - 1)
    }

    pub fn window(&self, index: WindowIndex) -> Result<&Window> {
        self.windows
            .get(index.0)
            .ok_or(GraphicsError::WindowOutOfRange(index.0))
    }

    /// Direct access. Size changes made through this bypass camera refitting;
    /// prefer [`Graphics::resize_window`].
    pub fn window_mut(&mut self, index: WindowIndex) -> Result<&mut Window> {
        self.windows
            .get_mut(index.0)
            .ok_or(GraphicsError::WindowOutOfRange(index.0))
    }

    #[inline]
    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    pub(crate) fn windows_mut(&mut self) -> &mut [Window] {
        &mut self.windows
    }

    /// Resizes a window and refits every camera bound to it.
    ///
    /// Zero width or height is rejected; cameras scaled to nothing could not
    /// be scaled back.
    pub fn resize_window(
        &mut self,
        index: WindowIndex,
        dimensions: Size2<u32>,
        monitor: usize,
    ) -> Result<()> {
        let window = self.window_mut(index)?;
        let old = window.dimensions();
        if !window.resize(dimensions, monitor) {
            return Err(GraphicsError::EmptyWindowSize(index.0));
        }
        self.refit_cameras(index, old);
        Ok(())
    }

    pub fn rename_window(&mut self, index: WindowIndex, title: impl Into<String>) -> Result<()> {
        self.window_mut(index)?.rename(title);
        Ok(())
    }

    pub fn toggle_fullscreen(&mut self, index: WindowIndex) -> Result<()> {
        let window = self.window_mut(index)?;
        let old = window.dimensions();
        window.toggle_fullscreen();
        self.refit_cameras(index, old);
        Ok(())
    }

    /// Takes a size reported by the platform. Returns `true` if anything changed.
    pub fn apply_os_resize(&mut self, index: WindowIndex, dimensions: Size2<u32>) -> Result<bool> {
        let window = self.window_mut(index)?;
        let old = window.dimensions();
        if !window.apply_os_resize(dimensions) {
            return Ok(false);
        }
        self.refit_cameras(index, old);
        Ok(true)
    }

    fn refit_cameras(&mut self, index: WindowIndex, old: Size2<u32>) {
        let Some(window) = self.windows.get(index.0) else { return };
        if old == window.dimensions() {
            return;
        }
        for camera in self.cameras.iter_mut().filter(|c| c.window() == index) {
            camera.fit_to_window(old, window);
        }
    }

    // ── cameras ───────────────────────────────────────────────────────────

    /// Places a camera from window percentages. See [`CameraDesc::place`].
    pub fn new_camera(&mut self, desc: CameraDesc) -> Result<CameraIndex> {
        let window = self.window(desc.window)?;
        let camera = Camera::new(desc.place(window));

        log::debug!(
            "camera {} on window {}: {:?} at {:?}",
            self.cameras.len(),
            desc.window.0,
            camera.dimensions(),
            camera.screen_pos(),
        );

        self.cameras.push(camera);
        Ok(CameraIndex(self.cameras.len() - 1))
    }

    pub fn camera(&self, index: CameraIndex) -> Result<&Camera> {
        self.cameras
            .get(index.0)
            .ok_or(GraphicsError::CameraOutOfRange(index.0))
    }

    pub fn camera_mut(&mut self, index: CameraIndex) -> Result<&mut Camera> {
        self.cameras
            .get_mut(index.0)
            .ok_or(GraphicsError::CameraOutOfRange(index.0))
    }

    #[inline]
    pub fn cameras(&self) -> &[Camera] {
        &self.cameras
    }

    /// [`Camera::resize`] followed by re-deriving the resolution against the
    /// camera's window.
    pub fn resize_camera(&mut self, index: CameraIndex, dimensions: Size2<f32>) -> Result<()> {
        let window_index = self.camera(index)?.window();
        let resolution = derive_resolution(self.window(window_index)?, dimensions);

        let camera = self.camera_mut(index)?;
        camera.resize(dimensions);
        camera.set_resolution(resolution);
        Ok(())
    }

    #[inline]
    pub fn anchors(&self) -> &Anchors {
        &self.anchors
    }

    #[inline]
    pub fn anchors_mut(&mut self) -> &mut Anchors {
        &mut self.anchors
    }

    // ── surfaces ──────────────────────────────────────────────────────────

    /// Decodes an image file into a new surface.
    ///
    /// On failure nothing is registered.
    pub fn load_surface(&mut self, path: impl AsRef<Path>) -> Result<SurfaceId> {
        let path = path.as_ref();
        let image = match image::open(path) {
            Ok(image) => image.into_rgba8(),
            Err(source) => {
                log::error!("failed to load {}: {source}", path.display());
                return Err(GraphicsError::ImageLoad { path: path.to_path_buf(), source });
            }
        };

        let id = self.load_surface_from_image(image)?;
        log::debug!("loaded {} as {id:?}", path.display());
        Ok(id)
    }

    /// Registers already-decoded pixels as a new surface with loading defaults.
    ///
    /// Images with a side above [`max_texture_dimension`](Self::max_texture_dimension)
    /// are refused; the GPU could not hold them.
    pub fn load_surface_from_image(&mut self, image: image::RgbaImage) -> Result<SurfaceId> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(GraphicsError::EmptyImage);
        }
        let max = self.max_texture_dimension;
        if width > max || height > max {
            log::error!("{width}x{height} image exceeds the {max} px texture limit");
            return Err(GraphicsError::TextureTooLarge { width, height, max });
        }

        let size = Size2::new(image.width(), image.height());
        let texture = self.textures.insert(image);
        let id = self.surfaces.next_id();
        Ok(self.surfaces.insert(Surface::from_texture(id, texture, size)))
    }

    #[inline]
    pub fn surface(&self, id: SurfaceId) -> Option<&Surface> {
        self.surfaces.get(id)
    }

    /// Mutable access; the list re-sorts before the next draw.
    #[inline]
    pub fn surface_mut(&mut self, id: SurfaceId) -> Option<&mut Surface> {
        self.surfaces.get_mut(id)
    }

    pub fn set_active(&mut self, id: SurfaceId, active: bool) -> Result<()> {
        if self.surfaces.set_active(id, active) {
            Ok(())
        } else {
            Err(GraphicsError::SurfaceNotFound(id))
        }
    }

    /// All surfaces, re-sorted first if edits through `surface_mut` left
    /// them out of paint order.
    pub fn surfaces(&mut self) -> &SurfaceList {
        self.surfaces.ensure_sorted();
        &self.surfaces
    }

    #[inline]
    pub fn textures(&self) -> &TextureStore {
        &self.textures
    }

    #[inline]
    pub fn max_texture_dimension(&self) -> u32 {
        self.max_texture_dimension
    }

    /// Matches the limit to the device limits the runtime will request.
    /// Surfaces loaded earlier are not re-checked; the renderer skips those
    /// that no longer fit.
    pub fn set_max_texture_dimension(&mut self, max: u32) {
        self.max_texture_dimension = max;
    }

    /// Drops inactive surfaces and any texture no remaining surface uses.
    ///
    /// Returns the number of surfaces removed.
    pub fn remove_inactive(&mut self) -> usize {
        let removed = self.surfaces.retain(|s| s.active);
        if removed.is_empty() {
            return 0;
        }

        let in_use: HashSet<_> = self.surfaces.iter().map(|s| s.texture).collect();
        for surface in &removed {
            if !in_use.contains(&surface.texture) {
                self.textures.remove(surface.texture);
            }
        }

        log::debug!("purged {} inactive surfaces", removed.len());
        removed.len()
    }

    // ── frame ─────────────────────────────────────────────────────────────

    /// Advances scrolling cameras by one step.
    pub fn update(&mut self) {
        for camera in &mut self.cameras {
            camera.update();
        }
    }

    /// Resolves the frame: which cameras draw where, and which surfaces each sees.
    ///
    /// A camera whose anchor has been removed is skipped with a warning.
    pub fn plan(&mut self) -> DrawPlan {
        self.surfaces.ensure_sorted();

        let mut plan = DrawPlan::default();
        for (w, window) in self.windows.iter().enumerate() {
            let index = WindowIndex(w);
            let height = window.dimensions().as_f32().h;

            let mut passes = Vec::new();
            for (c, camera) in self.cameras.iter().enumerate() {
                if camera.window() != index {
                    continue;
                }

                let camera_pos = match camera.world_pos(&self.anchors) {
                    Ok(pos) => pos,
                    Err(e) => {
                        log::warn!("camera {c} skipped: {e}");
                        continue;
                    }
                };

                let quads = self
                    .surfaces
                    .in_world_space(camera.world_space())
                    .filter(|s| s.active)
                    .map(|s| SpriteQuad {
                        surface: s.id(),
                        texture: s.texture,
                        corners: project(s, camera, camera_pos),
                        color: s.color,
                    })
                    .collect();

                passes.push(CameraPass {
                    camera: CameraIndex(c),
                    viewport: camera.viewport_rect(height),
                    resolution: camera.resolution(),
                    quads,
                });
            }

            plan.windows.push(WindowPlan { window: index, passes });
        }
        plan
    }

    /// Records the frame into every window that has a native target.
    ///
    /// Frames stay pending until [`Graphics::flip`].
    pub fn draw(&mut self) -> Result<()> {
        let plan = self.plan();

        for window_plan in &plan.windows {
            let Some(window) = self.windows.get_mut(window_plan.window.0) else { continue };
            let Some(native) = window.native_mut() else { continue };

            match native.record(&window_plan.passes, &self.textures) {
                Ok(()) => {}
                Err(SurfaceErrorAction::Fatal) => {
                    log::error!("window {}: unrecoverable surface error", window_plan.window.0);
                    return Err(GraphicsError::SurfaceFatal(window_plan.window.0));
                }
                Err(action) => {
                    log::debug!("window {}: frame skipped ({action:?})", window_plan.window.0);
                }
            }
        }
        Ok(())
    }

    /// Presents every frame recorded by the last [`Graphics::draw`].
    pub fn flip(&mut self) {
        for window in &mut self.windows {
            window.flip();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{AngularDir, AngularVel, Point2, Rect};
    use crate::surface::Layer;

    fn graphics_with_window(dims: (u32, u32)) -> (Graphics, WindowIndex) {
        let mut gfx = Graphics::new();
        let w = gfx.new_window(WindowConfig {
            dimensions: Size2::new(dims.0, dims.1),
            resolution: Size2::new(dims.0, dims.1),
            ..WindowConfig::default()
        });
        (gfx, w)
    }

    fn sprite(gfx: &mut Graphics, w: u32, h: u32) -> SurfaceId {
        gfx.load_surface_from_image(image::RgbaImage::new(w, h)).unwrap()
    }

    // ── cameras ───────────────────────────────────────────────────────────

    #[test]
    fn centered_full_size_camera() {
        let (mut gfx, w) = graphics_with_window((1600, 900));
        let cam = gfx
            .new_camera(CameraDesc {
                screen_pos: Point2::new(50.0, 50.0),
                dimensions: Size2::new(100.0, 100.0),
                window: w,
                ..CameraDesc::default()
            })
            .unwrap();

        let cam = gfx.camera(cam).unwrap();
        assert_eq!(cam.dimensions(), Size2::new(1600.0, 900.0));
        // 50 * (1600 - 1600) / 100 and |50 - 100| * (900 - 900) / 100
        assert_eq!(cam.screen_pos(), Point2::new(0.0, 0.0));
        assert_eq!(cam.resolution(), Size2::new(1600.0, 900.0));
    }

    #[test]
    fn camera_on_unknown_window_is_rejected() {
        let (mut gfx, _) = graphics_with_window((800, 600));
        let err = gfx
            .new_camera(CameraDesc { window: WindowIndex(3), ..CameraDesc::default() })
            .unwrap_err();
        assert!(matches!(err, GraphicsError::WindowOutOfRange(3)));
        assert!(gfx.cameras().is_empty());
    }

    #[test]
    fn resize_window_refits_cameras_but_camera_resize_does_not() {
        let (mut gfx, w) = graphics_with_window((800, 600));
        let cam = gfx
            .new_camera(CameraDesc {
                dimensions: Size2::new(50.0, 50.0),
                window: w,
                ..CameraDesc::default()
            })
            .unwrap();

        gfx.camera_mut(cam).unwrap().resize(Size2::new(100.0, 100.0));
        assert_eq!(gfx.camera(cam).unwrap().resolution(), Size2::new(400.0, 300.0));

        gfx.resize_camera(cam, Size2::new(200.0, 150.0)).unwrap();
        assert_eq!(gfx.camera(cam).unwrap().resolution(), Size2::new(200.0, 150.0));

        gfx.resize_window(w, Size2::new(1600, 1200), 0).unwrap();
        let c = gfx.camera(cam).unwrap();
        assert_eq!(c.dimensions(), Size2::new(400.0, 300.0));
        // Window resolution stays 800x600; the camera covers a quarter of it.
        assert_eq!(c.resolution(), Size2::new(200.0, 150.0));
    }

    #[test]
    fn zero_size_resize_is_rejected_and_cameras_survive() {
        let (mut gfx, w) = graphics_with_window((800, 600));
        let cam = gfx.new_camera(CameraDesc { window: w, ..CameraDesc::default() }).unwrap();

        let err = gfx.resize_window(w, Size2::new(0, 0), 0).unwrap_err();
        assert!(matches!(err, GraphicsError::EmptyWindowSize(0)));
        assert_eq!(gfx.window(w).unwrap().dimensions(), Size2::new(800, 600));

        gfx.resize_window(w, Size2::new(400, 300), 0).unwrap();
        let c = gfx.camera(cam).unwrap();
        assert_eq!(c.dimensions(), Size2::new(400.0, 300.0));
        assert_eq!(c.resolution(), Size2::new(800.0, 600.0));
    }

    #[test]
    fn os_resize_with_same_size_is_a_no_op() {
        let (mut gfx, w) = graphics_with_window((800, 600));
        assert!(!gfx.apply_os_resize(w, Size2::new(800, 600)).unwrap());
        assert!(gfx.apply_os_resize(w, Size2::new(640, 480)).unwrap());
        assert!(gfx.apply_os_resize(WindowIndex(9), Size2::new(1, 1)).is_err());
    }

    #[test]
    fn update_moves_only_scrolling_cameras() {
        let (mut gfx, w) = graphics_with_window((800, 600));
        let still = gfx.new_camera(CameraDesc { window: w, ..CameraDesc::default() }).unwrap();
        let moving = gfx
            .new_camera(CameraDesc {
                window: w,
                scrolling: true,
                velocity: AngularVel::toward(AngularDir::Right, 3.0),
                ..CameraDesc::default()
            })
            .unwrap();

        for _ in 0..4 {
            gfx.update();
        }
        assert_eq!(gfx.camera(still).unwrap().stored_world_pos(), Point2::zero());
        let pos = gfx.camera(moving).unwrap().stored_world_pos();
        assert!((pos.x - 12.0).abs() < 1e-4 && pos.y.abs() < 1e-4, "{pos:?}");
    }

    // ── surfaces ──────────────────────────────────────────────────────────

    #[test]
    fn loaded_surface_gets_defaults() {
        let mut gfx = Graphics::new();
        let id = sprite(&mut gfx, 64, 32);
        let s = gfx.surface(id).unwrap();

        assert_eq!(s.dimensions, Size2::new(64.0, 32.0));
        assert_eq!(s.center, Point2::new(32.0, 16.0));
        assert_eq!(s.layer, Layer::Background);
        assert_eq!(s.world_space, 0);
        assert!(s.active);
        assert_eq!(gfx.textures().get(s.texture).unwrap().size(), Size2::new(64, 32));
    }

    #[test]
    fn loading_from_disk_decodes_pixels() {
        let path = std::env::temp_dir().join(format!("easel-load-{}.png", std::process::id()));
        image::RgbaImage::from_pixel(5, 7, image::Rgba([9, 9, 9, 255]))
            .save(&path)
            .unwrap();

        let mut gfx = Graphics::new();
        let id = gfx.load_surface(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(gfx.surface(id).unwrap().dimensions, Size2::new(5.0, 7.0));
    }

    #[test]
    fn missing_file_leaves_collection_untouched() {
        let mut gfx = Graphics::new();
        sprite(&mut gfx, 4, 4);

        let err = gfx.load_surface("does/not/exist.png").unwrap_err();
        assert!(matches!(err, GraphicsError::ImageLoad { .. }));
        assert_eq!(gfx.surfaces().len(), 1);
        assert_eq!(gfx.textures().len(), 1);
    }

    #[test]
    fn empty_image_is_rejected() {
        let mut gfx = Graphics::new();
        let err = gfx.load_surface_from_image(image::RgbaImage::new(0, 3)).unwrap_err();
        assert!(matches!(err, GraphicsError::EmptyImage));
        assert!(gfx.surfaces().is_empty());
    }

    #[test]
    fn oversized_image_is_rejected() {
        let mut gfx = Graphics::new();
        assert_eq!(gfx.max_texture_dimension(), 8192);

        let err = gfx.load_surface_from_image(image::RgbaImage::new(10000, 16)).unwrap_err();
        assert!(matches!(err, GraphicsError::TextureTooLarge { width: 10000, height: 16, max: 8192 }));
        assert!(gfx.surfaces().is_empty());
        assert!(gfx.textures().is_empty());

        gfx.set_max_texture_dimension(16);
        assert!(gfx.load_surface_from_image(image::RgbaImage::new(16, 16)).is_ok());
        assert!(gfx.load_surface_from_image(image::RgbaImage::new(16, 17)).is_err());
    }

    #[test]
    fn set_active_on_unknown_surface_fails() {
        let mut gfx = Graphics::new();
        let id = sprite(&mut gfx, 1, 1);
        gfx.remove_inactive();
        gfx.set_active(id, false).unwrap();
        assert_eq!(gfx.remove_inactive(), 1);
        assert!(matches!(gfx.set_active(id, true), Err(GraphicsError::SurfaceNotFound(_))));
    }

    #[test]
    fn remove_inactive_drops_orphaned_textures_only() {
        let mut gfx = Graphics::new();
        let keep = sprite(&mut gfx, 2, 2);
        let drop = sprite(&mut gfx, 2, 2);

        // Two surfaces sharing one texture: only one is purged.
        let shared = sprite(&mut gfx, 2, 2);
        let shared_tex = gfx.surface(shared).unwrap().texture;
        gfx.surface_mut(keep).unwrap().texture = shared_tex;

        let dropped_tex = gfx.surface(drop).unwrap().texture;
        gfx.set_active(drop, false).unwrap();
        gfx.set_active(shared, false).unwrap();

        assert_eq!(gfx.remove_inactive(), 2);
        assert!(gfx.surface(drop).is_none());
        assert!(!gfx.textures().contains(dropped_tex));
        assert!(gfx.textures().contains(shared_tex));
    }

    // ── planning ──────────────────────────────────────────────────────────

    #[test]
    fn plan_walks_matching_world_space_in_paint_order() {
        let (mut gfx, w) = graphics_with_window((800, 600));
        gfx.new_camera(CameraDesc { window: w, world_space: 1, ..CameraDesc::default() })
            .unwrap();

        let overlay = sprite(&mut gfx, 8, 8);
        let background = sprite(&mut gfx, 8, 8);
        let elsewhere = sprite(&mut gfx, 8, 8);
        let hidden = sprite(&mut gfx, 8, 8);

        gfx.surface_mut(overlay).unwrap().layer = Layer::Overlay;
        for id in [overlay, background, hidden] {
            gfx.surface_mut(id).unwrap().world_space = 1;
        }
        gfx.surface_mut(elsewhere).unwrap().world_space = 2;
        gfx.set_active(hidden, false).unwrap();

        let plan = gfx.plan();
        let pass = &plan.window(w).unwrap().passes[0];
        let drawn: Vec<SurfaceId> = pass.quads.iter().map(|q| q.surface).collect();
        assert_eq!(drawn, vec![background, overlay]);
    }

    #[test]
    fn surface_list_is_sorted_after_edits() {
        let mut gfx = Graphics::new();
        let moved = sprite(&mut gfx, 2, 2);
        let stays = sprite(&mut gfx, 2, 2);

        gfx.surface_mut(moved).unwrap().world_space = 3;

        let list = gfx.surfaces();
        assert!(!list.is_dirty());
        assert!(list.is_paint_ordered());
        let ids: Vec<SurfaceId> = list.iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec![stays, moved]);
        assert_eq!(list.in_world_space(3).count(), 1);
    }

    #[test]
    fn plan_converts_viewport_to_top_left_origin() {
        let (mut gfx, w) = graphics_with_window((800, 600));
        // Bottom-right quarter.
        gfx.new_camera(CameraDesc {
            screen_pos: Point2::new(100.0, 100.0),
            dimensions: Size2::new(50.0, 50.0),
            window: w,
            ..CameraDesc::default()
        })
        .unwrap();

        let plan = gfx.plan();
        let pass = &plan.window(w).unwrap().passes[0];
        assert_eq!(pass.viewport, Rect::new(400.0, 300.0, 400.0, 300.0));
        assert_eq!(pass.resolution, Size2::new(400.0, 300.0));
    }

    #[test]
    fn camera_rect_ignores_window_letterbox() {
        let mut gfx = Graphics::new();
        let w = gfx.new_window(WindowConfig {
            dimensions: Size2::new(1000, 450),
            resolution: Size2::new(800, 450),
            ..WindowConfig::default()
        });
        gfx.new_camera(CameraDesc { window: w, ..CameraDesc::default() }).unwrap();

        assert_eq!(gfx.window(w).unwrap().view_offset(), Point2::new(100, 0));
        let plan = gfx.plan();
        assert_eq!(plan.window(w).unwrap().passes[0].viewport, Rect::new(0.0, 0.0, 1000.0, 450.0));
    }

    #[test]
    fn plan_follows_anchor_and_skips_dead_ones() {
        let (mut gfx, w) = graphics_with_window((800, 600));
        let player = gfx.anchors_mut().insert(Point2::new(100.0, 50.0));
        gfx.new_camera(CameraDesc { window: w, anchor: Some(player), ..CameraDesc::default() })
            .unwrap();
        let id = sprite(&mut gfx, 10, 10);
        gfx.surface_mut(id).unwrap().pos = Point2::new(100.0, 50.0);

        let plan = gfx.plan();
        let quad = &plan.window(w).unwrap().passes[0].quads[0];
        assert_eq!(quad.corners[0], Point2::new(0.0, 0.0));

        gfx.anchors_mut().remove(player);
        let plan = gfx.plan();
        assert!(plan.window(w).unwrap().passes.is_empty());
    }

    #[test]
    fn plan_groups_cameras_by_window() {
        let mut gfx = Graphics::new();
        let a = gfx.new_window(WindowConfig::default());
        let b = gfx.new_window(WindowConfig::default());
        let first = gfx.new_camera(CameraDesc { window: b, ..CameraDesc::default() }).unwrap();
        gfx.new_camera(CameraDesc { window: a, ..CameraDesc::default() }).unwrap();
        let third = gfx.new_camera(CameraDesc { window: b, ..CameraDesc::default() }).unwrap();

        let plan = gfx.plan();
        assert_eq!(plan.windows.len(), 2);
        let on_b: Vec<CameraIndex> =
            plan.window(b).unwrap().passes.iter().map(|p| p.camera).collect();
        assert_eq!(on_b, vec![first, third]);
    }

    #[test]
    fn draw_and_flip_without_native_windows_are_no_ops() {
        let (mut gfx, w) = graphics_with_window((320, 240));
        gfx.new_camera(CameraDesc { window: w, ..CameraDesc::default() }).unwrap();
        sprite(&mut gfx, 4, 4);

        gfx.draw().unwrap();
        gfx.flip();
        assert!(gfx.window(w).unwrap().native().is_none());
    }
}
