use anyhow::Result;
use ouroboros::self_referencing;
use winit::dpi::PhysicalSize;
use winit::window::WindowId;

use crate::compositor::CameraPass;
use crate::coords::{Color, Size2};
use crate::device::{Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
use crate::render::{RenderCtx, RenderTarget, SpriteRenderer};
use crate::surface::TextureStore;

/// Platform half of a [`Window`](super::Window): the winit window, the GPU
/// context bound to it, and the frame recorded by the last draw.
#[self_referencing]
pub struct NativeWindow {
    clear: Color,
    renderer: SpriteRenderer,
    pending: Option<GpuFrame>,

    window: winit::window::Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

impl NativeWindow {
    pub(crate) fn create(window: winit::window::Window, init: &GpuInit) -> Result<Self> {
        NativeWindowTryBuilder {
            clear: init.clear_color,
            renderer: SpriteRenderer::new(),
            pending: None,
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, init)),
        }
        .try_build()
    }

    pub fn id(&self) -> WindowId {
        self.with_window(|w| w.id())
    }

    pub fn scale_factor(&self) -> f64 {
        self.with_window(|w| w.scale_factor())
    }

    pub(crate) fn with_winit<R>(&self, f: impl FnOnce(&winit::window::Window) -> R) -> R {
        self.with_window(|w| f(w))
    }

    pub(crate) fn resize_surface(&mut self, size: PhysicalSize<u32>) {
        self.with_gpu_mut(|gpu| gpu.resize(size));
    }

    /// Acquires a frame and records `passes` into it. The frame is kept until
    /// [`present`](Self::present).
    pub(crate) fn record(
        &mut self,
        passes: &[CameraPass],
        textures: &TextureStore,
    ) -> std::result::Result<(), SurfaceErrorAction> {
        self.with_mut(|fields| {
            // Drawn twice without a flip: the older frame is discarded.
            *fields.pending = None;

            let mut frame = fields.gpu.begin_frame()?;

            let size = fields.gpu.size();
            let ctx = RenderCtx::new(
                fields.gpu.device(),
                fields.gpu.queue(),
                fields.gpu.surface_format(),
                fields.window.scale_factor() as f32,
                Size2::new(size.width, size.height),
            );

            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            fields.renderer.render(&ctx, &mut target, *fields.clear, passes, textures);

            *fields.pending = Some(frame);
            Ok(())
        })
    }

    /// Submits and presents the pending frame, if any.
    pub(crate) fn present(&mut self) {
        self.with_mut(|fields| {
            if let Some(frame) = fields.pending.take() {
                fields.window.pre_present_notify();
                fields.gpu.submit(frame);
            }
        });
    }
}
