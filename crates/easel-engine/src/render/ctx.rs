use crate::coords::Size2;

/// What a renderer needs from the device for one frame.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    /// Physical pixels per logical pixel.
    pub scale_factor: f32,
    /// Swapchain size in physical pixels.
    pub target_size: Size2<u32>,
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        scale_factor: f32,
        target_size: Size2<u32>,
    ) -> Self {
        Self {
            device,
            queue,
            surface_format,
            scale_factor,
            target_size,
        }
    }
}

/// Encoder plus the swapchain view it renders into.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}

impl<'a> RenderTarget<'a> {
    #[inline]
    pub fn new(encoder: &'a mut wgpu::CommandEncoder, color_view: &'a wgpu::TextureView) -> Self {
        Self { encoder, color_view }
    }
}
