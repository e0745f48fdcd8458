/// A swapchain image being recorded into.
///
/// Holding one blocks acquisition of the next; hand it back through
/// [`Gpu::submit`](super::Gpu::submit) once recording is done.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}

/// What to do after failing to acquire a frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; try again next frame.
    Reconfigured,
    SkipFrame,
    /// Usually out of memory. The session should end.
    Fatal,
}

impl SurfaceErrorAction {
    pub fn from_error(err: &wgpu::SurfaceError) -> Self {
        match err {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => Self::Reconfigured,
            wgpu::SurfaceError::OutOfMemory => Self::Fatal,
            wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => Self::SkipFrame,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_out_of_memory_is_fatal() {
        use wgpu::SurfaceError::*;
        assert_eq!(SurfaceErrorAction::from_error(&OutOfMemory), SurfaceErrorAction::Fatal);
        assert_eq!(SurfaceErrorAction::from_error(&Lost), SurfaceErrorAction::Reconfigured);
        assert_eq!(SurfaceErrorAction::from_error(&Outdated), SurfaceErrorAction::Reconfigured);
        assert_eq!(SurfaceErrorAction::from_error(&Timeout), SurfaceErrorAction::SkipFrame);
    }
}
