use crate::coords::Color;

/// GPU setup shared by every native window.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Pick `Bgra8UnormSrgb` / `Rgba8UnormSrgb` when the surface offers one.
    pub prefer_srgb: bool,
    pub present_mode: wgpu::PresentMode,
    /// Falls back to the first supported mode when unset or unsupported.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,
    pub required_features: wgpu::Features,
    pub required_limits: wgpu::Limits,
    /// Hint only; backends may ignore it.
    pub desired_maximum_frame_latency: u32,
    /// Fill for the parts of a window no camera covers.
    pub clear_color: Color,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
            clear_color: Color::black(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_portable() {
        let init = GpuInit::default();
        assert!(init.prefer_srgb);
        assert_eq!(init.present_mode, wgpu::PresentMode::Fifo);
        assert!(init.required_features.is_empty());
        assert_eq!(init.clear_color, Color::black());
    }
}
