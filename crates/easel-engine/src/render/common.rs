//! GPU types shared by renderers.

use bytemuck::{Pod, Zeroable};

use crate::coords::{Rect, Size2};

// ── blend ─────────────────────────────────────────────────────────────────

pub(super) fn premul_alpha_blend() -> wgpu::BlendState {
    let component = wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
        operation: wgpu::BlendOperation::Add,
    };
    wgpu::BlendState {
        color: component,
        alpha: component,
    }
}

// ── unit quad ─────────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct QuadVertex {
    /// 0..1 on both axes; doubles as the texture coordinate.
    pub unit: [f32; 2],
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

pub(super) const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { unit: [0.0, 0.0] },
    QuadVertex { unit: [1.0, 0.0] },
    QuadVertex { unit: [1.0, 1.0] },
    QuadVertex { unit: [0.0, 1.0] },
];

pub(super) const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

// ── camera viewport ───────────────────────────────────────────────────────

/// A camera rectangle after clipping to the render target.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(super) struct PassViewport {
    /// Physical pixels, inside the target.
    pub rect: Rect,
    /// The part of camera resolution space `rect` shows: `[x, y, w, h]`.
    pub view: [f32; 4],
}

/// Physical-pixel viewport for a camera rectangle given in logical pixels.
///
/// The rectangle is clipped to the render target and `view` is cropped by the
/// same amount, so the visible part keeps its scale. `None` when the camera
/// is entirely outside the target or has no area.
pub(super) fn pass_viewport(
    logical: Rect,
    scale: f32,
    target: Size2<u32>,
    resolution: Size2<f32>,
) -> Option<PassViewport> {
    let full = Rect::new(
        logical.origin.x * scale,
        logical.origin.y * scale,
        logical.size.w * scale,
        logical.size.h * scale,
    );
    if full.is_empty() {
        return None;
    }
    let rect = full.clamp_to(target.as_f32())?;

    let units_x = resolution.w / full.size.w;
    let units_y = resolution.h / full.size.h;
    let view = [
        (rect.origin.x - full.origin.x) * units_x,
        (rect.origin.y - full.origin.y) * units_y,
        rect.size.w * units_x,
        rect.size.h * units_y,
    ];
    Some(PassViewport { rect, view })
}

/// Integer scissor matching a physical viewport.
pub(super) fn scissor_of(viewport: Rect) -> Option<(u32, u32, u32, u32)> {
    let x = viewport.origin.x.floor().max(0.0) as u32;
    let y = viewport.origin.y.floor().max(0.0) as u32;
    let max = viewport.max();
    let w = (max.x.ceil() as u32).saturating_sub(x);
    let h = (max.y.ceil() as u32).saturating_sub(y);
    if w == 0 || h == 0 { None } else { Some((x, y, w, h)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_scales_to_physical_pixels() {
        let res = Size2::new(320.0, 240.0);
        let v = pass_viewport(Rect::new(10.0, 20.0, 100.0, 50.0), 2.0, Size2::new(1000, 1000), res)
            .unwrap();
        assert_eq!(v.rect, Rect::new(20.0, 40.0, 200.0, 100.0));
        assert_eq!(v.view, [0.0, 0.0, 320.0, 240.0]);
    }

    #[test]
    fn clipped_viewport_crops_instead_of_squeezing() {
        // Left half hangs off the target: only the right half of the camera shows.
        let v = pass_viewport(
            Rect::new(-100.0, 0.0, 200.0, 100.0),
            1.0,
            Size2::new(100, 100),
            Size2::new(200.0, 100.0),
        )
        .unwrap();
        assert_eq!(v.rect, Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(v.view, [100.0, 0.0, 100.0, 100.0]);

        // Clipped on the far side at a different resolution scale.
        let v = pass_viewport(
            Rect::new(0.0, 30.0, 50.0, 60.0),
            1.0,
            Size2::new(50, 60),
            Size2::new(100.0, 120.0),
        )
        .unwrap();
        assert_eq!(v.rect, Rect::new(0.0, 30.0, 50.0, 30.0));
        assert_eq!(v.view, [0.0, 0.0, 100.0, 60.0]);
    }

    #[test]
    fn offscreen_or_empty_viewport_is_skipped() {
        let res = Size2::new(10.0, 10.0);
        assert_eq!(pass_viewport(Rect::new(80.0, 0.0, 10.0, 10.0), 1.0, Size2::new(50, 60), res), None);
        assert_eq!(pass_viewport(Rect::new(0.0, 0.0, 0.0, 10.0), 1.0, Size2::new(50, 60), res), None);
    }

    #[test]
    fn scissor_covers_fractional_viewport() {
        assert_eq!(scissor_of(Rect::new(0.5, 1.5, 10.0, 10.0)), Some((0, 1, 11, 11)));
        assert_eq!(scissor_of(Rect::new(3.0, 3.0, 0.0, 4.0)), None);
    }
}
