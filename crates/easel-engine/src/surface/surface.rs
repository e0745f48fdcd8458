use crate::coords::{Color, Point2, Size2};

use super::TextureId;

/// Stable identity of a surface. Never reused within a session.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(pub(crate) u64);

/// Paint order bucket inside a world-space. Later variants draw on top.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Layer {
    /// Lowest layer.
    #[default]
    Background,
    /// Behind the midground, meant to read as part of the foreground.
    InlineFore,
    Midground,
    Foreground,

    Foundation,
    Structure,
    Overlay,

    /// Highest layer.
    AlwaysTop,
}

impl Layer {
    pub const ALL: [Layer; 8] = [
        Layer::Background,
        Layer::InlineFore,
        Layer::Midground,
        Layer::Foreground,
        Layer::Foundation,
        Layer::Structure,
        Layer::Overlay,
        Layer::AlwaysTop,
    ];
}

/// A textured quad placed in a world-space.
///
/// Fields are public; go through
/// [`Graphics::surface_mut`](crate::compositor::Graphics::surface_mut) so
/// changes to `layer` or `world_space` re-sort the list before the next draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    id: SurfaceId,
    pub texture: TextureId,

    /// World position of the quad's top-left corner (before `pos_offset`).
    pub pos: Point2<f32>,
    /// Added to `pos`; used to shift the drawing origin.
    pub pos_offset: Point2<f32>,
    /// Rotation pivot, relative to the unscaled quad.
    pub center: Point2<f32>,

    /// Pixel size of the source image.
    pub dimensions: Size2<f32>,
    /// Drawn size before `scale`.
    pub size_offset: Size2<f32>,
    pub scale: Size2<f32>,
    /// Degrees, clockwise on screen.
    pub rotation: f32,

    pub color: Color,
    pub layer: Layer,
    pub world_space: u32,
    pub active: bool,
}

impl Surface {
    /// Builds a surface covering a whole `width` x `height` texture with the
    /// loading defaults: origin placement, centered pivot, unit scale, white
    /// tint, background layer, world-space 0, active.
    pub(crate) fn from_texture(id: SurfaceId, texture: TextureId, size: Size2<u32>) -> Self {
        let dimensions = size.as_f32();
        Self {
            id,
            texture,
            pos: Point2::zero(),
            pos_offset: Point2::zero(),
            center: Point2::new(dimensions.w / 2.0, dimensions.h / 2.0),
            dimensions,
            size_offset: dimensions,
            scale: Size2::splat(1.0),
            rotation: 0.0,
            color: Color::white(),
            layer: Layer::Background,
            world_space: 0,
            active: true,
        }
    }

    #[inline]
    pub fn id(&self) -> SurfaceId {
        self.id
    }

    /// Size on screen before camera zoom.
    #[inline]
    pub fn drawn_size(&self) -> Size2<f32> {
        self.size_offset * self.scale
    }
}
