use core::cmp::Ordering;

use super::{Layer, Surface};

/// Stable sort key for surfaces.
///
/// Ordering rules:
/// 1) `world_space`: ascending (groups surfaces per camera world-space)
/// 2) `layer`: ascending (back-to-front within a world-space)
/// 3) `order`: ascending (insertion order for equal world-space and layer)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SortKey {
    pub world_space: u32,
    pub layer: Layer,
    pub order: u64,
}

impl SortKey {
    #[inline]
    pub fn of(surface: &Surface, order: u64) -> Self {
        Self {
            world_space: surface.world_space,
            layer: surface.layer,
            order,
        }
    }
}

impl Ord for SortKey {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.world_space
            .cmp(&other.world_space)
            .then(self.layer.cmp(&other.layer))
            .then(self.order.cmp(&other.order))
    }
}

impl PartialOrd for SortKey {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Orders by layer only.
#[inline]
pub fn cmp_layer(a: &Surface, b: &Surface) -> Ordering {
    a.layer.cmp(&b.layer)
}

/// Groups by the world-space cameras match on.
#[inline]
pub fn cmp_camera(a: &Surface, b: &Surface) -> Ordering {
    a.world_space.cmp(&b.world_space)
}
