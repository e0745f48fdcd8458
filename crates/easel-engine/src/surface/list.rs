use std::collections::HashMap;
use std::ops::Range;

use super::key::{cmp_camera, cmp_layer};
use super::{SortKey, Surface, SurfaceId};

#[derive(Debug, Clone)]
struct Slot {
    order: u64,
    surface: Surface,
}

/// Flat surface collection kept in paint order.
///
/// Surfaces are grouped by world-space and ordered by layer inside each
/// group, so a camera walks one contiguous sub-range per frame.
///
/// - `insert()` sorts immediately
/// - `get_mut()` only marks the list dirty; call `ensure_sorted()` before reading ranges
#[derive(Debug, Default)]
pub struct SurfaceList {
    slots: Vec<Slot>,
    index: HashMap<SurfaceId, usize>,
    next_id: u64,
    next_order: u64,
    dirty: bool,
}

impl SurfaceList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub(crate) fn next_id(&mut self) -> SurfaceId {
        let id = SurfaceId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Adds a surface and restores paint order.
    pub fn insert(&mut self, surface: Surface) -> SurfaceId {
        let id = surface.id();
        let order = self.next_order;
        self.next_order += 1;

        self.slots.push(Slot { order, surface });
        self.sort();
        id
    }

    #[inline]
    pub fn get(&self, id: SurfaceId) -> Option<&Surface> {
        self.index.get(&id).map(|&i| &self.slots[i].surface)
    }

    /// Mutable access. Layer or world-space edits take effect at the next
    /// `ensure_sorted()`.
    pub fn get_mut(&mut self, id: SurfaceId) -> Option<&mut Surface> {
        let &i = self.index.get(&id)?;
        self.dirty = true;
        Some(&mut self.slots[i].surface)
    }

    /// Sets the active flag without invalidating the order.
    pub fn set_active(&mut self, id: SurfaceId, active: bool) -> bool {
        match self.index.get(&id) {
            Some(&i) => {
                self.slots[i].surface.active = active;
                true
            }
            None => false,
        }
    }

    /// Removes every surface for which `keep` returns `false`.
    pub fn retain<F>(&mut self, mut keep: F) -> Vec<Surface>
    where
        F: FnMut(&Surface) -> bool,
    {
        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(self.slots.len());
        for slot in self.slots.drain(..) {
            if keep(&slot.surface) {
                kept.push(slot);
            } else {
                removed.push(slot.surface);
            }
        }
        self.slots = kept;
        self.rebuild_index();
        removed
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn ensure_sorted(&mut self) {
        if self.dirty {
            self.sort();
        }
    }

    /// Surfaces in paint order.
    pub fn iter(&self) -> impl Iterator<Item = &Surface> {
        self.slots.iter().map(|s| &s.surface)
    }

    /// Index range of the surfaces tagged `world_space`.
    ///
    /// Requires a sorted list (see `ensure_sorted`).
    pub(crate) fn world_space_range(&self, world_space: u32) -> Range<usize> {
        debug_assert!(!self.dirty, "world_space_range on an unsorted SurfaceList");
        let start = self
            .slots
            .partition_point(|s| s.surface.world_space < world_space);
        let end = self
            .slots
            .partition_point(|s| s.surface.world_space <= world_space);
        start..end
    }

    /// Surfaces tagged `world_space`, in paint order.
    pub(crate) fn in_world_space(&self, world_space: u32) -> impl Iterator<Item = &Surface> {
        self.slots[self.world_space_range(world_space)]
            .iter()
            .map(|s| &s.surface)
    }

    /// Checks the grouping invariant: world-space major, layer minor.
    pub fn is_paint_ordered(&self) -> bool {
        self.slots.windows(2).all(|w| {
            let (a, b) = (&w[0].surface, &w[1].surface);
            cmp_camera(a, b).then_with(|| cmp_layer(a, b)).is_le()
        })
    }

    fn sort(&mut self) {
        // Stable, and the key carries insertion order for equal (world-space, layer).
        self.slots.sort_by_key(|s| SortKey::of(&s.surface, s.order));
        self.rebuild_index();
        self.dirty = false;
    }

    fn rebuild_index(&mut self) {
        self.index.clear();
        self.index.extend(
            self.slots
                .iter()
                .enumerate()
                .map(|(i, s)| (s.surface.id(), i)),
        );
    }
}
