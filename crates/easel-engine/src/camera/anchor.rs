use crate::coords::Point2;
use crate::error::{GraphicsError, Result};

/// Handle to a point stored in [`Anchors`].
///
/// Handles are generational: once the slot is removed the handle stays dead
/// even if the slot is reused.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct AnchorId {
    index: u32,
    generation: u32,
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    value: Option<Point2<f32>>,
}

/// Table of external points that cameras follow (players, NPCs, markers).
///
/// The owner of the followed thing writes its position here every frame;
/// cameras resolve their handle when they need an effective world position.
#[derive(Debug, Default)]
pub struct Anchors {
    slots: Vec<Slot>,
    free: Vec<u32>,
}

impl Anchors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, point: Point2<f32>) -> AnchorId {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.value = Some(point);
            return AnchorId { index, generation: slot.generation };
        }

        let index = self.slots.len() as u32;
        self.slots.push(Slot { generation: 0, value: Some(point) });
        AnchorId { index, generation: 0 }
    }

    pub fn get(&self, id: AnchorId) -> Result<Point2<f32>> {
        self.slot(id)
            .and_then(|s| s.value)
            .ok_or(GraphicsError::AnchorMissing(id))
    }

    pub fn set(&mut self, id: AnchorId, point: Point2<f32>) -> Result<()> {
        match self.slot_mut(id).and_then(|s| s.value.as_mut()) {
            Some(v) => {
                *v = point;
                Ok(())
            }
            None => Err(GraphicsError::AnchorMissing(id)),
        }
    }

    /// Removes the anchor. Cameras still bound to it report
    /// [`GraphicsError::AnchorMissing`] until they are rebound.
    pub fn remove(&mut self, id: AnchorId) -> Option<Point2<f32>> {
        let slot = self.slot_mut(id)?;
        let value = slot.value.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        Some(value)
    }

    #[inline]
    pub fn contains(&self, id: AnchorId) -> bool {
        self.get(id).is_ok()
    }

    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot(&self, id: AnchorId) -> Option<&Slot> {
        self.slots
            .get(id.index as usize)
            .filter(|s| s.generation == id.generation)
    }

    fn slot_mut(&mut self, id: AnchorId) -> Option<&mut Slot> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|s| s.generation == id.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_get_set() {
        let mut anchors = Anchors::new();
        let id = anchors.insert(Point2::new(1.0, 2.0));
        assert_eq!(anchors.get(id).unwrap(), Point2::new(1.0, 2.0));

        anchors.set(id, Point2::new(5.0, -1.0)).unwrap();
        assert_eq!(anchors.get(id).unwrap(), Point2::new(5.0, -1.0));
        assert_eq!(anchors.len(), 1);
    }

    #[test]
    fn removed_handle_is_dead_even_after_slot_reuse() {
        let mut anchors = Anchors::new();
        let old = anchors.insert(Point2::new(1.0, 1.0));
        assert_eq!(anchors.remove(old), Some(Point2::new(1.0, 1.0)));

        let new = anchors.insert(Point2::new(9.0, 9.0));
        assert_ne!(old, new);
        assert!(matches!(anchors.get(old), Err(GraphicsError::AnchorMissing(id)) if id == old));
        assert!(anchors.set(old, Point2::zero()).is_err());
        assert_eq!(anchors.get(new).unwrap(), Point2::new(9.0, 9.0));
    }

    #[test]
    fn double_remove_is_none() {
        let mut anchors = Anchors::new();
        let id = anchors.insert(Point2::zero());
        assert!(anchors.remove(id).is_some());
        assert!(anchors.remove(id).is_none());
        assert!(anchors.is_empty());
    }
}
