use std::collections::HashMap;

use crate::coords::Size2;

/// Handle to decoded pixel data in a [`TextureStore`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub(crate) u32);

/// Decoded RGBA8 image, row-major, tightly packed.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureData {
    size: Size2<u32>,
    pixels: Vec<u8>,
}

impl TextureData {
    #[inline]
    pub fn size(&self) -> Size2<u32> {
        self.size
    }

    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

/// CPU-side copies of every texture surfaces refer to.
///
/// Renderers upload lazily, once per GPU device, and drop their copy when an
/// id disappears from the store.
#[derive(Debug, Default)]
pub struct TextureStore {
    textures: HashMap<TextureId, TextureData>,
    next_id: u32,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, image: image::RgbaImage) -> TextureId {
        let id = TextureId(self.next_id);
        self.next_id += 1;

        let size = Size2::new(image.width(), image.height());
        self.textures.insert(id, TextureData { size, pixels: image.into_raw() });
        id
    }

    #[inline]
    pub fn get(&self, id: TextureId) -> Option<&TextureData> {
        self.textures.get(&id)
    }

    #[inline]
    pub fn contains(&self, id: TextureId) -> bool {
        self.textures.contains_key(&id)
    }

    pub fn remove(&mut self, id: TextureId) -> Option<TextureData> {
        self.textures.remove(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_rgba_bytes() {
        let mut store = TextureStore::new();
        let img = image::RgbaImage::from_pixel(3, 2, image::Rgba([1, 2, 3, 4]));
        let id = store.insert(img);

        let data = store.get(id).unwrap();
        assert_eq!(data.size(), Size2::new(3, 2));
        assert_eq!(data.pixels().len(), 3 * 2 * 4);
        assert_eq!(&data.pixels()[..4], &[1, 2, 3, 4]);
    }

    #[test]
    fn ids_are_not_reused() {
        let mut store = TextureStore::new();
        let a = store.insert(image::RgbaImage::new(1, 1));
        store.remove(a);
        let b = store.insert(image::RgbaImage::new(1, 1));
        assert_ne!(a, b);
        assert!(!store.contains(a));
    }
}
