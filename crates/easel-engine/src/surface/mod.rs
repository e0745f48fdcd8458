//! Surfaces (sprites) and the sorted collection they live in.
//!
//! Responsibilities:
//! - describe a drawable quad independent of any GPU
//! - keep deterministic paint order (world-space, layer, insertion order)
//! - hold decoded pixels until a renderer uploads them

mod key;
mod list;
#[allow(clippy::module_inception)]
mod surface;
mod texture;

pub use key::{cmp_camera, cmp_layer, SortKey};
pub use list::SurfaceList;
pub use surface::{Layer, Surface, SurfaceId};
pub use texture::{TextureData, TextureId, TextureStore};
