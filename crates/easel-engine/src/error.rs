use std::path::PathBuf;

use thiserror::Error;

use crate::camera::AnchorId;
use crate::surface::SurfaceId;

/// Recoverable errors raised by the [`Graphics`](crate::compositor::Graphics) registry.
///
/// Platform start-up failures are not represented here; the runtime reports
/// those through `anyhow` and stops.
#[derive(Debug, Error)]
pub enum GraphicsError {
    #[error("failed to load image {path:?}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("image has zero width or height")]
    EmptyImage,

    #[error("image is {width}x{height}, larger than the {max} px texture limit")]
    TextureTooLarge { width: u32, height: u32, max: u32 },

    #[error("window {0} cannot be resized to zero width or height")]
    EmptyWindowSize(usize),

    #[error("window index {0} is out of range")]
    WindowOutOfRange(usize),

    #[error("camera index {0} is out of range")]
    CameraOutOfRange(usize),

    #[error("surface {0:?} does not exist")]
    SurfaceNotFound(SurfaceId),

    #[error("anchor {0:?} no longer exists")]
    AnchorMissing(AnchorId),

    #[error("window {0} lost its GPU surface")]
    SurfaceFatal(usize),
}

pub type Result<T, E = GraphicsError> = std::result::Result<T, E>;
