//! Cameras and the anchor table they follow.
//!
//! A camera maps a rectangle of one world-space onto a rectangle of one
//! window. Cameras refer to windows by index and to followed points by
//! [`AnchorId`], never by reference.

mod anchor;
#[allow(clippy::module_inception)]
mod camera;

pub use anchor::{AnchorId, Anchors};
pub use camera::{derive_resolution, Camera, CameraDesc, CameraIndex, CameraParts};
