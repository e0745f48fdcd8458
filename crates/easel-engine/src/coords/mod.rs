//! Geometry value types shared by windows, cameras and surfaces.
//!
//! Canonical spaces:
//! - window metrics are whole pixels (`u32`)
//! - world, camera and surface coordinates are `f32`
//! - +X right, +Y down; angles in degrees

mod color;
mod point;
mod rect;
mod size;
mod velocity;

pub use color::Color;
pub use point::Point2;
pub use rect::Rect;
pub use size::Size2;
pub use velocity::{AngularDir, AngularVel};
