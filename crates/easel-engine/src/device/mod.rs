//! wgpu device and swapchain, one per native window.

mod frame;
mod gpu;
mod init;

pub use frame::{GpuFrame, SurfaceErrorAction};
pub use gpu::Gpu;
pub use init::GpuInit;
