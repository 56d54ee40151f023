//! Headless GPU device acquisition.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - exposing them to pipeline creation
//!
//! No surface is created; callers that present to a window own that part.

mod gpu;
mod init;

pub use gpu::Gpu;
pub use init::GpuInit;
