//! Vertex-colour pass-through shader.
//!
//! The crate owns the WGSL program, its Rust mirror, the wgpu pipeline that
//! links it, and a CPU reference rasterizer used to check it end to end.

pub mod device;
pub mod logging;
pub mod mesh;
pub mod raster;
pub mod render;
pub mod shader;
pub mod stage;
