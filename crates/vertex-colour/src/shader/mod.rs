//! The WGSL pass-through shader and its binding contract.
//!
//! Interface:
//! - `vs_main`: `@location(0) position: vec3<f32>`, `@location(1) colour: vec3<f32>`
//!   -> `@builtin(position)` + `@location(0) colour`
//! - `fs_main`: `@location(0) colour` -> `@location(0) vec4<f32>`
//!
//! The Rust mirror of both entry points lives in [`crate::stage`].

/// WGSL source of the pass-through program.
pub const SHADER_SOURCE: &str = include_str!("pass_through.wgsl");

/// Vertex entry point name.
pub const VS_ENTRY: &str = "vs_main";

/// Fragment entry point name.
pub const FS_ENTRY: &str = "fs_main";

/// Vertex input location of the 3-component position.
pub const POSITION_LOCATION: u32 = 0;

/// Vertex input location of the 3-component colour.
pub const COLOUR_LOCATION: u32 = 1;

/// Fragment output location of the RGBA colour (the sole render target).
pub const COLOUR_TARGET_LOCATION: u32 = 0;

/// Descriptor for creating the shader module on a device.
pub fn module_descriptor() -> wgpu::ShaderModuleDescriptor<'static> {
    wgpu::ShaderModuleDescriptor {
        label: Some("vertex-colour shader"),
        source: wgpu::ShaderSource::Wgsl(SHADER_SOURCE.into()),
    }
}
