//! CPU mirror of the shader's two entry points.
//!
//! Both stages are pure: same input, same output, no shared state. They are
//! kept in lockstep with `shader/pass_through.wgsl`.

mod fragment;
mod vertex;

pub use fragment::fs_main;
pub use vertex::{vs_main, VertexInput, VertexOutput};
