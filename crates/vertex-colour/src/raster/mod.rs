//! CPU reference executor for the pass-through program.
//!
//! Runs [`vs_main`](crate::stage::vs_main) per vertex, assembles a triangle
//! list, rasterizes it at pixel centres and runs
//! [`fs_main`](crate::stage::fs_main) per covered pixel. It stands in for the
//! fixed-function hardware when checking the shader's end-to-end behaviour.
//!
//! Conventions:
//! - NDC: +X right, +Y up, visible depth `[0, 1]`
//! - Target: row-major, origin top-left, +Y down

mod error;
mod rasterizer;
mod target;

pub use error::RasterError;
pub use rasterizer::{DrawStats, Rasterizer};
pub use target::ColorTarget;
