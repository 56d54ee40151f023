//! wgpu pipeline for the pass-through shader.
//!
//! The pipeline owns no buffers and records no passes. Callers bind a vertex
//! buffer laid out as [`VertexInput::layout`](crate::stage::VertexInput::layout)
//! and draw with it inside their own render pass.

mod ctx;
mod init;
mod pipeline;

pub use ctx::{preferred_format, RenderCtx};
pub use init::PipelineInit;
pub use pipeline::PassThroughPipeline;
