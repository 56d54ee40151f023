//! Reference geometry, already in clip space.
//!
//! Both meshes wind counter-clockwise (NDC, +Y up), i.e. front-facing under
//! the default [`PipelineInit`](crate::render::PipelineInit).

use crate::stage::VertexInput;

/// Red/green/blue triangle: top, bottom-left, bottom-right.
pub const TRIANGLE_VERTICES: [VertexInput; 3] = [
    VertexInput::new([0.0, 0.5, 0.0], [1.0, 0.0, 0.0]),
    VertexInput::new([-0.5, -0.5, 0.0], [0.0, 1.0, 0.0]),
    VertexInput::new([0.5, -0.5, 0.0], [0.0, 0.0, 1.0]),
];

/// Centred quad: top-left, bottom-left, bottom-right, top-right.
pub const QUAD_VERTICES: [VertexInput; 4] = [
    VertexInput::new([-0.5, 0.5, 0.0], [0.0, 1.0, 1.0]),
    VertexInput::new([-0.5, -0.5, 0.0], [0.0, 0.0, 1.0]),
    VertexInput::new([0.5, -0.5, 0.0], [0.0, 1.0, 1.0]),
    VertexInput::new([0.5, 0.5, 0.0], [0.0, 1.0, 0.0]),
];

pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];
