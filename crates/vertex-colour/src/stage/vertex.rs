use bytemuck::{Pod, Zeroable};

use crate::shader::{COLOUR_LOCATION, POSITION_LOCATION};

/// Per-vertex attributes as laid out in the vertex buffer.
///
/// `position` is consumed as clip-space-ready; no view or projection is applied.
/// Whether `colour` is linear or sRGB is up to the render target format.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct VertexInput {
    pub position: [f32; 3],
    pub colour: [f32; 3],
}

impl VertexInput {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        POSITION_LOCATION => Float32x3,
        COLOUR_LOCATION => Float32x3
    ];

    #[inline]
    pub const fn new(position: [f32; 3], colour: [f32; 3]) -> Self {
        Self { position, colour }
    }

    /// Buffer layout matching `vs_main`'s inputs.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<VertexInput>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Vertex stage output: rasterizer position plus the interpolable colour.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct VertexOutput {
    pub clip_position: [f32; 4], // w is always 1
    pub colour: [f32; 3],
}

/// Vertex stage: embeds the position with `w = 1` and forwards the colour.
#[inline]
pub fn vs_main(input: VertexInput) -> VertexOutput {
    let [x, y, z] = input.position;
    VertexOutput {
        clip_position: [x, y, z, 1.0],
        colour: input.colour,
    }
}
