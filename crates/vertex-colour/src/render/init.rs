/// Fixed-function state around the pass-through shader.
///
/// Also drives face culling in the reference rasterizer, so CPU and GPU
/// output agree on which triangles are drawn.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PipelineInit {
    /// Winding that counts as front-facing.
    pub front_face: wgpu::FrontFace,

    /// Faces to discard; `None` draws both.
    pub cull_mode: Option<wgpu::Face>,

    /// Colour blending for the single target.
    pub blend: Option<wgpu::BlendState>,

    pub write_mask: wgpu::ColorWrites,
}

impl Default for PipelineInit {
    fn default() -> Self {
        Self {
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: Some(wgpu::Face::Back),
            blend: Some(wgpu::BlendState::REPLACE),
            write_mask: wgpu::ColorWrites::ALL,
        }
    }
}

impl PipelineInit {
    pub fn primitive_state(&self) -> wgpu::PrimitiveState {
        wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: self.front_face,
            cull_mode: self.cull_mode,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        }
    }

    pub fn color_target(&self, format: wgpu::TextureFormat) -> wgpu::ColorTargetState {
        wgpu::ColorTargetState {
            format,
            blend: self.blend,
            write_mask: self.write_mask,
        }
    }

    /// Returns true if a triangle with the given signed NDC area is discarded.
    ///
    /// Positive area is counter-clockwise with +Y up.
    pub fn culls(&self, signed_area: f64) -> bool {
        let Some(face) = self.cull_mode else { return false };
        let ccw = signed_area > 0.0;
        let front = match self.front_face {
            wgpu::FrontFace::Ccw => ccw,
            wgpu::FrontFace::Cw => !ccw,
        };
        match face {
            wgpu::Face::Front => front,
            wgpu::Face::Back => !front,
        }
    }
}
