use crate::shader::{self, FS_ENTRY, VS_ENTRY};
use crate::stage::VertexInput;

use super::{PipelineInit, RenderCtx};

/// Render pipeline linking `vs_main` -> rasterizer -> `fs_main`.
///
/// Built lazily for the context's target format and rebuilt when the format
/// changes.
#[derive(Default)]
pub struct PassThroughPipeline {
    init: PipelineInit,

    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
}

impl PassThroughPipeline {
    pub fn new(init: PipelineInit) -> Self {
        Self {
            init,
            ..Default::default()
        }
    }

    pub fn init(&self) -> &PipelineInit {
        &self.init
    }

    /// The cached pipeline, if [`ensure`](Self::ensure) has run.
    pub fn pipeline(&self) -> Option<&wgpu::RenderPipeline> {
        self.pipeline.as_ref()
    }

    /// Format the cached pipeline targets.
    pub fn format(&self) -> Option<wgpu::TextureFormat> {
        self.pipeline_format
    }

    /// Builds the pipeline for `ctx.format` unless an up-to-date one is cached.
    ///
    /// Layout mismatches surface as wgpu validation errors on the device.
    pub fn ensure(&mut self, ctx: &RenderCtx<'_>) -> &wgpu::RenderPipeline {
        if self.pipeline_format != Some(ctx.format) {
            self.pipeline = None;
            self.pipeline_format = Some(ctx.format);
        }

        let init = self.init;
        self.pipeline.get_or_insert_with(|| create_pipeline(ctx, &init))
    }
}

fn create_pipeline(ctx: &RenderCtx<'_>, init: &PipelineInit) -> wgpu::RenderPipeline {
    log::debug!("creating pass-through pipeline for {:?}", ctx.format);

    let shader = ctx.device.create_shader_module(shader::module_descriptor());

    let pipeline_layout = ctx
        .device
        .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("vertex-colour pipeline layout"),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

    ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("vertex-colour pipeline"),
        layout: Some(&pipeline_layout),

        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some(VS_ENTRY),
            compilation_options: Default::default(),
            buffers: &[VertexInput::layout()],
        },

        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some(FS_ENTRY),
            compilation_options: Default::default(),
            targets: &[Some(init.color_target(ctx.format))],
        }),

        primitive: init.primitive_state(),

        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),

        multiview_mask: None,
        cache: None,
    })
}

#[cfg(test)]
mod tests {
    use wgpu::util::DeviceExt;

    use super::*;
    use crate::device::{Gpu, GpuInit};
    use crate::mesh::{QUAD_INDICES, QUAD_VERTICES, TRIANGLE_VERTICES};
    use crate::raster::{ColorTarget, Rasterizer};

    // 256 px * 4 bytes keeps rows at COPY_BYTES_PER_ROW_ALIGNMENT.
    const SIZE: u32 = 256;
    const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

    fn gpu() -> Option<Gpu> {
        match Gpu::headless_blocking(GpuInit {
            power_preference: wgpu::PowerPreference::LowPower,
            ..Default::default()
        }) {
            Ok(gpu) => Some(gpu),
            Err(err) => {
                eprintln!("skipping: no GPU adapter ({err:#})");
                None
            }
        }
    }

    #[test]
    fn pipeline_is_lazy() {
        let pipeline = PassThroughPipeline::default();
        assert!(pipeline.pipeline().is_none());
        assert!(pipeline.format().is_none());
        assert_eq!(*pipeline.init(), PipelineInit::default());
    }

    #[test]
    fn builds_and_caches_per_format() {
        let Some(gpu) = gpu() else { return };
        let mut pipeline = PassThroughPipeline::new(PipelineInit::default());

        pipeline.ensure(&RenderCtx::new(gpu.device(), wgpu::TextureFormat::Rgba8UnormSrgb));
        assert_eq!(pipeline.format(), Some(wgpu::TextureFormat::Rgba8UnormSrgb));

        pipeline.ensure(&RenderCtx::new(gpu.device(), wgpu::TextureFormat::Bgra8Unorm));
        assert_eq!(pipeline.format(), Some(wgpu::TextureFormat::Bgra8Unorm));
        assert!(pipeline.pipeline().is_some());
    }

    /// Draws into an offscreen target cleared to transparent black and reads
    /// it back row-major as RGBA in `[0, 1]`.
    fn render_offscreen(gpu: &Gpu, vertices: &[VertexInput], indices: Option<&[u16]>) -> Vec<[f32; 4]> {
        let device = gpu.device();
        let mut passthrough = PassThroughPipeline::default();
        let pipeline = passthrough.ensure(&RenderCtx::new(device, FORMAT));

        let extent = wgpu::Extent3d { width: SIZE, height: SIZE, depth_or_array_layers: 1 };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("offscreen target"),
            size: extent,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let vbo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("offscreen vbo"),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let ibo = indices.map(|indices| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("offscreen ibo"),
                contents: bytemuck::cast_slice(indices),
                usage: wgpu::BufferUsages::INDEX,
            })
        });
        let readback = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("offscreen readback"),
            size: u64::from(SIZE * SIZE * 4),
            usage: wgpu::BufferUsages::MAP_READ | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("offscreen encoder"),
        });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("offscreen pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            rpass.set_pipeline(pipeline);
            rpass.set_vertex_buffer(0, vbo.slice(..));
            match (&ibo, indices) {
                (Some(ibo), Some(indices)) => {
                    rpass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint16);
                    rpass.draw_indexed(0..indices.len() as u32, 0, 0..1);
                }
                _ => rpass.draw(0..vertices.len() as u32, 0..1),
            }
        }
        encoder.copy_texture_to_buffer(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            wgpu::TexelCopyBufferInfo {
                buffer: &readback,
                layout: wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(SIZE * 4),
                    rows_per_image: Some(SIZE),
                },
            },
            extent,
        );
        gpu.queue().submit(std::iter::once(encoder.finish()));

        let slice = readback.slice(..);
        let (tx, rx) = std::sync::mpsc::channel();
        slice.map_async(wgpu::MapMode::Read, move |result| {
            let _ = tx.send(result);
        });
        device.poll(wgpu::PollType::wait_indefinitely()).unwrap();
        rx.recv().unwrap().unwrap();

        let pixels = {
            let bytes = slice.get_mapped_range();
            bytes
                .chunks_exact(4)
                .map(|p| [0, 1, 2, 3].map(|c| f32::from(p[c]) / 255.0))
                .collect()
        };
        readback.unmap();
        pixels
    }

    fn at(pixels: &[[f32; 4]], x: u32, y: u32) -> [f32; 4] {
        pixels[(y * SIZE + x) as usize]
    }

    fn reference(vertices: &[VertexInput], indices: Option<&[u16]>) -> ColorTarget {
        let mut target = ColorTarget::new(SIZE, SIZE).unwrap();
        let raster = Rasterizer::default();
        match indices {
            Some(indices) => {
                raster.draw_indexed(&mut target, vertices, indices).unwrap();
            }
            None => {
                raster.draw(&mut target, vertices);
            }
        }
        target
    }

    /// Covered on the CPU along with all four neighbours.
    fn interior(t: &ColorTarget, x: u32, y: u32) -> bool {
        let covered = |x: Option<u32>, y: Option<u32>| match (x, y) {
            (Some(x), Some(y)) => t.is_covered(x, y),
            _ => false,
        };
        covered(Some(x), Some(y))
            && covered(x.checked_sub(1), Some(y))
            && covered(Some(x + 1), Some(y))
            && covered(Some(x), y.checked_sub(1))
            && covered(Some(x), Some(y + 1))
    }

    /// Neither the pixel nor any neighbour is covered on the CPU.
    fn exterior(t: &ColorTarget, x: u32, y: u32) -> bool {
        let near = |dx: i64, dy: i64| {
            let (nx, ny) = (i64::from(x) + dx, i64::from(y) + dy);
            nx >= 0 && ny >= 0 && t.is_covered(nx as u32, ny as u32)
        };
        !(-1..=1).any(|dy| (-1..=1).any(|dx| near(dx, dy)))
    }

    fn assert_matches_reference(gpu_pixels: &[[f32; 4]], cpu: &ColorTarget) {
        for y in 0..SIZE {
            for x in 0..SIZE {
                let got = at(gpu_pixels, x, y);
                if interior(cpu, x, y) {
                    let want = cpu.pixel(x, y).unwrap();
                    assert_eq!(got[3], 1.0, "alpha at ({x}, {y})");
                    for c in 0..3 {
                        assert!((got[c] - want[c]).abs() < 0.02, "({x}, {y}) channel {c}: {got:?} vs {want:?}");
                    }
                } else if exterior(cpu, x, y) {
                    assert_eq!(got, [0.0; 4], "clear colour at ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn gpu_triangle_corners_converge_to_vertex_colours() {
        let Some(gpu) = gpu() else { return };
        let pixels = render_offscreen(&gpu, &TRIANGLE_VERTICES, None);

        let [r, g, b, a] = at(&pixels, 127, 70);
        assert!(r > 0.9 && g < 0.1 && b < 0.1 && a == 1.0, "top: {r} {g} {b} {a}");

        let [r, g, b, a] = at(&pixels, 68, 189);
        assert!(g > 0.9 && r < 0.1 && b < 0.1 && a == 1.0, "bottom-left: {r} {g} {b} {a}");

        let [r, g, b, a] = at(&pixels, 187, 189);
        assert!(b > 0.9 && r < 0.1 && g < 0.1 && a == 1.0, "bottom-right: {r} {g} {b} {a}");
    }

    #[test]
    fn gpu_triangle_matches_reference_rasterizer() {
        let Some(gpu) = gpu() else { return };
        let pixels = render_offscreen(&gpu, &TRIANGLE_VERTICES, None);
        assert_matches_reference(&pixels, &reference(&TRIANGLE_VERTICES, None));
    }

    #[test]
    fn gpu_indexed_quad_matches_reference_rasterizer() {
        let Some(gpu) = gpu() else { return };
        let pixels = render_offscreen(&gpu, &QUAD_VERTICES, Some(&QUAD_INDICES));
        let cpu = reference(&QUAD_VERTICES, Some(&QUAD_INDICES));
        assert_eq!(cpu.covered(), 128 * 128);
        assert_matches_reference(&pixels, &cpu);
    }

    #[test]
    fn gpu_degenerate_triangle_leaves_target_clear() {
        let Some(gpu) = gpu() else { return };
        let point = VertexInput::new([0.25, 0.25, 0.0], [1.0, 1.0, 1.0]);
        let pixels = render_offscreen(&gpu, &[point; 3], None);
        assert!(pixels.iter().all(|p| *p == [0.0; 4]));
    }
}
