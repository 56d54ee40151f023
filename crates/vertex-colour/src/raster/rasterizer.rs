use crate::render::PipelineInit;
use crate::stage::{fs_main, vs_main, VertexInput, VertexOutput};

use super::{ColorTarget, RasterError};

/// Counters for one draw call.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct DrawStats {
    /// Triangles assembled from the vertex/index stream.
    pub triangles: usize,
    /// Triangles discarded by face culling.
    pub culled: usize,
    /// Zero-area (or NaN-area) triangles skipped.
    pub degenerate: usize,
    /// Fragment stage invocations.
    pub fragments: usize,
}

/// Single-threaded triangle-list rasterizer driving the CPU stages.
#[derive(Debug, Clone, Default)]
pub struct Rasterizer {
    init: PipelineInit,
}

impl Rasterizer {
    pub fn new(init: PipelineInit) -> Self {
        Self { init }
    }

    /// Draws `vertices` as a triangle list. Trailing vertices that do not
    /// form a full triangle are ignored.
    pub fn draw(&self, target: &mut ColorTarget, vertices: &[VertexInput]) -> DrawStats {
        let shaded: Vec<VertexOutput> = vertices.iter().copied().map(vs_main).collect();
        let mut stats = DrawStats::default();

        drop_trailing(vertices.len(), "vertices");
        for tri in shaded.chunks_exact(3) {
            self.rasterize(target, [tri[0], tri[1], tri[2]], &mut stats);
        }

        log::debug!("draw: {stats:?}");
        stats
    }

    /// Draws `indices` into `vertices` as a triangle list.
    ///
    /// Every index is checked before anything is written; on error the
    /// target is untouched.
    pub fn draw_indexed(
        &self,
        target: &mut ColorTarget,
        vertices: &[VertexInput],
        indices: &[u16],
    ) -> Result<DrawStats, RasterError> {
        if let Some(&bad) = indices.iter().find(|&&i| usize::from(i) >= vertices.len()) {
            return Err(RasterError::IndexOutOfRange {
                index: u32::from(bad),
                vertex_count: vertices.len(),
            });
        }

        let shaded: Vec<VertexOutput> = vertices.iter().copied().map(vs_main).collect();
        let mut stats = DrawStats::default();

        drop_trailing(indices.len(), "indices");
        for tri in indices.chunks_exact(3) {
            let tri = [
                shaded[usize::from(tri[0])],
                shaded[usize::from(tri[1])],
                shaded[usize::from(tri[2])],
            ];
            self.rasterize(target, tri, &mut stats);
        }

        log::debug!("draw_indexed: {stats:?}");
        Ok(stats)
    }

    fn rasterize(&self, target: &mut ColorTarget, tri: [VertexOutput; 3], stats: &mut DrawStats) {
        stats.triangles += 1;

        // Setup runs in f64 so huge but finite clip positions keep a finite area.
        let [p0, p1, p2] = tri.map(|v| to_ndc(v.clip_position));
        let area = edge(p0, p1, p2);
        if area == 0.0 || area.is_nan() {
            log::trace!("skipping degenerate triangle {tri:?}");
            stats.degenerate += 1;
            return;
        }
        if self.init.culls(area) {
            log::trace!("culled triangle (area {area})");
            stats.culled += 1;
            return;
        }
        let inv_area = 1.0 / area;

        // Bounding box in target pixels; coverage below is tested in NDC.
        let (w, h) = (f64::from(target.width()), f64::from(target.height()));
        let xs = [p0[0], p1[0], p2[0]].map(|x| (x + 1.0) * 0.5 * w);
        let ys = [p0[1], p1[1], p2[1]].map(|y| (1.0 - y) * 0.5 * h);
        let Some((min_x, max_x)) = pixel_span(min3(xs), max3(xs), target.width()) else { return };
        let Some((min_y, max_y)) = pixel_span(min3(ys), max3(ys), target.height()) else { return };

        let inv_w = tri.map(|v| 1.0 / f64::from(v.clip_position[3]));

        for y in min_y..=max_y {
            let ndc_y = 1.0 - (f64::from(y) + 0.5) / h * 2.0;
            for x in min_x..=max_x {
                let p = [(f64::from(x) + 0.5) / w * 2.0 - 1.0, ndc_y, 0.0];

                let b0 = edge(p1, p2, p) * inv_area;
                let b1 = edge(p2, p0, p) * inv_area;
                let b2 = edge(p0, p1, p) * inv_area;
                // Written so NaN weights count as outside.
                if !(b0 >= 0.0 && b1 >= 0.0 && b2 >= 0.0) {
                    continue;
                }

                let depth = b0 * p0[2] + b1 * p1[2] + b2 * p2[2];
                if !(0.0..=1.0).contains(&depth) {
                    continue;
                }

                // Perspective-correct weights; with w == 1 these equal b0..b2.
                let pw = [b0 * inv_w[0], b1 * inv_w[1], b2 * inv_w[2]];
                let frag_inv_w = pw[0] + pw[1] + pw[2];
                let colour = std::array::from_fn(|c| {
                    let mixed = pw[0] * f64::from(tri[0].colour[c])
                        + pw[1] * f64::from(tri[1].colour[c])
                        + pw[2] * f64::from(tri[2].colour[c]);
                    (mixed / frag_inv_w) as f32
                });

                let fragment = VertexOutput {
                    clip_position: [x as f32 + 0.5, y as f32 + 0.5, depth as f32, frag_inv_w as f32],
                    colour,
                };
                target.write(x, y, fs_main(fragment));
                stats.fragments += 1;
            }
        }
    }
}

/// Twice the signed area of `(a, b, c)`; positive when counter-clockwise (+Y up).
#[inline]
fn edge(a: [f64; 3], b: [f64; 3], c: [f64; 3]) -> f64 {
    (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0])
}

#[inline]
fn to_ndc(clip: [f32; 4]) -> [f64; 3] {
    let [x, y, z, w] = clip.map(f64::from);
    [x / w, y / w, z / w]
}

/// Inclusive pixel range overlapping `[lo, hi]`, clamped to `0..extent`.
fn pixel_span(lo: f64, hi: f64, extent: u32) -> Option<(u32, u32)> {
    let lo = lo.floor().max(0.0);
    let hi = hi.ceil().min(f64::from(extent) - 1.0);
    (lo <= hi).then_some((lo as u32, hi as u32))
}

#[inline]
fn min3(v: [f64; 3]) -> f64 {
    v[0].min(v[1]).min(v[2])
}

#[inline]
fn max3(v: [f64; 3]) -> f64 {
    v[0].max(v[1]).max(v[2])
}

fn drop_trailing(len: usize, what: &str) {
    let rest = len % 3;
    if rest != 0 {
        log::debug!("ignoring {rest} trailing {what} (incomplete triangle)");
    }
}
