use super::VertexOutput;

/// Fragment stage: the interpolated colour with alpha forced to 1.
#[inline]
pub fn fs_main(input: VertexOutput) -> [f32; 4] {
    let [r, g, b] = input.colour;
    [r, g, b, 1.0]
}
