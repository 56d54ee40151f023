/// Pipeline-facing context (device + colour target format).
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub format: wgpu::TextureFormat,
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(device: &'a wgpu::Device, format: wgpu::TextureFormat) -> Self {
        Self { device, format }
    }
}

/// Picks a target format from `formats`, preferring an sRGB one.
///
/// Falls back to the first entry; `None` only when `formats` is empty.
pub fn preferred_format(formats: &[wgpu::TextureFormat]) -> Option<wgpu::TextureFormat> {
    formats
        .iter()
        .copied()
        .find(|f| f.is_srgb())
        .or_else(|| formats.first().copied())
}
