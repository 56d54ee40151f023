/// Initialization parameters for the headless GPU layer.
///
/// Keep this structure minimal. Add fields only when a concrete backend
/// requirement exists.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Adapter power preference.
    pub power_preference: wgpu::PowerPreference,

    /// Accept only a software/fallback adapter.
    ///
    /// Useful in CI where no hardware adapter is present.
    pub force_fallback_adapter: bool,

    /// Required wgpu features.
    ///
    /// The pass-through pipeline needs none.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    pub required_limits: wgpu::Limits,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            power_preference: wgpu::PowerPreference::HighPerformance,
            force_fallback_adapter: false,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::downlevel_defaults(),
        }
    }
}
