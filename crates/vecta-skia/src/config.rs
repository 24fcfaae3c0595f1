/// Rasterizer settings, fixed for the lifetime of a [`SkiaRenderer`](crate::SkiaRenderer).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SkiaConfig {
    /// Anti-alias fills, strokes and clip masks.
    pub anti_alias: bool,
    /// Bounds edges closer than this to a whole pixel snap onto it.
    pub snap_epsilon: f32,
}

impl Default for SkiaConfig {
    fn default() -> Self {
        Self { anti_alias: true, snap_epsilon: 1e-3 }
    }
}
