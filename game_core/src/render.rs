//! Drawing seam between the simulation and whatever paints it

/// 2D surface with canvas-style fill primitives
pub trait RenderSurface {
    /// Set the color used by subsequent fills (CSS color string)
    fn set_fill_style(&mut self, style: &str);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
}
