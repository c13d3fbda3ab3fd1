/// Fixed per-stream vertex capacities.
///
/// Each limit sizes both the CPU stream in `DrawList` and the matching GPU
/// vertex buffer. Pass the same value to both; `Renderer2D::render` rejects a
/// list holding more vertices than its own buffers.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RendererLimits {
    pub max_tile_vertices: usize,
    pub max_text_vertices: usize,
    /// Shared by solid triangles and points.
    pub max_color_vertices: usize,
    pub max_sprite_vertices: usize,
}

impl Default for RendererLimits {
    fn default() -> Self {
        Self {
            max_tile_vertices: 6 * 4096,
            max_text_vertices: 6 * 4096,
            max_color_vertices: 6 * 1024,
            max_sprite_vertices: 6 * 4096,
        }
    }
}
