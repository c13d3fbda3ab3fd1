use std::ops::Range;

use crate::render::TextureId;

/// Which pipeline (and therefore which vertex stream) a command draws with.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PipelineKind {
    /// World-space textured tiles, camera applied on the GPU.
    Tile,
    /// Alpha-only glyph quads.
    Text,
    /// Solid triangles: rectangles, lines, sized dots.
    Color,
    /// Single-vertex dots. Shares the color stream.
    Points,
    /// Tinted textured quads, batched.
    Sprite,
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCmd {
    pub pipeline: PipelineKind,
    pub texture: Option<TextureId>,
    /// Vertex range within the pipeline's stream.
    pub vertices: Range<u32>,
}

impl DrawCmd {
    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.vertices.end - self.vertices.start
    }
}
