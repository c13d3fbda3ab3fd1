use std::ops::Range;

use glam::Mat4;

use crate::coords::Viewport;
use crate::render::{RendererLimits, TextureId};

use super::{ColorVertex, DrawCmd, DrawError, PipelineKind, SpriteVertex, TileVertex, UiVertex, VertexStream};

/// Recorded draws for one frame.
///
/// Call [`DrawList::begin_frame`] once per frame before drawing; it resets all
/// streams and captures the viewport and camera the frame is drawn with.
#[derive(Debug)]
pub struct DrawList {
    pub(crate) tiles: VertexStream<TileVertex>,
    pub(crate) text: VertexStream<UiVertex>,
    pub(crate) color: VertexStream<ColorVertex>,
    pub(crate) sprites: VertexStream<SpriteVertex>,

    /// Start of the open sprite batch.
    pub(crate) batch_start: u32,

    cmds: Vec<DrawCmd>,
    viewport: Viewport,
    view_proj: Mat4,
}

impl DrawList {
    pub fn new(limits: RendererLimits) -> Self {
        Self {
            tiles: VertexStream::new("tile", limits.max_tile_vertices),
            text: VertexStream::new("text", limits.max_text_vertices),
            color: VertexStream::new("color", limits.max_color_vertices),
            sprites: VertexStream::new("sprite", limits.max_sprite_vertices),
            batch_start: 0,
            cmds: Vec::new(),
            viewport: Viewport::default(),
            view_proj: Mat4::IDENTITY,
        }
    }

    /// Starts a new buffer generation. Keeps allocated capacity.
    pub fn begin_frame(&mut self, viewport: Viewport, view_proj: Mat4) {
        if self.sprites.len() > self.batch_start {
            log::warn!(
                "{} buffered sprite vertices dropped without flush_batch",
                self.sprites.len() - self.batch_start
            );
        }
        self.tiles.reset();
        self.text.reset();
        self.color.reset();
        self.sprites.reset();
        self.batch_start = 0;
        self.cmds.clear();
        self.viewport = viewport;
        self.view_proj = view_proj;
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn view_proj(&self) -> Mat4 {
        self.view_proj
    }

    /// Commands in call order.
    #[inline]
    pub fn cmds(&self) -> &[DrawCmd] {
        &self.cmds
    }

    #[inline]
    pub fn tile_vertices(&self) -> &[TileVertex] {
        self.tiles.as_slice()
    }

    #[inline]
    pub fn text_vertices(&self) -> &[UiVertex] {
        self.text.as_slice()
    }

    #[inline]
    pub fn color_vertices(&self) -> &[ColorVertex] {
        self.color.as_slice()
    }

    #[inline]
    pub fn sprite_vertices(&self) -> &[SpriteVertex] {
        self.sprites.as_slice()
    }

    /// Draw calls recorded so far this frame.
    #[inline]
    pub fn draw_calls(&self) -> usize {
        self.cmds.len()
    }

    #[inline]
    pub(crate) fn record(&mut self, pipeline: PipelineKind, texture: Option<TextureId>, vertices: Range<u32>) {
        if vertices.is_empty() {
            return;
        }
        self.cmds.push(DrawCmd { pipeline, texture, vertices });
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new(RendererLimits::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{ColorRgba, Ndc};

    #[test]
    fn begin_frame_resets_streams_and_commands() {
        let mut list = DrawList::default();
        list.begin_frame(Viewport::new(800.0, 600.0), Mat4::IDENTITY);
        list.draw_dot(Ndc::new(0.0, 0.0), ColorRgba::white()).unwrap();
        assert_eq!(list.draw_calls(), 1);
        assert_eq!(list.color_vertices().len(), 1);

        list.begin_frame(Viewport::new(800.0, 600.0), Mat4::IDENTITY);
        assert_eq!(list.draw_calls(), 0);
        assert!(list.color_vertices().is_empty());
    }

    #[test]
    fn commands_keep_call_order_across_pipelines() {
        let mut list = DrawList::default();
        list.begin_frame(Viewport::new(800.0, 600.0), Mat4::IDENTITY);
        list.draw_dot(Ndc::new(0.0, 0.0), ColorRgba::white()).unwrap();
        list.draw_dot_sized(Ndc::new(0.5, 0.5), 4.0, ColorRgba::black()).unwrap();
        list.draw_dot(Ndc::new(0.1, 0.1), ColorRgba::white()).unwrap();

        let kinds: Vec<_> = list.cmds().iter().map(|c| c.pipeline).collect();
        assert_eq!(kinds, [PipelineKind::Points, PipelineKind::Color, PipelineKind::Points]);
        let ranges: Vec<_> = list.cmds().iter().map(|c| c.vertices.clone()).collect();
        assert_eq!(ranges, [0..1, 1..7, 7..8]);
    }
}
