use crate::coords::{ColorRgba, Ndc, PxRect};
use crate::scene::vertex::ndc4;
use crate::scene::{ColorVertex, DrawError, DrawList, PipelineKind};

impl DrawList {
    /// One-pixel point.
    pub fn draw_dot(&mut self, at: Ndc, color: ColorRgba) -> Result<(), DrawError> {
        let v = ColorVertex { position: ndc4(at), color: color.to_array() };
        let range = self.color.push(&[v])?;
        self.record(PipelineKind::Points, None, range);
        Ok(())
    }

    /// Square dot `diameter_px` wide centred on `at`.
    pub fn draw_dot_sized(&mut self, at: Ndc, diameter_px: f32, color: ColorRgba) -> Result<(), DrawError> {
        let center = self.viewport().ndc_to_px(at);
        self.draw_rect_px(PxRect::centered(center, diameter_px), color)
    }
}
