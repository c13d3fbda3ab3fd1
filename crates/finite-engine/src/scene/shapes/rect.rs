use crate::coords::{ColorRgba, Ndc, PxRect, QuadCorners};
use crate::scene::vertex::{ndc4, quad};
use crate::scene::{ColorVertex, DrawError, DrawList, PipelineKind};

impl DrawList {
    /// Solid quad from four NDC corners.
    pub fn draw_rectangle(&mut self, corners: QuadCorners<Ndc>, color: ColorRgba) -> Result<(), DrawError> {
        let color = color.to_array();
        let v = |p: Ndc| ColorVertex { position: ndc4(p), color };
        let verts = quad(v(corners.top_left), v(corners.top_right), v(corners.bot_left), v(corners.bot_right));

        let range = self.color.push(&verts)?;
        self.record(PipelineKind::Color, None, range);
        Ok(())
    }

    /// Solid rectangle in window pixels.
    pub fn draw_rect_px(&mut self, rect: PxRect, color: ColorRgba) -> Result<(), DrawError> {
        let corners = rect.ndc_corners(self.viewport());
        self.draw_rectangle(corners, color)
    }
}

#[cfg(test)]
mod tests {
    use glam::Mat4;

    use super::*;
    use crate::coords::Viewport;

    #[test]
    fn full_screen_rect_covers_ndc() {
        let vp = Viewport::new(101.0, 51.0);
        let mut list = DrawList::default();
        list.begin_frame(vp, Mat4::IDENTITY);
        list.draw_rect_px(PxRect::new(0.0, 0.0, 100.0, 50.0), ColorRgba::black()).unwrap();

        let v = list.color_vertices();
        assert_eq!(v.len(), 6);
        assert_eq!(v[0].position, [-1.0, 1.0, 0.0, 1.0]);
        assert_eq!(v[5].position, [1.0, -1.0, 0.0, 1.0]);
        assert_eq!(v[0].color, [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(list.cmds()[0].pipeline, PipelineKind::Color);
    }
}
