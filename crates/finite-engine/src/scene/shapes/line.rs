use crate::coords::{ColorRgba, Ndc, QuadCorners, ScreenPx};
use crate::scene::{DrawError, DrawList};

impl DrawList {
    /// Line between two NDC points, `thickness_px` wide in window pixels.
    ///
    /// The quad is built in pixel space so thickness is uniform regardless of
    /// aspect ratio. A zero-length line draws nothing.
    pub fn draw_line(&mut self, from: Ndc, to: Ndc, thickness_px: f32, color: ColorRgba) -> Result<(), DrawError> {
        let vp = self.viewport();
        let a = vp.ndc_to_px(from).0;
        let b = vp.ndc_to_px(to).0;

        let Some(dir) = (b - a).normalized() else {
            return Ok(());
        };
        let offset = dir.perp() * (thickness_px * 0.5);

        let corner = |p| vp.px_to_ndc(ScreenPx(p));
        let corners = QuadCorners {
            top_left: corner(a + offset),
            top_right: corner(b + offset),
            bot_left: corner(a - offset),
            bot_right: corner(b - offset),
        };
        self.draw_rectangle(corners, color)
    }
}

#[cfg(test)]
mod tests {
    use glam::Mat4;

    use super::*;
    use crate::coords::{Vec2, Viewport};

    fn list(vp: Viewport) -> DrawList {
        let mut list = DrawList::default();
        list.begin_frame(vp, Mat4::IDENTITY);
        list
    }

    #[test]
    fn horizontal_line_is_thickness_tall() {
        let vp = Viewport::new(1001.0, 1001.0);
        let mut list = list(vp);
        let from = vp.px_to_ndc(ScreenPx::new(100.0, 100.0));
        let to = vp.px_to_ndc(ScreenPx::new(200.0, 100.0));
        list.draw_line(from, to, 4.0, ColorRgba::white()).unwrap();

        let ys: Vec<f32> = list
            .color_vertices()
            .iter()
            .map(|v| vp.ndc_to_px(Ndc(Vec2::new(v.position[0], v.position[1]))).0.y)
            .collect();
        let min = ys.iter().cloned().fold(f32::MAX, f32::min);
        let max = ys.iter().cloned().fold(f32::MIN, f32::max);
        assert!((min - 98.0).abs() < 1e-3, "{ys:?}");
        assert!((max - 102.0).abs() < 1e-3, "{ys:?}");
    }

    #[test]
    fn degenerate_line_is_skipped() {
        let vp = Viewport::new(640.0, 480.0);
        let mut list = list(vp);
        list.draw_line(Ndc::new(0.2, 0.2), Ndc::new(0.2, 0.2), 3.0, ColorRgba::white()).unwrap();
        assert_eq!(list.draw_calls(), 0);
    }
}
