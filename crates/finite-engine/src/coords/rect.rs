use super::{ScreenPx, Vec2, Viewport};

/// Axis-aligned rectangle in screen pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct PxRect {
    pub origin: Vec2,
    pub size: Vec2,
}

/// The four corners of a quad, in the order the rectangle primitives take them.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct QuadCorners<T> {
    pub top_left: T,
    pub top_right: T,
    pub bot_left: T,
    pub bot_right: T,
}

impl PxRect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Square of side `size` centred on `center`.
    #[inline]
    pub fn centered(center: ScreenPx, size: f32) -> Self {
        let half = size * 0.5;
        Self::new(center.0.x - half, center.0.y - half, size, size)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: ScreenPx) -> bool {
        p.0.x >= self.origin.x
            && p.0.y >= self.origin.y
            && p.0.x < self.origin.x + self.size.x
            && p.0.y < self.origin.y + self.size.y
    }

    pub fn corners(self) -> QuadCorners<ScreenPx> {
        let (x0, y0) = (self.origin.x, self.origin.y);
        let (x1, y1) = (x0 + self.size.x, y0 + self.size.y);
        QuadCorners {
            top_left: ScreenPx::new(x0, y0),
            top_right: ScreenPx::new(x1, y0),
            bot_left: ScreenPx::new(x0, y1),
            bot_right: ScreenPx::new(x1, y1),
        }
    }

    pub fn ndc_corners(self, viewport: Viewport) -> QuadCorners<super::Ndc> {
        let c = self.corners();
        QuadCorners {
            top_left: viewport.px_to_ndc(c.top_left),
            top_right: viewport.px_to_ndc(c.top_right),
            bot_left: viewport.px_to_ndc(c.bot_left),
            bot_right: viewport.px_to_ndc(c.bot_right),
        }
    }
}
