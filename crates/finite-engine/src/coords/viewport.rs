use super::{Ndc, ScreenPx, Vec2};

/// Drawable size in physical pixels.
///
/// Owns the pixel <-> NDC mapping. The mapping puts pixel `0` on NDC `-1` and
/// pixel `w - 1` on NDC `+1`, so it divides by `w - 1`; a viewport of one
/// pixel or less along either axis is not drawable and must not be converted.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// True when the pixel <-> NDC mapping is well defined.
    #[inline]
    pub fn is_drawable(self) -> bool {
        self.is_valid() && self.width > 1.0 && self.height > 1.0
    }

    #[inline]
    pub fn aspect_ratio(self) -> f32 {
        self.width / self.height
    }

    pub fn px_to_ndc(self, px: ScreenPx) -> Ndc {
        debug_assert!(self.is_drawable(), "px_to_ndc on degenerate viewport {self:?}");
        let x = 2.0 * px.0.x / (self.width - 1.0) - 1.0;
        let y = 1.0 - 2.0 * px.0.y / (self.height - 1.0);
        Ndc(Vec2::new(x, y))
    }

    pub fn ndc_to_px(self, ndc: Ndc) -> ScreenPx {
        debug_assert!(self.is_drawable(), "ndc_to_px on degenerate viewport {self:?}");
        let x = (ndc.0.x + 1.0) * 0.5 * (self.width - 1.0);
        let y = (1.0 - ndc.0.y) * 0.5 * (self.height - 1.0);
        ScreenPx(Vec2::new(x, y))
    }

    /// Converts a size in pixels to an NDC extent (no origin shift).
    #[inline]
    pub fn px_extent_to_ndc(self, size: Vec2) -> Vec2 {
        Vec2::new(
            2.0 * size.x / (self.width - 1.0),
            2.0 * size.y / (self.height - 1.0),
        )
    }

    /// Percentage of viewport width, in pixels.
    #[inline]
    pub fn vw(self, vw: f32) -> f32 {
        vw / 100.0 * self.width
    }

    /// Percentage of viewport height, in pixels.
    #[inline]
    pub fn vh(self, vh: f32) -> f32 {
        vh / 100.0 * self.height
    }
}
