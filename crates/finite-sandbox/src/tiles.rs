//! Tile palette and the built-in tile art.

use finite_engine::coords::ColorRgba;

pub const KIND_COUNT: i32 = 4;

/// Tint for a tile kind. Unknown kinds wrap around the palette.
pub fn kind_tint(kind: i32) -> ColorRgba {
    match kind.rem_euclid(KIND_COUNT) {
        0 => ColorRgba::rgb(0.38, 0.70, 0.32),
        1 => ColorRgba::rgb(0.86, 0.78, 0.52),
        2 => ColorRgba::rgb(0.25, 0.47, 0.85),
        _ => ColorRgba::rgb(0.55, 0.55, 0.58),
    }
}

#[inline]
pub fn next_kind(kind: i32) -> i32 {
    (kind + 1).rem_euclid(KIND_COUNT)
}

/// Lightens `c` toward white by `amount` in `0..=1`.
pub fn highlight(c: ColorRgba, amount: f32) -> ColorRgba {
    let t = amount.clamp(0.0, 1.0);
    ColorRgba::new(c.r + (1.0 - c.r) * t, c.g + (1.0 - c.g) * t, c.b + (1.0 - c.b) * t, c.a)
}

/// White diamond on transparent, `2h x h` pixels, with a darker rim.
/// Returns `(width, height, rgba)`.
pub fn diamond_texture(height: u32) -> (u32, u32, Vec<u8>) {
    let h = height.max(2);
    let w = h * 2;
    let (cx, cy) = (w as f32 * 0.5, h as f32 * 0.5);
    let rim = 2.0 / h as f32;

    let mut rgba = Vec::with_capacity((w * h * 4) as usize);
    for y in 0..h {
        for x in 0..w {
            let dx = ((x as f32 + 0.5) - cx).abs() / cx;
            let dy = ((y as f32 + 0.5) - cy).abs() / cy;
            let d = dx + dy;
            let px = if d > 1.0 {
                [0, 0, 0, 0]
            } else if d > 1.0 - rim {
                [170, 170, 170, 255]
            } else {
                [255, 255, 255, 255]
            };
            rgba.extend_from_slice(&px);
        }
    }
    (w, h, rgba)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_cycle_through_palette() {
        let mut k = 0;
        for _ in 0..KIND_COUNT {
            k = next_kind(k);
        }
        assert_eq!(k, 0);
        assert_eq!(kind_tint(KIND_COUNT + 1), kind_tint(1));
        assert_eq!(kind_tint(-1), kind_tint(KIND_COUNT - 1));
    }

    #[test]
    fn highlight_moves_toward_white() {
        let c = highlight(ColorRgba::black(), 0.5);
        assert_eq!(c, ColorRgba::rgb(0.5, 0.5, 0.5));
        assert_eq!(highlight(ColorRgba::black(), 2.0), ColorRgba::white());
    }

    #[test]
    fn diamond_is_opaque_inside_and_clear_at_corners() {
        let (w, h, rgba) = diamond_texture(32);
        assert_eq!((w, h), (64, 32));
        assert_eq!(rgba.len(), (w * h * 4) as usize);
        let alpha = |x: u32, y: u32| rgba[((y * w + x) * 4 + 3) as usize];
        assert_eq!(alpha(0, 0), 0);
        assert_eq!(alpha(w - 1, h - 1), 0);
        assert_eq!(alpha(w / 2, h / 2), 255);
    }
}
