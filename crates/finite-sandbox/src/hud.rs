//! Debug overlay text.

use finite_engine::coords::{ScreenPx, Vec2i, Viewport, WorldPos};

/// Everything the overlay reports for one frame.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct HudInfo {
    pub frame_index: u64,
    pub viewport: Viewport,
    pub pointer: Option<ScreenPx>,
    /// Cell under the pointer, only when it lies inside the map.
    pub hovered: Option<Vec2i>,
    pub camera: WorldPos,
    pub zoom: f32,
    /// Draw calls issued for the previous frame.
    pub draw_calls: u32,
}

pub fn lines(info: &HudInfo) -> Vec<String> {
    let mouse = match info.pointer {
        Some(p) => format!("Mouse: {:.0}, {:.0}", p.0.x, p.0.y),
        None => "Mouse: -".to_owned(),
    };
    let tile = match info.hovered {
        Some(c) => format!("Tile: {}, {}", c.x, c.y),
        None => "Tile: -".to_owned(),
    };
    vec![
        format!("Frames: {}", info.frame_index),
        format!("Window: {:.0}x{:.0}", info.viewport.width, info.viewport.height),
        mouse,
        tile,
        format!("Camera: {:.2}, {:.2} zoom {:.1}", info.camera.0.x, info.camera.0.y, info.zoom),
        format!("Draw calls: {}", info.draw_calls),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_pointer_and_tile() {
        let info = HudInfo {
            frame_index: 42,
            viewport: Viewport::new(1200.0, 800.0),
            pointer: Some(ScreenPx::new(10.4, 20.6)),
            hovered: Some(Vec2i::new(3, -1)),
            camera: WorldPos::new(1.0, -2.5),
            zoom: 10.0,
            draw_calls: 7,
        };
        assert_eq!(
            lines(&info),
            vec![
                "Frames: 42",
                "Window: 1200x800",
                "Mouse: 10, 21",
                "Tile: 3, -1",
                "Camera: 1.00, -2.50 zoom 10.0",
                "Draw calls: 7",
            ]
        );
    }

    #[test]
    fn missing_pointer_shows_dashes() {
        let out = lines(&HudInfo::default());
        assert_eq!(out[2], "Mouse: -");
        assert_eq!(out[3], "Tile: -");
    }
}
