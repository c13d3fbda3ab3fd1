use glam::{Mat4, Vec3};

use crate::coords::{iso, Ndc, ScreenPx, Vec2, Vec2i, Viewport, WorldPos};

use super::CameraConfig;

/// Near/far planes. Depth carries no meaning in 2D; tiles sit at z = 0.
const Z_NEAR: f32 = 0.0;
const Z_FAR: f32 = 10.0;

/// Directions held this frame.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct PanInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl PanInput {
    fn axis(neg: bool, pos: bool) -> f32 {
        (pos as i32 - neg as i32) as f32
    }

    /// Unnormalized direction; +X right, +Y up.
    pub fn direction(self) -> Vec2 {
        Vec2::new(Self::axis(self.left, self.right), Self::axis(self.down, self.up))
    }
}

/// Camera position and zoom.
///
/// `zoom` is half the visible width in world units; the visible height follows
/// the viewport aspect ratio. Matrices use glam's column-vector convention, so
/// the combined transform is `projection * view` and uploads untransposed.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera2D {
    pub position: WorldPos,
    pub zoom: f32,
    config: CameraConfig,
}

impl Camera2D {
    pub fn new(config: CameraConfig) -> Self {
        Self {
            position: config.start_position,
            zoom: config.start_zoom.max(config.min_zoom),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Translation by `-position`.
    pub fn view(&self) -> Mat4 {
        let p = self.position.0;
        Mat4::from_translation(Vec3::new(-p.x, -p.y, 0.0))
    }

    pub fn projection(&self, viewport: Viewport) -> Mat4 {
        let view_width = 2.0 * self.zoom;
        let view_height = view_width / viewport.aspect_ratio();
        let (hw, hh) = (view_width * 0.5, view_height * 0.5);
        Mat4::orthographic_lh(-hw, hw, -hh, hh, Z_NEAR, Z_FAR)
    }

    #[inline]
    pub fn view_projection(&self, viewport: Viewport) -> Mat4 {
        self.projection(viewport) * self.view()
    }

    pub fn world_to_ndc(&self, world: WorldPos, viewport: Viewport) -> Ndc {
        let p = self
            .view_projection(viewport)
            .project_point3(Vec3::new(world.0.x, world.0.y, 0.0));
        Ndc::new(p.x, p.y)
    }

    /// Un-projects an NDC point on the z = 0 plane.
    pub fn ndc_to_world(&self, ndc: Ndc, viewport: Viewport) -> WorldPos {
        let inv = self.view_projection(viewport).inverse();
        let p = inv.project_point3(Vec3::new(ndc.0.x, ndc.0.y, 0.0));
        WorldPos::new(p.x, p.y)
    }

    /// Tile cell under a window pixel.
    pub fn pick_tile(&self, px: ScreenPx, viewport: Viewport) -> Vec2i {
        let ndc = viewport.px_to_ndc(px);
        let world = self.ndc_to_world(ndc, viewport);
        iso::world_to_tile(world).to_cell()
    }

    /// Wheel-up (positive) zooms in, wheel-down zooms out.
    pub fn apply_zoom_steps(&mut self, steps: i32) {
        if steps == 0 {
            return;
        }
        let zoom = self.zoom - steps as f32 * self.config.zoom_step;
        self.zoom = zoom.max(self.config.min_zoom);
    }

    /// Moves `pan_speed * dt` along each held direction.
    pub fn integrate(&mut self, input: PanInput, dt: f32) {
        let step = input.direction() * (self.config.pan_speed * dt);
        self.position = WorldPos(self.position.0 + step);
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn vp() -> Viewport {
        Viewport::new(1201.0, 801.0)
    }

    // ── zoom ──

    #[test]
    fn zoom_never_drops_below_one() {
        let mut cam = Camera2D::default();
        for _ in 0..100 {
            cam.apply_zoom_steps(1);
            assert!(cam.zoom >= 1.0);
        }
        assert_eq!(cam.zoom, 1.0);
    }

    #[test]
    fn wheel_down_zooms_out_by_whole_units() {
        let mut cam = Camera2D::default();
        cam.apply_zoom_steps(-3);
        assert_eq!(cam.zoom, 13.0);
    }

    #[test]
    fn horizontal_touchpad_scroll_leaves_zoom() {
        use crate::input::MouseWheelDelta;

        let mut cam = Camera2D::default();
        for _ in 0..5 {
            cam.apply_zoom_steps(MouseWheelDelta::Pixel { x: 8.0, y: 0.0 }.vertical_steps());
        }
        assert_eq!(cam.zoom, 10.0);
    }

    // ── pan ──

    #[test]
    fn holding_right_for_one_second_moves_by_speed() {
        let mut cam = Camera2D::default();
        assert_eq!(cam.position, WorldPos::new(0.0, 0.0));
        let right = PanInput { right: true, ..Default::default() };
        for _ in 0..100 {
            cam.integrate(right, 0.01);
        }
        assert!((cam.position.0.x - 10.0).abs() < EPS, "{:?}", cam.position);
        assert_eq!(cam.position.0.y, 0.0);
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut cam = Camera2D::default();
        let both = PanInput { left: true, right: true, up: true, ..Default::default() };
        cam.integrate(both, 1.0);
        assert_eq!(cam.position, WorldPos::new(0.0, 10.0));
    }

    // ── projection ──

    #[test]
    fn zoom_is_half_visible_width() {
        let cam = Camera2D::default();
        let right_edge = cam.world_to_ndc(WorldPos::new(10.0, 0.0), vp());
        assert!((right_edge.0.x - 1.0).abs() < EPS);
        let center = cam.world_to_ndc(WorldPos::new(0.0, 0.0), vp());
        assert!(center.0.x.abs() < EPS && center.0.y.abs() < EPS);
    }

    #[test]
    fn world_ndc_round_trip() {
        let mut cam = Camera2D::default();
        cam.position = WorldPos::new(3.5, -2.0);
        cam.zoom = 4.0;
        let w = WorldPos::new(1.25, 0.75);
        let back = cam.ndc_to_world(cam.world_to_ndc(w, vp()), vp());
        assert!((back.0.x - w.0.x).abs() < EPS && (back.0.y - w.0.y).abs() < EPS);
    }

    // ── picking ──

    #[test]
    fn center_pixel_picks_tile_under_camera() {
        let cam = Camera2D::default();
        // Viewport center is world origin: the shared bottom corner of
        // cell (0,0). Nudge one pixel up into that diamond.
        let cell = cam.pick_tile(ScreenPx::new(600.0, 399.0), vp());
        assert_eq!(cell, Vec2i::new(0, 0));
    }

    #[test]
    fn picking_each_tile_center_returns_its_cell() {
        let mut cam = Camera2D::default();
        cam.position = WorldPos::new(0.0, 4.0);
        let viewport = vp();
        for x in 0..8 {
            for y in 0..8 {
                let cell = Vec2i::new(x, y);
                let ndc = cam.world_to_ndc(iso::tile_center(cell), viewport);
                let px = viewport.ndc_to_px(ndc);
                assert_eq!(cam.pick_tile(px, viewport), cell);
            }
        }
    }
}
