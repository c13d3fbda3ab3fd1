use std::path::PathBuf;

use anyhow::Context;

use finite_engine::camera::{Camera2D, PanInput};
use finite_engine::coords::{ColorRgba, Ndc, PxRect, ScreenPx, Vec2i, Viewport, WorldPos};
use finite_engine::core::{App, AppControl, FrameCtx};
use finite_engine::input::{InputFrame, InputState, Key, MouseButton};
use finite_engine::render::{FrameStats, RenderCtx, RenderTarget, Renderer2D, TextureId, TextureStore};
use finite_engine::scene::{DrawError, DrawList};
use finite_engine::text::{measure_text_width, FontAtlas};
use finite_engine::tilemap::Tilemap;

use crate::config::SandboxConfig;
use crate::hud::{self, HudInfo};
use crate::tiles::{diamond_texture, highlight, kind_tint, next_kind};

const MARGIN_PX: f32 = 8.0;
const HUD_PAD_PX: f32 = 4.0;
const DIAMOND_HEIGHT_PX: u32 = 64;
/// Inner part of the tile texture shown on minimap cells.
const MINIMAP_UV: [f32; 4] = [0.25, 0.25, 0.75, 0.75];

/// GPU resources that live as long as the device.
struct Assets {
    textures: TextureStore,
    tile: TextureId,
}

/// Per-frame values copied out of `FrameCtx` before rendering borrows it.
#[derive(Copy, Clone)]
struct FrameView {
    viewport: Viewport,
    pointer: Option<ScreenPx>,
    frame_index: u64,
}

/// Isometric tile sandbox: pan, zoom, hover and click to cycle tile kinds.
pub struct SandboxApp {
    config: SandboxConfig,
    font_path: PathBuf,
    camera: Camera2D,
    map: Tilemap,
    list: DrawList,
    renderer: Renderer2D,
    assets: Option<Assets>,
    /// Dropped on resize; rebuilt at the new size on the next frame.
    atlas: Option<FontAtlas>,
    atlas_texture: Option<TextureId>,
    hovered: Option<Vec2i>,
    last_stats: FrameStats,
}

impl SandboxApp {
    pub fn new(config: SandboxConfig, font_path: PathBuf) -> Self {
        Self {
            camera: Camera2D::new(config.camera),
            map: Tilemap::new(config.map_width, config.map_height),
            list: DrawList::new(config.limits),
            renderer: Renderer2D::new(config.limits),
            config,
            font_path,
            assets: None,
            atlas: None,
            atlas_texture: None,
            hovered: None,
            last_stats: FrameStats::default(),
        }
    }

    fn pan_input(input: &InputState) -> PanInput {
        if !input.focused {
            return PanInput::default();
        }
        PanInput {
            left: input.any_key_down(&[Key::ArrowLeft, Key::A]),
            right: input.any_key_down(&[Key::ArrowRight, Key::D]),
            up: input.any_key_down(&[Key::ArrowUp, Key::W]),
            down: input.any_key_down(&[Key::ArrowDown, Key::S]),
        }
    }

    fn update(&mut self, input: &InputState, frame: &InputFrame, viewport: Viewport, dt: f32) {
        self.camera.apply_zoom_steps(frame.wheel_steps);
        self.camera.integrate(Self::pan_input(input), dt);

        self.hovered = input
            .pointer
            .map(|p| self.camera.pick_tile(p, viewport))
            .filter(|cell| self.map.contains(*cell));

        if frame.button_pressed(MouseButton::Left) {
            if let Some(tile) = self.hovered.and_then(|cell| self.map.get_mut(cell)) {
                tile.kind = next_kind(tile.kind);
                log::debug!("tile {:?} -> kind {}", self.hovered, tile.kind);
            }
        }
    }

    fn ensure_assets(&mut self, rctx: &RenderCtx<'_>) -> anyhow::Result<()> {
        if self.assets.is_none() {
            let mut textures = TextureStore::new(rctx.device);
            let tile = match &self.config.tile_texture_path {
                Some(path) => textures.load_png(rctx, path)?,
                None => {
                    let (w, h, rgba) = diamond_texture(DIAMOND_HEIGHT_PX);
                    textures.upload_rgba8(rctx, "finite diamond tile", w, h, &rgba)?
                }
            };
            if let Some(info) = textures.info(tile) {
                log::info!("tile texture {}x{} {:?}", info.width, info.height, info.format);
            }
            self.assets = Some(Assets { textures, tile });
        }

        if self.atlas.is_none() {
            let px = rctx.viewport.vh(self.config.debug_font_vh).floor().max(1.0);
            let mut atlas = FontAtlas::load(&self.font_path, px)
                .with_context(|| format!("debug font {}", self.font_path.display()))?;
            if let Some(assets) = self.assets.as_mut() {
                let id = assets.textures.upload_font_atlas(rctx, &mut atlas, self.atlas_texture)?;
                self.atlas_texture = Some(id);
            }
            log::debug!("debug font atlas texture {:?}", self.atlas_texture);
            self.atlas = Some(atlas);
        }
        Ok(())
    }

    fn draw(&mut self, rctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, view: FrameView) -> anyhow::Result<()> {
        self.ensure_assets(rctx)?;
        self.record(view).context("draw recording failed")?;
        if let Some(assets) = &self.assets {
            self.last_stats = self
                .renderer
                .render(rctx, target, &self.list, &assets.textures)
                .context("frame does not fit the renderer")?;
        }
        Ok(())
    }

    fn record(&mut self, view: FrameView) -> Result<(), DrawError> {
        let vp = view.viewport;
        self.list.begin_frame(vp, self.camera.view_projection(vp));

        let (Some(assets), Some(atlas)) = (&self.assets, &self.atlas) else {
            return Ok(());
        };
        let list = &mut self.list;

        list.draw_rect_px(PxRect::new(0.0, 0.0, vp.width - 1.0, vp.height - 1.0), ColorRgba::black())?;

        for (cell, tile) in self.map.iter() {
            let base = kind_tint(tile.kind);
            let tint = if self.hovered == Some(cell) { highlight(base, 0.45) } else { base };
            list.draw_tile(cell, assets.tile, tint)?;
        }

        // Screen centre, then the world origin and a line from it to the cursor.
        list.draw_dot(Ndc::new(0.0, 0.0), ColorRgba::white())?;
        let origin = self.camera.world_to_ndc(WorldPos::new(0.0, 0.0), vp);
        if let Some(p) = view.pointer {
            list.draw_line(origin, vp.px_to_ndc(p), 2.0, ColorRgba::rgb(1.0, 0.85, 0.1))?;
        }
        list.draw_dot_sized(origin, 6.0, ColorRgba::rgb(0.95, 0.2, 0.2))?;

        // Minimap, one sprite batch. Row 0 at the bottom to match +Y up.
        let side = vp.vh(self.config.minimap_vh).floor();
        let cells = self.map.width().max(self.map.height()).max(1) as f32;
        let cell_px = (side / cells).floor().max(1.0);
        let panel = PxRect::new(vp.width - side - MARGIN_PX, MARGIN_PX, side, side);
        list.draw_rect_px(panel, ColorRgba::new(0.0, 0.0, 0.0, 0.6))?;
        for (cell, tile) in self.map.iter() {
            let x = panel.origin.x + cell.x as f32 * cell_px;
            let y = panel.origin.y + (self.map.height() as i32 - 1 - cell.y) as f32 * cell_px;
            let base = kind_tint(tile.kind);
            let tint = if self.hovered == Some(cell) { highlight(base, 0.6) } else { base };
            list.buffer_rect_px(PxRect::new(x, y, cell_px, cell_px), MINIMAP_UV, tint)?;
        }
        list.flush_batch(assets.tile);

        let text = hud::lines(&HudInfo {
            frame_index: view.frame_index,
            viewport: vp,
            pointer: view.pointer,
            hovered: self.hovered,
            camera: self.camera.position,
            zoom: self.camera.zoom,
            draw_calls: self.last_stats.draw_calls,
        })
        .join("\n");
        let line_count = text.lines().count() as f32;
        let width = measure_text_width(atlas, &text)?;
        let height = atlas.font_size_px * (line_count - 1.0) + atlas.ascent - atlas.descent;
        list.draw_rect_px(
            PxRect::new(MARGIN_PX - HUD_PAD_PX, MARGIN_PX - HUD_PAD_PX, width + 2.0 * HUD_PAD_PX, height + 2.0 * HUD_PAD_PX),
            ColorRgba::new(0.0, 0.0, 0.0, 0.55),
        )?;
        list.draw_text(atlas, &text, ScreenPx::new(MARGIN_PX, MARGIN_PX + atlas.ascent.ceil()))?;

        Ok(())
    }
}

impl App for SandboxApp {
    fn on_resize(&mut self, viewport: Viewport) {
        log::debug!("resized to {}x{}, font atlas stale", viewport.width, viewport.height);
        self.atlas = None;
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.input.focused && ctx.input_frame.key_pressed(Key::Escape) {
            ctx.runtime.exit();
        }
        if ctx.input_frame.key_pressed(Key::F11) {
            ctx.runtime.toggle_fullscreen();
        }

        let view = FrameView {
            viewport: ctx.viewport,
            pointer: ctx.input.pointer,
            frame_index: ctx.time.frame_index,
        };
        self.update(ctx.input, ctx.input_frame, view.viewport, ctx.time.dt);

        let mut failure = None;
        let control = ctx.render(self.config.clear_color, |rctx, target| {
            if let Err(err) = self.draw(rctx, target, view) {
                failure = Some(err);
            }
        });
        if let Some(err) = failure {
            crate::fail_fast(err);
        }
        control
    }
}
