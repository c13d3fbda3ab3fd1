use std::path::{Path, PathBuf};

use finite_engine::camera::CameraConfig;
use finite_engine::coords::ColorRgba;
use finite_engine::render::RendererLimits;

/// Environment variable overriding the debug font path.
pub const FONT_ENV: &str = "FINITE_FONT";

/// Environment variable pointing at a PNG used for every tile.
pub const TILE_TEXTURE_ENV: &str = "FINITE_TILE_TEXTURE";

const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "C:\\Windows\\Fonts\\consola.ttf",
    "/System/Library/Fonts/Menlo.ttc",
];

/// Sandbox settings.
#[derive(Debug, Clone)]
pub struct SandboxConfig {
    pub map_width: u32,
    pub map_height: u32,
    /// Debug font height in percent of the viewport height.
    pub debug_font_vh: f32,
    /// Minimap side in percent of the viewport height.
    pub minimap_vh: f32,
    pub clear_color: ColorRgba,
    pub camera: CameraConfig,
    pub limits: RendererLimits,
    pub font_path: Option<PathBuf>,
    /// `None` draws tiles with a generated diamond.
    pub tile_texture_path: Option<PathBuf>,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            map_width: 8,
            map_height: 8,
            debug_font_vh: 1.5,
            minimap_vh: 35.0,
            clear_color: ColorRgba::rgb(1.0, 0.0, 1.0),
            camera: CameraConfig::default(),
            limits: RendererLimits::default(),
            font_path: None,
            tile_texture_path: None,
        }
    }
}

impl SandboxConfig {
    /// Applies overrides from `lookup` (normally `std::env::var`).
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path = |key| lookup(key).filter(|v| !v.trim().is_empty()).map(PathBuf::from);
        if let Some(p) = path(FONT_ENV) {
            self.font_path = Some(p);
        }
        if let Some(p) = path(TILE_TEXTURE_ENV) {
            self.tile_texture_path = Some(p);
        }
        self
    }

    /// The configured font, else the first system font that exists.
    pub fn resolve_font(&self, exists: impl Fn(&Path) -> bool) -> Option<PathBuf> {
        if let Some(p) = &self.font_path {
            return Some(p.clone());
        }
        SYSTEM_FONTS
            .iter()
            .map(Path::new)
            .find(|p| exists(p))
            .map(Path::to_path_buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overrides_paths() {
        let cfg = SandboxConfig::default().with_env(|k| match k {
            FONT_ENV => Some("/tmp/a.ttf".into()),
            TILE_TEXTURE_ENV => Some("  ".into()),
            _ => None,
        });
        assert_eq!(cfg.font_path, Some(PathBuf::from("/tmp/a.ttf")));
        assert_eq!(cfg.tile_texture_path, None);
    }

    #[test]
    fn explicit_font_skips_search() {
        let cfg = SandboxConfig { font_path: Some("x.ttf".into()), ..Default::default() };
        assert_eq!(cfg.resolve_font(|_| false), Some(PathBuf::from("x.ttf")));
    }

    #[test]
    fn search_takes_first_existing_font() {
        let cfg = SandboxConfig::default();
        let found = cfg.resolve_font(|p| p.to_string_lossy().contains("noto"));
        assert_eq!(found, Some(PathBuf::from("/usr/share/fonts/noto/NotoSans-Regular.ttf")));
        assert_eq!(cfg.resolve_font(|_| false), None);
    }
}
