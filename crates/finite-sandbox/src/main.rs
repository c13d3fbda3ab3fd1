//! Isometric tile sandbox.
//!
//! Arrows/WASD pan, the wheel zooms, left click cycles the hovered tile,
//! F11 toggles fullscreen and Escape quits.
//!
//! `FINITE_FONT` overrides the debug font, `FINITE_TILE_TEXTURE` points at a
//! PNG used for the tiles. `RUST_LOG` sets the log filter.

mod app;
mod config;
mod hud;
mod tiles;

use finite_engine::device::GpuInit;
use finite_engine::logging::{init_logging, LoggingConfig};
use finite_engine::window::{Runtime, RuntimeConfig};

use crate::app::SandboxApp;
use crate::config::{SandboxConfig, FONT_ENV};

fn main() {
    init_logging(LoggingConfig::default());

    let config = SandboxConfig::default().with_env(|key| std::env::var(key).ok());
    let Some(font) = config.resolve_font(|p| p.is_file()) else {
        fail_fast(anyhow::anyhow!("no debug font found; set {FONT_ENV} to a .ttf file"));
    };
    log::info!("debug font: {}", font.display());

    let runtime = RuntimeConfig {
        title: "finite sandbox".to_string(),
        ..RuntimeConfig::default()
    };
    if let Err(err) = Runtime::run(runtime, GpuInit::default(), SandboxApp::new(config, font)) {
        fail_fast(err);
    }
}

/// Logs `err` with its causes and terminates the process.
pub(crate) fn fail_fast(err: anyhow::Error) -> ! {
    log::error!("{err:#}");
    eprintln!("finite sandbox error: {err:#}");
    std::process::exit(1);
}
