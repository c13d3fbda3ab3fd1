use anyhow::{Context, Result};
use wgpu::SurfaceError;
use winit::dpi::PhysicalSize;
use winit::window::Window;

use crate::coords::Viewport;

/// GPU setup options.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Pick an sRGB swapchain format when the surface offers one. Tile art is
    /// uploaded as sRGB and only blends correctly on an sRGB target.
    pub prefer_srgb: bool,
    /// FIFO caps the loop at the display refresh rate.
    pub present_mode: wgpu::PresentMode,
    /// Used when supported, else the surface's first alpha mode.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,
    pub required_features: wgpu::Features,
    pub required_limits: wgpu::Limits,
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}

/// Device, queue and the window's swapchain.
///
/// `'w` is the window borrow held by the surface. The runtime stores the
/// window and this value in one self-referencing entry.
pub struct Gpu<'w> {
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    /// The window is 0x0 (minimized). The surface keeps its last real size
    /// and is not reconfigured until the window comes back.
    minimized: bool,
}

/// Swapchain image being drawn this frame, with its encoder.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}

/// What a frame should do after failing to acquire a swapchain image.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface reconfigured; try again next frame.
    Reconfigured,
    SkipFrame,
    /// Out of memory. The app should exit.
    Fatal,
}

impl<'w> Gpu<'w> {
    /// Opens a device that can present to `window`. Async in wgpu; the
    /// runtime blocks on it with `pollster`.
    pub async fn new(window: &'w Window, init: GpuInit) -> Result<Self> {
        let size = window.inner_size();
        anyhow::ensure!(
            size.width > 0 && size.height > 0,
            "cannot create a swapchain for a {}x{} window",
            size.width,
            size.height
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance.create_surface(window).context("failed to create wgpu surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("no GPU adapter can present to this window")?;

        let info = adapter.get_info();
        log::info!("adapter: {} ({:?}, {:?})", info.name, info.device_type, info.backend);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("finite device"),
                required_features: init.required_features,
                required_limits: init.required_limits.clone(),
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to open wgpu device")?;

        let config = surface_config(&surface.get_capabilities(&adapter), &init, size)?;
        surface.configure(&device, &config);
        log::debug!("swapchain {:?} {}x{}", config.format, config.width, config.height);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            minimized: false,
        })
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Swapchain size in physical pixels; 0x0 while minimized.
    pub fn viewport(&self) -> Viewport {
        if self.minimized {
            return Viewport::default();
        }
        Viewport::new(self.config.width as f32, self.config.height as f32)
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// Applies a settled window size to the swapchain.
    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        self.minimized = size.width == 0 || size.height == 0;
        if self.minimized {
            log::debug!("window minimized; swapchain left at {}x{}", self.config.width, self.config.height);
            return;
        }
        self.config.width = size.width;
        self.config.height = size.height;
        self.surface.configure(&self.device, &self.config);
        log::debug!("swapchain resized to {}x{}", size.width, size.height);
    }

    pub fn acquire_frame(&self) -> std::result::Result<GpuFrame, SurfaceError> {
        let surface_texture = self.surface.get_current_texture()?;
        let view = surface_texture.texture.create_view(&Default::default());
        let encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("finite frame encoder"),
        });
        Ok(GpuFrame { surface_texture, view, encoder })
    }

    /// Submits the frame's commands and presents its image.
    pub fn present(&self, frame: GpuFrame) {
        let GpuFrame { surface_texture, view, encoder } = frame;
        self.queue.submit([encoder.finish()]);
        drop(view);
        surface_texture.present();
    }

    /// Reconfigures the swapchain when `err` calls for it.
    pub fn recover(&mut self, err: SurfaceError) -> SurfaceErrorAction {
        let action = surface_error_action(&err);
        match action {
            SurfaceErrorAction::Reconfigured if !self.minimized => {
                self.surface.configure(&self.device, &self.config);
            }
            SurfaceErrorAction::Fatal => log::error!("swapchain image unavailable: {err}"),
            _ => log::debug!("frame skipped: {err}"),
        }
        action
    }
}

fn surface_error_action(err: &SurfaceError) -> SurfaceErrorAction {
    match err {
        SurfaceError::Lost | SurfaceError::Outdated => SurfaceErrorAction::Reconfigured,
        SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        SurfaceError::Timeout | SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}

fn surface_config(
    caps: &wgpu::SurfaceCapabilities,
    init: &GpuInit,
    size: PhysicalSize<u32>,
) -> Result<wgpu::SurfaceConfiguration> {
    let format = choose_surface_format(caps, init.prefer_srgb).context("surface reports no formats")?;
    Ok(wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width: size.width.max(1),
        height: size.height.max(1),
        present_mode: init.present_mode,
        alpha_mode: choose_alpha_mode(&caps.alpha_modes, init.alpha_mode),
        view_formats: Vec::new(),
        desired_maximum_frame_latency: init.desired_maximum_frame_latency,
    })
}

fn choose_surface_format(caps: &wgpu::SurfaceCapabilities, prefer_srgb: bool) -> Option<wgpu::TextureFormat> {
    let first = *caps.formats.first()?;
    if !prefer_srgb {
        return Some(first);
    }
    [wgpu::TextureFormat::Bgra8UnormSrgb, wgpu::TextureFormat::Rgba8UnormSrgb]
        .into_iter()
        .find(|f| caps.formats.contains(f))
        .or(Some(first))
}

fn choose_alpha_mode(
    supported: &[wgpu::CompositeAlphaMode],
    wanted: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    wanted
        .filter(|m| supported.contains(m))
        .or_else(|| supported.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

#[cfg(test)]
mod tests {
    use super::*;

    use wgpu::{CompositeAlphaMode as Alpha, TextureFormat as Fmt};

    fn caps(formats: &[Fmt], alpha_modes: &[Alpha]) -> wgpu::SurfaceCapabilities {
        wgpu::SurfaceCapabilities {
            formats: formats.to_vec(),
            alpha_modes: alpha_modes.to_vec(),
            ..Default::default()
        }
    }

    // ── format / alpha ──

    #[test]
    fn prefers_srgb_when_offered() {
        let c = caps(&[Fmt::Bgra8Unorm, Fmt::Bgra8UnormSrgb], &[]);
        assert_eq!(choose_surface_format(&c, true), Some(Fmt::Bgra8UnormSrgb));
        assert_eq!(choose_surface_format(&c, false), Some(Fmt::Bgra8Unorm));
    }

    #[test]
    fn no_formats_is_none() {
        assert_eq!(choose_surface_format(&caps(&[], &[]), true), None);
    }

    #[test]
    fn unsupported_alpha_falls_back_to_first() {
        let supported = [Alpha::Opaque, Alpha::PreMultiplied];
        assert_eq!(choose_alpha_mode(&supported, Some(Alpha::PreMultiplied)), Alpha::PreMultiplied);
        assert_eq!(choose_alpha_mode(&supported, Some(Alpha::PostMultiplied)), Alpha::Opaque);
        assert_eq!(choose_alpha_mode(&[], None), Alpha::Auto);
    }

    // ── swapchain config ──

    #[test]
    fn config_takes_window_size_and_init_options() {
        let init = GpuInit { present_mode: wgpu::PresentMode::Mailbox, ..Default::default() };
        let c = caps(&[Fmt::Rgba8UnormSrgb], &[Alpha::Opaque]);
        let cfg = surface_config(&c, &init, PhysicalSize::new(1200, 800)).unwrap();
        assert_eq!((cfg.width, cfg.height), (1200, 800));
        assert_eq!(cfg.format, Fmt::Rgba8UnormSrgb);
        assert_eq!(cfg.present_mode, wgpu::PresentMode::Mailbox);
        assert_eq!(cfg.alpha_mode, Alpha::Opaque);
        assert_eq!(cfg.desired_maximum_frame_latency, 2);
    }

    #[test]
    fn config_without_formats_is_an_error() {
        assert!(surface_config(&caps(&[], &[]), &GpuInit::default(), PhysicalSize::new(8, 8)).is_err());
    }

    // ── surface errors ──

    #[test]
    fn surface_errors_map_to_actions() {
        assert_eq!(surface_error_action(&SurfaceError::Lost), SurfaceErrorAction::Reconfigured);
        assert_eq!(surface_error_action(&SurfaceError::Outdated), SurfaceErrorAction::Reconfigured);
        assert_eq!(surface_error_action(&SurfaceError::Timeout), SurfaceErrorAction::SkipFrame);
        assert_eq!(surface_error_action(&SurfaceError::OutOfMemory), SurfaceErrorAction::Fatal);
    }
}
