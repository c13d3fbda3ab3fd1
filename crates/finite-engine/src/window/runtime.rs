use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Fullscreen, Window, WindowId};

use crate::core::{App, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::{InputFrame, InputState};
use crate::time::FrameClock;

use super::events::input_event;
use super::ResizeLatch;

/// Window options for [`Runtime::run`].
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    /// Quiet period after the last resize event before the surface is
    /// reconfigured and frames resume.
    pub resize_settle: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "finite".to_string(),
            initial_size: LogicalSize::new(1200.0, 800.0),
            resize_settle: Duration::from_millis(150),
        }
    }
}

/// Requests an app makes of the window during a frame. Applied once the
/// frame callback has returned.
#[derive(Debug, Default)]
pub struct RuntimeCtx {
    exit: bool,
    toggle_fullscreen: bool,
}

impl RuntimeCtx {
    pub fn exit(&mut self) {
        self.exit = true;
    }

    /// Switches between windowed and borderless fullscreen. Two toggles in
    /// one frame cancel out.
    pub fn toggle_fullscreen(&mut self) {
        self.toggle_fullscreen = !self.toggle_fullscreen;
    }
}

pub struct Runtime;

impl Runtime {
    /// Opens the window and drives `app` until the window closes or the app
    /// asks to exit. Window or GPU setup failures are returned.
    pub fn run<A: App + 'static>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()> {
        let event_loop = EventLoop::new().context("failed to create event loop")?;
        let mut driver = Driver {
            config,
            gpu_init,
            app,
            entry: None,
            stopping: false,
            fatal: None,
        };
        event_loop.run_app(&mut driver).context("event loop failed")?;
        driver.fatal.map_or(Ok(()), Err)
    }
}

/// The window plus everything tied to its lifetime. The surface inside
/// `gpu` borrows `window`.
#[self_referencing]
struct WindowEntry {
    input_state: InputState,
    input_frame: InputFrame,
    clock: FrameClock,
    resize: ResizeLatch,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct Driver<A> {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,
    entry: Option<WindowEntry>,
    stopping: bool,
    fatal: Option<anyhow::Error>,
}

impl<A: App + 'static> Driver<A> {
    fn stop(&mut self, event_loop: &ActiveEventLoop) {
        self.stopping = true;
        event_loop.exit();
    }

    fn open_window(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let window = event_loop
            .create_window(
                Window::default_attributes()
                    .with_title(self.config.title.clone())
                    .with_inner_size(self.config.initial_size),
            )
            .context("failed to create window")?;
        log::info!("window {:?} at {:?}", window.id(), window.inner_size());

        let gpu_init = self.gpu_init.clone();
        WindowEntryTryBuilder {
            input_state: InputState::default(),
            input_frame: InputFrame::default(),
            clock: FrameClock::default(),
            resize: ResizeLatch::new(self.config.resize_settle),
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)).context("GPU initialization failed"),
        }
        .try_build()
    }

    fn apply(&mut self, event_loop: &ActiveEventLoop, requests: RuntimeCtx) {
        if requests.toggle_fullscreen {
            if let Some(entry) = &self.entry {
                entry.with_window(|w| {
                    let fullscreen = w.fullscreen().is_none().then_some(Fullscreen::Borderless(None));
                    log::debug!("fullscreen: {}", fullscreen.is_some());
                    w.set_fullscreen(fullscreen);
                });
            }
        }
        if requests.exit {
            self.stop(event_loop);
        }
    }

    /// Reconfigures the surface once the resize latch has gone quiet.
    fn settle_resize(&mut self, now: Instant) {
        let Self { app, entry, .. } = self;
        let Some(entry) = entry.as_mut() else { return };

        entry.with_mut(|fields| {
            let Some(size) = fields.resize.poll(now) else { return };
            fields.gpu.resize(size);
            // The settle pause must not show up as one huge dt.
            fields.clock.reset();
            log::info!("resize settled at {}x{}", size.width, size.height);

            let viewport = fields.gpu.viewport();
            if viewport.is_drawable() {
                app.on_resize(viewport);
            }
            fields.window.request_redraw();
        });
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let mut requests = RuntimeCtx::default();
        let Self { app, entry, .. } = self;
        let Some(entry) = entry.as_mut() else { return };

        entry.with_mut(|fields| {
            let viewport = fields.gpu.viewport();
            if fields.resize.is_pending() || !viewport.is_drawable() {
                return;
            }

            let mut ctx = FrameCtx {
                window: WindowCtx { id: fields.window.id(), window: fields.window },
                gpu: fields.gpu,
                input: fields.input_state,
                input_frame: fields.input_frame,
                time: fields.clock.tick(),
                viewport,
                runtime: &mut requests,
            };
            if app.on_frame(&mut ctx) == AppControl::Exit {
                requests.exit();
            }
            // Deltas are consumed by exactly one frame.
            fields.input_frame.clear();
        });

        self.apply(event_loop, requests);
    }
}

impl<A: App + 'static> ApplicationHandler for Driver<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }
        match self.open_window(event_loop) {
            Ok(entry) => {
                entry.with_window(|w| w.request_redraw());
                self.entry = Some(entry);
            }
            Err(err) => {
                let err = err.context("failed to create initial window");
                log::error!("{err:#}");
                self.fatal = Some(err);
                self.stop(event_loop);
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.stopping {
            return event_loop.exit();
        }
        self.settle_resize(Instant::now());

        let Some(entry) = &self.entry else { return };
        let flow = match entry.borrow_resize().deadline() {
            // Sleep until the pending resize can settle.
            Some(deadline) => ControlFlow::WaitUntil(deadline),
            None => {
                entry.with_window(|w| w.request_redraw());
                ControlFlow::Wait
            }
        };
        event_loop.set_control_flow(flow);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if self.stopping {
            return event_loop.exit();
        }
        let Self { app, entry, .. } = self;
        let Some(entry) = entry.as_mut() else { return };

        let control = entry.with_mut(|fields| {
            if let Some(ev) = input_event(&event) {
                fields.input_state.apply_event(fields.input_frame, ev);
            }
            app.on_window_event(&event)
        });
        if control == AppControl::Exit {
            return self.stop(event_loop);
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("window closed");
                self.entry = None;
                self.stop(event_loop);
            }
            WindowEvent::Resized(size) => {
                entry.with_resize_mut(|latch| latch.note(size, Instant::now()));
            }
            WindowEvent::ScaleFactorChanged { .. } => {
                let size = entry.with_window(|w| w.inner_size());
                entry.with_resize_mut(|latch| latch.note(size, Instant::now()));
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paired_fullscreen_toggles_cancel() {
        let mut ctx = RuntimeCtx::default();
        ctx.toggle_fullscreen();
        assert!(ctx.toggle_fullscreen);
        ctx.toggle_fullscreen();
        assert!(!ctx.toggle_fullscreen);
        assert!(!ctx.exit);
    }

    #[test]
    fn exit_request_sticks() {
        let mut ctx = RuntimeCtx::default();
        ctx.exit();
        ctx.toggle_fullscreen();
        assert!(ctx.exit);
    }
}
