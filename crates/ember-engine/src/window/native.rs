//! winit-backed implementation of the window [`Backend`].
//!
//! winit 0.30 normally owns control flow through `EventLoop::run_app`; this
//! backend instead pumps the event loop (`pump_app_events` with a zero
//! timeout) so the engine keeps its classic blocking poll loop while still
//! speaking winit's `ApplicationHandler` protocol.

use std::sync::Arc;
use std::time::Duration;

use anyhow::anyhow;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Fullscreen, Window as NativeWindow, WindowId};

use crate::device::{Gpu, PresentOutcome};

use super::platform::{self, PlatformGuard};
use super::{Backend, BackendEvent, WindowConfig, WindowError};

/// Pump passes allowed for the platform to deliver the initial `resumed`.
const CREATE_PUMP_LIMIT: usize = 8;

/// Production backend: one winit window with a wgpu surface behind it.
pub struct WinitBackend {
    event_loop: EventLoop<()>,
    driver: Driver,
    _platform: PlatformGuard,
}

/// `ApplicationHandler` state driven by the pumped event loop.
///
/// Window + GPU creation happens in `resumed` because winit only allows
/// window creation from inside the event loop; failures are parked in
/// `init_error` for `open` to surface.
struct Driver {
    config: WindowConfig,
    window: Option<Arc<NativeWindow>>,
    gpu: Option<Gpu>,
    pending: Vec<BackendEvent>,
    close_requested: bool,
    init_error: Option<WindowError>,
}

impl ApplicationHandler for Driver {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.init_error.is_some() {
            return;
        }

        let attrs = NativeWindow::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(
                self.config.width as f64,
                self.config.height as f64,
            ))
            .with_resizable(self.config.resizable)
            .with_fullscreen(self.config.fullscreen.then(|| Fullscreen::Borderless(None)));

        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                self.init_error = Some(WindowError::WindowCreation(
                    anyhow::Error::new(err).context("winit window creation failed"),
                ));
                return;
            }
        };

        match Gpu::new(Arc::clone(&window), self.config.vsync) {
            Ok(gpu) => {
                self.window = Some(window);
                self.gpu = Some(gpu);
            }
            Err(err) => self.init_error = Some(WindowError::Graphics(err)),
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.close_requested = true;
                self.pending.push(BackendEvent::CloseRequested);
            }
            WindowEvent::Resized(size) => {
                if let Some(gpu) = self.gpu.as_mut() {
                    gpu.resize(size);
                }
                self.pending
                    .push(BackendEvent::Resized(size.width, size.height));
            }
            WindowEvent::ScaleFactorChanged { .. } => {
                // Treated as a resize: the physical size changed even if the
                // logical size did not.
                if let Some(window) = self.window.as_ref() {
                    let size = window.inner_size();
                    if let Some(gpu) = self.gpu.as_mut() {
                        gpu.resize(size);
                    }
                    self.pending
                        .push(BackendEvent::Resized(size.width, size.height));
                }
            }
            _ => {}
        }
    }
}

impl Backend for WinitBackend {
    fn open(config: &WindowConfig) -> Result<Self, WindowError> {
        let platform = platform::acquire();

        let mut event_loop = EventLoop::new().map_err(|err| {
            WindowError::Platform(anyhow::Error::new(err).context("failed to create event loop"))
        })?;

        let mut driver = Driver {
            config: config.clone(),
            window: None,
            gpu: None,
            pending: Vec::new(),
            close_requested: false,
            init_error: None,
        };

        // The first pump delivers `resumed`, which creates the window; give
        // slower platforms a few extra passes before giving up.
        for _ in 0..CREATE_PUMP_LIMIT {
            pump(&mut event_loop, &mut driver);
            if let Some(err) = driver.init_error.take() {
                return Err(err);
            }
            if driver.window.is_some() {
                break;
            }
        }

        if driver.window.is_none() {
            return Err(WindowError::WindowCreation(anyhow!(
                "platform never delivered the window"
            )));
        }

        log::info!(
            "window opened: \"{}\" {}x{}",
            config.title,
            config.width,
            config.height
        );

        Ok(Self {
            event_loop,
            driver,
            _platform: platform,
        })
    }

    fn poll_events(&mut self, out: &mut Vec<BackendEvent>) {
        pump(&mut self.event_loop, &mut self.driver);
        out.append(&mut self.driver.pending);
    }

    fn present(&mut self) {
        let Some(gpu) = self.driver.gpu.as_mut() else {
            return;
        };
        if gpu.present_clear() == PresentOutcome::Fatal {
            // Unrecoverable surface loss behaves like a close request.
            self.driver.close_requested = true;
        }
    }

    fn should_close(&self) -> bool {
        self.driver.close_requested
    }

    fn set_title(&mut self, title: &str) {
        if let Some(window) = self.driver.window.as_ref() {
            window.set_title(title);
        }
    }

    fn set_vsync(&mut self, enabled: bool) {
        if let Some(gpu) = self.driver.gpu.as_mut() {
            gpu.set_vsync(enabled);
        }
    }

    fn close(&mut self) {
        // Surface before window: the surface was created from this handle.
        self.driver.gpu = None;
        self.driver.window = None;
    }
}

fn pump(event_loop: &mut EventLoop<()>, driver: &mut Driver) {
    if let PumpStatus::Exit(code) = event_loop.pump_app_events(Some(Duration::ZERO), driver) {
        log::warn!("event loop exited (status {code})");
        driver.close_requested = true;
    }
}
