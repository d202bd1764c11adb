use std::sync::Arc;
use std::time::{Duration, Instant};

use dragbox::{App, Control, InputEvent};
use dragbox_wgpu::{Font, InitError, InputTranslator, WgpuRenderer};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    window::{Window, WindowId},
};

use crate::config::DemoConfig;

const STATS_INTERVAL: Duration = Duration::from_secs(1);

/// Frame timing statistics
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameStats {
    /// CPU time to build and submit the last frame
    pub frame_time_ms: f32,
    pub fps: f32,
    /// Input events processed since the last report
    pub events: usize,
}

/// Owns the window, renderer and app, and drives them from winit.
pub struct AppRunner {
    config: DemoConfig,
    window: Option<Arc<Window>>,
    renderer: Option<WgpuRenderer>,
    app: Option<App<WgpuRenderer>>,
    input: InputTranslator,
    pending: Vec<InputEvent>,
    error: Option<InitError>,
    frame_stats: FrameStats,
    frames_since_report: u32,
    last_report: Instant,
}

impl AppRunner {
    pub fn new(config: DemoConfig) -> Self {
        Self {
            config,
            window: None,
            renderer: None,
            app: None,
            input: InputTranslator::new(),
            pending: Vec::new(),
            error: None,
            frame_stats: FrameStats::default(),
            frames_since_report: 0,
            last_report: Instant::now(),
        }
    }

    /// The initialization error that stopped the loop, if any.
    pub fn take_error(&mut self) -> Option<InitError> {
        self.error.take()
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), InitError> {
        let window_attributes = Window::default_attributes()
            .with_title(self.config.title.as_str())
            .with_inner_size(winit::dpi::PhysicalSize::new(
                self.config.window_width,
                self.config.window_height,
            ))
            .with_resizable(true);

        let window = Arc::new(
            event_loop
                .create_window(window_attributes)
                .map_err(|e| InitError::Window(e.to_string()))?,
        );

        let font = Font::from_candidates(&self.config.font_candidates(), self.config.font_size)?;
        let mut renderer = pollster::block_on(WgpuRenderer::new(window.clone(), font))?;

        let size = window.inner_size();
        let app = App::new(&mut renderer, size.width as f32, size.height as f32)?;

        log::info!(
            "window {}x{} ready, font size {}px",
            size.width,
            size.height,
            renderer.font().size_px()
        );

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.app = Some(app);
        Ok(())
    }

    /// Feed queued events to the app in arrival order.
    fn process_events(&mut self, event_loop: &ActiveEventLoop) {
        if self.pending.is_empty() {
            return;
        }
        let (Some(renderer), Some(app)) = (self.renderer.as_mut(), self.app.as_mut()) else {
            self.pending.clear();
            return;
        };

        self.frame_stats.events += self.pending.len();
        if app.update_all(renderer, self.pending.drain(..)) == Control::Exit {
            event_loop.exit();
        }
    }

    fn render(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(renderer), Some(app)) = (self.renderer.as_mut(), self.app.as_ref()) else {
            return;
        };

        let frame_start = Instant::now();
        app.render(renderer);

        match renderer.present() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => renderer.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("frame skipped: {e}"),
        }

        self.frame_stats.frame_time_ms = frame_start.elapsed().as_secs_f32() * 1000.0;
        self.frames_since_report += 1;

        let since_report = self.last_report.elapsed();
        if since_report >= STATS_INTERVAL {
            self.frame_stats.fps = self.frames_since_report as f32 / since_report.as_secs_f32();
            if self.config.profile {
                log::info!(
                    "Frame: {:.2}ms ({:.1} FPS) | Events: {}",
                    self.frame_stats.frame_time_ms,
                    self.frame_stats.fps,
                    self.frame_stats.events,
                );
            }
            self.frames_since_report = 0;
            self.frame_stats.events = 0;
            self.last_report = Instant::now();
        }
    }
}

impl ApplicationHandler for AppRunner {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(err) = self.init(event_loop) {
            log::error!("{err}");
            self.error = Some(err);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(input) = self.input.translate(&event) {
            self.pending.push(input);
        }

        match event {
            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(physical_size.width, physical_size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                self.process_events(event_loop);
                self.render(event_loop);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Quit must not wait for a redraw that a minimized window never gets
        if self.pending.contains(&InputEvent::Quit) {
            self.process_events(event_loop);
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
