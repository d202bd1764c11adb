//! Draggable square, counter buttons and a modal alert in a resizable window.
//!
//! Environment:
//! - `DRAGBOX_FONT`: font file to use instead of the default search
//! - `DRAGBOX_FONT_SIZE`: font size in pixels (default 24)
//! - `PROFILE`: log frame statistics once per second
//! - `RUST_LOG`: log verbosity

mod config;
mod runner;

use anyhow::Context;
use dragbox_wgpu::InitError;
use winit::event_loop::{ControlFlow, EventLoop};

use config::DemoConfig;
use runner::AppRunner;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = DemoConfig::from_env();

    let event_loop = EventLoop::new().map_err(|e| InitError::EventLoop(e.to_string()))?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut runner = AppRunner::new(config);
    event_loop
        .run_app(&mut runner)
        .context("event loop terminated abnormally")?;

    if let Some(err) = runner.take_error() {
        return Err(err).context("initialization failed");
    }

    Ok(())
}
