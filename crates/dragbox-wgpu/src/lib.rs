//! # dragbox-wgpu
//!
//! WGPU rendering backend for dragbox.
//!
//! Implements [`dragbox::Renderer`] on top of wgpu, with text rasterized on
//! the CPU by ab_glyph, and translates winit window events into dragbox
//! input events.

mod error;
mod font;
mod input;
mod renderer;
mod vertex;

pub use error::InitError;
pub use font::{Font, TextBitmap};
pub use input::{convert_key, convert_mouse_button, InputTranslator};
pub use renderer::{TextTexture, WgpuRenderer};
