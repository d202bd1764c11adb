//! # dragbox
//!
//! Graphics backend agnostic core of the dragbox demo.
//!
//! This crate holds everything that can run without a window: geometry, input
//! events, text wrapping, the retained widgets and the application update
//! step. Rendering goes through the [`Renderer`] trait, implemented by a
//! backend crate like `dragbox-wgpu`.
//!
//! ## Core Types
//!
//! - [`App`] - Owns the state and widgets, routes input, renders frames
//! - [`AppState`] - Square position, drag, counter and window size
//! - [`Widget`] - Trait shared by [`Button`] and [`Label`]
//! - [`Layout`] - Places widgets in a row and dispatches input to them
//! - [`Alert`] - Modal overlay with wrapped text
//!
//! ## Text
//!
//! - [`wrap_text`] - Greedy word wrapping against a width measurement
//! - [`TextMeasurer`] - Trait for text measurement

mod alert;
mod app;
mod button;
mod color;
mod input;
mod label;
mod layout;
mod measure;
mod primitives;
mod render;
mod widget;
mod wrap;

#[cfg(test)]
mod testing;

pub use alert::*;
pub use app::*;
pub use button::*;
pub use color::*;
pub use input::*;
pub use label::*;
pub use layout::*;
pub use measure::*;
pub use primitives::*;
pub use render::*;
pub use widget::*;
pub use wrap::*;
