//! The drawing surface the core renders into.
//!
//! A backend implements [`Renderer`] once; widgets, the alert and the app are
//! generic over it. Rendered text is an owned value: dropping it releases the
//! backing resource, so nothing in the core ever destroys a resource by hand.

use std::fmt;

use crate::color::Color;
use crate::measure::{IntrinsicSize, TextMeasurer};
use crate::primitives::Rect;

/// A text string rendered into a drawable resource.
pub trait RenderedText {
    /// Integer pixel size of the rendered text.
    fn size(&self) -> IntrinsicSize;
}

/// Failure to create a rendered-text resource.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// Nothing to draw: the text is empty or has no visible glyphs.
    EmptyText,
    /// The font could not rasterize the text.
    Rasterize(String),
    /// The backend could not allocate the texture.
    Texture(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::EmptyText => write!(f, "text is empty"),
            RenderError::Rasterize(msg) => write!(f, "failed to rasterize text: {msg}"),
            RenderError::Texture(msg) => write!(f, "failed to create text texture: {msg}"),
        }
    }
}

impl std::error::Error for RenderError {}

/// Immediate drawing primitives plus text resource creation.
pub trait Renderer: TextMeasurer {
    /// Owned rendered-text resource.
    type Text: RenderedText;

    /// Render `text` in `color` into a new resource.
    fn create_text(&mut self, text: &str, color: Color) -> Result<Self::Text, RenderError>;

    /// Fill the whole frame.
    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// One pixel outline just inside `rect`.
    fn stroke_rect(&mut self, rect: Rect, color: Color);

    /// Draw a text resource stretched to `rect`.
    fn draw_text(&mut self, text: &Self::Text, rect: Rect);
}
