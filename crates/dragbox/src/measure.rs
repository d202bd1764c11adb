//! Intrinsic text measurement.
//!
//! Widgets size themselves from the measured text and the wrapper breaks lines
//! with it, so the core never depends on a specific font engine.

/// Intrinsic size measurement result.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IntrinsicSize {
    pub width: f32,
    pub height: f32,
}

impl IntrinsicSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }
}

/// Backend-agnostic text measurement.
///
/// Implementors return the pixel size the text would have if rendered with
/// their font, without creating any GPU resource.
pub trait TextMeasurer {
    /// Measure a single line of text.
    fn measure_text(&mut self, text: &str) -> IntrinsicSize;
}
