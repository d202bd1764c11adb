//! Display-free renderer used by the unit tests.

use std::cell::Cell;
use std::rc::Rc;

use crate::color::Color;
use crate::measure::{IntrinsicSize, TextMeasurer};
use crate::primitives::Rect;
use crate::render::{RenderError, RenderedText, Renderer};

pub const CHAR_WIDTH: f32 = 10.0;
pub const LINE_HEIGHT: f32 = 20.0;

/// Width of `text` under the fake metrics.
pub fn width_of(text: &str) -> f32 {
    text.chars().count() as f32 * CHAR_WIDTH
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Color),
    Fill(Rect, Color),
    Stroke(Rect, Color),
    Text(String, Rect),
}

/// Text resource that decrements the shared live counter when dropped.
#[derive(Debug)]
pub struct FakeText {
    pub text: String,
    size: IntrinsicSize,
    live: Rc<Cell<usize>>,
}

impl RenderedText for FakeText {
    fn size(&self) -> IntrinsicSize {
        self.size
    }
}

impl Drop for FakeText {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

#[derive(Debug, Default)]
pub struct FakeRenderer {
    pub calls: Vec<DrawCall>,
    pub created: usize,
    /// Text that fails to render, to exercise the skip path.
    pub failing_text: Option<String>,
    live: Rc<Cell<usize>>,
}

impl FakeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of text resources currently alive.
    pub fn live_texts(&self) -> usize {
        self.live.get()
    }

    pub fn drawn_texts(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text(text, _) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

impl TextMeasurer for FakeRenderer {
    fn measure_text(&mut self, text: &str) -> IntrinsicSize {
        if text.is_empty() {
            return IntrinsicSize::zero();
        }
        IntrinsicSize::new(width_of(text), LINE_HEIGHT)
    }
}

impl Renderer for FakeRenderer {
    type Text = FakeText;

    fn create_text(&mut self, text: &str, _color: Color) -> Result<FakeText, RenderError> {
        if text.is_empty() {
            return Err(RenderError::EmptyText);
        }
        if self.failing_text.as_deref() == Some(text) {
            return Err(RenderError::Texture("out of memory".into()));
        }
        self.created += 1;
        self.live.set(self.live.get() + 1);
        Ok(FakeText {
            text: text.to_string(),
            size: self.measure_text(text),
            live: self.live.clone(),
        })
    }

    fn clear(&mut self, color: Color) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.calls.push(DrawCall::Fill(rect, color));
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        self.calls.push(DrawCall::Stroke(rect, color));
    }

    fn draw_text(&mut self, text: &FakeText, rect: Rect) {
        self.calls.push(DrawCall::Text(text.text.clone(), rect));
    }
}
