//! Non-interactive text widget.

use crate::color::{css, Color};
use crate::input::InputEvent;
use crate::primitives::{Point, Rect};
use crate::render::{RenderedText, Renderer};
use crate::widget::Widget;

/// A single line of text sized to fit its content.
pub struct Label<R: Renderer> {
    bounds: Rect,
    text: String,
    texture: Option<R::Text>,
    color: Color,
}

impl<R: Renderer> Label<R> {
    /// Create a white label with its top-left corner at `position`.
    pub fn new(renderer: &mut R, position: Point, text: &str) -> Self {
        Self::with_color(renderer, position, text, css::WHITE)
    }

    pub fn with_color(renderer: &mut R, position: Point, text: &str, color: Color) -> Self {
        let mut label = Self {
            bounds: Rect::from_min_size(position, [0.0, 0.0]),
            text: String::new(),
            texture: None,
            color,
        };
        label.update_text(renderer, text);
        label
    }

    /// Regenerate the text resource and resize to it.
    ///
    /// Always regenerates, even for identical text. The previous resource is
    /// dropped before the new one is created.
    fn update_text(&mut self, renderer: &mut R, text: &str) {
        self.texture = None;

        let size = if text.is_empty() {
            Default::default()
        } else {
            match renderer.create_text(text, self.color) {
                Ok(texture) => {
                    let size = texture.size();
                    self.texture = Some(texture);
                    size
                }
                Err(err) => {
                    log::warn!("label text {text:?} not rendered: {err}");
                    renderer.measure_text(text)
                }
            }
        };

        self.bounds.width = size.width;
        self.bounds.height = size.height;
        self.text = text.to_string();
    }

    pub fn has_texture(&self) -> bool {
        self.texture.is_some()
    }
}

impl<R: Renderer, M> Widget<R, M> for Label<R> {
    fn handle_event(&mut self, _event: &InputEvent, _messages: &mut Vec<M>) -> bool {
        false
    }

    fn render(&self, renderer: &mut R) {
        if let Some(texture) = &self.texture {
            renderer.draw_text(texture, self.bounds);
        }
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn set_text(&mut self, renderer: &mut R, text: &str) {
        self.update_text(renderer, text);
    }

    fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{DrawCall, FakeRenderer, LINE_HEIGHT};

    type TestLabel = Label<FakeRenderer>;

    fn set_text(label: &mut TestLabel, renderer: &mut FakeRenderer, text: &str) {
        <TestLabel as Widget<FakeRenderer, ()>>::set_text(label, renderer, text);
    }

    #[test]
    fn test_sized_to_text() {
        let mut renderer = FakeRenderer::new();
        let label = TestLabel::new(&mut renderer, Point::new(3.0, 4.0), "Counter: 0");
        assert_eq!(
            <TestLabel as Widget<FakeRenderer, ()>>::bounds(&label),
            Rect::new(3.0, 4.0, 100.0, LINE_HEIGHT)
        );
    }

    #[test]
    fn test_set_text_regenerates_and_resizes() {
        let mut renderer = FakeRenderer::new();
        let mut label = TestLabel::new(&mut renderer, Point::new(0.0, 0.0), "a");

        set_text(&mut label, &mut renderer, "abcd");
        let bounds = <TestLabel as Widget<FakeRenderer, ()>>::bounds(&label);
        assert_eq!(bounds.width, 40.0);
        assert_eq!(renderer.live_texts(), 1);
        assert_eq!(renderer.created, 2);

        // Same text still regenerates, without leaking
        set_text(&mut label, &mut renderer, "abcd");
        set_text(&mut label, &mut renderer, "abcd");
        assert_eq!(renderer.created, 4);
        assert_eq!(renderer.live_texts(), 1);

        drop(label);
        assert_eq!(renderer.live_texts(), 0);
    }

    #[test]
    fn test_empty_text_renders_nothing() {
        let mut renderer = FakeRenderer::new();
        let label = TestLabel::new(&mut renderer, Point::new(0.0, 0.0), "");

        assert!(!label.has_texture());
        <TestLabel as Widget<FakeRenderer, ()>>::render(&label, &mut renderer);
        assert!(renderer.calls.is_empty());
    }

    #[test]
    fn test_failed_resource_is_skipped() {
        let mut renderer = FakeRenderer::new();
        renderer.failing_text = Some("broken".into());
        let mut label = TestLabel::new(&mut renderer, Point::new(0.0, 0.0), "fine");

        set_text(&mut label, &mut renderer, "broken");
        assert!(!label.has_texture());
        assert_eq!(renderer.live_texts(), 0);
        assert_eq!(label.text, "broken");

        set_text(&mut label, &mut renderer, "fine again");
        <TestLabel as Widget<FakeRenderer, ()>>::render(&label, &mut renderer);
        assert_eq!(
            renderer.calls,
            vec![DrawCall::Text(
                "fine again".into(),
                Rect::new(0.0, 0.0, 100.0, LINE_HEIGHT)
            )]
        );
    }
}
