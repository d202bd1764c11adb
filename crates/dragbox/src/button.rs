//! Button widget
//!
//! A flat clickable rectangle with centered text. Clicking emits the button's
//! message.

use crate::color::{css, Color};
use crate::input::InputEvent;
use crate::primitives::Rect;
use crate::render::{RenderError, RenderedText, Renderer};
use crate::widget::Widget;

/// Extra width added to the text when a button is auto-sized.
pub const BUTTON_PADDING_X: f32 = 20.0;
/// Extra height added to the text when a button is auto-sized.
pub const BUTTON_PADDING_Y: f32 = 16.0;

/// Visual styling for a button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonStyle {
    /// Background color when idle
    pub idle_color: Color,
    /// Background color while pressed
    pub pressed_color: Color,
    /// Text color
    pub text_color: Color,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            idle_color: Color::srgb(80, 80, 80),
            pressed_color: Color::srgb(60, 60, 60),
            text_color: css::WHITE,
        }
    }
}

/// A clickable button
///
/// # Example
///
/// ```ignore
/// let plus = Button::new(&mut renderer, Rect::default(), "+")?
///     .on_click(Message::Increment);
/// ```
pub struct Button<R: Renderer, M> {
    bounds: Rect,
    text: String,
    texture: Option<R::Text>,
    style: ButtonStyle,
    on_click: Option<M>,
    pressed: bool,
}

impl<R: Renderer, M: Clone> Button<R, M> {
    /// Create a button with the default style.
    ///
    /// A non-positive width or height is replaced by the text size plus
    /// padding. Fails when the text cannot be rendered.
    pub fn new(renderer: &mut R, bounds: Rect, text: &str) -> Result<Self, RenderError> {
        Self::with_style(renderer, bounds, text, ButtonStyle::default())
    }

    pub fn with_style(
        renderer: &mut R,
        bounds: Rect,
        text: &str,
        style: ButtonStyle,
    ) -> Result<Self, RenderError> {
        let texture = renderer.create_text(text, style.text_color)?;
        let text_size = texture.size();

        let mut bounds = bounds;
        if bounds.width <= 0.0 {
            bounds.width = text_size.width + BUTTON_PADDING_X;
        }
        if bounds.height <= 0.0 {
            bounds.height = text_size.height + BUTTON_PADDING_Y;
        }

        Ok(Self {
            bounds,
            text: text.to_string(),
            texture: Some(texture),
            style,
            on_click: None,
            pressed: false,
        })
    }

    /// Message emitted every time the button is clicked.
    pub fn on_click(mut self, message: M) -> Self {
        self.on_click = Some(message);
        self
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn style(&self) -> &ButtonStyle {
        &self.style
    }
}

impl<R: Renderer, M: Clone> Widget<R, M> for Button<R, M> {
    fn handle_event(&mut self, event: &InputEvent, messages: &mut Vec<M>) -> bool {
        match event {
            InputEvent::PointerDown { position, .. } if self.bounds.contains(*position) => {
                self.pressed = true;
                if let Some(message) = &self.on_click {
                    messages.push(message.clone());
                }
                true
            }
            // Releases are observed but never consumed, so drag handling
            // elsewhere still sees them.
            InputEvent::PointerUp { .. } => {
                self.pressed = false;
                false
            }
            _ => false,
        }
    }

    fn render(&self, renderer: &mut R) {
        let fill = if self.pressed {
            self.style.pressed_color
        } else {
            self.style.idle_color
        };
        renderer.fill_rect(self.bounds, fill);

        if let Some(texture) = &self.texture {
            let size = texture.size();
            let text_rect = self.bounds.center_box([size.width, size.height]);
            renderer.draw_text(texture, text_rect);
        }
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Keeps the current bounds; only the text resource changes.
    fn set_text(&mut self, renderer: &mut R, text: &str) {
        self.texture = None;
        match renderer.create_text(text, self.style.text_color) {
            Ok(texture) => self.texture = Some(texture),
            Err(err) => log::warn!("button text {text:?} not rendered: {err}"),
        }
        self.text = text.to_string();
    }

    fn text(&self) -> &str {
        &self.text
    }
}
