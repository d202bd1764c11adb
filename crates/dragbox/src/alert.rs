//! Modal alert overlay.
//!
//! The alert is either hidden or visible. While visible it dims the whole
//! window, shows a centered box with the wrapped message and dismiss
//! instructions, and captures input: a click, Escape or Space hides it and
//! nothing else sees those events.
//!
//! The box geometry is recomputed every frame from the window size, so a
//! resize while the alert is open re-wraps the text.

use crate::color::{css, Color};
use crate::input::{InputEvent, Key};
use crate::measure::TextMeasurer;
use crate::primitives::{Point, Rect};
use crate::render::{RenderedText, Renderer};
use crate::wrap::{wrap_text_with, PlacedLine};

/// Horizontal padding on each side of the text, and top/bottom padding.
pub const ALERT_PADDING: f32 = 20.0;
/// Gap between the message and the dismiss instructions.
pub const ALERT_SECTION_GAP: f32 = 20.0;
/// Narrowest wrap area the alert box allows for.
pub const ALERT_MIN_WIDTH: f32 = 200.0;
/// Largest share of the window width the box may use.
pub const ALERT_WIDTH_FRACTION: f32 = 0.8;

/// Colors used to draw the alert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertStyle {
    pub overlay_color: Color,
    pub panel_color: Color,
    pub border_color: Color,
    pub text_color: Color,
}

impl Default for AlertStyle {
    fn default() -> Self {
        Self {
            overlay_color: Color::srgba(0, 0, 0, 128),
            panel_color: Color::srgb(200, 200, 200),
            border_color: Color::srgb(100, 100, 100),
            text_color: css::BLACK,
        }
    }
}

/// Geometry of a visible alert for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertLayout {
    /// Covers the whole window
    pub overlay: Rect,
    /// The bordered box
    pub panel: Rect,
    pub line_height: f32,
    pub message_lines: Vec<PlacedLine>,
    pub dismiss_lines: Vec<PlacedLine>,
}

impl AlertLayout {
    /// Wrap both texts for a window of the given size and center the box.
    pub fn compute<M: TextMeasurer + ?Sized>(
        message: &str,
        dismiss_text: &str,
        window_width: f32,
        window_height: f32,
        measurer: &mut M,
    ) -> Self {
        let max_width = (window_width * ALERT_WIDTH_FRACTION).max(ALERT_MIN_WIDTH);
        let wrap_width = max_width - ALERT_PADDING * 2.0;

        let message_lines = wrap_text_with(message, wrap_width, measurer);
        let dismiss_lines = wrap_text_with(dismiss_text, wrap_width, measurer);

        let line_height = message_lines
            .first()
            .map(|line| measurer.measure_text(line).height)
            .unwrap_or(0.0);

        let widest = message_lines
            .iter()
            .chain(&dismiss_lines)
            .map(|line| measurer.measure_text(line).width)
            .fold(0.0_f32, f32::max);

        let line_count = (message_lines.len() + dismiss_lines.len()) as f32;
        let panel_width = widest + ALERT_PADDING * 2.0;
        let panel_height = line_height * line_count + ALERT_PADDING * 2.0 + ALERT_SECTION_GAP;

        let overlay = Rect::new(0.0, 0.0, window_width, window_height);
        let panel = overlay.center_box([panel_width, panel_height]);

        let mut y = panel.y + ALERT_PADDING;
        let message_lines = place_lines(message_lines, panel, &mut y, line_height, measurer);
        y += ALERT_SECTION_GAP;
        let dismiss_lines = place_lines(dismiss_lines, panel, &mut y, line_height, measurer);

        Self {
            overlay,
            panel,
            line_height,
            message_lines,
            dismiss_lines,
        }
    }
}

/// Center each line horizontally in `panel`, stacking downwards from `y`.
fn place_lines<M: TextMeasurer + ?Sized>(
    lines: Vec<String>,
    panel: Rect,
    y: &mut f32,
    line_height: f32,
    measurer: &mut M,
) -> Vec<PlacedLine> {
    lines
        .into_iter()
        .map(|text| {
            let size = measurer.measure_text(&text);
            let x = panel.x + (panel.width - size.width) / 2.0;
            let rect = Rect::from_min_size(Point::new(x, *y), [size.width, size.height]);
            *y += line_height;
            PlacedLine { text, rect }
        })
        .collect()
}

/// A dismissible modal message.
#[derive(Debug, Clone)]
pub struct Alert {
    message: String,
    dismiss_text: String,
    style: AlertStyle,
    visible: bool,
}

impl Alert {
    /// Create a hidden alert.
    pub fn new(message: impl Into<String>, dismiss_text: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            dismiss_text: dismiss_text.into(),
            style: AlertStyle::default(),
            visible: false,
        }
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Route an event through the alert.
    ///
    /// Returns `true` when the alert captured the event. A visible alert is
    /// dismissed by any pointer press, Escape or Space, and swallows pointer
    /// motion and other keys. Releases, resizes and quit requests pass
    /// through so pressed buttons still reset and the window still reacts.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        if !self.visible {
            return false;
        }

        match event {
            InputEvent::PointerDown { .. }
            | InputEvent::KeyDown(Key::Escape)
            | InputEvent::KeyDown(Key::Space) => {
                self.visible = false;
                true
            }
            InputEvent::PointerMove { .. } | InputEvent::KeyDown(_) => true,
            InputEvent::PointerUp { .. } | InputEvent::Resized { .. } | InputEvent::Quit => false,
        }
    }

    pub fn layout<M: TextMeasurer + ?Sized>(
        &self,
        window_width: f32,
        window_height: f32,
        measurer: &mut M,
    ) -> AlertLayout {
        AlertLayout::compute(
            &self.message,
            &self.dismiss_text,
            window_width,
            window_height,
            measurer,
        )
    }

    /// Draw the overlay and box if visible.
    ///
    /// Line textures live only for this call. A line whose texture cannot be
    /// created is skipped for this frame.
    pub fn render<R: Renderer>(&self, renderer: &mut R, window_width: f32, window_height: f32) {
        if !self.visible {
            return;
        }

        let layout = self.layout(window_width, window_height, renderer);

        renderer.fill_rect(layout.overlay, self.style.overlay_color);
        renderer.fill_rect(layout.panel, self.style.panel_color);
        renderer.stroke_rect(layout.panel, self.style.border_color);

        for line in layout.message_lines.iter().chain(&layout.dismiss_lines) {
            match renderer.create_text(&line.text, self.style.text_color) {
                Ok(texture) => {
                    let size = texture.size();
                    let rect = Rect {
                        width: size.width,
                        height: size.height,
                        ..line.rect
                    };
                    renderer.draw_text(&texture, rect);
                }
                Err(err) => log::warn!("alert line {:?} skipped: {err}", line.text),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{width_of, DrawCall, FakeRenderer, LINE_HEIGHT};

    const MESSAGE: &str = "Button clicked! This is a longer message that will demonstrate the text wrapping functionality in alert dialogs.";
    const DISMISS: &str = "Press ESC/SPACE or click to close";

    fn visible_alert() -> Alert {
        let mut alert = Alert::new(MESSAGE, DISMISS);
        alert.show();
        alert
    }

    #[test]
    fn test_hidden_alert_ignores_input() {
        let mut alert = Alert::new(MESSAGE, DISMISS);
        assert!(!alert.handle_event(&InputEvent::click(1.0, 1.0)));
        assert!(!alert.handle_event(&InputEvent::KeyDown(Key::Escape)));
        assert!(!alert.is_visible());
    }

    #[test]
    fn test_dismissed_by_escape_space_or_click() {
        for event in [
            InputEvent::KeyDown(Key::Escape),
            InputEvent::KeyDown(Key::Space),
            InputEvent::click(0.0, 0.0),
        ] {
            let mut alert = visible_alert();
            assert!(alert.handle_event(&event));
            assert!(!alert.is_visible());
        }
    }

    #[test]
    fn test_modal_swallows_other_input() {
        let mut alert = visible_alert();
        assert!(alert.handle_event(&InputEvent::KeyDown(Key::ArrowLeft)));
        assert!(alert.handle_event(&InputEvent::pointer_move(5.0, 5.0)));
        assert!(!alert.handle_event(&InputEvent::release(5.0, 5.0)));
        assert!(!alert.handle_event(&InputEvent::Resized {
            width: 10.0,
            height: 10.0
        }));
        assert!(alert.is_visible());
    }

    #[test]
    fn test_layout_geometry() {
        let mut renderer = FakeRenderer::new();
        let layout = AlertLayout::compute(MESSAGE, DISMISS, 700.0, 500.0, &mut renderer);

        // 80% of 700 minus padding
        let wrap_width = 560.0 - 40.0;
        let all: Vec<_> = layout.message_lines.iter().chain(&layout.dismiss_lines).collect();
        for line in &all {
            assert!(width_of(&line.text) <= wrap_width);
        }

        let widest = all.iter().map(|l| width_of(&l.text)).fold(0.0, f32::max);
        assert_eq!(layout.line_height, LINE_HEIGHT);
        assert_eq!(layout.panel.width, widest + 40.0);
        assert_eq!(layout.panel.height, LINE_HEIGHT * all.len() as f32 + 60.0);
        assert_eq!(layout.panel.x, (700.0 - layout.panel.width) / 2.0);
        assert_eq!(layout.panel.y, (500.0 - layout.panel.height) / 2.0);
        assert_eq!(layout.overlay, Rect::new(0.0, 0.0, 700.0, 500.0));

        let first = &layout.message_lines[0];
        assert_eq!(first.rect.y, layout.panel.y + 20.0);
        assert_eq!(
            first.rect.x,
            layout.panel.x + (layout.panel.width - first.rect.width) / 2.0
        );

        let last_message = layout.message_lines.last().unwrap();
        assert_eq!(
            layout.dismiss_lines[0].rect.y,
            last_message.rect.y + LINE_HEIGHT + 20.0
        );
    }

    #[test]
    fn test_narrow_window_uses_minimum_width() {
        let mut renderer = FakeRenderer::new();
        let layout = AlertLayout::compute(MESSAGE, DISMISS, 100.0, 500.0, &mut renderer);
        for line in layout.message_lines.iter().chain(&layout.dismiss_lines) {
            assert!(width_of(&line.text) <= 160.0 || !line.text.contains(' '));
        }
    }

    #[test]
    fn test_render_draws_overlay_box_and_releases_lines() {
        let mut renderer = FakeRenderer::new();
        let alert = visible_alert();
        alert.render(&mut renderer, 700.0, 500.0);

        let style = AlertStyle::default();
        assert_eq!(
            renderer.calls[0],
            DrawCall::Fill(Rect::new(0.0, 0.0, 700.0, 500.0), style.overlay_color)
        );
        assert!(matches!(renderer.calls[1], DrawCall::Fill(_, c) if c == style.panel_color));
        assert!(matches!(renderer.calls[2], DrawCall::Stroke(_, c) if c == style.border_color));

        let texts = renderer.drawn_texts();
        assert_eq!(texts.last().map(String::as_str), Some(DISMISS));
        assert_eq!(texts.join(" "), format!("{MESSAGE} {DISMISS}"));
        assert_eq!(renderer.live_texts(), 0);
    }

    #[test]
    fn test_hidden_alert_draws_nothing() {
        let mut renderer = FakeRenderer::new();
        Alert::new(MESSAGE, DISMISS).render(&mut renderer, 700.0, 500.0);
        assert!(renderer.calls.is_empty());
    }
}
