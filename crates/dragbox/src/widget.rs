//! The capability set shared by every widget.
//!
//! Widgets are retained: they live across frames, own their rendered text and
//! report clicks as messages of type `M` instead of mutating app state
//! directly.

use crate::input::InputEvent;
use crate::primitives::Rect;
use crate::render::Renderer;

/// A rectangular UI element with input handling and rendering.
pub trait Widget<R: Renderer, M> {
    /// React to an input event.
    ///
    /// Returns `true` when the event was consumed and must not reach anything
    /// else. Messages produced by the widget are pushed onto `messages`.
    fn handle_event(&mut self, event: &InputEvent, messages: &mut Vec<M>) -> bool;

    fn render(&self, renderer: &mut R);

    fn bounds(&self) -> Rect;

    /// Move or resize the widget. Used by layouts to place it.
    fn set_bounds(&mut self, bounds: Rect);

    /// Replace the displayed text, regenerating the owned text resource.
    fn set_text(&mut self, renderer: &mut R, text: &str);

    fn text(&self) -> &str;
}

/// Handle to a widget placed in a [`Layout`](crate::Layout).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(pub(crate) usize);
