//! Left-to-right row layout.
//!
//! Widgets are placed once, when added: the first at the origin, each next one
//! `spacing` pixels right of the previous widget's right edge, all on the same
//! row. Input goes to widgets in insertion order and stops at the first one
//! that consumes it.

use crate::input::InputEvent;
use crate::primitives::{Point, Rect};
use crate::render::Renderer;
use crate::widget::{Widget, WidgetId};

pub struct Layout<R: Renderer, M> {
    origin: Point,
    spacing: f32,
    widgets: Vec<Box<dyn Widget<R, M>>>,
}

impl<R: Renderer, M> Layout<R, M> {
    pub fn new(origin: Point, spacing: f32) -> Self {
        Self {
            origin,
            spacing,
            widgets: Vec::new(),
        }
    }

    /// Append a widget and move it to its slot in the row.
    pub fn add_widget(&mut self, widget: impl Widget<R, M> + 'static) -> WidgetId {
        let mut widget: Box<dyn Widget<R, M>> = Box::new(widget);

        let x = match self.widgets.last() {
            Some(previous) => previous.bounds().right() + self.spacing,
            None => self.origin.x,
        };
        let bounds = widget.bounds();
        widget.set_bounds(Rect { x, y: self.origin.y, ..bounds });

        self.widgets.push(widget);
        WidgetId(self.widgets.len() - 1)
    }

    /// Offer the event to each widget in order. Returns `true` if one
    /// consumed it.
    pub fn handle_event(&mut self, event: &InputEvent, messages: &mut Vec<M>) -> bool {
        self.widgets
            .iter_mut()
            .any(|widget| widget.handle_event(event, messages))
    }

    /// Render in insertion order, so later widgets draw on top.
    pub fn render(&self, renderer: &mut R) {
        for widget in &self.widgets {
            widget.render(renderer);
        }
    }

    pub fn widget(&self, id: WidgetId) -> Option<&dyn Widget<R, M>> {
        self.widgets.get(id.0).map(|w| w.as_ref())
    }

    pub fn widget_mut(&mut self, id: WidgetId) -> Option<&mut (dyn Widget<R, M> + 'static)> {
        self.widgets.get_mut(id.0).map(|w| w.as_mut())
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}
