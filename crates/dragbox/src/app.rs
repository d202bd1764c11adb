//! Application state and the per-frame update/render steps.
//!
//! [`AppState`] is plain data and can be driven without any widgets.
//! [`App`] adds the retained widgets and the alert, routes each input event
//! through them in priority order and renders the frame. Both are generic over
//! the [`Renderer`], so tests run them against a fake one.

use crate::alert::Alert;
use crate::button::Button;
use crate::color::{css, Color};
use crate::input::{InputEvent, Key};
use crate::label::Label;
use crate::layout::Layout;
use crate::primitives::{Point, Rect};
use crate::render::{RenderError, RenderedText, Renderer};
use crate::widget::{Widget, WidgetId};
use crate::wrap::layout_bottom_text;

/// Side length of the draggable square.
pub const SQUARE_SIZE: f32 = 100.0;
/// Distance the square moves per arrow key press.
pub const SQUARE_STEP: f32 = 15.0;
pub const INITIAL_SQUARE_POSITION: Point = Point::new(150.0, 150.0);
/// Margin used for the widget row, the corner button and the bottom text.
pub const EDGE_MARGIN: f32 = 10.0;
/// Space between widgets in the top row.
pub const ROW_SPACING: f32 = 10.0;

pub const BACKGROUND_COLOR: Color = Color::srgb(100, 150, 200);
pub const SQUARE_COLOR: Color = Color::srgb(0, 0, 200);
pub const TEXT_COLOR: Color = css::WHITE;

pub const ALERT_MESSAGE: &str = "Button clicked! This is a longer message that will demonstrate the text wrapping functionality in alert dialogs.";
pub const ALERT_DISMISS_TEXT: &str = "Press ESC/SPACE or click to close";
pub const INSTRUCTIONS: &str =
    "• move the blue square with arrow keys or mouse drag\n • click its buttons to change counter";

/// What the buttons ask the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Increment,
    Decrement,
    ShowAlert,
}

/// Whether the loop should keep running after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

/// Everything the app remembers between frames, apart from widgets.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Top-left corner of the square
    pub square: Point,
    /// Pointer offset from the square's corner while dragging
    pub drag_offset: Option<Point>,
    pub counter: i32,
    pub window_width: f32,
    pub window_height: f32,
}

impl AppState {
    pub fn new(window_width: f32, window_height: f32) -> Self {
        let mut state = Self {
            square: INITIAL_SQUARE_POSITION,
            drag_offset: None,
            counter: 0,
            window_width,
            window_height,
        };
        state.clamp_square();
        state
    }

    pub fn square_rect(&self) -> Rect {
        Rect::from_min_size(self.square, [SQUARE_SIZE, SQUARE_SIZE])
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_offset.is_some()
    }

    /// Keep the square inside the window. The left/top edge wins when the
    /// window is smaller than the square.
    pub fn clamp_square(&mut self) {
        self.square.x = self.square.x.min(self.window_width - SQUARE_SIZE).max(0.0);
        self.square.y = self.square.y.min(self.window_height - SQUARE_SIZE).max(0.0);
    }

    pub fn move_square(&mut self, dx: f32, dy: f32) {
        self.square.x += dx;
        self.square.y += dy;
        self.clamp_square();
    }

    /// Move the square for an arrow key. Returns `false` for other keys.
    pub fn handle_arrow_key(&mut self, key: Key) -> bool {
        let (dx, dy) = match key {
            Key::ArrowLeft => (-SQUARE_STEP, 0.0),
            Key::ArrowRight => (SQUARE_STEP, 0.0),
            Key::ArrowUp => (0.0, -SQUARE_STEP),
            Key::ArrowDown => (0.0, SQUARE_STEP),
            _ => return false,
        };
        self.move_square(dx, dy);
        true
    }

    /// Start dragging if `pointer` is on the square.
    pub fn begin_drag(&mut self, pointer: Point) -> bool {
        if !self.square_rect().contains(pointer) {
            return false;
        }
        self.drag_offset = Some(Point::new(
            pointer.x - self.square.x,
            pointer.y - self.square.y,
        ));
        true
    }

    pub fn drag_to(&mut self, pointer: Point) {
        if let Some(offset) = self.drag_offset {
            self.square = Point::new(pointer.x - offset.x, pointer.y - offset.y);
            self.clamp_square();
        }
    }

    pub fn end_drag(&mut self) {
        self.drag_offset = None;
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.window_width = width;
        self.window_height = height;
        self.clamp_square();
    }

    pub fn counter_text(&self) -> String {
        format!("Counter: {}", self.counter)
    }
}

/// The demo application: state, widgets and alert.
pub struct App<R: Renderer> {
    state: AppState,
    alert: Alert,
    layout: Layout<R, Message>,
    counter_label: WidgetId,
    corner_button: Button<R, Message>,
    messages: Vec<Message>,
}

impl<R: Renderer + 'static> App<R> {
    /// Build the widgets for a window of the given size.
    ///
    /// Fails if a button label cannot be rendered.
    pub fn new(
        renderer: &mut R,
        window_width: f32,
        window_height: f32,
    ) -> Result<Self, RenderError> {
        let state = AppState::new(window_width, window_height);

        let mut layout = Layout::new(Point::new(EDGE_MARGIN, EDGE_MARGIN), ROW_SPACING);
        let plus = Button::new(renderer, Rect::default(), "+")?.on_click(Message::Increment);
        let minus = Button::new(renderer, Rect::default(), "-")?.on_click(Message::Decrement);
        let label = Label::new(renderer, Point::zero(), &state.counter_text());
        layout.add_widget(plus);
        layout.add_widget(minus);
        let counter_label = layout.add_widget(label);

        let corner_button =
            Button::new(renderer, Rect::default(), "Click Me")?.on_click(Message::ShowAlert);

        let mut app = Self {
            state,
            alert: Alert::new(ALERT_MESSAGE, ALERT_DISMISS_TEXT),
            layout,
            counter_label,
            corner_button,
            messages: Vec::new(),
        };
        app.place_corner_button();
        Ok(app)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn alert(&self) -> &Alert {
        &self.alert
    }

    pub fn layout(&self) -> &Layout<R, Message> {
        &self.layout
    }

    pub fn corner_button(&self) -> &Button<R, Message> {
        &self.corner_button
    }

    /// Text currently shown by the counter label.
    pub fn counter_label_text(&self) -> Option<&str> {
        self.layout.widget(self.counter_label).map(|w| w.text())
    }

    /// Right-align the corner button at the top of the window.
    fn place_corner_button(&mut self) {
        let bounds = self.corner_button.bounds();
        self.corner_button.set_bounds(Rect {
            x: self.state.window_width - bounds.width - EDGE_MARGIN,
            y: EDGE_MARGIN,
            ..bounds
        });
    }

    /// Apply every event in order, stopping early on exit.
    pub fn update_all<I>(&mut self, renderer: &mut R, events: I) -> Control
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            if self.update(renderer, &event) == Control::Exit {
                return Control::Exit;
            }
        }
        Control::Continue
    }

    /// Route one event.
    ///
    /// Priority: quit and resize first, then a visible alert captures the
    /// event, then the widget row, the corner button, and finally the square.
    pub fn update(&mut self, renderer: &mut R, event: &InputEvent) -> Control {
        match *event {
            InputEvent::Quit => return Control::Exit,
            // Minimized windows report a zero size; keep the last real one
            InputEvent::Resized { width, height } if width <= 0.0 || height <= 0.0 => {
                return Control::Continue;
            }
            InputEvent::Resized { width, height } => {
                self.state.resize(width, height);
                self.place_corner_button();
                return Control::Continue;
            }
            _ => {}
        }

        if self.alert.handle_event(event) {
            return Control::Continue;
        }

        let mut messages = std::mem::take(&mut self.messages);

        match *event {
            InputEvent::KeyDown(Key::Escape) => return Control::Exit,
            InputEvent::KeyDown(key) => {
                self.state.handle_arrow_key(key);
            }
            InputEvent::PointerDown { position, .. } => {
                let handled = self.layout.handle_event(event, &mut messages)
                    || self.corner_button.handle_event(event, &mut messages);
                if !handled {
                    self.state.begin_drag(position);
                }
            }
            InputEvent::PointerUp { .. } => {
                self.layout.handle_event(event, &mut messages);
                self.corner_button.handle_event(event, &mut messages);
                self.state.end_drag();
            }
            InputEvent::PointerMove { position } => self.state.drag_to(position),
            InputEvent::Quit | InputEvent::Resized { .. } => {}
        }

        for message in messages.drain(..) {
            self.apply(renderer, message);
        }
        self.messages = messages;

        Control::Continue
    }

    fn apply(&mut self, renderer: &mut R, message: Message) {
        match message {
            Message::Increment => self.state.counter += 1,
            Message::Decrement => self.state.counter -= 1,
            Message::ShowAlert => {
                self.alert.show();
                return;
            }
        }

        let text = self.state.counter_text();
        if let Some(label) = self.layout.widget_mut(self.counter_label) {
            label.set_text(renderer, &text);
        }
    }

    /// Draw the whole frame. Presenting is left to the caller.
    pub fn render(&self, renderer: &mut R) {
        renderer.clear(BACKGROUND_COLOR);
        renderer.fill_rect(self.state.square_rect(), SQUARE_COLOR);

        self.layout.render(renderer);
        self.corner_button.render(renderer);

        let lines = layout_bottom_text(
            INSTRUCTIONS,
            self.state.window_width,
            self.state.window_height,
            EDGE_MARGIN,
            renderer,
        );
        for line in lines {
            match renderer.create_text(&line.text, TEXT_COLOR) {
                Ok(texture) => {
                    let size = texture.size();
                    let rect = Rect {
                        width: size.width,
                        height: size.height,
                        ..line.rect
                    };
                    renderer.draw_text(&texture, rect);
                }
                Err(err) => log::warn!("instruction line {:?} skipped: {err}", line.text),
            }
        }

        self.alert
            .render(renderer, self.state.window_width, self.state.window_height);
    }
}
