//! Backend-agnostic input events.
//!
//! Windowing libraries translate their native events into [`InputEvent`]s;
//! the app consumes them one at a time.

use crate::primitives::Point;

/// Backend-agnostic mouse button representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (scroll wheel click)
    Middle,
    /// Additional mouse buttons (back, forward, etc.)
    Other(u8),
}

/// Physical key, independent of keyboard layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Space,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    /// Any key the app does not react to
    Other,
}

/// A single input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The window was asked to close
    Quit,
    KeyDown(Key),
    PointerDown { position: Point, button: MouseButton },
    PointerUp { position: Point, button: MouseButton },
    PointerMove { position: Point },
    /// New window size in pixels
    Resized { width: f32, height: f32 },
}

impl InputEvent {
    /// Pointer position for pointer events.
    pub fn position(&self) -> Option<Point> {
        match self {
            InputEvent::PointerDown { position, .. }
            | InputEvent::PointerUp { position, .. }
            | InputEvent::PointerMove { position } => Some(*position),
            _ => None,
        }
    }

    /// Left-button press at `(x, y)`.
    pub fn click(x: f32, y: f32) -> Self {
        InputEvent::PointerDown {
            position: Point::new(x, y),
            button: MouseButton::Left,
        }
    }

    /// Left-button release at `(x, y)`.
    pub fn release(x: f32, y: f32) -> Self {
        InputEvent::PointerUp {
            position: Point::new(x, y),
            button: MouseButton::Left,
        }
    }

    pub fn pointer_move(x: f32, y: f32) -> Self {
        InputEvent::PointerMove {
            position: Point::new(x, y),
        }
    }
}
