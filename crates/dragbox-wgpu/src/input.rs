//! Winit input adapter for dragbox
//!
//! Converts winit window events into dragbox's backend-agnostic
//! [`InputEvent`]s. Mouse button events carry no position in winit, so the
//! translator remembers the last cursor position.

use dragbox::{InputEvent, Key, MouseButton, Point};
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

#[derive(Debug, Default, Clone)]
pub struct InputTranslator {
    cursor: Point,
}

impl InputTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known cursor position in window pixels
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Translate one window event. Returns `None` for events the app
    /// does not consume.
    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CloseRequested => Some(InputEvent::Quit),
            // Minimizing reports 0x0 on some platforms
            WindowEvent::Resized(size) if size.width == 0 || size.height == 0 => None,
            WindowEvent::Resized(size) => Some(InputEvent::Resized {
                width: size.width as f32,
                height: size.height as f32,
            }),
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Point::new(position.x as f32, position.y as f32);
                Some(InputEvent::PointerMove {
                    position: self.cursor,
                })
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = convert_mouse_button(*button);
                let position = self.cursor;
                Some(match state {
                    ElementState::Pressed => InputEvent::PointerDown { position, button },
                    ElementState::Released => InputEvent::PointerUp { position, button },
                })
            }
            // Repeats included: holding an arrow key keeps moving the square
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                Some(InputEvent::KeyDown(convert_key(&event.physical_key)))
            }
            _ => None,
        }
    }
}

/// Convert winit MouseButton to dragbox MouseButton
pub fn convert_mouse_button(button: winit::event::MouseButton) -> MouseButton {
    match button {
        winit::event::MouseButton::Left => MouseButton::Left,
        winit::event::MouseButton::Right => MouseButton::Right,
        winit::event::MouseButton::Middle => MouseButton::Middle,
        winit::event::MouseButton::Back => MouseButton::Other(3),
        winit::event::MouseButton::Forward => MouseButton::Other(4),
        winit::event::MouseButton::Other(n) => MouseButton::Other(n.min(u8::MAX as u16) as u8),
    }
}

/// Convert a layout-independent winit key to a dragbox Key
pub fn convert_key(key: &PhysicalKey) -> Key {
    match key {
        PhysicalKey::Code(KeyCode::Escape) => Key::Escape,
        PhysicalKey::Code(KeyCode::Space) => Key::Space,
        PhysicalKey::Code(KeyCode::ArrowLeft) => Key::ArrowLeft,
        PhysicalKey::Code(KeyCode::ArrowRight) => Key::ArrowRight,
        PhysicalKey::Code(KeyCode::ArrowUp) => Key::ArrowUp,
        PhysicalKey::Code(KeyCode::ArrowDown) => Key::ArrowDown,
        _ => Key::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalSize;

    #[test]
    fn test_convert_key() {
        assert_eq!(convert_key(&PhysicalKey::Code(KeyCode::Escape)), Key::Escape);
        assert_eq!(convert_key(&PhysicalKey::Code(KeyCode::Space)), Key::Space);
        assert_eq!(
            convert_key(&PhysicalKey::Code(KeyCode::ArrowDown)),
            Key::ArrowDown
        );
        assert_eq!(convert_key(&PhysicalKey::Code(KeyCode::KeyA)), Key::Other);
    }

    #[test]
    fn test_convert_mouse_button() {
        assert_eq!(
            convert_mouse_button(winit::event::MouseButton::Left),
            MouseButton::Left
        );
        assert_eq!(
            convert_mouse_button(winit::event::MouseButton::Back),
            MouseButton::Other(3)
        );
        assert_eq!(
            convert_mouse_button(winit::event::MouseButton::Other(1000)),
            MouseButton::Other(255)
        );
    }

    #[test]
    fn test_translate_window_events() {
        let mut translator = InputTranslator::new();
        assert_eq!(
            translator.translate(&WindowEvent::CloseRequested),
            Some(InputEvent::Quit)
        );
        assert_eq!(
            translator.translate(&WindowEvent::Resized(PhysicalSize::new(800, 600))),
            Some(InputEvent::Resized {
                width: 800.0,
                height: 600.0
            })
        );
        assert_eq!(
            translator.translate(&WindowEvent::Resized(PhysicalSize::new(0, 0))),
            None
        );
        assert_eq!(
            translator.translate(&WindowEvent::Resized(PhysicalSize::new(700, 0))),
            None
        );
        assert_eq!(translator.translate(&WindowEvent::Focused(true)), None);
        assert_eq!(translator.cursor(), Point::zero());
    }
}
