use std::fmt;

use crate::event::{Consumed, Event};

pub type MouseButton = u32;

#[derive(Debug, Event)]
#[event(kind = MouseButtonPressed, category = MOUSE | MOUSE_BUTTON | INPUT, custom_display)]
pub struct MouseButtonPressedEvent {
    consumed: Consumed,
    button: MouseButton,
}

impl MouseButtonPressedEvent {
    pub fn new(button: MouseButton) -> Self {
        Self {
            consumed: Consumed::default(),
            button,
        }
    }

    pub fn get_button(&self) -> MouseButton {
        self.button
    }
}

impl fmt::Display for MouseButtonPressedEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.get_name(), self.button)
    }
}

#[derive(Debug, Event)]
#[event(kind = MouseButtonReleased, category = MOUSE | MOUSE_BUTTON | INPUT, custom_display)]
pub struct MouseButtonReleasedEvent {
    consumed: Consumed,
    button: MouseButton,
}

impl MouseButtonReleasedEvent {
    pub fn new(button: MouseButton) -> Self {
        Self {
            consumed: Consumed::default(),
            button,
        }
    }

    pub fn get_button(&self) -> MouseButton {
        self.button
    }
}

impl fmt::Display for MouseButtonReleasedEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.get_name(), self.button)
    }
}

/// Cursor position relative to the window's client area.
#[derive(Debug, Event)]
#[event(kind = MouseMoved, category = MOUSE | INPUT, custom_display)]
pub struct MouseMovedEvent {
    consumed: Consumed,
    x: f32,
    y: f32,
}

impl MouseMovedEvent {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            consumed: Consumed::default(),
            x,
            y,
        }
    }

    pub fn get_x(&self) -> f32 {
        self.x
    }

    pub fn get_y(&self) -> f32 {
        self.y
    }
}

impl fmt::Display for MouseMovedEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}, {}", self.get_name(), self.x, self.y)
    }
}

#[derive(Debug, Event)]
#[event(kind = MouseScrolled, category = MOUSE | INPUT, custom_display)]
pub struct MouseScrolledEvent {
    consumed: Consumed,
    x_offset: f32,
    y_offset: f32,
}

impl MouseScrolledEvent {
    pub fn new(x_offset: f32, y_offset: f32) -> Self {
        Self {
            consumed: Consumed::default(),
            x_offset,
            y_offset,
        }
    }

    pub fn get_x_offset(&self) -> f32 {
        self.x_offset
    }

    pub fn get_y_offset(&self) -> f32 {
        self.y_offset
    }
}

impl fmt::Display for MouseScrolledEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}, {}", self.get_name(), self.x_offset, self.y_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_display() {
        assert_eq!(MouseMovedEvent::new(12.0, 34.0).to_string(), "MouseMoved: 12, 34");
        assert_eq!(MouseScrolledEvent::new(0.0, -1.5).to_string(), "MouseScrolled: 0, -1.5");
        assert_eq!(MouseButtonPressedEvent::new(1).to_string(), "MouseButtonPressed: 1");
        assert_eq!(MouseButtonReleasedEvent::new(2).to_string(), "MouseButtonReleased: 2");
    }
}
