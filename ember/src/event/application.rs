use std::fmt;

use crate::event::{Consumed, Event};

#[derive(Debug, Default, Event)]
#[event(kind = WindowClose, category = APPLICATION)]
pub struct WindowCloseEvent {
    consumed: Consumed,
}

impl WindowCloseEvent {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Event)]
#[event(kind = WindowResize, category = APPLICATION, custom_display)]
pub struct WindowResizeEvent {
    consumed: Consumed,
    width: u32,
    height: u32,
}

impl WindowResizeEvent {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            consumed: Consumed::default(),
            width,
            height,
        }
    }

    pub fn get_width(&self) -> u32 {
        self.width
    }

    pub fn get_height(&self) -> u32 {
        self.height
    }
}

impl fmt::Display for WindowResizeEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}, {}", self.get_name(), self.width, self.height)
    }
}

#[derive(Debug, Default, Event)]
#[event(kind = WindowFocus, category = APPLICATION)]
pub struct WindowFocusEvent {
    consumed: Consumed,
}

impl WindowFocusEvent {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Default, Event)]
#[event(kind = WindowLostFocus, category = APPLICATION)]
pub struct WindowLostFocusEvent {
    consumed: Consumed,
}

impl WindowLostFocusEvent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// The window's new position, in screen coordinates.
#[derive(Debug, Event)]
#[event(kind = WindowMoved, category = APPLICATION, custom_display)]
pub struct WindowMovedEvent {
    consumed: Consumed,
    x: i32,
    y: i32,
}

impl WindowMovedEvent {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            consumed: Consumed::default(),
            x,
            y,
        }
    }

    pub fn get_x(&self) -> i32 {
        self.x
    }

    pub fn get_y(&self) -> i32 {
        self.y
    }
}

impl fmt::Display for WindowMovedEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}, {}", self.get_name(), self.x, self.y)
    }
}

#[derive(Debug, Default, Event)]
#[event(kind = AppTick, category = APPLICATION)]
pub struct AppTickEvent {
    consumed: Consumed,
}

impl AppTickEvent {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Default, Event)]
#[event(kind = AppUpdate, category = APPLICATION)]
pub struct AppUpdateEvent {
    consumed: Consumed,
}

impl AppUpdateEvent {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Default, Event)]
#[event(kind = AppRender, category = APPLICATION)]
pub struct AppRenderEvent {
    consumed: Consumed,
}

impl AppRenderEvent {
    pub fn new() -> Self {
        Self::default()
    }
}
