use std::fmt;

use crate::event::{Consumed, Event};

pub type KeyCode = u32;

#[derive(Debug, Event)]
#[event(kind = KeyPressed, category = KEYBOARD | INPUT, custom_display)]
pub struct KeyPressedEvent {
    consumed: Consumed,
    key_code: KeyCode,
    repeat_count: u32,
}

impl KeyPressedEvent {
    pub fn new(key_code: KeyCode, repeat_count: u32) -> Self {
        Self {
            consumed: Consumed::default(),
            key_code,
            repeat_count,
        }
    }

    pub fn get_key_code(&self) -> KeyCode {
        self.key_code
    }

    /// Zero for the initial press, counting up while the key is held.
    pub fn get_repeat_count(&self) -> u32 {
        self.repeat_count
    }
}

impl fmt::Display for KeyPressedEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {} ({} repeats)", self.get_name(), self.key_code, self.repeat_count)
    }
}

#[derive(Debug, Event)]
#[event(kind = KeyReleased, category = KEYBOARD | INPUT, custom_display)]
pub struct KeyReleasedEvent {
    consumed: Consumed,
    key_code: KeyCode,
}

impl KeyReleasedEvent {
    pub fn new(key_code: KeyCode) -> Self {
        Self {
            consumed: Consumed::default(),
            key_code,
        }
    }

    pub fn get_key_code(&self) -> KeyCode {
        self.key_code
    }
}

impl fmt::Display for KeyReleasedEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.get_name(), self.key_code)
    }
}
