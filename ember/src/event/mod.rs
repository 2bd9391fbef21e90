//! Synchronous events.
//!
//! An event is raised by its producer, offered to handlers through an [`EventDispatcher`] and
//! dropped once the producing call returns. Nothing is queued.

use std::fmt::{Debug, Display};

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::util::AsAny;

pub use ember_derive::Event;

pub use self::dispatcher::EventDispatcher;

pub mod application;
pub mod dispatcher;
pub mod key;
pub mod mouse;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum EventKind {
    None,
    WindowClose,
    WindowResize,
    WindowFocus,
    WindowLostFocus,
    WindowMoved,
    AppTick,
    AppUpdate,
    AppRender,
    KeyPressed,
    KeyReleased,
    MouseButtonPressed,
    MouseButtonReleased,
    MouseMoved,
    MouseScrolled,
}

impl EventKind {
    pub fn get_name(&self) -> &'static str {
        match *self {
            EventKind::None => "None",
            EventKind::WindowClose => "WindowClose",
            EventKind::WindowResize => "WindowResize",
            EventKind::WindowFocus => "WindowFocus",
            EventKind::WindowLostFocus => "WindowLostFocus",
            EventKind::WindowMoved => "WindowMoved",
            EventKind::AppTick => "AppTick",
            EventKind::AppUpdate => "AppUpdate",
            EventKind::AppRender => "AppRender",
            EventKind::KeyPressed => "KeyPressed",
            EventKind::KeyReleased => "KeyReleased",
            EventKind::MouseButtonPressed => "MouseButtonPressed",
            EventKind::MouseButtonReleased => "MouseButtonReleased",
            EventKind::MouseMoved => "MouseMoved",
            EventKind::MouseScrolled => "MouseScrolled",
        }
    }
}

impl Default for EventKind {
    fn default() -> Self {
        EventKind::None
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
    #[serde(transparent)]
    pub struct EventCategory: u32 {
        const APPLICATION = 1 << 0;
        const INPUT = 1 << 1;
        const KEYBOARD = 1 << 2;
        const MOUSE = 1 << 3;
        const MOUSE_BUTTON = 1 << 4;
    }
}

/// Whether the last matching handler claimed an event.
///
/// Anyone can read it. Only the dispatcher can change it.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Consumed(bool);

impl Consumed {
    pub fn get(&self) -> bool {
        self.0
    }

    fn set(&mut self, consumed: bool) {
        self.0 = consumed;
    }
}

/// Proof of access to [`Event::consumed_mut`]. Only this module and the dispatcher can make one.
///
/// Code outside the crate can name it but not build it, so a handler holding `&mut dyn Event`
/// cannot reach the flag:
///
/// ```compile_fail
/// use ember::event::{ConsumedToken, Event};
/// use ember::event::key::KeyPressedEvent;
///
/// let mut event = KeyPressedEvent::new(65, 0);
/// event.consumed_mut(ConsumedToken(()));
/// ```
///
/// Nor can it change a `Consumed` it can read:
///
/// ```compile_fail
/// use ember::event::Consumed;
///
/// let mut consumed = Consumed::default();
/// consumed.set(true);
/// ```
#[derive(Debug)]
pub struct ConsumedToken(());

/// A single occurrence with a fixed kind and category.
///
/// Implement it with `#[derive(Event)]` rather than by hand: the derive keeps the instance
/// accessors in step with the [`StaticEvent`] constants the dispatcher matches on.
pub trait Event: AsAny + Debug + Display {
    fn get_event_kind(&self) -> EventKind;
    fn get_category_flags(&self) -> EventCategory;

    fn consumed(&self) -> &Consumed;
    fn consumed_mut(&mut self, token: ConsumedToken) -> &mut Consumed;

    fn get_name(&self) -> &'static str {
        self.get_event_kind().get_name()
    }

    fn is_in_category(&self, category: EventCategory) -> bool {
        self.get_category_flags().intersects(category)
    }

    fn is_consumed(&self) -> bool {
        self.consumed().get()
    }
}

/// Kind and category of an event type, known without an instance.
pub trait StaticEvent: Event + Sized + 'static {
    const KIND: EventKind;
    const CATEGORY: EventCategory;

    fn get_static_kind() -> EventKind {
        Self::KIND
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::application::*;
    use super::key::*;
    use super::mouse::*;

    fn every_event() -> Vec<Box<dyn Event>> {
        vec![
            Box::new(WindowCloseEvent::new()),
            Box::new(WindowResizeEvent::new(1280, 720)),
            Box::new(WindowFocusEvent::new()),
            Box::new(WindowLostFocusEvent::new()),
            Box::new(WindowMovedEvent::new(10, 20)),
            Box::new(AppTickEvent::new()),
            Box::new(AppUpdateEvent::new()),
            Box::new(AppRenderEvent::new()),
            Box::new(KeyPressedEvent::new(65, 0)),
            Box::new(KeyReleasedEvent::new(65)),
            Box::new(MouseButtonPressedEvent::new(0)),
            Box::new(MouseButtonReleasedEvent::new(0)),
            Box::new(MouseMovedEvent::new(12.0, 34.0)),
            Box::new(MouseScrolledEvent::new(0.0, -1.0)),
        ]
    }

    #[test]
    fn test_every_kind_has_one_event() {
        let events = every_event();

        for (i, a) in events.iter().enumerate() {
            assert_ne!(a.get_event_kind(), EventKind::None);
            for b in events.iter().skip(i + 1) {
                assert_ne!(a.get_event_kind(), b.get_event_kind(), "{:?} and {:?} share a kind", a, b);
            }
        }
    }

    #[test]
    fn test_name_matches_kind() {
        for event in every_event() {
            assert_eq!(event.get_name(), event.get_event_kind().get_name());
            assert_eq!(format!("{:?}", event.get_event_kind()), event.get_name());
        }
    }

    #[test]
    fn test_static_kind_matches_instance() {
        assert_eq!(WindowCloseEvent::get_static_kind(), WindowCloseEvent::new().get_event_kind());
        assert_eq!(KeyPressedEvent::get_static_kind(), KeyPressedEvent::new(1, 1).get_event_kind());
        assert_eq!(MouseMovedEvent::get_static_kind(), MouseMovedEvent::new(0.0, 0.0).get_event_kind());
        assert_eq!(MouseMovedEvent::CATEGORY, MouseMovedEvent::new(0.0, 0.0).get_category_flags());
    }

    #[test]
    fn test_is_in_category() {
        let categories = [
            EventCategory::empty(),
            EventCategory::APPLICATION,
            EventCategory::INPUT,
            EventCategory::KEYBOARD,
            EventCategory::MOUSE,
            EventCategory::MOUSE_BUTTON,
            EventCategory::MOUSE | EventCategory::KEYBOARD,
            EventCategory::all(),
        ];

        for event in every_event() {
            let flags = event.get_category_flags();
            for &category in categories.iter() {
                assert_eq!(event.is_in_category(category), flags.bits() & category.bits() != 0);
            }
        }
    }

    #[test]
    fn test_declared_categories() {
        assert_eq!(WindowCloseEvent::CATEGORY, EventCategory::APPLICATION);
        assert_eq!(AppTickEvent::CATEGORY, EventCategory::APPLICATION);
        assert_eq!(KeyPressedEvent::CATEGORY, EventCategory::KEYBOARD | EventCategory::INPUT);
        assert_eq!(MouseMovedEvent::CATEGORY, EventCategory::MOUSE | EventCategory::INPUT);
        assert_eq!(
            MouseButtonPressedEvent::CATEGORY,
            EventCategory::MOUSE | EventCategory::MOUSE_BUTTON | EventCategory::INPUT,
        );

        let moved = MouseMovedEvent::new(1.0, 2.0);
        assert!(moved.is_in_category(EventCategory::INPUT));
        assert!(!moved.is_in_category(EventCategory::KEYBOARD));
        assert!(!moved.is_in_category(EventCategory::MOUSE_BUTTON));
    }

    #[test]
    fn test_new_events_are_not_consumed() {
        for event in every_event() {
            assert!(!event.is_consumed());
        }
    }

    #[test]
    fn test_default_display_is_name() {
        assert_eq!(WindowCloseEvent::new().to_string(), "WindowClose");
        assert_eq!(AppRenderEvent::new().to_string(), "AppRender");
        assert_eq!(WindowFocusEvent::new().to_string(), "WindowFocus");
    }

    #[test]
    fn test_kind_serialization() {
        for event in every_event() {
            let kind = event.get_event_kind();
            let bytes = serde_cbor::to_vec(&kind).unwrap();
            let decoded: EventKind = serde_cbor::from_slice(&bytes).unwrap();
            assert_eq!(decoded, kind);
        }

        let bytes = serde_cbor::to_vec(&EventKind::MouseMoved).unwrap();
        assert_eq!(bytes, serde_cbor::to_vec(&"MouseMoved").unwrap());
    }

    #[test]
    fn test_category_serialization() {
        let category = EventCategory::MOUSE | EventCategory::INPUT;
        let bytes = serde_cbor::to_vec(&category).unwrap();
        let decoded: EventCategory = serde_cbor::from_slice(&bytes).unwrap();
        assert_eq!(decoded, category);
    }
}
