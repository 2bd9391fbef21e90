use std::any;

use crate::event::{ConsumedToken, Event, StaticEvent};

/// Binds one event for the length of a dispatch pass and offers it to handlers by type.
///
/// The dispatcher never stops early on its own. Callers that want to skip handlers once the event
/// is consumed check [`EventDispatcher::is_consumed`] between calls.
pub struct EventDispatcher<'a> {
    event: &'a mut dyn Event,
}

impl<'a> EventDispatcher<'a> {
    pub fn new(event: &'a mut dyn Event) -> Self {
        Self {
            event,
        }
    }

    /// Invokes `handler` if the bound event is a `T`, storing its result as the consumed flag.
    ///
    /// Returns whether the handler ran, which says nothing about whether it consumed the event.
    pub fn dispatch<T, F>(&mut self, handler: F) -> bool
    where
        T: StaticEvent,
        F: FnOnce(&mut T) -> bool,
    {
        let kind = self.event.get_event_kind();
        if kind != T::get_static_kind() {
            return false;
        }

        let consumed = match self.event.as_any_mut().downcast_mut::<T>() {
            Some(event) => handler(event),
            None => {
                log!(
                    ERROR,
                    "EventDispatcher::dispatch: {} is declared with kind {:?}, but the bound event of that kind is another type",
                    any::type_name::<T>(),
                    kind,
                );
                return false;
            },
        };

        self.event.consumed_mut(ConsumedToken(())).set(consumed);
        true
    }

    pub fn get_event(&self) -> &dyn Event {
        &*self.event
    }

    pub fn is_consumed(&self) -> bool {
        self.event.is_consumed()
    }
}
