use crate::event::Event;
use crate::util::AsAny;

pub use self::stack::LayerStack;
pub use self::trace::{EventTraceConfig, EventTraceLayer};

mod stack;
mod trace;

/// One handler in a [`LayerStack`].
///
/// A layer claims an event by dispatching it to a handler that returns `true`; the stack stops
/// offering the event to the layers below once that happens.
pub trait Layer: AsAny {
    fn get_name(&self) -> String;
    fn on_event(&mut self, event: &mut dyn Event);

    fn on_attach(&mut self) { }
    fn on_detach(&mut self) { }
    fn on_update(&mut self) { }
}
