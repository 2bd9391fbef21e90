//! Synchronous event model for the engine: event kinds and categories, the dispatcher that routes
//! one event to type-matched handlers, and the layer stack that offers events to layers in order.

extern crate self as ember;

#[macro_use]
pub mod log;

pub mod event;
pub mod layer;
pub mod util;
