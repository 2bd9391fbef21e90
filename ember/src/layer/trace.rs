use serde::{Deserialize, Serialize};

use crate::event::{Event, EventCategory};
use crate::layer::Layer;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct EventTraceConfig {
    pub name: String,
    pub categories: EventCategory,
    pub include_consumed: bool,
}

impl Default for EventTraceConfig {
    fn default() -> Self {
        Self {
            name: "EventTrace".to_string(),
            categories: EventCategory::all(),
            include_consumed: false,
        }
    }
}

/// Logs every event in the configured categories as it passes. Never consumes anything.
///
/// Push it as an overlay to see events before any layer can claim them, or as the bottom layer to
/// see only what nobody claimed.
pub struct EventTraceLayer {
    config: EventTraceConfig,
    traced: usize,
}

impl EventTraceLayer {
    pub fn new(config: EventTraceConfig) -> Self {
        Self {
            config,
            traced: 0,
        }
    }

    pub fn get_config(&self) -> &EventTraceConfig {
        &self.config
    }

    pub fn get_traced_count(&self) -> usize {
        self.traced
    }

    fn should_trace(&self, event: &dyn Event) -> bool {
        event.is_in_category(self.config.categories) && (self.config.include_consumed || !event.is_consumed())
    }
}

impl Layer for EventTraceLayer {
    fn get_name(&self) -> String {
        self.config.name.clone()
    }

    fn on_event(&mut self, event: &mut dyn Event) {
        if self.should_trace(event) {
            self.traced += 1;
            log!(INFO, "{}", event);
        }
    }
}
