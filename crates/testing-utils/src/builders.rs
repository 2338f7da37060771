//! Builders for `listeners` configuration sections.

use serde_json::{json, Map, Value};
use wiring_core::config::ConfigShape;

/// Builds an application configuration containing a `listeners` section.
#[derive(Debug, Clone)]
pub struct ListenerConfigBuilder {
    shape: ConfigShape,
    entries: Vec<(String, String, Option<i32>)>,
}

impl ListenerConfigBuilder {
    pub fn event_keyed() -> Self {
        Self {
            shape: ConfigShape::EventKeyed,
            entries: Vec::new(),
        }
    }

    pub fn listener_keyed() -> Self {
        Self {
            shape: ConfigShape::ListenerKeyed,
            entries: Vec::new(),
        }
    }

    /// Bind `listener_id` to `event_name` without a priority.
    pub fn on(mut self, event_name: &str, listener_id: &str) -> Self {
        self.entries
            .push((event_name.to_string(), listener_id.to_string(), None));
        self
    }

    pub fn on_with_priority(mut self, event_name: &str, listener_id: &str, priority: i32) -> Self {
        self.entries
            .push((event_name.to_string(), listener_id.to_string(), Some(priority)));
        self
    }

    /// Only the `listeners` section.
    pub fn build_listeners(&self) -> Value {
        let mut section = Map::new();
        for (event_name, listener_id, priority) in &self.entries {
            match self.shape {
                ConfigShape::EventKeyed => {
                    let mut entry = json!({ "listener": listener_id });
                    if let Some(priority) = priority {
                        entry["priority"] = json!(priority);
                    }
                    let group = section
                        .entry(event_name.clone())
                        .or_insert_with(|| Value::Array(Vec::new()));
                    if let Value::Array(group) = group {
                        group.push(entry);
                    }
                }
                ConfigShape::ListenerKeyed => {
                    let mut entry = json!({ "event": event_name });
                    if let Some(priority) = priority {
                        entry["priority"] = json!(priority);
                    }
                    section.insert(listener_id.clone(), entry);
                }
            }
        }
        Value::Object(section)
    }

    /// A full configuration value: `{"listeners": ...}`.
    pub fn build(&self) -> Value {
        json!({ "listeners": self.build_listeners() })
    }
}
