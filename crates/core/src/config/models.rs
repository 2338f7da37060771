use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::delegator::DEFAULT_PRIORITY;

/// Key of the listener section inside the application configuration.
pub const LISTENERS_KEY: &str = "listeners";

/// Which layout the `listeners` section uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigShape {
    /// `event name -> [ {listener, priority?}, ... ]`
    #[default]
    EventKeyed,
    /// `listener id -> {event, priority?}`
    ListenerKeyed,
}

/// Settings a delegator can be built from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegatorSettings {
    #[serde(default)]
    pub shape: ConfigShape,
}

/// One entry of an event-keyed group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventListenerEntry {
    pub listener: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

/// The value of a listener-keyed entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyedListenerEntry {
    pub event: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

/// One listener-to-event binding taken from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerSpec {
    pub listener_id: String,
    pub event_name: String,
    pub priority: Option<i32>,
}

impl ListenerSpec {
    pub fn new<L: Into<String>, E: Into<String>>(listener_id: L, event_name: E) -> Self {
        Self {
            listener_id: listener_id.into(),
            event_name: event_name.into(),
            priority: None,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn effective_priority(&self) -> i32 {
        self.priority.unwrap_or(DEFAULT_PRIORITY)
    }
}

/// Specs sharing one configuration key, in configuration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerGroup {
    pub key: String,
    pub specs: Vec<ListenerSpec>,
}

/// Parsed `listeners` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListenerConfig {
    pub groups: Vec<ListenerGroup>,
}

impl ListenerConfig {
    /// Parse the `listeners` section of `config`.
    ///
    /// Returns `None` when the section is missing (or `null`); malformed
    /// entries are dropped with a warning.
    pub fn from_config(config: &serde_json::Value, shape: ConfigShape) -> Option<Self> {
        let listeners = match config.get(LISTENERS_KEY) {
            None | Some(serde_json::Value::Null) => return None,
            Some(listeners) => listeners,
        };

        let Some(entries) = listeners.as_object() else {
            warn!("监听器配置段不是映射结构，已忽略: {}", listeners);
            return Some(Self::default());
        };

        let groups = entries
            .iter()
            .filter_map(|(key, value)| match shape {
                ConfigShape::EventKeyed => parse_event_group(key, value),
                ConfigShape::ListenerKeyed => parse_keyed_entry(key, value),
            })
            .collect();

        Some(Self { groups })
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|group| group.specs.is_empty())
    }

    pub fn spec_count(&self) -> usize {
        self.groups.iter().map(|group| group.specs.len()).sum()
    }
}

fn parse_event_group(event_name: &str, value: &serde_json::Value) -> Option<ListenerGroup> {
    let Some(entries) = value.as_array() else {
        warn!("事件 {} 的监听器配置不是列表，已忽略", event_name);
        return None;
    };

    let specs = entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            match serde_json::from_value::<EventListenerEntry>(entry.clone()) {
                Ok(entry) => Some(ListenerSpec {
                    listener_id: entry.listener,
                    event_name: event_name.to_string(),
                    priority: entry.priority,
                }),
                Err(e) => {
                    warn!("事件 {} 的第 {} 个监听器配置无效: {}", event_name, index, e);
                    None
                }
            }
        })
        .collect();

    Some(ListenerGroup {
        key: event_name.to_string(),
        specs,
    })
}

fn parse_keyed_entry(listener_id: &str, value: &serde_json::Value) -> Option<ListenerGroup> {
    match serde_json::from_value::<KeyedListenerEntry>(value.clone()) {
        Ok(entry) => Some(ListenerGroup {
            key: listener_id.to_string(),
            specs: vec![ListenerSpec {
                listener_id: listener_id.to_string(),
                event_name: entry.event,
                priority: entry.priority,
            }],
        }),
        Err(e) => {
            warn!("监听器 {} 的配置无效: {}", listener_id, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_or_null_section_is_none() {
        assert_eq!(ListenerConfig::from_config(&json!({}), ConfigShape::EventKeyed), None);
        assert_eq!(
            ListenerConfig::from_config(&json!({ "lesteners": {} }), ConfigShape::EventKeyed),
            None
        );
        assert_eq!(
            ListenerConfig::from_config(&json!({ "listeners": null }), ConfigShape::ListenerKeyed),
            None
        );
    }

    #[test]
    fn test_parse_event_keyed_groups() {
        let config = json!({
            "listeners": {
                "add-item": [
                    { "listener": "Logger", "priority": 10 },
                    { "listener": "Notifier", "priority": 10 }
                ],
                "update-item": [
                    { "listener": "Logger" }
                ]
            }
        });

        let parsed = ListenerConfig::from_config(&config, ConfigShape::EventKeyed).unwrap();

        assert_eq!(parsed.groups.len(), 2);
        assert_eq!(parsed.spec_count(), 3);
        assert_eq!(parsed.groups[0].key, "add-item");
        assert_eq!(
            parsed.groups[0].specs,
            vec![
                ListenerSpec::new("Logger", "add-item").with_priority(10),
                ListenerSpec::new("Notifier", "add-item").with_priority(10),
            ]
        );
        assert_eq!(parsed.groups[1].specs[0].priority, None);
        assert_eq!(parsed.groups[1].specs[0].effective_priority(), DEFAULT_PRIORITY);
    }

    #[test]
    fn test_parse_listener_keyed_entries() {
        let config = json!({
            "listeners": {
                "Logger": { "event": "add-item", "priority": -3 },
                "Notifier": { "event": "delete-item" }
            }
        });

        let parsed = ListenerConfig::from_config(&config, ConfigShape::ListenerKeyed).unwrap();

        assert_eq!(parsed.groups.len(), 2);
        assert_eq!(
            parsed.groups[0].specs,
            vec![ListenerSpec::new("Logger", "add-item").with_priority(-3)]
        );
        assert_eq!(parsed.groups[1].specs[0].event_name, "delete-item");
        assert_eq!(parsed.groups[1].specs[0].effective_priority(), 1);
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let config = json!({
            "listeners": {
                "add-item": [
                    { "listener": "Logger", "priority": "high" },
                    { "priority": 3 },
                    "Notifier",
                    { "listener": "Auditor", "priority": 99999999999i64 },
                    { "listener": "Mailer" }
                ],
                "update-item": { "listener": "Logger" }
            }
        });

        let parsed = ListenerConfig::from_config(&config, ConfigShape::EventKeyed).unwrap();

        assert_eq!(parsed.groups.len(), 1);
        assert_eq!(
            parsed.groups[0].specs,
            vec![ListenerSpec::new("Mailer", "add-item")]
        );
    }

    #[test]
    fn test_non_mapping_section_is_empty() {
        let parsed =
            ListenerConfig::from_config(&json!({ "listeners": [1, 2] }), ConfigShape::EventKeyed)
                .unwrap();
        assert!(parsed.is_empty());

        let parsed =
            ListenerConfig::from_config(&json!({ "listeners": {} }), ConfigShape::EventKeyed)
                .unwrap();
        assert!(parsed.is_empty());
        assert_eq!(parsed.spec_count(), 0);
    }

    #[test]
    fn test_delegator_settings_deserialize() {
        let settings: DelegatorSettings =
            serde_json::from_value(json!({ "shape": "listener_keyed" })).unwrap();
        assert_eq!(settings.shape, ConfigShape::ListenerKeyed);

        let settings: DelegatorSettings = serde_json::from_value(json!({})).unwrap();
        assert_eq!(settings.shape, ConfigShape::EventKeyed);
    }
}
