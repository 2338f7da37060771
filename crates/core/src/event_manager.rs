use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};
use std::sync::{PoisonError, RwLock};

use tracing::trace;

use crate::traits::{Event, EventManager, SharedListener};

/// Event name whose listeners fire for every event.
pub const WILDCARD_EVENT: &str = "*";

type PriorityQueue = BTreeMap<Reverse<i32>, Vec<SharedListener>>;

/// In-memory [`EventManager`] keyed by event name and priority.
pub struct DefaultEventManager {
    events: RwLock<HashMap<String, PriorityQueue>>,
}

impl DefaultEventManager {
    pub fn new() -> Self {
        Self {
            events: RwLock::new(HashMap::new()),
        }
    }

    /// Listeners of one event grouped by priority, highest priority first.
    pub fn listeners_by_priority(&self, event_name: &str) -> Vec<(i32, Vec<SharedListener>)> {
        let events = self.events.read().unwrap_or_else(PoisonError::into_inner);
        events
            .get(event_name)
            .map(|queue| {
                queue
                    .iter()
                    .map(|(Reverse(priority), listeners)| (*priority, listeners.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn listener_count(&self, event_name: &str) -> usize {
        let events = self.events.read().unwrap_or_else(PoisonError::into_inner);
        events
            .get(event_name)
            .map(|queue| queue.values().map(Vec::len).sum())
            .unwrap_or(0)
    }

    pub fn event_names(&self) -> Vec<String> {
        let events = self.events.read().unwrap_or_else(PoisonError::into_inner);
        let mut names: Vec<String> = events.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn is_empty(&self) -> bool {
        self.events
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    pub fn clear_listeners(&self, event_name: &str) {
        self.events
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(event_name);
    }

    /// Snapshot of the listeners to run for `event_name`, wildcard listeners
    /// merged in by priority.
    fn listeners_for(&self, event_name: &str) -> Vec<SharedListener> {
        let events = self.events.read().unwrap_or_else(PoisonError::into_inner);
        let mut merged: PriorityQueue = BTreeMap::new();

        let mut names = vec![event_name];
        if event_name != WILDCARD_EVENT {
            names.push(WILDCARD_EVENT);
        }
        for name in names {
            if let Some(queue) = events.get(name) {
                for (priority, listeners) in queue {
                    merged
                        .entry(*priority)
                        .or_default()
                        .extend(listeners.iter().cloned());
                }
            }
        }

        merged.into_values().flatten().collect()
    }
}

impl Default for DefaultEventManager {
    fn default() -> Self {
        Self::new()
    }
}

impl EventManager for DefaultEventManager {
    fn attach(&self, event_name: &str, listener: SharedListener, priority: i32) {
        trace!(
            "attach listener {} to event {} at priority {}",
            listener.name(),
            event_name,
            priority
        );
        let mut events = self.events.write().unwrap_or_else(PoisonError::into_inner);
        events
            .entry(event_name.to_string())
            .or_default()
            .entry(Reverse(priority))
            .or_default()
            .push(listener);
    }

    fn trigger(&self, event: &Event) -> usize {
        // Lock is released before listeners run so they may attach further listeners.
        let listeners = self.listeners_for(&event.name);
        for listener in &listeners {
            listener.on_event(event);
        }
        listeners.len()
    }
}
