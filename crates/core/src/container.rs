use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use wiring_errors::{WiringError, WiringResult};

use crate::service::ServiceValue;
use crate::traits::{Listener, ServiceLookup, SharedListener};

/// Service id under which the application configuration is registered.
pub const CONFIG_SERVICE: &str = "config";

/// In-memory service registry keyed by service id.
pub struct InMemoryContainer {
    services: RwLock<HashMap<String, ServiceValue>>,
}

impl InMemoryContainer {
    pub fn new() -> Self {
        Self {
            services: RwLock::new(HashMap::new()),
        }
    }

    pub fn set<S: Into<String>>(&self, id: S, service: ServiceValue) {
        self.services
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.into(), service);
    }

    pub fn set_listener<S: Into<String>, L: Listener>(&self, id: S, listener: L) {
        self.set(id, ServiceValue::listener(listener));
    }

    pub fn set_config(&self, config: serde_json::Value) {
        self.set(CONFIG_SERVICE, ServiceValue::Value(config));
    }

    pub fn remove(&self, id: &str) -> Option<ServiceValue> {
        self.services
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id)
    }

    pub fn reset(&self) {
        self.services
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn len(&self) -> usize {
        self.services
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve a service that must be invocable.
    pub fn get_listener(&self, id: &str) -> WiringResult<SharedListener> {
        let service = self.get(id)?;
        service.as_listener().ok_or_else(|| {
            WiringError::invalid_service(format!(
                "service {id} resolved to a {}, which is not a listener",
                service.describe()
            ))
        })
    }
}

impl Default for InMemoryContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceLookup for InMemoryContainer {
    fn has(&self, id: &str) -> bool {
        self.services
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(id)
    }

    fn get(&self, id: &str) -> WiringResult<ServiceValue> {
        self.services
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
            .ok_or_else(|| WiringError::not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{Event, ListenerFn};

    struct Noop;

    impl Listener for Noop {
        fn on_event(&self, _event: &Event) {}
    }

    #[test]
    fn test_unregistered_service_is_not_found() {
        let container = InMemoryContainer::new();
        assert!(!container.has("Logger"));
        match container.get("Logger") {
            Err(err) => assert_eq!(err.to_string(), "服务未找到: Logger"),
            Ok(_) => panic!("Expected error for unregistered service"),
        }
    }

    #[test]
    fn test_set_get_remove_reset() {
        let container = InMemoryContainer::default();
        container.set_listener("Logger", Noop);
        container.set_config(serde_json::json!({ "listeners": {} }));

        assert_eq!(container.len(), 2);
        assert!(container.has("Logger"));
        assert!(container.get("Logger").unwrap().as_listener().is_some());
        assert!(container.get(CONFIG_SERVICE).unwrap().as_value().is_some());

        assert!(container.remove("Logger").is_some());
        assert!(!container.has("Logger"));

        container.reset();
        assert!(container.is_empty());
    }

    #[test]
    fn test_get_listener_rejects_non_invocable_service() {
        let container = InMemoryContainer::new();
        container.set("Logger", ServiceValue::Listener(ListenerFn::arc("logger", |_: &Event| {})));
        container.set("Settings", ServiceValue::from(serde_json::json!("plain")));

        assert_eq!(container.get_listener("Logger").unwrap().name(), "logger");

        let err = container.get_listener("Settings").err().unwrap();
        assert_eq!(err.as_label(), "invalid_service");
        assert!(err.to_string().contains("string"));

        let err = container.get_listener("Missing").err().unwrap();
        assert_eq!(err.as_label(), "not_found");
    }
}
