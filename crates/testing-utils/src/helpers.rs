//! Helpers shared by wiring integration tests.

use std::sync::Arc;

use serde_json::Value;
use wiring_core::config_provider::EVENT_MANAGER_SERVICE;
use wiring_core::container::InMemoryContainer;
use wiring_core::delegator::ListenerConfigurationDelegator;
use wiring_core::event_manager::DefaultEventManager;
use wiring_core::service::ServiceValue;
use wiring_errors::WiringResult;

use crate::mocks::{FakeLoggerListener, FakeNotificationListener};

pub const LOGGER: &str = "Logger";
pub const NOTIFIER: &str = "Notifier";

/// Container holding `config` plus the two fake listeners under `ids`.
pub fn container_with_config(config: Value, ids: &[&str]) -> InMemoryContainer {
    let container = InMemoryContainer::new();
    container.set_config(config);
    for id in ids {
        match *id {
            NOTIFIER => container.set_listener(*id, FakeNotificationListener::new()),
            _ => container.set_listener(*id, FakeLoggerListener::new()),
        }
    }
    container
}

/// Wire a fresh [`DefaultEventManager`] and hand back the instance the factory produced.
pub fn wire_new_manager(
    delegator: &ListenerConfigurationDelegator,
    container: &InMemoryContainer,
) -> WiringResult<Arc<DefaultEventManager>> {
    let manager = Arc::new(DefaultEventManager::new());
    let produced = Arc::clone(&manager);
    delegator.wire(container, EVENT_MANAGER_SERVICE, move || {
        ServiceValue::event_manager(produced)
    })?;
    Ok(manager)
}

/// `(priority, listener names)` for one event, highest priority first.
pub fn attached_names(
    manager: &DefaultEventManager,
    event_name: &str,
) -> Vec<(i32, Vec<&'static str>)> {
    manager
        .listeners_by_priority(event_name)
        .into_iter()
        .map(|(priority, listeners)| {
            (
                priority,
                listeners.iter().map(|listener| listener.name()).collect(),
            )
        })
        .collect()
}
