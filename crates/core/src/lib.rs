//! # Wiring Core
//!
//! Attaches listeners declared in configuration to an event manager.
//!
//! ## Core Responsibilities
//!
//! - **Listener filtering**: [`ValidListenerFilter`] lazily keeps only the
//!   listener specs whose service is registered and invocable
//! - **Configuration delegator**: [`ListenerConfigurationDelegator`] decorates a
//!   freshly built event manager with the configured listeners
//! - **Reference collaborators**: [`InMemoryContainer`] and [`DefaultEventManager`]
//!   implement the service registry and dispatcher contracts
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use wiring_core::prelude::*;
//!
//! let container = InMemoryContainer::new();
//! container.set_config(serde_json::json!({
//!     "listeners": { "add-item": [{ "listener": "Logger", "priority": 10 }] }
//! }));
//! container.set("Logger", ServiceValue::Listener(ListenerFn::arc("logger", |_: &Event| {})));
//!
//! let manager = Arc::new(DefaultEventManager::new());
//! let produced = Arc::clone(&manager);
//! ListenerConfigurationDelegator::new()
//!     .wire(&container, EVENT_MANAGER_SERVICE, move || ServiceValue::event_manager(produced))?;
//!
//! assert_eq!(manager.listener_count("add-item"), 1);
//! # Ok::<(), wiring_core::WiringError>(())
//! ```

pub mod config;
pub mod config_provider;
pub mod container;
pub mod delegator;
pub mod event_manager;
pub mod filter;
pub mod logging;
pub mod service;
pub mod traits;

pub use config::{ConfigLoader, ConfigShape, DelegatorSettings, ListenerConfig, ListenerSpec};
pub use config_provider::{ConfigProvider, EVENT_MANAGER_SERVICE};
pub use container::{InMemoryContainer, CONFIG_SERVICE};
pub use delegator::{Delegator, ListenerConfigurationDelegator, ServiceFactory, DEFAULT_PRIORITY};
pub use event_manager::{DefaultEventManager, WILDCARD_EVENT};
pub use filter::{ValidListenerFilter, ValidListenerSpec};
pub use logging::{init_logging, LogConfig};
pub use service::ServiceValue;
pub use traits::*;
pub use wiring_errors::{WiringError, WiringResult};

pub mod prelude {
    pub use crate::config_provider::*;
    pub use crate::container::*;
    pub use crate::delegator::*;
    pub use crate::event_manager::*;
    pub use crate::service::*;
    pub use crate::traits::*;
}
