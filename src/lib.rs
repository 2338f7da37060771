//! # listener-wiring
//!
//! Wires listeners declared in configuration into an event manager.
//!
//! ```text
//! config["listeners"] ──► ListenerConfig ──► ValidListenerFilter ──► EventManager::attach
//!                                                 │
//!                                       ServiceLookup::has / get
//! ```
//!
//! The heavy lifting lives in [`wiring_core`]; this crate re-exports it and
//! offers [`build_event_manager`] for the common case of decorating a fresh
//! [`DefaultEventManager`].

use std::sync::Arc;

use tracing::debug;

pub use wiring_core::*;
pub use wiring_errors::{WiringError, WiringResult};

/// Build a [`DefaultEventManager`] decorated by the [`ConfigProvider`] delegators
/// for the given configuration shape.
pub fn build_event_manager(
    lookup: &dyn ServiceLookup,
    shape: ConfigShape,
) -> WiringResult<Arc<DefaultEventManager>> {
    let manager = Arc::new(DefaultEventManager::new());
    let produced = Arc::clone(&manager);
    let provider =
        ConfigProvider::with_delegator(ListenerConfigurationDelegator::with_shape(shape));

    provider.decorate(
        lookup,
        EVENT_MANAGER_SERVICE,
        Box::new(move || ServiceValue::event_manager(produced)),
    )?;
    debug!(
        "事件管理器已构建，包含事件: {:?}",
        manager.event_names()
    );

    Ok(manager)
}
