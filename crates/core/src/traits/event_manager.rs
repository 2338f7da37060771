use std::sync::Arc;

use super::listener::{Event, SharedListener};

/// Publish/subscribe dispatcher that listeners are attached to.
///
/// Higher priorities run first. Listeners sharing an event and a priority
/// must all be retained, in attachment order.
pub trait EventManager: Send + Sync + 'static {
    fn attach(&self, event_name: &str, listener: SharedListener, priority: i32);

    /// Invoke every listener attached to `event.name`; returns how many ran.
    fn trigger(&self, event: &Event) -> usize;

    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

pub type SharedEventManager = Arc<dyn EventManager>;
