use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// An event fired through an [`EventManager`](super::EventManager).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    pub target: Option<String>,
    pub params: serde_json::Value,
}

impl Event {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            target: None,
            params: serde_json::Value::Null,
        }
    }

    pub fn with_target<S: Into<String>>(mut self, target: S) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_params(mut self, params: serde_json::Value) -> Self {
        self.params = params;
        self
    }

    /// Look up a single parameter when `params` is an object.
    pub fn param(&self, key: &str) -> Option<&serde_json::Value> {
        self.params.get(key)
    }
}

/// Anything that can be invoked with a single event argument.
pub trait Listener: Send + Sync + 'static {
    fn on_event(&self, event: &Event);

    /// Human-readable name (for logs and error messages).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

pub type SharedListener = Arc<dyn Listener>;

/// Adapter turning a closure into a [`Listener`].
pub struct ListenerFn<F> {
    name: &'static str,
    func: F,
}

impl<F> ListenerFn<F>
where
    F: Fn(&Event) + Send + Sync + 'static,
{
    pub fn new(name: &'static str, func: F) -> Self {
        Self { name, func }
    }

    pub fn arc(name: &'static str, func: F) -> SharedListener {
        Arc::new(Self::new(name, func))
    }
}

impl<F> Listener for ListenerFn<F>
where
    F: Fn(&Event) + Send + Sync + 'static,
{
    fn on_event(&self, event: &Event) {
        (self.func)(event)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
