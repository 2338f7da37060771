use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::traits::{EventManager, Listener, SharedEventManager, SharedListener};

/// A resolved service as handed out by a [`ServiceLookup`](crate::traits::ServiceLookup).
///
/// Capabilities are exposed through the variants rather than by inspecting
/// the concrete type: a service is invocable exactly when it is a `Listener`.
#[derive(Clone)]
pub enum ServiceValue {
    /// Plain data such as the application configuration.
    Value(serde_json::Value),
    Listener(SharedListener),
    EventManager(SharedEventManager),
    /// Any other object; keeps its type name for diagnostics.
    Object {
        type_name: &'static str,
        instance: Arc<dyn Any + Send + Sync>,
    },
}

impl ServiceValue {
    pub fn listener<L: Listener>(listener: L) -> Self {
        Self::Listener(Arc::new(listener))
    }

    pub fn event_manager<E: EventManager>(event_manager: Arc<E>) -> Self {
        Self::EventManager(event_manager)
    }

    pub fn object<T: Any + Send + Sync>(instance: T) -> Self {
        Self::Object {
            type_name: std::any::type_name::<T>(),
            instance: Arc::new(instance),
        }
    }

    pub fn as_listener(&self) -> Option<SharedListener> {
        match self {
            Self::Listener(listener) => Some(Arc::clone(listener)),
            _ => None,
        }
    }

    pub fn as_event_manager(&self) -> Option<SharedEventManager> {
        match self {
            Self::EventManager(event_manager) => Some(Arc::clone(event_manager)),
            _ => None,
        }
    }

    pub fn as_value(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    /// `"<TypeName> instance"` for objects, the primitive kind for plain data.
    pub fn describe(&self) -> String {
        match self {
            Self::Value(value) => value_kind(value).to_string(),
            Self::Listener(listener) => format!("{} instance", listener.name()),
            Self::EventManager(event_manager) => format!("{} instance", event_manager.name()),
            Self::Object { type_name, .. } => format!("{type_name} instance"),
        }
    }
}

fn value_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "NULL",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(n) if n.is_f64() => "double",
        serde_json::Value::Number(_) => "integer",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

impl From<serde_json::Value> for ServiceValue {
    fn from(value: serde_json::Value) -> Self {
        Self::Value(value)
    }
}

impl From<SharedListener> for ServiceValue {
    fn from(listener: SharedListener) -> Self {
        Self::Listener(listener)
    }
}

impl From<SharedEventManager> for ServiceValue {
    fn from(event_manager: SharedEventManager) -> Self {
        Self::EventManager(event_manager)
    }
}

impl fmt::Debug for ServiceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Listener(listener) => f.debug_tuple("Listener").field(&listener.name()).finish(),
            Self::EventManager(event_manager) => f
                .debug_tuple("EventManager")
                .field(&event_manager.name())
                .finish(),
            Self::Object { type_name, .. } => f
                .debug_struct("Object")
                .field("type_name", type_name)
                .finish_non_exhaustive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_manager::DefaultEventManager;
    use crate::traits::{Event, ListenerFn};
    use serde_json::json;

    struct AuditTrail;

    #[test]
    fn test_only_listeners_are_invocable() {
        let listener = ServiceValue::Listener(ListenerFn::arc("noop", |_: &Event| {}));
        assert!(listener.as_listener().is_some());

        let data = ServiceValue::from(json!({ "listeners": {} }));
        assert!(data.as_listener().is_none());

        let object = ServiceValue::object(AuditTrail);
        assert!(object.as_listener().is_none());
    }

    #[test]
    fn test_describe_primitive_kinds() {
        assert_eq!(ServiceValue::from(json!("text")).describe(), "string");
        assert_eq!(ServiceValue::from(json!(42)).describe(), "integer");
        assert_eq!(ServiceValue::from(json!(4.2)).describe(), "double");
        assert_eq!(ServiceValue::from(json!(true)).describe(), "boolean");
        assert_eq!(ServiceValue::from(json!([1, 2])).describe(), "array");
        assert_eq!(ServiceValue::from(json!({})).describe(), "object");
        assert_eq!(ServiceValue::from(serde_json::Value::Null).describe(), "NULL");
    }

    #[test]
    fn test_describe_objects_by_type_name() {
        let object = ServiceValue::object(AuditTrail);
        assert!(object.describe().ends_with("AuditTrail instance"));

        let manager = ServiceValue::event_manager(Arc::new(DefaultEventManager::new()));
        assert!(manager.describe().ends_with("DefaultEventManager instance"));
        assert!(manager.as_event_manager().is_some());

        let listener = ServiceValue::Listener(ListenerFn::arc("audit", |_: &Event| {}));
        assert_eq!(listener.describe(), "audit instance");
    }
}
