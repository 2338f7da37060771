use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;
use wiring_errors::WiringResult;

use crate::delegator::{Delegator, ListenerConfigurationDelegator, ServiceFactory};
use crate::service::ServiceValue;
use crate::traits::ServiceLookup;

/// Service name the event manager is registered under.
pub const EVENT_MANAGER_SERVICE: &str = "EventManager";

/// Container dependency configuration contributed by this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependencies {
    /// service name -> delegator names, applied in order
    pub delegators: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvidedConfig {
    pub dependencies: Dependencies,
}

/// Maps the event manager service to the listener configuration delegator.
#[derive(Debug, Clone, Default)]
pub struct ConfigProvider {
    delegator: ListenerConfigurationDelegator,
}

impl ConfigProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider whose delegator reads the given configuration shape.
    pub fn with_delegator(delegator: ListenerConfigurationDelegator) -> Self {
        Self { delegator }
    }

    pub fn provide(&self) -> ProvidedConfig {
        ProvidedConfig {
            dependencies: self.dependencies(),
        }
    }

    pub fn dependencies(&self) -> Dependencies {
        let mut delegators = BTreeMap::new();
        delegators.insert(
            EVENT_MANAGER_SERVICE.to_string(),
            vec![ListenerConfigurationDelegator::type_name().to_string()],
        );
        Dependencies { delegators }
    }

    pub fn to_value(&self) -> WiringResult<serde_json::Value> {
        Ok(serde_json::to_value(self.provide())?)
    }

    /// Delegators registered for `service_name`, in application order.
    pub fn delegators_for(&self, service_name: &str) -> Vec<Box<dyn Delegator>> {
        if service_name == EVENT_MANAGER_SERVICE {
            vec![Box::new(self.delegator)]
        } else {
            Vec::new()
        }
    }

    /// Build `service_name` through its factory and every registered delegator.
    pub fn decorate<'a>(
        &self,
        lookup: &dyn ServiceLookup,
        service_name: &str,
        factory: ServiceFactory<'a>,
    ) -> WiringResult<ServiceValue> {
        let mut factory = factory;
        for delegator in self.delegators_for(service_name) {
            debug!("应用委托器 {} 到服务 {}", delegator.name(), service_name);
            let service = delegator.decorate(lookup, service_name, factory)?;
            factory = Box::new(move || service);
        }
        Ok(factory())
    }
}
