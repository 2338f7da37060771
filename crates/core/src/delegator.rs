use tracing::{debug, info, warn};
use wiring_errors::{WiringError, WiringResult};

use crate::config::{ConfigShape, DelegatorSettings, ListenerConfig};
use crate::container::CONFIG_SERVICE;
use crate::filter::ValidListenerFilter;
use crate::service::ServiceValue;
use crate::traits::{EventManager, ServiceLookup, SharedEventManager};

/// Priority for listeners configured without one. Higher priorities run first.
pub const DEFAULT_PRIORITY: i32 = 1;

/// Deferred construction of the service being decorated.
pub type ServiceFactory<'a> = Box<dyn FnOnce() -> ServiceValue + 'a>;

/// Decorates a service right after its factory produced it.
pub trait Delegator: Send + Sync {
    fn decorate(
        &self,
        lookup: &dyn ServiceLookup,
        service_name: &str,
        factory: ServiceFactory<'_>,
    ) -> WiringResult<ServiceValue>;

    fn name(&self) -> &'static str;
}

/// Attaches the listeners described in configuration to an event manager.
///
/// Entries whose listener is not registered or not invocable are skipped;
/// only an event manager factory yielding something else fails the pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListenerConfigurationDelegator {
    shape: ConfigShape,
}

impl ListenerConfigurationDelegator {
    pub const DEFAULT_PRIORITY: i32 = DEFAULT_PRIORITY;

    /// Delegator for the event-keyed configuration shape.
    pub fn new() -> Self {
        Self::with_shape(ConfigShape::EventKeyed)
    }

    /// Delegator for the listener-keyed configuration shape.
    pub fn listener_keyed() -> Self {
        Self::with_shape(ConfigShape::ListenerKeyed)
    }

    pub fn with_shape(shape: ConfigShape) -> Self {
        Self { shape }
    }

    pub fn from_settings(settings: &DelegatorSettings) -> Self {
        Self::with_shape(settings.shape)
    }

    pub fn shape(&self) -> ConfigShape {
        self.shape
    }

    pub fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }

    pub fn wire<C, F>(
        &self,
        lookup: &C,
        service_name: &str,
        factory: F,
    ) -> WiringResult<SharedEventManager>
    where
        C: ServiceLookup + ?Sized,
        F: FnOnce() -> ServiceValue,
    {
        let produced = factory();
        let event_manager = produced.as_event_manager().ok_or_else(|| {
            WiringError::service_not_found(format!(
                "Delegator factory {} cannot operate on a {}; please map it only to the {} service",
                Self::type_name(),
                produced.describe(),
                service_name
            ))
        })?;

        if !lookup.has(CONFIG_SERVICE) {
            debug!("未找到配置服务，服务 {} 不装配监听器", service_name);
            return Ok(event_manager);
        }

        let config = lookup.get(CONFIG_SERVICE).inspect_err(|e| {
            warn!(kind = e.as_label(), "读取配置服务失败，服务 {}: {}", service_name, e);
        })?;
        let Some(config) = config.as_value() else {
            warn!(
                "配置服务解析为 {}，不是配置数据，服务 {} 不装配监听器",
                config.describe(),
                service_name
            );
            return Ok(event_manager);
        };

        let Some(listener_config) = ListenerConfig::from_config(config, self.shape) else {
            debug!("配置中没有监听器配置段，服务 {} 不装配监听器", service_name);
            return Ok(event_manager);
        };

        if listener_config.is_empty() {
            debug!("监听器配置段为空，服务 {} 不装配监听器", service_name);
            return Ok(event_manager);
        }

        let configured = listener_config.spec_count();
        let attached = self.attach_listeners(lookup, event_manager.as_ref(), listener_config);
        info!(
            "服务 {} 已装配 {}/{} 个监听器",
            service_name, attached, configured
        );

        Ok(event_manager)
    }

    fn attach_listeners<C>(
        &self,
        lookup: &C,
        event_manager: &dyn EventManager,
        listener_config: ListenerConfig,
    ) -> usize
    where
        C: ServiceLookup + ?Sized,
    {
        let mut attached = 0;
        for group in listener_config.groups {
            for valid in ValidListenerFilter::new(group.specs, lookup) {
                let priority = valid.priority();
                debug!(
                    "装配监听器 {} 到事件 {}，优先级 {}",
                    valid.spec.listener_id, valid.spec.event_name, priority
                );
                event_manager.attach(&valid.spec.event_name, valid.listener, priority);
                attached += 1;
            }
        }
        attached
    }
}

impl Delegator for ListenerConfigurationDelegator {
    fn decorate(
        &self,
        lookup: &dyn ServiceLookup,
        service_name: &str,
        factory: ServiceFactory<'_>,
    ) -> WiringResult<ServiceValue> {
        self.wire(lookup, service_name, factory)
            .map(ServiceValue::EventManager)
    }

    fn name(&self) -> &'static str {
        Self::type_name()
    }
}
