use wiring_errors::WiringResult;

use crate::service::ServiceValue;

/// Service registry consumed by the wiring pass.
///
/// `get` must fail with [`WiringError::NotFound`](wiring_errors::WiringError::NotFound)
/// when `has` would report the identifier as absent.
#[cfg_attr(test, mockall::automock)]
pub trait ServiceLookup: Send + Sync {
    fn has(&self, id: &str) -> bool;

    fn get(&self, id: &str) -> WiringResult<ServiceValue>;
}
