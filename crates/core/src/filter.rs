use std::fmt;
use std::iter::{Fuse, FusedIterator};

use tracing::debug;

use crate::config::ListenerSpec;
use crate::traits::{ServiceLookup, SharedListener};

/// A [`ListenerSpec`] whose listener is registered and invocable, together
/// with the handle resolved while validating it.
#[derive(Clone)]
pub struct ValidListenerSpec {
    pub spec: ListenerSpec,
    pub listener: SharedListener,
}

impl ValidListenerSpec {
    pub fn priority(&self) -> i32 {
        self.spec.effective_priority()
    }
}

impl fmt::Debug for ValidListenerSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidListenerSpec")
            .field("spec", &self.spec)
            .field("listener", &self.listener.name())
            .finish()
    }
}

/// Lazily drops specs whose listener is not registered or not invocable.
///
/// Each spec is checked when it is pulled: `has` first, then exactly one
/// `get`. Relative order is preserved and the iterator is single pass.
pub struct ValidListenerFilter<'a, I, C: ?Sized> {
    specs: Fuse<I>,
    lookup: &'a C,
}

impl<'a, I, C> ValidListenerFilter<'a, I, C>
where
    I: Iterator<Item = ListenerSpec>,
    C: ServiceLookup + ?Sized,
{
    pub fn new<T>(specs: T, lookup: &'a C) -> Self
    where
        T: IntoIterator<IntoIter = I, Item = ListenerSpec>,
    {
        Self {
            specs: specs.into_iter().fuse(),
            lookup,
        }
    }

    fn accept(&self, spec: &ListenerSpec) -> Option<SharedListener> {
        if !self.lookup.has(&spec.listener_id) {
            debug!("监听器 {} 未注册为服务，已跳过", spec.listener_id);
            return None;
        }

        match self.lookup.get(&spec.listener_id) {
            Ok(service) => {
                let listener = service.as_listener();
                if listener.is_none() {
                    debug!(
                        "服务 {} 解析为 {}，不可调用，已跳过",
                        spec.listener_id,
                        service.describe()
                    );
                }
                listener
            }
            Err(e) => {
                debug!("解析监听器 {} 失败，已跳过: {}", spec.listener_id, e);
                None
            }
        }
    }
}

impl<I, C> Iterator for ValidListenerFilter<'_, I, C>
where
    I: Iterator<Item = ListenerSpec>,
    C: ServiceLookup + ?Sized,
{
    type Item = ValidListenerSpec;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(spec) = self.specs.next() {
            if let Some(listener) = self.accept(&spec) {
                return Some(ValidListenerSpec { spec, listener });
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.specs.size_hint();
        (0, upper)
    }
}

impl<I, C> FusedIterator for ValidListenerFilter<'_, I, C>
where
    I: Iterator<Item = ListenerSpec>,
    C: ServiceLookup + ?Sized,
{
}
