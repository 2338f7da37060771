//! 事件装配的核心抽象接口
//!
//! 此模块定义了监听器装配过程中依赖的三种能力：
//! - [`Listener`]: 可被事件调用的监听器
//! - [`ServiceLookup`]: 按标识符解析服务的服务注册表
//! - [`EventManager`]: 按事件名和优先级存放监听器的事件管理器
//!
//! 服务注册表与事件管理器都是外部协作者，本库只消费它们的接口；
//! [`InMemoryContainer`](crate::container::InMemoryContainer) 与
//! [`DefaultEventManager`](crate::event_manager::DefaultEventManager) 是参考实现。

pub mod event_manager;
pub mod listener;
pub mod service_lookup;

pub use event_manager::*;
pub use listener::*;
pub use service_lookup::*;
