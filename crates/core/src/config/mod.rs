//! 监听器配置
//!
//! 本模块负责把应用配置中的 `listeners` 配置段解析为 [`ListenerSpec`] 列表，
//! 并提供基于 `config` crate 的配置加载器。
//!
//! # 支持的配置结构
//!
//! 每个委托器实例只接受其中一种结构（[`ConfigShape`]），不会自动探测：
//!
//! ## 按事件名分组（`EventKeyed`）
//!
//! ```json
//! {"listeners": {"add-item": [{"listener": "Logger", "priority": 10}]}}
//! ```
//!
//! ## 按监听器标识分组（`ListenerKeyed`）
//!
//! ```json
//! {"listeners": {"Logger": {"event": "add-item", "priority": 10}}}
//! ```
//!
//! 缺少 `priority` 时使用 [`DEFAULT_PRIORITY`](crate::delegator::DEFAULT_PRIORITY)。
//! 格式错误的条目会被跳过并记录警告日志，不会中断整个装配过程。

pub mod loader;
pub mod models;

pub use loader::{ConfigLoader, ConfigSourceType};
pub use models::{
    ConfigShape, DelegatorSettings, EventListenerEntry, KeyedListenerEntry, ListenerConfig,
    ListenerGroup, ListenerSpec, LISTENERS_KEY,
};
