//! # Wiring Testing Utils
//!
//! Shared testing utilities for the listener wiring workspace.
//!
//! ## Features
//!
//! - **Fake Listeners**: `FakeLoggerListener` and `FakeNotificationListener` record the events they receive
//! - **Recording Event Manager**: captures every `attach` call in order
//! - **Config Builders**: build `listeners` sections in either configuration shape
//! - **Helpers**: wire a fresh event manager and inspect what was attached
//!
//! ## Usage
//!
//! ```toml
//! [dev-dependencies]
//! wiring-testing-utils = { path = "../testing-utils" }
//! ```

pub mod builders;
pub mod helpers;
pub mod mocks;

pub use builders::*;
pub use helpers::*;
pub use mocks::*;
