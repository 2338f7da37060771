//! Fake listeners and a recording event manager for tests.

use std::sync::{Arc, Mutex};

use wiring_core::traits::{Event, EventManager, Listener, SharedListener};

/// Listener that remembers the names of the events it received.
#[derive(Debug, Clone, Default)]
pub struct FakeLoggerListener {
    received: Arc<Mutex<Vec<String>>>,
}

impl FakeLoggerListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn received(&self) -> Vec<String> {
        self.received.lock().unwrap().clone()
    }
}

impl Listener for FakeLoggerListener {
    fn on_event(&self, event: &Event) {
        self.received.lock().unwrap().push(event.name.clone());
    }

    fn name(&self) -> &'static str {
        "FakeLoggerListener"
    }
}

/// Second listener type so tests can tell attachments apart.
#[derive(Debug, Clone, Default)]
pub struct FakeNotificationListener {
    received: Arc<Mutex<Vec<String>>>,
}

impl FakeNotificationListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn received(&self) -> Vec<String> {
        self.received.lock().unwrap().clone()
    }
}

impl Listener for FakeNotificationListener {
    fn on_event(&self, event: &Event) {
        self.received.lock().unwrap().push(event.name.clone());
    }

    fn name(&self) -> &'static str {
        "FakeNotificationListener"
    }
}

/// One recorded `attach` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub event_name: String,
    pub listener: &'static str,
    pub priority: i32,
}

/// Event manager that only records attachments, in call order.
#[derive(Default)]
pub struct RecordingEventManager {
    attachments: Mutex<Vec<Attachment>>,
}

impl RecordingEventManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attachments(&self) -> Vec<Attachment> {
        self.attachments.lock().unwrap().clone()
    }
}

impl EventManager for RecordingEventManager {
    fn attach(&self, event_name: &str, listener: SharedListener, priority: i32) {
        self.attachments.lock().unwrap().push(Attachment {
            event_name: event_name.to_string(),
            listener: listener.name(),
            priority,
        });
    }

    fn trigger(&self, _event: &Event) -> usize {
        0
    }
}
