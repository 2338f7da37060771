use listener_wiring::{
    build_event_manager, config::ConfigSourceType, ConfigLoader, ConfigShape, Event,
    InMemoryContainer, ListenerFn, ServiceValue,
};
use wiring_testing_utils::{attached_names, FakeLoggerListener, FakeNotificationListener};

const LISTENERS_TOML: &str = r#"
[[listeners.add-item]]
listener = "Logger"
priority = 10

[[listeners.add-item]]
listener = "Notifier"
priority = 10

[[listeners.update-item]]
listener = "Logger"
"#;

#[test]
fn test_wire_listeners_loaded_from_toml() {
    let config = ConfigLoader::new()
        .with_str(LISTENERS_TOML, ConfigSourceType::Toml)
        .load()
        .unwrap();
    let container = InMemoryContainer::new();
    container.set_config(config);
    container.set_listener("Logger", FakeLoggerListener::new());
    container.set_listener("Notifier", FakeNotificationListener::new());

    let manager = build_event_manager(&container, ConfigShape::EventKeyed).unwrap();

    assert_eq!(
        attached_names(&manager, "add-item"),
        vec![(10, vec!["FakeLoggerListener", "FakeNotificationListener"])]
    );
    assert_eq!(
        attached_names(&manager, "update-item"),
        vec![(1, vec!["FakeLoggerListener"])]
    );
}

#[test]
fn test_later_source_overrides_listener_group() {
    let config = ConfigLoader::new()
        .with_str(LISTENERS_TOML, ConfigSourceType::Toml)
        .with_str(
            r#"{"listeners": {"update-item": [{"listener": "Notifier", "priority": 7}]}}"#,
            ConfigSourceType::Json,
        )
        .load()
        .unwrap();
    let container = InMemoryContainer::new();
    container.set_config(config);
    container.set_listener("Logger", FakeLoggerListener::new());
    container.set_listener("Notifier", FakeNotificationListener::new());

    let manager = build_event_manager(&container, ConfigShape::EventKeyed).unwrap();

    assert_eq!(
        attached_names(&manager, "update-item"),
        vec![(7, vec!["FakeNotificationListener"])]
    );
    assert_eq!(manager.listener_count("add-item"), 2);
}

const KEYED_TOML: &str = r#"
[listeners.Notifier]
event = "add-item"
priority = 10

[listeners.Logger]
event = "add-item"
priority = 10

[listeners.Zeta]
event = "add-item"
priority = 10

[listeners.Alpha]
event = "add-item"
priority = 10
"#;

fn keyed_container(config: serde_json::Value) -> InMemoryContainer {
    let container = InMemoryContainer::new();
    container.set_config(config);
    for (id, name) in [
        ("Notifier", "notifier"),
        ("Logger", "logger"),
        ("Zeta", "zeta"),
        ("Alpha", "alpha"),
    ] {
        container.set(id, ServiceValue::Listener(ListenerFn::arc(name, |_: &Event| {})));
    }
    container
}

#[test]
fn test_listener_keyed_toml_keeps_configured_order() {
    let config = ConfigLoader::new()
        .with_str(KEYED_TOML, ConfigSourceType::Toml)
        .load()
        .unwrap();

    let manager =
        build_event_manager(&keyed_container(config), ConfigShape::ListenerKeyed).unwrap();

    assert_eq!(
        attached_names(&manager, "add-item"),
        vec![(10, vec!["notifier", "logger", "zeta", "alpha"])]
    );
}

#[test]
fn test_listener_keyed_json_keeps_configured_order() {
    let config = ConfigLoader::new()
        .with_str(
            r#"{"listeners": {
                "Zeta": {"event": "add-item", "priority": 10},
                "Notifier": {"event": "add-item", "priority": 10},
                "Alpha": {"event": "add-item", "priority": 10},
                "Logger": {"event": "add-item", "priority": 10}
            }}"#,
            ConfigSourceType::Json,
        )
        .load()
        .unwrap();

    let manager =
        build_event_manager(&keyed_container(config), ConfigShape::ListenerKeyed).unwrap();

    assert_eq!(
        attached_names(&manager, "add-item"),
        vec![(10, vec!["zeta", "notifier", "alpha", "logger"])]
    );
}
