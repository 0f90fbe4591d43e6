//! Named-sink resolution and RouterBuilder tests.

use std::sync::Arc;

use crate::error::PrintError;
use crate::registry::{RouterBuilder, SinkRegistry};
use crate::route::{MemorySink, Sink};
use crate::value::PrintValue;

#[test]
fn resolve_finds_registered_sinks() {
    let registry = SinkRegistry::new()
        .with_sink("widget", Arc::new(MemorySink::new("widget")) as Arc<dyn Sink>);

    assert!(registry.has_sink("widget"));
    assert_eq!(registry.resolve("widget").unwrap().id(), "widget");
    assert_eq!(registry.names(), vec!["widget"]);
}

#[test]
fn resolve_fails_fast_on_unknown_names() {
    let registry = SinkRegistry::new();
    let err = registry.resolve("missing").unwrap_err();
    assert!(matches!(err, PrintError::InvalidArgument(_)));
}

#[test]
fn re_registration_replaces_the_previous_sink() {
    let first = Arc::new(MemorySink::new("first"));
    let second = Arc::new(MemorySink::new("second"));

    let mut registry = SinkRegistry::new();
    registry.register("slot", first);
    registry.register("slot", second);

    assert_eq!(registry.names(), vec!["slot"]);
    assert_eq!(registry.resolve("slot").unwrap().id(), "second");
}

#[test]
fn redirect_to_routes_through_the_registry() {
    let widget = Arc::new(MemorySink::new("widget"));
    let default = Arc::new(MemorySink::new("default"));

    let router = RouterBuilder::new()
        .with_default_sink(default.clone())
        .with_sink("widget", widget.clone())
        .build();

    {
        let _scope = router.redirect_to("widget").unwrap();
        router.print(vec![PrintValue::from("routed")]).unwrap();
    }
    router.print(vec![PrintValue::from("home")]).unwrap();

    assert_eq!(widget.len(), 1);
    assert_eq!(default.len(), 1);
}

#[test]
fn redirect_to_unknown_name_fails_at_entry() {
    let router = RouterBuilder::new()
        .with_default_sink(Arc::new(MemorySink::new("default")))
        .build();

    let err = router.redirect_to("nope").unwrap_err();
    assert!(matches!(err, PrintError::InvalidArgument(_)));
    assert_eq!(router.depth(), 0);
}
