//! Sink behavior tests: capture, closures, error propagation, macro sugar.

use std::sync::Arc;

use serde_json::json;

use crate::error::PrintError;
use crate::printv;
use crate::route::{FnSink, MemorySink, RenderRequest, Sink, SinkRouter};
use crate::value::{PrintValue, RenderHints};

#[test]
fn memory_sink_captures_requests_verbatim() {
    let sink = Arc::new(MemorySink::new("capture"));
    let router = SinkRouter::with_default(sink.clone());

    let hints = RenderHints::new().with("sep", ",");
    router
        .print_with(vec![PrintValue::from("x"), PrintValue::from(1)], hints.clone())
        .unwrap();

    let requests = sink.requests();
    assert_eq!(
        requests,
        vec![RenderRequest::new(
            vec![PrintValue::from("x"), PrintValue::from(1)],
            hints,
        )]
    );
}

#[test]
fn fn_sink_invokes_the_closure() {
    let seen = Arc::new(MemorySink::new("seen"));
    let seen_inner = seen.clone();
    let sink = FnSink::new("fn", move |req| seen_inner.emit(req));

    let router = SinkRouter::with_default(Arc::new(sink));
    router.print(vec![PrintValue::from(json!([1, 2]))]).unwrap();

    assert_eq!(seen.len(), 1);
}

#[test]
fn sink_errors_propagate_and_stack_survives() {
    let router = SinkRouter::with_default(Arc::new(MemorySink::new("default")));
    let failing = Arc::new(FnSink::new("failing", |_| {
        Err(PrintError::Sink("sink refused the call".into()))
    }));

    {
        let _scope = router.redirect(failing);
        let err = router.print(vec![PrintValue::from("x")]).unwrap_err();
        assert!(matches!(err, PrintError::Sink(_)));
        // The failed print does not disturb the scope.
        assert_eq!(router.depth(), 1);
    }

    assert_eq!(router.depth(), 0);
}

#[test]
fn printv_converts_arguments_in_order() {
    let sink = Arc::new(MemorySink::new("capture"));
    let router = SinkRouter::with_default(sink.clone());

    printv!(router, "x", 42, true).unwrap();

    let requests = sink.requests();
    assert_eq!(
        requests[0].values(),
        &[
            PrintValue::from("x"),
            PrintValue::from(42),
            PrintValue::from(true),
        ]
    );
    assert!(requests[0].hints().is_empty());
}

#[test]
fn printv_with_no_values_routes_an_empty_request() {
    let sink = Arc::new(MemorySink::new("capture"));
    let router = SinkRouter::with_default(sink.clone());

    printv!(router).unwrap();

    assert_eq!(sink.requests()[0].values().len(), 0);
}
