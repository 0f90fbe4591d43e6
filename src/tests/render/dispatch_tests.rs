//! Shape-dispatch tests for the renderer.

use serde_json::json;

use crate::render::render;
use crate::surface::{MemorySurface, SurfaceCall};
use crate::table::Table;
use crate::value::{PrintValue, RenderHints};

fn render_all(values: Vec<PrintValue>) -> Vec<SurfaceCall> {
    let surface = MemorySurface::new("mem");
    render(&surface, &values, &RenderHints::new()).unwrap();
    surface.calls()
}

#[test]
fn plain_string_renders_as_exact_text() {
    let calls = render_all(vec![PrintValue::from("hello, world")]);
    assert_eq!(calls, vec![SurfaceCall::Text("hello, world".into())]);
}

#[test]
fn sibling_scalars_join_into_one_text_call() {
    let calls = render_all(vec![PrintValue::from("x"), PrintValue::from(42)]);
    assert_eq!(calls, vec![SurfaceCall::Text("x 42".into())]);
}

#[test]
fn table_gets_exactly_one_table_call() {
    let table = Table::new(["name", "age"])
        .with_row([json!("alice"), json!(30)])
        .unwrap()
        .with_row([json!("bob"), json!(25)])
        .unwrap();

    let calls = render_all(vec![PrintValue::from(table.clone())]);
    assert_eq!(calls, vec![SurfaceCall::Table(table)]);
}

#[test]
fn mapping_renders_through_structured_channel() {
    let value = json!({"a": 1, "b": [1, 2]});
    let calls = render_all(vec![PrintValue::from(value.clone())]);

    assert_eq!(calls, vec![SurfaceCall::Structured(value)]);
}

#[test]
fn sequence_renders_as_structured_array() {
    let calls = render_all(vec![PrintValue::from(json!([1, "two", null]))]);
    assert_eq!(calls, vec![SurfaceCall::Structured(json!([1, "two", null]))]);
}

#[test]
fn non_scalars_break_the_scalar_run() {
    let table = Table::new(["c"]).with_row([json!(1)]).unwrap();
    let calls = render_all(vec![
        PrintValue::from("before"),
        PrintValue::from(7),
        PrintValue::from(table.clone()),
        PrintValue::from("after"),
    ]);

    assert_eq!(
        calls,
        vec![
            SurfaceCall::Text("before 7".into()),
            SurfaceCall::Table(table),
            SurfaceCall::Text("after".into()),
        ]
    );
}

#[test]
fn opaque_values_join_text_like_scalars() {
    let calls = render_all(vec![
        PrintValue::from("addr:"),
        PrintValue::opaque(std::net::Ipv4Addr::LOCALHOST),
    ]);

    assert_eq!(calls, vec![SurfaceCall::Text("addr: 127.0.0.1".into())]);
}

#[test]
fn hints_pass_through_to_every_channel_call() {
    let surface = MemorySurface::new("mem");
    let hints = RenderHints::new().with("width", 40);
    let values = vec![PrintValue::from("a"), PrintValue::from(json!({"k": 1}))];

    render(&surface, &values, &hints).unwrap();

    assert_eq!(surface.hints(), vec![hints.clone(), hints]);
}

#[test]
fn empty_call_renders_nothing() {
    let calls = render_all(Vec::new());
    assert!(calls.is_empty());
}
