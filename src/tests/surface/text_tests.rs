//! Tests for the writer-backed text surface.

use std::io::Write;
use std::sync::{Arc, Mutex};

use serde_json::json;

use crate::surface::{Surface, TextSurface};
use crate::table::Table;
use crate::value::RenderHints;

/// Writer handle whose buffer stays readable after the surface takes it.
#[derive(Debug, Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn capture_surface() -> (TextSurface, SharedBuf) {
    let buf = SharedBuf::default();
    let surface = TextSurface::for_writer("buf", Box::new(buf.clone()));
    (surface, buf)
}

#[test]
fn text_goes_out_as_a_line() {
    let (surface, buf) = capture_surface();
    surface.render_text("hello", &RenderHints::new()).unwrap();

    assert_eq!(buf.contents(), "hello\n");
}

#[test]
fn tables_render_as_pipe_tables() {
    let (surface, buf) = capture_surface();
    let table = Table::new(["name", "age"])
        .with_row([json!("alice"), json!(30)])
        .unwrap()
        .with_row([json!("bob"), json!(25)])
        .unwrap();

    surface.render_table(&table, &RenderHints::new()).unwrap();

    let expected = "| name | age |\n| --- | --- |\n| alice | 30 |\n| bob | 25 |\n";
    assert_eq!(buf.contents(), expected);
}

#[test]
fn structured_output_parses_back() {
    let (surface, buf) = capture_surface();
    let value = json!({"a": 1, "b": [1, 2]});

    surface.render_structured(&value, &RenderHints::new()).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&buf.contents()).unwrap();
    assert_eq!(parsed, value);
}

#[test]
fn surface_id_is_reported() {
    let (surface, _) = capture_surface();
    assert_eq!(surface.id(), "buf");
    assert_eq!(TextSurface::stdout().id(), "-");
}
