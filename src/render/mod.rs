//! Shape-dispatching renderer.
//!
//! `render` inspects each value of a print call and routes it to the most
//! appropriate surface channel: tables to the table channel, mappings and
//! sequences to the structured channel, scalars joined into plain text.
//! `SurfaceSink` packages the renderer as a `Sink` so a surface can be
//! installed directly into a `SinkRouter`.

use std::sync::Arc;

use crate::error::PrintError;
use crate::route::{RenderRequest, Sink};
use crate::surface::Surface;
use crate::value::{PrintValue, RenderHints, Shape};

/// Render a sequence of values through a surface.
///
/// Dispatch per value, in precedence order: tabular values get exactly one
/// table-channel call each; mappings and sequences each get one structured
/// call; consecutive scalars (and opaque fallbacks) are space-joined into a
/// single text call, mirroring a native print's space-separated line.
/// Values render in argument order and hints pass through uninterpreted.
pub fn render(
    surface: &dyn Surface,
    values: &[PrintValue],
    hints: &RenderHints,
) -> Result<(), PrintError> {
    let mut pending: Vec<String> = Vec::new();

    for value in values {
        match value.shape() {
            Shape::Scalar | Shape::Opaque => {
                if let Some(text) = value.scalar_text() {
                    pending.push(text);
                }
            }
            Shape::Tabular => {
                flush_text(surface, &mut pending, hints)?;
                if let Some(table) = value.as_table() {
                    surface.render_table(table, hints)?;
                }
            }
            Shape::Mapping | Shape::Sequence => {
                flush_text(surface, &mut pending, hints)?;
                if let Some(json) = value.as_json() {
                    surface.render_structured(json, hints)?;
                }
            }
        }
    }

    flush_text(surface, &mut pending, hints)
}

/// Emit the buffered scalar run as one space-joined text call.
fn flush_text(
    surface: &dyn Surface,
    pending: &mut Vec<String>,
    hints: &RenderHints,
) -> Result<(), PrintError> {
    if pending.is_empty() {
        return Ok(());
    }
    let line = pending.join(" ");
    pending.clear();
    surface.render_text(&line, hints)
}

/// A sink that renders every request through a surface.
///
/// This is the composition point of the two halves of the crate: install a
/// `SurfaceSink` into a `SinkRouter` and redirected print calls land on the
/// surface with shape dispatch applied.
#[derive(Debug, Clone)]
pub struct SurfaceSink<S> {
    surface: Arc<S>,
}

impl<S: Surface> SurfaceSink<S> {
    /// Wrap a surface as a sink.
    pub fn new(surface: S) -> Self {
        Self {
            surface: Arc::new(surface),
        }
    }

    /// Access the wrapped surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }
}

impl<S: Surface> Sink for SurfaceSink<S> {
    fn id(&self) -> &str {
        self.surface.id()
    }

    fn emit(&self, request: &RenderRequest) -> Result<(), PrintError> {
        render(self.surface.as_ref(), request.values(), request.hints())
    }
}
