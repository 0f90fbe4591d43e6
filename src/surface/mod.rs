//! Presentation surfaces: the channels a renderer dispatches into.
//!
//! This module provides:
//! - `Surface`: Trait with the three logical render channels
//! - `TextSurface`: Writer-backed surface for terminals and buffers
//! - `MemorySurface`: In-memory surface recording calls, for testing

mod memory;
mod text;

pub use memory::{MemorySurface, SurfaceCall};
pub use text::TextSurface;

use std::fmt::Debug;

use serde_json::Value;

use crate::error::PrintError;
use crate::table::Table;
use crate::value::RenderHints;

/// Trait for presentation surfaces.
///
/// A surface exposes three logical channels; each call is fire-and-forget
/// from the renderer's perspective, with errors propagated but nothing
/// returned. Hints arrive uninterpreted so surface-specific knobs can pass
/// through a print call untouched.
pub trait Surface: Send + Sync + Debug {
    /// Returns a unique identifier for this surface.
    ///
    /// This is used for error messages and sink ids.
    /// Convention: "-" for stdout.
    fn id(&self) -> &str;

    /// Render a line of plain text.
    fn render_text(&self, text: &str, hints: &RenderHints) -> Result<(), PrintError>;

    /// Render a table, preserving row/column structure.
    fn render_table(&self, table: &Table, hints: &RenderHints) -> Result<(), PrintError>;

    /// Render a nested mapping/sequence as a structured tree.
    fn render_structured(&self, value: &Value, hints: &RenderHints) -> Result<(), PrintError>;
}
