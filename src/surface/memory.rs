//! In-memory surface implementation for testing.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::Value;

use super::Surface;
use crate::error::PrintError;
use crate::table::Table;
use crate::value::RenderHints;

/// One recorded channel call.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    /// A `render_text` call with its exact content
    Text(String),
    /// A `render_table` call with the full table
    Table(Table),
    /// A `render_structured` call with the full value
    Structured(Value),
}

/// In-memory surface recording every channel call.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    id: String,
    calls: Arc<Mutex<Vec<(SurfaceCall, RenderHints)>>>,
}

impl MemorySurface {
    /// Create a new empty recording surface.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(SurfaceCall, RenderHints)>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// All recorded calls, in order.
    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.lock().iter().map(|(c, _)| c.clone()).collect()
    }

    /// The hints that arrived with each call, in order.
    pub fn hints(&self) -> Vec<RenderHints> {
        self.lock().iter().map(|(_, h)| h.clone()).collect()
    }

    /// Number of recorded calls.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check whether nothing was rendered yet.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Discard all recorded calls.
    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Surface for MemorySurface {
    fn id(&self) -> &str {
        &self.id
    }

    fn render_text(&self, text: &str, hints: &RenderHints) -> Result<(), PrintError> {
        self.lock()
            .push((SurfaceCall::Text(text.to_string()), hints.clone()));
        Ok(())
    }

    fn render_table(&self, table: &Table, hints: &RenderHints) -> Result<(), PrintError> {
        self.lock()
            .push((SurfaceCall::Table(table.clone()), hints.clone()));
        Ok(())
    }

    fn render_structured(&self, value: &Value, hints: &RenderHints) -> Result<(), PrintError> {
        self.lock()
            .push((SurfaceCall::Structured(value.clone()), hints.clone()));
        Ok(())
    }
}
