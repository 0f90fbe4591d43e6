//! Writer-backed text surface for terminals and buffers.

use std::io::{self, Write};
use std::sync::Mutex;

use serde_json::Value;

use super::Surface;
use crate::error::PrintError;
use crate::table::Table;
use crate::value::RenderHints;

/// Surface that renders every channel into a byte writer.
///
/// Text goes out line by line, tables as markdown pipe tables, structured
/// values as pretty-printed JSON. Suitable as the default stdout target and
/// for plain-text capture.
pub struct TextSurface {
    id: String,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl std::fmt::Debug for TextSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextSurface").field("id", &self.id).finish()
    }
}

impl TextSurface {
    /// Create a surface over an arbitrary writer.
    pub fn for_writer(id: impl Into<String>, writer: Box<dyn Write + Send>) -> Self {
        Self {
            id: id.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Create a surface writing to stdout.
    pub fn stdout() -> Self {
        Self::for_writer("-", Box::new(io::stdout()))
    }

    /// Create a surface writing to stderr.
    pub fn stderr() -> Self {
        Self::for_writer("stderr", Box::new(io::stderr()))
    }

    fn write_line(&self, line: &str) -> Result<(), PrintError> {
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        writeln!(writer, "{line}")?;
        writer.flush()?;
        Ok(())
    }

    fn cell_text(value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl Surface for TextSurface {
    fn id(&self) -> &str {
        &self.id
    }

    fn render_text(&self, text: &str, _hints: &RenderHints) -> Result<(), PrintError> {
        self.write_line(text)
    }

    fn render_table(&self, table: &Table, _hints: &RenderHints) -> Result<(), PrintError> {
        let header = table.columns().join(" | ");
        let rule = table
            .columns()
            .iter()
            .map(|_| "---")
            .collect::<Vec<_>>()
            .join(" | ");
        let mut lines = vec![format!("| {header} |"), format!("| {rule} |")];
        for row in table.rows() {
            let cells = row.iter().map(Self::cell_text).collect::<Vec<_>>().join(" | ");
            lines.push(format!("| {cells} |"));
        }
        self.write_line(&lines.join("\n"))
    }

    fn render_structured(&self, value: &Value, _hints: &RenderHints) -> Result<(), PrintError> {
        let pretty = serde_json::to_string_pretty(value)
            .map_err(|e| PrintError::formatting("structured value", e))?;
        self.write_line(&pretty)
    }
}
