//! # printsink
//!
//! Scoped print redirection and shape-dispatching value rendering for UI
//! surfaces.
//!
//! ## Overview
//!
//! printsink provides:
//! - **Scoped redirection**: Route print-style calls into a different sink
//!   for the duration of a scope, then restore the enclosing sink
//! - **Reentrant stack**: Scopes nest; exiting an inner scope restores the
//!   immediately enclosing redirection, not the default
//! - **Shape dispatch**: Tables, mappings, sequences, and scalars each land
//!   on the presentation channel that fits them best
//! - **Injectable routing**: No process-wide mutable print binding; routers
//!   are explicit handles, safe to clone and share across threads
//! - **Test doubles**: In-memory sinks and surfaces that record every call
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use printsink::{printv, MemorySurface, SinkRouter, SurfaceSink};
//!
//! fn main() -> Result<(), printsink::PrintError> {
//!     let router = SinkRouter::new();
//!     let surface = MemorySurface::new("panel");
//!
//!     {
//!         let _scope = router.redirect(Arc::new(SurfaceSink::new(surface.clone())));
//!         printv!(router, "hello,", "world")?; // lands on the panel
//!     }
//!     printv!(router, "back to stdout")?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Dispatch semantics
//!
//! Per value, in precedence order:
//! 1. Tabular (a [`Table`]) → one dedicated table-channel call
//! 2. Mapping (JSON object) → one structured-channel call
//! 3. Sequence (JSON array) → one structured-channel call
//! 4. Scalar (string, number, bool, null) → space-joined with neighboring
//!    scalars into a single text-channel call
//!
//! Unclassifiable values fall back to string conversion via
//! [`PrintValue::opaque`] and render as text. Hints pass through to the
//! surface uninterpreted.
//!
//! ## Redirection semantics
//!
//! [`SinkRouter::redirect`] pushes a sink and returns a [`RedirectGuard`];
//! dropping the guard restores the previous binding. Drop runs on unwinding
//! too, so a panicking scope body cannot leak its redirection. The stack is
//! mutex-guarded: concurrent redirects from several threads interleave
//! safely, though their scopes then overlap observably, as with any shared
//! router. Give each task its own router when isolation matters.
//!
//! ## Features
//!
//! - `miette` - Pretty error reporting with miette

// Core modules
pub mod error;
pub mod registry;
pub mod render;
pub mod route;
pub mod surface;
pub mod table;
pub mod value;

mod macros;

// Re-exports for convenience
pub use error::PrintError;
pub use registry::{RouterBuilder, SinkRegistry};
pub use render::{SurfaceSink, render};
pub use route::{FnSink, MemorySink, RedirectGuard, RenderRequest, Sink, SinkRouter};
pub use surface::{MemorySurface, Surface, SurfaceCall, TextSurface};
pub use table::Table;
pub use value::{PrintValue, RenderHints, Shape};

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::PrintDiagnostic;
