//! Scoped redirection of print calls onto a stack of sinks.
//!
//! This module provides:
//! - `Sink`: Trait for print consumers
//! - `RenderRequest`: The values and hints of one print call
//! - `SinkRouter`: The explicit, injectable redirection stack
//! - `RedirectGuard`: RAII token that restores the enclosing sink on drop
//! - `FnSink` and `MemorySink`: closure-backed and recording sinks

use std::fmt::Debug;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::PrintError;
use crate::registry::SinkRegistry;
use crate::render::SurfaceSink;
use crate::surface::TextSurface;
use crate::value::{PrintValue, RenderHints};

/// Trait for print consumers installed into a `SinkRouter`.
///
/// A sink receives one `RenderRequest` per print call. Errors it raises
/// propagate unswallowed to the caller of the redirected print.
pub trait Sink: Send + Sync + Debug {
    /// Returns a unique identifier for this sink.
    ///
    /// This is used for error messages and registry lookups.
    /// Convention: "-" for stdout.
    fn id(&self) -> &str;

    /// Consume one print call.
    fn emit(&self, request: &RenderRequest) -> Result<(), PrintError>;
}

/// The values and hints of a single print call.
///
/// Ephemeral: built by the router, handed to the active sink, dropped.
/// `Clone` so capturing sinks can retain it for later inspection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderRequest {
    values: Vec<PrintValue>,
    hints: RenderHints,
}

impl RenderRequest {
    /// Build a request from values and hints.
    pub fn new(values: Vec<PrintValue>, hints: RenderHints) -> Self {
        Self { values, hints }
    }

    /// The positional values, in argument order.
    pub fn values(&self) -> &[PrintValue] {
        &self.values
    }

    /// The uninterpreted hints.
    pub fn hints(&self) -> &RenderHints {
        &self.hints
    }
}

struct RouterInner {
    stack: Mutex<Vec<Arc<dyn Sink>>>,
    default_sink: Arc<dyn Sink>,
    registry: SinkRegistry,
}

/// An explicit, injectable redirection stack for print calls.
///
/// The router replaces the process-wide "active print" binding of dynamic
/// languages with a handle callers thread through their code. Cloning is
/// cheap and every clone shares the same stack. A mutex serializes scope
/// entry/exit and active-sink lookup, so concurrent use cannot corrupt the
/// stack; restoration order is additionally pinned by depth tokens carried
/// in each `RedirectGuard`.
#[derive(Clone)]
pub struct SinkRouter {
    inner: Arc<RouterInner>,
}

impl Debug for SinkRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SinkRouter")
            .field("depth", &self.depth())
            .field("default", &self.inner.default_sink.id())
            .finish()
    }
}

impl Default for SinkRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl SinkRouter {
    /// Create a router whose default sink renders text to stdout.
    pub fn new() -> Self {
        Self::with_default(Arc::new(SurfaceSink::new(TextSurface::stdout())))
    }

    /// Create a router with an explicit default sink, used whenever no
    /// redirection scope is active.
    pub fn with_default(default_sink: Arc<dyn Sink>) -> Self {
        Self::with_parts(default_sink, SinkRegistry::new())
    }

    pub(crate) fn with_parts(default_sink: Arc<dyn Sink>, registry: SinkRegistry) -> Self {
        Self {
            inner: Arc::new(RouterInner {
                stack: Mutex::new(Vec::new()),
                default_sink,
                registry,
            }),
        }
    }

    fn lock_stack(&self) -> MutexGuard<'_, Vec<Arc<dyn Sink>>> {
        // A panicking scope body must still be able to pop on unwind.
        self.inner.stack.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Enter a redirection scope: push `sink` and make it the active print
    /// target until the returned guard is dropped.
    ///
    /// Scopes nest; dropping an inner guard restores the immediately
    /// enclosing sink, not the default.
    #[must_use = "dropping the guard ends the redirection scope immediately"]
    pub fn redirect(&self, sink: Arc<dyn Sink>) -> RedirectGuard {
        let mut stack = self.lock_stack();
        let depth = stack.len();
        stack.push(sink);
        RedirectGuard {
            router: self.clone(),
            depth,
        }
    }

    /// Enter a redirection scope for a sink registered by name.
    ///
    /// Unknown names fail with `PrintError::InvalidArgument` here, at scope
    /// entry, never at first use.
    pub fn redirect_to(&self, name: &str) -> Result<RedirectGuard, PrintError> {
        let sink = self.inner.registry.resolve(name)?;
        Ok(self.redirect(sink))
    }

    /// The currently active sink: top of the stack, or the default.
    pub fn active(&self) -> Arc<dyn Sink> {
        self.lock_stack()
            .last()
            .cloned()
            .unwrap_or_else(|| self.inner.default_sink.clone())
    }

    /// Current redirection depth; zero means the default sink is active.
    pub fn depth(&self) -> usize {
        self.lock_stack().len()
    }

    /// The registry of named sinks this router resolves `redirect_to` against.
    pub fn registry(&self) -> &SinkRegistry {
        &self.inner.registry
    }

    /// Route one print call to the active sink.
    pub fn print(&self, values: Vec<PrintValue>) -> Result<(), PrintError> {
        self.print_with(values, RenderHints::new())
    }

    /// Route one print call with hints to the active sink.
    ///
    /// The stack lock is released before the sink runs, so a sink may
    /// itself print or open a nested redirection scope.
    pub fn print_with(&self, values: Vec<PrintValue>, hints: RenderHints) -> Result<(), PrintError> {
        let sink = self.active();
        sink.emit(&RenderRequest::new(values, hints))
    }
}

/// RAII token for one redirection scope.
///
/// Dropping the guard truncates the stack back to the depth it was pushed
/// at. Drop runs on every exit path, including unwinding, so the pre-entry
/// binding is restored even when the scope body panics. Truncation (rather
/// than a plain pop) keeps restoration well-defined if an inner guard
/// outlives an outer one.
#[must_use = "dropping the guard ends the redirection scope immediately"]
#[derive(Debug)]
pub struct RedirectGuard {
    router: SinkRouter,
    depth: usize,
}

impl RedirectGuard {
    /// The depth this scope was entered at (zero for the outermost scope).
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Drop for RedirectGuard {
    fn drop(&mut self) {
        let mut stack = self.router.lock_stack();
        stack.truncate(self.depth);
    }
}

/// Closure-backed sink for ad-hoc consumers.
pub struct FnSink {
    id: String,
    func: Box<dyn Fn(&RenderRequest) -> Result<(), PrintError> + Send + Sync>,
}

impl Debug for FnSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnSink").field("id", &self.id).finish()
    }
}

impl FnSink {
    /// Wrap a closure as a sink.
    pub fn new(
        id: impl Into<String>,
        func: impl Fn(&RenderRequest) -> Result<(), PrintError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            func: Box::new(func),
        }
    }
}

impl Sink for FnSink {
    fn id(&self) -> &str {
        &self.id
    }

    fn emit(&self, request: &RenderRequest) -> Result<(), PrintError> {
        (self.func)(request)
    }
}

/// In-memory sink recording raw requests, for testing redirection.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    id: String,
    requests: Arc<Mutex<Vec<RenderRequest>>>,
}

impl MemorySink {
    /// Create a new empty recording sink.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<RenderRequest>> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// All recorded requests, in order.
    pub fn requests(&self) -> Vec<RenderRequest> {
        self.lock().clone()
    }

    /// Number of recorded requests.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check whether nothing was routed here yet.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Discard all recorded requests.
    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Sink for MemorySink {
    fn id(&self) -> &str {
        &self.id
    }

    fn emit(&self, request: &RenderRequest) -> Result<(), PrintError> {
        self.lock().push(request.clone());
        Ok(())
    }
}
