//! Named-sink registry and router builder.

use std::sync::Arc;

use crate::error::PrintError;
use crate::render::SurfaceSink;
use crate::route::{Sink, SinkRouter};
use crate::surface::TextSurface;

/// Registry mapping names to sinks.
///
/// `SinkRouter::redirect_to` resolves through this, so a misspelled sink
/// name fails at scope entry rather than on the first print.
#[derive(Debug, Clone, Default)]
pub struct SinkRegistry {
    sinks: Vec<(String, Arc<dyn Sink>)>,
}

impl SinkRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sink under a name, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, sink: Arc<dyn Sink>) {
        let name = name.into();
        self.sinks.retain(|(n, _)| *n != name);
        self.sinks.push((name, sink));
    }

    /// Register a sink under a name (builder pattern).
    pub fn with_sink(mut self, name: impl Into<String>, sink: Arc<dyn Sink>) -> Self {
        self.register(name, sink);
        self
    }

    /// Check if a name is registered.
    pub fn has_sink(&self, name: &str) -> bool {
        self.sinks.iter().any(|(n, _)| n == name)
    }

    /// Resolve a name to its sink.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn Sink>, PrintError> {
        self.sinks
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s.clone())
            .ok_or_else(|| PrintError::InvalidArgument(format!("unknown sink '{name}'")))
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.sinks.iter().map(|(n, _)| n.as_str()).collect()
    }
}

/// Builder for `SinkRouter` instances.
pub struct RouterBuilder {
    default_sink: Option<Arc<dyn Sink>>,
    registry: SinkRegistry,
}

impl Default for RouterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RouterBuilder {
    /// Start an empty builder.
    pub fn new() -> Self {
        Self {
            default_sink: None,
            registry: SinkRegistry::new(),
        }
    }

    /// Set the sink used when no redirection scope is active.
    /// Defaults to text rendering on stdout.
    pub fn with_default_sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.default_sink = Some(sink);
        self
    }

    /// Register a named sink for `redirect_to` resolution.
    pub fn with_sink(mut self, name: impl Into<String>, sink: Arc<dyn Sink>) -> Self {
        self.registry.register(name, sink);
        self
    }

    /// Use a pre-built registry, replacing any sinks registered so far.
    pub fn with_registry(mut self, registry: SinkRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Build the router.
    pub fn build(self) -> SinkRouter {
        let default_sink = self
            .default_sink
            .unwrap_or_else(|| Arc::new(SurfaceSink::new(TextSurface::stdout())));
        SinkRouter::with_parts(default_sink, self.registry)
    }
}
