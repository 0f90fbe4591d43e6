//! Error types for print routing and rendering.
//!
//! This module provides:
//! - `PrintError`: The single error type for redirect and render operations
//! - Optional miette integration behind the `miette` feature

use thiserror::Error;

/// Errors that can occur while routing or rendering a print call.
#[derive(Debug, Error)]
pub enum PrintError {
    /// An argument failed validation at entry time (bad table shape,
    /// unknown named sink). Never deferred to first use.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A value could not be rendered through any channel, including the
    /// string-conversion fallback.
    #[error("Could not render value '{value}': {source}")]
    Formatting {
        /// Short description of the offending value
        value: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An error raised by a caller-supplied sink or surface. The router
    /// never swallows these; it only guarantees its own stack restoration.
    #[error("Sink error: {0}")]
    Sink(Box<dyn std::error::Error + Send + Sync>),

    /// I/O error while writing to a surface
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PrintError {
    /// Wrap an arbitrary sink/surface failure.
    pub fn sink(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        PrintError::Sink(Box::new(error))
    }

    /// Build a `Formatting` error for the given value description.
    pub fn formatting(
        value: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        PrintError::Formatting {
            value: value.into(),
            source: Box::new(source),
        }
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
