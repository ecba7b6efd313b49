//! Unified error type for the domain layer
//!
//! Nothing in the sync core is fatal; these errors surface at the messaging
//! edges (a closed outbound sink, a malformed id from an embedder) and are
//! logged or shown to the user, never propagated as panics.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Invalid id format
    #[error("Invalid id: {0}")]
    InvalidId(String),

    /// The outbound transport is no longer accepting messages
    #[error("Outbound sink closed")]
    SinkClosed,
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
