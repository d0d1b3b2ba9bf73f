// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the asynczip aggregator.
//!
//! [`ZipError`] covers two distinct concerns: failures reported by a source
//! while fetching (which travel inside rows as [`Outcome::Failed`] and are
//! never thrown across the iteration boundary), and synchronous misuse of the
//! aggregator handle (`retry`/`retire` on the wrong slot), which fails fast.
//!
//! The type is `Clone` on purpose: a slot that failed keeps re-reporting its
//! error on every round until the caller decides what to do with it, so the
//! stored error must be reusable. Wrapped source errors are held behind an
//! `Arc` for that reason.
//!
//! [`Outcome::Failed`]: crate::Outcome::Failed

use std::sync::Arc;

/// Convenience alias used throughout the workspace.
pub type Result<T> = core::result::Result<T, ZipError>;

/// Root error type for all asynczip operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ZipError {
    /// A source's fetch resolved with a failure that is not exhaustion.
    #[error("source fetch failed: {context}")]
    FetchFailed {
        /// Description of what went wrong during the fetch.
        context: String,
    },

    /// A source's fetch resolved with an error produced by user code.
    #[error("source error: {0}")]
    SourceError(#[source] Arc<dyn std::error::Error + Send + Sync>),

    /// A slot index outside the aggregator's source list.
    #[error("slot index {index} out of range for {len} sources")]
    SlotOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of slots in the aggregator.
        len: usize,
    },

    /// `retry` or `retire` was called on a slot that has no standing failure.
    #[error("slot {index} has no failure awaiting a decision")]
    SlotNotFaulted {
        /// The offending index.
        index: usize,
    },
}

impl ZipError {
    /// Create a fetch failure with the given context.
    pub fn fetch_failed(context: impl Into<String>) -> Self {
        Self::FetchFailed {
            context: context.into(),
        }
    }

    /// Wrap an error produced by user code inside a source.
    pub fn from_source<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::SourceError(Arc::new(error))
    }
}
