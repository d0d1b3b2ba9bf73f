// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core contracts and data model for the asynczip aggregator.
//!
//! This crate defines the vocabulary shared by the aggregation engine and its
//! sources:
//!
//! - [`AsyncSource`] / [`SourceIterator`] — the two-phase contract every input
//!   must satisfy: obtain an iterator (may suspend), then fetch values one at
//!   a time until the source signals exhaustion.
//! - [`Fetched`] — the resolution of a single fetch: a value, exhaustion, or
//!   a failure.
//! - [`Outcome`] and [`Row`] — what one aggregated round reports per source,
//!   in input order.
//! - [`WaitPolicy`] — when a round is considered ready to emit.
//! - [`ZipError`] — the error type for source failures and misuse of the
//!   aggregator handle.
//!
//! The aggregation engine itself lives in the `asynczip` crate.

pub mod error;
pub mod fetched;
pub mod outcome;
pub mod policy;
pub mod source;
pub mod stream_source;

pub use error::{Result, ZipError};
pub use fetched::Fetched;
pub use outcome::{Outcome, Row};
pub use policy::WaitPolicy;
pub use source::{AsyncSource, BoxSource, BoxSourceIterator, SourceIterator};
pub use stream_source::StreamSource;
