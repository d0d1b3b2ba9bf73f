// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Aggregate several independently-progressing asynchronous sources into one
//! asynchronous sequence of per-source outcomes: `zip` for sources that
//! produce values at unpredictable times.
//!
//! On every aggregated round the engine either waits for all still-active
//! sources to answer ([`WaitPolicy::AllCompleted`]) or emits as soon as any
//! active source answers ([`WaitPolicy::FirstCompleted`]), leaving the others
//! pending in the emitted [`Row`]. Row entries always follow input-source
//! order; completion order only decides which entries are values, pending
//! markers, or exhaustion markers within a round.
//!
//! # Example
//!
//! ```
//! use asynczip::{AsyncZip, StreamSource, WaitPolicy};
//! use futures::stream;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let zip = AsyncZip::new(WaitPolicy::AllCompleted)
//!     .source(StreamSource::new(stream::iter(vec![1, 2, 3])))
//!     .source(StreamSource::new(stream::iter(vec![10, 20])));
//!
//! let mut handle = zip.start().await;
//! while let Some(row) = handle.next_row().await {
//!     assert_eq!(row.len(), 2);
//! }
//! # }
//! ```
//!
//! The iteration ends (`next_row` returns `None`) exactly when every source
//! has been observed exhausted. Dropping the handle cancels all outstanding
//! fetches, so no spawned work outlives the aggregator.

mod row_stream;
mod slot;
mod zip;

pub use asynczip_core::{
    AsyncSource, BoxSource, BoxSourceIterator, Fetched, Outcome, Result, Row, SourceIterator,
    StreamSource, WaitPolicy, ZipError,
};
pub use row_stream::RowStream;
pub use zip::{AsyncZip, ZipHandle};
