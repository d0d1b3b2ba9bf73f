// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The two-phase contract between the aggregator and its inputs.
//!
//! A source is consumed in two steps: [`AsyncSource::obtain_iterator`] is
//! called exactly once per aggregation (it may suspend, so a source can set
//! itself up lazily), and the returned [`SourceIterator`] is then driven with
//! [`SourceIterator::fetch_next`] until it resolves [`Fetched::Exhausted`].
//! Once exhaustion has been observed the aggregator never fetches from that
//! iterator again.

use async_trait::async_trait;

use crate::fetched::Fetched;

/// A boxed source iterator, as handed to the aggregator's fetch workers.
pub type BoxSourceIterator<T> = Box<dyn SourceIterator<Item = T>>;

/// A boxed source, as stored by the aggregator's builder.
pub type BoxSource<T> = Box<dyn AsyncSource<Item = T>>;

/// The fetch half of the source contract.
#[async_trait]
pub trait SourceIterator: Send {
    /// The type of value this iterator produces.
    type Item: Send + 'static;

    /// Fetch the next value, suspending until it is available.
    ///
    /// Resolving [`Fetched::Exhausted`] is final: the aggregator will not
    /// call `fetch_next` again afterwards. Resolving [`Fetched::Failed`]
    /// is not final; the caller of the aggregator decides whether the fetch
    /// is retried.
    async fn fetch_next(&mut self) -> Fetched<Self::Item>;
}

/// The setup half of the source contract.
#[async_trait]
pub trait AsyncSource: Send {
    /// The type of value this source produces.
    type Item: Send + 'static;

    /// Obtain the iterator that will produce this source's values.
    ///
    /// Consumes the source; the aggregator calls this exactly once per
    /// source, in input order, when it starts.
    async fn obtain_iterator(self: Box<Self>) -> BoxSourceIterator<Self::Item>;

    /// Box this source for storage alongside sources of other types.
    fn boxed(self) -> BoxSource<Self::Item>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}
