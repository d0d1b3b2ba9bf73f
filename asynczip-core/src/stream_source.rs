// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Bridge from [`futures::Stream`] to the source contract.
//!
//! Any `Stream` can feed the aggregator: end-of-stream maps to
//! [`Fetched::Exhausted`]. Streams have no obtain step of their own, so
//! [`AsyncSource::obtain_iterator`] resolves immediately.

use async_trait::async_trait;
use futures::{Stream, StreamExt};

use crate::fetched::Fetched;
use crate::source::{AsyncSource, BoxSourceIterator, SourceIterator};

/// Adapter making any `Stream` usable as an aggregator input.
#[derive(Debug)]
pub struct StreamSource<S> {
    inner: S,
}

impl<S> StreamSource<S> {
    /// Wrap a stream as a source.
    pub fn new(stream: S) -> Self {
        Self { inner: stream }
    }
}

#[async_trait]
impl<S> AsyncSource for StreamSource<S>
where
    S: Stream + Send + Unpin + 'static,
    S::Item: Send + 'static,
{
    type Item = S::Item;

    async fn obtain_iterator(self: Box<Self>) -> BoxSourceIterator<Self::Item> {
        Box::new(StreamIterator { inner: self.inner })
    }
}

struct StreamIterator<S> {
    inner: S,
}

#[async_trait]
impl<S> SourceIterator for StreamIterator<S>
where
    S: Stream + Send + Unpin + 'static,
    S::Item: Send + 'static,
{
    type Item = S::Item;

    async fn fetch_next(&mut self) -> Fetched<Self::Item> {
        match self.inner.next().await {
            Some(value) => Fetched::Value(value),
            None => Fetched::Exhausted,
        }
    }
}
