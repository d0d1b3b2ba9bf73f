// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;
use asynczip_core::{AsyncSource, BoxSourceIterator, Fetched, SourceIterator};
use tokio::time::sleep;

/// A source that delivers fixed items with a fixed per-item latency.
///
/// Every fetch sleeps the latency first and then delivers, so the exhaustion
/// signal is delayed exactly like a value. A zero latency delivers without
/// sleeping at all.
#[derive(Debug, Clone)]
pub struct DelayedSource<T> {
    items: VecDeque<T>,
    latency: Duration,
}

impl<T> DelayedSource<T> {
    pub fn new(items: impl IntoIterator<Item = T>, latency: Duration) -> Self {
        Self {
            items: items.into_iter().collect(),
            latency,
        }
    }
}

impl DelayedSource<char> {
    /// One item per character, latency in milliseconds.
    pub fn from_chars(items: &str, latency_ms: u64) -> Self {
        Self::new(items.chars(), Duration::from_millis(latency_ms))
    }
}

#[async_trait]
impl<T: Send + 'static> AsyncSource for DelayedSource<T> {
    type Item = T;

    async fn obtain_iterator(self: Box<Self>) -> BoxSourceIterator<T> {
        Box::new(DelayedIterator {
            items: self.items,
            latency: self.latency,
        })
    }
}

struct DelayedIterator<T> {
    items: VecDeque<T>,
    latency: Duration,
}

#[async_trait]
impl<T: Send + 'static> SourceIterator for DelayedIterator<T> {
    type Item = T;

    async fn fetch_next(&mut self) -> Fetched<T> {
        if !self.latency.is_zero() {
            sleep(self.latency).await;
        }
        match self.items.pop_front() {
            Some(item) => Fetched::Value(item),
            None => Fetched::Exhausted,
        }
    }
}
