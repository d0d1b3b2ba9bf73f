// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A source that injects a fetch failure at a chosen position, for testing
//! failure propagation, retry, and retirement.

use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;
use asynczip_core::{AsyncSource, BoxSourceIterator, Fetched, SourceIterator, ZipError};
use tokio::time::sleep;

/// Delivers fixed items like `DelayedSource`, but the fetch at position
/// `fail_at` (zero-based) resolves `Failed` instead. The failure consumes no
/// item: a retried fetch delivers the item the failed fetch would have.
#[derive(Debug, Clone)]
pub struct FaultySource<T> {
    items: VecDeque<T>,
    fail_at: usize,
    latency: Duration,
}

impl<T> FaultySource<T> {
    pub fn new(items: impl IntoIterator<Item = T>, fail_at: usize, latency: Duration) -> Self {
        Self {
            items: items.into_iter().collect(),
            fail_at,
            latency,
        }
    }
}

#[async_trait]
impl<T: Send + 'static> AsyncSource for FaultySource<T> {
    type Item = T;

    async fn obtain_iterator(self: Box<Self>) -> BoxSourceIterator<T> {
        Box::new(FaultyIterator {
            items: self.items,
            fail_at: Some(self.fail_at),
            latency: self.latency,
            fetches: 0,
        })
    }
}

struct FaultyIterator<T> {
    items: VecDeque<T>,
    fail_at: Option<usize>,
    latency: Duration,
    fetches: usize,
}

#[async_trait]
impl<T: Send + 'static> SourceIterator for FaultyIterator<T> {
    type Item = T;

    async fn fetch_next(&mut self) -> Fetched<T> {
        if !self.latency.is_zero() {
            sleep(self.latency).await;
        }
        let position = self.fetches;
        self.fetches += 1;
        if self.fail_at == Some(position) {
            self.fail_at = None;
            return Fetched::Failed(ZipError::fetch_failed(format!(
                "injected failure at fetch {position}"
            )));
        }
        match self.items.pop_front() {
            Some(item) => Fetched::Value(item),
            None => Fetched::Exhausted,
        }
    }
}
