// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The aggregation engine: [`AsyncZip`] configuration and the [`ZipHandle`]
//! round loop.
//!
//! Each source's iterator is owned by a dedicated fetch worker task; every
//! completed fetch fans into one shared channel as a `(slot index, result)`
//! pair. `next_row` drains that channel, decides readiness under the
//! configured [`WaitPolicy`], and assembles rows in input-source order. Slot
//! bookkeeping is only ever touched from within `next_row`, so the engine
//! needs no locks.

use asynczip_core::{
    AsyncSource, BoxSource, BoxSourceIterator, Fetched, Outcome, Result, Row, WaitPolicy, ZipError,
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::row_stream::RowStream;
use crate::slot::{Slot, SlotState};

/// One resolved fetch, as delivered by a fetch worker.
struct Completion<T> {
    index: usize,
    fetched: Fetched<T>,
}

/// Configuration for one aggregation: an ordered list of sources and the
/// policy deciding when a round is ready.
///
/// Sources are consumed in the order they are added; `row[i]` of every
/// emitted [`Row`] corresponds to the i-th source. See the crate docs for a
/// full example.
pub struct AsyncZip<T> {
    sources: Vec<BoxSource<T>>,
    policy: WaitPolicy,
}

impl<T: Send + 'static> AsyncZip<T> {
    /// Start configuring an aggregation with the given wait policy.
    pub fn new(policy: WaitPolicy) -> Self {
        Self {
            sources: Vec::new(),
            policy,
        }
    }

    /// Append one source. Input order determines row order.
    #[must_use]
    pub fn source(mut self, source: impl AsyncSource<Item = T> + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Append already-boxed sources, preserving their order.
    #[must_use]
    pub fn sources<I>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = BoxSource<T>>,
    {
        self.sources.extend(sources);
        self
    }

    /// Obtain every source's iterator and issue the first fetches.
    ///
    /// Iterators are obtained in input order (each may suspend). Fetch
    /// issuance is fire-and-forget per slot: a later source is never delayed
    /// behind an earlier source's fetch completion. With zero sources the
    /// returned handle ends at the first `next_row` call.
    pub async fn start(self) -> ZipHandle<T> {
        let policy = self.policy;
        let cancel = CancellationToken::new();
        let (completions_tx, completions) = mpsc::unbounded_channel();

        let mut slots = Vec::with_capacity(self.sources.len());
        for (index, source) in self.sources.into_iter().enumerate() {
            let iterator = source.obtain_iterator().await;
            let (resume_tx, resume_rx) = mpsc::unbounded_channel();
            tokio::spawn(fetch_worker(
                index,
                iterator,
                completions_tx.clone(),
                resume_rx,
                cancel.child_token(),
            ));
            slots.push(Slot::new(resume_tx));
        }
        // The workers hold the only remaining senders; the channel closes
        // once every worker has stopped.
        drop(completions_tx);

        ZipHandle {
            slots,
            completions,
            policy,
            ended: false,
            cancel,
        }
    }
}

/// Runs one source's fetches. Owns the iterator for the slot's lifetime.
///
/// The worker issues its first fetch immediately and then waits for a resume
/// signal between fetches, which caps each slot at one in-flight fetch. It
/// stops on exhaustion, when the aggregator is dropped (cancellation), or
/// when its slot is retired (resume channel closed).
async fn fetch_worker<T: Send + 'static>(
    index: usize,
    mut iterator: BoxSourceIterator<T>,
    completions: mpsc::UnboundedSender<Completion<T>>,
    mut resume: mpsc::UnboundedReceiver<()>,
    cancel: CancellationToken,
) {
    loop {
        let fetched = tokio::select! {
            _ = cancel.cancelled() => break,
            fetched = iterator.fetch_next() => fetched,
        };
        let exhausted = fetched.is_exhausted();
        if let Fetched::Failed(_error) = &fetched {
            #[cfg(feature = "tracing")]
            tracing::warn!("asynczip: fetch for slot {index} failed: {_error}");
        }
        if completions.send(Completion { index, fetched }).is_err() {
            break;
        }
        if exhausted {
            break;
        }
        tokio::select! {
            _ = cancel.cancelled() => break,
            resumed = resume.recv() => {
                if resumed.is_none() {
                    break;
                }
            }
        }
    }
}

/// A started aggregation, driven by repeated [`next_row`] calls.
///
/// Dropping the handle cancels every outstanding fetch.
///
/// [`next_row`]: ZipHandle::next_row
pub struct ZipHandle<T> {
    slots: Vec<Slot<T>>,
    completions: mpsc::UnboundedReceiver<Completion<T>>,
    policy: WaitPolicy,
    ended: bool,
    cancel: CancellationToken,
}

impl<T> ZipHandle<T> {
    /// Produce the next aggregated row, or `None` once every source is
    /// exhausted. Calls after the end keep returning `None`.
    ///
    /// Suspends at most once per call: trailing completions from earlier
    /// rounds are drained first, and if they already satisfy the wait policy
    /// no waiting happens at all.
    pub async fn next_row(&mut self) -> Option<Row<T>> {
        if self.ended {
            return None;
        }

        while let Ok(completion) = self.completions.try_recv() {
            self.apply(completion);
        }

        // The active set is fixed per round: sources already observed
        // exhausted take no part in the predicate, but an exhaustion that
        // resolves during the wait still counts as that slot's completion.
        let active: Vec<usize> = (0..self.slots.len())
            .filter(|&index| !self.slots[index].is_exhausted())
            .collect();
        while !self.round_ready(&active) {
            match self.completions.recv().await {
                Some(completion) => self.apply(completion),
                None => {
                    #[cfg(feature = "tracing")]
                    tracing::error!(
                        "asynczip: fetch workers stopped with unresolved slots; emitting as-is"
                    );
                    #[cfg(not(feature = "tracing"))]
                    eprintln!("asynczip: fetch workers stopped with unresolved slots; emitting as-is");
                    break;
                }
            }
        }

        self.build_row()
    }

    /// Re-issue the fetch of a slot whose last fetch failed.
    pub fn retry(&mut self, index: usize) -> Result<()> {
        let len = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(ZipError::SlotOutOfRange { index, len })?;
        match slot.state() {
            SlotState::Faulted(_) => slot.reissue().map_err(|()| {
                slot.exhaust();
                ZipError::fetch_failed(format!("fetch worker for slot {index} is gone"))
            }),
            _ => Err(ZipError::SlotNotFaulted { index }),
        }
    }

    /// Permanently mark a slot whose last fetch failed as exhausted.
    pub fn retire(&mut self, index: usize) -> Result<()> {
        let len = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(ZipError::SlotOutOfRange { index, len })?;
        match slot.state() {
            SlotState::Faulted(_) => {
                slot.exhaust();
                Ok(())
            }
            _ => Err(ZipError::SlotNotFaulted { index }),
        }
    }

    /// The wait policy this aggregation was built with.
    pub fn policy(&self) -> WaitPolicy {
        self.policy
    }

    /// Number of sources, and therefore entries in every emitted row.
    pub fn source_count(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` once the sequence has ended.
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// Adapt the handle into a [`futures::Stream`] of rows.
    pub fn into_stream(self) -> RowStream<T>
    where
        T: Send + 'static,
    {
        RowStream::new(self)
    }

    fn apply(&mut self, completion: Completion<T>) {
        self.slots[completion.index].resolve(completion.fetched);
    }

    /// The ready predicate over this round's active set.
    fn round_ready(&self, active: &[usize]) -> bool {
        if active.is_empty() {
            return true;
        }
        match self.policy {
            WaitPolicy::FirstCompleted => {
                active.iter().any(|&index| self.slots[index].is_settled())
            }
            WaitPolicy::AllCompleted => {
                active.iter().all(|&index| self.slots[index].is_settled())
            }
        }
    }

    /// Assemble the row in input order, re-issuing fetches for slots that
    /// delivered a value. Ends the sequence when every slot is exhausted.
    fn build_row(&mut self) -> Option<Row<T>> {
        let mut outcomes = Vec::with_capacity(self.slots.len());
        for (_index, slot) in self.slots.iter_mut().enumerate() {
            let outcome = match slot.state() {
                SlotState::InFlight => Outcome::Pending,
                SlotState::Exhausted => Outcome::Exhausted,
                SlotState::Faulted(error) => Outcome::Failed(error.clone()),
                SlotState::Ready(_) => match slot.take_and_reissue() {
                    Ok(value) => Outcome::Value(value),
                    Err(value) => {
                        #[cfg(feature = "tracing")]
                        tracing::error!(
                            "asynczip: fetch worker for slot {_index} is gone; retiring the slot"
                        );
                        #[cfg(not(feature = "tracing"))]
                        eprintln!("asynczip: fetch worker for slot {_index} is gone; retiring the slot");
                        slot.exhaust();
                        Outcome::Value(value)
                    }
                },
            };
            outcomes.push(outcome);
        }

        if self.slots.iter().all(Slot::is_exhausted) {
            self.ended = true;
            self.cancel.cancel();
            return None;
        }
        Some(Row::new(outcomes))
    }
}

impl<T> Drop for ZipHandle<T> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
