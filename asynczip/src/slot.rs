// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Per-source bookkeeping for the aggregator.
//!
//! One [`Slot`] exists per input source, index-stable for the aggregator's
//! lifetime. The slot does not own the source's iterator; the slot's fetch
//! worker does. The slot tracks the state of the worker's current fetch and
//! holds the resume channel that tells the worker to issue the next one.

use asynczip_core::{Fetched, ZipError};
use tokio::sync::mpsc;

/// State of a slot's most recent fetch operation.
#[derive(Debug)]
pub(crate) enum SlotState<T> {
    /// The fetch has not resolved yet.
    InFlight,
    /// The fetch delivered a value that has not been reported in a row yet.
    Ready(T),
    /// The fetch failed; the failure is re-reported every round until the
    /// caller retries or retires the slot.
    Faulted(ZipError),
    /// The source has ended. Terminal: never leaves this state.
    Exhausted,
}

#[derive(Debug)]
pub(crate) struct Slot<T> {
    state: SlotState<T>,
    /// Dropped on exhaustion so the worker can observe retirement.
    resume: Option<mpsc::UnboundedSender<()>>,
}

impl<T> Slot<T> {
    /// A freshly started slot: its worker issues the first fetch on its own.
    pub(crate) fn new(resume: mpsc::UnboundedSender<()>) -> Self {
        Self {
            state: SlotState::InFlight,
            resume: Some(resume),
        }
    }

    pub(crate) fn state(&self) -> &SlotState<T> {
        &self.state
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        matches!(self.state, SlotState::Exhausted)
    }

    /// A settled slot no longer blocks the round's ready predicate.
    pub(crate) fn is_settled(&self) -> bool {
        !matches!(self.state, SlotState::InFlight)
    }

    /// Record the resolution of the slot's in-flight fetch.
    ///
    /// Exhaustion is applied eagerly and permanently; the worker has already
    /// stopped by the time it is observed here.
    pub(crate) fn resolve(&mut self, fetched: Fetched<T>) {
        if self.is_exhausted() {
            return;
        }
        self.state = match fetched {
            Fetched::Value(value) => SlotState::Ready(value),
            Fetched::Failed(error) => SlotState::Faulted(error),
            Fetched::Exhausted => {
                self.resume = None;
                SlotState::Exhausted
            }
        };
    }

    /// Take the delivered value and ask the worker for the next fetch.
    ///
    /// Returns `Err` with the value if the worker is gone and the fetch could
    /// not be re-issued.
    pub(crate) fn take_and_reissue(&mut self) -> Result<T, T> {
        match core::mem::replace(&mut self.state, SlotState::InFlight) {
            SlotState::Ready(value) => match self.reissue() {
                Ok(()) => Ok(value),
                Err(()) => Err(value),
            },
            _ => unreachable!("take_and_reissue is only called on a Ready slot"),
        }
    }

    /// Tell the worker to issue a fresh fetch.
    pub(crate) fn reissue(&mut self) -> Result<(), ()> {
        self.state = SlotState::InFlight;
        match &self.resume {
            Some(resume) => resume.send(()).map_err(|_| ()),
            None => Err(()),
        }
    }

    /// Mark the slot exhausted and release its worker.
    pub(crate) fn exhaust(&mut self) {
        self.state = SlotState::Exhausted;
        self.resume = None;
    }
}
