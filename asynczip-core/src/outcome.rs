// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Per-round results: one [`Outcome`] per source, collected into a [`Row`].

use core::ops::Index;

use crate::error::ZipError;

/// What one aggregated round reports for a single source.
#[derive(Debug, Clone)]
pub enum Outcome<T> {
    /// The source delivered a value this round.
    Value(T),
    /// The source's fetch had not resolved when the round was emitted.
    Pending,
    /// The source has ended, this round or previously.
    Exhausted,
    /// The source's fetch failed with something other than exhaustion.
    Failed(ZipError),
}

impl<T: PartialEq> PartialEq for Outcome<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Outcome::Value(a), Outcome::Value(b)) => a == b,
            (Outcome::Pending, Outcome::Pending) => true,
            (Outcome::Exhausted, Outcome::Exhausted) => true,
            // Failures are never equal
            _ => false,
        }
    }
}

impl<T> Outcome<T> {
    /// Returns `true` if this is a `Value`.
    pub const fn is_value(&self) -> bool {
        matches!(self, Outcome::Value(_))
    }

    /// Returns `true` if this is `Pending`.
    pub const fn is_pending(&self) -> bool {
        matches!(self, Outcome::Pending)
    }

    /// Returns `true` if this is `Exhausted`.
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, Outcome::Exhausted)
    }

    /// Returns `true` if this is a `Failed`.
    pub const fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }

    /// Borrows the delivered value, if any.
    pub const fn value(&self) -> Option<&T> {
        match self {
            Outcome::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Converts into `Option<T>`, discarding everything but values.
    pub fn into_value(self) -> Option<T> {
        match self {
            Outcome::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Borrows the failure, if any.
    pub const fn error(&self) -> Option<&ZipError> {
        match self {
            Outcome::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Maps an `Outcome<T>` to `Outcome<U>` by applying a function to the
    /// contained value. All other variants pass through unchanged.
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Value(v) => Outcome::Value(f(v)),
            Outcome::Pending => Outcome::Pending,
            Outcome::Exhausted => Outcome::Exhausted,
            Outcome::Failed(e) => Outcome::Failed(e),
        }
    }
}

/// One aggregated round: an ordered sequence of per-source outcomes.
///
/// `row[i]` always corresponds to the i-th source given at construction,
/// regardless of the order in which sources completed. The length equals the
/// source count for every row the aggregator ever emits.
#[derive(Debug, Clone, PartialEq)]
pub struct Row<T>(Vec<Outcome<T>>);

impl<T> Row<T> {
    /// Build a row from outcomes already in input-source order.
    pub fn new(outcomes: Vec<Outcome<T>>) -> Self {
        Self(outcomes)
    }

    /// Number of sources, and therefore entries, in this row.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the aggregator was built with zero sources.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The outcome for source `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Outcome<T>> {
        self.0.get(index)
    }

    /// All outcomes, in input-source order.
    pub fn outcomes(&self) -> &[Outcome<T>] {
        &self.0
    }

    /// Iterate over the outcomes in input-source order.
    pub fn iter(&self) -> core::slice::Iter<'_, Outcome<T>> {
        self.0.iter()
    }

    /// Consume the row, yielding the outcomes in input-source order.
    pub fn into_outcomes(self) -> Vec<Outcome<T>> {
        self.0
    }
}

impl<T> Index<usize> for Row<T> {
    type Output = Outcome<T>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T> IntoIterator for Row<T> {
    type Item = Outcome<T>;
    type IntoIter = std::vec::IntoIter<Outcome<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Row<T> {
    type Item = &'a Outcome<T>;
    type IntoIter = core::slice::Iter<'a, Outcome<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
