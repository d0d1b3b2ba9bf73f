// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::ZipError;

/// The resolution of a single fetch operation on a source iterator.
///
/// Exhaustion is the expected termination signal for one source; it is a
/// distinct variant rather than an error so that it can never be confused
/// with a real failure.
#[derive(Debug, Clone)]
pub enum Fetched<T> {
    /// The fetch completed with a value.
    Value(T),
    /// The source has ended; no further fetches will be issued for it.
    Exhausted,
    /// The fetch completed with a failure that is not exhaustion.
    Failed(ZipError),
}

impl<T: PartialEq> PartialEq for Fetched<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Fetched::Value(a), Fetched::Value(b)) => a == b,
            (Fetched::Exhausted, Fetched::Exhausted) => true,
            // Failures are never equal
            _ => false,
        }
    }
}

impl<T> Fetched<T> {
    /// Returns `true` if this is a `Value`.
    pub const fn is_value(&self) -> bool {
        matches!(self, Fetched::Value(_))
    }

    /// Returns `true` if this is `Exhausted`.
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, Fetched::Exhausted)
    }

    /// Returns `true` if this is a `Failed`.
    pub const fn is_failed(&self) -> bool {
        matches!(self, Fetched::Failed(_))
    }

    /// Converts into `Option<T>`, discarding exhaustion and failures.
    pub fn ok(self) -> Option<T> {
        match self {
            Fetched::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Maps a `Fetched<T>` to `Fetched<U>` by applying a function to the
    /// contained value. Exhaustion and failures pass through unchanged.
    pub fn map<U, F>(self, f: F) -> Fetched<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Fetched::Value(v) => Fetched::Value(f(v)),
            Fetched::Exhausted => Fetched::Exhausted,
            Fetched::Failed(e) => Fetched::Failed(e),
        }
    }
}
