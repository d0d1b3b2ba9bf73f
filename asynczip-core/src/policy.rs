// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// When an aggregated round is considered ready to emit.
///
/// The policy is fixed for the lifetime of one aggregator. It only affects
/// how long a round waits; row layout always follows input-source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WaitPolicy {
    /// Emit as soon as any still-active source answers, like `select`.
    /// The remaining sources appear as `Pending` in the emitted row.
    #[default]
    FirstCompleted,
    /// Emit only once every still-active source has answered, like `zip`.
    AllCompleted,
}

impl WaitPolicy {
    /// Returns `true` for [`WaitPolicy::FirstCompleted`].
    pub const fn is_first_completed(&self) -> bool {
        matches!(self, WaitPolicy::FirstCompleted)
    }

    /// Returns `true` for [`WaitPolicy::AllCompleted`].
    pub const fn is_all_completed(&self) -> bool {
        matches!(self, WaitPolicy::AllCompleted)
    }
}
