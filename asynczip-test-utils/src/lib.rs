// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for the asynczip workspace.
//!
//! Provides deterministic sources and row-rendering helpers for integration
//! tests. Designed for use in development and testing only, not for
//! production code.
//!
//! # Key Types
//!
//! ## `DelayedSource<T>`
//!
//! A source that delivers a fixed list of items, sleeping a fixed latency
//! before each delivery (exhaustion included). Under tokio's paused test
//! clock this makes completion timing exact, so aggregation scenarios are
//! fully reproducible.
//!
//! ## `FaultySource<T>`
//!
//! Like `DelayedSource`, but injects a single fetch failure at a chosen
//! position, for exercising error propagation, retry, and retirement.
//!
//! ## Row rendering
//!
//! [`render_row`] compacts a `Row<char>` into a string such as `".a~"`,
//! one character per source: the delivered value, `~` for pending, `.` for
//! exhausted, `?` for failed. [`render_rows`] joins rounds with `", "`.

pub mod delayed_source;
pub mod faulty_source;
pub mod render;

pub use delayed_source::DelayedSource;
pub use faulty_source::FaultySource;
pub use render::{render_outcome, render_row, render_rows};
