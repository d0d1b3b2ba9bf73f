// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! End-to-end aggregation scenarios.
//!
//! Each test drives three delayed sources through a consumer that sleeps a
//! fixed lag between rounds, then asserts the full rendered run. Tests run
//! under tokio's paused clock, so sleeps resolve at exact virtual instants
//! and the runs are fully deterministic. Latencies are chosen so that no two
//! fetch completions ever share an instant.

use std::time::Duration;

use asynczip::{AsyncSource, AsyncZip, WaitPolicy};
use asynczip_test_utils::{render_rows, DelayedSource};
use tokio::time::sleep;

/// Sources given as (items, per-item latency in ms); one char per item.
async fn run_scenario(sources: &[(&str, u64)], policy: WaitPolicy, lag_ms: u64) -> String {
    let zip = AsyncZip::new(policy).sources(
        sources
            .iter()
            .map(|&(items, latency)| DelayedSource::from_chars(items, latency).boxed()),
    );
    let mut handle = zip.start().await;

    let mut rows = Vec::new();
    while let Some(row) = handle.next_row().await {
        rows.push(row);
        sleep(Duration::from_millis(lag_ms)).await;
    }
    render_rows(&rows)
}

#[tokio::test(start_paused = true)]
async fn test_first_completed_with_eager_consumer() {
    let got = run_scenario(
        &[("123", 0), ("abcd", 100), ("ABCD", 249)],
        WaitPolicy::FirstCompleted,
        10,
    )
    .await;
    assert_eq!(got, "1~~, 2~~, 3~~, .a~, .b~, .~A, .c~, .d~, .~B, ..C, ..D");
}

#[tokio::test(start_paused = true)]
async fn test_first_completed_with_lagging_consumer() {
    let got = run_scenario(
        &[("123", 0), ("abcd", 100), ("ABCD", 250)],
        WaitPolicy::FirstCompleted,
        470,
    )
    .await;
    assert_eq!(got, "1~~, 2aA, 3bB, .cC, .dD");
}

#[tokio::test(start_paused = true)]
async fn test_first_completed_with_moderate_lag() {
    let got = run_scenario(
        &[("123", 0), ("abcd", 100), ("ABCD", 250)],
        WaitPolicy::FirstCompleted,
        200,
    )
    .await;
    assert_eq!(got, "1~~, 2a~, 3bA, .c~, .dB, ..C, ..D");
}

#[tokio::test(start_paused = true)]
async fn test_first_completed_with_inverted_latencies() {
    let got = run_scenario(
        &[("123", 0), ("abcd", 300), ("ABCD", 100)],
        WaitPolicy::FirstCompleted,
        200,
    )
    .await;
    assert_eq!(got, "1~~, 2~A, 3aB, .~C, .bD, .c., .d.");
}

#[tokio::test(start_paused = true)]
async fn test_all_completed_with_eager_consumer() {
    let got = run_scenario(
        &[("123", 0), ("abcd", 100), ("ABCD", 250)],
        WaitPolicy::AllCompleted,
        10,
    )
    .await;
    assert_eq!(got, "1aA, 2bB, 3cC, .dD");
}

#[tokio::test(start_paused = true)]
async fn test_all_completed_with_uneven_sources() {
    let got = run_scenario(
        &[("12", 0), ("abcd", 100), ("ABCDE", 250)],
        WaitPolicy::AllCompleted,
        10,
    )
    .await;
    assert_eq!(got, "1aA, 2bB, .cC, .dD, ..E");
}

// All-completed waits absorb consumer timing: a lag comparable to the source
// latencies must not change the emitted sequence.
#[tokio::test(start_paused = true)]
async fn test_all_completed_is_lag_insensitive() {
    let got = run_scenario(
        &[("12", 0), ("abcd", 100), ("ABCDE", 250)],
        WaitPolicy::AllCompleted,
        210,
    )
    .await;
    assert_eq!(got, "1aA, 2bB, .cC, .dD, ..E");
}
