// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Context-window display buckets

/// Map a context-window size to its coarse display bucket.
///
/// Negative sizes fall into the last arm alongside the very large ones.
pub fn context_window_bucket(size: i32) -> &'static str {
    match size {
        0..=10_000 => "Small (< 10K)",
        10_001..=100_000 => "Medium (10K-100K)",
        100_001..=200_000 => "Large (100K-200K)",
        _ => "Very Large (> 200K)",
    }
}
