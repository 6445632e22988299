// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Context-window resolution
//!
//! Maps a model id to its context window in tokens. Known models are covered
//! by an ordered substring table; anything else falls back to per-family
//! heuristics, and a full miss resolves to 0.

/// Known context windows, checked in order; the first substring hit in the
/// lowercased id wins, so more specific entries sit before their prefixes
/// ("gpt-4-32k" before "gpt-4", "gemini-2.0-flash-lite" before
/// "gemini-2.0-flash").
const CONTEXT_SIZES: &[(&str, i32)] = &[
    // OpenAI
    ("gpt-4.5", 128_000),
    ("gpt-4o-mini", 128_000),
    ("gpt-4o", 128_000),
    ("gpt-4-turbo", 128_000),
    ("gpt-4-vision", 128_000),
    ("gpt-4-32k", 32_768),
    ("gpt-4", 8_192),
    ("gpt-3.5-turbo-16k", 16_385),
    ("gpt-3.5-turbo", 4_096),
    ("o1-mini", 32_768),
    ("o1", 32_768),
    // Claude
    ("claude-3.5-sonnet", 200_000),
    ("claude-3.7-opus", 200_000),
    ("claude-3-opus", 200_000),
    ("claude-3-sonnet", 200_000),
    ("claude-3-haiku", 200_000),
    ("claude-2", 100_000),
    ("claude-instant", 100_000),
    // Gemini
    ("gemini-1.0-pro", 32_768),
    ("gemini-1.5-pro", 1_000_000),
    ("gemini-1.5-flash", 1_000_000),
    ("gemini-2.0-pro", 2_000_000),
    ("gemini-2.0-flash-lite", 1_000_000),
    ("gemini-2.0-flash", 1_000_000),
];

/// Resolves a model id to a token context-window size
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextResolver;

impl ContextResolver {
    pub fn new() -> Self {
        Self
    }

    /// Look the id up in the table, then fall back to family heuristics.
    /// Unknown models resolve to 0.
    pub fn resolve(&self, model_id: &str) -> i32 {
        let lower = model_id.to_lowercase();
        for (pattern, size) in CONTEXT_SIZES {
            if lower.contains(pattern) {
                return *size;
            }
        }
        Self::family_fallback(&lower)
    }

    /// Heuristics for model families without a table entry
    fn family_fallback(lower: &str) -> i32 {
        if lower.contains("gpt-4.5") {
            return 128_000;
        }
        if lower.contains("gpt-4") {
            if lower.contains("32k") {
                return 32_768;
            }
            if lower.contains("turbo") || lower.contains('o') {
                return 128_000;
            }
            return 8_192;
        }
        if lower.contains("gpt-3.5") {
            if lower.contains("16k") {
                return 16_385;
            }
            return 4_096;
        }
        if lower.contains("claude-3") {
            return 200_000;
        }
        if lower.contains("claude-2") || lower.contains("claude-instant") {
            return 100_000;
        }
        if lower.contains("gemini-1.0") {
            return 32_768;
        }
        if lower.contains("gemini-1.5") || lower.contains("gemini-2.0") {
            return 1_000_000;
        }
        0
    }
}
