// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Deterministic model ranking
//!
//! A total-order comparator over classified models with provider-aware
//! tie-breaking. The same input always sorts the same way, whatever order
//! the upstream catalogs delivered it in; the hierarchy builder depends on
//! that.
//!
//! Comparison proceeds through fixed stages: provider priority, then
//! provider-specific type rules (with special handling for OpenAI Mini and
//! GPT-4 families), then a universal fallback of descending parsed version
//! and ascending name.

use std::cmp::Ordering;

use crate::catalog::ClassifiedModel;
use crate::classify::{
    TYPE_FLASH, TYPE_FLASH_LITE, TYPE_GEMMA, TYPE_GPT_35, TYPE_GPT_4, TYPE_GPT_45, TYPE_HAIKU,
    TYPE_MINI, TYPE_OPUS, TYPE_O_SERIES, TYPE_PRO, TYPE_SONNET, TYPE_STANDARD, TYPE_THINKING,
};

/// Providers ranked for display; anything absent ranks last
const PROVIDER_PRIORITY: &[(&str, i32)] = &[
    ("gemini", 0),
    ("openai", 1),
    ("openrouter", 2),
    ("anthropic", 3),
    ("claude", 3),
];
const UNKNOWN_PROVIDER_PRIORITY: i32 = 100;

const GEMINI_TYPE_PRIORITY: &[(&str, i32)] = &[
    (TYPE_FLASH_LITE, 0),
    (TYPE_FLASH, 1),
    (TYPE_PRO, 2),
    (TYPE_THINKING, 3),
    (TYPE_GEMMA, 4),
    (TYPE_STANDARD, 5),
];
const GEMINI_UNKNOWN_TYPE_PRIORITY: i32 = 5;

const OPENAI_TYPE_PRIORITY: &[(&str, i32)] = &[
    (TYPE_MINI, 0),
    (TYPE_O_SERIES, 1),
    (TYPE_GPT_45, 2),
    (TYPE_GPT_4, 3),
    (TYPE_GPT_35, 4),
];
const OPENAI_OTHER_TYPE_PRIORITY: i32 = 5;

const CLAUDE_TYPE_PRIORITY: &[(&str, i32)] = &[
    (TYPE_SONNET, 0),
    (TYPE_OPUS, 1),
    (TYPE_HAIKU, 2),
];
const CLAUDE_OTHER_TYPE_PRIORITY: i32 = 3;

/// Total-order comparator for classified models
#[derive(Debug, Clone, Copy, Default)]
pub struct RankingEngine;

impl RankingEngine {
    pub fn new() -> Self {
        Self
    }

    /// Stable-sort a model list into display order
    pub fn sort(&self, models: &mut [ClassifiedModel]) {
        models.sort_by(|a, b| self.compare(a, b));
    }

    /// Compare two models; see the module docs for the stage order
    pub fn compare(&self, a: &ClassifiedModel, b: &ClassifiedModel) -> Ordering {
        let provider_a = a.provider.as_str();
        let provider_b = b.provider.as_str();

        let rank_a = provider_priority(provider_a);
        let rank_b = provider_priority(provider_b);
        if rank_a != rank_b {
            return rank_a.cmp(&rank_b);
        }

        let type_a = type_or_standard(&a.model_type);
        let type_b = type_or_standard(&b.model_type);
        let name_a = sort_name(a);
        let name_b = sort_name(b);

        // OpenAI Mini models have their own name-based ordering
        if provider_a == "openai"
            && type_a.eq_ignore_ascii_case(TYPE_MINI)
            && type_b.eq_ignore_ascii_case(TYPE_MINI)
        {
            let mini_a = mini_priority(&name_a);
            let mini_b = mini_priority(&name_b);
            if mini_a != mini_b {
                return mini_a.cmp(&mini_b);
            }
            if let Some(ordering) = version_desc(a, b) {
                return ordering;
            }
            return name_a.cmp(&name_b);
        }

        if provider_a == "gemini" {
            let rank_a = table_priority(GEMINI_TYPE_PRIORITY, type_a, GEMINI_UNKNOWN_TYPE_PRIORITY);
            let rank_b = table_priority(GEMINI_TYPE_PRIORITY, type_b, GEMINI_UNKNOWN_TYPE_PRIORITY);
            if rank_a != rank_b {
                return rank_a.cmp(&rank_b);
            }
        } else if provider_a == "openai" {
            let rank_a = table_priority(OPENAI_TYPE_PRIORITY, type_a, OPENAI_OTHER_TYPE_PRIORITY);
            let rank_b = table_priority(OPENAI_TYPE_PRIORITY, type_b, OPENAI_OTHER_TYPE_PRIORITY);
            if rank_a != rank_b {
                return rank_a.cmp(&rank_b);
            }

            // Within GPT-4: the base 4o model first, then other 4o variants
            if type_a == TYPE_GPT_4 && type_b == TYPE_GPT_4 {
                let base_a = name_a == "gpt-4o" || name_a == "4o";
                let base_b = name_b == "gpt-4o" || name_b == "4o";
                if base_a != base_b {
                    return base_b.cmp(&base_a);
                }
                let variant_a = name_a.contains("4o") && !name_a.contains("4o-mini");
                let variant_b = name_b.contains("4o") && !name_b.contains("4o-mini");
                if variant_a != variant_b {
                    return variant_b.cmp(&variant_a);
                }
            }

            // The "other" bucket prefers shorter names; equal lengths fall
            // through to the universal tie-break
            if rank_a == OPENAI_OTHER_TYPE_PRIORITY && rank_b == OPENAI_OTHER_TYPE_PRIORITY {
                match name_a.len().cmp(&name_b.len()) {
                    Ordering::Equal => {}
                    ordering => return ordering,
                }
            }
        } else if provider_a == "anthropic" || provider_a == "claude" {
            let rank_a = table_priority(CLAUDE_TYPE_PRIORITY, type_a, CLAUDE_OTHER_TYPE_PRIORITY);
            let rank_b = table_priority(CLAUDE_TYPE_PRIORITY, type_b, CLAUDE_OTHER_TYPE_PRIORITY);
            if rank_a != rank_b {
                return rank_a.cmp(&rank_b);
            }
        }

        // Universal fallback: version descending, then name ascending
        if let Some(ordering) = version_desc(a, b) {
            return ordering;
        }
        name_a.cmp(&name_b)
    }
}

fn provider_priority(provider: &str) -> i32 {
    PROVIDER_PRIORITY
        .iter()
        .find(|(name, _)| *name == provider)
        .map(|(_, priority)| *priority)
        .unwrap_or(UNKNOWN_PROVIDER_PRIORITY)
}

fn table_priority(table: &[(&str, i32)], model_type: &str, fallback: i32) -> i32 {
    table
        .iter()
        .find(|(name, _)| *name == model_type)
        .map(|(_, priority)| *priority)
        .unwrap_or(fallback)
}

fn type_or_standard(model_type: &str) -> &str {
    if model_type.is_empty() {
        TYPE_STANDARD
    } else {
        model_type
    }
}

/// Lowercased name for ordering, falling back to the id
fn sort_name(model: &ClassifiedModel) -> String {
    model
        .name
        .as_deref()
        .unwrap_or(&model.id)
        .to_lowercase()
}

/// Name priority within the OpenAI Mini family: exact base names first, then
/// substring matches, 4o before o1
fn mini_priority(name: &str) -> i32 {
    if name == "4o-mini" || name == "gpt-4o-mini" {
        0
    } else if name == "o1-mini" || name == "gpt-o1-mini" {
        1
    } else if name.contains("4o-mini") {
        2
    } else if name.contains("o1-mini") {
        3
    } else {
        4
    }
}

/// Parse the version field as a float, stripping non-numeric characters;
/// unparseable versions read as 0
fn version_number(model: &ClassifiedModel) -> f64 {
    let digits: String = model
        .version
        .as_deref()
        .unwrap_or_default()
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    digits.parse::<f64>().unwrap_or(0.0)
}

/// Descending version comparison; None when the versions tie
fn version_desc(a: &ClassifiedModel, b: &ClassifiedModel) -> Option<Ordering> {
    let version_a = version_number(a);
    let version_b = version_number(b);
    if version_a == version_b {
        None
    } else {
        version_b.partial_cmp(&version_a)
    }
}
