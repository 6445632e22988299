// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Pattern tables and provider-specific matching helpers
//!
//! All tables are ordered: within a table the first pattern that occurs as a
//! substring of the lowercased model id wins. Reordering entries changes
//! classification results, so the sequences below must stay as they are.

use crate::catalog::Provider;

use super::{
    CAP_AUDIO, CAP_CHAT, CAP_EMBEDDING, CAP_FUNCTION_CALLING, CAP_VISION, SERIES_CLAUDE_1,
    SERIES_CLAUDE_2, SERIES_CLAUDE_3, TYPE_EMBEDDING, TYPE_FLASH, TYPE_FLASH_LITE, TYPE_GEMMA,
    TYPE_GPT_35, TYPE_GPT_4, TYPE_GPT_45, TYPE_HAIKU, TYPE_IMAGE_GENERATION, TYPE_MINI,
    TYPE_OPUS, TYPE_O_SERIES, TYPE_PRO, TYPE_SONNET, TYPE_STANDARD, TYPE_THINKING, TYPE_VISION,
};

/// Provider detection patterns, checked provider by provider in this order
const PROVIDER_PATTERNS: &[(Provider, &[&str])] = &[
    (Provider::OpenAi, &["openai", "gpt", "o1", "dall-e"]),
    (Provider::Anthropic, &["anthropic", "claude"]),
    (Provider::Gemini, &["gemini", "google"]),
    (Provider::Meta, &["meta", "llama", "meta-llama"]),
    (Provider::Mistral, &["mistral", "mixtral"]),
    (Provider::OpenRouter, &["openrouter"]),
];

/// Series detection patterns
const SERIES_PATTERNS: &[(&str, &[&str])] = &[
    (
        SERIES_CLAUDE_3,
        &["claude-3", "claude3", "claude-3.5", "claude-3.7"],
    ),
    (SERIES_CLAUDE_2, &["claude-2", "claude2"]),
    (SERIES_CLAUDE_1, &["claude-1", "claude1", "claude-instant"]),
    ("Gemini 1.0", &["gemini-1.0", "gemini-1.0-pro"]),
    (
        "Gemini 1.5",
        &["gemini-1.5", "gemini-1.5-pro", "gemini-1.5-flash"],
    ),
    (
        "Gemini 2.0",
        &["gemini-2.0", "gemini-2.0-pro", "gemini-2.0-flash"],
    ),
    (
        "Gemini 2.5",
        &["gemini-2.5", "gemini-2.5-pro", "gemini-2.5-flash"],
    ),
    ("Gemma 2", &["gemma-2"]),
    (
        TYPE_IMAGE_GENERATION,
        &["dall-e", "imagen", "midjourney", "stable-diffusion"],
    ),
    (TYPE_EMBEDDING, &["embedding", "text-embedding", "embed"]),
];

/// Generic type detection patterns
const TYPE_PATTERNS: &[(&str, &[&str])] = &[
    (TYPE_O_SERIES, &["o1", "o3", "o4"]),
    (TYPE_GPT_35, &["gpt-3.5", "gpt3.5"]),
    (TYPE_GPT_4, &["gpt-4", "gpt4", "gpt-4o"]),
    (TYPE_GPT_45, &["gpt-4.5", "gpt4.5"]),
    (TYPE_MINI, &["mini"]),
    (TYPE_OPUS, &["opus"]),
    (TYPE_SONNET, &["sonnet"]),
    (TYPE_HAIKU, &["haiku"]),
    (TYPE_PRO, &["pro"]),
    (TYPE_FLASH_LITE, &["flash-lite"]),
    (TYPE_FLASH, &["flash"]),
    (TYPE_THINKING, &["thinking"]),
    (TYPE_VISION, &["vision", "multimodal"]),
    (TYPE_EMBEDDING, &["embedding", "embed", "tts"]),
];

/// Name-based capability hint patterns
const CAPABILITY_PATTERNS: &[(&str, &[&str])] = &[
    (CAP_VISION, &["vision", "image", "multimodal"]),
    (CAP_FUNCTION_CALLING, &["function", "tool", "api"]),
    (CAP_EMBEDDING, &["embedding", "embed", "vector"]),
    (CAP_AUDIO, &["whisper", "tts", "speech", "audio"]),
    (CAP_CHAT, &["chat", "conversation", "completion"]),
];

/// Pattern-based identification over the static tables above
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternMatcher;

impl PatternMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Match a provider by exact (case-insensitive) name; an empty name
    /// matches nothing
    pub fn provider_by_name(&self, name: &str) -> Option<Provider> {
        Provider::from_name(name)
    }

    /// Match a provider by the first pattern found in the model name
    pub fn provider_by_pattern(&self, model_name: &str) -> Option<Provider> {
        let lower = model_name.to_lowercase();
        for (provider, patterns) in PROVIDER_PATTERNS {
            if patterns.iter().any(|p| lower.contains(p)) {
                return Some(*provider);
            }
        }
        None
    }

    /// Match the Claude series, newest generation first
    pub fn claude_series(&self, model_name: &str) -> Option<&'static str> {
        let lower = model_name.to_lowercase();
        [SERIES_CLAUDE_3, SERIES_CLAUDE_2, SERIES_CLAUDE_1]
            .into_iter()
            .find(|series| {
                Self::series_patterns(series)
                    .iter()
                    .any(|p| lower.contains(p))
            })
    }

    /// Match the Gemini series by version token; unknown versions read as 1.0
    pub fn gemini_series(&self, model_name: &str) -> String {
        let lower = model_name.to_lowercase();
        let version = if lower.contains("2.5") {
            "2.5"
        } else if lower.contains("2.0") {
            "2.0"
        } else if lower.contains("1.5") {
            "1.5"
        } else {
            "1.0"
        };
        format!("Gemini {version}")
    }

    /// Match a series by the generic pattern table
    pub fn series_by_pattern(&self, model_name: &str) -> Option<&'static str> {
        let lower = model_name.to_lowercase();
        for (series, patterns) in SERIES_PATTERNS {
            if patterns.iter().any(|p| lower.contains(p)) {
                return Some(*series);
            }
        }
        None
    }

    /// OpenAI type, most specific token first
    pub fn openai_type(&self, model_name: &str) -> &'static str {
        let lower = model_name.to_lowercase();
        if lower.contains("mini") {
            TYPE_MINI
        } else if lower.contains("o1") || lower.contains("o3") {
            TYPE_O_SERIES
        } else if lower.contains("gpt-4.5") || lower.contains("gpt4.5") {
            TYPE_GPT_45
        } else if lower.contains("gpt-4") || lower.contains("gpt4") {
            TYPE_GPT_4
        } else if lower.contains("gpt-3.5") || lower.contains("gpt3.5") {
            TYPE_GPT_35
        } else {
            TYPE_STANDARD
        }
    }

    /// Anthropic type
    pub fn anthropic_type(&self, model_name: &str) -> &'static str {
        let lower = model_name.to_lowercase();
        if lower.contains("opus") {
            TYPE_OPUS
        } else if lower.contains("sonnet") {
            TYPE_SONNET
        } else if lower.contains("haiku") {
            TYPE_HAIKU
        } else {
            TYPE_STANDARD
        }
    }

    /// Gemini type; "flash-lite" must win over "flash"
    pub fn gemini_type(&self, model_name: &str) -> &'static str {
        let lower = model_name.to_lowercase();
        if lower.contains("flash-lite") {
            TYPE_FLASH_LITE
        } else if lower.contains("thinking") {
            TYPE_THINKING
        } else if lower.contains("flash") {
            TYPE_FLASH
        } else if lower.contains("pro") {
            TYPE_PRO
        } else if lower.contains("gemma") {
            TYPE_GEMMA
        } else {
            TYPE_STANDARD
        }
    }

    /// Match a type by the generic pattern table
    pub fn type_by_pattern(&self, model_name: &str) -> Option<&'static str> {
        let lower = model_name.to_lowercase();
        for (model_type, patterns) in TYPE_PATTERNS {
            if patterns.iter().any(|p| lower.contains(p)) {
                return Some(*model_type);
            }
        }
        None
    }

    /// OpenAI variant label, fixed precedence
    pub fn openai_variant(&self, model_name: &str) -> Option<&'static str> {
        let lower = model_name.to_lowercase();
        if lower.contains("gpt-4.5") {
            Some("GPT-4.5")
        } else if lower.contains("gpt-4o-mini") {
            Some("GPT-4o Mini")
        } else if lower.contains("gpt-4o") {
            Some("GPT-4o")
        } else if lower.contains("gpt-4-turbo") {
            Some("GPT-4 Turbo")
        } else if lower.contains("gpt-4-vision") {
            Some("GPT-4 Vision")
        } else if lower.contains("o1-mini") {
            Some("O1 Mini")
        } else if lower.contains("o1") {
            Some("O1")
        } else {
            None
        }
    }

    /// Anthropic variant label, fixed precedence
    pub fn anthropic_variant(&self, model_name: &str) -> Option<&'static str> {
        let lower = model_name.to_lowercase();
        if lower.contains("claude-3.7") {
            Some("Claude 3.7")
        } else if lower.contains("3.5") {
            Some("Claude 3.5")
        } else if lower.contains("claude-3") {
            Some("Claude 3.0")
        } else if lower.contains("claude-2") {
            Some("Claude 2.0")
        } else if lower.contains("claude-instant") {
            Some("Claude Instant")
        } else {
            None
        }
    }

    /// Compose a Gemini variant from the version and type tokens, degrading
    /// gracefully when either piece is missing
    pub fn gemini_variant(&self, model_name: &str) -> Option<String> {
        let lower = model_name.to_lowercase();

        let version = if lower.contains("2.5") {
            "2.5"
        } else if lower.contains("2.0") {
            "2.0"
        } else if lower.contains("1.5") {
            "1.5"
        } else if lower.contains("1.0") {
            "1.0"
        } else {
            ""
        };

        let model_type = if lower.contains("flash-lite") {
            TYPE_FLASH_LITE
        } else if lower.contains("thinking") {
            TYPE_THINKING
        } else if lower.contains("flash") {
            TYPE_FLASH
        } else if lower.contains("pro") {
            TYPE_PRO
        } else {
            ""
        };

        match (version.is_empty(), model_type.is_empty()) {
            (false, false) => Some(format!("Gemini {version} {model_type}")),
            (false, true) => Some(format!("Gemini {version}")),
            (true, false) => Some(format!("Gemini {model_type}")),
            (true, true) => None,
        }
    }

    /// Rule-based capability assignment.
    ///
    /// `model_type` here is the generic pattern-matched type, not the
    /// provider-specific one: "gpt-4o-mini" ranks as "Mini" within OpenAI but
    /// still carries the GPT-4 capability set.
    pub fn capability_flags(
        &self,
        model_type: &str,
        model_name: &str,
        series: &str,
    ) -> Vec<&'static str> {
        let lower = model_name.to_lowercase();
        let mut capabilities = Vec::new();

        if lower.contains("vision")
            || lower.contains("multimodal")
            || [TYPE_GPT_4, TYPE_GPT_45, TYPE_O_SERIES].contains(&model_type)
            || series == SERIES_CLAUDE_3
            || lower.contains("4o")
            || series.starts_with("Gemini")
        {
            capabilities.push(CAP_VISION);
        }

        if [TYPE_GPT_4, TYPE_GPT_45, TYPE_GPT_35, TYPE_O_SERIES].contains(&model_type)
            || series == SERIES_CLAUDE_3
            || series.starts_with("Gemini")
        {
            capabilities.push(CAP_FUNCTION_CALLING);
        }

        capabilities
    }

    /// Name-based capability hints from the capability pattern table
    pub fn capability_hints(&self, model_name: &str) -> Vec<&'static str> {
        let lower = model_name.to_lowercase();
        CAPABILITY_PATTERNS
            .iter()
            .filter(|(_, patterns)| patterns.iter().any(|p| lower.contains(p)))
            .map(|(capability, _)| *capability)
            .collect()
    }

    fn series_patterns(series: &str) -> &'static [&'static str] {
        SERIES_PATTERNS
            .iter()
            .find(|(name, _)| *name == series)
            .map(|(_, patterns)| *patterns)
            .unwrap_or(&[])
    }
}
