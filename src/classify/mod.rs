// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Model classification engine
//!
//! Turns raw model identifiers into fully classified models: provider,
//! series, type, variant, context window, capabilities and flags. The engine
//! is a closed rule set over known provider naming conventions; its value is
//! exact reproducibility, so the pattern tables below are ordered and the
//! order is part of the contract.

pub mod classifier;
pub mod context;
pub mod patterns;

pub use classifier::ModelClassifier;
pub use context::ContextResolver;
pub use patterns::PatternMatcher;

// Series labels
pub const SERIES_CLAUDE_3: &str = "Claude 3";
pub const SERIES_CLAUDE_2: &str = "Claude 2";
pub const SERIES_CLAUDE_1: &str = "Claude 1";
pub const SERIES_GENERAL: &str = "General";

// OpenAI type labels
pub const TYPE_O_SERIES: &str = "O Series";
pub const TYPE_GPT_35: &str = "GPT 3.5";
pub const TYPE_GPT_4: &str = "GPT 4";
pub const TYPE_GPT_45: &str = "GPT 4.5";
pub const TYPE_MINI: &str = "Mini";

// Anthropic type labels
pub const TYPE_OPUS: &str = "Opus";
pub const TYPE_SONNET: &str = "Sonnet";
pub const TYPE_HAIKU: &str = "Haiku";

// Gemini type labels
pub const TYPE_PRO: &str = "Pro";
pub const TYPE_GEMMA: &str = "Gemma";
pub const TYPE_FLASH_LITE: &str = "Flash Lite";
pub const TYPE_FLASH: &str = "Flash";
pub const TYPE_THINKING: &str = "Thinking";

// Cross-provider type labels
pub const TYPE_VISION: &str = "Vision";
pub const TYPE_STANDARD: &str = "Standard";
pub const TYPE_EMBEDDING: &str = "Embedding";
pub const TYPE_IMAGE_GENERATION: &str = "Image Generation";

// Capability tags
pub const CAP_VISION: &str = "vision";
pub const CAP_FUNCTION_CALLING: &str = "function-calling";
pub const CAP_EMBEDDING: &str = "embedding";
pub const CAP_AUDIO: &str = "audio";
pub const CAP_CHAT: &str = "chat";
