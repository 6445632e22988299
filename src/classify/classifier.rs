// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Model classifier
//!
//! Orchestrates the pattern matcher and the context resolver into one
//! `ClassifiedModel` per descriptor. Classification is total: any well-typed
//! descriptor classifies without error, and an empty id resolves to the
//! documented defaults (provider "other", series "General", type "Standard",
//! capabilities ["chat"], context 0).

use crate::catalog::{ClassifiedModel, ModelDescriptor, Provider};

use super::context::ContextResolver;
use super::patterns::PatternMatcher;
use super::{
    CAP_CHAT, CAP_EMBEDDING, CAP_VISION, SERIES_GENERAL, TYPE_EMBEDDING, TYPE_IMAGE_GENERATION,
    TYPE_STANDARD,
};

/// Classifier for model identification and metadata population
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelClassifier {
    patterns: PatternMatcher,
    context: ContextResolver,
}

impl ModelClassifier {
    /// Create a classifier over the built-in tables
    pub fn new() -> Self {
        Self::with_tables(PatternMatcher::new(), ContextResolver::new())
    }

    /// Create a classifier with explicit table components
    pub fn with_tables(patterns: PatternMatcher, context: ContextResolver) -> Self {
        Self { patterns, context }
    }

    /// Classify a descriptor into a fully populated model.
    ///
    /// Image-generation and embedding models short-circuit with fixed
    /// metadata; everything else goes through the standard provider/series/
    /// type/variant pipeline.
    pub fn classify(&self, descriptor: &ModelDescriptor) -> ClassifiedModel {
        let lower = descriptor.id.to_lowercase();

        if Self::is_image_generation(&lower) {
            return self.image_generation_model(descriptor, &lower);
        }
        if Self::is_embedding(&lower) {
            return self.embedding_model(descriptor, &lower);
        }
        self.standard_model(descriptor, &lower)
    }

    fn is_image_generation(lower: &str) -> bool {
        lower.contains("image") || lower.contains("dall-e") || lower.contains("stable-diffusion")
    }

    fn is_embedding(lower: &str) -> bool {
        lower.contains("embedding") || lower.contains("embed") || lower.contains("text-embedding")
    }

    fn image_generation_model(&self, descriptor: &ModelDescriptor, lower: &str) -> ClassifiedModel {
        let provider = self.determine_provider(lower, &descriptor.provider);
        self.finish(
            descriptor,
            lower,
            provider,
            TYPE_IMAGE_GENERATION.to_string(),
            TYPE_IMAGE_GENERATION.to_string(),
            TYPE_IMAGE_GENERATION.to_string(),
            0,
            vec![TYPE_IMAGE_GENERATION.to_string()],
            false,
            false,
        )
    }

    fn embedding_model(&self, descriptor: &ModelDescriptor, lower: &str) -> ClassifiedModel {
        let provider = self.determine_provider(lower, &descriptor.provider);
        self.finish(
            descriptor,
            lower,
            provider,
            TYPE_EMBEDDING.to_string(),
            TYPE_EMBEDDING.to_string(),
            TYPE_EMBEDDING.to_string(),
            0,
            vec![CAP_EMBEDDING.to_string()],
            false,
            false,
        )
    }

    fn standard_model(&self, descriptor: &ModelDescriptor, lower: &str) -> ClassifiedModel {
        let provider = self.determine_provider(lower, &descriptor.provider);
        let series = self.determine_series(lower, provider);
        let model_type = self.determine_type(lower, provider);
        let variant = self.determine_variant(lower, provider, &series);
        let context = self.context.resolve(lower);
        let capabilities = self.detect_capabilities(lower, &series);

        let is_multimodal =
            capabilities.iter().any(|c| c == CAP_VISION) || series.contains("Vision");
        let is_experimental =
            lower.contains("alpha") || lower.contains("beta") || lower.contains("experimental");

        self.finish(
            descriptor,
            lower,
            provider,
            series,
            model_type,
            variant,
            context,
            capabilities,
            is_multimodal,
            is_experimental,
        )
    }

    /// Provider resolution: explicit hint first, then a "namespace/" prefix,
    /// then name patterns, then "other"
    fn determine_provider(&self, lower: &str, hint: &str) -> Provider {
        if let Some(provider) = self.patterns.provider_by_name(hint) {
            return provider;
        }
        if let Some((namespace, _)) = lower.split_once('/') {
            if let Some(provider) = self.patterns.provider_by_name(namespace) {
                return provider;
            }
        }
        self.patterns
            .provider_by_pattern(lower)
            .unwrap_or(Provider::Other)
    }

    fn determine_series(&self, lower: &str, provider: Provider) -> String {
        match provider {
            Provider::OpenAi => match lower.chars().next() {
                Some('o') => return "O".to_string(),
                Some('g') => return "GPT".to_string(),
                Some('d') => return "DALL-E".to_string(),
                _ => {}
            },
            Provider::Anthropic => {
                if let Some(series) = self.patterns.claude_series(lower) {
                    return series.to_string();
                }
            }
            Provider::Gemini => return self.patterns.gemini_series(lower),
            _ => {}
        }
        self.patterns
            .series_by_pattern(lower)
            .map(str::to_string)
            .unwrap_or_else(|| SERIES_GENERAL.to_string())
    }

    fn determine_type(&self, lower: &str, provider: Provider) -> String {
        let model_type = match provider {
            Provider::OpenAi => self.patterns.openai_type(lower),
            Provider::Anthropic => self.patterns.anthropic_type(lower),
            Provider::Gemini => self.patterns.gemini_type(lower),
            _ => self.patterns.type_by_pattern(lower).unwrap_or(TYPE_STANDARD),
        };
        model_type.to_string()
    }

    fn determine_variant(&self, lower: &str, provider: Provider, series: &str) -> String {
        let built = match provider {
            Provider::OpenAi => self.patterns.openai_variant(lower).map(str::to_string),
            Provider::Anthropic => self.patterns.anthropic_variant(lower).map(str::to_string),
            Provider::Gemini => self.patterns.gemini_variant(lower),
            _ => None,
        };
        if let Some(variant) = built {
            return variant;
        }

        let runs = version_runs(lower);
        if runs.is_empty() {
            series.to_string()
        } else {
            format!("{} {}", series, runs.join("."))
        }
    }

    /// Capabilities from the rule set, evaluated against the generic
    /// pattern-matched type, plus the unconditional "chat" tag; the result is
    /// sorted case-insensitively with no duplicates
    fn detect_capabilities(&self, lower: &str, series: &str) -> Vec<String> {
        let generic_type = self.patterns.type_by_pattern(lower).unwrap_or(TYPE_STANDARD);
        let mut capabilities: Vec<String> = self
            .patterns
            .capability_flags(generic_type, lower, series)
            .into_iter()
            .map(str::to_string)
            .collect();
        capabilities.push(CAP_CHAT.to_string());
        capabilities.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
        capabilities.dedup();
        capabilities
    }

    #[allow(clippy::too_many_arguments)]
    fn finish(
        &self,
        descriptor: &ModelDescriptor,
        lower: &str,
        provider: Provider,
        series: String,
        model_type: String,
        variant: String,
        context: i32,
        capabilities: Vec<String>,
        is_multimodal: bool,
        is_experimental: bool,
    ) -> ClassifiedModel {
        // A positive context size from the upstream catalog wins over the
        // resolver; anything else counts as unset.
        let context_size = if descriptor.context_size > 0 {
            descriptor.context_size
        } else {
            context
        };

        ClassifiedModel {
            id: descriptor.id.clone(),
            name: descriptor.name.clone(),
            provider,
            family: series.clone(),
            series,
            model_type,
            variant,
            context_size,
            capabilities,
            is_multimodal,
            is_experimental,
            display_name: lower.to_string(),
            max_tokens: descriptor.max_tokens,
            description: descriptor.description.clone(),
            cost_per_token: descriptor.cost_per_token,
            is_default: descriptor.is_default,
            version: descriptor.version.clone(),
            metadata: descriptor.metadata.clone(),
        }
    }
}

/// Extract the digit/dot runs from an id ("gpt-4.5-preview-2" -> ["4.5", "2"])
fn version_runs(lower: &str) -> Vec<String> {
    lower
        .split(|c: char| !c.is_ascii_digit() && c != '.')
        .filter(|run| !run.is_empty() && run.chars().any(|c| c.is_ascii_digit()))
        .map(str::to_string)
        .collect()
}
