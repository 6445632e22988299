// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Catalog value types
//!
//! Wire-visible types shared by the classification engine, the HTTP surface
//! and the CLI: raw model descriptors, classified models, hierarchy nodes and
//! the classification-property metadata returned with every response.
//!
//! All of these are plain value objects. They are constructed once per
//! request and never mutated afterwards.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Upstream providers the classifier can recognize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    OpenAi,
    Anthropic,
    Gemini,
    Meta,
    Mistral,
    OpenRouter,
    Other,
}

impl Provider {
    /// Canonical lowercase name, as used on the wire and in group values
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::OpenAi => "openai",
            Provider::Anthropic => "anthropic",
            Provider::Gemini => "gemini",
            Provider::Meta => "meta",
            Provider::Mistral => "mistral",
            Provider::OpenRouter => "openrouter",
            Provider::Other => "other",
        }
    }

    /// Case-insensitive exact match against the known provider names.
    ///
    /// `Other` is a classification result, not a recognizable name, so it is
    /// never returned here. An empty string matches nothing.
    pub fn from_name(name: &str) -> Option<Provider> {
        const KNOWN: [Provider; 6] = [
            Provider::OpenAi,
            Provider::Anthropic,
            Provider::Gemini,
            Provider::Meta,
            Provider::Mistral,
            Provider::OpenRouter,
        ];
        KNOWN
            .into_iter()
            .find(|p| name.eq_ignore_ascii_case(p.as_str()))
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw model record as supplied by an upstream provider or aggregator.
///
/// Only `id` participates in classification (with `provider` as an optional
/// hint); the remaining fields pass through to the classified output
/// unchanged. Every field is optional on the wire so that degenerate input
/// still decodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Model identifier, e.g. "gpt-4o-mini" (empty when absent)
    #[serde(default)]
    pub id: String,

    /// Provider hint from the upstream catalog (empty when absent)
    #[serde(default)]
    pub provider: String,

    /// Context window in tokens; 0 means unknown and lets the resolver decide
    #[serde(default)]
    pub context_size: i32,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub max_tokens: i32,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub cost_per_token: f64,

    #[serde(default)]
    pub is_default: bool,

    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

/// A descriptor augmented with everything the classifier derives from it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedModel {
    pub id: String,

    pub name: Option<String>,

    pub provider: Provider,

    /// Model family/generation, e.g. "Claude 3" or "GPT"
    pub series: String,

    /// Mirrors `series`; kept as its own field because the flat grouping
    /// axes expose "family" and "series" independently
    pub family: String,

    /// Sub-type within the series, e.g. "Opus", "Mini", "Flash Lite"
    #[serde(rename = "type")]
    pub model_type: String,

    /// Human-facing version label, e.g. "Gemini 1.5 Flash"
    pub variant: String,

    pub context_size: i32,

    /// Capability tags, sorted case-insensitively; always contains "chat"
    /// for conversational models
    pub capabilities: Vec<String>,

    pub is_multimodal: bool,

    pub is_experimental: bool,

    pub display_name: String,

    pub max_tokens: i32,

    pub description: Option<String>,

    pub cost_per_token: f64,

    pub is_default: bool,

    pub version: Option<String>,

    pub metadata: HashMap<String, String>,
}

/// Level of a node in the display hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupLevel {
    Provider,
    Type,
    Version,
}

/// One node of the provider > type > version display tree.
///
/// Only `version` nodes carry models; `provider` and `type` nodes carry
/// children one level deeper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchyNode {
    pub group_name: GroupLevel,
    pub group_value: String,
    pub models: Vec<ClassifiedModel>,
    pub children: Vec<HierarchyNode>,
}

impl HierarchyNode {
    /// Create an empty node at the given level
    pub fn new(group_name: GroupLevel, group_value: impl Into<String>) -> Self {
        Self {
            group_name,
            group_value: group_value.into(),
            models: Vec::new(),
            children: Vec::new(),
        }
    }
}

/// A flat group of models sharing one value of a classification axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedGroup {
    pub property_name: String,
    pub property_value: String,
    pub models: Vec<ClassifiedModel>,
}

/// Metadata describing one classification axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub possible_values: Vec<String>,
}

/// Filtering and output options for criteria-based classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationCriteria {
    /// Axes to group by in flat mode; empty means the default set
    #[serde(default)]
    pub properties: Vec<String>,

    #[serde(default)]
    pub include_experimental: bool,

    #[serde(default)]
    pub include_deprecated: bool,

    #[serde(default)]
    pub min_context_size: i32,

    /// Hierarchical output is the default; flat grouping must be requested
    #[serde(default = "default_true")]
    pub hierarchical: bool,
}

impl Default for ClassificationCriteria {
    fn default() -> Self {
        Self {
            properties: Vec::new(),
            include_experimental: false,
            include_deprecated: false,
            min_context_size: 0,
            hierarchical: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Request body for `POST /classify`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassifyRequest {
    #[serde(default)]
    pub models: Vec<ModelDescriptor>,
}

/// Request body for `POST /classify/criteria`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CriteriaRequest {
    #[serde(default)]
    pub models: Vec<ModelDescriptor>,

    #[serde(flatten)]
    pub criteria: ClassificationCriteria,
}

/// Response body shared by the classification endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub classified_groups: Vec<ClassifiedGroup>,
    pub available_properties: Vec<PropertyDescriptor>,
    pub error_message: String,
    pub hierarchical_groups: Vec<HierarchyNode>,
}

/// The classification axes every response advertises.
///
/// The value lists are fixed metadata, not derived from the input; capability
/// values are sorted case-insensitively for stable output.
pub fn available_properties() -> Vec<PropertyDescriptor> {
    let mut properties = vec![
        PropertyDescriptor {
            name: "provider".to_string(),
            display_name: "Provider".to_string(),
            description: "The AI provider that offers the model".to_string(),
            possible_values: to_strings(&[
                "openai",
                "anthropic",
                "gemini",
                "meta",
                "mistral",
                "cohere",
                "openrouter",
                "other",
            ]),
        },
        PropertyDescriptor {
            name: "family".to_string(),
            display_name: "Model Family".to_string(),
            description: "The family or generation that the model belongs to".to_string(),
            possible_values: to_strings(&[
                "GPT-4",
                "GPT-3.5",
                "Claude 3",
                "Claude 2",
                "Gemini 1.5",
                "Gemini 1.0",
                "Llama",
                "Mistral",
            ]),
        },
        PropertyDescriptor {
            name: "type".to_string(),
            display_name: "Model Type".to_string(),
            description: "The specific type or version of the model".to_string(),
            possible_values: to_strings(&[
                "Vision",
                "Standard",
                "Pro",
                "Flash",
                "Gemma",
                "Opus",
                "Sonnet",
                "Haiku",
                "Embedding",
                "O Series",
                "GPT 3.5",
                "GPT 4",
                "GPT 4.5",
                "Mini",
                "Flash Lite",
                "Thinking",
                "Image Generation",
            ]),
        },
        PropertyDescriptor {
            name: "context_window".to_string(),
            display_name: "Context Window".to_string(),
            description: "Grouping based on context window size".to_string(),
            possible_values: to_strings(&[
                "Small (< 10K)",
                "Medium (10K-100K)",
                "Large (100K-200K)",
                "Very Large (> 200K)",
            ]),
        },
        PropertyDescriptor {
            name: "capability".to_string(),
            display_name: "Capabilities".to_string(),
            description: "Special model capabilities".to_string(),
            possible_values: to_strings(&[
                "vision",
                "function-calling",
                "embedding",
                "streaming",
                "chat",
                "audio",
            ]),
        },
    ];

    if let Some(capability) = properties.iter_mut().find(|p| p.name == "capability") {
        capability
            .possible_values
            .sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
    }

    properties
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
