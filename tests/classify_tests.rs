// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! End-to-end classification scenarios over the public API

use corral::catalog::{ModelDescriptor, Provider};
use corral::classify::ModelClassifier;

fn classify(id: &str) -> corral::catalog::ClassifiedModel {
    ModelClassifier::new().classify(&ModelDescriptor {
        id: id.to_string(),
        ..Default::default()
    })
}

#[test]
fn test_openai_mini_scenario() {
    let model = classify("gpt-4o-mini");

    assert_eq!(model.provider, Provider::OpenAi);
    assert_eq!(model.series, "GPT");
    assert_eq!(model.model_type, "Mini");
    assert_eq!(model.variant, "GPT-4o Mini");
    assert_eq!(model.context_size, 128_000);
    for expected in ["vision", "function-calling", "chat"] {
        assert!(
            model.capabilities.iter().any(|c| c == expected),
            "expected capability {expected} in {:?}",
            model.capabilities
        );
    }
}

#[test]
fn test_anthropic_opus_scenario() {
    let model = classify("claude-3-opus-20240229");

    assert_eq!(model.provider, Provider::Anthropic);
    assert_eq!(model.series, "Claude 3");
    assert_eq!(model.model_type, "Opus");
    assert_eq!(model.variant, "Claude 3.0");
    assert_eq!(model.context_size, 200_000);
}

#[test]
fn test_gemini_flash_scenario() {
    let model = classify("gemini-1.5-flash");

    assert_eq!(model.provider, Provider::Gemini);
    assert_eq!(model.series, "Gemini 1.5");
    assert_eq!(model.model_type, "Flash");
    assert_eq!(model.variant, "Gemini 1.5 Flash");
    assert_eq!(model.context_size, 1_000_000);
}

#[test]
fn test_image_generation_scenario() {
    let model = classify("dall-e-3");

    assert_eq!(model.provider, Provider::OpenAi);
    assert_eq!(model.series, "Image Generation");
    assert_eq!(model.model_type, "Image Generation");
    assert_eq!(model.capabilities, vec!["Image Generation"]);
    assert_eq!(model.context_size, 0);
}

#[test]
fn test_stable_diffusion_is_image_generation() {
    let model = classify("stable-diffusion-xl");
    assert_eq!(model.model_type, "Image Generation");
    assert_eq!(model.provider, Provider::Other);
}

#[test]
fn test_embedding_scenario() {
    let model = classify("text-embedding-3-large");

    assert_eq!(model.series, "Embedding");
    assert_eq!(model.model_type, "Embedding");
    assert_eq!(model.variant, "Embedding");
    assert_eq!(model.capabilities, vec!["embedding"]);
    assert_eq!(model.context_size, 0);
}

#[test]
fn test_degenerate_descriptor_never_fails() {
    let classifier = ModelClassifier::new();
    let degenerate = [
        "",
        "/",
        "///",
        ".",
        "UPPERCASE-ONLY",
        "模型-v1",
        "a-very-long-id-with-no-known-tokens-whatsoever-0000000000",
    ];
    for id in degenerate {
        let model = classifier.classify(&ModelDescriptor {
            id: id.to_string(),
            ..Default::default()
        });
        assert!(model.context_size >= 0, "negative context for {id}");
        assert!(!model.series.is_empty());
        assert!(!model.model_type.is_empty());
    }
}

#[test]
fn test_empty_id_documented_defaults() {
    let model = classify("");
    assert_eq!(model.provider, Provider::Other);
    assert_eq!(model.series, "General");
    assert_eq!(model.model_type, "Standard");
    assert_eq!(model.capabilities, vec!["chat"]);
    assert_eq!(model.context_size, 0);
}

#[test]
fn test_openrouter_namespaced_ids() {
    let classifier = ModelClassifier::new();

    // Known namespaces resolve the provider directly
    let anthropic = classifier.classify(&ModelDescriptor {
        id: "anthropic/claude-3.5-sonnet".to_string(),
        ..Default::default()
    });
    assert_eq!(anthropic.provider, Provider::Anthropic);
    assert_eq!(anthropic.variant, "Claude 3.5");

    // An explicit hint still wins over the namespace
    let hinted = classifier.classify(&ModelDescriptor {
        id: "anthropic/claude-3.5-sonnet".to_string(),
        provider: "openrouter".to_string(),
        ..Default::default()
    });
    assert_eq!(hinted.provider, Provider::OpenRouter);
}

#[test]
fn test_meta_and_mistral_patterns() {
    assert_eq!(classify("meta-llama/llama-3-70b").provider, Provider::Meta);
    assert_eq!(classify("mistral-large-2407").provider, Provider::Mistral);
    assert_eq!(classify("mixtral-8x22b").provider, Provider::Mistral);
}

#[test]
fn test_gemini_thinking_variant() {
    let model = classify("gemini-2.0-flash-thinking-exp");
    assert_eq!(model.model_type, "Thinking");
    // The variant composes version and type, thinking outranking flash
    assert_eq!(model.variant, "Gemini 2.0 Thinking");
}

#[test]
fn test_o_series_classification() {
    let model = classify("o1-preview");
    assert_eq!(model.provider, Provider::OpenAi);
    assert_eq!(model.series, "O");
    assert_eq!(model.model_type, "O Series");
    assert_eq!(model.variant, "O1");
    assert_eq!(model.context_size, 32_768);
}

#[test]
fn test_capabilities_always_sorted_and_unique() {
    for id in [
        "gpt-4o",
        "gpt-4o-mini",
        "claude-3-opus",
        "gemini-1.5-pro",
        "gpt-3.5-turbo",
        "unknown-model",
    ] {
        let model = classify(id);
        let mut expected = model.capabilities.clone();
        expected.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
        expected.dedup();
        assert_eq!(model.capabilities, expected, "capabilities for {id}");
    }
}

#[test]
fn test_gpt_35_capabilities() {
    let model = classify("gpt-3.5-turbo");
    assert!(model.capabilities.iter().any(|c| c == "function-calling"));
    assert!(!model.capabilities.iter().any(|c| c == "vision"));
    assert!(!model.is_multimodal);
}

#[test]
fn test_classification_is_idempotent() {
    let classifier = ModelClassifier::new();
    let descriptor = ModelDescriptor {
        id: "claude-3.7-sonnet".to_string(),
        name: Some("Claude 3.7 Sonnet".to_string()),
        version: Some("3.7".to_string()),
        ..Default::default()
    };
    let first = classifier.classify(&descriptor);
    let second = classifier.classify(&descriptor);
    assert_eq!(first, second);
}
