// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Flat grouping and filter criteria

use std::collections::BTreeMap;

use crate::catalog::{ClassificationCriteria, ClassifiedGroup, ClassifiedModel};

use super::bucket::context_window_bucket;

/// Axes used when a criteria request names none
pub const DEFAULT_PROPERTIES: &[&str] = &["provider", "family", "type", "capability"];

/// Group models by one classification axis.
///
/// A model lands in one group per value of the axis; for `capability` that is
/// one group per tag. Groups come back ordered by value so responses are
/// deterministic, with capability groups sorted case-insensitively. Unknown
/// axes yield no groups.
pub fn group_by_property(models: &[ClassifiedModel], property: &str) -> Vec<ClassifiedGroup> {
    let mut groups: BTreeMap<String, Vec<ClassifiedModel>> = BTreeMap::new();

    for model in models {
        let mut values: Vec<String> = Vec::new();
        match property {
            "provider" => values.push(model.provider.as_str().to_string()),
            "family" => values.push(model.family.clone()),
            "type" => values.push(model.model_type.clone()),
            "series" => values.push(model.series.clone()),
            "variant" => values.push(model.variant.clone()),
            "capability" => values.extend(model.capabilities.iter().cloned()),
            "context_window" => {
                values.push(context_window_bucket(model.context_size).to_string())
            }
            "multimodal" => values.push(yes_no(model.is_multimodal).to_string()),
            _ => continue,
        }
        for value in values {
            if !value.is_empty() {
                groups.entry(value).or_default().push(model.clone());
            }
        }
    }

    let mut result: Vec<ClassifiedGroup> = groups
        .into_iter()
        .map(|(value, members)| ClassifiedGroup {
            property_name: property.to_string(),
            property_value: value,
            models: members,
        })
        .collect();

    if property == "capability" {
        result.sort_by(|a, b| {
            a.property_value
                .to_lowercase()
                .cmp(&b.property_value.to_lowercase())
        });
    }

    result
}

/// Drop models that fail the request criteria
pub fn filter_by_criteria(
    models: &[ClassifiedModel],
    criteria: &ClassificationCriteria,
) -> Vec<ClassifiedModel> {
    models
        .iter()
        .filter(|model| {
            if criteria.min_context_size > 0 && model.context_size < criteria.min_context_size {
                return false;
            }
            if !criteria.include_experimental && model.is_experimental {
                return false;
            }
            if !criteria.include_deprecated
                && model.metadata.get("deprecated").map(String::as_str) == Some("true")
            {
                return false;
            }
            true
        })
        .cloned()
        .collect()
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ModelDescriptor;
    use crate::classify::ModelClassifier;

    fn classified(ids: &[&str]) -> Vec<ClassifiedModel> {
        let classifier = ModelClassifier::new();
        ids.iter()
            .map(|id| {
                classifier.classify(&ModelDescriptor {
                    id: id.to_string(),
                    ..Default::default()
                })
            })
            .collect()
    }

    #[test]
    fn test_group_by_provider() {
        let models = classified(&["gpt-4o", "gpt-4-turbo", "claude-3-opus"]);
        let groups = group_by_property(&models, "provider");
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].property_value, "anthropic");
        assert_eq!(groups[0].models.len(), 1);
        assert_eq!(groups[1].property_value, "openai");
        assert_eq!(groups[1].models.len(), 2);
    }

    #[test]
    fn test_group_by_capability_one_group_per_tag() {
        let models = classified(&["gpt-4o"]);
        let groups = group_by_property(&models, "capability");
        let values: Vec<_> = groups.iter().map(|g| g.property_value.as_str()).collect();
        assert_eq!(values, vec!["chat", "function-calling", "vision"]);
        for group in &groups {
            assert_eq!(group.property_name, "capability");
            assert_eq!(group.models.len(), 1);
        }
    }

    #[test]
    fn test_group_by_context_window_buckets() {
        let models = classified(&["gpt-3.5-turbo", "claude-3-opus", "gemini-1.5-flash"]);
        let groups = group_by_property(&models, "context_window");
        let values: Vec<_> = groups.iter().map(|g| g.property_value.as_str()).collect();
        assert!(values.contains(&"Small (< 10K)"));
        assert!(values.contains(&"Large (100K-200K)"));
        assert!(values.contains(&"Very Large (> 200K)"));
    }

    #[test]
    fn test_group_by_multimodal() {
        let models = classified(&["gpt-4o", "gpt-3.5-turbo"]);
        let groups = group_by_property(&models, "multimodal");
        let values: Vec<_> = groups.iter().map(|g| g.property_value.as_str()).collect();
        assert_eq!(values, vec!["No", "Yes"]);
    }

    #[test]
    fn test_group_by_unknown_property_is_empty() {
        let models = classified(&["gpt-4o"]);
        assert!(group_by_property(&models, "nonsense").is_empty());
    }

    #[test]
    fn test_filter_min_context_size() {
        let models = classified(&["gpt-3.5-turbo", "claude-3-opus"]);
        let criteria = ClassificationCriteria {
            min_context_size: 100_000,
            ..Default::default()
        };
        let kept = filter_by_criteria(&models, &criteria);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "claude-3-opus");
    }

    #[test]
    fn test_filter_experimental() {
        let models = classified(&["gpt-4o", "gemini-2.0-flash-experimental"]);

        let default_criteria = ClassificationCriteria::default();
        assert_eq!(filter_by_criteria(&models, &default_criteria).len(), 1);

        let inclusive = ClassificationCriteria {
            include_experimental: true,
            ..Default::default()
        };
        assert_eq!(filter_by_criteria(&models, &inclusive).len(), 2);
    }

    #[test]
    fn test_filter_deprecated_metadata() {
        let classifier = ModelClassifier::new();
        let mut metadata = std::collections::HashMap::new();
        metadata.insert("deprecated".to_string(), "true".to_string());
        let deprecated = classifier.classify(&ModelDescriptor {
            id: "gpt-4-32k".to_string(),
            metadata,
            ..Default::default()
        });
        let current = classifier.classify(&ModelDescriptor {
            id: "gpt-4o".to_string(),
            ..Default::default()
        });
        let models = vec![deprecated, current];

        let default_criteria = ClassificationCriteria::default();
        let kept = filter_by_criteria(&models, &default_criteria);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "gpt-4o");

        let inclusive = ClassificationCriteria {
            include_deprecated: true,
            ..Default::default()
        };
        assert_eq!(filter_by_criteria(&models, &inclusive).len(), 2);
    }

    #[test]
    fn test_filter_keeps_zero_min_context() {
        let models = classified(&["dall-e-3"]);
        let criteria = ClassificationCriteria::default();
        assert_eq!(filter_by_criteria(&models, &criteria).len(), 1);
    }
}
