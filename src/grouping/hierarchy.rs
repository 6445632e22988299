// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Display hierarchy construction

use tracing::debug;

use crate::catalog::{ClassifiedModel, GroupLevel, HierarchyNode};
use crate::classify::TYPE_STANDARD;

/// Folds a ranked model list into the provider > type > version tree.
///
/// The input must already be sorted by `RankingEngine`. Grouping is
/// run-length over adjacent models: a new node opens whenever the group value
/// changes from the currently open node at that level, so an unsorted input
/// produces repeated sibling groups rather than merged ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct HierarchyBuilder;

impl HierarchyBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Single left-to-right pass over the sorted list
    pub fn build(&self, models: &[ClassifiedModel]) -> Vec<HierarchyNode> {
        let mut roots: Vec<HierarchyNode> = Vec::new();

        for model in models {
            let provider = provider_value(model);
            let model_type = type_value(model);
            let variant = variant_value(model);

            let open_provider = roots
                .last()
                .map(|node| node.group_value == provider)
                .unwrap_or(false);
            if !open_provider {
                debug!(provider = %provider, "opening provider group");
                roots.push(HierarchyNode::new(GroupLevel::Provider, provider));
            }
            let Some(provider_node) = roots.last_mut() else {
                continue;
            };

            let open_type = provider_node
                .children
                .last()
                .map(|node| node.group_value == model_type)
                .unwrap_or(false);
            if !open_type {
                debug!(model_type = %model_type, "opening type group");
                provider_node
                    .children
                    .push(HierarchyNode::new(GroupLevel::Type, model_type));
            }
            let Some(type_node) = provider_node.children.last_mut() else {
                continue;
            };

            let open_version = type_node
                .children
                .last()
                .map(|node| node.group_value == variant)
                .unwrap_or(false);
            if !open_version {
                debug!(variant = %variant, "opening version group");
                type_node
                    .children
                    .push(HierarchyNode::new(GroupLevel::Version, variant));
            }
            if let Some(version_node) = type_node.children.last_mut() {
                version_node.models.push(model.clone());
            }
        }

        roots
    }
}

fn provider_value(model: &ClassifiedModel) -> String {
    let provider = model.provider.as_str();
    if provider.is_empty() {
        "Other".to_string()
    } else {
        provider.to_string()
    }
}

fn type_value(model: &ClassifiedModel) -> String {
    if model.model_type.is_empty() {
        TYPE_STANDARD.to_string()
    } else {
        model.model_type.clone()
    }
}

fn variant_value(model: &ClassifiedModel) -> String {
    if model.variant.is_empty() {
        "Default".to_string()
    } else {
        model.variant.clone()
    }
}
