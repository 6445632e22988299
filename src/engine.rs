// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! End-to-end categorization pipeline
//!
//! Bundles the classifier, the ranking engine and the hierarchy builder into
//! the classify -> sort -> group flow shared by the HTTP handlers and the
//! CLI.

use tracing::debug;

use crate::catalog::{ClassifiedModel, HierarchyNode, ModelDescriptor};
use crate::classify::ModelClassifier;
use crate::grouping::HierarchyBuilder;
use crate::rank::RankingEngine;

/// The full classification pipeline over the built-in tables
#[derive(Debug, Clone, Copy, Default)]
pub struct Categorizer {
    classifier: ModelClassifier,
    ranking: RankingEngine,
    builder: HierarchyBuilder,
}

impl Categorizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify every descriptor in the list
    pub fn classify_all(&self, descriptors: &[ModelDescriptor]) -> Vec<ClassifiedModel> {
        descriptors
            .iter()
            .map(|descriptor| self.classifier.classify(descriptor))
            .collect()
    }

    /// Rank a classified list and fold it into the display hierarchy
    pub fn rank_and_group(&self, mut models: Vec<ClassifiedModel>) -> Vec<HierarchyNode> {
        self.ranking.sort(&mut models);
        self.builder.build(&models)
    }

    /// Raw descriptors in, display hierarchy out
    pub fn categorize(&self, descriptors: &[ModelDescriptor]) -> Vec<HierarchyNode> {
        debug!(count = descriptors.len(), "categorizing models");
        self.rank_and_group(self.classify_all(descriptors))
    }
}
