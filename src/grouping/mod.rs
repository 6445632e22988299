// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Model grouping
//!
//! Folds ranked model lists into the three-level display hierarchy, groups
//! models flat by a single classification axis, and applies request-level
//! filter criteria.

pub mod bucket;
pub mod flat;
pub mod hierarchy;

pub use bucket::context_window_bucket;
pub use flat::{filter_by_criteria, group_by_property, DEFAULT_PROPERTIES};
pub use hierarchy::HierarchyBuilder;
