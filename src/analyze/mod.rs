//! Table-driven classification of free-text requests.
//!
//! Every extraction is a case-insensitive keyword lookup over fixed tables, so
//! any result can be explained by pointing at the table row that matched.
//! The extractions share no state and can run in any order.
use crate::component::{Complexity, ComponentSpec, ComponentType, Integration};
use serde::Serialize;
use std::collections::BTreeSet;

mod keywords;
mod name;

use keywords::{matches_any, COMPLEXITY_TIERS, COMPONENT_KEYWORDS, INTEGRATION_KEYWORDS};
pub use name::{extract_name, slugify, FALLBACK_NAME};

const TRIGGER_KEYWORD_LIMIT: usize = 3;

/// Structured reading of one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Never empty; `automation` when nothing matched.
    pub component_types: BTreeSet<ComponentType>,
    pub complexity: Complexity,
    pub name: String,
    pub integration_needs: BTreeSet<Integration>,
    /// Platform the request was analyzed for (context only).
    pub platform: String,
    pub raw_input: String,
}

impl Analysis {
    /// Illustrative triggers: the first words of the request.
    pub fn trigger_keywords(&self) -> Vec<String> {
        self.raw_input
            .split_whitespace()
            .map(|word| {
                word.trim_matches(|c: char| !c.is_alphanumeric())
                    .to_lowercase()
            })
            .filter(|word| !word.is_empty())
            .take(TRIGGER_KEYWORD_LIMIT)
            .collect()
    }

    /// Spec for one detected component type, targeted at `platform`.
    pub fn spec_for(&self, component_type: ComponentType, platform: &str) -> ComponentSpec {
        ComponentSpec::new(component_type, &self.name, &self.raw_input, platform)
            .with_trigger_keywords(self.trigger_keywords())
            .with_complexity(self.complexity)
            .with_integration_points(self.integration_needs.iter().copied().collect())
    }
}

/// Classify `input`. `platform` is recorded, not used for matching.
pub fn analyze(input: &str, platform: &str) -> Analysis {
    let analysis = Analysis {
        component_types: detect_component_types(input),
        complexity: detect_complexity(input),
        name: extract_name(input),
        integration_needs: detect_integration_needs(input),
        platform: platform.to_string(),
        raw_input: input.to_string(),
    };
    tracing::debug!(
        platform,
        name = %analysis.name,
        complexity = %analysis.complexity,
        component_types = ?analysis.component_types,
        integration_needs = ?analysis.integration_needs,
        "analyzed request"
    );
    analysis
}

pub fn detect_component_types(input: &str) -> BTreeSet<ComponentType> {
    let lower = input.to_lowercase();
    let mut detected: BTreeSet<ComponentType> = COMPONENT_KEYWORDS
        .iter()
        .filter(|(_, keywords)| matches_any(&lower, keywords))
        .map(|(component_type, _)| *component_type)
        .collect();
    if detected.is_empty() {
        detected.insert(ComponentType::Automation);
    }
    detected
}

/// First tier in priority order (complex, simple, medium) with a keyword hit.
pub fn detect_complexity(input: &str) -> Complexity {
    let lower = input.to_lowercase();
    COMPLEXITY_TIERS
        .iter()
        .find(|(_, keywords)| matches_any(&lower, keywords))
        .map(|(tier, _)| *tier)
        .unwrap_or_default()
}

/// Integration tags mentioned outside the quoted component name.
pub fn detect_integration_needs(input: &str) -> BTreeSet<Integration> {
    let lower = name::without_quoted_name(input).to_lowercase();
    INTEGRATION_KEYWORDS
        .iter()
        .filter(|(_, keywords)| matches_any(&lower, keywords))
        .map(|(integration, _)| *integration)
        .collect()
}

#[cfg(test)]
#[path = "analyze_tests.rs"]
mod tests;
