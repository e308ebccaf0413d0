//! End-to-end generation: resolve a platform, analyze once, render each type.
//!
//! Multi-platform fan-out isolates failures per platform: a platform whose
//! config cannot render some detected type is reported in the batch and the
//! remaining platforms still produce artifacts.
use crate::analyze::{analyze, Analysis};
use crate::error::Result;
use crate::platform::{PlatformDetector, PlatformRegistry, PlatformResolution};
use crate::render::{Artifact, ComponentGenerator};
use serde::Serialize;

/// Artifacts for one platform, with the reasoning that produced them.
#[derive(Debug, Clone, Serialize)]
pub struct Generation {
    pub resolution: PlatformResolution,
    pub analysis: Analysis,
    /// One artifact per detected component type, in type order.
    pub artifacts: Vec<Artifact>,
}

/// Result of rendering one requested platform inside a batch.
#[derive(Debug, Clone, Serialize)]
pub struct PlatformOutcome {
    pub requested: String,
    /// Registered platform used; differs from `requested` when substituted.
    pub platform: String,
    pub artifact_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Combined result of a multi-platform run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub outcomes: Vec<PlatformOutcome>,
    artifacts: Vec<Artifact>,
}

impl BatchReport {
    /// Artifacts from every platform that rendered, in request order.
    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    pub fn into_artifacts(self) -> Vec<Artifact> {
        self.artifacts
    }

    pub fn failures(&self) -> impl Iterator<Item = &PlatformOutcome> {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.error.is_some())
    }
}

/// Runs analysis and rendering against one registry.
#[derive(Debug, Clone, Default)]
pub struct MultiPlatformGenerator {
    registry: PlatformRegistry,
}

impl MultiPlatformGenerator {
    pub fn new(registry: PlatformRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &PlatformRegistry {
        &self.registry
    }

    /// Generate for `platform`, or for the detected platform when `None`.
    pub fn generate(&self, text: &str, platform: Option<&str>) -> Result<Generation> {
        let requested = match platform {
            Some(name) => name,
            None => PlatformDetector::new(&self.registry).detect(),
        };
        let (resolution, config) = self.registry.resolve(requested);
        let analysis = analyze(text, &config.name);
        let generator = ComponentGenerator::new(config);
        let artifacts = analysis
            .component_types
            .iter()
            .map(|component_type| {
                let spec = analysis.spec_for(*component_type, &config.name);
                generator.render(&spec)
            })
            .collect::<Result<Vec<_>>>()?;
        tracing::info!(
            platform = %config.name,
            substituted = resolution.substituted,
            artifacts = artifacts.len(),
            "generated components"
        );
        Ok(Generation {
            resolution,
            analysis,
            artifacts,
        })
    }

    /// Generate for each requested platform; an empty list means all registered.
    pub fn generate_many(&self, text: &str, platforms: &[String]) -> BatchReport {
        let requested: Vec<&str> = if platforms.is_empty() {
            self.registry.names()
        } else {
            platforms.iter().map(String::as_str).collect()
        };
        let mut report = BatchReport::default();
        for name in requested {
            match self.generate(text, Some(name)) {
                Ok(generation) => {
                    report.outcomes.push(PlatformOutcome {
                        requested: name.to_string(),
                        platform: generation.resolution.platform,
                        artifact_count: generation.artifacts.len(),
                        error: None,
                    });
                    report.artifacts.extend(generation.artifacts);
                }
                Err(err) => {
                    tracing::warn!(platform = name, error = %err, "platform generation failed");
                    report.outcomes.push(PlatformOutcome {
                        requested: name.to_string(),
                        platform: self.registry.config_for(name).name.clone(),
                        artifact_count: 0,
                        error: Some(err.to_string()),
                    });
                }
            }
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentType;

    #[test]
    fn one_artifact_per_detected_type() {
        let generator = MultiPlatformGenerator::default();
        let generation = generator
            .generate("An expert agent to validate the config setup", Some("goose"))
            .expect("generate");
        let types: Vec<_> = generation
            .artifacts
            .iter()
            .map(|artifact| artifact.component_type)
            .collect();
        assert_eq!(
            types,
            vec![
                ComponentType::Validation,
                ComponentType::Specialization,
                ComponentType::Configuration
            ]
        );
        assert!(!generation.resolution.substituted);
    }

    #[test]
    fn unknown_platform_is_substituted_not_fatal() {
        let generator = MultiPlatformGenerator::default();
        let generation = generator
            .generate("Create a 'deploy-app' automation tool", Some("cursor"))
            .expect("generate");
        assert_eq!(generation.resolution.platform, "claude-code");
        assert!(generation.resolution.substituted);
        assert_eq!(generation.analysis.platform, "claude-code");
        assert_eq!(generation.artifacts[0].filename, "DEPLOY-APP.SKILL.md");
    }

    #[test]
    fn empty_platform_list_means_every_platform() {
        let generator = MultiPlatformGenerator::default();
        let report = generator.generate_many("Create a 'deploy-app' automation tool", &[]);
        let platforms: Vec<_> = report
            .outcomes
            .iter()
            .map(|outcome| outcome.platform.as_str())
            .collect();
        assert_eq!(platforms, generator.registry().names());
        assert_eq!(report.failures().count(), 0);
        assert_eq!(report.artifacts().len(), platforms.len());
    }
}
