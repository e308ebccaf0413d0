//! Platform registry construction, override loading, and validation.
//!
//! The built-in catalog is assembled in code; an override file in the same
//! JSON schema can replace it wholesale so hosts can be added without a rebuild.
use super::builtin::{self, DEFAULT_PLATFORM};
use super::{PlatformConfig, PlatformResolution};
use crate::component::ComponentType;
use anyhow::{anyhow, bail, ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Current schema version for registry override files.
pub const REGISTRY_SCHEMA_VERSION: u32 = 1;

const REGISTRY_FILE_NAME: &str = "platforms.json";

/// Name rendered through every pattern when checking for filename collisions.
const SAMPLE_NAME: &str = "sample-component";

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct RegistryFile {
    schema_version: u32,
    default_platform: String,
    platforms: Vec<PlatformConfig>,
}

/// Ordered, immutable catalog of supported platforms.
#[derive(Debug, Clone)]
pub struct PlatformRegistry {
    platforms: Vec<PlatformConfig>,
    default_index: usize,
}

impl PlatformRegistry {
    /// The catalog compiled into the crate.
    pub fn builtin() -> Self {
        let platforms = builtin::platforms();
        let default_index = platforms
            .iter()
            .position(|config| config.name == DEFAULT_PLATFORM)
            .unwrap_or(0);
        Self {
            platforms,
            default_index,
        }
    }

    /// Build a registry from explicit definitions, validating them first.
    pub fn new(default_platform: &str, platforms: Vec<PlatformConfig>) -> Result<Self> {
        validate_platforms(&platforms)?;
        let default_index = platforms
            .iter()
            .position(|config| config.name == default_platform)
            .ok_or_else(|| anyhow!("default platform {default_platform:?} is not registered"))?;
        for config in &platforms {
            let missing = missing_component_types(config);
            if !missing.is_empty() {
                tracing::warn!(
                    platform = %config.name,
                    missing = ?missing,
                    "platform has no mapping for some component types; those renders will fail"
                );
            }
        }
        Ok(Self {
            platforms,
            default_index,
        })
    }

    /// Parse a registry override document.
    pub fn from_json(text: &str) -> Result<Self> {
        let file: RegistryFile =
            serde_json::from_str(text).context("parse platform registry JSON")?;
        ensure!(
            file.schema_version == REGISTRY_SCHEMA_VERSION,
            "unsupported platform registry schema_version {}",
            file.schema_version
        );
        Self::new(&file.default_platform, file.platforms)
    }

    /// Load a registry override file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read platform registry {}", path.display()))?;
        let registry = Self::from_json(&text)
            .with_context(|| format!("load platform registry {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            platforms = registry.platforms.len(),
            "loaded platform registry"
        );
        Ok(registry)
    }

    /// Render the registry in the override schema.
    pub fn to_json(&self) -> Result<String> {
        let file = RegistryFile {
            schema_version: REGISTRY_SCHEMA_VERSION,
            default_platform: self.default_config().name.clone(),
            platforms: self.platforms.clone(),
        };
        serde_json::to_string_pretty(&file).context("serialize platform registry")
    }

    pub fn platforms(&self) -> &[PlatformConfig] {
        &self.platforms
    }

    pub fn names(&self) -> Vec<&str> {
        self.platforms
            .iter()
            .map(|config| config.name.as_str())
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&PlatformConfig> {
        self.platforms.iter().find(|config| config.name == name)
    }

    pub fn default_config(&self) -> &PlatformConfig {
        &self.platforms[self.default_index]
    }

    /// Exact-match lookup that falls back to the default platform.
    pub fn config_for(&self, name: &str) -> &PlatformConfig {
        self.get(name).unwrap_or_else(|| self.default_config())
    }

    /// Resolve a name, recording whether the default had to stand in.
    pub fn resolve(&self, name: &str) -> (PlatformResolution, &PlatformConfig) {
        match self.get(name) {
            Some(config) => (
                PlatformResolution {
                    requested: name.to_string(),
                    platform: config.name.clone(),
                    substituted: false,
                },
                config,
            ),
            None => {
                let config = self.default_config();
                tracing::warn!(
                    requested = name,
                    substitute = %config.name,
                    "unknown platform; using default platform"
                );
                (
                    PlatformResolution {
                        requested: name.to_string(),
                        platform: config.name.clone(),
                        substituted: true,
                    },
                    config,
                )
            }
        }
    }
}

impl Default for PlatformRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Per-user override location (`<config_dir>/component-forge/platforms.json`).
pub fn user_registry_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("component-forge").join(REGISTRY_FILE_NAME))
}

fn validate_platforms(platforms: &[PlatformConfig]) -> Result<()> {
    ensure!(!platforms.is_empty(), "platform registry must not be empty");
    let mut seen = BTreeSet::new();
    for config in platforms {
        let name = config.name.trim();
        ensure!(!name.is_empty(), "platform name must be non-empty");
        ensure!(
            seen.insert(name.to_string()),
            "duplicate platform name {name:?}"
        );
        ensure!(
            !config.default_file_pattern.trim().is_empty(),
            "platform {name}: default_file_pattern must be non-empty"
        );
        let patterns =
            std::iter::once(&config.default_file_pattern).chain(config.file_patterns.values());
        for pattern in patterns {
            ensure!(
                pattern.contains("{name}") || pattern.contains("{NAME}"),
                "platform {name}: file pattern {pattern:?} must reference {{name}} or {{NAME}}"
            );
            ensure!(
                !pattern.contains('/') && !pattern.contains('\\'),
                "platform {name}: file pattern {pattern:?} must not contain path separators"
            );
        }
        for (component_type, extension) in &config.component_type_to_extension {
            ensure!(
                !extension.trim().is_empty(),
                "platform {name}: extension for {component_type} must be non-empty"
            );
        }
        let mut filenames = BTreeMap::new();
        for component_type in ComponentType::ALL {
            let Some(filename) = config.filename_for(component_type, SAMPLE_NAME) else {
                continue;
            };
            if let Some(previous) = filenames.insert(filename.clone(), component_type) {
                bail!(
                    "platform {name}: component types {previous} and {component_type} \
                     both produce file {filename:?}"
                );
            }
        }
        for marker in &config.marker_directories {
            ensure!(
                !marker.trim().is_empty(),
                "platform {name}: marker directories must be non-empty"
            );
        }
    }
    Ok(())
}

fn missing_component_types(config: &PlatformConfig) -> Vec<ComponentType> {
    ComponentType::ALL
        .into_iter()
        .filter(|component_type| {
            config.artifact_for(*component_type).is_none()
                || config.extension_for(*component_type).is_none()
        })
        .collect()
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
