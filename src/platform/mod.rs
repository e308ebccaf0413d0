//! Platform catalog: per-host conventions and environment detection.
//!
//! A platform is pure data. Rendering picks its template families from the
//! platform's dialect and its filenames from the platform's patterns, so the
//! same spec renders differently per host without any platform-specific code
//! outside the dialect tables.
use crate::component::ComponentType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

mod builtin;
mod detect;
mod registry;

pub use detect::PlatformDetector;
pub use registry::{user_registry_path, PlatformRegistry, REGISTRY_SCHEMA_VERSION};

/// Name of the neutral platform returned when no marker directory is found.
pub const GENERIC_PLATFORM: &str = "generic";

/// Rendering strategy family a platform's documents are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SyntaxDialect {
    /// Markdown documents with a YAML frontmatter block.
    MarkdownFrontmatter,
    Gemini,
    Kilocode,
    Goose,
    Openai,
    /// Cross-platform YAML definitions.
    Portable,
}

impl SyntaxDialect {
    pub fn as_str(self) -> &'static str {
        match self {
            SyntaxDialect::MarkdownFrontmatter => "markdown-frontmatter",
            SyntaxDialect::Gemini => "gemini",
            SyntaxDialect::Kilocode => "kilocode",
            SyntaxDialect::Goose => "goose",
            SyntaxDialect::Openai => "openai",
            SyntaxDialect::Portable => "portable",
        }
    }
}

/// Declarative conventions of one assistant host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlatformConfig {
    pub name: String,
    /// Directory names whose presence marks a project as using this host.
    #[serde(default)]
    pub marker_directories: Vec<String>,
    /// Directory generated components conventionally live under.
    #[serde(default)]
    pub base_dir: String,
    #[serde(default)]
    pub component_type_to_extension: BTreeMap<ComponentType, String>,
    #[serde(default)]
    pub component_type_to_artifact_name: BTreeMap<ComponentType, String>,
    /// Per-type filename patterns; see [`PlatformConfig::file_pattern_for`].
    #[serde(default)]
    pub file_patterns: BTreeMap<ComponentType, String>,
    pub default_file_pattern: String,
    /// Invocation syntax examples, echoed into documentation only.
    #[serde(default)]
    pub trigger_vocabulary: Vec<String>,
    pub resource_model: String,
    pub syntax_dialect: SyntaxDialect,
}

impl PlatformConfig {
    pub fn extension_for(&self, component_type: ComponentType) -> Option<&str> {
        self.component_type_to_extension
            .get(&component_type)
            .map(String::as_str)
    }

    pub fn artifact_for(&self, component_type: ComponentType) -> Option<&str> {
        self.component_type_to_artifact_name
            .get(&component_type)
            .map(String::as_str)
    }

    /// Filename pattern for a component type.
    ///
    /// Patterns substitute `{name}`, `{NAME}`, `{type}` and `{ext}`.
    pub fn file_pattern_for(&self, component_type: ComponentType) -> &str {
        self.file_patterns
            .get(&component_type)
            .map(String::as_str)
            .unwrap_or(&self.default_file_pattern)
    }

    /// Pattern for `component_type` with `name` substituted; `None` when the
    /// type has no extension on this platform.
    pub fn filename_for(&self, component_type: ComponentType, name: &str) -> Option<String> {
        let ext = self.extension_for(component_type)?;
        let filename = self
            .file_pattern_for(component_type)
            .replace("{name}", name)
            .replace("{NAME}", &name.to_uppercase())
            .replace("{type}", component_type.as_str())
            .replace("{ext}", ext);
        Some(filename)
    }

    /// True when any marker directory of this platform exists inside `dir`.
    pub fn has_marker_in(&self, dir: &Path) -> bool {
        self.marker_directories
            .iter()
            .any(|marker| dir.join(marker.trim_end_matches('/')).is_dir())
    }
}

/// How a requested platform name was resolved against the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformResolution {
    /// Name asked for, after detection when none was given.
    pub requested: String,
    /// Registered platform whose config is used.
    pub platform: String,
    /// True when `requested` was not registered and the default stood in.
    pub substituted: bool,
}
