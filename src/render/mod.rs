//! Platform-aware rendering of component specs into artifacts.
//!
//! Rendering is a pure function of the component spec and the platform config: the
//! dialect picks a template family, the family's header style writes the
//! identity block, and the platform's file pattern names the result. Same
//! inputs always produce byte-identical filenames and content.

use crate::component::ComponentSpec;
use crate::component::ComponentType;
use crate::error::{GenerateError, Result};
use crate::platform::PlatformConfig;
use crate::util::{collapse_whitespace, pascal_case, snake_case, title_case};
use serde::Serialize;

mod families;
mod header;
mod interpolate;
mod task;

use families::{family_for, Strategy, TemplateFamily};
pub use header::{Header, HeaderStyle};
use interpolate::{interpolate, Vars};

/// One rendered document, ready to be written verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    pub platform: String,
    pub component_type: ComponentType,
    /// Template family the content was rendered from.
    pub family: String,
    pub filename: String,
    pub content: String,
}

/// Renders specs for one platform.
#[derive(Debug, Clone, Copy)]
pub struct ComponentGenerator<'a> {
    config: &'a PlatformConfig,
}

impl<'a> ComponentGenerator<'a> {
    pub fn new(config: &'a PlatformConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &'a PlatformConfig {
        self.config
    }

    pub fn render(&self, spec: &ComponentSpec) -> Result<Artifact> {
        let component_type = spec.component_type();
        let artifact = self
            .config
            .artifact_for(component_type)
            .ok_or_else(|| self.unknown_type(component_type))?;
        let filename = self.filename(spec)?;
        let family = family_for(self.config.syntax_dialect, component_type);
        let content = match family.strategy {
            Strategy::Template(template) => {
                let vars = self.template_vars(family, spec, artifact);
                interpolate(family.id, template, &vars)?
            }
            Strategy::TaskJson => task::render_task(family.id, spec, artifact)?,
        };
        tracing::debug!(
            platform = %self.config.name,
            component_type = %component_type,
            family = family.id,
            filename = %filename,
            bytes = content.len(),
            "rendered artifact"
        );
        Ok(Artifact {
            platform: self.config.name.clone(),
            component_type,
            family: family.id.to_string(),
            filename,
            content,
        })
    }

    /// Filename for a spec under this platform's naming convention.
    pub fn filename(&self, spec: &ComponentSpec) -> Result<String> {
        let component_type = spec.component_type();
        let filename = self
            .config
            .filename_for(component_type, spec.name())
            .ok_or_else(|| self.unknown_type(component_type))?;
        let pattern = self.config.file_pattern_for(component_type);
        let problem = if filename.contains(['{', '}']) {
            Some("unresolved placeholder")
        } else if filename.contains(['/', '\\']) {
            Some("filename contains a path separator")
        } else if filename.trim_matches('.').is_empty() {
            Some("filename is empty")
        } else {
            None
        };
        match problem {
            Some(detail) => Err(GenerateError::InvalidFilePattern {
                platform: self.config.name.clone(),
                pattern: pattern.to_string(),
                detail: detail.to_string(),
            }),
            None => Ok(filename),
        }
    }

    /// Read back the identity block of content rendered for `component_type`.
    pub fn parse_header(&self, component_type: ComponentType, content: &str) -> Result<Header> {
        let family = family_for(self.config.syntax_dialect, component_type);
        header::parse_header(family.header, content)
    }

    fn template_vars(
        &self,
        family: &TemplateFamily,
        spec: &ComponentSpec,
        artifact: &str,
    ) -> Vars {
        let name = spec.name();
        let description = spec.description();
        let complexity = spec.complexity();
        let keywords = spec.trigger_keywords();
        let integrations: Vec<String> = spec
            .integration_points()
            .iter()
            .map(|integration| integration.as_str().to_string())
            .collect();
        let quoted_keywords: Vec<String> = keywords.iter().map(|word| json_string(word)).collect();
        let integrations_prose = if integrations.is_empty() {
            "general tooling".to_string()
        } else {
            integrations.join(", ")
        };
        let trigger_prefix = self
            .config
            .trigger_vocabulary
            .first()
            .cloned()
            .unwrap_or_default();

        let mut vars = Vars::default();
        vars.scalar(
            "header",
            header::render_header(family.header, name, description, spec.component_type()),
        )
        .scalar("name", name)
        .scalar("title", title_case(name))
        .scalar("class_name", pascal_case(name))
        .scalar("snake_name", snake_case(name))
        .scalar("description", description)
        .scalar("summary", collapse_whitespace(description))
        .scalar("description_literal", json_string(description))
        .scalar("name_literal", json_string(name))
        .scalar("type", spec.component_type().as_str())
        .scalar("artifact", artifact)
        .scalar("platform", spec.platform())
        .scalar("complexity", complexity.as_str())
        .scalar("complexity_title", complexity.title())
        .scalar("complexity_scope", complexity.scope_label())
        .scalar("resource_model", self.config.resource_model.as_str())
        .scalar("base_dir", self.config.base_dir.as_str())
        .scalar("keywords_inline", quoted_keywords.join(", "))
        .scalar("integrations_prose", integrations_prose)
        .scalar("integrations_array", json_array(&integrations))
        .scalar("triggers_array", json_array(keywords))
        .scalar("trigger_prefix", trigger_prefix)
        .list("trigger_keywords", keywords.to_vec())
        .list("trigger_keywords_quoted", quoted_keywords)
        .list("integration_points", integrations);
        vars
    }

    fn unknown_type(&self, component_type: ComponentType) -> GenerateError {
        GenerateError::UnknownComponentType {
            platform: self.config.name.clone(),
            component_type,
        }
    }
}

fn json_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

fn json_array(items: &[String]) -> String {
    serde_json::Value::from(items.to_vec()).to_string()
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
