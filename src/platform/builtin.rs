//! Built-in platform definitions, in registry declaration order.

use super::{PlatformConfig, SyntaxDialect, GENERIC_PLATFORM};
use crate::component::ComponentType::{
    self, Automation, Configuration, Specialization, UserControl, Validation,
};
use std::collections::BTreeMap;

pub(super) const DEFAULT_PLATFORM: &str = "claude-code";

pub(super) fn platforms() -> Vec<PlatformConfig> {
    vec![
        claude_code(),
        gemini_cli(),
        kilocode(),
        goose(),
        openai_cli(),
        generic(),
    ]
}

fn claude_code() -> PlatformConfig {
    PlatformConfig {
        name: "claude-code".to_string(),
        marker_directories: strings(&[".claude"]),
        base_dir: ".claude/".to_string(),
        component_type_to_extension: uniform("md"),
        component_type_to_artifact_name: table(&[
            (Automation, "skill"),
            (UserControl, "command"),
            (Validation, "hook"),
            (Specialization, "agent"),
            (Configuration, "plugin"),
        ]),
        file_patterns: table(&[(Automation, "{NAME}.SKILL.{ext}")]),
        default_file_pattern: "{name}.{type}.{ext}".to_string(),
        trigger_vocabulary: strings(&["/", "@", "automatic"]),
        resource_model: "token-based".to_string(),
        syntax_dialect: SyntaxDialect::MarkdownFrontmatter,
    }
}

fn gemini_cli() -> PlatformConfig {
    PlatformConfig {
        name: "gemini-cli".to_string(),
        marker_directories: strings(&[".gemini", "gemini-workspace"]),
        base_dir: ".gemini/".to_string(),
        component_type_to_extension: table(&[
            (Automation, "js"),
            (UserControl, "md"),
            (Validation, "md"),
            (Specialization, "md"),
            (Configuration, "md"),
        ]),
        component_type_to_artifact_name: table(&[
            (Automation, "workflow"),
            (UserControl, "context"),
            (Validation, "config"),
            (Specialization, "prompt"),
            (Configuration, "config"),
        ]),
        file_patterns: table(&[
            (Automation, "{name}_workflow.{ext}"),
            (Specialization, "{name}_prompt.{ext}"),
        ]),
        default_file_pattern: "{name}_{type}.{ext}".to_string(),
        trigger_vocabulary: strings(&["gemini:", "context", "workflow"]),
        resource_model: "context-based".to_string(),
        syntax_dialect: SyntaxDialect::Gemini,
    }
}

fn kilocode() -> PlatformConfig {
    PlatformConfig {
        name: "kilocode".to_string(),
        marker_directories: strings(&[".kilocode", "kilocode-workspace"]),
        base_dir: ".kilocode/".to_string(),
        component_type_to_extension: table(&[
            (Automation, "js"),
            (UserControl, "json"),
            (Validation, "yaml"),
            (Specialization, "yaml"),
            (Configuration, "yaml"),
        ]),
        component_type_to_artifact_name: table(&[
            (Automation, "automation"),
            (UserControl, "task"),
            (Validation, "config"),
            (Specialization, "module"),
            (Configuration, "config"),
        ]),
        file_patterns: table(&[
            (Automation, "{name}_automation.{ext}"),
            (UserControl, "{name}_task.{ext}"),
        ]),
        default_file_pattern: "{name}_{type}.{ext}".to_string(),
        trigger_vocabulary: strings(&["kilo:", "task", "automation"]),
        resource_model: "api-based".to_string(),
        syntax_dialect: SyntaxDialect::Kilocode,
    }
}

fn goose() -> PlatformConfig {
    PlatformConfig {
        name: "goose".to_string(),
        marker_directories: strings(&[".goose", "goose-workspace"]),
        base_dir: ".goose/".to_string(),
        component_type_to_extension: table(&[
            (Automation, "py"),
            (UserControl, "yaml"),
            (Validation, "yaml"),
            (Specialization, "yaml"),
            (Configuration, "yaml"),
        ]),
        component_type_to_artifact_name: table(&[
            (Automation, "module"),
            (UserControl, "command"),
            (Validation, "extension"),
            (Specialization, "agent"),
            (Configuration, "config"),
        ]),
        file_patterns: table(&[
            (Automation, "{name}_module.{ext}"),
            (UserControl, "{name}_command.{ext}"),
        ]),
        default_file_pattern: "{name}_{type}.{ext}".to_string(),
        trigger_vocabulary: strings(&["goose:", "agent", "module"]),
        resource_model: "memory-based".to_string(),
        syntax_dialect: SyntaxDialect::Goose,
    }
}

fn openai_cli() -> PlatformConfig {
    PlatformConfig {
        name: "openai-cli".to_string(),
        marker_directories: strings(&[".openai", "openai-workspace"]),
        base_dir: ".openai/".to_string(),
        component_type_to_extension: table(&[
            (Automation, "js"),
            (UserControl, "yaml"),
            (Validation, "yaml"),
            (Specialization, "yaml"),
            (Configuration, "yaml"),
        ]),
        component_type_to_artifact_name: table(&[
            (Automation, "automation"),
            (UserControl, "task"),
            (Validation, "config"),
            (Specialization, "script"),
            (Configuration, "config"),
        ]),
        file_patterns: table(&[(Automation, "{name}_automation.{ext}")]),
        default_file_pattern: "{name}_{type}.{ext}".to_string(),
        trigger_vocabulary: strings(&["openai:", "ai", "task"]),
        resource_model: "api-based".to_string(),
        syntax_dialect: SyntaxDialect::Openai,
    }
}

fn generic() -> PlatformConfig {
    PlatformConfig {
        name: GENERIC_PLATFORM.to_string(),
        marker_directories: Vec::new(),
        base_dir: String::new(),
        component_type_to_extension: uniform("yaml"),
        component_type_to_artifact_name: uniform("component"),
        file_patterns: BTreeMap::new(),
        default_file_pattern: "{name}_{type}_generic.{ext}".to_string(),
        trigger_vocabulary: strings(&["/", ":", "@"]),
        resource_model: "neutral".to_string(),
        syntax_dialect: SyntaxDialect::Portable,
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn table(entries: &[(ComponentType, &str)]) -> BTreeMap<ComponentType, String> {
    entries
        .iter()
        .map(|(component_type, value)| (*component_type, value.to_string()))
        .collect()
}

fn uniform(value: &str) -> BTreeMap<ComponentType, String> {
    ComponentType::ALL
        .into_iter()
        .map(|component_type| (component_type, value.to_string()))
        .collect()
}
