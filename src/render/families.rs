//! Dispatch table from (dialect, component type) to a template family.
use super::header::HeaderStyle;
use crate::component::ComponentType;
use crate::platform::SyntaxDialect;
use crate::templates;

/// How a family turns template variables into text.
#[derive(Debug, Clone, Copy)]
pub(super) enum Strategy {
    /// Line-based placeholder interpolation over an embedded template.
    Template(&'static str),
    /// Structured JSON task document.
    TaskJson,
}

#[derive(Debug)]
pub(super) struct TemplateFamily {
    pub(super) id: &'static str,
    pub(super) header: HeaderStyle,
    pub(super) strategy: Strategy,
}

static CLAUDE_SKILL: TemplateFamily = TemplateFamily {
    id: "claude-code/skill",
    header: HeaderStyle::Frontmatter,
    strategy: Strategy::Template(templates::CLAUDE_SKILL_MD),
};
static CLAUDE_COMMAND: TemplateFamily = TemplateFamily {
    id: "claude-code/command",
    header: HeaderStyle::Frontmatter,
    strategy: Strategy::Template(templates::CLAUDE_COMMAND_MD),
};
static CLAUDE_COMPONENT: TemplateFamily = TemplateFamily {
    id: "claude-code/component",
    header: HeaderStyle::Frontmatter,
    strategy: Strategy::Template(templates::CLAUDE_COMPONENT_MD),
};
static GEMINI_WORKFLOW: TemplateFamily = TemplateFamily {
    id: "gemini-cli/workflow",
    header: HeaderStyle::JsDoc,
    strategy: Strategy::Template(templates::GEMINI_WORKFLOW_JS),
};
static GEMINI_PROMPT: TemplateFamily = TemplateFamily {
    id: "gemini-cli/prompt",
    header: HeaderStyle::YamlKeys,
    strategy: Strategy::Template(templates::GEMINI_PROMPT_MD),
};
static GEMINI_COMPONENT: TemplateFamily = TemplateFamily {
    id: "gemini-cli/component",
    header: HeaderStyle::YamlKeys,
    strategy: Strategy::Template(templates::GEMINI_COMPONENT_MD),
};
static KILOCODE_AUTOMATION: TemplateFamily = TemplateFamily {
    id: "kilocode/automation",
    header: HeaderStyle::JsDoc,
    strategy: Strategy::Template(templates::KILOCODE_AUTOMATION_JS),
};
static KILOCODE_TASK: TemplateFamily = TemplateFamily {
    id: "kilocode/task",
    header: HeaderStyle::Json,
    strategy: Strategy::TaskJson,
};
static KILOCODE_COMPONENT: TemplateFamily = TemplateFamily {
    id: "kilocode/component",
    header: HeaderStyle::YamlKeys,
    strategy: Strategy::Template(templates::KILOCODE_COMPONENT_YAML),
};
static GOOSE_MODULE: TemplateFamily = TemplateFamily {
    id: "goose/module",
    header: HeaderStyle::HashComment,
    strategy: Strategy::Template(templates::GOOSE_MODULE_PY),
};
static GOOSE_COMMAND: TemplateFamily = TemplateFamily {
    id: "goose/command",
    header: HeaderStyle::YamlKeys,
    strategy: Strategy::Template(templates::GOOSE_COMMAND_YAML),
};
static GOOSE_COMPONENT: TemplateFamily = TemplateFamily {
    id: "goose/component",
    header: HeaderStyle::YamlKeys,
    strategy: Strategy::Template(templates::GOOSE_COMPONENT_YAML),
};
static OPENAI_AUTOMATION: TemplateFamily = TemplateFamily {
    id: "openai-cli/automation",
    header: HeaderStyle::JsDoc,
    strategy: Strategy::Template(templates::OPENAI_AUTOMATION_JS),
};
static OPENAI_COMPONENT: TemplateFamily = TemplateFamily {
    id: "openai-cli/component",
    header: HeaderStyle::YamlKeys,
    strategy: Strategy::Template(templates::OPENAI_COMPONENT_YAML),
};
static PORTABLE_COMPONENT: TemplateFamily = TemplateFamily {
    id: "generic/component",
    header: HeaderStyle::YamlKeys,
    strategy: Strategy::Template(templates::GENERIC_COMPONENT_YAML),
};

static SPECIFIC: &[(SyntaxDialect, ComponentType, &TemplateFamily)] = &[
    (SyntaxDialect::MarkdownFrontmatter, ComponentType::Automation, &CLAUDE_SKILL),
    (SyntaxDialect::MarkdownFrontmatter, ComponentType::UserControl, &CLAUDE_COMMAND),
    (SyntaxDialect::Gemini, ComponentType::Automation, &GEMINI_WORKFLOW),
    (SyntaxDialect::Gemini, ComponentType::Specialization, &GEMINI_PROMPT),
    (SyntaxDialect::Kilocode, ComponentType::Automation, &KILOCODE_AUTOMATION),
    (SyntaxDialect::Kilocode, ComponentType::UserControl, &KILOCODE_TASK),
    (SyntaxDialect::Goose, ComponentType::Automation, &GOOSE_MODULE),
    (SyntaxDialect::Goose, ComponentType::UserControl, &GOOSE_COMMAND),
    (SyntaxDialect::Openai, ComponentType::Automation, &OPENAI_AUTOMATION),
];

fn default_family(dialect: SyntaxDialect) -> &'static TemplateFamily {
    match dialect {
        SyntaxDialect::MarkdownFrontmatter => &CLAUDE_COMPONENT,
        SyntaxDialect::Gemini => &GEMINI_COMPONENT,
        SyntaxDialect::Kilocode => &KILOCODE_COMPONENT,
        SyntaxDialect::Goose => &GOOSE_COMPONENT,
        SyntaxDialect::Openai => &OPENAI_COMPONENT,
        SyntaxDialect::Portable => &PORTABLE_COMPONENT,
    }
}

/// Family for a pairing; types without a specific family use the dialect default.
pub(super) fn family_for(
    dialect: SyntaxDialect,
    component_type: ComponentType,
) -> &'static TemplateFamily {
    SPECIFIC
        .iter()
        .find(|(d, t, _)| *d == dialect && *t == component_type)
        .map(|(_, _, family)| *family)
        .unwrap_or_else(|| default_family(dialect))
}

/// Every family, specific ones first; used to check template coverage.
#[cfg(test)]
pub(super) fn all_families() -> Vec<&'static TemplateFamily> {
    let dialects = [
        SyntaxDialect::MarkdownFrontmatter,
        SyntaxDialect::Gemini,
        SyntaxDialect::Kilocode,
        SyntaxDialect::Goose,
        SyntaxDialect::Openai,
        SyntaxDialect::Portable,
    ];
    SPECIFIC
        .iter()
        .map(|(_, _, family)| *family)
        .chain(dialects.into_iter().map(default_family))
        .collect()
}
