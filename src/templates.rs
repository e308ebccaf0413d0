pub const CLAUDE_SKILL_MD: &str = include_str!("../templates/claude-code/skill.md");
pub const CLAUDE_COMMAND_MD: &str = include_str!("../templates/claude-code/command.md");
pub const CLAUDE_COMPONENT_MD: &str = include_str!("../templates/claude-code/component.md");
pub const GEMINI_WORKFLOW_JS: &str = include_str!("../templates/gemini-cli/workflow.js");
pub const GEMINI_PROMPT_MD: &str = include_str!("../templates/gemini-cli/prompt.md");
pub const GEMINI_COMPONENT_MD: &str = include_str!("../templates/gemini-cli/component.md");
pub const KILOCODE_AUTOMATION_JS: &str = include_str!("../templates/kilocode/automation.js");
pub const KILOCODE_COMPONENT_YAML: &str = include_str!("../templates/kilocode/component.yaml");
pub const GOOSE_MODULE_PY: &str = include_str!("../templates/goose/module.py");
pub const GOOSE_COMMAND_YAML: &str = include_str!("../templates/goose/command.yaml");
pub const GOOSE_COMPONENT_YAML: &str = include_str!("../templates/goose/component.yaml");
pub const OPENAI_AUTOMATION_JS: &str = include_str!("../templates/openai-cli/automation.js");
pub const OPENAI_COMPONENT_YAML: &str = include_str!("../templates/openai-cli/component.yaml");
pub const GENERIC_COMPONENT_YAML: &str = include_str!("../templates/generic/component.yaml");
