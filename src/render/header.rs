//! Header blocks: the machine-readable key/value preamble of every artifact.
//!
//! Each style writes `name`, `description` and `type` in that order and can
//! read them back exactly. Values that are not safe as plain scalars are
//! written as JSON strings, which double as YAML double-quoted scalars.
use crate::component::ComponentType;
use crate::error::{GenerateError, Result};
use serde::Serialize;

/// Syntax of an artifact's header block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderStyle {
    /// `---` delimited YAML frontmatter at the top of a Markdown file.
    Frontmatter,
    /// Top-level `key: value` lines after a `#` comment preamble.
    YamlKeys,
    /// ` * @key value` lines in a leading `/** */` block.
    JsDoc,
    /// Leading `# key: value` comment lines.
    HashComment,
    /// Members of a top-level JSON object.
    Json,
}

/// Identity fields recovered from a rendered artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub name: String,
    pub description: String,
    pub component_type: ComponentType,
}

const KEYS: [&str; 3] = ["name", "description", "type"];

/// Header lines for the given style, without a trailing newline.
///
/// Frontmatter delimiters and the JSON object are owned by the templates.
pub(super) fn render_header(
    style: HeaderStyle,
    name: &str,
    description: &str,
    component_type: ComponentType,
) -> String {
    let values = [name, description, component_type.as_str()];
    KEYS.iter()
        .zip(values)
        .map(|(key, value)| {
            let value = encode_scalar(value);
            match style {
                HeaderStyle::Frontmatter | HeaderStyle::YamlKeys | HeaderStyle::Json => {
                    format!("{key}: {value}")
                }
                HeaderStyle::JsDoc => format!(" * @{key} {value}"),
                HeaderStyle::HashComment => format!("# {key}: {value}"),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub(super) fn parse_header(style: HeaderStyle, content: &str) -> Result<Header> {
    let fields = match style {
        HeaderStyle::Frontmatter => frontmatter_fields(content)?,
        HeaderStyle::YamlKeys => yaml_key_fields(content),
        HeaderStyle::JsDoc => js_doc_fields(content),
        HeaderStyle::HashComment => hash_comment_fields(content),
        HeaderStyle::Json => return json_header(content),
    };
    header_from_fields(&fields)
}

fn header_from_fields(fields: &[(String, String)]) -> Result<Header> {
    let lookup = |key: &str| -> Result<String> {
        let raw = fields
            .iter()
            .find(|(field, _)| field == key)
            .map(|(_, value)| value.as_str())
            .ok_or_else(|| header_error(format!("missing header field {key:?}")))?;
        decode_scalar(raw)
    };
    let name = lookup("name")?;
    let description = lookup("description")?;
    let type_tag = lookup("type")?;
    let component_type = ComponentType::parse(&type_tag)
        .ok_or_else(|| header_error(format!("unknown component type {type_tag:?}")))?;
    Ok(Header {
        name,
        description,
        component_type,
    })
}

fn frontmatter_fields(content: &str) -> Result<Vec<(String, String)>> {
    let mut lines = content.lines();
    if lines.next() != Some("---") {
        return Err(header_error("missing frontmatter opening delimiter".into()));
    }
    let mut fields = Vec::new();
    for line in lines {
        if line == "---" {
            return Ok(fields);
        }
        if let Some(field) = split_key_value(line) {
            fields.push(field);
        }
    }
    Err(header_error("unterminated frontmatter block".into()))
}

fn yaml_key_fields(content: &str) -> Vec<(String, String)> {
    content
        .lines()
        .skip_while(|line| line.trim().is_empty() || line.starts_with('#'))
        .take_while(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .filter_map(split_key_value)
        .collect()
}

fn js_doc_fields(content: &str) -> Vec<(String, String)> {
    content
        .lines()
        .skip_while(|line| line.starts_with("#!"))
        .take_while(|line| line.trim_end() != "*/" && !line.trim_start().starts_with("*/"))
        .filter_map(|line| line.strip_prefix(" * @"))
        .filter_map(|rest| {
            let (key, value) = rest.split_once(' ')?;
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}

fn hash_comment_fields(content: &str) -> Vec<(String, String)> {
    content
        .lines()
        .map_while(|line| line.strip_prefix("# "))
        .filter_map(split_key_value)
        .collect()
}

fn json_header(content: &str) -> Result<Header> {
    let value: serde_json::Value = serde_json::from_str(content)
        .map_err(|err| header_error(format!("artifact is not JSON: {err}")))?;
    let field = |key: &str| -> Result<String> {
        value
            .get(key)
            .and_then(|member| member.as_str())
            .map(str::to_string)
            .ok_or_else(|| header_error(format!("missing header field {key:?}")))
    };
    let type_tag = field("type")?;
    let component_type = ComponentType::parse(&type_tag)
        .ok_or_else(|| header_error(format!("unknown component type {type_tag:?}")))?;
    Ok(Header {
        name: field("name")?,
        description: field("description")?,
        component_type,
    })
}

/// Top-level `key: value` line; indented lines belong to nested blocks.
fn split_key_value(line: &str) -> Option<(String, String)> {
    if line.starts_with(char::is_whitespace) {
        return None;
    }
    let (key, value) = line.split_once(':')?;
    let value = value.strip_prefix(' ').unwrap_or(value);
    Some((key.to_string(), value.to_string()))
}

fn encode_scalar(value: &str) -> String {
    if is_plain_safe(value) {
        return value.to_string();
    }
    serde_json::Value::String(value.to_string())
        .to_string()
        .replace("*/", "*\\/")
}

fn decode_scalar(raw: &str) -> Result<String> {
    if raw.starts_with('"') {
        serde_json::from_str(raw)
            .map_err(|err| header_error(format!("invalid quoted header value: {err}")))
    } else {
        Ok(raw.to_string())
    }
}

fn is_plain_safe(value: &str) -> bool {
    const INDICATORS: &[char] = &[
        '-', '?', ':', ',', '[', ']', '{', '}', '#', '&', '*', '!', '|', '>', '\'', '"', '%',
        '@', '`',
    ];
    const RESERVED: &[&str] = &["true", "false", "yes", "no", "null", "~", "on", "off"];

    let Some(first) = value.chars().next() else {
        return false;
    };
    if INDICATORS.contains(&first)
        || value.starts_with(char::is_whitespace)
        || value.ends_with(char::is_whitespace)
        || value.ends_with(':')
        || value.chars().any(char::is_control)
        || value.contains(": ")
        || value.contains(" #")
        || value.contains("*/")
    {
        return false;
    }
    let lower = value.to_ascii_lowercase();
    !RESERVED.contains(&lower.as_str()) && value.parse::<f64>().is_err()
}

fn header_error(detail: String) -> GenerateError {
    GenerateError::Header { detail }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STYLES: [HeaderStyle; 4] = [
        HeaderStyle::Frontmatter,
        HeaderStyle::YamlKeys,
        HeaderStyle::JsDoc,
        HeaderStyle::HashComment,
    ];

    fn wrap(style: HeaderStyle, header: &str) -> String {
        match style {
            HeaderStyle::Frontmatter => format!("---\n{header}\nextra: 1\n---\n\n# Body\n"),
            HeaderStyle::YamlKeys => {
                format!("# Title\n# summary\n\n{header}\nplatform: x\n\nbody: 1\n")
            }
            HeaderStyle::JsDoc => {
                format!("#!/usr/bin/env node\n/**\n{header}\n */\nclass X {{}}\n")
            }
            HeaderStyle::HashComment => format!("{header}\n# artifact: module\n\nimport json\n"),
            HeaderStyle::Json => unreachable!("json headers are not wrapped"),
        }
    }

    #[test]
    fn awkward_descriptions_survive_every_style() {
        let descriptions = [
            "Create a 'deploy-app' automation tool",
            "Key: value with # hash",
            "  padded  ",
            "line one\nline two",
            "ends with */ comment close",
            "\"starts quoted\"",
            "",
            "true",
            "42",
        ];
        for style in STYLES {
            for description in descriptions {
                let header =
                    render_header(style, "deploy-app", description, ComponentType::Validation);
                let parsed = parse_header(style, &wrap(style, &header)).expect("parse header");
                assert_eq!(parsed.name, "deploy-app");
                assert_eq!(parsed.description, description, "{style:?}");
                assert_eq!(parsed.component_type, ComponentType::Validation);
            }
        }
    }

    #[test]
    fn plain_values_are_written_unquoted() {
        let header = render_header(
            HeaderStyle::YamlKeys,
            "ops-bot",
            "Build a simple code quality validator",
            ComponentType::Automation,
        );
        assert_eq!(
            header,
            "name: ops-bot\ndescription: Build a simple code quality validator\ntype: automation"
        );
    }

    #[test]
    fn missing_frontmatter_is_an_error() {
        let err = parse_header(HeaderStyle::Frontmatter, "# no header\n").unwrap_err();
        assert!(matches!(err, GenerateError::Header { .. }));
    }

    #[test]
    fn unknown_type_is_an_error() {
        let content = "---\nname: a\ndescription: b\ntype: widget\n---\n";
        let err = parse_header(HeaderStyle::Frontmatter, content).unwrap_err();
        assert!(err.to_string().contains("widget"));
    }

    #[test]
    fn json_header_reads_top_level_members() {
        let content = r#"{"name": "a", "description": "b: c", "type": "user_control"}"#;
        let header = parse_header(HeaderStyle::Json, content).expect("json header");
        assert_eq!(header.description, "b: c");
        assert_eq!(header.component_type, ComponentType::UserControl);
    }
}
