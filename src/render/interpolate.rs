//! Placeholder substitution for template families.
//!
//! `{{key}}` is replaced by a scalar. A line containing `{{*key}}` is emitted
//! once per item of the list `key` (and dropped when the list is empty); any
//! scalars on that line are substituted on every copy. Substituted values are
//! never rescanned.
use crate::error::{GenerateError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{(\*?)([A-Za-z_]+)\}\}").expect("placeholder regex"));

#[derive(Debug, Default)]
pub(super) struct Vars {
    scalars: BTreeMap<&'static str, String>,
    lists: BTreeMap<&'static str, Vec<String>>,
}

impl Vars {
    pub(super) fn scalar(&mut self, key: &'static str, value: impl Into<String>) -> &mut Self {
        self.scalars.insert(key, value.into());
        self
    }

    pub(super) fn list(&mut self, key: &'static str, items: Vec<String>) -> &mut Self {
        self.lists.insert(key, items);
        self
    }
}

pub(super) fn interpolate(family: &str, template: &str, vars: &Vars) -> Result<String> {
    let mut out = String::with_capacity(template.len() * 2);
    for line in template.split_inclusive('\n') {
        match list_key(line) {
            Some(key) => {
                let items = vars
                    .lists
                    .get(key)
                    .ok_or_else(|| unknown(family, &format!("*{key}")))?;
                for item in items {
                    out.push_str(&substitute(family, line, vars, Some(item))?);
                }
            }
            None => out.push_str(&substitute(family, line, vars, None)?),
        }
    }
    Ok(out)
}

fn list_key(line: &str) -> Option<&str> {
    PLACEHOLDER
        .captures_iter(line)
        .find(|caps| &caps[1] == "*")
        .and_then(|caps| caps.get(2))
        .map(|key| key.as_str())
}

fn substitute(family: &str, line: &str, vars: &Vars, item: Option<&str>) -> Result<String> {
    let mut out = String::with_capacity(line.len());
    let mut last = 0;
    for caps in PLACEHOLDER.captures_iter(line) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        out.push_str(&line[last..whole.start()]);
        let key = &caps[2];
        let value = if &caps[1] == "*" {
            item.ok_or_else(|| unknown(family, &format!("*{key}")))?
        } else {
            vars.scalars
                .get(key)
                .map(String::as_str)
                .ok_or_else(|| unknown(family, key))?
        };
        out.push_str(value);
        last = whole.end();
    }
    out.push_str(&line[last..]);
    Ok(out)
}

fn unknown(family: &str, placeholder: &str) -> GenerateError {
    GenerateError::UnknownPlaceholder {
        family: family.to_string(),
        placeholder: placeholder.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars() -> Vars {
        let mut vars = Vars::default();
        vars.scalar("name", "deploy-app")
            .scalar("sneaky", "{{name}}")
            .list("items", vec!["docker".into(), "kubernetes".into()])
            .list("empty", Vec::new());
        vars
    }

    #[test]
    fn scalars_and_list_lines_expand() {
        let template = "# {{name}}\n- {{*items}} for {{name}}\n- {{*empty}}\ndone\n";
        let out = interpolate("test", template, &vars()).expect("interpolate");
        assert_eq!(
            out,
            "# deploy-app\n- docker for deploy-app\n- kubernetes for deploy-app\ndone\n"
        );
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let out = interpolate("test", "{{sneaky}}", &vars()).expect("interpolate");
        assert_eq!(out, "{{name}}");
    }

    #[test]
    fn unknown_placeholders_name_the_family() {
        let err = interpolate("claude-code/skill", "{{missing}}\n", &vars()).unwrap_err();
        assert_eq!(
            err,
            GenerateError::UnknownPlaceholder {
                family: "claude-code/skill".into(),
                placeholder: "missing".into(),
            }
        );
    }

    #[test]
    fn non_placeholder_braces_pass_through() {
        let out = interpolate("test", "options = {}; x = {{ y }}\n", &vars()).expect("ok");
        assert_eq!(out, "options = {}; x = {{ y }}\n");
    }
}
