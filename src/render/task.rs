//! JSON task documents, built with serde rather than a text template.
use crate::component::{ComponentSpec, Integration};
use crate::error::{GenerateError, Result};
use serde::Serialize;

const TASK_VERSION: &str = "1.0.0";

#[derive(Serialize)]
struct TaskDocument<'a> {
    name: &'a str,
    description: &'a str,
    #[serde(rename = "type")]
    component_type: &'static str,
    artifact: &'a str,
    version: &'static str,
    platform: &'a str,
    complexity: &'static str,
    integrations: &'a [Integration],
    triggers: &'a [String],
    ai: AiSettings,
    execution: Execution,
}

#[derive(Serialize)]
struct AiSettings {
    enabled: bool,
    model: &'static str,
    provider: &'static str,
}

#[derive(Serialize)]
struct Execution {
    timeout: u32,
    retry_policy: RetryPolicy,
}

#[derive(Serialize)]
struct RetryPolicy {
    max_retries: u32,
    backoff: &'static str,
}

/// Pretty-printed task document with a trailing newline.
pub(super) fn render_task(family: &str, spec: &ComponentSpec, artifact: &str) -> Result<String> {
    let document = TaskDocument {
        name: spec.name(),
        description: spec.description(),
        component_type: spec.component_type().as_str(),
        artifact,
        version: TASK_VERSION,
        platform: spec.platform(),
        complexity: spec.complexity().as_str(),
        integrations: spec.integration_points(),
        triggers: spec.trigger_keywords(),
        ai: AiSettings {
            enabled: true,
            model: "gpt-4",
            provider: "openai",
        },
        execution: Execution {
            timeout: 300,
            retry_policy: RetryPolicy {
                max_retries: 3,
                backoff: "exponential",
            },
        },
    };
    let mut text = serde_json::to_string_pretty(&document).map_err(|err| GenerateError::Encode {
        family: family.to_string(),
        detail: err.to_string(),
    })?;
    text.push('\n');
    Ok(text)
}
