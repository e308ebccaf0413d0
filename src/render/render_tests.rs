use super::*;
use crate::component::{Complexity, Integration};
use crate::platform::PlatformRegistry;

const DESCRIPTION: &str =
    "Create a 'deploy-app' automation tool with Docker and Kubernetes integration";

fn spec(component_type: ComponentType, platform: &str, description: &str) -> ComponentSpec {
    ComponentSpec::new(component_type, "deploy-app", description, platform)
        .with_trigger_keywords(vec!["create".into(), "a".into(), "deploy-app".into()])
        .with_complexity(Complexity::Medium)
        .with_integration_points(vec![Integration::Docker, Integration::Kubernetes])
}

#[test]
fn every_builtin_pairing_renders_and_reads_back() {
    let registry = PlatformRegistry::builtin();
    for config in registry.platforms() {
        let generator = ComponentGenerator::new(config);
        for component_type in ComponentType::ALL {
            let spec = spec(component_type, &config.name, DESCRIPTION);
            let artifact = generator
                .render(&spec)
                .unwrap_or_else(|err| panic!("{}/{component_type}: {err}", config.name));
            assert!(
                !artifact.content.contains("{{"),
                "{} left a placeholder",
                artifact.family
            );
            assert!(artifact.content.contains("deploy-app"), "{}", artifact.family);
            let header = generator
                .parse_header(component_type, &artifact.content)
                .unwrap_or_else(|err| panic!("{}: {err}", artifact.family));
            assert_eq!(header.name, "deploy-app");
            assert_eq!(header.description, DESCRIPTION);
            assert_eq!(header.component_type, component_type);
        }
    }
}

#[test]
fn awkward_descriptions_round_trip_on_every_platform() {
    let descriptions = [
        "Validate: inputs # carefully",
        "first line\nsecond line",
        "close the */ comment",
        "\"quoted\" start",
        "",
    ];
    let registry = PlatformRegistry::builtin();
    for config in registry.platforms() {
        let generator = ComponentGenerator::new(config);
        for component_type in ComponentType::ALL {
            for description in descriptions {
                let spec = spec(component_type, &config.name, description);
                let artifact = generator.render(&spec).expect("render");
                let header = generator
                    .parse_header(component_type, &artifact.content)
                    .unwrap_or_else(|err| panic!("{}: {err}", artifact.family));
                assert_eq!(header.description, description, "{}", artifact.family);
            }
        }
    }
}

#[test]
fn claude_skill_uses_upper_case_marker_filename() {
    let registry = PlatformRegistry::builtin();
    let config = registry.get("claude-code").expect("claude-code");
    let artifact = ComponentGenerator::new(config)
        .render(&spec(ComponentType::Automation, "claude-code", DESCRIPTION))
        .expect("render");
    assert_eq!(artifact.filename, "DEPLOY-APP.SKILL.md");
    assert_eq!(artifact.family, "claude-code/skill");
    assert!(artifact.content.starts_with("---\nname: deploy-app\n"));
    assert!(artifact.content.contains(DESCRIPTION));
    assert!(artifact.content.contains("- docker\n- kubernetes\n"));
}

#[test]
fn filenames_follow_platform_patterns() {
    let registry = PlatformRegistry::builtin();
    let cases = [
        ("claude-code", ComponentType::Validation, "deploy-app.validation.md"),
        ("gemini-cli", ComponentType::Automation, "deploy-app_workflow.js"),
        ("gemini-cli", ComponentType::Specialization, "deploy-app_prompt.md"),
        ("gemini-cli", ComponentType::Validation, "deploy-app_validation.md"),
        ("kilocode", ComponentType::UserControl, "deploy-app_task.json"),
        ("goose", ComponentType::Automation, "deploy-app_module.py"),
        ("openai-cli", ComponentType::Configuration, "deploy-app_configuration.yaml"),
        ("generic", ComponentType::UserControl, "deploy-app_user_control_generic.yaml"),
    ];
    for (platform, component_type, expected) in cases {
        let config = registry.get(platform).expect("registered");
        let filename = ComponentGenerator::new(config)
            .filename(&spec(component_type, platform, DESCRIPTION))
            .expect("filename");
        assert_eq!(filename, expected);
    }
}

#[test]
fn kilocode_task_is_structured_json() {
    let registry = PlatformRegistry::builtin();
    let config = registry.get("kilocode").expect("kilocode");
    let artifact = ComponentGenerator::new(config)
        .render(&spec(ComponentType::UserControl, "kilocode", DESCRIPTION))
        .expect("render");
    assert!(artifact.content.ends_with("}\n"));
    let value: serde_json::Value = serde_json::from_str(&artifact.content).expect("json");
    assert_eq!(value["type"], "user_control");
    assert_eq!(value["artifact"], "task");
    assert_eq!(value["integrations"], serde_json::json!(["docker", "kubernetes"]));
    assert_eq!(value["execution"]["retry_policy"]["max_retries"], 3);
}

#[test]
fn empty_lists_drop_their_lines() {
    let registry = PlatformRegistry::builtin();
    let config = registry.get("goose").expect("goose");
    let spec = ComponentSpec::new(ComponentType::Validation, "lint", "Lint things", "goose");
    let artifact = ComponentGenerator::new(config).render(&spec).expect("render");
    assert!(artifact.content.contains("triggers:\n\nintegrations:\n"));
}

#[test]
fn rendering_is_deterministic() {
    let registry = PlatformRegistry::builtin();
    for config in registry.platforms() {
        let generator = ComponentGenerator::new(config);
        let spec = spec(ComponentType::Automation, &config.name, DESCRIPTION);
        assert_eq!(
            generator.render(&spec).expect("first"),
            generator.render(&spec).expect("second")
        );
    }
}

#[test]
fn missing_mapping_is_unknown_component_type() {
    let registry = PlatformRegistry::builtin();
    let mut config = registry.get("kilocode").expect("kilocode").clone();
    config
        .component_type_to_artifact_name
        .remove(&ComponentType::Automation);
    let err = ComponentGenerator::new(&config)
        .render(&spec(ComponentType::Automation, "kilocode", DESCRIPTION))
        .unwrap_err();
    assert_eq!(
        err,
        GenerateError::UnknownComponentType {
            platform: "kilocode".into(),
            component_type: ComponentType::Automation,
        }
    );
}

#[test]
fn unresolved_pattern_placeholder_is_rejected() {
    let registry = PlatformRegistry::builtin();
    let mut config = registry.get("goose").expect("goose").clone();
    config.default_file_pattern = "{name}_{kind}.{ext}".to_string();
    let err = ComponentGenerator::new(&config)
        .filename(&spec(ComponentType::Validation, "goose", DESCRIPTION))
        .unwrap_err();
    assert!(matches!(err, GenerateError::InvalidFilePattern { .. }));
}

#[test]
fn every_template_carries_a_header_slot() {
    for family in families::all_families() {
        if let Strategy::Template(template) = family.strategy {
            assert_eq!(
                template.matches("{{header}}").count(),
                1,
                "{} needs exactly one header slot",
                family.id
            );
        }
    }
}
