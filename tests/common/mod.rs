//! Shared test infrastructure for integration tests.
#![allow(dead_code)]

use component_forge::{ComponentType, PlatformRegistry};
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

pub const DEPLOY_REQUEST: &str =
    "Create a 'deploy-app' automation tool with Docker and Kubernetes integration";

/// Run the `cforge` binary in `cwd` with a hermetic environment.
///
/// The config directory points into `home` so no per-user registry leaks in.
pub fn cforge(cwd: &Path, home: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cforge"))
        .args(args)
        .current_dir(cwd)
        .env_remove("CFORGE_REGISTRY")
        .env_remove("RUST_LOG")
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .output()
        .expect("spawn cforge")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Built-in registry in override-file form, with `platform` unable to render
/// `component_type`.
pub fn registry_json_without(platform: &str, component_type: ComponentType) -> String {
    let json = PlatformRegistry::builtin().to_json().expect("registry json");
    let mut value: serde_json::Value = serde_json::from_str(&json).expect("parse registry");
    let platforms = value["platforms"].as_array_mut().expect("platforms array");
    let entry = platforms
        .iter_mut()
        .find(|entry| entry["name"] == platform)
        .expect("platform present");
    for map in [
        "component_type_to_artifact_name",
        "component_type_to_extension",
    ] {
        entry[map]
            .as_object_mut()
            .expect("component map")
            .remove(component_type.as_str());
    }
    serde_json::to_string_pretty(&value).expect("serialize registry")
}
