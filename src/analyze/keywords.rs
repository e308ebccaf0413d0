use crate::component::{Complexity, ComponentType, Integration};

/// Component-type keyword table, in `ComponentType` declaration order.
///
/// `process` deliberately appears under two types.
pub(super) const COMPONENT_KEYWORDS: &[(ComponentType, &[&str])] = &[
    (
        ComponentType::Automation,
        &["automate", "automation", "workflow", "process", "pipeline"],
    ),
    (
        ComponentType::UserControl,
        &["command", "trigger", "manual", "user", "control"],
    ),
    (
        ComponentType::Validation,
        &["validate", "check", "verify", "test", "quality"],
    ),
    (
        ComponentType::Specialization,
        &["specialist", "expert", "agent", "analyze", "process"],
    ),
    (
        ComponentType::Configuration,
        &["config", "setup", "configure", "settings", "initialize"],
    ),
];

/// Complexity tiers in priority order: the first tier with a hit wins.
pub(super) const COMPLEXITY_TIERS: &[(Complexity, &[&str])] = &[
    (
        Complexity::Complex,
        &["complex", "advanced", "comprehensive", "full", "complete"],
    ),
    (Complexity::Simple, &["simple", "basic", "quick", "easy"]),
    (Complexity::Medium, &["medium", "standard", "normal"]),
];

/// Integration keyword table, in `Integration` declaration order.
pub(super) const INTEGRATION_KEYWORDS: &[(Integration, &[&str])] = &[
    (Integration::Docker, &["docker", "container", "dockerfile"]),
    (Integration::Kubernetes, &["kubernetes", "k8s", "helm"]),
    (Integration::Github, &["github", "git", "repository", "repo"]),
    (Integration::Database, &["database", "db", "sql", "nosql"]),
    (Integration::Api, &["api", "rest", "graphql", "endpoint"]),
    (Integration::Monitoring, &["monitor", "alert", "metrics", "logging"]),
    (Integration::CiCd, &["ci", "cd", "pipeline", "deploy", "build"]),
];

/// Case-insensitive substring test; `haystack` must already be lowercase.
pub(super) fn matches_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| haystack.contains(keyword))
}
