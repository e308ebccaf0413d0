//! Component vocabulary and the immutable spec handed from analysis to rendering.
//!
//! Every tag set here is closed; keyword tables and platform maps are keyed by
//! these enums so a missing pairing is a lookup miss rather than a typo.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Abstract archetype a generated artifact represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    Automation,
    UserControl,
    Validation,
    Specialization,
    Configuration,
}

impl ComponentType {
    /// Declaration order; also the order analysis results are reported in.
    pub const ALL: [ComponentType; 5] = [
        ComponentType::Automation,
        ComponentType::UserControl,
        ComponentType::Validation,
        ComponentType::Specialization,
        ComponentType::Configuration,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ComponentType::Automation => "automation",
            ComponentType::UserControl => "user_control",
            ComponentType::Validation => "validation",
            ComponentType::Specialization => "specialization",
            ComponentType::Configuration => "configuration",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|component_type| component_type.as_str() == value)
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complexity tier extracted from the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Simple,
    #[default]
    Medium,
    Complex,
}

impl Complexity {
    pub fn as_str(self) -> &'static str {
        match self {
            Complexity::Simple => "simple",
            Complexity::Medium => "medium",
            Complexity::Complex => "complex",
        }
    }

    /// Capitalized tier label used in section headings.
    pub fn title(self) -> &'static str {
        match self {
            Complexity::Simple => "Simple",
            Complexity::Medium => "Medium",
            Complexity::Complex => "Complex",
        }
    }

    /// Scope wording used in prose ("Standard functionality for ...").
    pub fn scope_label(self) -> &'static str {
        match self {
            Complexity::Simple => "Simple",
            Complexity::Medium => "Standard",
            Complexity::Complex => "Comprehensive",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// External system a component is expected to coordinate with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Integration {
    #[serde(rename = "docker")]
    Docker,
    #[serde(rename = "kubernetes")]
    Kubernetes,
    #[serde(rename = "github")]
    Github,
    #[serde(rename = "database")]
    Database,
    #[serde(rename = "api")]
    Api,
    #[serde(rename = "monitoring")]
    Monitoring,
    #[serde(rename = "ci-cd")]
    CiCd,
}

impl Integration {
    pub fn as_str(self) -> &'static str {
        match self {
            Integration::Docker => "docker",
            Integration::Kubernetes => "kubernetes",
            Integration::Github => "github",
            Integration::Database => "database",
            Integration::Api => "api",
            Integration::Monitoring => "monitoring",
            Integration::CiCd => "ci-cd",
        }
    }
}

impl fmt::Display for Integration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One component to render for one platform.
///
/// Built from an [`Analysis`](crate::analyze::Analysis) for a single
/// generation call and dropped once rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentSpec {
    component_type: ComponentType,
    name: String,
    description: String,
    platform: String,
    trigger_keywords: Vec<String>,
    complexity: Complexity,
    integration_points: Vec<Integration>,
}

impl ComponentSpec {
    pub fn new(
        component_type: ComponentType,
        name: impl Into<String>,
        description: impl Into<String>,
        platform: impl Into<String>,
    ) -> Self {
        Self {
            component_type,
            name: name.into(),
            description: description.into(),
            platform: platform.into(),
            trigger_keywords: Vec::new(),
            complexity: Complexity::default(),
            integration_points: Vec::new(),
        }
    }

    pub fn with_trigger_keywords(mut self, keywords: Vec<String>) -> Self {
        self.trigger_keywords = keywords;
        self
    }

    pub fn with_complexity(mut self, complexity: Complexity) -> Self {
        self.complexity = complexity;
        self
    }

    pub fn with_integration_points(mut self, integrations: Vec<Integration>) -> Self {
        self.integration_points = integrations;
        self
    }

    pub fn component_type(&self) -> ComponentType {
        self.component_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn trigger_keywords(&self) -> &[String] {
        &self.trigger_keywords
    }

    pub fn complexity(&self) -> Complexity {
        self.complexity
    }

    pub fn integration_points(&self) -> &[Integration] {
        &self.integration_points
    }
}
