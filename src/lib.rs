//! Deterministic generation of AI-assistant components for multiple hosts.
//!
//! A free-text request is classified by [`analyze()`] into component types,
//! a complexity tier, a name and integration tags. Each detected type becomes
//! a [`ComponentSpec`] that [`render::ComponentGenerator`] turns into one
//! platform-specific artifact. The free functions here run against the
//! built-in platform registry; construct a [`MultiPlatformGenerator`] to use
//! an override registry.

pub mod analyze;
pub mod component;
pub mod error;
pub mod generate;
pub mod platform;
pub mod render;
mod templates;
pub mod util;

pub use analyze::Analysis;
pub use component::{Complexity, ComponentSpec, ComponentType, Integration};
pub use error::GenerateError;
pub use generate::{BatchReport, Generation, MultiPlatformGenerator, PlatformOutcome};
pub use platform::{PlatformConfig, PlatformDetector, PlatformRegistry, PlatformResolution};
pub use render::{Artifact, ComponentGenerator, Header};

/// Platform detected from marker directories around the working directory.
pub fn detect_platform() -> String {
    let registry = PlatformRegistry::builtin();
    PlatformDetector::new(&registry).detect().to_string()
}

/// Classify a request; `platform` is recorded in the result.
pub fn analyze(text: &str, platform: &str) -> Analysis {
    analyze::analyze(text, platform)
}

/// Render every detected component type for one platform (detected when `None`).
pub fn generate(text: &str, platform: Option<&str>) -> error::Result<Generation> {
    MultiPlatformGenerator::default().generate(text, platform)
}

/// Render for each platform; failures are recorded in the report, not returned.
pub fn generate_many(text: &str, platforms: &[String]) -> BatchReport {
    MultiPlatformGenerator::default().generate_many(text, platforms)
}
