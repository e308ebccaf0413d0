//! Marker-directory detection of the active platform.

use super::{PlatformConfig, PlatformRegistry, GENERIC_PLATFORM};
use std::env;
use std::path::{Path, PathBuf};

/// Infers the active platform from marker directories in a directory tree.
///
/// Walks from the start directory towards the filesystem root (or the
/// ceiling, when set). At each level platforms are checked in registry order
/// and the first hit wins.
#[derive(Debug, Clone)]
pub struct PlatformDetector<'a> {
    registry: &'a PlatformRegistry,
    ceiling: Option<PathBuf>,
}

impl<'a> PlatformDetector<'a> {
    pub fn new(registry: &'a PlatformRegistry) -> Self {
        Self {
            registry,
            ceiling: None,
        }
    }

    /// Stop the ancestor walk after checking `ceiling`.
    pub fn with_ceiling(mut self, ceiling: impl Into<PathBuf>) -> Self {
        self.ceiling = Some(ceiling.into());
        self
    }

    /// Detect from the process working directory.
    pub fn detect(&self) -> &'a str {
        match env::current_dir() {
            Ok(cwd) => self.detect_from(&cwd),
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    "cannot read working directory; using generic platform"
                );
                GENERIC_PLATFORM
            }
        }
    }

    /// Detect starting at `start` and walking up its ancestors.
    ///
    /// A relative `start` is taken from the process working directory.
    pub fn detect_from(&self, start: &Path) -> &'a str {
        if start.is_absolute() {
            return self.walk(start);
        }
        match env::current_dir() {
            Ok(cwd) => self.detect_relative_to(&cwd, start),
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    start = %start.display(),
                    "cannot read working directory; searching the relative path only"
                );
                self.walk(start)
            }
        }
    }

    fn detect_relative_to(&self, base: &Path, start: &Path) -> &'a str {
        let start: PathBuf = base.join(start).components().collect();
        self.walk(&start)
    }

    fn walk(&self, start: &Path) -> &'a str {
        for dir in start.ancestors() {
            if let Some(config) = self.match_level(dir) {
                tracing::debug!(
                    platform = %config.name,
                    dir = %dir.display(),
                    "detected platform marker"
                );
                return config.name.as_str();
            }
            if self.ceiling.as_deref() == Some(dir) {
                break;
            }
        }
        GENERIC_PLATFORM
    }

    /// Registry config for a name, falling back to the default platform.
    pub fn config_for(&self, name: &str) -> &'a PlatformConfig {
        self.registry.config_for(name)
    }

    fn match_level(&self, dir: &Path) -> Option<&'a PlatformConfig> {
        self.registry
            .platforms()
            .iter()
            .find(|config| config.has_marker_in(dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn detects_marker_in_start_directory() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::create_dir(temp.path().join(".gemini")).expect("mkdir");
        let registry = PlatformRegistry::builtin();
        let detector = PlatformDetector::new(&registry).with_ceiling(temp.path());
        assert_eq!(detector.detect_from(temp.path()), "gemini-cli");
    }

    #[test]
    fn nearest_level_wins_over_registry_order() {
        let temp = tempfile::tempdir().expect("tempdir");
        let nested = temp.path().join("project").join("src");
        fs::create_dir_all(&nested).expect("mkdir");
        fs::create_dir(temp.path().join(".claude")).expect("mkdir");
        fs::create_dir(temp.path().join("project").join("goose-workspace")).expect("mkdir");

        let registry = PlatformRegistry::builtin();
        let detector = PlatformDetector::new(&registry).with_ceiling(temp.path());
        assert_eq!(detector.detect_from(&nested), "goose");
    }

    #[test]
    fn relative_start_walks_past_its_own_components() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cwd = temp.path().join("project").join("src");
        fs::create_dir_all(&cwd).expect("mkdir");
        fs::create_dir(temp.path().join(".goose")).expect("mkdir");

        let registry = PlatformRegistry::builtin();
        let detector = PlatformDetector::new(&registry).with_ceiling(temp.path());
        assert_eq!(detector.detect_relative_to(&cwd, Path::new(".")), "goose");
        assert_eq!(detector.detect_relative_to(&cwd, Path::new("nested/dir")), "goose");
    }

    #[test]
    fn registry_order_breaks_ties_within_a_level() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::create_dir(temp.path().join(".openai")).expect("mkdir");
        fs::create_dir(temp.path().join(".kilocode")).expect("mkdir");
        let registry = PlatformRegistry::builtin();
        let detector = PlatformDetector::new(&registry).with_ceiling(temp.path());
        assert_eq!(detector.detect_from(temp.path()), "kilocode");
    }

    #[test]
    fn marker_files_are_not_directories() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::write(temp.path().join(".claude"), "not a dir").expect("write");
        let registry = PlatformRegistry::builtin();
        let detector = PlatformDetector::new(&registry).with_ceiling(temp.path());
        assert_eq!(detector.detect_from(temp.path()), GENERIC_PLATFORM);
    }

    #[test]
    fn no_marker_below_ceiling_is_generic() {
        let temp = tempfile::tempdir().expect("tempdir");
        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).expect("mkdir");
        let registry = PlatformRegistry::builtin();
        let detector = PlatformDetector::new(&registry).with_ceiling(temp.path());
        assert_eq!(detector.detect_from(&nested), GENERIC_PLATFORM);
        assert_eq!(detector.config_for(GENERIC_PLATFORM).name, GENERIC_PLATFORM);
        assert_eq!(detector.config_for("unknown").name, "claude-code");
    }
}
