//! Writing rendered artifacts under an output root.
//!
//! Each platform gets its own `generated-<platform>/` directory; content is
//! written verbatim.
use anyhow::{Context, Result};
use component_forge::render::Artifact;
use std::fs;
use std::path::{Path, PathBuf};

pub(crate) fn artifact_path(root: &Path, artifact: &Artifact) -> PathBuf {
    root.join(format!("generated-{}", artifact.platform))
        .join(&artifact.filename)
}

/// Write every artifact, returning the paths in input order.
pub(crate) fn write_artifacts(root: &Path, artifacts: &[Artifact]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let path = artifact_path(root, artifact);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create output dir {}", parent.display()))?;
        }
        fs::write(&path, &artifact.content)
            .with_context(|| format!("write artifact {}", path.display()))?;
        tracing::debug!(path = %path.display(), bytes = artifact.content.len(), "wrote artifact");
        written.push(path);
    }
    Ok(written)
}
