//! A single installable command template file.
use anyhow::{Context as _, Result};
use sha2::{Digest as _, Sha256};
use std::path::{Path, PathBuf};

use super::{Resource, ResourceChange, ResourceState};
use crate::manifest::ManifestEntry;

/// One command template file that can be checked and installed.
///
/// State is decided by content, not timestamps: the destination is `Correct`
/// only when its SHA-256 digest matches the source. A missing source is not
/// an error — `apply()` reports it as [`ResourceChange::Skipped`] so the
/// remaining manifest entries proceed independently.
#[derive(Debug, Clone)]
pub struct CommandFileResource {
    /// Destination file name, used in log lines and the summary.
    pub name: String,
    /// Absolute path of the template inside the repository.
    pub source: PathBuf,
    /// Absolute destination path inside the commands directory.
    pub dest: PathBuf,
}

impl CommandFileResource {
    /// Create a new command file resource.
    #[must_use]
    pub const fn new(name: String, source: PathBuf, dest: PathBuf) -> Self {
        Self { name, source, dest }
    }

    /// Create from a manifest entry, repository root, and destination directory.
    #[must_use]
    pub fn from_entry(entry: &ManifestEntry, root: &Path, dest_dir: &Path) -> Self {
        Self::new(
            entry.dest_name.to_string(),
            root.join(entry.source),
            dest_dir.join(entry.dest_name),
        )
    }

    /// Whether the source template exists in the repository.
    #[must_use]
    pub fn source_exists(&self) -> bool {
        self.source.is_file()
    }
}

impl Resource for CommandFileResource {
    fn description(&self) -> String {
        self.name.clone()
    }

    fn current_state(&self) -> Result<ResourceState> {
        if !self.dest.is_file() {
            return Ok(ResourceState::Missing);
        }
        if !self.source_exists() {
            // Nothing to compare against; apply() will skip the entry anyway.
            return Ok(ResourceState::Missing);
        }
        let src_digest = file_digest(&self.source)?;
        let dest_digest = file_digest(&self.dest)?;
        if src_digest == dest_digest {
            Ok(ResourceState::Correct)
        } else {
            let short = dest_digest.get(..12).unwrap_or(&dest_digest);
            Ok(ResourceState::Incorrect {
                current: format!("sha256:{short}"),
            })
        }
    }

    fn apply(&self) -> Result<ResourceChange> {
        if !self.source_exists() {
            return Ok(ResourceChange::Skipped {
                reason: format!("source not found: {}", self.source.display()),
            });
        }

        if matches!(self.current_state()?, ResourceState::Correct) {
            return Ok(ResourceChange::AlreadyCorrect);
        }

        if let Some(parent) = self.dest.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create parent: {}", parent.display()))?;
        }

        // Copy into a temp file next to the destination, then rename. The
        // destination is never observable in a half-written state.
        let tmp = self.dest.with_file_name(format!(".{}.tmp", self.name));
        std::fs::copy(&self.source, &tmp).with_context(|| {
            format!(
                "copying {} to {}",
                self.source.display(),
                tmp.display()
            )
        })?;
        if let Err(e) = std::fs::rename(&tmp, &self.dest) {
            std::fs::remove_file(&tmp).ok(); // best-effort cleanup
            return Err(e).with_context(|| format!("renaming into {}", self.dest.display()));
        }

        Ok(ResourceChange::Applied)
    }
}

/// SHA-256 digest of a file's content, as lowercase hex.
fn file_digest(path: &Path) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let digest = Sha256::digest(&bytes);
    Ok(digest.iter().map(|b| format!("{b:02x}")).collect())
}
