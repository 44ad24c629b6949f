use std::io;
use std::path::{Component, Path, PathBuf};

use crate::types::StoredArtifact;

/// Extension every artifact is stored with
const ARTIFACT_EXT: &str = "mp3";

/// Flat on-disk store for synthesized audio
///
/// The directory listing is the only source of truth; there is no index
/// or sidecar metadata. Colliding stems overwrite silently; the last
/// write wins.
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    /// Open the store, creating the output root if absent
    ///
    /// Creation is idempotent and tolerates a concurrent first use
    /// racing on the directory.
    pub fn open(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Persist audio bytes under `<stem>.mp3`
    pub async fn save(&self, stem: &str, bytes: &[u8]) -> io::Result<PathBuf> {
        let path = self.root.join(format!("{stem}.{ARTIFACT_EXT}"));
        tokio::fs::write(&path, bytes).await?;

        tracing::debug!(path = %path.display(), size = bytes.len(), "artifact written");

        Ok(path)
    }

    /// Enumerate stored artifacts
    ///
    /// Only regular files directly under the root whose names end in
    /// `.mp3` (case-insensitive) are listed, in descending lexicographic
    /// order by name. With the default timestamp naming that puts the
    /// newest artifacts first.
    pub async fn list(&self) -> io::Result<Vec<StoredArtifact>> {
        let mut artifacts = Vec::new();
        let mut dir = tokio::fs::read_dir(&self.root).await?;

        while let Some(entry) = dir.next_entry().await? {
            let Ok(file_name) = entry.file_name().into_string() else {
                continue;
            };
            if !has_artifact_ext(&file_name) {
                continue;
            }
            let Ok(metadata) = entry.metadata().await else {
                continue;
            };
            if !metadata.is_file() {
                continue;
            }

            let modified = metadata
                .modified()
                .ok()
                .and_then(|time| jiff::Timestamp::try_from(time).ok())
                .map(|time| time.to_string());

            artifacts.push(StoredArtifact {
                file_name,
                size_bytes: metadata.len(),
                modified,
            });
        }

        artifacts.sort_by(|a, b| b.file_name.cmp(&a.file_name));

        Ok(artifacts)
    }

    /// Map a listed name back to its on-disk path
    ///
    /// Accepts only a bare `.mp3` file name; anything with path
    /// separators or traversal components is rejected so a crafted
    /// download request cannot escape the root.
    pub fn resolve(&self, file_name: &str) -> Option<PathBuf> {
        let mut components = Path::new(file_name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => {}
            _ => return None,
        }

        if !has_artifact_ext(file_name) {
            return None;
        }

        Some(self.root.join(file_name))
    }
}

fn has_artifact_ext(file_name: &str) -> bool {
    file_name.to_ascii_lowercase().ends_with(".mp3")
}
