/// Build manifest
///
/// Records which artifact a named entry point was built into, so an external
/// page template can find it. One entry, one output file, one record:
///
/// ```json
/// {"status": "done", "chunks": {"imageSwitcher": [{"name": "image-switcher", "path": "/abs/path/image-switcher"}]}}
/// ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GalleryError, Result};

/// Name of the gallery's entry point
pub const ENTRY_NAME: &str = "imageSwitcher";

/// One output file of an entry point
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BundleChunk {
    /// File name of the artifact
    pub name: String,
    /// Absolute path of the artifact
    pub path: PathBuf,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BundleManifest {
    pub status: String,
    pub chunks: BTreeMap<String, Vec<BundleChunk>>,
}

impl BundleManifest {
    /// Manifest mapping `entry` to the single artifact at `output`
    pub fn single(entry: &str, output: &Path) -> Self {
        let name = output
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let mut chunks = BTreeMap::new();
        chunks.insert(
            entry.to_string(),
            vec![BundleChunk {
                name,
                path: output.to_path_buf(),
            }],
        );

        Self {
            status: "done".to_string(),
            chunks,
        }
    }

    /// Artifact path recorded for `entry`
    pub fn output_for(&self, entry: &str) -> Option<&Path> {
        self.chunks
            .get(entry)
            .and_then(|chunks| chunks.first())
            .map(|chunk| chunk.path.as_path())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| GalleryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "📝 Wrote build manifest");
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| GalleryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&json)?)
    }
}
