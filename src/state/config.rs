/// Loading a gallery description from JSON
///
/// A description recognises exactly two keys:
///
/// ```json
/// {
///     "images": [
///         {"image": "product-images/a.jpg", "thumbnail": "product-thumbnails/a.thumb.jpg"},
///         {"image": "product-images/b.jpg"}
///     ],
///     "imageStart": {"image": "product-images/a.jpg", "thumbnail": "product-thumbnails/a.thumb.jpg"}
/// }
/// ```
///
/// Relative sources are resolved against the media root. Entries without a
/// thumbnail get one generated into the thumbnail cache.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::data::{Image, ImageEntry};
use super::gallery::GalleryConfig;
use crate::error::{GalleryError, Result};
use crate::media::{source, thumbnail};

/// Raw document as it appears on disk
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct GalleryDocument {
    #[serde(default)]
    pub images: Option<Vec<ImageEntry>>,
    #[serde(default)]
    pub image_start: Option<ImageEntry>,
}

/// Where sources are resolved from and where generated thumbnails go
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOptions {
    pub media_root: PathBuf,
    pub cache_dir: PathBuf,
}

impl LoadOptions {
    /// Options with the media root made absolute against the working directory
    pub fn new(media_root: &Path, cache_dir: PathBuf) -> Result<Self> {
        let media_root = if media_root.as_os_str().is_empty() {
            Path::new(".")
        } else {
            media_root
        };
        let media_root = std::path::absolute(media_root).map_err(|source| GalleryError::Io {
            path: media_root.to_path_buf(),
            source,
        })?;

        Ok(Self {
            media_root,
            cache_dir,
        })
    }

    /// Directory holding a description file
    pub fn media_root_of(path: &Path) -> PathBuf {
        path.parent().map(Path::to_path_buf).unwrap_or_default()
    }
}

impl GalleryDocument {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve every entry into an [`Image`], generating missing thumbnails
    ///
    /// Absent options stay absent; [`crate::Gallery::new`] rejects them.
    pub fn resolve(self, options: &LoadOptions) -> Result<GalleryConfig> {
        let images = self
            .images
            .map(|entries| {
                entries
                    .into_iter()
                    .map(|entry| resolve_entry(entry, options))
                    .collect::<Result<Vec<_>>>()
            })
            .transpose()?;

        let image_start = self
            .image_start
            .map(|entry| resolve_entry(entry, options))
            .transpose()?;

        Ok(GalleryConfig {
            images,
            image_start,
        })
    }
}

impl GalleryConfig {
    /// Parse and resolve a JSON gallery description
    pub fn from_json(json: &str, options: &LoadOptions) -> Result<Self> {
        GalleryDocument::from_json(json)?.resolve(options)
    }

    /// Read, parse and resolve a gallery description file
    pub fn load(path: &Path, options: &LoadOptions) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| GalleryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(path = %path.display(), "📁 Loading gallery description");
        Self::from_json(&json, options)
    }
}

fn resolve_entry(entry: ImageEntry, options: &LoadOptions) -> Result<Image> {
    let image = source::resolve(&options.media_root, &entry.image);

    let thumbnail = match entry.thumbnail {
        Some(thumb) => source::resolve(&options.media_root, &thumb),
        None => {
            let local = source::local_path(&image).ok_or_else(|| GalleryError::Thumbnail {
                path: PathBuf::from(&image),
                reason: "remote images must come with a thumbnail".to_string(),
            })?;
            let generated = thumbnail::generate_thumbnail(&local, &options.cache_dir)?;
            generated.to_string_lossy().to_string()
        }
    };

    Ok(Image { image, thumbnail })
}
