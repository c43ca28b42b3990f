use image::ImageFormat;
use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use crate::error::{GalleryError, Result};

/// Generated thumbnails fit inside this box (aspect ratio preserved)
pub const THUMBNAIL_SIZE: u32 = 300;

/// Get the default thumbnail cache directory
/// Returns ~/.cache/image-switcher/thumbnails on Linux
pub fn default_cache_dir() -> Result<PathBuf> {
    let mut path = dirs_next::cache_dir()
        .or_else(dirs_next::home_dir)
        .ok_or(GalleryError::CacheDir)?;

    path.push("image-switcher");
    path.push("thumbnails");

    Ok(path)
}

/// Get the thumbnail path for a source image (doesn't generate, just returns the expected path)
///
/// The name is a digest of the canonical source path, its length and its
/// modification time, so a moved, replaced or edited file gets a new thumbnail.
pub fn thumbnail_path(cache_dir: &Path, source: &Path) -> Result<PathBuf> {
    let canonical = fs::canonicalize(source).map_err(|e| GalleryError::Thumbnail {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    let metadata = fs::metadata(&canonical).map_err(|e| GalleryError::Thumbnail {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut hasher = DefaultHasher::new();
    canonical.hash(&mut hasher);
    metadata.len().hash(&mut hasher);
    if let Ok(modified) = metadata.modified() {
        modified.hash(&mut hasher);
    }

    Ok(cache_dir.join(format!("{:016x}.thumb.jpg", hasher.finish())))
}

/// Check if an up-to-date thumbnail has already been generated for a source image
pub fn thumbnail_exists(cache_dir: &Path, source: &Path) -> bool {
    thumbnail_path(cache_dir, source).is_ok_and(|path| path.exists())
}

/// Generate a thumbnail for `source` inside `cache_dir`
///
/// A cached thumbnail for the same, unchanged file is reused as is.
pub fn generate_thumbnail(source: &Path, cache_dir: &Path) -> Result<PathBuf> {
    let thumbnail_path = thumbnail_path(cache_dir, source)?;
    if thumbnail_path.exists() {
        tracing::debug!(path = %thumbnail_path.display(), "reusing cached thumbnail");
        return Ok(thumbnail_path);
    }

    fs::create_dir_all(cache_dir).map_err(|source| GalleryError::Io {
        path: cache_dir.to_path_buf(),
        source,
    })?;

    let img = image::open(source).map_err(|e| GalleryError::Thumbnail {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;

    // Shrink only; small images keep their size
    let img = if img.width() > THUMBNAIL_SIZE || img.height() > THUMBNAIL_SIZE {
        img.thumbnail(THUMBNAIL_SIZE, THUMBNAIL_SIZE)
    } else {
        img
    };

    // JPEG has no alpha channel
    let thumbnail = img.to_rgb8();

    thumbnail
        .save_with_format(&thumbnail_path, ImageFormat::Jpeg)
        .map_err(|e| GalleryError::Thumbnail {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;

    tracing::info!(
        source = %source.display(),
        path = %thumbnail_path.display(),
        "📸 Generated thumbnail"
    );
    Ok(thumbnail_path)
}
