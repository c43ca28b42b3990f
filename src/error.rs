/// Error types for building a gallery
///
/// Only construction can fail. Once a `Gallery` exists, selecting an image
/// never errors, and images that fail to load are left to the renderer.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while building a gallery
#[derive(Debug, Error)]
pub enum GalleryError {
    /// A required option (`images` or `imageStart`) was not supplied
    #[error("missing required gallery option `{0}`")]
    MissingOption(&'static str),

    /// `images` was supplied but contained no entries
    #[error("gallery needs at least one image")]
    EmptyGallery,

    /// The gallery description is not valid JSON or has unknown keys
    #[error("invalid gallery description: {0}")]
    Parse(#[from] serde_json::Error),

    /// Reading or writing a file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A missing thumbnail could not be generated
    #[error("could not generate thumbnail for {}: {reason}", path.display())]
    Thumbnail { path: PathBuf, reason: String },

    /// Neither a cache directory nor a home directory could be found
    #[error("could not determine a cache directory for thumbnails")]
    CacheDir,
}

pub type Result<T> = std::result::Result<T, GalleryError>;
