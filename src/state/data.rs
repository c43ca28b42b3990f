/// Shared data structures for the gallery
///
/// These structs represent the data model that flows between
/// the configuration layer and the UI layer.

use serde::{Deserialize, Serialize};

/// A single picture: its full-resolution source and its thumbnail source
///
/// Both fields are URL-or-path strings. Two images are the same image when
/// both sources match.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Image {
    /// Full-resolution source, shown in the preview panel
    pub image: String,
    /// Thumbnail source, shown in the thumbnail row
    pub thumbnail: String,
}

impl Image {
    pub fn new(image: impl Into<String>, thumbnail: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            thumbnail: thumbnail.into(),
        }
    }
}

/// An image as written in a gallery description file
///
/// The thumbnail may be left out, in which case one is generated from
/// the full-resolution image when the description is loaded.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ImageEntry {
    pub image: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

impl From<Image> for ImageEntry {
    fn from(image: Image) -> Self {
        Self {
            image: image.image,
            thumbnail: Some(image.thumbnail),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_without_thumbnail() {
        let entry: ImageEntry = serde_json::from_str(r#"{"image": "a.png"}"#).unwrap();
        assert_eq!(entry.image, "a.png");
        assert_eq!(entry.thumbnail, None);
    }

    #[test]
    fn test_entry_rejects_unknown_fields() {
        let result: Result<ImageEntry, _> =
            serde_json::from_str(r#"{"image": "a.png", "caption": "hi"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_images_compare_by_both_sources() {
        let a = Image::new("a.png", "a_t.png");
        assert_eq!(a, Image::new("a.png", "a_t.png"));
        assert_ne!(a, Image::new("a.png", "other_t.png"));
    }
}
