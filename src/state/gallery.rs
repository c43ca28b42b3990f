use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use super::data::Image;
use crate::error::{GalleryError, Result};

/// Construction input for a [`Gallery`]
///
/// Both options are required. `image_start` is expected to be one of
/// `images`, but any image is accepted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryConfig {
    pub images: Option<Vec<Image>>,
    pub image_start: Option<Image>,
}

impl GalleryConfig {
    /// Config with both options set
    pub fn new(images: Vec<Image>, image_start: Image) -> Self {
        Self {
            images: Some(images),
            image_start: Some(image_start),
        }
    }
}

/// Stable identity of one thumbnail block
///
/// Combines the position in the list with a digest of the full-resolution
/// source, so two entries sharing a source still get distinct keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThumbnailKey {
    pub index: usize,
    pub digest: u64,
}

impl ThumbnailKey {
    fn for_entry(index: usize, image: &Image) -> Self {
        let mut hasher = DefaultHasher::new();
        image.image.hash(&mut hasher);
        Self {
            index,
            digest: hasher.finish(),
        }
    }
}

/// The gallery: a fixed list of images and the one currently shown
#[derive(Debug, Clone)]
pub struct Gallery {
    images: Vec<Image>,
    current_image: Image,
}

impl Gallery {
    /// Build a gallery, failing if an option is missing or the list is empty
    pub fn new(config: GalleryConfig) -> Result<Self> {
        let images = config.images.ok_or(GalleryError::MissingOption("images"))?;
        let current_image = config
            .image_start
            .ok_or(GalleryError::MissingOption("imageStart"))?;

        if images.is_empty() {
            return Err(GalleryError::EmptyGallery);
        }

        let gallery = Gallery {
            images,
            current_image,
        };

        tracing::info!(images = gallery.images.len(), "🖼️  Gallery ready");

        for duplicate in gallery.duplicate_identities() {
            tracing::warn!(image = %duplicate, "image appears more than once in the gallery");
        }

        if gallery.selected_index().is_none() {
            tracing::warn!(
                image = %gallery.current_image.image,
                "start image is not part of the gallery"
            );
        }

        Ok(gallery)
    }

    /// Show `image` in the preview
    ///
    /// Any image is accepted, including one that is not in the list.
    pub fn select(&mut self, image: Image) {
        tracing::debug!(image = %image.image, "select");
        self.current_image = image;
    }

    pub fn current_image(&self) -> &Image {
        &self.current_image
    }

    pub fn images(&self) -> &[Image] {
        &self.images
    }

    /// Position of the current image in the list (first match)
    pub fn selected_index(&self) -> Option<usize> {
        self.images.iter().position(|i| *i == self.current_image)
    }

    /// One key per entry, in list order
    pub fn thumbnail_keys(&self) -> Vec<ThumbnailKey> {
        self.images
            .iter()
            .enumerate()
            .map(|(index, image)| ThumbnailKey::for_entry(index, image))
            .collect()
    }

    /// Full-resolution sources that occur more than once, in first-seen order
    pub fn duplicate_identities(&self) -> Vec<&str> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for image in &self.images {
            *counts.entry(image.image.as_str()).or_default() += 1;
        }

        let mut duplicates = Vec::new();
        for image in &self.images {
            let source = image.image.as_str();
            if counts[source] > 1 && !duplicates.contains(&source) {
                duplicates.push(source);
            }
        }
        duplicates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Image> {
        vec![
            Image::new("a.png", "a_t.png"),
            Image::new("b.png", "b_t.png"),
        ]
    }

    #[test]
    fn test_starts_on_image_start() {
        let images = sample();
        for start in &images {
            let gallery = Gallery::new(GalleryConfig::new(images.clone(), start.clone())).unwrap();
            assert_eq!(gallery.current_image(), start);
        }
    }

    #[test]
    fn test_select_replaces_current_image() {
        let images = sample();
        let mut gallery = Gallery::new(GalleryConfig::new(images.clone(), images[0].clone())).unwrap();

        gallery.select(images[1].clone());
        assert_eq!(gallery.current_image(), &images[1]);
        assert_eq!(gallery.selected_index(), Some(1));
    }

    #[test]
    fn test_select_accepts_outside_image() {
        let images = sample();
        let mut gallery = Gallery::new(GalleryConfig::new(images.clone(), images[0].clone())).unwrap();

        let outsider = Image::new("z.png", "z_t.png");
        gallery.select(outsider.clone());
        assert_eq!(gallery.current_image(), &outsider);
        assert_eq!(gallery.selected_index(), None);
        // List is untouched
        assert_eq!(gallery.images(), images.as_slice());
    }

    #[test]
    fn test_select_twice_is_idempotent() {
        let images = sample();
        let mut gallery = Gallery::new(GalleryConfig::new(images.clone(), images[0].clone())).unwrap();

        gallery.select(images[1].clone());
        let after_first = gallery.current_image().clone();
        gallery.select(images[1].clone());
        assert_eq!(gallery.current_image(), &after_first);
    }

    #[test]
    fn test_missing_images_fails() {
        let config = GalleryConfig {
            images: None,
            image_start: Some(Image::new("a.png", "a_t.png")),
        };
        assert!(matches!(
            Gallery::new(config),
            Err(GalleryError::MissingOption("images"))
        ));
    }

    #[test]
    fn test_missing_start_fails() {
        let config = GalleryConfig {
            images: Some(sample()),
            image_start: None,
        };
        assert!(matches!(
            Gallery::new(config),
            Err(GalleryError::MissingOption("imageStart"))
        ));
    }

    #[test]
    fn test_empty_gallery_fails() {
        let config = GalleryConfig::new(Vec::new(), Image::new("a.png", "a_t.png"));
        assert!(matches!(Gallery::new(config), Err(GalleryError::EmptyGallery)));
    }

    #[test]
    fn test_start_outside_list_is_accepted() {
        let gallery =
            Gallery::new(GalleryConfig::new(sample(), Image::new("z.png", "z_t.png"))).unwrap();
        assert_eq!(gallery.current_image().image, "z.png");
        assert_eq!(gallery.selected_index(), None);
    }

    #[test]
    fn test_keys_unique_with_duplicate_sources() {
        let images = vec![
            Image::new("a.png", "a_t.png"),
            Image::new("a.png", "a_other_t.png"),
            Image::new("b.png", "b_t.png"),
        ];
        let gallery = Gallery::new(GalleryConfig::new(images.clone(), images[0].clone())).unwrap();

        let keys = gallery.thumbnail_keys();
        assert_eq!(keys.len(), 3);
        assert_ne!(keys[0], keys[1]);
        // Same source, same digest; only the index tells them apart
        assert_eq!(keys[0].digest, keys[1].digest);
        assert_eq!(gallery.duplicate_identities(), vec!["a.png"]);
    }

    #[test]
    fn test_keys_are_stable() {
        let images = sample();
        let gallery = Gallery::new(GalleryConfig::new(images.clone(), images[0].clone())).unwrap();
        assert_eq!(gallery.thumbnail_keys(), gallery.thumbnail_keys());
        assert!(gallery.duplicate_identities().is_empty());
    }
}
