//! `image_switcher` is a small image gallery built with the iced GUI toolkit.
//!
//! It shows one full-resolution preview and a row of thumbnails; pressing a
//! thumbnail shows that image in the preview. Everything a host needs is
//! exported from this crate root.

pub mod error;
pub mod manifest;
pub mod media;
pub mod state;
pub mod ui;

pub use error::{GalleryError, Result};
pub use manifest::BundleManifest;
pub use state::config::{GalleryDocument, LoadOptions};
pub use state::data::{Image, ImageEntry};
pub use state::gallery::{Gallery, GalleryConfig, ThumbnailKey};
pub use ui::gallery::Scene;

/// Gallery messages (events)
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// User pressed a thumbnail
    Select(Image),
}

impl Gallery {
    /// Apply a message to the gallery
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Select(image) => self.select(image),
        }
    }

    /// Render the gallery
    pub fn scene(&self) -> Scene {
        Scene::from_gallery(self)
    }
}
