use iced::widget::image::Handle;
use iced::widget::{column, container, image, mouse_area};
use iced::{Element, Length, Padding};
use iced_aw::Wrap;

use crate::state::data::Image;
use crate::state::gallery::{Gallery, ThumbnailKey};
use crate::Message;

/// Display width of the preview image
pub const PREVIEW_WIDTH: f32 = 400.0;
/// Display width of each thumbnail
pub const THUMBNAIL_WIDTH: f32 = 100.0;
/// Space above each thumbnail block
pub const THUMBNAIL_TOP_SPACING: f32 = 10.0;

/// The large image at the top of the gallery
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewPanel {
    pub source: String,
    pub width: f32,
}

/// One clickable thumbnail
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailBlock {
    /// Identifies the block within a scene. iced matches widgets between
    /// renders by position, so the widget tree itself does not read it; the
    /// thumbnail row is fixed for the gallery's lifetime.
    pub key: ThumbnailKey,
    pub source: String,
    pub width: f32,
    pub top_spacing: f32,
    /// Image selected when this block is pressed
    pub selects: Image,
}

/// Everything one render of the gallery shows
///
/// Built from the gallery state alone, so the same state always renders the
/// same scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub preview: PreviewPanel,
    pub thumbnails: Vec<ThumbnailBlock>,
}

impl ThumbnailBlock {
    /// Message emitted when the block is pressed
    pub fn on_press(&self) -> Message {
        Message::Select(self.selects.clone())
    }
}

impl Scene {
    pub fn from_gallery(gallery: &Gallery) -> Self {
        let preview = PreviewPanel {
            source: gallery.current_image().image.clone(),
            width: PREVIEW_WIDTH,
        };

        let thumbnails = gallery
            .images()
            .iter()
            .zip(gallery.thumbnail_keys())
            .map(|(entry, key)| ThumbnailBlock {
                key,
                source: entry.thumbnail.clone(),
                width: THUMBNAIL_WIDTH,
                top_spacing: THUMBNAIL_TOP_SPACING,
                selects: entry.clone(),
            })
            .collect();

        Scene {
            preview,
            thumbnails,
        }
    }

    /// Block that would be activated by a click on thumbnail `index`
    pub fn thumbnail(&self, index: usize) -> Option<&ThumbnailBlock> {
        self.thumbnails.get(index)
    }

    /// Build the widget tree for this scene
    pub fn view<'a>(&self) -> Element<'a, Message> {
        let preview = container(
            image(Handle::from_path(&self.preview.source)).width(Length::Fixed(self.preview.width)),
        );

        let thumbnails: Vec<Element<'a, Message>> = self
            .thumbnails
            .iter()
            .map(|block| {
                let thumb = image(Handle::from_path(&block.source))
                    .width(Length::Fixed(block.width));

                container(mouse_area(thumb).on_press(block.on_press()))
                    .padding(Padding {
                        top: block.top_spacing,
                        ..Padding::ZERO
                    })
                    .into()
            })
            .collect();

        column![preview, Wrap::with_elements(thumbnails)].into()
    }
}
