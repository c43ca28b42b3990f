/// Media handling module
///
/// This module handles:
/// - Resolving image sources (paths and URLs) against a media root
/// - Generating thumbnails for images that come without one
/// - Caching generated thumbnails to disk

pub mod source;
pub mod thumbnail;
