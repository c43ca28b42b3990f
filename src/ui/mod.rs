/// UI module
///
/// Widgets for the gallery: a pure scene description and its iced view.

pub mod gallery;
