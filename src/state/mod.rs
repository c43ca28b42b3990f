/// State management module
///
/// This module handles all gallery state, including:
/// - Shared data structures (data.rs)
/// - The gallery itself and its selection (gallery.rs)
/// - Loading gallery descriptions from disk (config.rs)

pub mod config;
pub mod data;
pub mod gallery;
