use iced::widget::{container, scrollable};
use iced::{Element, Length, Task, Theme};
use std::ffi::OsString;
use std::fmt::Display;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use image_switcher::manifest::{self, BundleManifest};
use image_switcher::media::thumbnail;
use image_switcher::{Gallery, GalleryConfig, LoadOptions, Message, Scene};

const USAGE: &str = "\
Usage:
  image-switcher <gallery.json> [--media-root DIR] [--cache-dir DIR]
  image-switcher --write-manifest <stats.json>";

/// Command line flags
#[derive(Debug)]
struct Flags {
    /// Gallery description to show
    gallery: Option<PathBuf>,
    /// Directory relative image sources are resolved against
    media_root: Option<PathBuf>,
    /// Where generated thumbnails are stored
    cache_dir: Option<PathBuf>,
    /// Write the build manifest to this path and exit
    write_manifest: Option<PathBuf>,
}

impl Flags {
    fn parse(mut args: pico_args::Arguments) -> Result<Self, String> {
        let media_root = args
            .opt_value_from_str("--media-root")
            .map_err(|e| e.to_string())?;
        let cache_dir = args
            .opt_value_from_str("--cache-dir")
            .map_err(|e| e.to_string())?;
        let write_manifest = args
            .opt_value_from_str("--write-manifest")
            .map_err(|e| e.to_string())?;

        let mut rest = args.finish().into_iter();
        let gallery = rest.next().map(PathBuf::from);

        if let Some(flag) = gallery
            .as_ref()
            .filter(|path| path.to_string_lossy().starts_with('-'))
        {
            return Err(format!("unknown flag `{}`", flag.display()));
        }
        let extra: Vec<OsString> = rest.collect();
        if !extra.is_empty() {
            return Err(format!("unexpected arguments: {extra:?}"));
        }

        Ok(Flags {
            gallery,
            media_root,
            cache_dir,
            write_manifest,
        })
    }
}

/// Main application state
struct ImageSwitcher {
    gallery: Gallery,
}

impl ImageSwitcher {
    /// Create a new instance of the application
    fn new(gallery: Gallery) -> (Self, Task<Message>) {
        (ImageSwitcher { gallery }, Task::none())
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        self.gallery.update(message);
        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let content = Scene::from_gallery(&self.gallery).view();

        container(scrollable(content))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(20)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok()))
        .init();

    let flags = Flags::parse(pico_args::Arguments::from_env())
        .unwrap_or_else(|e| fail(format!("{e}\n{USAGE}")));

    if let Some(stats_path) = flags.write_manifest {
        let exe = std::env::current_exe().unwrap_or_else(|e| fail(e));
        BundleManifest::single(manifest::ENTRY_NAME, &exe)
            .save(&stats_path)
            .unwrap_or_else(|e| fail(e));
        return Ok(());
    }

    let gallery = build_gallery(&flags).unwrap_or_else(|e| fail(e));

    iced::application(
        "Image Switcher",
        ImageSwitcher::update,
        ImageSwitcher::view,
    )
    .theme(ImageSwitcher::theme)
    .centered()
    .run_with(move || ImageSwitcher::new(gallery))
}

/// Load the gallery named on the command line
/// Fails before any window opens if the description is missing or invalid
fn build_gallery(flags: &Flags) -> Result<Gallery, String> {
    let path = flags.gallery.as_ref().ok_or_else(|| USAGE.to_string())?;

    let options = load_options(flags).map_err(|e| e.to_string())?;
    let config = GalleryConfig::load(path, &options).map_err(|e| e.to_string())?;
    Gallery::new(config).map_err(|e| e.to_string())
}

/// Media root and thumbnail cache for the gallery named in `flags`
fn load_options(flags: &Flags) -> image_switcher::Result<LoadOptions> {
    let media_root = match (&flags.media_root, &flags.gallery) {
        (Some(root), _) => root.clone(),
        (None, Some(path)) => LoadOptions::media_root_of(path),
        (None, None) => PathBuf::new(),
    };
    let cache_dir = match &flags.cache_dir {
        Some(dir) => dir.clone(),
        None => thumbnail::default_cache_dir()?,
    };

    LoadOptions::new(&media_root, cache_dir)
}

/// Log filter from `RUST_LOG`, falling back to `info`
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn fail(error: impl Display) -> ! {
    tracing::error!("❌ {error}");
    std::process::exit(1);
}
