use std::path::{Path, PathBuf};

/// Whether `source` is a URL with a scheme other than `file://`
pub fn is_remote(source: &str) -> bool {
    match source.split_once("://") {
        Some((scheme, _)) => {
            !scheme.eq_ignore_ascii_case("file")
                && !scheme.is_empty()
                && scheme.chars().all(|c| c.is_ascii_alphanumeric() || "+-.".contains(c))
        }
        None => false,
    }
}

/// Turn an image source into something the renderer can open
///
/// - `file://` prefixes are stripped
/// - absolute paths are kept
/// - relative paths are joined onto `media_root`
/// - remote URLs are returned unchanged; the renderer will fail to load them
pub fn resolve(media_root: &Path, source: &str) -> String {
    if is_remote(source) {
        return source.to_string();
    }

    let local = source.strip_prefix("file://").unwrap_or(source);
    let path = Path::new(local);

    if path.is_absolute() {
        local.to_string()
    } else {
        media_root.join(path).to_string_lossy().to_string()
    }
}

/// Local path of a source, if it has one
pub fn local_path(source: &str) -> Option<PathBuf> {
    if is_remote(source) {
        None
    } else {
        Some(PathBuf::from(source.strip_prefix("file://").unwrap_or(source)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_joined_to_root() {
        let resolved = resolve(Path::new("/srv/media"), "product-images/a.jpg");
        assert_eq!(resolved, "/srv/media/product-images/a.jpg");
    }

    #[test]
    fn test_absolute_kept() {
        assert_eq!(resolve(Path::new("/srv/media"), "/photos/a.jpg"), "/photos/a.jpg");
    }

    #[test]
    fn test_file_url_stripped() {
        assert_eq!(resolve(Path::new("/srv/media"), "file:///photos/a.jpg"), "/photos/a.jpg");
    }

    #[test]
    fn test_remote_passed_through() {
        let url = "https://example.com/media/a.jpg";
        assert!(is_remote(url));
        assert_eq!(resolve(Path::new("/srv/media"), url), url);
        assert_eq!(local_path(url), None);
    }

    #[test]
    fn test_plain_names_are_local() {
        assert!(!is_remote("a.png"));
        assert!(!is_remote("file:///a.png"));
        assert_eq!(local_path("a.png"), Some(PathBuf::from("a.png")));
    }
}
