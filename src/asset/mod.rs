/// Asset references
///
/// An asset is identified by an opaque key that doubles as the filename stem
/// of a JPEG inside the dataset's image directory:
/// `{images_dir}/{asset_id}.jpg`

use std::fmt;
use std::path::PathBuf;

/// Image directory of the dataset when none is configured
pub const DEFAULT_IMAGES_DIR: &str = "data/3565489/images/";

/// Extension appended to every asset identifier
pub const IMAGE_EXTENSION: &str = "jpg";

/// A directory plus an identifier, resolved to a file path on demand.
/// Built per call and thrown away afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRef {
    images_dir: String,
    asset_id: String,
}

impl AssetRef {
    /// The identifier is rendered with `Display` and used verbatim
    pub fn new(images_dir: impl Into<String>, asset_id: impl fmt::Display) -> Self {
        AssetRef {
            images_dir: images_dir.into(),
            asset_id: asset_id.to_string(),
        }
    }

    pub fn asset_id(&self) -> &str {
        &self.asset_id
    }

    pub fn images_dir(&self) -> &str {
        &self.images_dir
    }

    /// Expected location of the image file.
    ///
    /// Plain string joining: a `/` is inserted only when the directory is
    /// non-empty and doesn't already end with one. The identifier is never
    /// inspected, so `"42.jpg"` becomes `42.jpg.jpg`.
    pub fn path(&self) -> PathBuf {
        let file_name = format!("{}.{}", self.asset_id, IMAGE_EXTENSION);

        let joined = if self.images_dir.is_empty() || self.images_dir.ends_with('/') {
            format!("{}{}", self.images_dir, file_name)
        } else {
            format!("{}/{}", self.images_dir, file_name)
        };

        PathBuf::from(joined)
    }

    /// Check whether the image file is present on disk
    pub fn exists(&self) -> bool {
        self.path().exists()
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path().display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_default_directory_path() {
        let asset = AssetRef::new(DEFAULT_IMAGES_DIR, 7);
        assert_eq!(asset.path(), Path::new("data/3565489/images/7.jpg"));
    }

    #[test]
    fn test_directory_without_trailing_slash() {
        let asset = AssetRef::new("photos", "abc");
        assert_eq!(asset.path(), Path::new("photos/abc.jpg"));
    }

    #[test]
    fn test_empty_directory() {
        let asset = AssetRef::new("", 12);
        assert_eq!(asset.path(), Path::new("12.jpg"));
    }

    #[test]
    fn test_identifier_with_extension_is_not_stripped() {
        let asset = AssetRef::new(DEFAULT_IMAGES_DIR, "42.jpg");
        assert_eq!(asset.path(), Path::new("data/3565489/images/42.jpg.jpg"));
        assert!(!asset.exists());
    }

    #[test]
    fn test_display_matches_path() {
        let asset = AssetRef::new("dir/", "x");
        assert_eq!(asset.to_string(), "dir/x.jpg");
        assert_eq!(asset.asset_id(), "x");
        assert_eq!(asset.images_dir(), "dir/");
    }
}
