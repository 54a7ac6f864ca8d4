/// Image preview for the selected Pokémon
///
/// Decodes the picture with the `image` crate, resizes it to a fixed
/// square and hands the pixels to iced. Failures never leave this module:
/// they turn into a text placeholder.
use iced::widget::image::Handle;
use iced::widget::text;
use iced::{Element, Length};
use image::imageops::FilterType;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

/// Width and height of the rendered preview
pub const PREVIEW_SIZE: u32 = 150;

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// What the image label currently shows.
///
/// `Loaded` owns the only handle to the bitmap; replacing the preview
/// drops it.
#[derive(Debug, Clone, Default)]
pub enum Preview {
    /// Nothing selected yet
    #[default]
    Prompt,
    /// The record has no image path
    NoImage,
    /// The path could not be opened or decoded
    NotFound,
    Loaded(Handle),
}

impl Preview {
    /// Build the preview for `path`
    pub fn load(path: &str) -> Self {
        let path = path.trim();
        if path.is_empty() {
            return Preview::NoImage;
        }

        match decode(Path::new(path)) {
            Ok(handle) => {
                debug!("Loaded preview for {}", path);
                Preview::Loaded(handle)
            }
            Err(e) => {
                warn!("🖼️  Preview unavailable for {}: {}", path, e);
                Preview::NotFound
            }
        }
    }

    pub fn handle(&self) -> Option<&Handle> {
        match self {
            Preview::Loaded(handle) => Some(handle),
            _ => None,
        }
    }

    /// Text shown instead of a bitmap
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Preview::Prompt => Some("Select a Pokémon to see its image"),
            Preview::NoImage => Some("No image"),
            Preview::NotFound => Some("Image not found"),
            Preview::Loaded(_) => None,
        }
    }

    pub fn view<'a, Message: 'a>(&'a self) -> Element<'a, Message> {
        match (self.handle(), self.placeholder()) {
            (Some(handle), _) => iced::widget::image(handle.clone())
                .width(Length::Fixed(PREVIEW_SIZE as f32))
                .height(Length::Fixed(PREVIEW_SIZE as f32))
                .into(),
            (None, label) => text(label.unwrap_or_default()).size(16).into(),
        }
    }
}

/// Open, decode and resize to exactly PREVIEW_SIZE x PREVIEW_SIZE
fn decode(path: &Path) -> Result<Handle, PreviewError> {
    let resized = image::open(path)?.resize_exact(PREVIEW_SIZE, PREVIEW_SIZE, FilterType::Triangle);
    let pixels = resized.to_rgba8().into_raw();

    Ok(Handle::from_rgba(PREVIEW_SIZE, PREVIEW_SIZE, pixels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use tempfile::TempDir;

    #[test]
    fn test_empty_path_shows_no_image() {
        let preview = Preview::load("");

        assert!(matches!(preview, Preview::NoImage));
        assert!(preview.handle().is_none());
        assert_eq!(preview.placeholder(), Some("No image"));
    }

    #[test]
    fn test_missing_file_shows_not_found() {
        let preview = Preview::load("/missing/file.png");

        assert!(matches!(preview, Preview::NotFound));
        assert!(preview.handle().is_none());
        assert_eq!(preview.placeholder(), Some("Image not found"));
    }

    #[test]
    fn test_corrupt_file_shows_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let preview = Preview::load(path.to_str().unwrap());

        assert!(matches!(preview, Preview::NotFound));
    }

    #[test]
    fn test_valid_image_is_resized() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bulbasaur.png");
        RgbImage::from_pixel(320, 200, Rgb([40, 180, 90]))
            .save(&path)
            .unwrap();

        let decoded = decode(&path).unwrap();
        let preview = Preview::load(path.to_str().unwrap());

        assert!(preview.handle().is_some());
        assert_eq!(preview.placeholder(), None);
        match decoded {
            Handle::Rgba { width, height, .. } => {
                assert_eq!((width, height), (PREVIEW_SIZE, PREVIEW_SIZE));
            }
            other => panic!("unexpected handle {other:?}"),
        }
    }

    #[test]
    fn test_initial_prompt() {
        let preview = Preview::default();

        assert!(preview.handle().is_none());
        assert_eq!(
            preview.placeholder(),
            Some("Select a Pokémon to see its image")
        );
    }
}
