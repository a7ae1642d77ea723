//! The left-side picture of the wizard window.
//!
//! [`SideImage`] keeps the decoded source and hands the shell a copy scaled
//! to the area it has available. The last scaled copy is cached, so a shell
//! can call [`SideImage::resized`] on every layout pass and only pay for
//! scaling when the size actually changes.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use horizon_wizard_core::logging::targets;
use image::{DynamicImage, GenericImageView, RgbaImage};
use parking_lot::Mutex;

use crate::error::{Result, WizardError};

type Scaled = ((u32, u32), Arc<RgbaImage>);

/// A decoded side image with a one-entry scaling cache.
///
/// Clones share the source and the cache.
#[derive(Clone)]
pub struct SideImage {
    source: Arc<DynamicImage>,
    path: Option<PathBuf>,
    last: Arc<Mutex<Option<Scaled>>>,
}

impl SideImage {
    /// Decode an image file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = image::open(path).map_err(|e| {
            tracing::error!(target: targets::IMAGE, path = %path.display(), error = %e, "cannot load side image");
            WizardError::image(path, e)
        })?;
        let mut image = Self::from_image(source);
        image.path = Some(path.to_path_buf());
        Ok(image)
    }

    /// Wrap an already decoded image.
    pub fn from_image(source: DynamicImage) -> Self {
        Self {
            source: Arc::new(source),
            path: None,
            last: Arc::new(Mutex::new(None)),
        }
    }

    /// The file the image was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Size of the source image.
    pub fn dimensions(&self) -> (u32, u32) {
        self.source.dimensions()
    }

    /// The image scaled to exactly `width` x `height`.
    ///
    /// Returns `None` for an empty area.
    pub fn resized(&self, width: u32, height: u32) -> Option<Arc<RgbaImage>> {
        if width == 0 || height == 0 {
            return None;
        }

        let mut last = self.last.lock();
        if let Some((size, scaled)) = last.as_ref() {
            if *size == (width, height) {
                return Some(scaled.clone());
            }
        }

        tracing::trace!(target: targets::IMAGE, width, height, "scaling side image");
        let scaled = Arc::new(
            self.source
                .resize_exact(width, height, image::imageops::FilterType::Triangle)
                .to_rgba8(),
        );
        *last = Some(((width, height), scaled.clone()));
        Some(scaled)
    }

    /// Size of the cached scaled copy, if any.
    pub fn cached_size(&self) -> Option<(u32, u32)> {
        self.last.lock().as_ref().map(|(size, _)| *size)
    }
}

impl fmt::Debug for SideImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SideImage")
            .field("path", &self.path)
            .field("dimensions", &self.dimensions())
            .field("cached_size", &self.cached_size())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard() -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_fn(8, 16, |x, y| {
            if (x + y) % 2 == 0 {
                image::Rgba([255, 255, 255, 255])
            } else {
                image::Rgba([0, 0, 0, 255])
            }
        }))
    }

    #[test]
    fn test_resized_caches_last_size() {
        let image = SideImage::from_image(checkerboard());
        assert_eq!(image.dimensions(), (8, 16));
        assert_eq!(image.cached_size(), None);

        let first = image.resized(4, 4).unwrap();
        assert_eq!(first.dimensions(), (4, 4));
        let again = image.resized(4, 4).unwrap();
        assert!(Arc::ptr_eq(&first, &again));

        let bigger = image.resized(16, 32).unwrap();
        assert_eq!(bigger.dimensions(), (16, 32));
        assert_eq!(image.cached_size(), Some((16, 32)));
    }

    #[test]
    fn test_empty_area() {
        let image = SideImage::from_image(checkerboard());
        assert!(image.resized(0, 10).is_none());
        assert_eq!(image.cached_size(), None);
    }

    #[test]
    fn test_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("side.png");
        checkerboard().save(&path).unwrap();

        let image = SideImage::load(&path).unwrap();
        assert_eq!(image.path(), Some(path.as_path()));
        assert_eq!(image.dimensions(), (8, 16));
    }

    #[test]
    fn test_load_missing_file() {
        let err = SideImage::load("/nonexistent/side.png").unwrap_err();
        assert!(matches!(err, WizardError::Image { .. }));
    }
}
