// imgfit/src/processors/loader.rs
use crate::core::{ImgfitError, Result};
use image::{DynamicImage, ImageReader};
use std::path::Path;

/// Opens and decodes image files.
#[derive(Clone, Default)]
pub struct Loader;

impl Loader {
    pub fn new() -> Self {
        Self
    }

    /// Decodes the image at `path`. A missing path maps to `NotFound`; any
    /// decode problem (corrupt data, unsupported codec) maps to `Decode`
    /// with the underlying cause attached.
    pub fn load(&self, path: &Path) -> Result<DynamicImage> {
        if !path.is_file() {
            return Err(ImgfitError::NotFound(path.to_path_buf()));
        }

        log::debug!("Loading image from: {}", path.display());

        let image = ImageReader::open(path)?
            .with_guessed_format()?
            .decode()
            .map_err(|source| ImgfitError::Decode {
                path: path.to_path_buf(),
                source,
            })?;

        log::debug!(
            "Loaded image: {}x{} pixels, color: {:?}",
            image.width(),
            image.height(),
            image.color()
        );

        Ok(image)
    }
}
