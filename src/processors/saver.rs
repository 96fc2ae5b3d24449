// imgfit/src/processors/saver.rs
use crate::core::{ImgfitError, Result};
use image::DynamicImage;
use std::fs;
use std::path::Path;

/// Writes processed output: re-encoded resized images or verbatim copies.
#[derive(Clone, Default)]
pub struct Saver;

impl Saver {
    pub fn new() -> Self {
        Self
    }

    /// Encodes `image` to `output_path`, in the container format implied by
    /// the output extension (same as the input's, so no format conversion).
    /// Creates the parent directory on first use.
    pub fn save(&self, image: &DynamicImage, output_path: &Path) -> Result<()> {
        self.ensure_parent(output_path)?;

        image.save(output_path).map_err(|source| ImgfitError::Save {
            path: output_path.to_path_buf(),
            source,
        })?;

        log::debug!("Saved image to {}", output_path.display());
        Ok(())
    }

    /// Byte-copies `input` to `output_path`, carrying the source's modified
    /// timestamp onto the copy where the platform allows it.
    pub fn copy_verbatim(&self, input: &Path, output_path: &Path) -> Result<()> {
        self.ensure_parent(output_path)?;

        fs::copy(input, output_path).map_err(|source| ImgfitError::Copy {
            path: input.to_path_buf(),
            source,
        })?;

        if let Err(e) = self.carry_mtime(input, output_path) {
            log::debug!(
                "Could not carry timestamp to {}: {}",
                output_path.display(),
                e
            );
        }

        log::debug!("Copied {} to {}", input.display(), output_path.display());
        Ok(())
    }

    fn carry_mtime(&self, input: &Path, output_path: &Path) -> std::io::Result<()> {
        let mtime = fs::metadata(input)?.modified()?;
        let dest = fs::File::options().write(true).open(output_path)?;
        dest.set_modified(mtime)
    }

    // Output directory creation is lazy: nothing touches the filesystem
    // until the first write of a run.
    fn ensure_parent(&self, output_path: &Path) -> Result<()> {
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}
