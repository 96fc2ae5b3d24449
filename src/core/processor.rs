// imgfit/src/core/processor.rs
use super::{ImgfitError, Outcome, ProcessingStats, ResizePlan, Result};
use crate::processors::{Loader, Saver, Scaler};
use crate::utils::{is_image_file, output_path};
use image::imageops::FilterType;
use std::path::Path;
use walkdir::WalkDir;

/// Processes files one at a time: decode, plan, then either save a resized
/// re-encode or copy the original verbatim into the output directory.
pub struct FileProcessor {
    scaler: Scaler,
    loader: Loader,
    saver: Saver,
}

impl FileProcessor {
    pub fn new(max_size: u32) -> Self {
        Self {
            scaler: Scaler::new(max_size),
            loader: Loader::new(),
            saver: Saver::new(),
        }
    }

    /// Handles one input file. No side effects on any error path: the
    /// output directory is only created once a write is about to happen.
    pub fn process_file(&self, input: &Path, output_dir: &Path) -> Result<Outcome> {
        let image = self.loader.load(input)?;
        let (width, height) = (image.width(), image.height());

        match self.scaler.plan(width, height) {
            ResizePlan::Shrink {
                width: new_width,
                height: new_height,
            } => {
                let resized = image.resize_exact(new_width, new_height, FilterType::Lanczos3);
                let target = output_path(input, output_dir, "_resized");
                self.saver.save(&resized, &target)?;

                println!(
                    "Resized {} from {}x{} to {}x{}",
                    input.display(),
                    width,
                    height,
                    new_width,
                    new_height
                );
                println!("Saved image to {}", target.display());

                Ok(Outcome::Resized {
                    from: (width, height),
                    to: (new_width, new_height),
                    path: target,
                })
            }
            ResizePlan::Keep => {
                let target = output_path(input, output_dir, "");
                self.saver.copy_verbatim(input, &target)?;

                println!("Copied {} to {}", input.display(), output_dir.display());

                Ok(Outcome::Copied(target))
            }
        }
    }

    /// Handles every image file directly inside `input_dir`, in whatever
    /// order the filesystem enumerates them. Per-file failures are logged
    /// and collected; they never stop the batch.
    pub fn process_directory(&self, input_dir: &Path, output_dir: &Path) -> Result<ProcessingStats> {
        if !input_dir.exists() {
            return Err(ImgfitError::InvalidParameter(format!(
                "input directory does not exist: {}",
                input_dir.display()
            )));
        }
        if !input_dir.is_dir() {
            return Err(ImgfitError::InvalidParameter(format!(
                "input path is not a directory: {}",
                input_dir.display()
            )));
        }

        let mut stats = ProcessingStats::default();

        for entry in WalkDir::new(input_dir)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| is_image_file(entry.path()))
        {
            match self.process_file(entry.path(), output_dir) {
                Ok(Outcome::Resized { .. }) => stats.resized += 1,
                Ok(Outcome::Copied(_)) => stats.copied += 1,
                Err(e) => {
                    log::error!("Failed to process {}: {}", entry.path().display(), e);
                    stats
                        .errors
                        .push((entry.path().display().to_string(), e.to_string()));
                }
            }
        }

        Ok(stats)
    }
}
