// imgfit/src/core/mod.rs
pub mod processor;

use std::path::PathBuf;
use thiserror::Error;

pub use processor::FileProcessor;

/// Default cap, in pixels, for the long side of output images.
pub const DEFAULT_MAX_SIZE: u32 = 4000;

/// Default output directory when the prompt is left blank.
pub const DEFAULT_OUTPUT_DIR: &str = "resized_images";

/// Decision for a single image, produced by the scaler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizePlan {
    /// Long side already within bounds; copy the file verbatim.
    Keep,
    /// Shrink to these exact dimensions. The long side equals the
    /// configured max size; the short side preserves aspect ratio.
    Shrink { width: u32, height: u32 },
}

/// What happened to one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Resized {
        from: (u32, u32),
        to: (u32, u32),
        path: PathBuf,
    },
    Copied(PathBuf),
}

#[derive(Debug, Default)]
pub struct ProcessingStats {
    pub resized: usize,
    pub copied: usize,
    pub errors: Vec<(String, String)>,
}

#[derive(Error, Debug)]
pub enum ImgfitError {
    #[error("image file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("failed to save {path}: {source}")]
    Save {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("failed to copy {path}: {source}")]
    Copy {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, ImgfitError>;
