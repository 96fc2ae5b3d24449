pub mod cli;
mod core;
mod processors;
mod utils;

pub use cli::{Cli, Mode};
pub use core::{
    FileProcessor, ImgfitError, Outcome, ProcessingStats, ResizePlan, Result, DEFAULT_MAX_SIZE,
    DEFAULT_OUTPUT_DIR,
};
pub use processors::{Loader, Saver, Scaler};
pub use utils::{is_image_file, output_path, IMAGE_EXTENSIONS};

pub mod prelude {
    pub use crate::{FileProcessor, Loader, Outcome, ResizePlan, Saver, Scaler};
}

// Re-export commonly used types
pub use image::DynamicImage;
