// imgfit/src/utils/mod.rs
use std::path::{Path, PathBuf};

/// Extensions this tool recognizes as images, matched case-insensitively.
pub const IMAGE_EXTENSIONS: [&str; 7] = ["jpg", "jpeg", "png", "gif", "bmp", "tiff", "webp"];

pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Builds `output_dir/{stem}{suffix}{ext}` from the input's base filename.
/// The extension is kept as-is, so the output stays in the input's container
/// format. Inputs from different directories that share a base name will
/// collide here and overwrite each other.
pub fn output_path(input: &Path, output_dir: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");

    let file_name = match input.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!("{}{}.{}", stem, suffix, ext),
        None => format!("{}{}", stem, suffix),
    };

    output_dir.join(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_image_extensions() {
        assert!(is_image_file(Path::new("photo.jpg")));
        assert!(is_image_file(Path::new("photo.JPEG")));
        assert!(is_image_file(Path::new("scan.Tiff")));
        assert!(is_image_file(Path::new("anim.webp")));
        assert!(!is_image_file(Path::new("notes.txt")));
        assert!(!is_image_file(Path::new("archive.tif")));
        assert!(!is_image_file(Path::new("no_extension")));
    }

    #[test]
    fn output_path_with_suffix() {
        let path = output_path(Path::new("/in/photo.jpg"), Path::new("out"), "_resized");
        assert_eq!(path, PathBuf::from("out/photo_resized.jpg"));
    }

    #[test]
    fn output_path_without_suffix() {
        let path = output_path(Path::new("/in/photo.png"), Path::new("out"), "");
        assert_eq!(path, PathBuf::from("out/photo.png"));
    }

    #[test]
    fn output_path_drops_source_directory() {
        let a = output_path(Path::new("/a/p.jpg"), Path::new("out"), "");
        let b = output_path(Path::new("/b/p.jpg"), Path::new("out"), "");
        assert_eq!(a, b);
    }
}
