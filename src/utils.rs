use indicatif::{ProgressBar, ProgressStyle};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ResizeError;
use crate::types::{ImageDimensions, IMG_FORMATS};

/// Find the image that belongs to a label base name.
///
/// Extensions are tried in the order of `IMG_FORMATS` and matched
/// case-sensitively; the first existing path wins.
pub fn find_matching_image(image_dir: &Path, base_name: &OsStr) -> Option<PathBuf> {
    IMG_FORMATS.iter().find_map(|ext| {
        let mut file_name = base_name.to_os_string();
        file_name.push(ext);
        let candidate = image_dir.join(file_name);
        candidate.exists().then_some(candidate)
    })
}

/// Read the width and height of an image from its header without decoding
/// any pixel data.
pub fn read_image_dimensions(path: &Path) -> Result<ImageDimensions, ResizeError> {
    let size = imagesize::size(path).map_err(|source| ResizeError::ImageHeader {
        path: path.to_path_buf(),
        source,
    })?;

    if size.width == 0 || size.height == 0 {
        return Err(ResizeError::EmptyImage {
            path: path.to_path_buf(),
        });
    }

    match (u32::try_from(size.width), u32::try_from(size.height)) {
        (Ok(width), Ok(height)) => Ok(ImageDimensions { width, height }),
        _ => Err(ResizeError::ImageTooLarge {
            path: path.to_path_buf(),
            width: size.width,
            height: size.height,
        }),
    }
}

/// Create a progress bar with the given length and label
pub fn create_progress_bar(len: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    let style = ProgressStyle::default_bar()
        .template(&format!(
            "{{spinner:.green}} [{}] [{{elapsed_precise}}] [{{bar:40.cyan/blue}}] {{pos}}/{{len}} ({{eta}}) {{msg}}",
            label
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style.progress_chars("#>-"));
    pb
}

/// Create the output directory and its parents. Existing contents are kept.
pub fn create_output_directory(path: &Path) -> Result<PathBuf, ResizeError> {
    if !path.exists() {
        log::debug!("Creating output directory {}", path.display());
    }
    fs::create_dir_all(path).map_err(|e| ResizeError::io(path, e))?;
    Ok(path.to_path_buf())
}
