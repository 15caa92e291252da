use glob::{glob, Pattern};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::conversion::convert_label_contents;
use crate::error::ResizeError;
use crate::types::{LabelOutcome, RescaleContext, LABEL_EXTENSION};
use crate::utils::{find_matching_image, read_image_dimensions};

/// List the `*.txt` label files directly inside `label_dir`, sorted by path.
pub fn collect_label_files(label_dir: &Path) -> Result<Vec<PathBuf>, ResizeError> {
    if !label_dir.is_dir() {
        return Err(ResizeError::LabelDirNotFound {
            path: label_dir.to_path_buf(),
        });
    }

    let dir = label_dir.to_str().ok_or_else(|| ResizeError::NonUtf8Path {
        path: label_dir.to_path_buf(),
    })?;
    let pattern = format!("{}/*.{}", Pattern::escape(dir), LABEL_EXTENSION);

    let entries = glob(&pattern).map_err(|source| ResizeError::Pattern {
        pattern: pattern.clone(),
        source,
    })?;

    let mut label_files = Vec::new();
    for entry in entries {
        let path = entry?;
        if path.is_file() {
            label_files.push(path);
        } else {
            debug!("Skipping {}: not a regular file", path.display());
        }
    }
    label_files.sort();
    Ok(label_files)
}

/// Rescale a single label file into `output_dir`.
///
/// Returns `LabelOutcome::MissingImage` without touching the output directory
/// when no image with a supported extension matches the label's base name.
pub fn rescale_label_file(
    label_path: &Path,
    image_dir: &Path,
    output_dir: &Path,
    new_size: u32,
) -> Result<LabelOutcome, ResizeError> {
    let missing_image = || LabelOutcome::MissingImage {
        label_file: label_path
            .file_name()
            .unwrap_or(label_path.as_os_str())
            .to_string_lossy()
            .into_owned(),
    };

    let (Some(base_name), Some(file_name)) = (label_path.file_stem(), label_path.file_name())
    else {
        return Ok(missing_image());
    };

    let Some(image_path) = find_matching_image(image_dir, base_name) else {
        return Ok(missing_image());
    };

    let dimensions = read_image_dimensions(&image_path)?;
    let context = RescaleContext::new(dimensions, new_size);

    let contents =
        fs::read_to_string(label_path).map_err(|e| ResizeError::io(label_path, e))?;
    let converted = convert_label_contents(label_path, &contents, &context)?;

    let output_path = output_dir.join(file_name);
    fs::write(&output_path, converted.contents.as_bytes())
        .map_err(|e| ResizeError::io(&output_path, e))?;

    Ok(LabelOutcome::Written {
        output_path,
        records: converted.records,
    })
}
