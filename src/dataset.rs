use log::{info, warn};
use std::path::{is_separator, Path, PathBuf};

use crate::config::Args;
use crate::error::ResizeError;
use crate::io::{collect_label_files, rescale_label_file};
use crate::types::{LabelOutcome, ProcessingStats, SplitDirs};
use crate::utils::{create_output_directory, create_progress_bar};

/// Rescale every label file of one split.
///
/// Label files without a matching image are reported and skipped; any other
/// failure aborts the split and leaves already written files in place.
pub fn rescale_labels(
    split: &SplitDirs,
    new_size: u32,
    split_name: &str,
) -> Result<ProcessingStats, ResizeError> {
    create_output_directory(&split.output_dir)?;
    let label_files = collect_label_files(&split.label_dir)?;

    let pb = create_progress_bar(label_files.len() as u64, split_name);
    let mut stats = ProcessingStats::new();

    for label_path in &label_files {
        let outcome =
            rescale_label_file(label_path, &split.image_dir, &split.output_dir, new_size)?;

        if let LabelOutcome::Written { output_path, .. } = &outcome {
            pb.suspend(|| println!("Resized labels saved to {}.", output_path.display()));
        } else if let Some(message) = outcome.warning() {
            pb.suspend(|| warn!("{}", message));
        }

        stats.record(&outcome);
        pb.inc(1);
    }

    pb.finish_with_message(format!("{} processing complete", split_name));
    Ok(stats)
}

/// Directory part of a path, taken textually: everything before the last
/// separator with trailing separators removed. `labels/` yields `labels`
/// and a bare `labels` yields an empty path.
pub fn dirname(path: &Path) -> PathBuf {
    let Some(text) = path.to_str() else {
        return path.parent().unwrap_or(path).to_path_buf();
    };

    let end = text.rfind(is_separator).map_or(0, |i| i + 1);
    let mut head = &text[..end];
    if !head.is_empty() && !head.chars().all(is_separator) {
        head = head.trim_end_matches(is_separator);
    }
    PathBuf::from(head)
}

fn sibling_of(path: &Path, child: &str) -> PathBuf {
    dirname(path).join(child)
}

/// Derive the validation split directories from the primary ones.
///
/// The output goes to `val` itself rather than `val/labels`.
pub fn validation_split(primary: &SplitDirs) -> SplitDirs {
    SplitDirs {
        label_dir: sibling_of(&primary.label_dir, "val/labels"),
        image_dir: sibling_of(&primary.image_dir, "val/images"),
        output_dir: sibling_of(&primary.output_dir, "val"),
    }
}

/// Main processing pipeline: the primary split, then the validation split
/// when both of its input directories exist.
pub fn process_dataset(args: &Args) -> Result<(), ResizeError> {
    let primary = SplitDirs {
        label_dir: args.input_label_dir.clone(),
        image_dir: args.input_image_dir.clone(),
        output_dir: args.output_label_dir.clone(),
    };

    info!(
        "Processing labels in {} ({}x{})...",
        primary.label_dir.display(),
        args.new_size,
        args.new_size
    );
    let stats = rescale_labels(&primary, args.new_size, "Train")?;
    stats.print_summary("Train");

    let validation = validation_split(&primary);
    if validation.label_dir.exists() && validation.image_dir.exists() {
        info!(
            "Processing validation labels in {}...",
            validation.label_dir.display()
        );
        let stats = rescale_labels(&validation, args.new_size, "Val")?;
        stats.print_summary("Val");
    } else {
        info!("No validation split found next to the input directories.");
    }

    info!("Label resizing completed successfully.");
    Ok(())
}
