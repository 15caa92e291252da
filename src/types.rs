use std::path::PathBuf;

// Image extensions probed for each label, in lookup order
pub const IMG_FORMATS: &[&str] = &[".png", ".jpg", ".jpeg", ".bmp", ".tiff"];

pub const LABEL_EXTENSION: &str = "txt";

/// A single detection row of a YOLO label file.
///
/// The class id stays a float all the way through so that it is incremented
/// and printed exactly as it was parsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelRecord {
    pub class_id: f64,
    pub x_center: f64,
    pub y_center: f64,
    pub width: f64,
    pub height: f64,
}

// Pixel size of an image as reported by its header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

/// Original and target sizes used to rescale the records of one label file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RescaleContext {
    pub original_width: f64,
    pub original_height: f64,
    pub new_width: f64,
    pub new_height: f64,
}

impl RescaleContext {
    pub fn new(original: ImageDimensions, new_size: u32) -> Self {
        Self {
            original_width: f64::from(original.width),
            original_height: f64::from(original.height),
            new_width: f64::from(new_size),
            new_height: f64::from(new_size),
        }
    }

    pub fn scale_x(&self) -> f64 {
        self.new_width / self.original_width
    }

    pub fn scale_y(&self) -> f64 {
        self.new_height / self.original_height
    }
}

// The label/image/output directory triple of one dataset split
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitDirs {
    pub label_dir: PathBuf,
    pub image_dir: PathBuf,
    pub output_dir: PathBuf,
}

// Result of rescaling one label file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelOutcome {
    Written { output_path: PathBuf, records: usize },
    MissingImage { label_file: String },
}

impl LabelOutcome {
    /// Warning to report for a skipped label file.
    pub fn warning(&self) -> Option<String> {
        match self {
            LabelOutcome::MissingImage { label_file } => Some(format!(
                "No image file found for label {}. Skipping.",
                label_file
            )),
            LabelOutcome::Written { .. } => None,
        }
    }
}

// Struct to hold processing statistics
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProcessingStats {
    pub label_files_found: usize,
    pub files_written: usize,
    pub skipped_missing_image: usize,
    pub records_written: usize,
}

impl ProcessingStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: &LabelOutcome) {
        self.label_files_found += 1;
        match outcome {
            LabelOutcome::Written { records, .. } => {
                self.files_written += 1;
                self.records_written += records;
            }
            LabelOutcome::MissingImage { .. } => self.skipped_missing_image += 1,
        }
    }

    pub fn print_summary(&self, split: &str) {
        log::info!("=== {} Summary ===", split);
        log::info!("Label files found: {}", self.label_files_found);
        log::info!("Label files written: {}", self.files_written);
        log::info!("Records written: {}", self.records_written);
        if self.skipped_missing_image > 0 {
            log::warn!(
                "Skipped (missing image file): {}",
                self.skipped_missing_image
            );
        }
    }
}
