use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

/// Rescale YOLO labels based on image dimensions.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Directory containing original YOLO labels
    #[arg(long = "input_label_dir")]
    pub input_label_dir: PathBuf,

    /// Directory containing original images
    #[arg(long = "input_image_dir")]
    pub input_image_dir: PathBuf,

    /// Directory to save resized YOLO labels
    #[arg(long = "output_label_dir")]
    pub output_label_dir: PathBuf,

    /// New width and height for resizing (square)
    #[arg(long = "new_size", value_parser = validate_new_size)]
    pub new_size: u32,
}

// Validate that the target size is a positive integer
pub fn validate_new_size(s: &str) -> Result<u32, String> {
    match u32::from_str(s) {
        Ok(val) if val > 0 => Ok(val),
        _ => Err("SIZE must be a positive integer".to_string()),
    }
}
