//! YOLO label resizer
//!
//! This library rescales YOLO label files so that they match a dataset whose
//! images were resized to a fixed square size.

pub mod config;
pub mod conversion;
pub mod dataset;
pub mod error;
pub mod io;
pub mod types;
pub mod utils;

// Re-export commonly used types and functions
pub use config::Args;
pub use dataset::{process_dataset, rescale_labels, validation_split};
pub use error::ResizeError;
pub use types::{LabelRecord, ProcessingStats, RescaleContext, SplitDirs};
