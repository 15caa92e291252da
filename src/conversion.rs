use std::path::Path;

use crate::error::{InvalidField, ResizeError};
use crate::types::{LabelRecord, RescaleContext};

/// Parse one line of a YOLO label file.
///
/// Lines that do not split into exactly five whitespace-separated tokens
/// yield `Ok(None)` and are dropped by the caller.
pub fn parse_label_line(line: &str) -> Result<Option<LabelRecord>, InvalidField> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let [class_id, x_center, y_center, width, height] = parts.as_slice() else {
        return Ok(None);
    };

    Ok(Some(LabelRecord {
        class_id: parse_field(class_id)?,
        x_center: parse_field(x_center)?,
        y_center: parse_field(y_center)?,
        width: parse_field(width)?,
        height: parse_field(height)?,
    }))
}

fn parse_field(value: &str) -> Result<f64, InvalidField> {
    value.parse::<f64>().map_err(|source| InvalidField {
        value: value.to_string(),
        source,
    })
}

/// Rescale a record from its original image size to the target size and
/// shift its class id by one.
///
/// The coordinates are denormalized against the original size, multiplied
/// by the scale factors and divided by the target size, in that order.
pub fn rescale_record(record: &LabelRecord, context: &RescaleContext) -> LabelRecord {
    let x_center = record.x_center * context.original_width;
    let y_center = record.y_center * context.original_height;
    let width = record.width * context.original_width;
    let height = record.height * context.original_height;

    let scale_x = context.scale_x();
    let scale_y = context.scale_y();

    LabelRecord {
        class_id: record.class_id + 1.0,
        x_center: (x_center * scale_x) / context.new_width,
        y_center: (y_center * scale_y) / context.new_height,
        width: (width * scale_x) / context.new_width,
        height: (height * scale_y) / context.new_height,
    }
}

/// Format a record as a YOLO label line, including the trailing newline.
pub fn format_record(record: &LabelRecord) -> String {
    format!(
        "{} {} {} {} {}\n",
        format_class_id(record.class_id),
        format_coordinate(record.x_center),
        format_coordinate(record.y_center),
        format_coordinate(record.width),
        format_coordinate(record.height)
    )
}

// NaN is written as `nan`
fn format_class_id(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        value.to_string()
    }
}

fn format_coordinate(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        format!("{:.6}", value)
    }
}

/// Split text into physical lines. `\r\n`, `\r` and `\n` all end a line.
pub fn physical_lines(contents: &str) -> impl Iterator<Item = &str> {
    let mut rest = contents;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\r', '\n']) {
            Some(end) => {
                let line = &rest[..end];
                let skip = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + skip..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

// Rescaled label file contents along with the number of records kept
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedLabels {
    pub contents: String,
    pub records: usize,
}

/// Convert the full contents of a label file. `label_path` is only used to
/// report which file a bad field came from.
pub fn convert_label_contents(
    label_path: &Path,
    contents: &str,
    context: &RescaleContext,
) -> Result<ConvertedLabels, ResizeError> {
    let mut converted = ConvertedLabels {
        contents: String::with_capacity(contents.len()),
        records: 0,
    };

    for (index, line) in physical_lines(contents).enumerate() {
        let record = parse_label_line(line).map_err(|source| ResizeError::InvalidLabel {
            path: label_path.to_path_buf(),
            line: index + 1,
            source,
        })?;

        if let Some(record) = record {
            converted
                .contents
                .push_str(&format_record(&rescale_record(&record, context)));
            converted.records += 1;
        }
    }

    Ok(converted)
}
