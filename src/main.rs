use clap::Parser;
use log::error;

use yolo_label_resize::{process_dataset, Args};

fn main() {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if let Err(e) = process_dataset(&args) {
        error!("Failed to resize labels: {}", e);
        std::process::exit(1);
    }
}
