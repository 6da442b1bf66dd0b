// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, Flags};
use iced_gallery::manifest;
use std::path::PathBuf;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();
    let scan = args.contains("--scan");

    let gallery_dir = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    if scan {
        // Manifest maintenance mode: index new images and exit without a GUI.
        let root = PathBuf::from(gallery_dir.as_deref().unwrap_or("."));
        match manifest::scan(&root) {
            Ok(report) => {
                println!(
                    "Updated {}: {} total images ({} new).",
                    manifest::MANIFEST_FILE,
                    report.total,
                    report.added
                );
                return Ok(());
            }
            Err(err) => {
                eprintln!("Failed to update {}: {}", manifest::MANIFEST_FILE, err);
                std::process::exit(1);
            }
        }
    }

    app::run(Flags { gallery_dir })
}
