// SPDX-License-Identifier: MPL-2.0
//! Gallery manifest handling.
//!
//! The gallery is backed by an `images.json` manifest at the gallery root: an
//! ordered array of `{ name, src, description }` records. This module loads
//! the manifest for display and can regenerate it by scanning the `images/`
//! directory for files that are not indexed yet. Existing entries (and their
//! descriptions) are never touched by a scan.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Manifest file name, relative to the gallery root.
pub const MANIFEST_FILE: &str = "images.json";

/// Directory scanned for images, relative to the gallery root.
pub const IMAGES_DIR: &str = "images";

const SUPPORTED_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

/// One displayable gallery entry. Immutable once loaded; the viewer only ever
/// borrows the currently selected item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayItem {
    pub name: String,
    /// Site-absolute path such as `/images/sunset.jpg`.
    #[serde(rename = "src")]
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl DisplayItem {
    /// Resolves the site-absolute `src` against the gallery root on disk.
    pub fn resolve(&self, root: &Path) -> PathBuf {
        root.join(self.source.trim_start_matches('/'))
    }
}

/// Loads the manifest. Source reachability is not validated here; a missing
/// image file simply renders as a blank thumbnail.
pub fn load(path: &Path) -> Result<Vec<DisplayItem>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn save(items: &[DisplayItem], path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(items)?;
    fs::write(path, content)?;
    Ok(())
}

/// Outcome of a manifest scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanReport {
    pub total: usize,
    pub added: usize,
}

/// Scans `<root>/images` for supported image files, appends entries that are
/// not in the manifest yet, sorts everything by `src`, and writes the
/// manifest back.
pub fn scan(root: &Path) -> Result<ScanReport> {
    let manifest_path = root.join(MANIFEST_FILE);
    let images_dir = root.join(IMAGES_DIR);

    let mut items = if manifest_path.exists() {
        load(&manifest_path)?
    } else {
        Vec::new()
    };

    let known: HashSet<String> = items.iter().map(|item| item.source.clone()).collect();
    let mut added = 0;

    for entry in fs::read_dir(&images_dir)? {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() || !is_supported_image(&path) {
            continue;
        }

        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let source = format!("/{}/{}", IMAGES_DIR, file_name);

        if !known.contains(&source) {
            items.push(DisplayItem {
                name: file_name.to_string(),
                source,
                description: None,
            });
            added += 1;
        }
    }

    items.sort_by(|a, b| a.source.cmp(&b.source));
    save(&items, &manifest_path)?;

    Ok(ScanReport {
        total: items.len(),
        added,
    })
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}
