use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::manifest::IMAGE_SET_SUFFIX;

/// One qualifying catalog entry: a directory whose name ends in `.imageset`.
#[derive(Debug, Clone)]
pub struct ImageSet {
    pub dir: PathBuf,
    pub base_name: String,
}

#[derive(Debug, Clone, Default)]
pub struct CatalogScan {
    pub image_sets: Vec<ImageSet>,
    pub skipped_entries: usize,
    pub warnings: Vec<String>,
}

/// Lists the immediate children of `root` (no recursion) and filters to
/// image set directories. Entries without the suffix are counted and left
/// alone. A non-directory entry that carries the suffix cannot hold a
/// manifest, so it is skipped with a warning instead of aborting the scan.
pub fn scan_catalog(root: &Path) -> Result<CatalogScan> {
    let mut scan = CatalogScan::default();

    let entries = std::fs::read_dir(root)
        .with_context(|| format!("failed to list catalog root {}", root.display()))?;
    for entry in entries {
        let entry = entry
            .with_context(|| format!("failed to read entry in {}", root.display()))?;
        let name = entry.file_name().to_string_lossy().to_string();

        let Some(base_name) = name.strip_suffix(IMAGE_SET_SUFFIX) else {
            scan.skipped_entries += 1;
            continue;
        };

        if !entry.path().is_dir() {
            scan.warnings
                .push(format!("{} matches {} but is not a directory, skipping", name, IMAGE_SET_SUFFIX));
            continue;
        }

        scan.image_sets.push(ImageSet {
            dir: entry.path(),
            base_name: base_name.to_string(),
        });
    }

    Ok(scan)
}
