use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::catalog;
use crate::manifest::{Contents, MANIFEST_FILENAME};

#[derive(Debug, Clone)]
pub struct GenerateSummary {
    pub root: PathBuf,
    pub set_count: usize,
    pub skipped_entries: usize,
    pub bytes_written: u64,
    pub elapsed: Duration,
    pub warning_count: usize,
    pub warnings: Vec<String>,
}

/// Scans `root` and writes one `Contents.json` per image set, overwriting
/// whatever was there. The first failed write aborts the pass; manifests
/// written before it stay on disk.
pub fn generate_manifests(root: &Path) -> Result<GenerateSummary> {
    let started = Instant::now();

    let scan = catalog::scan_catalog(root)?;

    let mut bytes_written = 0u64;
    for set in &scan.image_sets {
        let contents = Contents::universal_png(&set.base_name);
        let json = contents.to_json_pretty()?;
        let manifest_path = set.dir.join(MANIFEST_FILENAME);
        std::fs::write(&manifest_path, &json)
            .with_context(|| format!("failed to write {}", manifest_path.display()))?;
        bytes_written += json.len() as u64;
    }

    Ok(GenerateSummary {
        root: root.to_path_buf(),
        set_count: scan.image_sets.len(),
        skipped_entries: scan.skipped_entries,
        bytes_written,
        elapsed: started.elapsed(),
        warning_count: scan.warnings.len(),
        warnings: scan.warnings,
    })
}
