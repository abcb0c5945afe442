//! Discovery and bulk extraction of message bundles.
//!
//! Bundles live at `<locales root>/<locale>/<stem>.<extension>`; anything
//! deeper or with another extension is ignored.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::{ExportedMapping, ExtractError, extract_default_export_from_path};

#[derive(Debug, Default)]
pub struct BundleScan {
    /// Bundle files, sorted by path.
    pub files: Vec<PathBuf>,
    /// Entries that could not be accessed.
    pub skipped_count: usize,
}

/// Find every bundle under `locales_root`.
pub fn scan_bundles(locales_root: &Path, extension: &str) -> BundleScan {
    let mut scan = BundleScan::default();

    for entry in WalkDir::new(locales_root).min_depth(2).max_depth(2) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                scan.skipped_count += 1;
                warn!("Cannot access path: {}", e);
                continue;
            }
        };

        let path = entry.path();
        if entry.file_type().is_file() && has_extension(path, extension) {
            scan.files.push(path.to_path_buf());
        }
    }

    scan.files.sort();
    debug!(
        root = %locales_root.display(),
        files = scan.files.len(),
        "scanned bundles"
    );
    scan
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().is_some_and(|ext| ext == extension)
}

/// Extraction result for one bundle.
#[derive(Debug)]
pub struct BundleReport {
    pub path: PathBuf,
    /// Name of the locale directory the bundle sits in.
    pub locale: String,
    pub result: Result<ExportedMapping, ExtractError>,
}

impl BundleReport {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Extract every file in parallel. Reports keep the input order.
pub fn check_bundles(files: &[PathBuf]) -> Vec<BundleReport> {
    files
        .par_iter()
        .map(|path| BundleReport {
            path: path.clone(),
            locale: locale_of(path),
            result: extract_default_export_from_path(path),
        })
        .collect()
}

fn locale_of(path: &Path) -> String {
    path.parent()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
