//! Writer for default-export message bundles.
//!
//! Reads whatever mapping a bundle currently exports, applies edits, and
//! rewrites the whole file as `export default <pretty JSON>`.

use std::{
    io,
    path::{Path, PathBuf},
};

use tokio::fs;
use tracing::{debug, warn};

use super::UpdateError;
use crate::core::{
    DefaultExportExtractor, ExportedMapping, KeyAction, ScalarValue, parsers::SourceParser,
};

#[derive(Debug)]
pub struct ModuleWriter {
    file_path: PathBuf,
    mapping: ExportedMapping,
}

impl ModuleWriter {
    /// Open a bundle, starting from an empty mapping when the file is missing
    /// or its default export cannot be read.
    pub async fn open(path: &Path) -> Self {
        Self::open_with(path, &DefaultExportExtractor::default()).await
    }

    pub async fn open_with<P: SourceParser>(
        path: &Path,
        extractor: &DefaultExportExtractor<P>,
    ) -> Self {
        let mapping = match fs::read_to_string(path).await {
            Ok(source) => match extractor.extract(source, &path.to_string_lossy()) {
                Ok(mapping) => mapping,
                Err(err) => {
                    warn!(file = %path.display(), "{}; starting from an empty bundle", err);
                    ExportedMapping::new()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(file = %path.display(), "bundle does not exist yet");
                ExportedMapping::new()
            }
            Err(err) => {
                warn!(file = %path.display(), "failed to read bundle: {}", err);
                ExportedMapping::new()
            }
        };

        Self {
            file_path: path.to_path_buf(),
            mapping,
        }
    }

    pub fn set_value(&mut self, key: &str, value: impl Into<ScalarValue>) -> KeyAction {
        self.mapping.insert(key, value)
    }

    pub fn mapping(&self) -> &ExportedMapping {
        &self.mapping
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// The full file content for the current mapping.
    pub fn render(&self) -> Result<String, UpdateError> {
        render_module(&self.mapping)
    }

    /// Overwrite the bundle. The parent directory must already exist.
    pub async fn save(&self) -> Result<(), UpdateError> {
        let content = self.render()?;
        fs::write(&self.file_path, content)
            .await
            .map_err(|source| UpdateError::FileWrite {
                path: self.file_path.clone(),
                source,
            })
    }
}

/// Serialize a mapping as a default-export module with 2-space indentation.
pub fn render_module(mapping: &ExportedMapping) -> Result<String, UpdateError> {
    let body = serde_json::to_string_pretty(mapping)?;
    Ok(format!("export default {}\n", body))
}
