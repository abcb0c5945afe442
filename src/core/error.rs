use std::{io, path::PathBuf};

use thiserror::Error;

/// Why a bundle's default export could not be read.
///
/// `NoDefaultExport` and `NotObjectLiteral` are the two "not found" outcomes;
/// callers that only care whether a mapping exists can treat every variant the
/// same, but the variant is always logged.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no default export")]
    NoDefaultExport,

    #[error("default export is not a simple object literal")]
    NotObjectLiteral,

    #[error("failed to parse {file}: {message}")]
    Parse { file: String, message: String },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ExtractError {
    /// True for the two outcomes where the file parsed but holds no usable mapping.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ExtractError::NoDefaultExport | ExtractError::NotObjectLiteral
        )
    }
}
