use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("invalid update request: {0}")]
    RequestParse(String),

    #[error("failed to write {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize bundle: {0}")]
    Serialize(#[from] serde_json::Error),
}
