use std::path::{Path, PathBuf};

use tracing::info;

use super::{Locale, ModuleWriter, UpdateError, UpdateRequest};
use crate::config::{Config, DEFAULT_EXTENSION, DEFAULT_LOCALES_DIR};
use crate::core::KeyAction;

/// Where bundles live on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSettings {
    pub root: PathBuf,
    /// Locales directory, relative to `root`.
    pub locales_dir: PathBuf,
    /// Bundle file extension, without the dot.
    pub extension: String,
}

impl UpdateSettings {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            locales_dir: PathBuf::from(DEFAULT_LOCALES_DIR),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    pub fn from_config(root: impl Into<PathBuf>, config: &Config) -> Self {
        Self {
            root: root.into(),
            locales_dir: PathBuf::from(&config.locales_dir),
            extension: config.extension.clone(),
        }
    }

    pub fn locale_dir(&self, locale: Locale) -> PathBuf {
        self.locales_root().join(locale.dir_name())
    }

    pub fn locales_root(&self) -> PathBuf {
        self.root.join(&self.locales_dir)
    }

    /// `<root>/<locales_dir>/<zh-CN|en-US>/<file_stem>.<extension>`
    pub fn destination(&self, locale: Locale, file_stem: &str) -> PathBuf {
        self.locale_dir(locale)
            .join(format!("{}.{}", file_stem, self.extension))
    }
}

/// What a successful update changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub path: PathBuf,
    pub key: String,
    pub action: KeyAction,
}

impl UpdateOutcome {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Merge one translation into its bundle and rewrite the file.
///
/// The bundle is re-read on every call; nothing is cached between updates, so
/// concurrent updates to the same file are last-write-wins.
pub async fn apply_update(
    request: &UpdateRequest,
    settings: &UpdateSettings,
) -> Result<UpdateOutcome, UpdateError> {
    let path = settings.destination(request.lang(), request.file_stem());

    let mut writer = ModuleWriter::open(&path).await;
    let action = writer.set_value(request.leaf_key(), request.active_text());
    writer.save().await?;

    info!(
        file = %path.display(),
        key = request.leaf_key(),
        action = action.as_str(),
        "translation saved"
    );

    Ok(UpdateOutcome {
        path,
        key: request.leaf_key().to_string(),
        action,
    })
}
