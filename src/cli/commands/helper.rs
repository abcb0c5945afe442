use std::{
    env,
    future::Future,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::{Config, load_config};

/// A project root together with its resolved configuration.
#[derive(Debug)]
pub struct Project {
    pub root: PathBuf,
    pub config: Config,
}

/// Resolve the project for a command.
///
/// Config discovery starts at `root` (or the working directory). When a
/// config file is found, its directory becomes the project root.
pub fn load_project(root: Option<&Path>) -> Result<Project> {
    let start = match root {
        Some(root) => root.to_path_buf(),
        None => env::current_dir().context("Failed to read the current directory")?,
    };

    let loaded = load_config(&start)?;
    let root = loaded
        .path
        .as_deref()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .unwrap_or(start);

    match &loaded.path {
        Some(path) => debug!(config = %path.display(), root = %root.display(), "loaded config"),
        None => debug!(root = %root.display(), "no config file, using defaults"),
    }

    Ok(Project {
        root,
        config: loaded.config,
    })
}

/// Drive a future to completion on a single-threaded runtime.
pub fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime.block_on(future))
}
