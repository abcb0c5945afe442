use std::{
    fs,
    net::IpAddr,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".i18nflowrc.json";

pub const DEFAULT_LOCALES_DIR: &str = "src/lang";
pub const DEFAULT_EXTENSION: &str = "ts";
pub const DEFAULT_ROUTE: &str = "/i18n-flow/update";

/// Options accepted by the plugin.
///
/// Recognized and carried through to the plugin, but no current behaviour
/// depends on them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bar: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_locales_dir")]
    pub locales_dir: String,
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default = "default_route")]
    pub route: String,
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub options: PluginOptions,
}

fn default_locales_dir() -> String {
    DEFAULT_LOCALES_DIR.to_string()
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

fn default_route() -> String {
    DEFAULT_ROUTE.to_string()
}

fn default_host() -> IpAddr {
    IpAddr::from([127, 0, 0, 1])
}

fn default_port() -> u16 {
    3100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales_dir: default_locales_dir(),
            extension: default_extension(),
            route: default_route(),
            host: default_host(),
            port: default_port(),
            options: PluginOptions::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.extension.is_empty() || self.extension.contains('.') {
            bail!(
                "Invalid 'extension': \"{}\" (expected a bare extension such as \"ts\")",
                self.extension
            );
        }

        if !self.route.starts_with('/') {
            bail!("Invalid 'route': \"{}\" (must start with '/')", self.route);
        }

        if Path::new(&self.locales_dir).is_absolute() {
            bail!(
                "Invalid 'localesDir': \"{}\" (must be relative to the project root)",
                self.locales_dir
            );
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, or None when using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.path.is_some()
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
