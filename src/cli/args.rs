//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `init`: write a default `.i18nflowrc.json`
//! - `serve`: run the dev server with the update route
//! - `extract`: print the default-exported mapping of one bundle
//! - `set`: apply one translation update without the server
//! - `check`: extract every bundle under the locales directory

use std::{net::IpAddr, path::PathBuf};

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::server::Mode;
use crate::update::Locale;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Project root shared by commands that touch bundles.
#[derive(Debug, Clone, Args)]
pub struct RootArgs {
    /// Project root (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ServeCommand {
    #[command(flatten)]
    pub root: RootArgs,

    /// Address to bind (overrides config file)
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Port to bind (overrides config file)
    #[arg(long)]
    pub port: Option<u16>,

    /// The update route is only installed in development
    #[arg(long, value_enum, default_value_t = Mode::Development)]
    pub mode: Mode,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// Bundle file to read
    pub file: PathBuf,
}

#[derive(Debug, Args)]
pub struct SetCommand {
    /// Dot-separated key: <namespace>.<file>.<leaf>
    pub key: String,

    /// English text
    #[arg(long)]
    pub en: String,

    /// Chinese text
    #[arg(long)]
    pub cn: String,

    /// Locale to write
    #[arg(long, value_enum, default_value_t = Locale::En)]
    pub lang: Locale,

    #[command(flatten)]
    pub root: RootArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub root: RootArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .i18nflowrc.json configuration file
    Init,
    /// Run the dev server that accepts translation updates
    Serve(ServeCommand),
    /// Print the default-exported mapping of a bundle as JSON
    Extract(ExtractCommand),
    /// Write one translation into its bundle
    Set(SetCommand),
    /// Extract every bundle and report the ones that cannot be read
    Check(CheckCommand),
}
