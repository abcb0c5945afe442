use anyhow::Result;
use tracing::warn;

use super::super::args::ServeCommand;
use super::super::exit_status::ExitStatus;
use super::helper::load_project;
use crate::server::{I18nFlowPlugin, ServeSettings, run_dev_server};

pub fn serve(cmd: ServeCommand) -> Result<ExitStatus> {
    let project = load_project(cmd.root.root.as_deref())?;

    let plugin = I18nFlowPlugin::from_config(&project.config, &project.root, cmd.mode);
    if !cmd.mode.is_development() {
        warn!("{} is not served outside development", plugin.route());
    }

    run_dev_server(ServeSettings {
        host: cmd.host.unwrap_or(project.config.host),
        port: cmd.port.unwrap_or(project.config.port),
        plugin,
    })?;

    Ok(ExitStatus::Success)
}
