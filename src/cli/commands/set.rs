use anyhow::Result;

use super::super::args::SetCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::{print_failure, print_update};
use super::helper::{block_on, load_project};
use crate::update::{UpdateRequest, UpdateSettings, apply_update};

pub fn set(cmd: SetCommand) -> Result<ExitStatus> {
    let project = load_project(cmd.root.root.as_deref())?;

    let key_path = cmd.key.split('.').map(String::from).collect();
    let request = match UpdateRequest::new(key_path, cmd.en, cmd.cn, cmd.lang) {
        Ok(request) => request,
        Err(err) => {
            print_failure(&err.to_string());
            return Ok(ExitStatus::Failure);
        }
    };

    let settings = UpdateSettings::from_config(&project.root, &project.config);
    let outcome = block_on(apply_update(&request, &settings))??;
    print_update(&outcome);

    Ok(ExitStatus::Success)
}
