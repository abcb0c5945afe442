use anyhow::Result;

use super::super::args::CheckCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::{print_bundle_reports, print_failure};
use super::helper::load_project;
use crate::core::scan::{check_bundles, scan_bundles};
use crate::update::UpdateSettings;

pub fn check(cmd: CheckCommand, verbose: bool) -> Result<ExitStatus> {
    let project = load_project(cmd.root.root.as_deref())?;
    let settings = UpdateSettings::from_config(&project.root, &project.config);
    let locales_root = settings.locales_root();

    let scan = scan_bundles(&locales_root, &settings.extension);
    if scan.files.is_empty() {
        print_failure(&format!("No bundles found under {}", locales_root.display()));
        return Ok(ExitStatus::Failure);
    }

    let reports = check_bundles(&scan.files);
    let failures = print_bundle_reports(&reports, &project.root, verbose);

    Ok(ExitStatus::from_failures(failures))
}
