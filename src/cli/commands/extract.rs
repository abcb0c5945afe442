use anyhow::Result;

use super::super::args::ExtractCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::print_failure;
use crate::core::extract_default_export_from_path;

/// Print the mapping as pretty JSON. A file without a usable default export
/// is a failure; unreadable or unparsable files are errors.
pub fn extract(cmd: ExtractCommand) -> Result<ExitStatus> {
    match extract_default_export_from_path(&cmd.file) {
        Ok(mapping) => {
            println!("{}", serde_json::to_string_pretty(&mapping)?);
            Ok(ExitStatus::Success)
        }
        Err(err) if err.is_not_found() => {
            print_failure(&format!("{}: {}", cmd.file.display(), err));
            Ok(ExitStatus::Failure)
        }
        Err(err) => Err(err.into()),
    }
}
