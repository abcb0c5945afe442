use std::process::ExitCode;

/// Process exit status.
///
/// - `Success` (0): the command did what it was asked
/// - `Failure` (1): the command ran but found a problem (missing export, broken bundle)
/// - `Error` (2): the command could not run (bad config, I/O error, bind failure)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}

impl ExitStatus {
    pub fn from_failures(failures: usize) -> Self {
        if failures == 0 {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
}
