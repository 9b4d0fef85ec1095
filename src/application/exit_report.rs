use error_stack::Report;
use std::process::ExitCode;

use crate::ports::recorder_error::RecorderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStream {
    Stdout,
    Stderr,
}

/// What the binary prints, and where, when a run fails.
///
/// Handled errors become a single `Error: <message>` line on stdout with
/// status 1. Anything else dumps the full report to stderr with status 2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitReport {
    pub stream: OutputStream,
    pub message: String,
    pub code: u8,
}

impl ExitReport {
    pub fn from_report(report: &Report<RecorderError>) -> Self {
        let error = report.current_context();
        if error.is_handled() {
            ExitReport {
                stream: OutputStream::Stdout,
                message: format!("Error: {error}"),
                code: error.exit_code(),
            }
        } else {
            ExitReport {
                stream: OutputStream::Stderr,
                message: format!("{report:?}"),
                code: error.exit_code(),
            }
        }
    }

    pub fn emit(&self) -> ExitCode {
        match self.stream {
            OutputStream::Stdout => println!("{}", self.message),
            OutputStream::Stderr => eprintln!("{}", self.message),
        }
        ExitCode::from(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use error_stack::report;

    #[test]
    fn test_configuration_error_line() {
        let report = report!(RecorderError::configuration(
            "Sheet ID not found in environment variable."
        ));
        assert_eq!(
            ExitReport::from_report(&report),
            ExitReport {
                stream: OutputStream::Stdout,
                message: "Error: Sheet ID not found in environment variable.".to_string(),
                code: 1,
            }
        );
    }

    #[test]
    fn test_handled_error_hides_attachments() {
        let report = report!(RecorderError::append_failure("Deploys"))
            .attach_printable("Append response: AppendOutcome { updated_rows: 0 }");
        let exit = ExitReport::from_report(&report);
        assert_eq!(exit.message, "Error: Failed to add row to Deploys sheet.");
        assert_eq!(exit.code, 1);
    }

    #[test]
    fn test_service_error_goes_to_stderr() {
        let report = report!(RecorderError::service("500 Internal Server Error"))
            .attach_printable("Failed to append to range 'Deploys'");
        let exit = ExitReport::from_report(&report);

        assert_eq!(exit.stream, OutputStream::Stderr);
        assert_eq!(exit.code, 2);
        assert!(!exit.message.starts_with("Error: "));
        assert!(exit.message.contains("500 Internal Server Error"));
        assert!(exit.message.contains("Failed to append to range"));
    }
}
