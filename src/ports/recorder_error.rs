use error_stack::{Context, Report};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecorderError {
    #[error("{details}")]
    Configuration { details: String },
    #[error("Failed to parse credentials JSON: {details}")]
    CredentialParse { details: String },
    #[error("{details}")]
    Authentication { details: String },
    #[error("Failed to add row to {worksheet} sheet.")]
    AppendFailure { worksheet: String },
    #[error("Spreadsheet service error: {details}")]
    Service { details: String },
}

impl RecorderError {
    pub fn configuration<S: Into<String>>(details: S) -> Self {
        RecorderError::Configuration {
            details: details.into(),
        }
    }

    pub fn credential_parse<S: Into<String>>(details: S) -> Self {
        RecorderError::CredentialParse {
            details: details.into(),
        }
    }

    pub fn authentication<S: Into<String>>(details: S) -> Self {
        RecorderError::Authentication {
            details: details.into(),
        }
    }

    pub fn append_failure<S: Into<String>>(worksheet: S) -> Self {
        RecorderError::AppendFailure {
            worksheet: worksheet.into(),
        }
    }

    pub fn service<S: Into<String>>(details: S) -> Self {
        RecorderError::Service {
            details: details.into(),
        }
    }

    /// Whether the error belongs to the handled taxonomy (configuration,
    /// credential parse, authentication, append). Anything else is treated as
    /// an abnormal termination by the binary.
    pub fn is_handled(&self) -> bool {
        !matches!(self, RecorderError::Service { .. })
    }

    /// Process exit status the binary reports for this error.
    pub fn exit_code(&self) -> u8 {
        if self.is_handled() {
            1
        } else {
            2
        }
    }
}

pub trait RecorderResultExt<T> {
    /// Wraps the error into a [`RecorderError`] built from its message,
    /// keeping the original error in the report.
    fn recorder_context<F>(self, context: F) -> error_stack::Result<T, RecorderError>
    where
        F: FnOnce(String) -> RecorderError;
}

impl<T, E: Context> RecorderResultExt<T> for Result<T, E> {
    fn recorder_context<F>(self, context: F) -> error_stack::Result<T, RecorderError>
    where
        F: FnOnce(String) -> RecorderError,
    {
        self.map_err(|err| {
            let details = err.to_string();
            Report::new(err).change_context(context(details))
        })
    }
}
