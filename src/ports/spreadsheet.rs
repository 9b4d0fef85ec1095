use crate::domain::a1_notation::{A1Notation, ToA1Notation};
use crate::domain::credential::ServiceAccountCredential;
use crate::ports::recorder_error::RecorderError;

pub const SPREADSHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
pub const DRIVE_FILE_SCOPE: &str = "https://www.googleapis.com/auth/drive.file";

/// Scopes requested when recording a deploy.
pub const RECORDER_SCOPES: [&str; 2] = [SPREADSHEETS_SCOPE, DRIVE_FILE_SCOPE];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Worksheet {
    pub spreadsheet_id: String,
    pub title: String,
}

impl ToA1Notation for Worksheet {
    fn to_a1_notation(&self) -> A1Notation {
        A1Notation::whole_sheet(&self.title)
    }
}

/// What the service reported back after an append.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppendOutcome {
    pub updated_range: Option<String>,
    pub updated_rows: u32,
    pub updated_cells: u32,
}

impl AppendOutcome {
    pub fn is_empty(&self) -> bool {
        self.updated_rows == 0 && self.updated_cells == 0
    }
}

#[async_trait::async_trait]
pub trait SpreadsheetAuthenticator: Send + Sync {
    type Client: SpreadsheetClient;

    /// Builds a client authorized for `scopes`. Rejected credentials surface
    /// here as [`RecorderError::Authentication`].
    async fn authenticate(
        &self,
        credential: ServiceAccountCredential,
        scopes: &[&str],
    ) -> error_stack::Result<Self::Client, RecorderError>;
}

#[async_trait::async_trait]
pub trait SpreadsheetClient: Send + Sync {
    async fn open_worksheet(
        &self,
        spreadsheet_id: &str,
        title: &str,
    ) -> error_stack::Result<Worksheet, RecorderError>;

    /// Appends `values` as a new last row of `worksheet`.
    async fn append_row(
        &self,
        worksheet: &Worksheet,
        values: &[String],
    ) -> error_stack::Result<AppendOutcome, RecorderError>;
}
