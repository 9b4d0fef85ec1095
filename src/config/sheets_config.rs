#[derive(Clone, PartialEq, Eq)]
pub struct SpreadsheetConfig {
    /// Service-account key as raw JSON, parsed when the recorder runs.
    pub credentials_json: Box<str>,
    pub spreadsheet_id: Box<str>,
    pub worksheet_title: Box<str>,
}

pub const DEFAULT_WORKSHEET_TITLE: &str = "Deploys";

impl std::fmt::Debug for SpreadsheetConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpreadsheetConfig")
            .field("credentials_json", &"<redacted>")
            .field("spreadsheet_id", &self.spreadsheet_id)
            .field("worksheet_title", &self.worksheet_title)
            .finish()
    }
}
