use error_stack::{report, ResultExt};
use google_sheets4::{
    api::{AppendValuesResponse, Spreadsheet, ValueRange},
    Sheets,
};
use std::fmt::Debug;
use tracing::{debug, instrument};

use crate::domain::a1_notation::ToA1Notation;
use crate::domain::credential::ServiceAccountCredential;
use crate::ports::recorder_error::{RecorderError, RecorderResultExt};
use crate::ports::spreadsheet::{
    AppendOutcome, SpreadsheetAuthenticator, SpreadsheetClient, Worksheet,
};

use super::{
    auth::{self},
    http_client::{self, HttpsConnector},
    value_range_factory::ValueRangeFactory,
};

/// How appended cells are interpreted by Sheets. `RAW` stores the strings
/// as-is, so dates stay text in `MM/DD/YYYY` form.
const VALUE_INPUT_OPTION: &str = "RAW";

/// Authenticates against Google with a service-account key.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoogleSheetsAuthenticator;

#[async_trait::async_trait]
impl SpreadsheetAuthenticator for GoogleSheetsAuthenticator {
    type Client = SpreadsheetManager;

    #[instrument(name = "GoogleSheetsAuthenticator::authenticate", skip(self, credential))]
    async fn authenticate(
        &self,
        credential: ServiceAccountCredential,
        scopes: &[&str],
    ) -> error_stack::Result<SpreadsheetManager, RecorderError> {
        let client = http_client::http_client()?;
        let auth = auth::auth(&credential, client.clone(), scopes).await?;
        let hub: Sheets<HttpsConnector> = Sheets::new(client, auth);

        Ok(SpreadsheetManager {
            hub,
            scopes: scopes.iter().map(|scope| scope.to_string()).collect(),
        })
    }
}

pub struct SpreadsheetManager {
    hub: Sheets<HttpsConnector>,
    scopes: Vec<String>,
}

impl Debug for SpreadsheetManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SpreadsheetManager {{ scopes: {:?} }}", self.scopes)
    }
}

impl SpreadsheetManager {
    #[instrument]
    async fn fetch_spreadsheet(
        &self,
        spreadsheet_id: &str,
    ) -> error_stack::Result<Spreadsheet, RecorderError> {
        let response = self
            .hub
            .spreadsheets()
            .get(spreadsheet_id)
            .include_grid_data(false)
            .add_scopes(&self.scopes)
            .doit()
            .await
            .recorder_context(|details| {
                RecorderError::authentication(format!(
                    "Could not open spreadsheet {}: {}",
                    spreadsheet_id, details
                ))
            })?;

        Ok(response.1)
    }
}

#[async_trait::async_trait]
impl SpreadsheetClient for SpreadsheetManager {
    #[instrument(name = "SpreadsheetManager::open_worksheet")]
    async fn open_worksheet(
        &self,
        spreadsheet_id: &str,
        title: &str,
    ) -> error_stack::Result<Worksheet, RecorderError> {
        let spreadsheet = self.fetch_spreadsheet(spreadsheet_id).await?;

        find_worksheet(&spreadsheet, spreadsheet_id, title).ok_or_else(|| {
            report!(RecorderError::authentication(format!(
                "Worksheet '{}' not found in spreadsheet {}",
                title, spreadsheet_id
            )))
        })
    }

    #[instrument(name = "SpreadsheetManager::append_row")]
    async fn append_row(
        &self,
        worksheet: &Worksheet,
        values: &[String],
    ) -> error_stack::Result<AppendOutcome, RecorderError> {
        let range = worksheet.to_a1_notation();
        let value_range = ValueRange::from_single_row(values);

        let response = self
            .hub
            .spreadsheets()
            .values_append(value_range, &worksheet.spreadsheet_id, range.as_ref())
            .value_input_option(VALUE_INPUT_OPTION)
            .add_scopes(&self.scopes)
            .doit()
            .await
            .recorder_context(RecorderError::service)
            .attach_printable_lazy(|| format!("Failed to append to range {}", range))?;

        let outcome = append_outcome(response.1);
        debug!(?outcome, "append response");
        Ok(outcome)
    }
}

fn find_worksheet(
    spreadsheet: &Spreadsheet,
    spreadsheet_id: &str,
    title: &str,
) -> Option<Worksheet> {
    spreadsheet
        .sheets
        .as_ref()?
        .iter()
        .filter_map(|sheet| sheet.properties.as_ref())
        .find(|properties| properties.title.as_deref() == Some(title))
        .map(|properties| Worksheet {
            spreadsheet_id: spreadsheet_id.to_string(),
            title: title.to_string(),
        })
}

fn append_outcome(response: AppendValuesResponse) -> AppendOutcome {
    let count = |value: Option<i32>| u32::try_from(value.unwrap_or(0)).unwrap_or(0);

    match response.updates {
        Some(updates) => AppendOutcome {
            updated_range: updates.updated_range,
            updated_rows: count(updates.updated_rows),
            updated_cells: count(updates.updated_cells),
        },
        None => AppendOutcome::default(),
    }
}
