use error_stack::report;
use tracing::{info, instrument};

use crate::config::app_config::{RawEnvironment, RecorderConfig};
use crate::domain::clock::Clock;
use crate::domain::credential::ServiceAccountCredential;
use crate::domain::deploy_record::DeployRecord;
use crate::ports::recorder_error::RecorderError;
use crate::ports::spreadsheet::{SpreadsheetAuthenticator, SpreadsheetClient, RECORDER_SCOPES};

/// Appends one deploy row to the configured worksheet.
pub struct DeployRecorder<A, C> {
    authenticator: A,
    clock: C,
}

impl<A, C> std::fmt::Debug for DeployRecorder<A, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeployRecorder").finish_non_exhaustive()
    }
}

impl<A, C> DeployRecorder<A, C>
where
    A: SpreadsheetAuthenticator,
    C: Clock,
{
    pub fn new(authenticator: A, clock: C) -> Self {
        Self {
            authenticator,
            clock,
        }
    }

    /// Validates the raw environment, then records. Nothing is sent over the
    /// network when a required variable is missing.
    pub async fn record_from_environment(
        &self,
        raw: RawEnvironment,
    ) -> error_stack::Result<DeployRecord, RecorderError> {
        let config = RecorderConfig::try_from(raw)?;
        self.record(&config).await
    }

    #[instrument(skip(self, config), fields(spreadsheet_id = %config.sheets.spreadsheet_id))]
    pub async fn record(
        &self,
        config: &RecorderConfig,
    ) -> error_stack::Result<DeployRecord, RecorderError> {
        let credential = ServiceAccountCredential::from_json(&config.sheets.credentials_json)?;
        info!("Credentials loaded successfully.");

        let client = self
            .authenticator
            .authenticate(credential, &RECORDER_SCOPES)
            .await?;
        info!("Credentials initialized successfully.");
        info!("Google Sheets client authorized successfully.");

        let worksheet = client
            .open_worksheet(&config.sheets.spreadsheet_id, &config.sheets.worksheet_title)
            .await?;
        info!("Google Sheet opened successfully.");

        let record = DeployRecord::new(&config.metadata, self.clock.now());
        info!("Environment variables loaded successfully.");

        let outcome = client.append_row(&worksheet, &record.to_row()).await?;
        info!("Row added to {} sheet.", worksheet.title);

        if outcome.is_empty() {
            return Err(report!(RecorderError::append_failure(&worksheet.title))
                .attach_printable(format!("Append response: {:?}", outcome)));
        }

        info!(
            updated_range = outcome.updated_range.as_deref().unwrap_or_default(),
            "Google Sheet updated successfully."
        );
        Ok(record)
    }
}
