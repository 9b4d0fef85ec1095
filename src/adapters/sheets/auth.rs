use google_sheets4::hyper;
use google_sheets4::oauth2::{self, authenticator::Authenticator};
use tracing::instrument;

use crate::domain::credential::ServiceAccountCredential;
use crate::ports::recorder_error::{RecorderError, RecorderResultExt};

use super::http_client::HttpsConnector;

fn service_account_key(
    credential: &ServiceAccountCredential,
) -> error_stack::Result<oauth2::ServiceAccountKey, RecorderError> {
    serde_json::to_value(credential)
        .and_then(serde_json::from_value)
        .recorder_context(|details| {
            RecorderError::authentication(format!(
                "Credentials were not in the expected format: {}",
                details
            ))
        })
}

/// Builds a service-account authenticator and fetches a first token for
/// `scopes`, so a rejected credential fails here rather than on first use.
#[instrument(skip(credential, client), fields(client_email = %credential.client_email))]
pub async fn auth(
    credential: &ServiceAccountCredential,
    client: hyper::Client<HttpsConnector>,
    scopes: &[&str],
) -> error_stack::Result<Authenticator<HttpsConnector>, RecorderError> {
    let secret = service_account_key(credential)?;

    let authenticator = oauth2::ServiceAccountAuthenticator::with_client(secret, client)
        .build()
        .await
        .recorder_context(|details| {
            RecorderError::authentication(format!("Could not create an authenticator: {}", details))
        })?;

    authenticator
        .token(scopes)
        .await
        .recorder_context(|details| {
            RecorderError::authentication(format!(
                "Google rejected the service account credential: {}",
                details
            ))
        })?;

    Ok(authenticator)
}
