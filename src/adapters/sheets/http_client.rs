use google_sheets4::{hyper, hyper_rustls};

use crate::ports::recorder_error::{RecorderError, RecorderResultExt};

pub type HttpsConnector = hyper_rustls::HttpsConnector<hyper::client::HttpConnector>;

/// Builds the HTTPS client shared by the authenticator and the Sheets hub.
/// Fails when the platform certificate store cannot be loaded.
pub fn http_client() -> error_stack::Result<hyper::Client<HttpsConnector>, RecorderError> {
    let connector = hyper_rustls::HttpsConnectorBuilder::new()
        .with_native_roots()
        .recorder_context(|details| {
            RecorderError::authentication(format!(
                "Could not load native root certificates: {}",
                details
            ))
        })?
        .https_or_http()
        .enable_http1()
        .build();

    Ok(hyper::Client::builder().build(connector))
}
