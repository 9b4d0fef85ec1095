use config::{Config, Environment, Map};
use error_stack::report;
use serde::Deserialize;
use std::ffi::OsString;
use tracing::Level;

use crate::domain::deploy_record::DeployMetadata;
use crate::ports::recorder_error::RecorderError;

use super::sheets_config::{SpreadsheetConfig, DEFAULT_WORKSHEET_TITLE};

/// Variables the recorder reads, matched by exact name. The metadata names
/// are lowercase so they never collide with the `GITHUB_*` variables a CI
/// runner exports on its own.
pub const KNOWN_VARIABLES: [&str; 12] = [
    "GOOGLE_SHEETS_CREDENTIALS",
    "GOOGLE_SHEET_ID",
    "helpline",
    "environments",
    "environment",
    "github_ref",
    "github_sha",
    "github_actor",
    "github_branch",
    "aws_region",
    "DEPLOY_WORKSHEET",
    "LOG_LEVEL",
];

/// The process environment as read, before any validation.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RawEnvironment {
    pub google_sheets_credentials: Option<String>,
    pub google_sheet_id: Option<String>,
    pub helpline: Option<String>,
    pub environments: Option<String>,
    pub environment: Option<String>,
    pub github_ref: Option<String>,
    pub github_sha: Option<String>,
    pub github_actor: Option<String>,
    pub github_branch: Option<String>,
    pub aws_region: Option<String>,
    pub deploy_worksheet: Option<String>,
    pub log_level: Option<String>,
}

impl RawEnvironment {
    pub fn from_env() -> error_stack::Result<Self, RecorderError> {
        Self::from_os_vars(std::env::vars_os())
    }

    /// Like [`RawEnvironment::from_vars`], for raw OS strings. Variables with
    /// unknown names are skipped whatever their encoding; a known variable
    /// holding invalid UTF-8 is a configuration error.
    pub fn from_os_vars<I>(vars: I) -> error_stack::Result<Self, RecorderError>
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        let mut known = Vec::new();
        for (key, value) in vars {
            let Some(key) = key.to_str().filter(|key| KNOWN_VARIABLES.contains(key)) else {
                continue;
            };
            let value = value.into_string().map_err(|_| {
                report!(RecorderError::configuration(format!(
                    "Environment variable {} is not valid UTF-8.",
                    key
                )))
            })?;
            known.push((key.to_string(), value));
        }

        Self::from_vars(known)
    }

    pub fn from_vars<I, K, V>(vars: I) -> error_stack::Result<Self, RecorderError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        // Only known keys reach the config builder; arbitrary variable names
        // are not always valid config paths. The builder lowercases keys, so
        // exact-name filtering has to happen here.
        let source: Map<String, String> = vars
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .filter(|(key, _)| KNOWN_VARIABLES.contains(&key.as_str()))
            .collect();

        Config::builder()
            .add_source(Environment::default().source(Some(source)).ignore_empty(true))
            .build()
            .and_then(|config| config.try_deserialize::<RawEnvironment>())
            .map_err(|err| {
                report!(RecorderError::configuration(format!(
                    "Error reading environment: {}",
                    err
                )))
            })
    }

    /// Verbosity requested through `LOG_LEVEL`, `INFO` when unset or invalid.
    pub fn log_level(&self) -> Level {
        self.log_level
            .as_deref()
            .and_then(|level| level.trim().parse::<Level>().ok())
            .unwrap_or(Level::INFO)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecorderConfig {
    pub sheets: SpreadsheetConfig,
    pub metadata: DeployMetadata,
}

impl TryFrom<RawEnvironment> for RecorderConfig {
    type Error = error_stack::Report<RecorderError>;

    fn try_from(raw: RawEnvironment) -> Result<Self, Self::Error> {
        let credentials_json = non_empty(raw.google_sheets_credentials).ok_or_else(|| {
            report!(RecorderError::configuration(
                "Credentials JSON not found in environment variable."
            ))
        })?;
        let spreadsheet_id = non_empty(raw.google_sheet_id).ok_or_else(|| {
            report!(RecorderError::configuration(
                "Sheet ID not found in environment variable."
            ))
        })?;
        let worksheet_title = non_empty(raw.deploy_worksheet)
            .unwrap_or_else(|| DEFAULT_WORKSHEET_TITLE.to_string());

        Ok(RecorderConfig {
            sheets: SpreadsheetConfig {
                credentials_json: credentials_json.into(),
                spreadsheet_id: spreadsheet_id.into(),
                worksheet_title: worksheet_title.into(),
            },
            metadata: DeployMetadata {
                helpline: raw.helpline,
                environment: raw.environment,
                environments: raw.environments,
                github_ref: raw.github_ref,
                github_sha: raw.github_sha,
                github_actor: raw.github_actor,
                github_branch: raw.github_branch,
                aws_region: raw.aws_region,
            },
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}
