use chrono::NaiveDateTime;
use strum::{Display, EnumCount, EnumIter, IntoEnumIterator};

use super::clock::date_and_time;

pub const SOURCE_KIND: &str = "serverless";

/// Columns of the deploys worksheet, in sheet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumCount)]
pub enum DeployColumn {
    Date,
    Time,
    Source,
    #[strum(serialize = "Helpline_Environment")]
    HelplineEnvironment,
    Environments,
    GitRef,
    Region,
    Actor,
    Branch,
    #[strum(serialize = "SHA")]
    Sha,
}

/// Deployment metadata handed over by the pipeline. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployMetadata {
    pub helpline: Option<String>,
    pub environment: Option<String>,
    pub environments: Option<String>,
    pub github_ref: Option<String>,
    pub github_sha: Option<String>,
    pub github_actor: Option<String>,
    pub github_branch: Option<String>,
    pub aws_region: Option<String>,
}

impl DeployMetadata {
    /// `helpline` and `environment` joined by an underscore. Absent parts are
    /// left blank.
    ///
    /// # Examples
    /// ```
    /// use deploy_recorder::domain::deploy_record::DeployMetadata;
    /// let metadata = DeployMetadata {
    ///     helpline: Some("acme".to_string()),
    ///     environment: Some("prod".to_string()),
    ///     ..Default::default()
    /// };
    /// assert_eq!(metadata.helpline_environment(), "acme_prod");
    /// ```
    pub fn helpline_environment(&self) -> String {
        format!(
            "{}_{}",
            self.helpline.as_deref().unwrap_or_default(),
            self.environment.as_deref().unwrap_or_default()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployRecord {
    pub date: String,
    pub time: String,
    pub source: String,
    pub helpline_environment: String,
    pub environments: String,
    pub git_ref: String,
    pub region: String,
    pub actor: String,
    pub branch: String,
    pub sha: String,
}

impl DeployRecord {
    pub fn new(metadata: &DeployMetadata, recorded_at: NaiveDateTime) -> Self {
        let (date, time) = date_and_time(recorded_at);
        let text = |field: &Option<String>| field.clone().unwrap_or_default();

        DeployRecord {
            date,
            time,
            source: SOURCE_KIND.to_string(),
            helpline_environment: metadata.helpline_environment(),
            environments: text(&metadata.environments),
            git_ref: text(&metadata.github_ref),
            region: text(&metadata.aws_region),
            actor: text(&metadata.github_actor),
            branch: text(&metadata.github_branch),
            sha: text(&metadata.github_sha),
        }
    }

    pub fn value(&self, column: DeployColumn) -> &str {
        match column {
            DeployColumn::Date => &self.date,
            DeployColumn::Time => &self.time,
            DeployColumn::Source => &self.source,
            DeployColumn::HelplineEnvironment => &self.helpline_environment,
            DeployColumn::Environments => &self.environments,
            DeployColumn::GitRef => &self.git_ref,
            DeployColumn::Region => &self.region,
            DeployColumn::Actor => &self.actor,
            DeployColumn::Branch => &self.branch,
            DeployColumn::Sha => &self.sha,
        }
    }

    /// Cell values in worksheet column order.
    pub fn to_row(&self) -> Vec<String> {
        DeployColumn::iter()
            .map(|column| self.value(column).to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn instant() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 17)
            .unwrap()
            .and_hms_opt(8, 4, 59)
            .unwrap()
    }

    fn full_metadata() -> DeployMetadata {
        DeployMetadata {
            helpline: Some("acme".to_string()),
            environment: Some("prod".to_string()),
            environments: Some("[\"staging\",\"prod\"]".to_string()),
            github_ref: Some("refs/tags/v1.2.3".to_string()),
            github_sha: Some("0f3c2a9".to_string()),
            github_actor: Some("octocat".to_string()),
            github_branch: Some("master".to_string()),
            aws_region: Some("eu-west-1".to_string()),
        }
    }

    #[test]
    fn test_headers_in_sheet_order() {
        assert_eq!(
            DeployColumn::iter()
                .map(|column| column.to_string())
                .collect::<Vec<_>>(),
            vec![
                "Date",
                "Time",
                "Source",
                "Helpline_Environment",
                "Environments",
                "GitRef",
                "Region",
                "Actor",
                "Branch",
                "SHA"
            ]
        );
        assert_eq!(DeployColumn::COUNT, 10);
    }

    #[test]
    fn test_row_field_order() {
        let record = DeployRecord::new(&full_metadata(), instant());
        assert_eq!(
            record.to_row(),
            vec![
                "05/17/2024",
                "08:04:59",
                "serverless",
                "acme_prod",
                "[\"staging\",\"prod\"]",
                "refs/tags/v1.2.3",
                "eu-west-1",
                "octocat",
                "master",
                "0f3c2a9"
            ]
        );
    }

    #[test]
    fn test_composite_key() {
        assert_eq!(full_metadata().helpline_environment(), "acme_prod");
    }

    #[test]
    fn test_missing_fields_are_blank() {
        let record = DeployRecord::new(&DeployMetadata::default(), instant());
        let row = record.to_row();
        assert_eq!(row.len(), DeployColumn::COUNT);
        assert_eq!(row[DeployColumn::HelplineEnvironment as usize], "_");
        assert_eq!(row[DeployColumn::Source as usize], SOURCE_KIND);
        assert!(row[DeployColumn::Environments as usize..]
            .iter()
            .all(String::is_empty));
    }

    #[test]
    fn test_partial_composite_key() {
        let metadata = DeployMetadata {
            helpline: Some("acme".to_string()),
            ..Default::default()
        };
        assert_eq!(metadata.helpline_environment(), "acme_");
    }

    #[test]
    fn test_value_lookup_matches_row() {
        let record = DeployRecord::new(&full_metadata(), instant());
        let row = record.to_row();
        for (index, column) in DeployColumn::iter().enumerate() {
            assert_eq!(record.value(column), row[index], "column {column}");
        }
    }
}
