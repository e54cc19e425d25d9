//! CLI argument parsing and GitHub connection configuration.
//!
//! Every option can also be supplied through the `INPUT_*` environment
//! variable GitHub Actions sets for action inputs.
use clap::Parser;
use secrecy::SecretString;
use std::env;
use url::Url;

use crate::{
    FilerError, Result,
    config::{DEFAULT_INTERVAL, FilingConfig, IntervalUnit, IssueType},
    forge::config::{DEFAULT_API_URL, RemoteConfig},
};

/// CLI arguments for a filing run.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(
        long,
        env = "INPUT_GITHUB_TOKEN",
        default_value = "",
        hide_env_values = true
    )]
    /// GitHub access token. Falls back to GITHUB_TOKEN env var.
    pub github_token: String,

    #[arg(long, env = "INPUT_ORG")]
    /// Organization owning the projects and issues.
    pub org: String,

    #[arg(long, env = "INPUT_PROJECT_NUMBER")]
    /// Number of the project receiving new cards.
    pub project_number: u64,

    #[arg(long, env = "INPUT_COLUMN_NAME")]
    /// Name of the column receiving new cards (case-sensitive).
    pub column_name: String,

    #[arg(long, env = "INPUT_EXCLUDED_PROJECT_NUMBER", default_value = "")]
    /// Skip issues already carded in this project. Empty means none.
    pub excluded_project_number: String,

    #[arg(
        long,
        env = "INPUT_ISSUE_TYPE",
        value_enum,
        ignore_case = true,
        default_value_t = IssueType::Any
    )]
    /// Kind of records to file.
    pub issue_type: IssueType,

    #[arg(long, env = "INPUT_INTERVAL", default_value_t = DEFAULT_INTERVAL)]
    /// How far back to look for newly created issues.
    pub interval: u32,

    #[arg(
        long,
        env = "INPUT_INTERVAL_UNIT",
        value_enum,
        ignore_case = true,
        default_value_t = IntervalUnit::Days
    )]
    /// Unit of the look-back interval: d (days) or h (hours).
    pub interval_unit: IntervalUnit,

    #[arg(long, env = "INPUT_API_URL", default_value = DEFAULT_API_URL)]
    /// GitHub REST API base URL.
    pub api_url: String,

    #[arg(
        long,
        env = "GITHUB_OUTPUT",
        default_value = "",
        hide_env_values = true
    )]
    /// File receiving step outputs. Set by the Actions runner.
    pub output_file: String,

    #[arg(long, env = "INPUT_DRY_RUN", default_value_t = false)]
    /// Log card writes instead of sending them.
    pub dry_run: bool,

    #[arg(long, env = "INPUT_DEBUG", default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,
}

impl Args {
    /// Configure the GitHub connection from CLI arguments.
    pub fn get_remote(&self) -> Result<RemoteConfig> {
        let parsed = Url::parse(&self.api_url)?;

        validate_scheme(parsed.scheme())?;

        let token =
            resolve_token(&self.github_token, env::var("GITHUB_TOKEN").ok())?;

        Ok(RemoteConfig {
            api_url: self.api_url.trim_end_matches('/').to_string(),
            token,
            dry_run: self.dry_run,
        })
    }

    /// Build the validated filing configuration from CLI arguments.
    pub fn filing_config(&self) -> Result<FilingConfig> {
        FilingConfig::builder()
            .org(self.org.trim())
            .project_number(self.project_number)
            .column_name(self.column_name.as_str())
            .excluded_project_number(parse_optional_number(
                "excluded-project-number",
                &self.excluded_project_number,
            )?)
            .issue_type(self.issue_type)
            .interval(self.interval)
            .interval_unit(self.interval_unit)
            .build()
    }

    /// Outputs file path, if the runner provided one.
    pub fn output_file(&self) -> Option<&str> {
        let path = self.output_file.trim();
        (!path.is_empty()).then_some(path)
    }
}

/// Validate API URL uses HTTP or HTTPS scheme.
fn validate_scheme(scheme: &str) -> Result<()> {
    match scheme {
        "http" | "https" => Ok(()),
        _ => Err(FilerError::invalid_args(
            "only http and https schemes are supported for api urls",
        )),
    }
}

/// Pick the explicit token, falling back to `fallback` when it is empty.
fn resolve_token(
    explicit: &str,
    fallback: Option<String>,
) -> Result<SecretString> {
    let mut token = explicit.trim().to_string();

    if token.is_empty()
        && let Some(fallback) = fallback
    {
        token = fallback.trim().to_string();
    }

    if token.is_empty() {
        return Err(FilerError::invalid_args("must set github token"));
    }

    Ok(SecretString::from(token))
}

/// Action inputs are always strings; an empty one means "not set".
fn parse_optional_number(name: &str, value: &str) -> Result<Option<u64>> {
    let value = value.trim();

    if value.is_empty() {
        return Ok(None);
    }

    value.parse::<u64>().map(Some).map_err(|_| {
        FilerError::invalid_args(format!(
            "{name} must be a positive integer, got '{value}'"
        ))
    })
}
