//! Filing configuration assembled once from action inputs and threaded
//! through every step of a run.
use clap::ValueEnum;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{FilerError, Result};

/// Default look-back interval when none is provided.
pub const DEFAULT_INTERVAL: u32 = 1;

/// Which kinds of records the issue search should return.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum IssueType {
    /// Issues and pull requests
    #[default]
    Any,
    /// Issues only
    Issue,
    /// Pull requests only
    Pr,
}

impl IssueType {
    /// Search qualifier restricting results to this type, if any.
    pub fn search_term(&self) -> Option<&'static str> {
        match self {
            IssueType::Any => None,
            IssueType::Issue => Some("is:issue"),
            IssueType::Pr => Some("is:pr"),
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueType::Any => write!(f, "any"),
            IssueType::Issue => write!(f, "issue"),
            IssueType::Pr => write!(f, "pr"),
        }
    }
}

/// Unit applied to the look-back interval.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    ValueEnum,
)]
pub enum IntervalUnit {
    #[default]
    #[value(name = "d")]
    #[serde(rename = "d")]
    Days,
    #[value(name = "h")]
    #[serde(rename = "h")]
    Hours,
}

/// Immutable settings for a single filing run.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(private, name = "_build"))]
pub struct FilingConfig {
    /// Organization that owns the projects and issues
    pub org: String,
    /// Number of the project receiving new cards
    pub project_number: u64,
    /// Name of the column receiving new cards
    pub column_name: String,
    /// Issues already carded in this project are skipped
    #[builder(default)]
    pub excluded_project_number: Option<u64>,
    #[builder(default)]
    pub issue_type: IssueType,
    /// How far back to look for newly created issues
    pub interval: u32,
    #[builder(default)]
    pub interval_unit: IntervalUnit,
}

impl FilingConfigBuilder {
    pub fn build(&self) -> Result<FilingConfig> {
        let config = self._build().map_err(|e| {
            FilerError::invalid_args(format!(
                "Failed to build filing config: {}",
                e
            ))
        })?;

        if config.org.trim().is_empty() {
            return Err(FilerError::invalid_args("org must not be empty"));
        }

        if config.column_name.is_empty() {
            return Err(FilerError::invalid_args(
                "column name must not be empty",
            ));
        }

        if config.interval == 0 {
            return Err(FilerError::invalid_args(
                "interval must be greater than zero",
            ));
        }

        Ok(config)
    }
}

impl FilingConfig {
    pub fn builder() -> FilingConfigBuilder {
        FilingConfigBuilder::default()
    }
}
