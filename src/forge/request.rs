use serde::{Deserialize, Serialize};
use std::fmt;

use crate::forge::config::ALREADY_ASSOCIATED_MESSAGE;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Classic organization project.
pub struct Project {
    pub id: u64,
    pub number: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Column within a classic project.
pub struct Column {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Issue or pull request returned by the issue search.
pub struct Issue {
    pub id: u64,
    pub number: u64,
    pub title: String,
    pub html_url: String,
    /// Only used for display. Cards always reference the issue id, which
    /// pull requests share with their issue record.
    pub is_pull_request: bool,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_pull_request { "PR" } else { "issue" };
        write!(f, "{kind} #{} ({})", self.number, self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Request for one page of an organization's projects.
pub struct ListProjectsRequest {
    pub org: String,
    pub page: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Request for one page of a project's columns.
pub struct ListColumnsRequest {
    pub project_id: u64,
    pub page: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Request for one page of issue search results.
pub struct SearchIssuesRequest {
    pub query: String,
    pub page: u32,
}

#[derive(Debug, Clone, Default)]
/// One page of issue search results.
pub struct SearchPage {
    /// Total number of matches across all pages
    pub total_count: u64,
    pub items: Vec<Issue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Kind of content a card points at.
pub enum ContentType {
    Issue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Request to create a card for an issue in a column.
pub struct CreateCardRequest {
    #[serde(skip)]
    pub column_id: u64,
    pub content_id: u64,
    pub content_type: ContentType,
}

impl CreateCardRequest {
    /// Card request referencing `issue` in the given column.
    pub fn for_issue(column_id: u64, issue: &Issue) -> Self {
        // search results carry issue ids, so pull requests are carded
        // through their issue as well
        Self {
            column_id,
            content_id: issue.id,
            content_type: ContentType::Issue,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of a card creation attempt.
pub enum CardOutcome {
    /// Card created with the given id
    Created(u64),
    /// Upstream rejected the card with these messages
    Failed(Vec<String>),
}

impl CardOutcome {
    /// True when the failure means the content is already carded in the
    /// target project.
    pub fn is_already_associated(&self) -> bool {
        match self {
            CardOutcome::Created(_) => false,
            CardOutcome::Failed(messages) => messages
                .iter()
                .any(|m| m.contains(ALREADY_ASSOCIATED_MESSAGE)),
        }
    }
}
