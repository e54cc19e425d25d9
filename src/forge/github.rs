//! Implements the Forge trait for Github
use async_trait::async_trait;
use log::*;
use octocrab::{GitHubError, Octocrab};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    forge::{
        config::{DEFAULT_PAGE_SIZE, RemoteConfig},
        request::{
            CardOutcome, Column, CreateCardRequest, Issue, ListColumnsRequest,
            ListProjectsRequest, Project, SearchIssuesRequest, SearchPage,
        },
        traits::Forge,
    },
};

#[derive(Debug, Serialize)]
struct PageParams {
    pub per_page: u8,
    pub page: u32,
}

#[derive(Debug, Serialize)]
struct ProjectListParams {
    pub state: &'static str,
    pub per_page: u8,
    pub page: u32,
}

#[derive(Debug, Serialize)]
struct SearchParams<'a> {
    pub q: &'a str,
    pub per_page: u8,
    pub page: u32,
}

#[derive(Debug, Deserialize)]
struct SearchIssueItem {
    pub id: u64,
    pub number: u64,
    pub title: String,
    pub html_url: String,
    #[serde(default)]
    pub pull_request: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct SearchIssuesResponse {
    pub total_count: u64,
    pub items: Vec<SearchIssueItem>,
}

#[derive(Debug, Deserialize)]
struct Card {
    pub id: u64,
}

/// Collects the top-level message and every nested validation message
/// from a GitHub error response.
fn error_messages(source: &GitHubError) -> Vec<String> {
    let mut messages = vec![source.message.clone()];

    if let Some(errors) = &source.errors {
        for err in errors {
            if let Some(msg) = err.get("message").and_then(|m| m.as_str()) {
                messages.push(msg.to_string());
            } else if let Some(msg) = err.as_str() {
                messages.push(msg.to_string());
            }
        }
    }

    messages
}

/// GitHub forge implementation using Octocrab for classic project and
/// issue search API interactions.
pub struct Github {
    config: RemoteConfig,
    base_uri: String,
    instance: Octocrab,
}

impl Github {
    /// Create GitHub client with personal access token authentication and API
    /// base URL configuration.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let base_uri = config.api_url.trim_end_matches('/').to_string();
        let builder = Octocrab::builder()
            .personal_token(config.token.clone())
            .base_uri(base_uri.clone())?;
        let instance = builder.build()?;

        Ok(Self {
            config,
            base_uri,
            instance,
        })
    }
}

#[async_trait]
impl Forge for Github {
    fn remote_config(&self) -> RemoteConfig {
        self.config.clone()
    }

    async fn list_projects(
        &self,
        req: ListProjectsRequest,
    ) -> Result<Vec<Project>> {
        let endpoint = format!("{}/orgs/{}/projects", self.base_uri, req.org);

        let params = ProjectListParams {
            state: "all",
            per_page: DEFAULT_PAGE_SIZE,
            page: req.page,
        };

        let projects: Vec<Project> =
            self.instance.get(endpoint, Some(&params)).await?;

        Ok(projects)
    }

    async fn list_columns(
        &self,
        req: ListColumnsRequest,
    ) -> Result<Vec<Column>> {
        let endpoint =
            format!("{}/projects/{}/columns", self.base_uri, req.project_id);

        let params = PageParams {
            per_page: DEFAULT_PAGE_SIZE,
            page: req.page,
        };

        let columns: Vec<Column> =
            self.instance.get(endpoint, Some(&params)).await?;

        Ok(columns)
    }

    async fn search_issues(
        &self,
        req: SearchIssuesRequest,
    ) -> Result<SearchPage> {
        let endpoint = format!("{}/search/issues", self.base_uri);

        let params = SearchParams {
            q: &req.query,
            per_page: DEFAULT_PAGE_SIZE,
            page: req.page,
        };

        let result: SearchIssuesResponse =
            self.instance.get(endpoint, Some(&params)).await?;

        let items = result
            .items
            .into_iter()
            .map(|i| Issue {
                id: i.id,
                number: i.number,
                title: i.title,
                html_url: i.html_url,
                is_pull_request: i.pull_request.is_some(),
            })
            .collect::<Vec<Issue>>();

        Ok(SearchPage {
            total_count: result.total_count,
            items,
        })
    }

    async fn create_card(&self, req: CreateCardRequest) -> Result<CardOutcome> {
        let endpoint = format!(
            "{}/projects/columns/{}/cards",
            self.base_uri, req.column_id
        );

        let result: std::result::Result<Card, octocrab::Error> =
            self.instance.post(endpoint, Some(&req)).await;

        match result {
            Ok(card) => Ok(CardOutcome::Created(card.id)),
            Err(octocrab::Error::GitHub { source, .. }) => {
                debug!(
                    "card creation for content {} rejected with status {}",
                    req.content_id, source.status_code
                );
                Ok(CardOutcome::Failed(error_messages(&source)))
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn delete_card(&self, card_id: u64) -> Result<()> {
        let endpoint =
            format!("{}/projects/columns/cards/{}", self.base_uri, card_id);

        let response = self.instance._delete(endpoint, None::<&()>).await?;

        match octocrab::map_github_error(response).await {
            Ok(_) => Ok(()),
            Err(octocrab::Error::GitHub { source, .. })
                if source.status_code == StatusCode::NOT_FOUND =>
            {
                warn!("card {card_id} no longer exists: nothing to delete");
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }
}
