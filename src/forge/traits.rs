//! Traits related to the remote forge
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::{
    Result,
    forge::{
        config::RemoteConfig,
        request::{
            CardOutcome, Column, CreateCardRequest, ListColumnsRequest,
            ListProjectsRequest, Project, SearchIssuesRequest, SearchPage,
        },
    },
};

/// Single-page operations against the project and search APIs. Pagination
/// and dry-run handling live in [`crate::forge::manager::ForgeManager`].
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Forge: Send + Sync {
    fn remote_config(&self) -> RemoteConfig;
    async fn list_projects(&self, req: ListProjectsRequest)
    -> Result<Vec<Project>>;
    async fn list_columns(&self, req: ListColumnsRequest)
    -> Result<Vec<Column>>;
    async fn search_issues(&self, req: SearchIssuesRequest)
    -> Result<SearchPage>;
    /// Upstream validation failures are reported as
    /// [`CardOutcome::Failed`]; `Err` is reserved for transport errors.
    async fn create_card(&self, req: CreateCardRequest) -> Result<CardOutcome>;
    async fn delete_card(&self, card_id: u64) -> Result<()>;
}
