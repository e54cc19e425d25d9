//! Manager that wraps forge implementations
use log::*;

use crate::{
    Result,
    forge::{
        config::{DEFAULT_PAGE_SIZE, RemoteConfig, SEARCH_RESULT_LIMIT},
        request::{
            CardOutcome, Column, CreateCardRequest, Issue, ListColumnsRequest,
            ListProjectsRequest, Project, SearchIssuesRequest,
        },
        traits::Forge,
    },
};

pub struct ForgeManager {
    forge: Box<dyn Forge>,
    remote_config: RemoteConfig,
}

impl ForgeManager {
    pub fn new(forge: Box<dyn Forge>) -> Self {
        let remote_config = forge.remote_config();
        Self {
            forge,
            remote_config,
        }
    }

    /// Finds the organization project whose number matches exactly.
    pub async fn find_project(
        &self,
        org: &str,
        number: u64,
    ) -> Result<Option<Project>> {
        let mut page = 1;

        loop {
            debug!("listing projects for org {org}: page {page}");

            let projects = self
                .forge
                .list_projects(ListProjectsRequest {
                    org: org.to_string(),
                    page,
                })
                .await?;

            let count = projects.len();

            if let Some(project) =
                projects.into_iter().find(|p| p.number == number)
            {
                return Ok(Some(project));
            }

            if count < DEFAULT_PAGE_SIZE as usize {
                return Ok(None);
            }

            page += 1;
        }
    }

    /// Lists every column of a project in board order.
    pub async fn list_columns(&self, project_id: u64) -> Result<Vec<Column>> {
        let mut columns = vec![];
        let mut page = 1;

        loop {
            let batch = self
                .forge
                .list_columns(ListColumnsRequest { project_id, page })
                .await?;

            let count = batch.len();
            columns.extend(batch);

            if count < DEFAULT_PAGE_SIZE as usize {
                break;
            }

            page += 1;
        }

        debug!("found {} columns for project {project_id}", columns.len());

        Ok(columns)
    }

    /// Runs the issue search and flattens every reachable result page,
    /// preserving the order returned upstream. Results past
    /// [`SEARCH_RESULT_LIMIT`] are never requested.
    pub async fn search_issues(&self, query: &str) -> Result<Vec<Issue>> {
        let mut issues: Vec<Issue> = vec![];
        let mut page = 1;

        loop {
            let result = self
                .forge
                .search_issues(SearchIssuesRequest {
                    query: query.to_string(),
                    page,
                })
                .await?;

            debug!(
                "search page {page}: {} items, total: {}",
                result.items.len(),
                result.total_count
            );

            if result.items.is_empty() {
                break;
            }

            if page == 1 && result.total_count > SEARCH_RESULT_LIMIT {
                warn!(
                    "search matched {} issues: only the first {} can be \
                     retrieved",
                    result.total_count, SEARCH_RESULT_LIMIT
                );
            }

            issues.extend(result.items);

            let reachable = result.total_count.min(SEARCH_RESULT_LIMIT);

            if issues.len() as u64 >= reachable {
                issues.truncate(SEARCH_RESULT_LIMIT as usize);
                break;
            }

            page += 1;
        }

        Ok(issues)
    }

    pub async fn create_card(
        &self,
        req: CreateCardRequest,
    ) -> Result<CardOutcome> {
        if self.remote_config.dry_run {
            warn!("dry_run: would create card: req: {:#?}", req);
            return Ok(CardOutcome::Created(0));
        }

        self.forge.create_card(req).await
    }

    pub async fn delete_card(&self, card_id: u64) -> Result<()> {
        if self.remote_config.dry_run {
            warn!("dry_run: would delete card: {card_id}");
            return Ok(());
        }

        self.forge.delete_card(card_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        forge::{request::SearchPage, traits::MockForge},
        test_helpers::{create_test_issue, create_test_project},
    };

    fn mock_with_config(dry_run: bool) -> MockForge {
        let mut mock_forge = MockForge::new();
        mock_forge.expect_remote_config().returning(move || RemoteConfig {
            dry_run,
            ..Default::default()
        });
        mock_forge
    }

    #[tokio::test]
    async fn find_project_matches_exact_number() {
        let mut mock_forge = mock_with_config(false);
        mock_forge.expect_list_projects().times(1).returning(|_| {
            Ok(vec![
                create_test_project(10, 1, "Roadmap"),
                create_test_project(20, 12, "Triage"),
            ])
        });

        let manager = ForgeManager::new(Box::new(mock_forge));
        let project = manager.find_project("acme", 12).await.unwrap();

        assert_eq!(project.unwrap().id, 20);
    }

    #[tokio::test]
    async fn find_project_walks_pages_until_short_page() {
        let mut mock_forge = mock_with_config(false);
        mock_forge
            .expect_list_projects()
            .with(mockall::predicate::eq(ListProjectsRequest {
                org: "acme".into(),
                page: 1,
            }))
            .times(1)
            .returning(|_| {
                Ok((0..100)
                    .map(|n| create_test_project(n, n, "Board"))
                    .collect())
            });
        mock_forge
            .expect_list_projects()
            .with(mockall::predicate::eq(ListProjectsRequest {
                org: "acme".into(),
                page: 2,
            }))
            .times(1)
            .returning(|_| Ok(vec![create_test_project(500, 150, "Late")]));

        let manager = ForgeManager::new(Box::new(mock_forge));

        let found = manager.find_project("acme", 150).await.unwrap();
        assert_eq!(found.unwrap().name, "Late");
    }

    #[tokio::test]
    async fn find_project_returns_none_when_missing() {
        let mut mock_forge = mock_with_config(false);
        mock_forge
            .expect_list_projects()
            .times(1)
            .returning(|_| Ok(vec![create_test_project(10, 1, "Roadmap")]));

        let manager = ForgeManager::new(Box::new(mock_forge));
        let project = manager.find_project("acme", 99).await.unwrap();

        assert!(project.is_none());
    }

    #[tokio::test]
    async fn search_issues_consumes_every_page() {
        let mut mock_forge = mock_with_config(false);
        mock_forge.expect_search_issues().times(3).returning(|req| {
            let items = match req.page {
                1 | 2 => (0..100)
                    .map(|n| create_test_issue(req.page as u64 * 1000 + n))
                    .collect(),
                _ => (0..50).map(|n| create_test_issue(9000 + n)).collect(),
            };
            Ok(SearchPage {
                total_count: 250,
                items,
            })
        });

        let manager = ForgeManager::new(Box::new(mock_forge));
        let issues = manager.search_issues("is:open org:acme").await.unwrap();

        assert_eq!(issues.len(), 250);
        assert_eq!(issues[0].id, 1000);
        assert_eq!(issues[100].id, 2000);
        assert_eq!(issues[249].id, 9049);
    }

    #[tokio::test]
    async fn search_issues_stops_on_empty_page() {
        let mut mock_forge = mock_with_config(false);
        mock_forge.expect_search_issues().times(2).returning(|req| {
            let items = if req.page == 1 {
                vec![create_test_issue(1)]
            } else {
                vec![]
            };
            Ok(SearchPage {
                total_count: 5,
                items,
            })
        });

        let manager = ForgeManager::new(Box::new(mock_forge));
        let issues = manager.search_issues("is:open").await.unwrap();

        assert_eq!(issues.len(), 1);
    }

    #[tokio::test]
    async fn search_issues_stops_at_result_limit() {
        let mut mock_forge = mock_with_config(false);
        mock_forge
            .expect_search_issues()
            .withf(|req| req.page <= 10)
            .times(10)
            .returning(|req| {
                Ok(SearchPage {
                    total_count: 1500,
                    items: (0..100)
                        .map(|n| create_test_issue(req.page as u64 * 1000 + n))
                        .collect(),
                })
            });
        mock_forge
            .expect_search_issues()
            .withf(|req| req.page > 10)
            .never();

        let manager = ForgeManager::new(Box::new(mock_forge));
        let issues = manager.search_issues("is:open org:acme").await.unwrap();

        assert_eq!(issues.len(), 1000);
        assert_eq!(issues[999].id, 10099);
    }

    #[tokio::test]
    async fn dry_run_prevents_create_card() {
        let mut mock_forge = mock_with_config(true);
        mock_forge.expect_create_card().never();

        let manager = ForgeManager::new(Box::new(mock_forge));
        let outcome = manager
            .create_card(CreateCardRequest::for_issue(
                7,
                &create_test_issue(1),
            ))
            .await
            .unwrap();

        assert_eq!(outcome, CardOutcome::Created(0));
    }

    #[tokio::test]
    async fn dry_run_prevents_delete_card() {
        let mut mock_forge = mock_with_config(true);
        mock_forge.expect_delete_card().never();

        let manager = ForgeManager::new(Box::new(mock_forge));
        let result = manager.delete_card(42).await;

        assert!(result.is_ok());
    }
}
