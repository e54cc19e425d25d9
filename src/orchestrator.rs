use chrono::{DateTime, Utc};
use derive_builder::Builder;
use log::*;
use std::rc::Rc;

use crate::{
    FilerError, Result,
    config::FilingConfig,
    forge::{
        manager::ForgeManager,
        request::{CardOutcome, Column, CreateCardRequest, Issue, Project},
    },
    orchestrator::outcome::{ExclusionStatus, FilingOutcome, RunSummary},
    query::{build_search_query, created_since},
};

pub mod outcome;

#[derive(Builder)]
#[builder(setter(into), build_fn(private, name = "_build"))]
pub struct OrchestratorParams {
    pub config: Rc<FilingConfig>,
    pub forge: Rc<ForgeManager>,
}

impl OrchestratorParamsBuilder {
    pub fn build(&self) -> Result<Orchestrator> {
        let params = self._build().map_err(|e| {
            FilerError::invalid_args(format!(
                "Failed to build orchestrator: {}",
                e
            ))
        })?;
        Ok(Orchestrator::new(params))
    }
}

/// Drives a filing run: resolves the target and excluded columns, discovers
/// recent issues and files each one in discovery order.
pub struct Orchestrator {
    config: Rc<FilingConfig>,
    forge: Rc<ForgeManager>,
}

impl Orchestrator {
    pub fn builder() -> OrchestratorParamsBuilder {
        OrchestratorParamsBuilder::default()
    }

    pub fn new(params: OrchestratorParams) -> Self {
        Self {
            config: Rc::clone(&params.config),
            forge: Rc::clone(&params.forge),
        }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        self.run_at(Utc::now()).await
    }

    /// Runs the filing workflow treating `now` as the current time.
    pub async fn run_at(&self, now: DateTime<Utc>) -> Result<RunSummary> {
        let project = self.resolve_project(self.config.project_number).await?;
        let column =
            self.resolve_column(&project, &self.config.column_name).await?;

        info!(
            "filing into column '{}' of project '{}'",
            column.name, project.name
        );

        let excluded = self.excluded_column().await?;

        let issues = self.discover_issues(now).await?;

        if issues.is_empty() {
            info!("no new issues found: nothing to file");
        }

        let mut summary = RunSummary::default();

        for issue in issues {
            let outcome =
                self.file_issue(&issue, &column, excluded.as_ref()).await;
            summary.record(issue, outcome);
        }

        info!("{summary}");

        Ok(summary)
    }

    /// Finds the configured organization's project with the given number.
    pub async fn resolve_project(&self, number: u64) -> Result<Project> {
        let project = self
            .forge
            .find_project(&self.config.org, number)
            .await?
            .ok_or_else(|| {
                FilerError::project_not_found(&self.config.org, number)
            })?;

        debug!("resolved project #{number}: id {}", project.id);

        Ok(project)
    }

    pub async fn resolve_column(
        &self,
        project: &Project,
        name: &str,
    ) -> Result<Column> {
        let columns = self.forge.list_columns(project.id).await?;

        columns
            .into_iter()
            .find(|c| c.name == name)
            .ok_or_else(|| FilerError::column_not_found(&project.name, name))
    }

    /// First column of the excluded project, used as the target for
    /// exclusion probes. `None` when no excluded project is configured.
    pub async fn excluded_column(&self) -> Result<Option<Column>> {
        let Some(number) = self.config.excluded_project_number else {
            return Ok(None);
        };

        let project = self.resolve_project(number).await?;
        let columns = self.forge.list_columns(project.id).await?;

        let column = columns.into_iter().next().ok_or_else(|| {
            FilerError::NoColumns {
                project: project.name.clone(),
            }
        })?;

        info!(
            "checking exclusion against column '{}' of project '{}'",
            column.name, project.name
        );

        Ok(Some(column))
    }

    pub async fn discover_issues(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<Issue>> {
        let since = created_since(
            now,
            self.config.interval,
            self.config.interval_unit,
        );
        let query = build_search_query(&self.config, since);

        info!("searching issues: {query}");

        let issues = self.forge.search_issues(&query).await?;

        info!("found {} issues", issues.len());

        Ok(issues)
    }

    /// Probes the excluded project's column with a card for `issue`. A probe
    /// card that gets created is deleted right away.
    pub async fn check_exclusion(
        &self,
        issue: &Issue,
        column: &Column,
    ) -> ExclusionStatus {
        let req = CreateCardRequest::for_issue(column.id, issue);

        match self.create_card(req).await {
            CardOutcome::Created(card_id) => {
                debug!("removing probe card {card_id} for {issue}");
                if let Err(err) = self.forge.delete_card(card_id).await {
                    warn!(
                        "failed to remove probe card {card_id} for {issue}: \
                         {err}"
                    );
                }
                ExclusionStatus::NotExcluded
            }
            outcome if outcome.is_already_associated() => {
                ExclusionStatus::Excluded
            }
            CardOutcome::Failed(messages) => {
                ExclusionStatus::Indeterminate(messages)
            }
        }
    }

    /// Files a single issue into the target column, consulting the excluded
    /// project first when one is configured. Never fails the run.
    pub async fn file_issue(
        &self,
        issue: &Issue,
        target: &Column,
        excluded: Option<&Column>,
    ) -> FilingOutcome {
        if let Some(excluded) = excluded {
            match self.check_exclusion(issue, excluded).await {
                ExclusionStatus::Excluded => {
                    warn!("skipping {issue}: already in excluded project");
                    return FilingOutcome::Skipped;
                }
                ExclusionStatus::Indeterminate(messages) => {
                    error!(
                        "unable to check exclusion for {issue}: {}",
                        messages.join("; ")
                    );
                    return FilingOutcome::ExclusionUnknown(messages);
                }
                ExclusionStatus::NotExcluded => {}
            }
        }

        let req = CreateCardRequest::for_issue(target.id, issue);

        match self.create_card(req).await {
            CardOutcome::Created(card_id) => {
                info!("filed {issue} as card {card_id}: {}", issue.html_url);
                FilingOutcome::Filed(card_id)
            }
            outcome if outcome.is_already_associated() => {
                warn!("{issue} already has a card in the project: ignoring");
                FilingOutcome::DuplicateIgnored
            }
            CardOutcome::Failed(messages) => {
                error!("failed to file {issue}: {}", messages.join("; "));
                FilingOutcome::Failed(messages)
            }
        }
    }

    async fn create_card(&self, req: CreateCardRequest) -> CardOutcome {
        self.forge
            .create_card(req)
            .await
            .unwrap_or_else(|err| CardOutcome::Failed(vec![err.to_string()]))
    }
}
