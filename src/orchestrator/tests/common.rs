//! Common test utilities for orchestrator tests.

use chrono::{DateTime, TimeZone, Utc};
use mockall::predicate::eq;

pub use crate::{
    FilerError,
    config::FilingConfig,
    forge::{
        request::{
            CardOutcome, CreateCardRequest, Issue, ListColumnsRequest,
            SearchPage,
        },
        traits::MockForge,
    },
    orchestrator::outcome::{ExclusionStatus, FilingOutcome},
    test_helpers::*,
};

pub const TARGET_PROJECT_ID: u64 = 100;
pub const TARGET_COLUMN_ID: u64 = 110;
pub const EXCLUDED_PROJECT_ID: u64 = 200;
pub const EXCLUDED_COLUMN_ID: u64 = 210;

pub const ALREADY_ASSOCIATED: &str = "Project already has the associated issue";

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 10, 12, 30, 0).unwrap()
}

/// Config with project #2 set as the excluded project.
pub fn excluded_config() -> FilingConfig {
    FilingConfig {
        excluded_project_number: Some(2),
        ..create_test_config()
    }
}

/// Upstream failure returned when a card for the content already exists.
pub fn already_associated() -> CardOutcome {
    CardOutcome::Failed(vec![
        "Validation Failed".to_string(),
        ALREADY_ASSOCIATED.to_string(),
    ])
}

/// Sets up project #1 "Triage" (columns "Done", "To do") and project #2
/// "Backlog" (columns "Icebox", "Later").
pub fn expect_boards(mock_forge: &mut MockForge) {
    mock_forge.expect_list_projects().returning(|_| {
        Ok(vec![
            create_test_project(TARGET_PROJECT_ID, 1, "Triage"),
            create_test_project(EXCLUDED_PROJECT_ID, 2, "Backlog"),
        ])
    });
    mock_forge
        .expect_list_columns()
        .with(eq(ListColumnsRequest {
            project_id: TARGET_PROJECT_ID,
            page: 1,
        }))
        .returning(|_| {
            Ok(vec![
                create_test_column(109, "Done"),
                create_test_column(TARGET_COLUMN_ID, "To do"),
            ])
        });
    mock_forge
        .expect_list_columns()
        .with(eq(ListColumnsRequest {
            project_id: EXCLUDED_PROJECT_ID,
            page: 1,
        }))
        .returning(|_| {
            Ok(vec![
                create_test_column(EXCLUDED_COLUMN_ID, "Icebox"),
                create_test_column(211, "Later"),
            ])
        });
}

/// Expects a single-page search returning `issues`.
pub fn expect_search(mock_forge: &mut MockForge, issues: Vec<Issue>) {
    let total_count = issues.len() as u64;
    mock_forge
        .expect_search_issues()
        .times(1)
        .returning(move |_| {
            Ok(SearchPage {
                total_count,
                items: issues.clone(),
            })
        });
}
