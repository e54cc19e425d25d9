//! Common test helper functions shared across test modules.
//!
//! This module provides reusable utilities for creating test fixtures and
//! mock objects, reducing code duplication across different test suites.
use secrecy::SecretString;
use std::rc::Rc;

use crate::{
    Orchestrator,
    config::{FilingConfig, IntervalUnit, IssueType},
    forge::{
        config::RemoteConfig,
        manager::ForgeManager,
        request::{Column, Issue, Project},
        traits::MockForge,
    },
};

/// Creates a test RemoteConfig with sensible defaults.
pub fn create_test_remote_config() -> RemoteConfig {
    RemoteConfig {
        api_url: "https://api.github.com".to_string(),
        token: SecretString::from("test-token".to_string()),
        dry_run: false,
    }
}

/// Creates a FilingConfig targeting project #1, column "To do" of
/// "test-org", looking back one day for any issue type.
pub fn create_test_config() -> FilingConfig {
    FilingConfig {
        org: "test-org".to_string(),
        project_number: 1,
        column_name: "To do".to_string(),
        excluded_project_number: None,
        issue_type: IssueType::Any,
        interval: 1,
        interval_unit: IntervalUnit::Days,
    }
}

pub fn create_test_project(id: u64, number: u64, name: &str) -> Project {
    Project {
        id,
        number,
        name: name.to_string(),
    }
}

pub fn create_test_column(id: u64, name: &str) -> Column {
    Column {
        id,
        name: name.to_string(),
    }
}

/// Creates an issue whose number matches its id.
pub fn create_test_issue(id: u64) -> Issue {
    Issue {
        id,
        number: id,
        title: format!("Issue {id}"),
        html_url: format!("https://github.com/test-org/repo/issues/{id}"),
        is_pull_request: false,
    }
}

/// Creates a test Orchestrator with the provided mock forge and config.
/// The mock's `remote_config` expectation is set here.
///
/// # Example
/// ```ignore
/// let mut mock_forge = MockForge::new();
/// mock_forge.expect_list_projects().returning(|_| Ok(vec![]));
/// let orchestrator =
///     create_test_orchestrator(mock_forge, create_test_config());
/// ```
pub fn create_test_orchestrator(
    mut mock_forge: MockForge,
    config: FilingConfig,
) -> Orchestrator {
    mock_forge
        .expect_remote_config()
        .returning(create_test_remote_config);

    let forge = Rc::new(ForgeManager::new(Box::new(mock_forge)));

    Orchestrator::builder()
        .config(Rc::new(config))
        .forge(forge)
        .build()
        .unwrap()
}
