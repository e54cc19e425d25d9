//! Access to the GitHub REST API for classic organization projects and
//! issue search.

/// Connection configuration and API constants.
pub mod config;

/// GitHub API client implementation backed by Octocrab.
pub mod github;

/// Wrapper adding pagination and dry-run handling on top of a forge.
pub mod manager;

/// Request and response types shared by forge implementations.
pub mod request;

/// Common trait for forge implementations.
pub mod traits;
