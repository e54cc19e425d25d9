//! Configuration for GitHub API connections.
use secrecy::SecretString;

/// Default REST API base URL for github.com.
pub const DEFAULT_API_URL: &str = "https://api.github.com";
/// Page size used for every paginated request.
pub const DEFAULT_PAGE_SIZE: u8 = 100;
/// Search only serves this many results, regardless of `total_count`.
pub const SEARCH_RESULT_LIMIT: u64 = 1000;
/// Upstream validation message returned when a card for the same content
/// already exists in the project.
pub const ALREADY_ASSOCIATED_MESSAGE: &str = "already has the associated issue";

/// Remote connection configuration for authenticating and interacting with
/// the GitHub API.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// REST API base URL without trailing slash.
    pub api_url: String,
    /// Access token for authentication.
    pub token: SecretString,
    /// Log write operations instead of sending them.
    pub dry_run: bool,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: SecretString::from("".to_string()),
            dry_run: false,
        }
    }
}
