//! Issue search query construction.
use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};

use crate::config::{FilingConfig, IntervalUnit};

/// Lower bound for issue creation time: `now` minus the configured interval.
pub fn created_since(
    now: DateTime<Utc>,
    interval: u32,
    unit: IntervalUnit,
) -> DateTime<Utc> {
    let delta = match unit {
        IntervalUnit::Days => TimeDelta::days(interval.into()),
        IntervalUnit::Hours => TimeDelta::hours(interval.into()),
    };

    now - delta
}

/// Builds the search query for open issues in the configured organization
/// created on or after `since`.
pub fn build_search_query(
    config: &FilingConfig,
    since: DateTime<Utc>,
) -> String {
    let created = format!(
        "created:>={}",
        since.to_rfc3339_opts(SecondsFormat::Secs, true)
    );
    let org = format!("org:{}", config.org);

    let mut terms = vec!["is:open"];

    if let Some(term) = config.issue_type.search_term() {
        terms.push(term);
    }

    terms.push(&org);
    terms.push(&created);

    terms.join(" ")
}
