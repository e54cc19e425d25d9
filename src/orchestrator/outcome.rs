//! Per-issue results and the summary of a filing run.
use std::fmt;

use crate::forge::request::Issue;

/// Membership of an issue in the excluded project, as determined by a probe
/// card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExclusionStatus {
    /// The excluded project already has a card for the issue
    Excluded,
    /// The probe card was created, so the issue was not in the project
    NotExcluded,
    /// The probe failed for another reason; membership is unknown
    Indeterminate(Vec<String>),
}

/// Final state of a discovered issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilingOutcome {
    /// Skipped because the issue belongs to the excluded project
    Skipped,
    /// Not filed because the exclusion probe was inconclusive
    ExclusionUnknown(Vec<String>),
    /// Card created in the target column
    Filed(u64),
    /// The target project already had a card for the issue
    DuplicateIgnored,
    /// Card creation failed
    Failed(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct FilingRecord {
    pub issue: Issue,
    pub outcome: FilingOutcome,
}

/// Outcomes of every issue processed in a run, in processing order.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub records: Vec<FilingRecord>,
}

impl RunSummary {
    pub fn record(&mut self, issue: Issue, outcome: FilingOutcome) {
        self.records.push(FilingRecord { issue, outcome });
    }

    pub fn total(&self) -> usize {
        self.records.len()
    }

    pub fn filed(&self) -> usize {
        self.count(|o| matches!(o, FilingOutcome::Filed(_)))
    }

    pub fn duplicates(&self) -> usize {
        self.count(|o| matches!(o, FilingOutcome::DuplicateIgnored))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, FilingOutcome::Skipped))
    }

    /// Card creation failures plus inconclusive exclusion probes.
    pub fn failed(&self) -> usize {
        self.count(|o| {
            matches!(
                o,
                FilingOutcome::Failed(_) | FilingOutcome::ExclusionUnknown(_)
            )
        })
    }

    fn count(&self, predicate: impl Fn(&FilingOutcome) -> bool) -> usize {
        self.records.iter().filter(|r| predicate(&r.outcome)).count()
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "processed {} issues: filed: {}, duplicates: {}, skipped: {}, \
             failed: {}",
            self.total(),
            self.filed(),
            self.duplicates(),
            self.skipped(),
            self.failed()
        )
    }
}
