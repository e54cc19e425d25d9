pub mod actions;
mod cli;
pub mod config;
mod error;
mod forge;
mod orchestrator;
mod query;

pub use cli::Args;
pub use error::{FilerError, Result};
pub use forge::{github::Github, manager::ForgeManager};
pub use orchestrator::{
    Orchestrator,
    outcome::{ExclusionStatus, FilingOutcome, FilingRecord, RunSummary},
};

#[cfg(test)]
pub mod test_helpers;
