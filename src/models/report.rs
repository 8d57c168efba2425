use crate::error::DefangError;
use crate::models::DerivedPaths;

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct DefangReport {
    pub paths: DerivedPaths,
    pub replacements: usize,
    pub exit_code: Option<i32>,
}

/// What a CLI invocation ended up doing. The process exits 0 for every
/// variant; this is for callers embedding the handler.
#[derive(Debug)]
pub enum RunOutcome {
    Usage,
    Completed(DefangReport),
    Failed(DefangError),
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Completed(_))
    }

    pub fn report(&self) -> Option<&DefangReport> {
        match self {
            RunOutcome::Completed(report) => Some(report),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&DefangError> {
        match self {
            RunOutcome::Failed(err) => Some(err),
            _ => None,
        }
    }
}
