pub mod document;
pub mod paths;
pub mod report;

pub use document::{ExecutionResult, SanitizedDocument, SourceDocument};
pub use paths::DerivedPaths;
pub use report::{DefangReport, RunOutcome};
