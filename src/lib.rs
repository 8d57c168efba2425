pub mod cli;
pub mod defanger;
pub mod error;
pub mod executor;
pub mod models;
pub mod sanitizer;

pub use error::{DefangError, ErrorCategory};

// Re-export commonly used types
pub use models::{
    DefangReport, DerivedPaths, ExecutionResult, RunOutcome, SanitizedDocument, SourceDocument,
};

pub use defanger::Defanger;
pub use executor::InterpreterConfig;
pub use sanitizer::SubstitutionRule;

pub use cli::CliHandler;
