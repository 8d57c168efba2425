// Executor module - runs the interpreter against the sanitized file

pub mod config;
pub mod runner;

pub use config::{InterpreterConfig, DEFAULT_INTERPRETER};
pub use runner::InterpreterRunner;
