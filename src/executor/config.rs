use crate::error::DefangError;

/// Interpreter used when none is given on the command line.
pub const DEFAULT_INTERPRETER: &str = "php";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterConfig {
    pub command: String,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INTERPRETER.to_string())
    }
}

impl InterpreterConfig {
    pub fn new(command: String) -> Self {
        Self { command }
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    pub fn validate(&self) -> Result<(), DefangError> {
        if self.command.trim().is_empty() {
            return Err(DefangError::InvalidArguments(
                "Interpreter command cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
