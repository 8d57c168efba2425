use crate::error::DefangError;
use crate::executor::InterpreterConfig;
use crate::models::ExecutionResult;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

pub struct InterpreterRunner {
    config: InterpreterConfig,
}

impl InterpreterRunner {
    pub fn new(config: InterpreterConfig) -> Self {
        Self { config }
    }

    pub fn command(&self) -> &str {
        &self.config.command
    }

    /// Runs the interpreter with `script` as its only argument and waits for
    /// it to exit. There is no timeout; stderr is discarded.
    pub async fn execute(&self, script: &Path) -> Result<ExecutionResult, DefangError> {
        let mut command = Command::new(&self.config.command);
        command.arg(script);
        command.stdin(Stdio::inherit());
        command.stdout(Stdio::piped());
        command.stderr(Stdio::null());

        let child = command
            .spawn()
            .map_err(|e| DefangError::InterpreterUnavailable {
                command: self.config.command.clone(),
                source: e,
            })?;

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| DefangError::ExecutionFailed(e.to_string()))?;

        let exit_code = output.status.code();
        log::info!(
            "Interpreter exited with {:?}, captured {} bytes of stdout",
            exit_code,
            output.stdout.len()
        );

        let stdout = String::from_utf8(output.stdout).map_err(|_| DefangError::InvalidOutput {
            command: self.config.command.clone(),
        })?;

        Ok(ExecutionResult::new(stdout, exit_code))
    }
}
