pub mod args;
pub mod reporter;

pub use args::Cli;
pub use reporter::{ConsoleReporter, USAGE};

use crate::defanger::Defanger;
use crate::models::RunOutcome;

pub struct CliHandler {
    cli: Cli,
}

impl CliHandler {
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Runs one invocation. Every failure is printed here and folded into
    /// the returned outcome; nothing escapes to the caller as an error.
    pub async fn run(&self) -> RunOutcome {
        let reporter = ConsoleReporter;

        let Some(path) = self.cli.path.as_deref() else {
            println!("{}", reporter.format_usage());
            return RunOutcome::Usage;
        };

        if let Err(e) = self.cli.validate() {
            log::debug!("Rejected arguments: {}", e);
            println!("{}", reporter.format_usage());
            return RunOutcome::Usage;
        }

        if !self.cli.ignored.is_empty() {
            log::debug!("Ignoring {} extra argument(s)", self.cli.ignored.len());
        }

        let defanger = Defanger::new(self.cli.interpreter_config());
        match defanger.run(path).await {
            Ok(report) => {
                println!("{}", reporter.format_success(&report));
                RunOutcome::Completed(report)
            }
            Err(e) => {
                log::debug!("Run failed ({:?})", e.category());
                println!("{}", reporter.format_failure(&e));
                RunOutcome::Failed(e)
            }
        }
    }
}
