use crate::error::DefangError;
use crate::models::DefangReport;

pub const USAGE: &str = "Usage: defang <path_to_php_file>";

/// Every line the tool prints to stdout goes through here.
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn format_usage(&self) -> String {
        USAGE.to_string()
    }

    pub fn format_success(&self, report: &DefangReport) -> String {
        format!(
            "Processed file saved as {}\nOutput of the PHP script saved as {}",
            report.paths.sanitized.display(),
            report.paths.output.display()
        )
    }

    pub fn format_failure(&self, error: &DefangError) -> String {
        format!("An error occurred: {}", error)
    }
}
