use crate::error::DefangError;
use crate::executor::{InterpreterConfig, InterpreterRunner};
use crate::models::{DefangReport, DerivedPaths, SanitizedDocument, SourceDocument};
use crate::sanitizer::SubstitutionRule;
use std::path::Path;

/// Load, substitute, persist, execute, persist. Each step runs to
/// completion before the next one starts and nothing is rolled back on
/// failure, so a sanitized file may be left behind when a later step fails.
pub struct Defanger {
    rule: SubstitutionRule,
    runner: InterpreterRunner,
}

impl Defanger {
    pub fn new(config: InterpreterConfig) -> Self {
        Self {
            rule: SubstitutionRule::default(),
            runner: InterpreterRunner::new(config),
        }
    }

    pub async fn run(&self, input: &Path) -> Result<DefangReport, DefangError> {
        let paths = DerivedPaths::from_input(input);

        let source = self.load(&paths.source).await?;
        log::info!(
            "Read {} bytes ({} lines) from {}",
            source.size_bytes(),
            source.line_count(),
            source.path.display()
        );

        let sanitized = self.rule.apply(&source.content);
        if sanitized.is_unchanged() {
            log::info!("No '{}' found, sanitized copy is identical", self.rule.needle);
        } else {
            log::info!(
                "Replaced {} call site(s), {:+} bytes",
                sanitized.replacements,
                self.rule.length_delta(&source.content)
            );
        }
        drop(source);

        if paths.collides_with_source() {
            log::warn!(
                "{} has no .php extension; derived files will overwrite it",
                paths.source.display()
            );
        }

        self.persist_sanitized(&paths.sanitized, &sanitized).await?;

        log::info!(
            "Running {} {}",
            self.runner.command(),
            paths.sanitized.display()
        );
        let result = self.runner.execute(&paths.sanitized).await?;
        write_text(&paths.output, &result.stdout).await?;
        log::debug!("Wrote captured output to {}", paths.output.display());

        Ok(DefangReport {
            paths,
            replacements: sanitized.replacements,
            exit_code: result.exit_code,
        })
    }

    async fn load(&self, path: &Path) -> Result<SourceDocument, DefangError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| DefangError::SourceUnreadable {
                path: path.to_path_buf(),
                source: e,
            })?;
        SourceDocument::from_bytes(path, bytes)
    }

    async fn persist_sanitized(
        &self,
        path: &Path,
        document: &SanitizedDocument,
    ) -> Result<(), DefangError> {
        write_text(path, &document.content).await?;
        log::debug!("Wrote sanitized document to {}", path.display());
        Ok(())
    }
}

async fn write_text(path: &Path, text: &str) -> Result<(), DefangError> {
    tokio::fs::write(path, text.as_bytes())
        .await
        .map_err(|e| DefangError::WriteFailed {
            path: path.to_path_buf(),
            source: e,
        })
}
