use crate::error::DefangError;
use std::path::{Path, PathBuf};

/// The file under inspection, read once and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceDocument {
    pub path: PathBuf,
    pub content: String,
}

impl SourceDocument {
    pub fn new(path: impl Into<PathBuf>, content: String) -> Self {
        Self {
            path: path.into(),
            content,
        }
    }

    /// Decodes raw file bytes, rejecting anything that is not UTF-8.
    pub fn from_bytes(path: &Path, bytes: Vec<u8>) -> Result<Self, DefangError> {
        let content = String::from_utf8(bytes).map_err(|_| DefangError::InvalidEncoding {
            path: path.to_path_buf(),
        })?;
        Ok(Self::new(path, content))
    }

    pub fn size_bytes(&self) -> usize {
        self.content.len()
    }

    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SanitizedDocument {
    pub content: String,
    pub replacements: usize,
}

impl SanitizedDocument {
    pub fn new(content: String, replacements: usize) -> Self {
        Self {
            content,
            replacements,
        }
    }

    pub fn is_unchanged(&self) -> bool {
        self.replacements == 0
    }
}

/// Captured stdout of one interpreter run. The exit code is kept for
/// diagnostics only.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionResult {
    pub stdout: String,
    pub exit_code: Option<i32>,
}

impl ExecutionResult {
    pub fn new(stdout: String, exit_code: Option<i32>) -> Self {
        Self { stdout, exit_code }
    }
}
