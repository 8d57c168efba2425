use crate::models::SanitizedDocument;

/// Substring that marks a dynamic code execution call.
pub const EXEC_TOKEN: &str = "eval";
/// Substring written in its place.
pub const PRINT_TOKEN: &str = "print";

/// A literal, case-sensitive substring replacement.
///
/// The rule knows nothing about PHP: occurrences inside identifiers, string
/// literals and comments are rewritten too, and call parentheses are left
/// alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionRule {
    pub needle: &'static str,
    pub replacement: &'static str,
}

impl Default for SubstitutionRule {
    fn default() -> Self {
        Self {
            needle: EXEC_TOKEN,
            replacement: PRINT_TOKEN,
        }
    }
}

impl SubstitutionRule {
    pub fn count(&self, text: &str) -> usize {
        text.matches(self.needle).count()
    }

    pub fn apply(&self, text: &str) -> SanitizedDocument {
        let replacements = self.count(text);
        if replacements == 0 {
            return SanitizedDocument::new(text.to_string(), 0);
        }
        SanitizedDocument::new(text.replace(self.needle, self.replacement), replacements)
    }

    /// Byte length difference after applying the rule to `text`.
    pub fn length_delta(&self, text: &str) -> isize {
        (self.replacement.len() as isize - self.needle.len() as isize) * self.count(text) as isize
    }
}
