use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Extension substring the derivation rule looks for.
pub const PHP_EXTENSION: &str = ".php";
pub const SANITIZED_SUFFIX: &str = "_safe.php";
pub const OUTPUT_SUFFIX: &str = "_output.txt";

/// The three artifacts of one run, all computed from the input path.
///
/// Only the first `.php` is replaced. When the input contains no `.php` at
/// all, both derived paths collapse onto the source path and the run will
/// overwrite the original file. Use
/// [`DerivedPaths::collides_with_source`] to detect it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedPaths {
    pub source: PathBuf,
    pub sanitized: PathBuf,
    pub output: PathBuf,
}

impl DerivedPaths {
    /// File names need not be UTF-8; the match runs on the encoded bytes.
    pub fn from_input(input: impl AsRef<Path>) -> Self {
        let input = input.as_ref().as_os_str();
        Self {
            source: PathBuf::from(input),
            sanitized: PathBuf::from(replace_first(input, PHP_EXTENSION, SANITIZED_SUFFIX)),
            output: PathBuf::from(replace_first(input, PHP_EXTENSION, OUTPUT_SUFFIX)),
        }
    }

    pub fn collides_with_source(&self) -> bool {
        self.sanitized == self.source || self.output == self.source
    }
}

fn replace_first(input: &OsStr, needle: &str, replacement: &str) -> OsString {
    let bytes = input.as_encoded_bytes();
    let needle = needle.as_bytes();
    let Some(at) = bytes.windows(needle.len()).position(|w| w == needle) else {
        return input.to_os_string();
    };

    let mut out = Vec::with_capacity(bytes.len() + replacement.len());
    out.extend_from_slice(&bytes[..at]);
    out.extend_from_slice(replacement.as_bytes());
    out.extend_from_slice(&bytes[at + needle.len()..]);
    // SAFETY: the split points border the ASCII needle, and only UTF-8 text
    // is spliced in between.
    unsafe { OsString::from_encoded_bytes_unchecked(out) }
}
