//! Platform path rules and the recognized-scheme registry.
//!
//! Both are plain configuration values passed explicitly into every operation
//! that depends on them. There is no runtime OS detection anywhere in this
//! crate; the same binary can exercise both rule sets.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Selects Windows-style or Unix-style path semantics.
///
/// Under [`PlatformProfile::Windows`], `\` is a path separator and a leading
/// `<letter>:` is a drive prefix. Under [`PlatformProfile::Unix`], `\` is an
/// ordinary path character (and therefore subject to percent-encoding when a
/// path is rendered as a locator) and drive letters have no meaning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatformProfile {
    #[default]
    Unix,
    Windows,
}

impl PlatformProfile {
    pub fn is_separator(&self, c: char) -> bool {
        c == '/' || (*self == PlatformProfile::Windows && c == '\\')
    }

    /// Whether `\` is an ordinary path character rather than a separator.
    pub fn backslash_is_literal(&self) -> bool {
        matches!(self, PlatformProfile::Unix)
    }

    /// Whether the leading `<letter>:` drive grammar is active.
    pub fn recognizes_drives(&self) -> bool {
        matches!(self, PlatformProfile::Windows)
    }
}

/// The set of schemes a resource locator may carry.
///
/// Immutable after construction. Lookup is case-insensitive: schemes are
/// folded to lowercase on insert and on query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeRegistry {
    schemes: BTreeSet<String>,
}

/// Schemes with handlers in the default registry.
static BUILTIN: Lazy<SchemeRegistry> =
    Lazy::new(|| SchemeRegistry::new(["file", "http", "https", "ftp", "jar", "mailto"]));

impl SchemeRegistry {
    pub fn new<I, S>(schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        SchemeRegistry {
            schemes: schemes
                .into_iter()
                .map(|s| s.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }

    /// The process-wide read-only registry of handled schemes.
    pub fn builtin() -> &'static SchemeRegistry {
        &BUILTIN
    }

    pub fn contains(&self, scheme: &str) -> bool {
        self.schemes.contains(&scheme.to_ascii_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }
}

impl Default for SchemeRegistry {
    fn default() -> Self {
        SchemeRegistry::builtin().clone()
    }
}
