//! Native filesystem path values and their grammar.
//!
//! A [`NativePath`] is an owned, ephemeral value: parsed from a raw string at
//! the start of a conversion call and discarded at its end. Parsing never
//! touches the filesystem and never resolves `.` or `..` segments; they are
//! carried verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::profile::PlatformProfile;

/// A platform-native filesystem path.
///
/// `leading_slashes` distinguishes the three leading-separator classes that
/// survive conversion: 0 (relative), 1 (absolute), 2 (absolute with the
/// preserved double-slash prefix used for network shares). A leading run of
/// three or more separators collapses to 1; exactly two is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativePath {
    /// Path segments. Never contains empty strings; interior separator runs
    /// collapse to a single boundary.
    pub segments: Vec<String>,
    /// 0, 1, or 2. Always 1 when `drive` is set.
    pub leading_slashes: u8,
    /// Single ASCII drive letter. Only produced under the Windows profile.
    pub drive: Option<char>,
    /// A trailing separator run collapses to this flag and re-renders as
    /// exactly one separator.
    pub trailing_slash: bool,
}

impl NativePath {
    /// Parse a raw path string under the given profile's separator and
    /// drive-letter rules. Infallible: every string is some path.
    pub fn parse(raw: &str, profile: PlatformProfile) -> NativePath {
        let lead = raw
            .chars()
            .take_while(|c| profile.is_separator(*c))
            .count();
        // Separators are single-byte, so char count equals byte offset.
        let mut rest = &raw[lead..];

        let mut drive = None;
        if profile.recognizes_drives() {
            if let Some(letter) = drive_prefix(rest, profile) {
                drive = Some(letter);
                rest = &rest[2..];
            }
        }

        let leading_slashes = if drive.is_some() {
            1
        } else {
            match lead {
                0 => 0,
                2 => 2,
                _ => 1,
            }
        };

        let segments: Vec<String> = rest
            .split(|c| profile.is_separator(c))
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        let trailing_slash = !segments.is_empty()
            && rest.chars().last().is_some_and(|c| profile.is_separator(c));

        let path = NativePath {
            segments,
            leading_slashes,
            drive,
            trailing_slash,
        };
        tracing::trace!("parsed native path {:?} from {:?}", path, raw);
        path
    }

    /// Serialize back to a string. Rendering always joins with `/`; the
    /// profiles differ on the parse side only (whether `\` splits).
    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(drive) = self.drive {
            out.push(drive);
            out.push(':');
            out.push('/');
        } else {
            for _ in 0..self.leading_slashes {
                out.push('/');
            }
        }
        out.push_str(&self.segments.join("/"));
        if self.trailing_slash && !self.segments.is_empty() {
            out.push('/');
        }
        out
    }

    pub fn is_absolute(&self) -> bool {
        self.drive.is_some() || self.leading_slashes > 0
    }

    /// True only for the path parsed from `""`.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty() && self.drive.is_none() && self.leading_slashes == 0
    }
}

impl fmt::Display for NativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// `<letter>:` at the start of `rest`, followed by a separator or the end of
/// input. Returns the drive letter.
fn drive_prefix(rest: &str, profile: PlatformProfile) -> Option<char> {
    let mut chars = rest.chars();
    let letter = chars.next().filter(|c| c.is_ascii_alphabetic())?;
    if chars.next() != Some(':') {
        return None;
    }
    match chars.next() {
        None => Some(letter),
        Some(c) if profile.is_separator(c) => Some(letter),
        Some(_) => None,
    }
}

/// A drive-like segment (`c:`) appearing inside an already-split path, e.g.
/// the first segment of a locator path. Used by the conversion tables.
pub(crate) fn drive_like(segment: &str) -> Option<char> {
    let bytes = segment.as_bytes();
    if bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        Some(bytes[0] as char)
    } else {
        None
    }
}
