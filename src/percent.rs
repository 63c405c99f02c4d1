//! Percent-escaping of the reserved octets that would otherwise be read as
//! locator syntax: `%`, `#`, `?`, space, and `\` when the active profile
//! treats it as a literal path character.
//!
//! Slashes are never escaped here. Segment splitting happens before encoding,
//! so by the time these functions see a string it is a single segment.
//! Encoding always operates on the raw (decoded) domain value, never on a
//! string that might already contain escapes, so it cannot double-encode.

use crate::{error::ConversionError, profile::PlatformProfile};

fn is_reserved(c: char, profile: PlatformProfile) -> bool {
    matches!(c, '%' | '#' | '?' | ' ') || (c == '\\' && profile.backslash_is_literal())
}

/// Escape every reserved character to uppercase `%XX` form. All other
/// characters pass through unchanged.
pub fn encode(raw: &str, profile: PlatformProfile) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if is_reserved(c, profile) {
            // Reserved characters are all single-byte ASCII.
            out.push_str(&format!("%{:02X}", c as u32));
        } else {
            out.push(c);
        }
    }
    out
}

fn hex_val(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Inverse of [`encode`]. Fails if a `%` is not followed by two hex digits,
/// or if the unescaped octets are not valid UTF-8.
pub fn decode(encoded: &str) -> Result<String, ConversionError> {
    let bytes = encoded.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let (hi, lo) = match (bytes.get(i + 1), bytes.get(i + 2)) {
                (Some(&hi), Some(&lo)) => (hex_val(hi), hex_val(lo)),
                _ => (None, None),
            };
            match (hi, lo) {
                (Some(hi), Some(lo)) => {
                    out.push((hi << 4) | lo);
                    i += 3;
                }
                _ => {
                    return Err(ConversionError::Encoding {
                        input: encoded.to_string(),
                        detail: format!("'%' at byte {i} is not followed by two hex digits"),
                    });
                }
            }
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).map_err(|_| ConversionError::Encoding {
        input: encoded.to_string(),
        detail: "escaped octets are not valid UTF-8".to_string(),
    })
}
