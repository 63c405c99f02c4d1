//! Structured locator values and their grammar.
//!
//! A [`Locator`] is the generic representation: scheme optional, any leading
//! slash count, optional query and fragment. The resource-locator grammar
//! ([`Locator::parse_resource`]) is the same syntax constrained to a scheme
//! the [`SchemeRegistry`] recognizes.
//!
//! Path segments are stored percent-decoded; query and fragment are stored
//! raw and re-emitted verbatim. Rendering is the only place escapes are
//! produced, so a value can never be double-encoded. One consequence: `/`
//! is not in the reserved set, so an escaped slash (`%2F`) decodes to a
//! literal `/` inside a segment and re-renders as a separator. `file:/a%2Fb`
//! and `file:/a/b` denote the same location here.

use serde::{Deserialize, Serialize};

use crate::{
    error::{ConversionError, ValueKind},
    percent,
    profile::{PlatformProfile, SchemeRegistry},
};

/// Maximum distinguishable leading-slash count. Anything beyond this renders
/// and converts identically, because the path grammar collapses the excess.
const SLASH_CAP: u8 = 4;

/// A generic structured locator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locator {
    pub scheme: Option<String>,
    /// Count of leading slashes in the scheme-specific part, saturating at 4.
    /// Excess leading slashes are preserved distinctly from authority
    /// semantics; two slashes imply an authority only where the conversion
    /// tables say so.
    pub slashes: u8,
    /// Percent-decoded path segments, empty interior segments collapsed.
    pub segments: Vec<String>,
    pub trailing_slash: bool,
    /// Kept raw; never percent-decoded or re-encoded.
    pub query: Option<String>,
    /// Kept raw; never percent-decoded or re-encoded.
    pub fragment: Option<String>,
}

impl Locator {
    /// Parse under the generic grammar: scheme optional, anything accepted
    /// that is syntactically a locator.
    pub fn parse_generic(raw: &str) -> Result<Locator, ConversionError> {
        let (before_fragment, fragment) = match raw.find('#') {
            Some(idx) => (&raw[..idx], Some(raw[idx + 1..].to_string())),
            None => (raw, None),
        };
        let (before_query, query) = match before_fragment.find('?') {
            Some(idx) => (
                &before_fragment[..idx],
                Some(before_fragment[idx + 1..].to_string()),
            ),
            None => (before_fragment, None),
        };

        let (scheme, rest) = split_scheme(raw, before_query)?;

        let lead = rest.chars().take_while(|c| *c == '/').count();
        let slashes = (lead.min(SLASH_CAP as usize)) as u8;
        let body = &rest[lead..];

        let mut segments = Vec::new();
        for part in body.split('/').filter(|s| !s.is_empty()) {
            segments.push(percent::decode(part)?);
        }
        let trailing_slash = !segments.is_empty() && body.ends_with('/');

        let locator = Locator {
            scheme,
            slashes,
            segments,
            trailing_slash,
            query,
            fragment,
        };
        tracing::trace!("parsed locator {:?} from {:?}", locator, raw);
        Ok(locator)
    }

    /// Parse under the resource-locator grammar: scheme mandatory and
    /// registered. Unlike the generic grammar, a scheme-less input *fails*
    /// here rather than producing `scheme: None`, as does an authority
    /// marker (`//`) with no scheme in front of it.
    pub fn parse_resource(
        raw: &str,
        registry: &SchemeRegistry,
    ) -> Result<Locator, ConversionError> {
        let locator = Locator::parse_generic(raw)
            .map_err(|e| e.with_kinds(ValueKind::ResourceLocator, ValueKind::ResourceLocator))?;
        match &locator.scheme {
            None if locator.slashes >= 2 => Err(ConversionError::malformed(
                raw,
                ValueKind::ResourceLocator,
                "authority marker without a scheme",
            )),
            None => Err(ConversionError::unrepresentable(
                raw,
                ValueKind::ResourceLocator,
                ValueKind::ResourceLocator,
                "missing scheme",
            )),
            Some(scheme) if !registry.contains(scheme) => Err(ConversionError::unrepresentable(
                raw,
                ValueKind::ResourceLocator,
                ValueKind::ResourceLocator,
                format!("unregistered scheme '{scheme}'"),
            )),
            Some(_) => Ok(locator),
        }
    }

    /// Serialize in the fixed order scheme, slashes, path, query, fragment.
    /// Percent-encoding applies to path segments only; the profile decides
    /// whether `\` belongs to the reserved set.
    pub fn render(&self, profile: PlatformProfile) -> String {
        let mut out = String::new();
        if let Some(scheme) = &self.scheme {
            out.push_str(scheme);
            out.push(':');
        }
        for _ in 0..self.slashes {
            out.push('/');
        }
        let encoded: Vec<String> = self
            .segments
            .iter()
            .map(|s| percent::encode(s, profile))
            .collect();
        out.push_str(&encoded.join("/"));
        if self.trailing_slash && !self.segments.is_empty() {
            out.push('/');
        }
        if let Some(query) = &self.query {
            out.push('?');
            out.push_str(query);
        }
        if let Some(fragment) = &self.fragment {
            out.push('#');
            out.push_str(fragment);
        }
        out
    }

    /// Scheme comparison for conversion rules: case-insensitive.
    pub fn has_scheme(&self, name: &str) -> bool {
        self.scheme
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case(name))
    }
}

/// Split a leading `<scheme>:` off `before_query`. A `:` appearing before the
/// first `/` must be preceded by a syntactically valid scheme; anything else
/// is malformed rather than a path character.
fn split_scheme<'a>(
    raw: &str,
    before_query: &'a str,
) -> Result<(Option<String>, &'a str), ConversionError> {
    let colon = match before_query.find(':') {
        Some(idx) => idx,
        None => return Ok((None, before_query)),
    };
    if let Some(slash) = before_query.find('/') {
        if slash < colon {
            return Ok((None, before_query));
        }
    }
    let candidate = &before_query[..colon];
    if is_valid_scheme(candidate) {
        Ok((Some(candidate.to_string()), &before_query[colon + 1..]))
    } else {
        Err(ConversionError::malformed(
            raw,
            ValueKind::Locator,
            format!("invalid scheme '{candidate}'"),
        ))
    }
}

fn is_valid_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-'))
}
