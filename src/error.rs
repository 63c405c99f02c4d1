use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The three representations the engine converts between. Carried inside
/// [`ConversionError`] so a caller can build a diagnostic message without
/// knowing which entry point produced the failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueKind {
    NativePath,
    Locator,
    ResourceLocator,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::NativePath => write!(f, "native path"),
            ValueKind::Locator => write!(f, "locator"),
            ValueKind::ResourceLocator => write!(f, "resource locator"),
        }
    }
}

/// Typed failure surfaced by the strict conversion entry points.
///
/// The lenient entry points collapse every variant into an absent result;
/// callers needing the reason must use the strict variant. Nothing in this
/// crate is retried: conversion is pure computation, so a failure is
/// permanent for that input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum ConversionError {
    /// Absent argument under strict mode. Lenient mode treats the same
    /// condition as a plain absent result, not a failure.
    ///
    /// The kind fields avoid the name `source`, which `thiserror` reserves
    /// for error chaining.
    #[error("missing input for {source_kind} to {target_kind} conversion")]
    MissingInput {
        source_kind: ValueKind,
        target_kind: ValueKind,
    },

    /// The raw string does not parse under the source grammar.
    #[error("cannot parse {source_kind} '{input}': {detail}")]
    MalformedGrammar {
        input: String,
        source_kind: ValueKind,
        detail: String,
    },

    /// The input parses, but carries a component the target shape cannot
    /// hold: a query or fragment headed for a native path, an authority the
    /// platform cannot express, or a scheme outside the registry when the
    /// target requires a registered one.
    #[error("cannot convert {source_kind} '{input}' to {target_kind}: {component}")]
    UnrepresentableComponent {
        input: String,
        source_kind: ValueKind,
        target_kind: ValueKind,
        component: String,
    },

    /// Invalid percent-escape sequence, or escaped octets that do not form
    /// valid UTF-8.
    #[error("invalid percent-encoding in '{input}': {detail}")]
    Encoding { input: String, detail: String },
}

impl ConversionError {
    pub(crate) fn malformed(
        input: &str,
        source_kind: ValueKind,
        detail: impl Into<String>,
    ) -> Self {
        ConversionError::MalformedGrammar {
            input: input.to_string(),
            source_kind,
            detail: detail.into(),
        }
    }

    pub(crate) fn unrepresentable(
        input: &str,
        source_kind: ValueKind,
        target_kind: ValueKind,
        component: impl Into<String>,
    ) -> Self {
        ConversionError::UnrepresentableComponent {
            input: input.to_string(),
            source_kind,
            target_kind,
            component: component.into(),
        }
    }

    /// Rewrite the source/target metadata on an error raised by a grammar
    /// that did not know which conversion it was parsing for.
    pub(crate) fn with_kinds(self, source_kind: ValueKind, target_kind: ValueKind) -> Self {
        match self {
            ConversionError::MissingInput { .. } => ConversionError::MissingInput {
                source_kind,
                target_kind,
            },
            ConversionError::MalformedGrammar { input, detail, .. } => {
                ConversionError::MalformedGrammar {
                    input,
                    source_kind,
                    detail,
                }
            }
            ConversionError::UnrepresentableComponent {
                input, component, ..
            } => ConversionError::UnrepresentableComponent {
                input,
                source_kind,
                target_kind,
                component,
            },
            other => other,
        }
    }
}
