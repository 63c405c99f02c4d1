//! # locpath
//!
//! Lossless, platform-aware conversions between three overlapping
//! representations of "a location on a filesystem or on the network":
//!
//! - [`NativePath`](native::NativePath) — a platform-native filesystem path:
//!   segments, leading-slash class, optional drive letter, trailing-slash
//!   flag.
//! - [`Locator`](locator::Locator) — a generic structured identifier
//!   (optional scheme, slash count, path, query, fragment), modeled after a
//!   general-purpose URI.
//! - Resource locator — a [`Locator`](locator::Locator) constrained to a
//!   scheme recognized by a [`SchemeRegistry`](profile::SchemeRegistry),
//!   modeled after a URL with a protocol handler.
//!
//! Everything is pure, deterministic string transformation. The engine never
//! touches disk or network, resolves no symlinks, and keeps `.`/`..`
//! segments verbatim. All platform behavior flows from an explicit
//! [`PlatformProfile`](profile::PlatformProfile) value rather than runtime
//! OS detection, so both rule sets can be exercised from the same binary.
//!
//! ## Strict and lenient modes
//!
//! Every conversion exists in two variants on
//! [`ConversionEngine`](engine::ConversionEngine):
//!
//! - `as_*` (strict) returns `Result<String, ConversionError>` and fails
//!   loudly, including a `MissingInput` failure for an absent argument.
//! - `to_*` (lenient) returns `Option<String>`; an absent input or an
//!   unconvertible one both yield `None`.
//!
//! ## Quick start
//!
//! ```rust
//! use locpath::{ConversionEngine, PlatformProfile};
//!
//! let engine = ConversionEngine::new(PlatformProfile::Unix);
//!
//! // Native path to locator never fails.
//! let locator = engine.to_locator_from_native(Some("/some/path/My File.ext"));
//! assert_eq!(locator.as_deref(), Some("file:/some/path/My%20File.ext"));
//!
//! // The reverse direction can fail: a query or fragment has no native form.
//! assert_eq!(engine.to_native_from_locator(Some("file:/p?query")), None);
//! assert!(engine.as_native_from_locator(Some("file:/p?query")).is_err());
//! ```
//!
//! ## Drive letters and slash counts
//!
//! Windows drive letters reconstruct differently under one, two, or three
//! leading locator slashes, and differently again per platform profile. The
//! behavior is table-driven in [`engine`]; see that module's documentation.
//! The double-slash (network share) native prefix is preserved distinctly:
//! `//some/path` converts to `file:////some/path` and back.

pub mod engine;
pub mod error;
pub mod locator;
pub mod native;
pub mod percent;
pub mod profile;
#[cfg(test)]
mod tests;

pub use engine::ConversionEngine;
pub use error::{ConversionError, ValueKind};
pub use locator::Locator;
pub use native::NativePath;
pub use profile::{PlatformProfile, SchemeRegistry};
