//! The conversion matrix between native paths, locators, and resource
//! locators.
//!
//! Every pair is exposed in both directions and both failure policies. The
//! strict (`as_*`) entry points surface a typed [`ConversionError`]; the
//! lenient (`to_*`) entry points collapse every failure into an absent
//! result, except that an absent *input* is the happy path rather than a
//! failure. Each lenient function is a thin wrapper over the same core
//! fallible conversion as its strict twin.
//!
//! All conversions are pure: parse the source string, structurally map the
//! value, render the target string. The first failing step short-circuits.

use serde::{Deserialize, Serialize};

use crate::{
    error::{ConversionError, ValueKind},
    locator::Locator,
    native::{drive_like, NativePath},
    profile::{PlatformProfile, SchemeRegistry},
};

/// The conversion engine. Owns the platform profile and scheme registry it
/// converts under; both are plain values, so engines are cheap to construct
/// and safe to share across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionEngine {
    profile: PlatformProfile,
    registry: SchemeRegistry,
}

impl ConversionEngine {
    pub fn new(profile: PlatformProfile) -> Self {
        ConversionEngine {
            profile,
            registry: SchemeRegistry::default(),
        }
    }

    /// Engine with a caller-supplied scheme registry in place of the
    /// built-in one.
    pub fn with_registry(profile: PlatformProfile, registry: SchemeRegistry) -> Self {
        ConversionEngine { profile, registry }
    }

    pub fn profile(&self) -> PlatformProfile {
        self.profile
    }

    pub fn registry(&self) -> &SchemeRegistry {
        &self.registry
    }

    // --- strict entry points ------------------------------------------------

    pub fn as_locator_from_native(&self, input: Option<&str>) -> Result<String, ConversionError> {
        let raw = require(input, ValueKind::NativePath, ValueKind::Locator)?;
        Ok(self.native_to_locator(raw, false))
    }

    pub fn as_resource_from_native(&self, input: Option<&str>) -> Result<String, ConversionError> {
        let raw = require(input, ValueKind::NativePath, ValueKind::ResourceLocator)?;
        Ok(self.native_to_locator(raw, true))
    }

    pub fn as_native_from_locator(&self, input: Option<&str>) -> Result<String, ConversionError> {
        let raw = require(input, ValueKind::Locator, ValueKind::NativePath)?;
        self.locator_to_native(raw)
    }

    pub fn as_native_from_resource(&self, input: Option<&str>) -> Result<String, ConversionError> {
        let raw = require(input, ValueKind::ResourceLocator, ValueKind::NativePath)?;
        self.resource_to_native(raw)
    }

    pub fn as_resource_from_locator(&self, input: Option<&str>) -> Result<String, ConversionError> {
        let raw = require(input, ValueKind::Locator, ValueKind::ResourceLocator)?;
        self.locator_to_resource(raw)
    }

    pub fn as_locator_from_resource(&self, input: Option<&str>) -> Result<String, ConversionError> {
        let raw = require(input, ValueKind::ResourceLocator, ValueKind::Locator)?;
        self.resource_to_locator(raw)
    }

    // --- lenient entry points -----------------------------------------------

    pub fn to_locator_from_native(&self, input: Option<&str>) -> Option<String> {
        input.map(|raw| self.native_to_locator(raw, false))
    }

    pub fn to_resource_from_native(&self, input: Option<&str>) -> Option<String> {
        input.map(|raw| self.native_to_locator(raw, true))
    }

    pub fn to_native_from_locator(&self, input: Option<&str>) -> Option<String> {
        input.and_then(|raw| self.locator_to_native(raw).ok())
    }

    pub fn to_native_from_resource(&self, input: Option<&str>) -> Option<String> {
        input.and_then(|raw| self.resource_to_native(raw).ok())
    }

    pub fn to_resource_from_locator(&self, input: Option<&str>) -> Option<String> {
        input.and_then(|raw| self.locator_to_resource(raw).ok())
    }

    pub fn to_locator_from_resource(&self, input: Option<&str>) -> Option<String> {
        input.and_then(|raw| self.resource_to_locator(raw).ok())
    }

    // --- core conversions, one per pair and direction -----------------------

    /// Native paths always have a locator representation, so this direction
    /// is infallible. With `force_scheme` (the resource-locator target) the
    /// implicit `file` scheme is always emitted; otherwise only where the
    /// rendered string would be ambiguous without it: absolute paths, the
    /// empty path, and relative paths whose first segment contains `:`.
    fn native_to_locator(&self, raw: &str, force_scheme: bool) -> String {
        let path = NativePath::parse(raw, self.profile);
        let needs_scheme = force_scheme
            || path.is_absolute()
            || path.is_empty()
            || path.segments.first().is_some_and(|s| s.contains(':'));
        let scheme = needs_scheme.then(|| "file".to_string());

        let slashes = if path.drive.is_some() {
            1
        } else {
            match path.leading_slashes {
                0 => 0,
                1 => 1,
                // The preserved double-slash prefix rides behind the
                // authority marker: `//a/b` becomes `file:////a/b`.
                _ => 4,
            }
        };

        let mut segments = Vec::with_capacity(path.segments.len() + 1);
        if let Some(drive) = path.drive {
            segments.push(format!("{drive}:"));
        }
        segments.extend(path.segments);

        let locator = Locator {
            scheme,
            slashes,
            segments,
            trailing_slash: path.trailing_slash,
            query: None,
            fragment: None,
        };
        let rendered = locator.render(self.profile);
        tracing::debug!("converted native path {:?} to locator {:?}", raw, rendered);
        rendered
    }

    fn locator_to_native(&self, raw: &str) -> Result<String, ConversionError> {
        let locator = Locator::parse_generic(raw)?;
        let native = self.map_to_native(raw, locator, ValueKind::Locator)?;
        let rendered = native.render();
        tracing::debug!("converted locator {:?} to native path {:?}", raw, rendered);
        Ok(rendered)
    }

    fn resource_to_native(&self, raw: &str) -> Result<String, ConversionError> {
        let locator = Locator::parse_resource(raw, &self.registry)
            .map_err(|e| e.with_kinds(ValueKind::ResourceLocator, ValueKind::NativePath))?;
        let native = self.map_to_native(raw, locator, ValueKind::ResourceLocator)?;
        let rendered = native.render();
        tracing::debug!(
            "converted resource locator {:?} to native path {:?}",
            raw,
            rendered
        );
        Ok(rendered)
    }

    fn locator_to_resource(&self, raw: &str) -> Result<String, ConversionError> {
        let locator = Locator::parse_generic(raw)?;
        match &locator.scheme {
            None => Err(ConversionError::unrepresentable(
                raw,
                ValueKind::Locator,
                ValueKind::ResourceLocator,
                "missing scheme",
            )),
            Some(scheme) if !self.registry.contains(scheme) => {
                Err(ConversionError::unrepresentable(
                    raw,
                    ValueKind::Locator,
                    ValueKind::ResourceLocator,
                    format!("unregistered scheme '{scheme}'"),
                ))
            }
            Some(_) => Ok(locator.render(self.profile)),
        }
    }

    /// Widening: every resource locator is a locator.
    fn resource_to_locator(&self, raw: &str) -> Result<String, ConversionError> {
        let locator = Locator::parse_resource(raw, &self.registry)
            .map_err(|e| e.with_kinds(ValueKind::ResourceLocator, ValueKind::Locator))?;
        Ok(locator.render(self.profile))
    }

    /// The structural map from a parsed locator onto a native path. The
    /// slash-count table encodes intentionally asymmetric platform behavior;
    /// see the crate documentation for the table.
    fn map_to_native(
        &self,
        raw: &str,
        locator: Locator,
        source_kind: ValueKind,
    ) -> Result<NativePath, ConversionError> {
        let unrepresentable = |component: &str| {
            Err(ConversionError::unrepresentable(
                raw,
                source_kind,
                ValueKind::NativePath,
                component,
            ))
        };

        match (&locator.query, &locator.fragment) {
            (Some(_), Some(_)) => return unrepresentable("query and fragment"),
            (Some(_), None) => return unrepresentable("query"),
            (None, Some(_)) => return unrepresentable("fragment"),
            (None, None) => {}
        }
        if let Some(scheme) = &locator.scheme {
            if !locator.has_scheme("file") {
                return unrepresentable(&format!("scheme '{scheme}'"));
            }
        }

        let windows = self.profile.recognizes_drives();
        let drive = locator.segments.first().and_then(|s| drive_like(s));

        // (drive taken, leading slashes) per slash count and platform.
        let (take_drive, leading_slashes) = match (locator.slashes, drive, windows) {
            (0, _, _) => (false, 0),
            (1, Some(_), true) => (true, 1),
            (1, _, _) => (false, 1),
            (2, Some(_), true) => (true, 1),
            (2, None, true) => {
                // Network-share form; zero segments is the bare `//` root.
                (false, 2)
            }
            (2, _, false) if locator.segments.is_empty() => (false, 2),
            (2, _, false) => return unrepresentable("authority"),
            (3, Some(_), true) => (true, 1),
            (3, _, _) => (false, 1),
            (_, _, _) => (false, 2),
        };

        let mut segments = locator.segments;
        let drive = if take_drive {
            segments.remove(0);
            drive
        } else {
            None
        };

        Ok(NativePath {
            segments,
            leading_slashes,
            drive,
            trailing_slash: locator.trailing_slash,
        })
    }
}

fn require<'a>(
    input: Option<&'a str>,
    source_kind: ValueKind,
    target_kind: ValueKind,
) -> Result<&'a str, ConversionError> {
    input.ok_or(ConversionError::MissingInput {
        source_kind,
        target_kind,
    })
}
