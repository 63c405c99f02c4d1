//! Cross-module property tests for the conversion matrix.

use super::helpers::*;
use crate::{
    engine::ConversionEngine,
    error::{ConversionError, ValueKind},
    locator::Locator,
    native::NativePath,
    profile::PlatformProfile,
};
use test_log::test;

#[test]
fn native_round_trips_through_locator() {
    init_logging();
    for profile in [PlatformProfile::Unix, PlatformProfile::Windows] {
        let engine = ConversionEngine::new(profile);
        for raw in plain_native_corpus() {
            let locator = engine
                .to_locator_from_native(Some(raw))
                .expect("native to locator is total");
            let back = engine
                .to_native_from_locator(Some(&locator))
                .unwrap_or_else(|| panic!("{locator:?} should convert back"));
            assert_eq!(back, raw, "{profile:?} via {locator:?}");
        }
    }
}

#[test]
fn native_round_trips_through_resource_locator() {
    init_logging();
    for profile in [PlatformProfile::Unix, PlatformProfile::Windows] {
        let engine = ConversionEngine::new(profile);
        for raw in plain_native_corpus() {
            let resource = engine
                .to_resource_from_native(Some(raw))
                .expect("native to resource locator is total");
            let back = engine.to_native_from_resource(Some(&resource)).unwrap();
            assert_eq!(back, raw, "{profile:?} via {resource:?}");
        }
    }
}

#[test]
fn native_grammar_is_idempotent() {
    for profile in [PlatformProfile::Unix, PlatformProfile::Windows] {
        for raw in plain_native_corpus() {
            let once = NativePath::parse(raw, profile).render();
            let twice = NativePath::parse(&once, profile).render();
            assert_eq!(once, twice, "{profile:?} {raw:?}");
        }
    }
}

#[test]
fn locator_grammar_is_idempotent() {
    let inputs = [
        "file:",
        "file:/a/b",
        "file:////some/path",
        "mailto:test@example.com",
        "a/b c?q#f",
        "//host/share",
        "file:/my%20folder/",
    ];
    for raw in inputs {
        let once = Locator::parse_generic(raw)
            .unwrap()
            .render(PlatformProfile::Unix);
        let twice = Locator::parse_generic(&once)
            .unwrap()
            .render(PlatformProfile::Unix);
        assert_eq!(once, twice, "{raw:?}");
    }
}

#[test]
fn absent_input_propagates_per_mode() {
    let engine = ConversionEngine::new(PlatformProfile::Unix);

    assert_eq!(engine.to_locator_from_native(None), None);
    assert_eq!(engine.to_resource_from_native(None), None);
    assert_eq!(engine.to_native_from_locator(None), None);
    assert_eq!(engine.to_native_from_resource(None), None);
    assert_eq!(engine.to_resource_from_locator(None), None);
    assert_eq!(engine.to_locator_from_resource(None), None);

    let strict: [(&dyn Fn() -> Result<String, ConversionError>, ValueKind, ValueKind); 6] = [
        (&|| engine.as_locator_from_native(None), ValueKind::NativePath, ValueKind::Locator),
        (&|| engine.as_resource_from_native(None), ValueKind::NativePath, ValueKind::ResourceLocator),
        (&|| engine.as_native_from_locator(None), ValueKind::Locator, ValueKind::NativePath),
        (&|| engine.as_native_from_resource(None), ValueKind::ResourceLocator, ValueKind::NativePath),
        (&|| engine.as_resource_from_locator(None), ValueKind::Locator, ValueKind::ResourceLocator),
        (&|| engine.as_locator_from_resource(None), ValueKind::ResourceLocator, ValueKind::Locator),
    ];
    for (call, source_kind, target_kind) in strict {
        assert_eq!(
            call(),
            Err(ConversionError::MissingInput {
                source_kind,
                target_kind
            }),
            "{source_kind:?} -> {target_kind:?}"
        );
    }
}

#[test]
fn lenient_mode_discards_the_failure_reason() {
    let engine = ConversionEngine::new(PlatformProfile::Unix);
    let unconvertible = [
        "file:/folder?query",
        "file:/folder#fragment",
        "mailto:test@example.com",
        "!@#fasfasdf",
    ];
    for raw in unconvertible {
        assert!(engine.as_native_from_locator(Some(raw)).is_err(), "{raw:?}");
        assert_eq!(engine.to_native_from_locator(Some(raw)), None, "{raw:?}");
    }
}

#[test]
fn strict_failures_carry_kind_metadata() {
    let engine = ConversionEngine::new(PlatformProfile::Unix);
    match engine.as_native_from_resource(Some("https://example.com/f")) {
        Err(ConversionError::UnrepresentableComponent {
            source_kind,
            target_kind,
            ..
        }) => {
            assert_eq!(source_kind, ValueKind::ResourceLocator);
            assert_eq!(target_kind, ValueKind::NativePath);
        }
        other => panic!("expected unrepresentable component, got {other:?}"),
    }
    match engine.as_resource_from_locator(Some("no-scheme/path")) {
        Err(ConversionError::UnrepresentableComponent {
            source_kind,
            target_kind,
            ..
        }) => {
            assert_eq!(source_kind, ValueKind::Locator);
            assert_eq!(target_kind, ValueKind::ResourceLocator);
        }
        other => panic!("expected unrepresentable component, got {other:?}"),
    }
}

#[test]
fn errors_serialize_for_diagnostics() {
    // Engine values and failures both cross serde boundaries in embedding
    // applications.
    let err = ConversionError::MissingInput {
        source_kind: ValueKind::Locator,
        target_kind: ValueKind::NativePath,
    };
    let json = serde_json::to_string(&err).unwrap();
    let back: ConversionError = serde_json::from_str(&json).unwrap();
    assert_eq!(err, back);

    let engine = ConversionEngine::new(PlatformProfile::Windows);
    let json = serde_json::to_string(&engine).unwrap();
    let back: ConversionEngine = serde_json::from_str(&json).unwrap();
    assert_eq!(engine, back);
}
