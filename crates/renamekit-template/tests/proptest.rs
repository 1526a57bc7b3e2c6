//! Property-based tests for the template engine using proptest.

use proptest::prelude::*;
use renamekit_template::{render, used_variables, validate, Catalog, Metadata, ValidationResult};

// ============================================================================
// Strategies
// ============================================================================

const NAMES: &[&str] = &[
    "title", "season", "episode", "year", "quality", "codec", "group", "artist", "unknownvar",
];

fn name_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(NAMES)
}

/// Values never contain braces or lowercase letters, so they cannot spell a placeholder.
fn value_strategy() -> impl Strategy<Value = String> {
    "[A-Z0-9 ._-]{0,8}"
}

fn metadata_strategy() -> impl Strategy<Value = Metadata> {
    prop::collection::btree_map(name_strategy(), value_strategy(), 0..6)
        .prop_map(|map| map.into_iter().collect())
}

/// Patterns mixing placeholders, letter-free literal text, and stray braces.
fn pattern_strategy() -> impl Strategy<Value = String> {
    let chunk = prop_oneof![
        name_strategy().prop_map(|n| format!("{{{}}}", n)),
        "[ ()\\[\\]._-]{0,6}",
        Just("{".to_string()),
        Just("}".to_string()),
    ];
    prop::collection::vec(chunk, 0..12).prop_map(|chunks| chunks.concat())
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// No placeholder for a name with a value survives rendering.
    #[test]
    fn present_names_are_always_resolved(
        pattern in pattern_strategy(),
        meta in metadata_strategy(),
    ) {
        let output = render(&pattern, &meta);
        for (name, _) in meta.iter() {
            let placeholder = format!("{{{}}}", name);
            prop_assert!(!output.contains(&placeholder), "{} left in {:?}", placeholder, output);
        }
    }

    /// Detected variables are catalog members, unique, and in catalog order.
    #[test]
    fn used_variables_follow_catalog_order(pattern in pattern_strategy()) {
        let catalog = Catalog::standard();
        let used = used_variables(&pattern);

        let positions: Vec<usize> = used
            .iter()
            .map(|name| catalog.position(name))
            .collect::<Option<Vec<_>>>()
            .expect("every detected name is in the catalog");
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    /// Detection has no hidden state.
    #[test]
    fn used_variables_is_repeatable(pattern in pattern_strategy()) {
        prop_assert_eq!(used_variables(&pattern), used_variables(&pattern));
    }

    /// Rendering has no hidden state.
    #[test]
    fn render_is_deterministic(
        pattern in pattern_strategy(),
        meta in metadata_strategy(),
    ) {
        prop_assert_eq!(render(&pattern, &meta), render(&pattern, &meta));
    }

    /// Text without braces is copied verbatim.
    #[test]
    fn brace_free_text_is_unchanged(
        text in "[^{}]{0,40}",
        meta in metadata_strategy(),
    ) {
        prop_assert_eq!(render(&text, &meta), text);
    }

    /// A malformed result always points at a brace inside the pattern.
    #[test]
    fn malformed_position_points_at_brace(pattern in pattern_strategy()) {
        if let ValidationResult::Malformed { position, .. } = validate(&pattern) {
            let brace = pattern.as_bytes()[position];
            prop_assert!(brace == b'{' || brace == b'}', "unexpected brace byte: {}", brace);
        }
    }

    /// Patterns built only from placeholders and brace-free text are valid.
    #[test]
    fn placeholder_patterns_validate(
        parts in prop::collection::vec((name_strategy(), "[a-z .-]{0,4}"), 0..8),
    ) {
        let pattern: String = parts
            .iter()
            .map(|(name, text)| format!("{{{}}}{}", name, text))
            .collect();
        prop_assert_eq!(validate(&pattern), ValidationResult::Valid);
    }

    /// Any input renders without panicking.
    #[test]
    fn render_accepts_arbitrary_input(pattern in ".{0,60}", meta in metadata_strategy()) {
        let _ = render(&pattern, &meta);
        let _ = validate(&pattern);
        let _ = used_variables(&pattern);
    }
}
