// Host-side checks on the frontend constants.
// The main crate is wasm-only, so the pure modules are included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn frame_tuning_is_sane() {
    assert!(MAX_FRAME_DT_SEC > 0.0 && MAX_FRAME_DT_SEC <= 0.25);
    assert!(TRANSFORM_EPSILON_PX > 0.0 && TRANSFORM_EPSILON_PX < 1.0);
    assert!(CARDS_VISIBLE >= 1.0);
}

#[test]
fn element_ids_are_distinct_and_nonempty() {
    let ids = [
        CANVAS_ID,
        FEATURES_VIEWPORT_ID,
        FEATURES_STRIP_ID,
        TRUST_STRIP_ID,
        NUMBERS_SECTION_ID,
        LOADER_ID,
        LOADER_BAR_ID,
        LOADER_LABEL_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        assert!(!a.contains(' '), "id '{}' has whitespace", a);
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn reveal_attributes_are_data_attributes() {
    assert!(REVEAL_ATTR.starts_with("data-"));
    assert!(REVEAL_INDEX_ATTR.starts_with("data-"));
    assert_ne!(REVEAL_ATTR, REVEAL_INDEX_ATTR);
}

#[test]
fn cards_visible_matches_snap_group() {
    // a full snap moves exactly one viewport of cards
    assert_eq!(
        CARDS_VISIBLE as usize,
        site_core::constants::SNAP_GROUP_CARDS
    );
}
