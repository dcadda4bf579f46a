//! Scenario tests for the author -> split -> select pipeline
//!
//! These drive the library the way the publishing flow does: an author
//! packs renderings into a bundle, the publisher splits it and hands the
//! selected variant onward.

use bundle_content::{
    Bundle, Delimiter, SelectionPolicy, VariantDiff, append_variant, pack,
};

#[test]
fn test_author_revise_publish_flow() {
    let sep = Delimiter::random();

    // The author writes the original rendering; a one-variant bundle is
    // just the document itself.
    let original = "# Getting started\n\nOriginal prose.\n";
    let mut source = pack(&[original], &sep).unwrap();
    assert_eq!(source, original);

    // A revised rendering is appended after the original.
    let revised = "# Getting started\n\nRevised prose.\n";
    source = append_variant(&source, &sep, revised).unwrap();

    // The publishing side splits and selects the canonical variant.
    let bundle = Bundle::parse(source, &sep);
    assert_eq!(bundle.variant_count(), 2);
    let chosen = bundle.select(SelectionPolicy::Last).unwrap();
    assert_eq!(chosen.text, revised);

    // The bundle still reconstructs its source exactly.
    assert_eq!(bundle.pack(), bundle.source());
}

#[test]
fn test_regional_variants_selected_by_ordinal() {
    let sep = Delimiter::random();
    let renderings = [
        "Welcome, dear reader.\n",
        "G'day, reader.\n",
        "Howdy, reader.\n",
    ];

    let source = pack(&renderings, &sep).unwrap();
    let bundle = Bundle::parse(source, &sep);

    for (i, rendering) in renderings.iter().enumerate() {
        let chosen = bundle.select(SelectionPolicy::Index(i)).unwrap();
        assert_eq!(&chosen.text, rendering);
    }
}

#[test]
fn test_revision_diff_between_variants() {
    let sep = Delimiter::random();
    let source = pack(
        &[
            "# Intro\n\nSpring is a Java framework.\n",
            "# Intro\n\nSpring is a mature Java framework.\n",
        ],
        &sep,
    )
    .unwrap();

    let bundle = Bundle::parse(source, &sep);
    let old = bundle.select(SelectionPolicy::First).unwrap();
    let new = bundle.select(SelectionPolicy::Last).unwrap();

    let diff = VariantDiff::compute(&old.text, &new.text);
    assert!(!diff.is_identical);
    assert!(diff.similarity > 0.5);
}

#[test]
fn test_collision_is_refused_before_it_can_corrupt_a_bundle() {
    let sep = Delimiter::new("::SEP::").unwrap();
    let poisoned = "prose that embeds ::SEP:: the token";

    assert!(pack(&[poisoned], &sep).is_err());
    assert!(append_variant("existing", &sep, poisoned).is_err());
}
