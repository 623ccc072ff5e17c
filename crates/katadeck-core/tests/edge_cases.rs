//! Edge case and boundary condition tests
//!
//! These verify the manifest model handles unusual names, duplicate
//! entries and boundary values correctly.

use katadeck_core::{slug_for, ChallengeDescriptor, Manifest};

// ============================================================================
// Empty Input Tests
// ============================================================================

/// An empty manifest is valid; it just resolves nothing.
#[test]
fn test_empty_manifest() {
    let manifest = Manifest::from_json("[]").unwrap();
    assert!(manifest.is_empty());
    assert!(manifest.resolve("anything").is_none());
}

/// An empty name yields an empty slug, which still resolves to that entry.
#[test]
fn test_empty_name() {
    let manifest = Manifest::new(vec![ChallengeDescriptor::new("", "challenges/blank.md")]);
    assert_eq!(slug_for(""), "");
    assert_eq!(manifest.resolve("").unwrap().file, "challenges/blank.md");
}

/// A whitespace-only name collapses to a single hyphen.
#[test]
fn test_whitespace_only_name() {
    for name in ["   ", "\t", "\n", " \t\n "] {
        assert_eq!(slug_for(name), "-");
    }
}

// ============================================================================
// Name Shape Tests
// ============================================================================

/// Interior whitespace runs of any shape collapse to one hyphen each.
#[test]
fn test_whitespace_runs_collapse() {
    assert_eq!(slug_for("Two   Sum"), "two-sum");
    assert_eq!(slug_for("Two\t\tSum"), "two-sum");
    assert_eq!(slug_for("Two \t Sum"), "two-sum");
}

/// Non-ASCII names lowercase through the full Unicode mapping.
#[test]
fn test_unicode_name() {
    let manifest = Manifest::new(vec![ChallengeDescriptor::new(
        "Größte Summe",
        "challenges/groesste-summe.md",
    )]);
    assert_eq!(slug_for("Größte Summe"), "größte-summe");
    assert!(manifest.resolve("größte-summe").is_some());
}

/// A name containing a literal hyphen does not survive the reverse
/// transform: resolving turns every hyphen into a space. First-match-wins
/// still applies to whatever does match.
#[test]
fn test_hyphenated_name_does_not_round_trip() {
    let manifest = Manifest::new(vec![ChallengeDescriptor::new(
        "Merge-Sort",
        "challenges/merge-sort.md",
    )]);
    assert_eq!(slug_for("Merge-Sort"), "merge-sort");
    assert!(manifest.resolve("merge-sort").is_none());
}

// ============================================================================
// Duplicate Tests
// ============================================================================

/// Duplicate names keep both entries; resolution picks the first.
#[test]
fn test_duplicate_names_first_match_wins() {
    let manifest = Manifest::new(vec![
        ChallengeDescriptor::new("Warmup", "challenges/warmup-old.md"),
        ChallengeDescriptor::new("WARMUP", "challenges/warmup-new.md"),
    ]);
    assert_eq!(manifest.len(), 2);
    assert_eq!(
        manifest.resolve("warmup").unwrap().file,
        "challenges/warmup-old.md"
    );
}
