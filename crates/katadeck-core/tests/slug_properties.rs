//! Property-based tests for the slug transform
//!
//! Uses proptest to verify the navigation invariants: slugs are link-safe,
//! and for realistic challenge names the transform round-trips through the
//! resolver.

use proptest::prelude::*;

use katadeck_core::{slug_for, ChallengeDescriptor, Manifest};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Realistic challenge names: hyphen-free words separated by single spaces
/// ("Two Sum", "Longest Common Subsequence", ...).
fn challenge_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9]{1,12}( [A-Za-z0-9]{1,12}){0,4}").expect("valid regex")
}

/// Names with arbitrary interior whitespace runs.
fn messy_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z]{1,8}([ \t]{1,3}[A-Za-z]{1,8}){0,4}").expect("valid regex")
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The generated slug is lowercase and free of whitespace.
    #[test]
    fn slug_is_link_safe(name in messy_name_strategy()) {
        let slug = slug_for(&name);
        prop_assert!(!slug.chars().any(char::is_whitespace));
        prop_assert_eq!(slug.clone(), slug.to_lowercase());
    }

    /// Whitespace runs collapse: no two adjacent hyphens come from one run.
    #[test]
    fn slug_collapses_runs(name in messy_name_strategy()) {
        let slug = slug_for(&name);
        prop_assert!(!slug.contains("--"));
    }

    /// For realistic names, resolving the generated slug returns the same
    /// descriptor the slug was derived from.
    #[test]
    fn slug_round_trips_through_resolver(name in challenge_name_strategy()) {
        let challenge = ChallengeDescriptor::new(name.clone(), "challenges/generated.md");
        let manifest = Manifest::new(vec![challenge.clone()]);

        let resolved = manifest.resolve(&challenge.slug());
        prop_assert_eq!(resolved, Some(&challenge));
    }

    /// Resolution ignores slug casing entirely.
    #[test]
    fn resolution_is_case_insensitive(name in challenge_name_strategy()) {
        let challenge = ChallengeDescriptor::new(name, "challenges/generated.md");
        let manifest = Manifest::new(vec![challenge.clone()]);

        let upper = challenge.slug().to_uppercase();
        prop_assert_eq!(manifest.resolve(&upper), Some(&challenge));
    }
}
