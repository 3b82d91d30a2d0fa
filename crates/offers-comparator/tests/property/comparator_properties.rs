use std::collections::HashSet;

use offers_comparator::magnitude::extract_magnitude;
use offers_comparator::ComparatorEngine;
use offers_core::models::{Product, SpecSheet, Verdict};
use offers_core::traits::ISpecComparator;
use proptest::prelude::*;

fn arb_spec_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Peso".to_string()),
        Just("Latência".to_string()),
        Just("Bateria (mAh)".to_string()),
        Just("Taxa de Atualização".to_string()),
        Just("Tela".to_string()),
        "[A-Za-zÀ-ú ()]{1,20}",
    ]
}

fn arb_raw_value() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("-".to_string()),
        Just(String::new()),
        (
            0u32..10_000,
            prop::sample::select(vec!["", "ms", "g", "kg", "Hz", "GB", "mAh", "in"])
        )
            .prop_map(|(n, unit)| format!("{n}{unit}")),
        (0.0f64..1000.0).prop_map(|x| format!("{x:.2}")),
        "[ -~]{0,16}",
    ]
}

fn arb_sheet() -> impl Strategy<Value = SpecSheet> {
    prop::collection::vec(("[A-D]{1,2}", "[0-9]{1,3}[a-z]{0,2}"), 0..8)
        .prop_map(|pairs| pairs.into_iter().collect())
}

// ── Swapping sides mirrors the verdict ───────────────────────────────────

proptest! {
    #[test]
    fn swap_mirrors_verdict(
        name in arb_spec_name(),
        a in arb_raw_value(),
        b in arb_raw_value(),
    ) {
        let engine = ComparatorEngine::new();
        let forward = engine.compare(&name, &a, &b);
        let backward = engine.compare(&name, &b, &a);
        prop_assert_eq!(backward, forward.mirrored());
    }
}

// ── Comparing a value with itself is never decided ───────────────────────

proptest! {
    #[test]
    fn self_comparison_is_equal_or_incomparable(
        name in arb_spec_name(),
        v in arb_raw_value(),
    ) {
        let engine = ComparatorEngine::new();
        let verdict = engine.compare(&name, &v, &v);
        prop_assert!(!verdict.is_decided());
    }
}

// ── A missing side is always incomparable ────────────────────────────────

proptest! {
    #[test]
    fn missing_side_is_incomparable(
        name in arb_spec_name(),
        v in arb_raw_value(),
    ) {
        let engine = ComparatorEngine::new();
        prop_assert_eq!(engine.compare(&name, "-", &v), Verdict::Incomparable);
        prop_assert_eq!(engine.compare(&name, &v, "  "), Verdict::Incomparable);
    }
}

// ── Equal magnitudes with different text are Equal ───────────────────────

proptest! {
    #[test]
    fn numeric_tie_is_equal(
        name in arb_spec_name(),
        n in 0u32..100_000,
    ) {
        let engine = ComparatorEngine::new();
        let a = format!("{n}");
        let b = format!("{n}.0 un");
        prop_assert_eq!(engine.compare(&name, &a, &b), Verdict::Equal);
    }
}

// ── Extracted magnitudes are finite and non-negative ─────────────────────

proptest! {
    #[test]
    fn magnitude_is_finite_non_negative(raw in "\\PC{0,24}") {
        if let Some(m) = extract_magnitude(&raw) {
            prop_assert!(m.is_finite());
            prop_assert!(m >= 0.0);
        }
    }
}

// ── Union: every key present once, A's keys first ────────────────────────

proptest! {
    #[test]
    fn union_is_complete_and_unique(a in arb_sheet(), b in arb_sheet()) {
        let engine = ComparatorEngine::new();
        let pa = Product::new("a", "A").with_specs(a.clone());
        let pb = Product::new("b", "B").with_specs(b.clone());
        let keys = engine.union_keys(Some(&pa), Some(&pb));

        let unique: HashSet<&String> = keys.iter().collect();
        prop_assert_eq!(unique.len(), keys.len());

        for key in a.keys().chain(b.keys()) {
            prop_assert!(keys.iter().any(|k| k == key));
        }
        let a_keys: Vec<&str> = a.keys().collect();
        let prefix: Vec<&str> = keys.iter().take(a_keys.len()).map(String::as_str).collect();
        prop_assert_eq!(prefix, a_keys);
    }
}

// ── Row count is union size plus the rating row ──────────────────────────

proptest! {
    #[test]
    fn rows_match_union(a in arb_sheet(), b in arb_sheet()) {
        let engine = ComparatorEngine::new();
        let pa = Product::new("a", "A").with_specs(a);
        let pb = Product::new("b", "B").with_specs(b);
        let keys = engine.union_keys(Some(&pa), Some(&pb));
        let rows = engine.build_comparison_rows(&pa, &pb);
        prop_assert_eq!(rows.len(), keys.len() + 1);
        prop_assert_eq!(&rows, &engine.build_comparison_rows(&pa, &pb));
    }
}
