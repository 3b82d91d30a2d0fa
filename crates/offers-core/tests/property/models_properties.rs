use offers_core::models::{SpecSheet, Verdict};
use proptest::prelude::*;

fn arb_verdict() -> impl Strategy<Value = Verdict> {
    prop_oneof![
        Just(Verdict::BetterA),
        Just(Verdict::BetterB),
        Just(Verdict::Equal),
        Just(Verdict::Incomparable),
    ]
}

// ── Mirroring twice is the identity ──────────────────────────────────────

proptest! {
    #[test]
    fn mirror_is_an_involution(v in arb_verdict()) {
        prop_assert_eq!(v.mirrored().mirrored(), v);
        prop_assert_eq!(v.mirrored().is_decided(), v.is_decided());
    }
}

// ── Spec names keep first-insertion order, through JSON too ──────────────

proptest! {
    #[test]
    fn sheet_keeps_first_insertion_order(
        pairs in prop::collection::vec(("[a-zA-Z ]{1,6}", "[0-9]{1,4}[a-z]{0,3}"), 0..12),
    ) {
        let mut expected: Vec<String> = Vec::new();
        for (name, _) in &pairs {
            if !expected.contains(name) {
                expected.push(name.clone());
            }
        }

        let sheet: SpecSheet = pairs.into_iter().collect();
        let keys: Vec<String> = sheet.keys().map(str::to_string).collect();
        prop_assert_eq!(&keys, &expected);

        let json = serde_json::to_string(&sheet).unwrap();
        let back: SpecSheet = serde_json::from_str(&json).unwrap();
        let back_keys: Vec<String> = back.keys().map(str::to_string).collect();
        prop_assert_eq!(back_keys, expected);
    }
}

// ── Blank strings never render as display text ───────────────────────────

proptest! {
    #[test]
    fn blank_values_have_no_text(blank in "[ \t]{0,5}") {
        let sheet = SpecSheet::new().with("Peso", blank);
        prop_assert!(sheet.contains("Peso"));
        prop_assert_eq!(sheet.get_text("Peso"), None);
    }
}
