//! Order-preserving union of two products' spec names.

use std::collections::HashSet;

use offers_core::models::SpecSheet;

/// Distinct spec names: `a`'s names in `a`'s order, then `b`'s names not yet
/// seen, in `b`'s order. Absent sheets contribute nothing.
pub fn union_keys(a: Option<&SpecSheet>, b: Option<&SpecSheet>) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut keys = Vec::new();
    for sheet in [a, b].into_iter().flatten() {
        for key in sheet.keys() {
            if seen.insert(key) {
                keys.push(key.to_string());
            }
        }
    }
    keys
}
