//! Numeric magnitude extraction from free-text spec values.
//!
//! Every character that is not an ASCII digit or `.` is dropped, then the
//! longest leading decimal literal of what remains is parsed:
//!
//! | raw          | stripped   | magnitude |
//! |--------------|------------|-----------|
//! | `5000mAh`    | `5000`     | 5000      |
//! | `1.2kg`      | `1.2`      | 1.2       |
//! | `25.000`     | `25.000`   | 25        |
//! | `v1.2 2.5kg` | `1.22.5`   | 1.22      |
//! | `-3dB`       | `3`        | 3         |
//! | `Preto`      | (empty)    | none      |
//!
//! Signs, grouping separators and decimal commas are not understood.

use std::sync::{LazyLock, Once};

use offers_observability::tracing_setup::events;
use regex::Regex;

static RE_NON_NUMERIC: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[^0-9.]").ok());

static RE_LEADING_DECIMAL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(?:[0-9]+\.?[0-9]*|\.[0-9]+)").ok());

static DEGRADED: Once = Once::new();

/// Extract the numeric magnitude of a spec value, or `None` when the value
/// carries no parseable number.
pub fn extract_magnitude(raw: &str) -> Option<f64> {
    let (Some(non_numeric), Some(leading)) =
        (RE_NON_NUMERIC.as_ref(), RE_LEADING_DECIMAL.as_ref())
    else {
        DEGRADED.call_once(|| {
            events::degradation_triggered(
                "magnitude",
                "regex compilation failed",
                "all values treated as non-numeric",
            );
        });
        return None;
    };

    let stripped = non_numeric.replace_all(raw, "");
    let literal = leading.find(&stripped)?;
    literal.as_str().parse::<f64>().ok()
}
