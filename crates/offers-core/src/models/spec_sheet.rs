//! Free-form technical specification map attached to a product.
//!
//! # Examples
//!
//! ```
//! use offers_core::models::SpecSheet;
//!
//! let specs = SpecSheet::new()
//!     .with("Peso", "150g")
//!     .with("Bateria (mAh)", 4000);
//! assert_eq!(specs.keys().collect::<Vec<_>>(), vec!["Peso", "Bateria (mAh)"]);
//! assert_eq!(specs.get_text("Bateria (mAh)").as_deref(), Some("4000"));
//! assert_eq!(specs.get_text("Tela"), None);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Insertion-ordered map from spec name to spec value.
///
/// Values are kept as JSON scalars because review authors enter strings,
/// numbers and booleans interchangeably. A `null` sheet deserializes as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<Map<String, Value>>", into = "Map<String, Value>")]
pub struct SpecSheet {
    entries: Map<String, Value>,
}

impl SpecSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace a value. Replacing keeps the original key position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Spec names in insertion order, including names whose value is absent.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// The value under `name` rendered as display text.
    ///
    /// Returns `None` when the name is missing, or when its value is `null`,
    /// blank, an array or an object.
    pub fn get_text(&self, name: &str) -> Option<String> {
        self.entries.get(name).and_then(value_text)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

impl From<Option<Map<String, Value>>> for SpecSheet {
    fn from(entries: Option<Map<String, Value>>) -> Self {
        Self {
            entries: entries.unwrap_or_default(),
        }
    }
}

impl From<SpecSheet> for Map<String, Value> {
    fn from(sheet: SpecSheet) -> Self {
        sheet.entries
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for SpecSheet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut sheet = SpecSheet::new();
        for (name, value) in iter {
            sheet.insert(name, value);
        }
        sheet
    }
}
