//! # offers-comparator
//!
//! Spec comparator engine. Given two products with free-form specification
//! maps it unions their spec names in discovery order, parses free-text values
//! into magnitudes, and classifies each row as `BetterA`, `BetterB`, `Equal`
//! or `Incomparable` using an ordered table of polarity rules.
//!
//! The engine is pure and total: malformed input degrades to `Incomparable`.

pub mod engine;
pub mod magnitude;
pub mod matrix;
pub mod rules;
pub mod selection;
pub mod union;

pub use engine::ComparatorEngine;
pub use rules::{Resolution, RuleTable};
pub use selection::{Selection, Slot};
