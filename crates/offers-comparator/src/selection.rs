//! Caller-held selection state for the comparison page.
//!
//! The engine never reads this on its own: the caller keeps a [`Selection`],
//! mutates it in response to UI events, and asks for a table on each render.

use offers_catalog::filter_by_title;
use offers_core::models::{ComparisonTable, Product};
use offers_core::traits::ISpecComparator;

use crate::engine::ComparatorEngine;

/// Which side of the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    A,
    B,
}

/// State of one picker: chosen product, search text, dropdown visibility.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotState {
    pub product: Option<Product>,
    pub search: String,
    pub dropdown_open: bool,
}

/// Both pickers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    a: SlotState,
    b: SlotState,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot(&self, slot: Slot) -> &SlotState {
        match slot {
            Slot::A => &self.a,
            Slot::B => &self.b,
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut SlotState {
        match slot {
            Slot::A => &mut self.a,
            Slot::B => &mut self.b,
        }
    }

    /// Pick a product. Closes the dropdown and clears the search text.
    pub fn select(&mut self, slot: Slot, product: Product) {
        let state = self.slot_mut(slot);
        state.product = Some(product);
        state.dropdown_open = false;
        state.search.clear();
    }

    pub fn clear(&mut self, slot: Slot) {
        self.slot_mut(slot).product = None;
    }

    pub fn toggle_dropdown(&mut self, slot: Slot) {
        let state = self.slot_mut(slot);
        state.dropdown_open = !state.dropdown_open;
    }

    pub fn set_search(&mut self, slot: Slot, text: impl Into<String>) {
        self.slot_mut(slot).search = text.into();
    }

    /// Exchange the two pickers wholesale.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.a, &mut self.b);
    }

    /// Products matching the slot's search text, in catalog order.
    pub fn candidates<'p>(&self, slot: Slot, products: &'p [Product]) -> Vec<&'p Product> {
        filter_by_title(products, &self.slot(slot).search)
    }

    pub fn is_ready(&self) -> bool {
        self.a.product.is_some() && self.b.product.is_some()
    }

    /// Spec names of whatever is selected so far.
    pub fn union_keys(&self, engine: &ComparatorEngine) -> Vec<String> {
        engine.union_keys(self.a.product.as_ref(), self.b.product.as_ref())
    }

    /// The comparison table once both products are chosen.
    pub fn table(&self, engine: &ComparatorEngine) -> Option<ComparisonTable> {
        match (&self.a.product, &self.b.product) {
            (Some(a), Some(b)) => Some(engine.build_table(a, b)),
            _ => None,
        }
    }
}
