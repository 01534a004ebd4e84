//! Selection-count aggregation over filter fields.
//!
//! Derives the badge count shown on the filter button. Each kind of
//! filter field carries its own counting rule, expressed as a tagged
//! variant instead of inspecting field shapes at runtime.

use crate::state::{FilterState, PriceRange};
use std::collections::BTreeSet;

/// A filter field viewed through its counting rule.
#[derive(Debug, Clone)]
pub enum FilterField<'a> {
    /// A category's token set; contributes its size
    TokenSet(&'a BTreeSet<String>),
    /// A named counter; contributes 1 when positive
    Counter(u32),
    /// The price window; contributes 1 when narrower than full bounds
    Range { range: PriceRange, bounds_max: u32 },
}

impl FilterField<'_> {
    /// Returns this field's contribution to the selection count.
    pub fn active_count(&self) -> usize {
        match self {
            FilterField::TokenSet(tokens) => tokens.len(),
            FilterField::Counter(value) => usize::from(*value > 0),
            FilterField::Range { range, bounds_max } => {
                usize::from(range.is_constrained(*bounds_max))
            }
        }
    }
}

/// Iterates the state's fields as tagged counting variants.
pub fn filter_fields(state: &FilterState) -> impl Iterator<Item = FilterField<'_>> {
    let categories = state.categories().values().map(FilterField::TokenSet);
    let counters = state.counters().values().map(|value| FilterField::Counter(*value));
    let range = std::iter::once(FilterField::Range {
        range: state.price(),
        bounds_max: state.bounds_max(),
    });
    categories.chain(counters).chain(range)
}

/// Sums every field's contribution into the badge count.
///
/// This is a display heuristic, not a precise active-filter count: token
/// sets count per token while counters and the price window count at most
/// once each, and a constrained price window stacks on top of any
/// positive counters.
pub fn selection_count(state: &FilterState) -> usize {
    filter_fields(state).map(|field| field.active_count()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_tokens_and_positive_counters() {
        let mut state = FilterState::cleared();
        state.toggle_token("amenities", "wifi");
        state.adjust_counter("bedrooms", 2);

        // Price equals full bounds, so it contributes nothing
        assert_eq!(selection_count(&state), 2);
    }

    #[test]
    fn test_empty_state_counts_zero() {
        assert_eq!(selection_count(&FilterState::cleared()), 0);
    }

    #[test]
    fn test_constrained_price_adds_one() {
        let mut state = FilterState::cleared();
        state.set_price_min(1);
        assert_eq!(selection_count(&state), 1);

        state.set_price_min(0);
        state.set_price_max(999);
        assert_eq!(selection_count(&state), 1);
    }

    #[test]
    fn test_zero_counter_contributes_nothing() {
        let mut state = FilterState::cleared();
        state.adjust_counter("bedrooms", 1);
        state.adjust_counter("bedrooms", -1);
        assert_eq!(selection_count(&state), 0);
    }

    #[test]
    fn test_tokens_count_individually_across_categories() {
        let mut state = FilterState::cleared();
        state.toggle_token("amenities", "wifi");
        state.toggle_token("amenities", "kitchen");
        state.toggle_token("bookingOptions", "instant-book");
        state.adjust_counter("bedrooms", 4);
        state.set_price_max(500);

        // 3 tokens + 1 counter + 1 price window
        assert_eq!(selection_count(&state), 5);
    }
}
