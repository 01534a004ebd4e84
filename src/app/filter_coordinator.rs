//! Filter transaction and persistence coordination.
//!
//! Handles the workflows that span the filter store and its
//! collaborators: restoring saved filters at startup, the "Show results"
//! apply transaction, and "Clear all".

use crate::app::{OverlayCoordinator, SearchState, FILTERS_OVERLAY};
use crate::domain::selection_count;
use crate::state::FilterSnapshot;
use anyhow::Result;
use std::time::Instant;

const SAVED_FILTERS_KEY: &str = "saved_filters";

/// Coordinates filter transactions and snapshot persistence.
///
/// Persistence goes through the host's `eframe::Storage` slot as a JSON
/// string. Loading never fails outward: anything missing or undecodable
/// falls back to the built-in defaults.
pub struct FilterCoordinator;

impl FilterCoordinator {
    /// Restores previously applied filters from persistent storage.
    ///
    /// Called once at startup. A missing or malformed snapshot leaves the
    /// state at its initial-load defaults.
    pub fn load_saved_filters(storage: Option<&dyn eframe::Storage>, state: &mut SearchState) {
        let Some(storage) = storage else {
            return;
        };
        let Some(json) = storage.get_string(SAVED_FILTERS_KEY) else {
            return;
        };
        match Self::decode_snapshot(&json) {
            Ok(snapshot) => state.filters.load_snapshot(snapshot),
            Err(error) => {
                log::debug!("ignoring saved filters: {}", error);
            }
        }
    }

    /// Applies the current selections: persists them as the new saved
    /// snapshot and requests the filter panel closed.
    pub fn apply(state: &mut SearchState, storage: &mut dyn eframe::Storage, now: Instant) {
        let snapshot = state.filters.snapshot();
        if let Ok(json) = serde_json::to_string(&snapshot) {
            storage.set_string(SAVED_FILTERS_KEY, json);
            storage.flush();
        }
        OverlayCoordinator::close(state, FILTERS_OVERLAY, now);
    }

    /// Resets every selection to the cleared defaults: empty categories
    /// and counters, price at full bounds.
    ///
    /// The cleared price window is wider than the initial-load window,
    /// which seeds a mid-range slider position.
    pub fn clear_all(state: &mut SearchState) {
        state.filters.reset_all(&FilterSnapshot::cleared());
    }

    /// Returns the badge count summarizing the current selections.
    pub fn selection_count(state: &SearchState) -> usize {
        selection_count(&state.filters)
    }

    fn decode_snapshot(json: &str) -> Result<FilterSnapshot> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{OverlayPhase, PriceRange, INITIAL_PRICE, PRICE_BOUNDS_MAX};
    use std::collections::HashMap;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_apply_persists_and_closes_panel() {
        let t0 = Instant::now();
        let mut storage = MockStorage::new();
        let mut state = SearchState::new();

        OverlayCoordinator::open(&mut state, FILTERS_OVERLAY, t0);
        state.filters.toggle_token("amenities", "wifi");
        state.filters.adjust_counter("bedrooms", 2);
        state.filters.set_price_min(100);

        FilterCoordinator::apply(&mut state, &mut storage, t0);
        assert_eq!(
            state.overlays.get(FILTERS_OVERLAY).unwrap().phase(),
            OverlayPhase::Closing
        );
        assert!(storage.data.contains_key("saved_filters"));

        // The persisted snapshot restores into an equal selection
        let mut restored = SearchState::new();
        FilterCoordinator::load_saved_filters(Some(&storage), &mut restored);
        assert!(restored.filters.has_token("amenities", "wifi"));
        assert_eq!(restored.filters.counter("bedrooms"), 2);
        assert_eq!(restored.filters.price(), PriceRange { min: 100, max: 750 });
    }

    #[test]
    fn test_load_falls_back_on_invalid_json() {
        let mut storage = MockStorage::new();
        storage.data.insert(
            "saved_filters".to_string(),
            "{not valid json".to_string(),
        );

        let mut state = SearchState::new();
        FilterCoordinator::load_saved_filters(Some(&storage), &mut state);
        assert!(state.filters.categories().is_empty());
        assert_eq!(state.filters.price(), INITIAL_PRICE);
    }

    #[test]
    fn test_load_with_no_storage_keeps_defaults() {
        let mut state = SearchState::new();
        FilterCoordinator::load_saved_filters(None, &mut state);
        assert_eq!(state.filters.price(), INITIAL_PRICE);
    }

    #[test]
    fn test_clear_all_widens_price_to_full_bounds() {
        let mut state = SearchState::new();
        state.filters.toggle_token("safety", "smoke-alarm");
        state.filters.adjust_counter("bedrooms", 3);

        FilterCoordinator::clear_all(&mut state);
        assert!(state.filters.categories().is_empty());
        assert!(state.filters.counters().is_empty());
        assert_eq!(
            state.filters.price(),
            PriceRange { min: 0, max: PRICE_BOUNDS_MAX }
        );
        assert_eq!(FilterCoordinator::selection_count(&state), 0);
    }

    #[test]
    fn test_partial_snapshot_only_touches_present_keys() {
        let mut storage = MockStorage::new();
        storage.data.insert(
            "saved_filters".to_string(),
            r#"{"price":{"min":200,"max":800}}"#.to_string(),
        );

        let mut state = SearchState::new();
        state.filters.toggle_token("amenities", "pool");
        FilterCoordinator::load_saved_filters(Some(&storage), &mut state);

        assert!(state.filters.has_token("amenities", "pool"));
        assert_eq!(state.filters.price(), PriceRange { min: 200, max: 800 });
    }
}
