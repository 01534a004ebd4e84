//! Centralized state for the search UI core.
//!
//! This module composes the focused state components into the single
//! state value the presentation layer drives. Each component keeps its
//! invariants local; cross-component workflows live in the coordinators.

use crate::state::{
    DateSelection, FilterState, HighlightState, OverlayRegistry, OverlaySession,
};

/// Overlay id of the check-in date picker.
pub const CHECK_IN_OVERLAY: &str = "checkIn";

/// Overlay id of the check-out date picker.
pub const CHECK_OUT_OVERLAY: &str = "checkOut";

/// Overlay id of the facilities/price filter panel.
pub const FILTERS_OVERLAY: &str = "filters";

/// Exclusive group shared by every search-bar overlay.
pub const SEARCH_BAR_GROUP: &str = "searchBar";

/// Main search UI state composed of focused state components.
///
/// Each component has private fields behind intent-revealing methods;
/// mutations that span components go through the coordinators.
#[derive(Debug, Clone)]
pub struct SearchState {
    /// Overlay sessions and their transition phases
    pub overlays: OverlayRegistry,

    /// Current filter selections
    pub filters: FilterState,

    /// Current stay date selection
    pub dates: DateSelection,

    /// Hover highlight shared across sibling inputs
    pub highlight: HighlightState,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchState {
    /// Creates the search state with the standard search-bar overlays
    /// registered and initial-load filter defaults.
    pub fn new() -> Self {
        let mut overlays = OverlayRegistry::new();
        overlays.register(OverlaySession::new(CHECK_IN_OVERLAY, SEARCH_BAR_GROUP));
        overlays.register(OverlaySession::new(CHECK_OUT_OVERLAY, SEARCH_BAR_GROUP));
        overlays.register(OverlaySession::new(FILTERS_OVERLAY, SEARCH_BAR_GROUP));

        Self {
            overlays,
            filters: FilterState::initial(),
            dates: DateSelection::new(),
            highlight: HighlightState::new(),
        }
    }

    /// Creates the search state and restores previously applied filters
    /// from the host's storage slot.
    pub fn from_storage(storage: Option<&dyn eframe::Storage>) -> Self {
        let mut state = Self::new();
        crate::app::FilterCoordinator::load_saved_filters(storage, &mut state);
        state
    }
}
