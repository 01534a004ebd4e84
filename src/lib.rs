pub mod state;
pub mod app;
pub mod domain;

// Export state components
pub use state::{
    DateField, DateSelection, FilterSnapshot, FilterState, HighlightState, OverlayPhase,
    OverlayRegistry, OverlaySession, PriceRange, CLOSE_TRANSITION, INITIAL_PRICE,
    OPEN_TRANSITION, PRICE_BOUNDS_MAX,
};

// Export composed state and coordinators
pub use app::{
    DateCoordinator, FilterCoordinator, OverlayCoordinator, SearchState, SummaryTarget,
    CHECK_IN_OVERLAY, CHECK_OUT_OVERLAY, FILTERS_OVERLAY, SEARCH_BAR_GROUP,
};

// Export derived summaries
pub use domain::{
    filter_fields, format_date_summary, format_time_of_day, house_rules_lines,
    selection_count, FilterField,
};
