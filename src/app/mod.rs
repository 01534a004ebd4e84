//! Application-level modules for the stayfinder search UI core.
//!
//! This module contains the composed search state and the coordinators
//! that run workflows across state components.

mod app_state;
mod overlay_coordinator;
mod filter_coordinator;
mod date_coordinator;

pub use app_state::{
    SearchState, CHECK_IN_OVERLAY, CHECK_OUT_OVERLAY, FILTERS_OVERLAY, SEARCH_BAR_GROUP,
};
pub use overlay_coordinator::OverlayCoordinator;
pub use filter_coordinator::FilterCoordinator;
pub use date_coordinator::{DateCoordinator, SummaryTarget};
