//! State management modules for the stayfinder search UI core.
//!
//! This module contains state-only logic (no UI concerns):
//! - Overlay state (sessions, phases, pending transitions)
//! - Filter state (category tokens, counters, price range)
//! - Date state (check-in/check-out endpoints, active field)
//! - Highlight state (shared hover token across sibling inputs)

mod overlay;
mod filter_state;
mod date_state;
mod highlight;

pub use overlay::{
    OverlayPhase, OverlayRegistry, OverlaySession, CLOSE_TRANSITION, OPEN_TRANSITION,
};
pub use filter_state::{
    FilterSnapshot, FilterState, PriceRange, INITIAL_PRICE, PRICE_BOUNDS_MAX,
};
pub use date_state::{DateField, DateSelection};
pub use highlight::HighlightState;
