//! Date selection coordination.
//!
//! Routes interactions between the stay-date summary display, the
//! calendar overlay, and the date selection state. The summary's dismiss
//! affordance is the delicate case: it must clear the selection without
//! the same press also opening the overlay.

use crate::app::{OverlayCoordinator, SearchState, CHECK_IN_OVERLAY};
use crate::state::DateField;
use std::time::Instant;

/// Where a pointer press landed on the stay-date summary display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryTarget {
    /// The summary text itself
    Body,
    /// The small clear ("x") affordance next to the text
    ClearAffordance,
}

/// Coordinates the date selection workflows.
///
/// This struct is responsible for:
/// - Activating the endpoint the next calendar pick writes to
/// - Recording endpoint values reported by the calendar widget
/// - Routing summary presses (open vs clear-and-consume)
pub struct DateCoordinator;

impl DateCoordinator {
    /// Activates an endpoint field without touching stored dates.
    pub fn select_field(state: &mut SearchState, field: DateField) {
        state.dates.select_field(field);
    }

    /// Records the value the calendar widget reports for an endpoint.
    pub fn record_endpoint(state: &mut SearchState, field: DateField, value: Option<String>) {
        state.dates.set_endpoint(field, value);
    }

    /// Routes a pointer press on the stay-date summary display.
    ///
    /// A press on the body opens the date overlay, activating check-in if
    /// no endpoint is active yet. A press on the clear affordance clears
    /// both endpoints and consumes the press right here; it is never
    /// forwarded to the overlay-open handling above.
    pub fn handle_summary_press(state: &mut SearchState, target: SummaryTarget, now: Instant) {
        match target {
            SummaryTarget::Body => {
                if state.dates.active_field() == DateField::None {
                    state.dates.select_field(DateField::CheckIn);
                }
                OverlayCoordinator::open(state, CHECK_IN_OVERLAY, now);
            }
            SummaryTarget::ClearAffordance => {
                state.dates.clear_both_endpoints();
                log::debug!("stay dates cleared from summary");
            }
        }
    }
}
