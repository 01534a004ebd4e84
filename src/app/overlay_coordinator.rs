//! Overlay coordination and workflow management.
//!
//! Handles the cross-session rules the individual overlay sessions cannot
//! see: group exclusivity on open, outside-pointer dismissal, per-frame
//! timer advancement, and the shared hover-highlight broadcast.

use crate::app::SearchState;
use crate::state::OverlayPhase;
use std::time::Instant;

/// Coordinates overlay sessions across a search context.
///
/// This struct is responsible for:
/// - Enforcing at most one open overlay per exclusive group
/// - Routing outside-pointer presses into close requests
/// - Advancing pending transitions each frame
/// - Broadcasting the hover highlight to sibling inputs
pub struct OverlayCoordinator;

impl OverlayCoordinator {
    /// Requests an overlay open, closing any sibling in its group.
    ///
    /// A one-time session that was closed before ignores the request; in
    /// that case siblings are left untouched as well.
    pub fn open(state: &mut SearchState, id: &str, now: Instant) {
        let Some(target) = state.overlays.get(id) else {
            return;
        };
        if !target.can_reopen() {
            return;
        }
        let group = target.group().to_string();

        for session in state.overlays.sessions_mut() {
            if session.group() == group && session.id() != id {
                session.request_close(now);
            }
        }
        if let Some(session) = state.overlays.get_mut(id) {
            session.request_open(now);
            log::debug!("overlay '{}' requested open", id);
        }
    }

    /// Requests an overlay closed.
    pub fn close(state: &mut SearchState, id: &str, now: Instant) {
        if let Some(session) = state.overlays.get_mut(id) {
            let was_open = session.is_requested_open();
            session.request_close(now);
            if was_open {
                log::debug!("overlay '{}' requested close", id);
            }
        }
    }

    /// Registers the region that shields an overlay from outside-pointer
    /// dismissal. Pass `None` to stop dismissing on outside interaction.
    pub fn set_dismiss_region(state: &mut SearchState, id: &str, region: Option<egui::Rect>) {
        if let Some(session) = state.overlays.get_mut(id) {
            session.set_dismiss_region(region);
        }
    }

    /// Routes a pointer press to every overlay with a dismiss region.
    ///
    /// A press outside the region while the session is `Opening` or `Open`
    /// closes it; presses inside the region are left for the overlay's own
    /// widgets.
    pub fn handle_pointer_press(state: &mut SearchState, pos: egui::Pos2, now: Instant) {
        for session in state.overlays.sessions_mut() {
            let engaged = matches!(
                session.phase(),
                OverlayPhase::Opening | OverlayPhase::Open
            );
            if !engaged {
                continue;
            }
            if let Some(region) = session.dismiss_region() {
                if !region.contains(pos) {
                    session.request_close(now);
                }
            }
        }
    }

    /// Advances every pending transition whose deadline has passed.
    ///
    /// Called once per frame with the current instant. Returns true if any
    /// phase changed, so the host knows to repaint.
    pub fn tick(state: &mut SearchState, now: Instant) -> bool {
        let mut changed = false;
        for session in state.overlays.sessions_mut() {
            if session.tick(now) {
                log::debug!("overlay '{}' settled {:?}", session.id(), session.phase());
                changed = true;
            }
        }
        changed
    }

    /// Returns the earliest pending transition deadline, for repaint
    /// scheduling.
    pub fn next_repaint_deadline(state: &SearchState) -> Option<Instant> {
        state.overlays.next_deadline()
    }

    /// Overwrites the shared hover-highlight value. Last caller wins.
    pub fn set_highlight(state: &mut SearchState, token: Option<&str>) {
        state.highlight.set(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{CHECK_IN_OVERLAY, FILTERS_OVERLAY, SEARCH_BAR_GROUP};
    use crate::state::{OverlaySession, CLOSE_TRANSITION, OPEN_TRANSITION};
    use std::time::Duration;

    fn phase(state: &SearchState, id: &str) -> OverlayPhase {
        state.overlays.get(id).unwrap().phase()
    }

    #[test]
    fn test_open_is_exclusive_within_group() {
        let t0 = Instant::now();
        let mut state = SearchState::new();

        OverlayCoordinator::open(&mut state, FILTERS_OVERLAY, t0);
        OverlayCoordinator::tick(&mut state, t0 + OPEN_TRANSITION);
        assert_eq!(phase(&state, FILTERS_OVERLAY), OverlayPhase::Open);

        // Opening the date picker forces the filters panel into Closing
        let t1 = t0 + Duration::from_millis(500);
        OverlayCoordinator::open(&mut state, CHECK_IN_OVERLAY, t1);
        assert_eq!(phase(&state, FILTERS_OVERLAY), OverlayPhase::Closing);
        assert_eq!(phase(&state, CHECK_IN_OVERLAY), OverlayPhase::Opening);

        // The open transition settles before the close transition
        OverlayCoordinator::tick(&mut state, t1 + OPEN_TRANSITION);
        assert_eq!(phase(&state, CHECK_IN_OVERLAY), OverlayPhase::Open);
        assert_eq!(phase(&state, FILTERS_OVERLAY), OverlayPhase::Closing);

        OverlayCoordinator::tick(&mut state, t1 + CLOSE_TRANSITION);
        assert_eq!(phase(&state, FILTERS_OVERLAY), OverlayPhase::Closed);
    }

    #[test]
    fn test_open_never_settles_before_its_timer() {
        let t0 = Instant::now();
        let mut state = SearchState::new();

        OverlayCoordinator::open(&mut state, CHECK_IN_OVERLAY, t0);
        assert_eq!(phase(&state, CHECK_IN_OVERLAY), OverlayPhase::Opening);
        assert!(!OverlayCoordinator::tick(&mut state, t0));
        assert_eq!(phase(&state, CHECK_IN_OVERLAY), OverlayPhase::Opening);
    }

    #[test]
    fn test_outside_press_dismisses_engaged_overlay() {
        let t0 = Instant::now();
        let mut state = SearchState::new();
        let region = egui::Rect::from_min_max(
            egui::pos2(100.0, 100.0),
            egui::pos2(400.0, 300.0),
        );

        OverlayCoordinator::open(&mut state, FILTERS_OVERLAY, t0);
        OverlayCoordinator::set_dismiss_region(&mut state, FILTERS_OVERLAY, Some(region));
        OverlayCoordinator::tick(&mut state, t0 + OPEN_TRANSITION);

        // Press inside the region: nothing happens
        OverlayCoordinator::handle_pointer_press(&mut state, egui::pos2(200.0, 200.0), t0);
        assert_eq!(phase(&state, FILTERS_OVERLAY), OverlayPhase::Open);

        // Press outside: close requested
        OverlayCoordinator::handle_pointer_press(&mut state, egui::pos2(10.0, 10.0), t0);
        assert_eq!(phase(&state, FILTERS_OVERLAY), OverlayPhase::Closing);
    }

    #[test]
    fn test_outside_press_ignores_closed_overlay() {
        let t0 = Instant::now();
        let mut state = SearchState::new();
        let region = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(10.0, 10.0));
        OverlayCoordinator::set_dismiss_region(&mut state, FILTERS_OVERLAY, Some(region));

        OverlayCoordinator::handle_pointer_press(&mut state, egui::pos2(500.0, 500.0), t0);
        assert_eq!(phase(&state, FILTERS_OVERLAY), OverlayPhase::Closed);
        assert!(!state.overlays.get(FILTERS_OVERLAY).unwrap().is_requested_open());
    }

    #[test]
    fn test_highlight_broadcast_last_write_wins() {
        let mut state = SearchState::new();
        OverlayCoordinator::set_highlight(&mut state, Some("when"));
        OverlayCoordinator::set_highlight(&mut state, Some("filters"));
        assert_eq!(state.highlight.current(), Some("filters"));

        OverlayCoordinator::set_highlight(&mut state, None);
        assert_eq!(state.highlight.current(), None);
    }

    #[test]
    fn test_used_up_one_time_open_leaves_siblings_alone() {
        let t0 = Instant::now();
        let mut state = SearchState::new();
        state
            .overlays
            .register(OverlaySession::new("welcomeTip", SEARCH_BAR_GROUP).one_time());

        OverlayCoordinator::open(&mut state, "welcomeTip", t0);
        OverlayCoordinator::close(&mut state, "welcomeTip", t0 + Duration::from_millis(100));

        let t1 = t0 + Duration::from_secs(1);
        OverlayCoordinator::open(&mut state, FILTERS_OVERLAY, t1);
        OverlayCoordinator::tick(&mut state, t1 + OPEN_TRANSITION);
        assert_eq!(phase(&state, FILTERS_OVERLAY), OverlayPhase::Open);

        // The used-up session cannot reopen, and its siblings must not be
        // disturbed by the failed request either
        OverlayCoordinator::open(&mut state, "welcomeTip", t1 + Duration::from_secs(1));
        assert_eq!(phase(&state, FILTERS_OVERLAY), OverlayPhase::Open);
        assert_eq!(phase(&state, "welcomeTip"), OverlayPhase::Closed);
    }

    #[test]
    fn test_open_unknown_overlay_is_a_no_op() {
        let t0 = Instant::now();
        let mut state = SearchState::new();
        OverlayCoordinator::open(&mut state, "doesNotExist", t0);
        assert_eq!(phase(&state, CHECK_IN_OVERLAY), OverlayPhase::Closed);
        assert_eq!(phase(&state, FILTERS_OVERLAY), OverlayPhase::Closed);
    }
}
