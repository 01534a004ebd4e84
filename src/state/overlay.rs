//! Overlay session and phase state management.
//!
//! This module encapsulates the open/close lifecycle of transient UI
//! surfaces (the date picker, the filters panel), including the timed
//! transition phases and the pending-transition handle that makes timer
//! cancellation explicit.

use std::time::{Duration, Instant};

/// Delay between an open request and the overlay reaching `Open`.
pub const OPEN_TRANSITION: Duration = Duration::from_millis(50);

/// Delay between a close request and the overlay reaching `Closed`.
pub const CLOSE_TRANSITION: Duration = Duration::from_millis(200);

/// Visual lifecycle phase of an overlay.
///
/// `Closed` means the overlay is unmounted; `Open` means it is fully
/// visible. `Opening` and `Closing` only exist to drive enter/exit
/// transition visuals and settle on their own via the session's timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayPhase {
    Closed,
    Opening,
    Open,
    Closing,
}

/// A scheduled phase advancement waiting for its deadline.
///
/// Stored directly on the session so that replacing or dropping it is the
/// cancellation: a stale timer cannot outlive the edge that superseded it.
#[derive(Debug, Clone, Copy)]
struct PendingTransition {
    target: OverlayPhase,
    deadline: Instant,
}

/// State of a single overlay instance.
///
/// Responsibilities:
/// - Tracking requested-open intent and the derived phase
/// - Owning the pending transition handle (one timer at most)
/// - Enforcing the one-time (cannot reopen) rule
/// - Holding the dismiss region for outside-pointer close
#[derive(Debug, Clone)]
pub struct OverlaySession {
    /// Identifier of the overlay content ("checkIn", "filters", ...)
    id: String,
    /// Exclusive group this session belongs to
    group: String,
    /// Open intent as last set by the caller
    requested_open: bool,
    /// Derived visual phase, advanced only by edges and timer expiry
    phase: OverlayPhase,
    /// Whether the session becomes unusable after its first close
    one_time: bool,
    /// Set on the first close edge of a one-time session
    used_up: bool,
    /// At most one scheduled transition; replaced on every edge
    pending: Option<PendingTransition>,
    /// Pointer presses outside this region close the session
    dismiss_region: Option<egui::Rect>,
}

impl OverlaySession {
    /// Creates a closed session in the given exclusive group.
    pub fn new(id: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            group: group.into(),
            requested_open: false,
            phase: OverlayPhase::Closed,
            one_time: false,
            used_up: false,
            pending: None,
            dismiss_region: None,
        }
    }

    /// Marks the session as one-time: once closed it can never reopen.
    pub fn one_time(mut self) -> Self {
        self.one_time = true;
        self
    }

    // ===== Phase Queries =====

    /// Returns the session identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the exclusive group identifier.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Returns the current visual phase.
    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    /// Returns true while the overlay should be mounted at all.
    pub fn is_mounted(&self) -> bool {
        self.phase != OverlayPhase::Closed
    }

    /// Returns true once the overlay has settled fully visible.
    pub fn is_fully_visible(&self) -> bool {
        self.phase == OverlayPhase::Open
    }

    /// Returns the caller's current open intent.
    pub fn is_requested_open(&self) -> bool {
        self.requested_open
    }

    /// Returns false once a one-time session has been closed; open
    /// requests against it are silent no-ops.
    pub fn can_reopen(&self) -> bool {
        !(self.one_time && self.used_up)
    }

    /// Returns the deadline of the pending transition, if any.
    pub fn pending_deadline(&self) -> Option<Instant> {
        self.pending.map(|p| p.deadline)
    }

    /// Returns the registered dismiss region, if any.
    pub fn dismiss_region(&self) -> Option<egui::Rect> {
        self.dismiss_region
    }

    // ===== Edge Handling =====
    // Edges are pub(crate): callers go through OverlayCoordinator, which
    // also enforces group exclusivity across sessions.

    /// Applies an open-request edge.
    ///
    /// No-op if the intent is already open, or if the session is one-time
    /// and has been closed before. Any pending transition is replaced.
    pub(crate) fn request_open(&mut self, now: Instant) {
        if self.one_time && self.used_up {
            return;
        }
        if self.requested_open {
            return;
        }
        self.requested_open = true;
        self.phase = OverlayPhase::Opening;
        self.pending = Some(PendingTransition {
            target: OverlayPhase::Open,
            deadline: now + OPEN_TRANSITION,
        });
    }

    /// Applies a close-request edge.
    ///
    /// No-op if the intent is already closed. Any pending transition is
    /// replaced.
    pub(crate) fn request_close(&mut self, now: Instant) {
        if !self.requested_open {
            return;
        }
        self.requested_open = false;
        if self.one_time {
            self.used_up = true;
        }
        self.phase = OverlayPhase::Closing;
        self.pending = Some(PendingTransition {
            target: OverlayPhase::Closed,
            deadline: now + CLOSE_TRANSITION,
        });
    }

    /// Registers (or clears) the region that keeps pointer presses from
    /// dismissing the overlay.
    pub fn set_dismiss_region(&mut self, region: Option<egui::Rect>) {
        self.dismiss_region = region;
    }

    /// Advances the pending transition if its deadline has passed.
    ///
    /// The transition only lands if the request direction still matches
    /// its target. Returns true if the phase changed.
    pub(crate) fn tick(&mut self, now: Instant) -> bool {
        let Some(pending) = self.pending else {
            return false;
        };
        if now < pending.deadline {
            return false;
        }
        self.pending = None;
        let still_wanted = match pending.target {
            OverlayPhase::Open => self.requested_open,
            OverlayPhase::Closed => !self.requested_open,
            OverlayPhase::Opening | OverlayPhase::Closing => false,
        };
        if still_wanted {
            self.phase = pending.target;
            true
        } else {
            false
        }
    }
}

/// Holds every overlay session of a search context.
///
/// Sessions register when their owning UI mounts and are removed on
/// unmount; removal drops the session's pending transition, so an
/// unmounted overlay can never receive a stale phase advancement.
#[derive(Debug, Clone, Default)]
pub struct OverlayRegistry {
    sessions: Vec<OverlaySession>,
}

impl OverlayRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self { sessions: Vec::new() }
    }

    /// Registers a session, replacing any existing session with the same id.
    pub fn register(&mut self, session: OverlaySession) {
        self.sessions.retain(|s| s.id != session.id);
        self.sessions.push(session);
    }

    /// Removes a session, cancelling its pending transition with it.
    pub fn remove(&mut self, id: &str) -> Option<OverlaySession> {
        let index = self.sessions.iter().position(|s| s.id == id)?;
        Some(self.sessions.remove(index))
    }

    // ===== Session Queries =====

    /// Returns the session with the given id, if registered.
    pub fn get(&self, id: &str) -> Option<&OverlaySession> {
        self.sessions.iter().find(|s| s.id == id)
    }

    /// Returns the session with the given id mutably.
    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut OverlaySession> {
        self.sessions.iter_mut().find(|s| s.id == id)
    }

    /// Iterates all registered sessions.
    pub fn sessions(&self) -> impl Iterator<Item = &OverlaySession> {
        self.sessions.iter()
    }

    /// Iterates all registered sessions mutably.
    pub(crate) fn sessions_mut(&mut self) -> impl Iterator<Item = &mut OverlaySession> {
        self.sessions.iter_mut()
    }

    /// Returns the earliest pending deadline across all sessions.
    ///
    /// Hosts use this to schedule the next repaint instead of polling.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.sessions.iter().filter_map(|s| s.pending_deadline()).min()
    }
}
