//! Date range selection state management.
//!
//! This module encapsulates the check-in/check-out endpoint pair and which
//! endpoint the next calendar pick writes to. The calendar widget owns the
//! actual date math and ordering validation; this state only records the
//! display values it reports.

/// Which date endpoint the next calendar pick targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateField {
    #[default]
    None,
    CheckIn,
    CheckOut,
}

/// State of the stay date selection.
///
/// Responsibilities:
/// - Tracking the two optional endpoint display values
/// - Tracking the active endpoint field
/// - Clearing both endpoints from the summary dismiss affordance
#[derive(Debug, Clone, Default)]
pub struct DateSelection {
    /// Check-in display value as reported by the calendar widget
    check_in: Option<String>,
    /// Check-out display value as reported by the calendar widget
    check_out: Option<String>,
    /// Endpoint the next calendar pick writes to
    active_field: DateField,
}

impl DateSelection {
    /// Creates an empty selection with no active field.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Selection Queries =====

    /// Returns the check-in display value, if set.
    pub fn check_in(&self) -> Option<&str> {
        self.check_in.as_deref()
    }

    /// Returns the check-out display value, if set.
    pub fn check_out(&self) -> Option<&str> {
        self.check_out.as_deref()
    }

    /// Returns the currently active endpoint field.
    pub fn active_field(&self) -> DateField {
        self.active_field
    }

    /// Returns true if either endpoint is set.
    pub fn has_any(&self) -> bool {
        self.check_in.is_some() || self.check_out.is_some()
    }

    // ===== Selection Mutations =====

    /// Sets the active endpoint field without touching stored dates.
    pub fn select_field(&mut self, field: DateField) {
        self.active_field = field;
    }

    /// Records the value the calendar widget reports for an endpoint.
    ///
    /// `DateField::None` is ignored; the widget always targets a concrete
    /// endpoint.
    pub fn set_endpoint(&mut self, field: DateField, value: Option<String>) {
        match field {
            DateField::CheckIn => self.check_in = value,
            DateField::CheckOut => self.check_out = value,
            DateField::None => {}
        }
    }

    /// Unsets both endpoints and deactivates the field.
    pub fn clear_both_endpoints(&mut self) {
        self.check_in = None;
        self.check_out = None;
        self.active_field = DateField::None;
    }
}
