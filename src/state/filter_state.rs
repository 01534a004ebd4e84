//! Filter selection state management.
//!
//! This module encapsulates the multi-category filter selections behind
//! the facilities/price panel: token sets per category, named counters,
//! and the bounded nightly price range, together with the snapshot shape
//! used for persistence.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Upper bound of the nightly price slider.
pub const PRICE_BOUNDS_MAX: u32 = 1000;

/// Price window seeded on first load, before any saved filters apply.
///
/// Deliberately narrower than the full bounds so the slider starts
/// mid-range; "Clear all" widens back to the full bounds instead.
pub const INITIAL_PRICE: PriceRange = PriceRange { min: 50, max: 750 };

/// A min/max nightly price window.
///
/// Invariant: `0 <= min < max <= PRICE_BOUNDS_MAX`, maintained by the
/// guarded setters on [`FilterState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

impl PriceRange {
    /// Returns the full-bounds window (no price constraint).
    pub fn full_bounds() -> Self {
        Self { min: 0, max: PRICE_BOUNDS_MAX }
    }

    /// Returns true if this window differs from the full bounds.
    pub fn is_constrained(&self, bounds_max: u32) -> bool {
        self.min > 0 || self.max < bounds_max
    }
}

/// Serializable partial filter state for the host's persistence slot.
///
/// Each key is optional; a present key replaces the corresponding field
/// wholesale when merged (shallow overwrite, never a deep union).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSnapshot {
    pub categories: Option<BTreeMap<String, BTreeSet<String>>>,
    pub counters: Option<BTreeMap<String, u32>>,
    pub price: Option<PriceRange>,
}

impl FilterSnapshot {
    /// The "Clear all" defaults: nothing selected, price at full bounds.
    pub fn cleared() -> Self {
        Self {
            categories: Some(BTreeMap::new()),
            counters: Some(BTreeMap::new()),
            price: Some(PriceRange::full_bounds()),
        }
    }
}

/// State of the current filter selections.
///
/// Responsibilities:
/// - Tracking token membership per category ("amenities", "safety", ...)
/// - Tracking non-negative counters ("bedrooms")
/// - Enforcing the price range invariant on every edit
/// - Backing the two price number inputs with text buffers
///
/// Every operation is total: an edit that would break an invariant is
/// silently dropped and the state keeps its last valid value.
#[derive(Debug, Clone)]
pub struct FilterState {
    /// Selected tokens per category
    categories: BTreeMap<String, BTreeSet<String>>,
    /// Named counters, clamped at zero
    counters: BTreeMap<String, u32>,
    /// Current price window
    price: PriceRange,
    /// Slider upper bound for this search context
    bounds_max: u32,
    /// Text buffer for the minimum price input
    price_min_text: String,
    /// Text buffer for the maximum price input
    price_max_text: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::initial()
    }
}

impl FilterState {
    /// Creates the initial-load state: nothing selected, seeded price window.
    pub fn initial() -> Self {
        Self::with_price(INITIAL_PRICE)
    }

    /// Creates the cleared state: nothing selected, price at full bounds.
    pub fn cleared() -> Self {
        Self::with_price(PriceRange::full_bounds())
    }

    fn with_price(price: PriceRange) -> Self {
        Self {
            categories: BTreeMap::new(),
            counters: BTreeMap::new(),
            price,
            bounds_max: PRICE_BOUNDS_MAX,
            price_min_text: price.min.to_string(),
            price_max_text: price.max.to_string(),
        }
    }

    // ===== Selection Queries =====

    /// Returns the token sets per category.
    pub fn categories(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.categories
    }

    /// Returns true if the token is selected in the category.
    pub fn has_token(&self, category: &str, token: &str) -> bool {
        self.categories
            .get(category)
            .is_some_and(|tokens| tokens.contains(token))
    }

    /// Returns the named counters.
    pub fn counters(&self) -> &BTreeMap<String, u32> {
        &self.counters
    }

    /// Returns a counter value, zero if never touched.
    pub fn counter(&self, name: &str) -> u32 {
        self.counters.get(name).copied().unwrap_or(0)
    }

    /// Returns the current price window.
    pub fn price(&self) -> PriceRange {
        self.price
    }

    /// Returns the slider upper bound.
    pub fn bounds_max(&self) -> u32 {
        self.bounds_max
    }

    // ===== Selection Mutations =====

    /// Toggles one token's membership in a category.
    ///
    /// Applying the same toggle twice restores the original set. The
    /// category's set is created on first use.
    pub fn toggle_token(&mut self, category: &str, token: &str) {
        let tokens = self.categories.entry(category.to_string()).or_default();
        if !tokens.remove(token) {
            tokens.insert(token.to_string());
        }
    }

    /// Adjusts a counter by a signed delta, clamping at zero.
    pub fn adjust_counter(&mut self, name: &str, delta: i32) {
        let current = self.counter(name) as i64;
        let next = (current + i64::from(delta)).max(0) as u32;
        self.counters.insert(name.to_string(), next);
    }

    /// Sets the minimum price if the window stays valid.
    ///
    /// Rejected silently when the new minimum would reach or pass the
    /// current maximum.
    pub fn set_price_min(&mut self, value: u32) {
        if value < self.price.max {
            self.price.min = value;
        }
        self.sync_price_text();
    }

    /// Sets the maximum price if the window stays valid.
    ///
    /// Rejected silently when the new maximum would reach or fall below
    /// the current minimum, or exceed the slider bounds.
    pub fn set_price_max(&mut self, value: u32) {
        if value > self.price.min && value <= self.bounds_max {
            self.price.max = value;
        }
        self.sync_price_text();
    }

    /// Replaces the entire state from a defaults snapshot.
    ///
    /// Keys absent from the snapshot fall back to empty selections and
    /// the full price bounds.
    pub fn reset_all(&mut self, defaults: &FilterSnapshot) {
        self.categories = defaults.categories.clone().unwrap_or_default();
        self.counters = defaults.counters.clone().unwrap_or_default();
        self.price = defaults.price.unwrap_or_else(PriceRange::full_bounds);
        self.sync_price_text();
    }

    /// Merges a partial snapshot into the current state.
    ///
    /// Shallow per-key overwrite: a present key replaces the whole field,
    /// an absent key leaves the current value alone. Used once at
    /// initialization to restore previously applied filters.
    pub fn load_snapshot(&mut self, snapshot: FilterSnapshot) {
        if let Some(categories) = snapshot.categories {
            self.categories = categories;
        }
        if let Some(counters) = snapshot.counters {
            self.counters = counters;
        }
        if let Some(price) = snapshot.price {
            self.price = price;
        }
        self.sync_price_text();
    }

    /// Captures the complete current state as a snapshot.
    pub fn snapshot(&self) -> FilterSnapshot {
        FilterSnapshot {
            categories: Some(self.categories.clone()),
            counters: Some(self.counters.clone()),
            price: Some(self.price),
        }
    }

    // ===== Price Input Text Buffers =====
    // The number inputs edit these buffers directly; commits parse them
    // with the same silent-reject policy as the slider setters.

    /// Returns a mutable reference to the minimum price text buffer.
    pub fn price_min_text_mut(&mut self) -> &mut String {
        &mut self.price_min_text
    }

    /// Returns a mutable reference to the maximum price text buffer.
    pub fn price_max_text_mut(&mut self) -> &mut String {
        &mut self.price_max_text
    }

    /// Commits the minimum price text buffer.
    ///
    /// Non-numeric input is dropped and the buffer resyncs to the last
    /// good value.
    pub fn commit_price_min_text(&mut self) {
        if let Ok(value) = self.price_min_text.trim().parse::<u32>() {
            self.set_price_min(value);
        } else {
            self.sync_price_text();
        }
    }

    /// Commits the maximum price text buffer.
    pub fn commit_price_max_text(&mut self) {
        if let Ok(value) = self.price_max_text.trim().parse::<u32>() {
            self.set_price_max(value);
        } else {
            self.sync_price_text();
        }
    }

    fn sync_price_text(&mut self) {
        self.price_min_text = self.price.min.to_string();
        self.price_max_text = self.price.max.to_string();
    }
}
