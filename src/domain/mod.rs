//! Domain logic modules for the stayfinder search UI core.
//!
//! This module contains pure derivation logic:
//! - Selection count (tagged per-field counting rules)
//! - Display summaries (stay dates, time of day, house rules)

pub mod selection_count;
pub mod summary;

pub use selection_count::{filter_fields, selection_count, FilterField};
pub use summary::{format_date_summary, format_time_of_day, house_rules_lines};
