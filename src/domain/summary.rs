//! Display summaries for the stay dates and house rules.
//!
//! Pure formatting over values other collaborators own: the calendar
//! widget supplies endpoint display strings, the routing layer supplies
//! the flexible-search context flag, and the listing record may or may
//! not carry house-rule fields.

use once_cell::sync::Lazy;

/// Default check-in time when the listing carries none.
const DEFAULT_CHECK_IN_AFTER: &str = "15:00";

/// Default check-out time when the listing carries none.
const DEFAULT_CHECK_OUT_BEFORE: &str = "11:00";

static DEFAULT_RULES: Lazy<Vec<String>> = Lazy::new(|| {
    vec![
        "No smoking".to_string(),
        "No pets".to_string(),
        "No parties or events".to_string(),
    ]
});

/// Formats the stay-date summary shown in the search bar.
///
/// Both endpoints set gives the full range, a single endpoint shows
/// alone, and an empty selection shows a placeholder that depends only on
/// the caller's context flag (flexible search vs standard search).
pub fn format_date_summary(
    check_in: Option<&str>,
    check_out: Option<&str>,
    flexible_context: bool,
) -> String {
    match (check_in, check_out) {
        (Some(check_in), Some(check_out)) => format!("{} - {}", check_in, check_out),
        (Some(check_in), None) => check_in.to_string(),
        (None, Some(check_out)) => check_out.to_string(),
        (None, None) => {
            if flexible_context {
                "Any Week".to_string()
            } else {
                "Add dates".to_string()
            }
        }
    }
}

/// Formats a 24-hour `"HH:MM"` string as a 12-hour display time.
///
/// Anything that does not parse as a valid time comes back unchanged;
/// the caller shows the raw value rather than failing.
pub fn format_time_of_day(raw: &str) -> String {
    to_twelve_hour(raw).unwrap_or_else(|| raw.to_string())
}

fn to_twelve_hour(raw: &str) -> Option<String> {
    let (hour, minute) = raw.split_once(':')?;
    if minute.len() != 2 {
        return None;
    }
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    let meridiem = if hour < 12 { "AM" } else { "PM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    Some(format!("{}:{:02} {}", display_hour, minute, meridiem))
}

/// Builds the house-rules lines for a listing.
///
/// The two time lines always lead, formatted for display; absent listing
/// fields fall back to the built-in defaults, and an absent or empty
/// custom rule list falls back to the default rules.
pub fn house_rules_lines(
    check_in_after: Option<&str>,
    check_out_before: Option<&str>,
    custom_rules: Option<&[String]>,
) -> Vec<String> {
    let check_in = check_in_after.unwrap_or(DEFAULT_CHECK_IN_AFTER);
    let check_out = check_out_before.unwrap_or(DEFAULT_CHECK_OUT_BEFORE);

    let mut lines = vec![
        format!("Check-in after {}", format_time_of_day(check_in)),
        format!("Check-out before {}", format_time_of_day(check_out)),
    ];
    match custom_rules {
        Some(rules) if !rules.is_empty() => lines.extend(rules.iter().cloned()),
        _ => lines.extend(DEFAULT_RULES.iter().cloned()),
    }
    lines
}
