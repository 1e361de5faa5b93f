//! Formatting utilities used for CLI and export outputs.

/// Human description of the distance to a check-in date.
///
/// Examples: `today`, `in 1 day`, `in 12 days`, `3 days overdue`.
pub fn describe_due(days_until: i64) -> String {
    match days_until {
        0 => "today".to_string(),
        1 => "in 1 day".to_string(),
        -1 => "1 day overdue".to_string(),
        d if d > 0 => format!("in {} days", d),
        d => format!("{} days overdue", -d),
    }
}

/// Checkbox cell for the check-in list.
pub fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}
