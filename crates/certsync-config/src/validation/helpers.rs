//! Shared validation helpers.

/// Push an error if `value` is outside `[min, max]` (unsigned).
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is outside `[min, max]` (signed).
pub(crate) fn validate_range_i64(
    errors: &mut Vec<String>,
    name: &str,
    value: i64,
    min: i64,
    max: i64,
) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if a required string is blank.
pub(crate) fn require_non_empty(errors: &mut Vec<String>, name: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{name} is empty"));
    }
}
