/// US English long date with 2-digit 12-hour time: "March 15, 2024 at 02:30 PM"
pub const DISPLAY_FORMAT: &str = "%B %-d, %Y at %I:%M %p";

/// Returned for date input that cannot be parsed
pub const INVALID_DATE: &str = "Invalid Date";

/// Replaces each whitespace run in a status class token
pub const STATUS_SEPARATOR: char = '-';
