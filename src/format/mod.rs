//! Presentation helpers
//!
//! Both formatters are pure: they never fail and never touch global state
//! beyond the optional debug log.

pub mod date;
pub mod status;

pub use date::{DateFormatOptions, format_date, format_date_default, format_datetime};
pub use status::{StatusClassOptions, status_class, status_class_with};
