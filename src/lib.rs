//! formatutils
//!
//! Date and status-label formatting for presentation layers, plus the
//! configuration pieces the `formatutils` binary builds on.

pub mod app;
pub mod cli;
pub mod config;
pub mod consts;
pub mod error;
pub mod format;
pub mod utils;

pub use consts::INVALID_DATE;
pub use error::AppError;
pub use format::{
    DateFormatOptions, StatusClassOptions, format_date, format_date_default, format_datetime,
    status_class, status_class_with,
};
pub use utils::{DateLocale, Timezone};
