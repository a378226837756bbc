pub mod debug;
pub mod locale;
pub mod timezone;

pub use debug::{debug_enabled, set_debug};
pub use locale::DateLocale;
pub use timezone::Timezone;
