use log::Level;

pub const CONTACT_EMAIL: &str = "hello@northwind.studio";
pub const TELEGRAM_HANDLE: &str = "northwind_studio";

// localStorage key for the chosen interface language
pub const LANG_STORAGE_KEY: &str = "northwind.lang";

// Height of the fixed top nav, subtracted when jumping to #anchors
pub const HEADER_OFFSET_PX: f64 = 72.0;

/// Page progress through the laptop section after which the overlay takes over.
pub const TAKEOVER_THRESHOLD: f64 = 0.80;

/// Width of the "typing..." band that precedes each chat beat, in progress units.
pub const TYPING_LEAD_IN: f64 = 0.04;

// How long the "draft opened" notice stays before the modal closes
pub const LEAD_NOTICE_MS: u32 = 2_500;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
