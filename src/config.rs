pub const BRAND: &str = "NextVolve";
pub const CONTACT_EMAIL: &str = "hello@nextvolve.com";

/// Navbar switches to its solid "scrolled" look past this many pixels.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

/// Focusable descendants considered by the dialog focus trap. Hidden or
/// disabled controls matching this are intentionally not filtered out.
pub const FOCUSABLE_SELECTOR: &str =
    "button, [href], input, select, textarea, [tabindex]:not([tabindex=\"-1\"])";

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const COUNTER_THRESHOLD: f64 = 0.5;
pub const COUNTER_DURATION_MS: u32 = 2000;
pub const COUNTER_STEP_MS: u32 = 16;

/// The submit button reads "Sending..." for this long after a submission.
pub const SENDING_REVERT_MS: u32 = 2000;

pub const TYPEWRITER_SPEED_MS: u32 = 100;

/// Initial body fade-in delay on load.
pub const PAGE_FADE_IN_MS: u32 = 100;
