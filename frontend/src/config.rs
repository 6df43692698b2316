use log::Level;

/// Avatars are served by a placeholder service keyed on a per-person token.
pub const AVATAR_BASE_URL: &str = "https://i.pravatar.cc/150?u=";

/// Countdown re-arms a one-shot timer this long after every recomputation.
pub const COUNTDOWN_TICK_MS: u32 = 1_000;

/// Testimonial carousel advance period.
pub const CAROUSEL_ROTATE_MS: u32 = 5_000;

/// Time the animated counter takes to ramp from zero to its target.
pub const COUNTER_RAMP_MS: f64 = 2_000.0;

/// Visible fraction at which a section is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Visible fraction at which the animated counter starts ramping.
pub const COUNTER_THRESHOLD: f64 = 0.5;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn avatar_url(token: &str) -> String {
    format!("{}{}", AVATAR_BASE_URL, token)
}
