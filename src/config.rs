use log::Level;

/// Vertical offset (px) past which the nav bar switches to its compact style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Number of decorative stars behind the hero banner.
pub const STAR_COUNT: usize = 80;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
