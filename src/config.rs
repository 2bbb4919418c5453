//! Tuning constants shared by the page behaviors.

/// Scroll offset past which the navbar switches to its compact style.
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Clearance left above anchor targets for the fixed navbar.
pub const ANCHOR_HEADER_OFFSET_PX: f64 = 80.0;

/// Visible fraction at which a `.reveal` element is shown.
pub const REVEAL_VISIBLE_RATIO: f64 = 0.2;

/// Visible fraction at which a counter starts animating.
pub const COUNTER_VISIBLE_RATIO: f64 = 0.6;

/// Frames a counter takes to reach its target, lower bound on step size.
pub const COUNTER_FRAME_BUDGET: u64 = 60;

/// Per-event smoothing factor for the trailing cursor ring.
pub const RING_EASE_FACTOR: f64 = 0.2;

pub const THEME_STORAGE_KEY: &str = "kpiTheme";

pub const HERO_WORD_INTERVAL_MS: u32 = 2400;

pub fn past_nav_threshold(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLL_THRESHOLD_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_threshold_is_exclusive_at_20px() {
        assert!(!past_nav_threshold(0.0));
        assert!(!past_nav_threshold(20.0));
        assert!(past_nav_threshold(20.5));
        assert!(past_nav_threshold(800.0));
    }
}
