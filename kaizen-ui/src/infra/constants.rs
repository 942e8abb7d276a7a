//! Interaction constants
//!
//! Timing, geometry and threshold values shared by the sliders, rails and
//! scroll effects.

/// Wrap-around snap guard.
pub mod snap {
    /// Animation frames to wait, after re-centering a track with transitions
    /// disabled, before transitions are enabled again. Two frames covers the
    /// style commit on the platforms the storefront ships to; slower
    /// compositors may need more.
    pub const GUARD_FRAMES: u8 = 2;
}

/// Site header.
pub mod header {
    /// Page scroll (px) past which the header switches to its scrolled look.
    pub const SCROLLED_AFTER_PX: f32 = 8.0;
    /// Quiet period after the last keystroke before a search is emitted (ms).
    pub const SEARCH_DEBOUNCE_MS: u64 = 250;
    /// Wordmark used when the configured title has no usable text.
    pub const DEFAULT_WORDMARK: &str = "KAIZEN";
}

/// Hero video playlist.
pub mod hero {
    /// Slide duration (ms).
    pub const DURATION_MS: u64 = 520;
    /// Track offset (percent of the container) at rest, showing the middle
    /// slot.
    pub const REST_OFFSET_PCT: f32 = -100.0;
    /// Track offset while sliding to the next clip.
    pub const NEXT_OFFSET_PCT: f32 = -200.0;
    /// Track offset while sliding to the previous clip.
    pub const PREV_OFFSET_PCT: f32 = 0.0;
    /// Brand backdrop moves at this fraction of the track offset.
    pub const BRAND_PARALLAX_FACTOR: f32 = 0.5;
}

/// Featured collection pager.
pub mod collection {
    /// Container width (px) at which three cards fit.
    pub const WIDE_MIN_WIDTH: f32 = 1200.0;
    /// Container width (px) at which two cards fit.
    pub const MEDIUM_MIN_WIDTH: f32 = 840.0;
    pub const WIDE_PAGE_SIZE: usize = 3;
    pub const MEDIUM_PAGE_SIZE: usize = 2;
    pub const NARROW_PAGE_SIZE: usize = 1;
    /// Page transition duration (ms).
    pub const TRANSITION_MS: u64 = 520;
    /// Card width cap (px).
    pub const CARD_MAX_WIDTH: f32 = 360.0;
    /// Card width as a fraction of the container when narrower than the cap.
    pub const CARD_CONTAINER_FRACTION: f32 = 0.86;
    /// Gap between cards (px).
    pub const CARD_GAP: f32 = 20.0;
}

/// Per-card hover image gallery.
pub mod gallery {
    /// Duration per image step (ms).
    pub const BASE_MS_PER_STEP: u64 = 520;
    /// Lower bound on a gallery transition (ms).
    pub const MIN_MS: u64 = 520;
    /// Upper bound on a gallery transition (ms).
    pub const MAX_MS: u64 = 1400;
}

/// Horizontal scroll rails.
pub mod rail {
    /// Distance (px) from either end within which the track counts as at
    /// the edge.
    pub const EDGE_EPSILON: f32 = 4.0;
    /// Keyboard and club rail arrow scroll, as a fraction of the visible width.
    pub const KEY_SCROLL_FRACTION: f32 = 0.9;
    /// Classics rail arrow scroll, as a fraction of the visible width.
    pub const CLASSICS_SCROLL_FRACTION: f32 = 0.45;
    /// Smooth programmatic scroll duration (ms).
    pub const SMOOTH_SCROLL_MS: u64 = 380;
}

/// Club logo rail.
pub mod club {
    /// Square card edge (px).
    pub const CARD_SIZE: f32 = 360.0;
    /// Default gap between cards (px).
    pub const CARD_GAP: f32 = 24.0;
    /// Horizontal padding on each side of the track (px).
    pub const TRACK_PADDING: f32 = 32.0;
    /// Gradient accent pairs, cycled by card position.
    pub const ACCENTS: [(&str, &str); 5] = [
        ("#ff3b3b", "#ffb800"),
        ("#4f46e5", "#22d3ee"),
        ("#16a34a", "#a3e635"),
        ("#f97316", "#f43f5e"),
        ("#06b6d4", "#3b82f6"),
    ];
}

/// Scroll-triggered reveal and in-view tracking.
pub mod reveal {
    /// Visible fraction needed to trigger a one-shot reveal.
    pub const THRESHOLD: f32 = 0.16;
    /// Bottom root margin for reveals, as a fraction of the viewport height.
    pub const BOTTOM_MARGIN: f32 = -0.06;
    /// Default stagger step between siblings (ms).
    pub const STAGGER_STEP_MS: u64 = 120;
    /// Visible fraction for continuous in-view toggles.
    pub const IN_VIEW_THRESHOLD: f32 = 0.35;
    /// Bottom root margin for in-view tracking.
    pub const IN_VIEW_BOTTOM_MARGIN: f32 = -0.05;
    /// Default threshold for standalone reveal bindings.
    pub const BINDING_THRESHOLD: f32 = 0.15;
}

/// Scroll-derived parallax.
pub mod parallax {
    pub const DEFAULT_SPEED: f32 = 0.18;
    /// Offset range (px) at speed 1.0 across the full progress span.
    pub const RANGE_PX: f32 = 240.0;
}

/// Staged section entrances.
pub mod section {
    /// Category section visibility threshold.
    pub const THRESHOLD: f32 = 0.25;
    /// Category section bottom root margin.
    pub const BOTTOM_MARGIN: f32 = -0.20;
    /// Delay between the header and the grid playing (ms).
    pub const GRID_DELAY_MS: u64 = 420;
    /// Classics section header entrance threshold.
    pub const CLASSICS_HEADER_THRESHOLD: f32 = 0.25;
    /// Classics rail backdrop in-view threshold.
    pub const CLASSICS_IN_VIEW_THRESHOLD: f32 = 0.3;
}

/// Pointer tilt on category cards.
pub mod tilt {
    /// Degrees of X rotation per unit of normalised vertical offset.
    pub const ROTATE_X_DEG: f32 = -4.5;
    /// Degrees of Y rotation per unit of normalised horizontal offset.
    pub const ROTATE_Y_DEG: f32 = 6.0;
    pub const IMAGE_SHIFT_X: f32 = 8.0;
    pub const IMAGE_SHIFT_Y: f32 = 6.0;
    pub const IMAGE_SCALE: f32 = 1.035;
    pub const CTA_SHIFT_X: f32 = 4.0;
    pub const CTA_SHIFT_Y: f32 = 3.0;
    /// Image scale once the pointer leaves.
    pub const REST_SCALE: f32 = 1.02;
}
