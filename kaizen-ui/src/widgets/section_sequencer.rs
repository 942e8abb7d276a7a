//! Staged entrance for the category section
//!
//! Entering plays the header right away and the grid after a fixed delay.
//! Leaving cancels a pending grid start and resets both so the next entry
//! replays. Each entry bumps a cycle counter the renderer uses to remount
//! animated children.

use std::time::{Duration, Instant};

use crate::engine::{ElementRect, ObserverOptions, Viewport};
use crate::infra::constants::section;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionPlayback {
    pub header: bool,
    pub grid: bool,
    pub cycle: u32,
}

#[derive(Debug, Clone)]
pub struct SectionSequencer {
    options: ObserverOptions,
    grid_delay: Duration,
    reduced_motion: bool,
    inside: bool,
    playback: SectionPlayback,
    grid_at: Option<Instant>,
    torn_down: bool,
}

impl Default for SectionSequencer {
    fn default() -> Self {
        Self {
            options: ObserverOptions {
                threshold: section::THRESHOLD,
                bottom_margin: section::BOTTOM_MARGIN,
            },
            grid_delay: Duration::from_millis(section::GRID_DELAY_MS),
            reduced_motion: false,
            inside: false,
            playback: SectionPlayback::default(),
            grid_at: None,
            torn_down: false,
        }
    }
}

impl SectionSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }

    pub fn playback(&self) -> SectionPlayback {
        self.playback
    }

    /// Deadline of the pending grid start.
    pub fn grid_deadline(&self) -> Option<Instant> {
        self.grid_at
    }

    /// Feed the current geometry of the section.
    pub fn observe(
        &mut self,
        viewport: Viewport,
        rect: ElementRect,
        now: Instant,
    ) -> SectionPlayback {
        let visible = self.options.qualifies(viewport, rect);
        self.on_intersection(visible, now)
    }

    pub fn on_intersection(
        &mut self,
        visible: bool,
        now: Instant,
    ) -> SectionPlayback {
        if self.torn_down {
            return self.playback;
        }

        if self.reduced_motion {
            self.playback.header = visible;
            self.playback.grid = visible;
            return self.playback;
        }

        match (self.inside, visible) {
            (false, true) => {
                self.inside = true;
                self.playback.cycle = self.playback.cycle.wrapping_add(1);
                self.playback.header = true;
                self.grid_at = Some(now + self.grid_delay);
            }
            (true, false) => {
                self.inside = false;
                self.grid_at = None;
                self.playback.header = false;
                self.playback.grid = false;
            }
            _ => {}
        }
        self.playback
    }

    /// Start the grid once its delay has elapsed. Returns true on the call
    /// that starts it.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.grid_at {
            Some(deadline) if now >= deadline => {
                self.grid_at = None;
                self.playback.grid = true;
                true
            }
            _ => false,
        }
    }

    pub fn teardown(&mut self) {
        self.grid_at = None;
        self.torn_down = true;
    }
}
