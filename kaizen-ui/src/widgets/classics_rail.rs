//! Classics rail: a free-scrolling row whose arrows move a smaller step

use std::time::Instant;

use crate::engine::{
    DragScrollAdapter, Edges, ElementRect, EventOutcome, ObserverOptions,
    Viewport,
};
use crate::infra::constants::{rail, section};
use crate::messages::{Direction, RailMessage};

/// Section visibility, observed at two thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionVisibility {
    /// Header entrance animation plays.
    pub header_active: bool,
    /// Rail backdrop is in its in-view state.
    pub in_view: bool,
}

#[derive(Debug, Clone)]
pub struct ClassicsRail {
    scroll: DragScrollAdapter,
    header: ObserverOptions,
    backdrop: ObserverOptions,
    visibility: SectionVisibility,
}

impl ClassicsRail {
    pub fn new(client_width: f32, scroll_width: f32) -> Self {
        Self {
            scroll: DragScrollAdapter::new(client_width, scroll_width)
                .with_key_fraction(rail::CLASSICS_SCROLL_FRACTION),
            header: ObserverOptions {
                threshold: section::CLASSICS_HEADER_THRESHOLD,
                bottom_margin: 0.0,
            },
            backdrop: ObserverOptions {
                threshold: section::CLASSICS_IN_VIEW_THRESHOLD,
                bottom_margin: 0.0,
            },
            visibility: SectionVisibility::default(),
        }
    }

    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.scroll = self.scroll.with_reduced_motion(reduced_motion);
        self
    }

    pub fn scroll(&self) -> &DragScrollAdapter {
        &self.scroll
    }

    pub fn edges(&self) -> Edges {
        self.scroll.edges()
    }

    pub fn visibility(&self) -> SectionVisibility {
        self.visibility
    }

    /// Feed the section's geometry. Both flags toggle on and off.
    pub fn observe(
        &mut self,
        viewport: Viewport,
        rect: ElementRect,
    ) -> SectionVisibility {
        self.visibility = SectionVisibility {
            header_active: self.header.qualifies(viewport, rect),
            in_view: self.backdrop.qualifies(viewport, rect),
        };
        self.visibility
    }

    pub fn update(&mut self, message: RailMessage) -> EventOutcome {
        self.scroll.update(message)
    }

    pub fn arrow(&mut self, direction: Direction, now: Instant) {
        self.scroll.scroll_page(direction, now);
    }

    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        self.scroll.tick(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_move_forty_five_percent() {
        let t0 = Instant::now();
        let mut rail =
            ClassicsRail::new(1_000.0, 4_000.0).with_reduced_motion(true);
        rail.arrow(Direction::Right, t0);
        assert_eq!(rail.scroll().scroll_left(), 450.0);
        rail.arrow(Direction::Left, t0);
        assert_eq!(rail.scroll().scroll_left(), 0.0);
        assert!(!rail.edges().can_scroll_left);
    }

    #[test]
    fn header_activates_before_backdrop() {
        let mut rail = ClassicsRail::new(1_000.0, 4_000.0);
        let viewport = Viewport {
            scroll_top: 0.0,
            height: 900.0,
        };
        let at = |top| ElementRect { top, height: 500.0 };

        // 100 of 500 visible
        assert_eq!(
            rail.observe(viewport, at(800.0)),
            SectionVisibility::default()
        );

        // 130 of 500 visible: past 0.25, short of 0.3
        let partial = rail.observe(viewport, at(770.0));
        assert!(partial.header_active);
        assert!(!partial.in_view);

        // 200 of 500 visible
        let full = rail.observe(viewport, at(700.0));
        assert!(full.header_active && full.in_view);
        assert_eq!(rail.visibility(), full);

        assert_eq!(
            rail.observe(viewport, at(2_000.0)),
            SectionVisibility::default()
        );
    }
}
