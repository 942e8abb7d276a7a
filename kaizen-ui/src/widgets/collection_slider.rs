//! Paged featured-collection card slider

use std::time::{Duration, Instant};

use crate::engine::{
    Commit, DurationPolicy, RequestOutcome, SlideScheduler, TrackTransform,
    ViewportSizer,
};
use crate::infra::constants::collection;

#[derive(Debug, Clone)]
pub struct CollectionSlider {
    len: usize,
    sizer: ViewportSizer,
    pager: SlideScheduler,
}

impl CollectionSlider {
    pub fn new(len: usize) -> Self {
        let sizer = ViewportSizer::default();
        let pages = sizer.max_start_index(len) + 1;
        let policy = DurationPolicy::fixed(Duration::from_millis(
            collection::TRANSITION_MS,
        ));
        Self {
            len,
            sizer,
            pager: SlideScheduler::new(pages, policy),
        }
    }

    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.pager.set_reduced_motion(reduced_motion);
        self
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Committed first visible card.
    pub fn index(&self) -> usize {
        self.pager.current()
    }

    /// First visible card as rendered, including an in-flight target.
    pub fn visual_index(&self) -> usize {
        self.pager.visual_index()
    }

    pub fn items_per_page(&self) -> usize {
        self.sizer.items_per_page()
    }

    pub fn max_index(&self) -> usize {
        self.sizer.max_start_index(self.len)
    }

    pub fn is_animating(&self) -> bool {
        self.pager.is_animating()
    }

    /// Container width from mount or resize. The index is re-clamped when
    /// the page size changes.
    pub fn measure(&mut self, width: f32) -> Option<Commit> {
        if self.sizer.measure(width) {
            log::debug!(
                "collection page size now {} at {width}px",
                self.sizer.items_per_page()
            );
        }
        self.pager.set_count(self.max_index() + 1)
    }

    /// Replace the item count, for example after the catalog loads.
    pub fn set_len(&mut self, len: usize) -> Option<Commit> {
        self.len = len;
        self.pager.set_count(self.max_index() + 1)
    }

    pub fn next(&mut self, now: Instant) -> RequestOutcome {
        let target = self.pager.current() as isize + 1;
        self.pager.request_transition(target, now)
    }

    pub fn prev(&mut self, now: Instant) -> RequestOutcome {
        let target = self.pager.current() as isize - 1;
        self.pager.request_transition(target, now)
    }

    pub fn tick(&mut self, now: Instant) -> Option<Commit> {
        self.pager.tick(now)
    }

    pub fn transition_ended(&mut self) -> Option<Commit> {
        self.pager.transition_ended()
    }

    pub fn prev_disabled(&self) -> bool {
        self.visual_index() == 0
    }

    pub fn next_disabled(&self) -> bool {
        self.visual_index() >= self.max_index()
    }

    /// Filled fraction of the progress bar.
    pub fn progress_fraction(&self) -> f32 {
        let page = self.items_per_page();
        if self.len <= page {
            return 1.0;
        }
        ((self.visual_index() + page) as f32 / self.len as f32).min(1.0)
    }

    pub fn card_width(&self) -> f32 {
        collection::CARD_MAX_WIDTH
            .min(self.sizer.width() * collection::CARD_CONTAINER_FRACTION)
    }

    pub fn track_transform(&self) -> TrackTransform {
        let stride = self.card_width() + collection::CARD_GAP;
        let offset = -(self.visual_index() as f32) * stride;
        match self.pager.active_duration() {
            Some(duration) => TrackTransform::animated(offset, duration),
            None => TrackTransform::snapped(offset),
        }
    }

    pub fn teardown(&mut self) {
        self.pager.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::IgnoreReason;

    const STEP: Duration = Duration::from_millis(collection::TRANSITION_MS);

    #[test]
    fn six_items_page_three_walks_to_max_then_stops() {
        let mut t = Instant::now();
        let mut slider = CollectionSlider::new(6);
        slider.measure(1_280.0);
        assert_eq!(slider.items_per_page(), 3);
        assert_eq!(slider.max_index(), 3);
        assert_eq!(slider.index(), 0);
        assert!(slider.prev_disabled());

        for expected in 1..=3 {
            assert!(matches!(slider.next(t), RequestOutcome::Started { .. }));
            t += STEP;
            assert!(slider.tick(t).is_some());
            assert_eq!(slider.index(), expected);
        }

        assert_eq!(
            slider.next(t),
            RequestOutcome::Ignored(IgnoreReason::SameIndex)
        );
        assert_eq!(slider.index(), 3);
        assert!(slider.next_disabled());
        assert_eq!(slider.progress_fraction(), 1.0);
    }

    #[test]
    fn prev_at_start_is_a_no_op() {
        let t0 = Instant::now();
        let mut slider = CollectionSlider::new(6);
        slider.measure(1_280.0);
        assert!(slider.prev(t0).is_ignored());
        assert!(!slider.is_animating());
    }

    #[test]
    fn offsets_and_progress_follow_target() {
        let t0 = Instant::now();
        let mut slider = CollectionSlider::new(6);
        slider.measure(1_000.0);
        assert_eq!(slider.items_per_page(), 2);
        assert!((slider.progress_fraction() - 2.0 / 6.0).abs() < 1e-6);

        slider.next(t0);
        let transform = slider.track_transform();
        assert_eq!(transform.offset, -(360.0 + collection::CARD_GAP));
        assert_eq!(transform.transition, Some(STEP));
        assert!((slider.progress_fraction() - 0.5).abs() < 1e-6);

        slider.transition_ended();
        assert_eq!(slider.track_transform().transition, None);
    }

    #[test]
    fn narrow_cards_shrink_with_container() {
        let mut slider = CollectionSlider::new(6);
        slider.measure(400.0);
        assert_eq!(slider.items_per_page(), 1);
        assert!((slider.card_width() - 344.0).abs() < 1e-3);
    }

    #[test]
    fn resize_reclamps_index() {
        let t0 = Instant::now();
        let mut slider = CollectionSlider::new(6).with_reduced_motion(true);
        slider.measure(500.0);
        for _ in 0..5 {
            slider.next(t0);
        }
        assert_eq!(slider.index(), 5);

        assert_eq!(slider.measure(1_300.0), Some(Commit { from: 5, index: 3 }));
        assert_eq!(slider.index(), 3);
    }

    #[test]
    fn shrinking_len_reclamps_index() {
        let t0 = Instant::now();
        let mut slider = CollectionSlider::new(6).with_reduced_motion(true);
        slider.measure(1_280.0);
        for _ in 0..3 {
            slider.next(t0);
        }
        assert_eq!(slider.index(), 3);

        assert_eq!(slider.set_len(4), Some(Commit { from: 3, index: 1 }));
        assert_eq!(slider.len(), 4);
        assert_eq!(slider.max_index(), 1);
        assert_eq!(slider.set_len(12), None);
        assert_eq!(slider.index(), 1);
    }

    #[test]
    fn everything_fits_fills_progress() {
        let mut slider = CollectionSlider::new(2);
        slider.measure(1_400.0);
        assert_eq!(slider.max_index(), 0);
        assert_eq!(slider.progress_fraction(), 1.0);
        assert!(slider.prev_disabled() && slider.next_disabled());
    }
}
