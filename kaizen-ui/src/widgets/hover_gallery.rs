//! Per-card image gallery scrubbed by pointer position
//!
//! The card's image area is split into one region per image. Entering or
//! moving over a region animates to its image; leaving snaps back to the
//! first image with transitions off until the next interaction.

use std::time::{Duration, Instant};

use crate::engine::{
    Commit, DurationPolicy, ReadinessSet, RequestOutcome, SlideScheduler,
    TrackTransform, region_from_pointer,
};
use crate::infra::constants::gallery;

/// Pointer geometry over the card's image viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub element_left: f32,
    pub element_width: f32,
}

#[derive(Debug, Clone)]
pub struct HoverGallery {
    images: Vec<String>,
    slider: SlideScheduler,
    transitions_suppressed: bool,
}

impl HoverGallery {
    pub fn new(images: Vec<String>) -> Self {
        let policy = DurationPolicy::new(
            Duration::from_millis(gallery::BASE_MS_PER_STEP),
            Duration::from_millis(gallery::MIN_MS),
            Duration::from_millis(gallery::MAX_MS),
        );
        let mut readiness = ReadinessSet::new(images.len());
        readiness.mark_ready(0);
        let slider =
            SlideScheduler::new(images.len(), policy).with_readiness(readiness);
        Self {
            images,
            slider,
            transitions_suppressed: false,
        }
    }

    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.slider.set_reduced_motion(reduced_motion);
        self
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn active(&self) -> usize {
        self.slider.current()
    }

    pub fn is_busy(&self) -> bool {
        self.slider.is_busy()
    }

    pub fn is_ready(&self, index: usize) -> bool {
        self.slider
            .readiness()
            .is_some_and(|readiness| readiness.is_ready(index))
    }

    /// Images to decode in the background after mount.
    pub fn pending_decodes(&self) -> Vec<usize> {
        (0..self.images.len()).filter(|&i| !self.is_ready(i)).collect()
    }

    /// A background or on-demand decode finished.
    pub fn decode_settled(
        &mut self,
        index: usize,
        ok: bool,
        now: Instant,
    ) -> Option<RequestOutcome> {
        self.slider.decode_settled(index, ok, now)
    }

    fn region(&self, sample: PointerSample) -> usize {
        region_from_pointer(
            sample.x,
            sample.element_left,
            sample.element_width,
            self.images.len(),
        )
    }

    pub fn pointer_enter(
        &mut self,
        sample: PointerSample,
        now: Instant,
    ) -> RequestOutcome {
        self.transitions_suppressed = false;
        let region = self.region(sample);
        self.slider.request_transition(region as isize, now)
    }

    /// Only requests a slide when idle and over a different region.
    pub fn pointer_move(
        &mut self,
        sample: PointerSample,
        now: Instant,
    ) -> Option<RequestOutcome> {
        self.transitions_suppressed = false;
        let region = self.region(sample);
        if self.slider.is_busy() || region == self.slider.current() {
            return None;
        }
        Some(self.slider.request_transition(region as isize, now))
    }

    /// Snap to the first image without animating.
    pub fn pointer_leave(&mut self) -> Option<Commit> {
        self.transitions_suppressed = true;
        self.slider.jump_to(0)
    }

    pub fn tick(&mut self, now: Instant) -> Option<Commit> {
        self.slider.tick(now)
    }

    pub fn transition_ended(&mut self) -> Option<Commit> {
        self.slider.transition_ended()
    }

    /// Offset in percent of the viewport width.
    pub fn track_transform(&self) -> TrackTransform {
        let offset = -(self.slider.visual_index() as f32) * 100.0;
        match self.slider.active_duration() {
            Some(duration) if !self.transitions_suppressed => {
                TrackTransform::animated(offset, duration)
            }
            _ => TrackTransform::snapped(offset),
        }
    }

    /// One flag per image, set on the active one.
    pub fn dots(&self) -> Vec<bool> {
        let active = self.slider.current();
        (0..self.images.len()).map(|i| i == active).collect()
    }

    pub fn teardown(&mut self) {
        self.slider.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::IgnoreReason;

    fn at(x: f32) -> PointerSample {
        PointerSample {
            x,
            element_left: 0.0,
            element_width: 300.0,
        }
    }

    fn gallery(n: usize) -> HoverGallery {
        HoverGallery::new((0..n).map(|i| format!("img-{i}.jpg")).collect())
    }

    #[test]
    fn first_image_is_ready_up_front() {
        let g = gallery(3);
        assert!(g.is_ready(0));
        assert_eq!(g.pending_decodes(), vec![1, 2]);
    }

    #[test]
    fn entering_far_region_scales_duration() {
        let t0 = Instant::now();
        let mut g = gallery(4);
        for i in 1..4 {
            g.decode_settled(i, true, t0);
        }

        assert_eq!(
            g.pointer_enter(at(299.0), t0),
            RequestOutcome::Started {
                target: 3,
                duration: Duration::from_millis(1_400)
            }
        );
        assert_eq!(g.pointer_move(at(10.0), t0), None);
        assert_eq!(g.tick(t0 + Duration::from_millis(1_400)), Some(Commit {
            from: 0,
            index: 3
        }));
        assert_eq!(g.dots(), vec![false, false, false, true]);
    }

    #[test]
    fn unready_target_waits_for_decode() {
        let t0 = Instant::now();
        let mut g = gallery(2);
        assert_eq!(
            g.pointer_enter(at(200.0), t0),
            RequestOutcome::AwaitingDecode { target: 1 }
        );
        assert!(g.is_busy());

        let outcome = g.decode_settled(1, true, t0).unwrap();
        assert!(matches!(outcome, RequestOutcome::Started { target: 1, .. }));
        assert_eq!(g.track_transform().offset, -100.0);
    }

    #[test]
    fn leaving_snaps_home_without_transition() {
        let t0 = Instant::now();
        let mut g = gallery(3);
        g.decode_settled(2, true, t0);
        g.pointer_enter(at(250.0), t0);
        assert!(g.track_transform().transition.is_some());

        assert_eq!(g.pointer_leave(), None);
        assert_eq!(g.active(), 0);
        assert!(!g.is_busy());
        assert_eq!(g.track_transform(), TrackTransform::snapped(0.0));
        assert_eq!(g.tick(t0 + Duration::from_secs(2)), None);
    }

    #[test]
    fn single_image_never_slides() {
        let t0 = Instant::now();
        let mut g = gallery(1);
        assert_eq!(
            g.pointer_enter(at(250.0), t0),
            RequestOutcome::Ignored(IgnoreReason::SameIndex)
        );
    }
}
