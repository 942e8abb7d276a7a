//! Time-based tween for programmatic scroll offsets

use std::time::{Duration, Instant};

use super::easing::EasingFunction;

#[derive(Debug, Clone)]
pub struct SnapAnimator {
    active: bool,
    start: f32,
    target: f32,
    started_at: Option<Instant>,
    duration: Duration,
    easing: EasingFunction,
}

impl Default for SnapAnimator {
    fn default() -> Self {
        Self {
            active: false,
            start: 0.0,
            target: 0.0,
            started_at: None,
            duration: Duration::from_millis(200),
            easing: EasingFunction::default(),
        }
    }
}

impl SnapAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn target(&self) -> Option<f32> {
        self.active.then_some(self.target)
    }

    pub fn start(
        &mut self,
        current: f32,
        target: f32,
        duration: Duration,
        easing: EasingFunction,
        now: Instant,
    ) {
        self.active = true;
        self.start = current;
        self.target = target;
        self.started_at = Some(now);
        self.duration = duration;
        self.easing = easing;
    }

    /// Returns Some(next_offset) when animating, or None when finished/inactive
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        if !self.active {
            return None;
        }
        let started_at = self.started_at.unwrap_or(now);
        let elapsed = now.saturating_duration_since(started_at);
        if elapsed >= self.duration {
            self.active = false;
            return Some(self.target);
        }
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32())
            .clamp(0.0, 1.0);
        let te = self.easing.apply(t);
        Some(self.start + (self.target - self.start) * te)
    }

    /// Cancel the current animation immediately.
    pub fn cancel(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_reaches_target_at_deadline() {
        let t0 = Instant::now();
        let mut animator = SnapAnimator::new();
        animator.start(
            0.0,
            100.0,
            Duration::from_millis(400),
            EasingFunction::Linear,
            t0,
        );

        let mid = animator.tick(t0 + Duration::from_millis(200)).unwrap();
        assert!((mid - 50.0).abs() < 0.5);
        assert_eq!(animator.tick(t0 + Duration::from_millis(400)), Some(100.0));
        assert!(!animator.is_active());
        assert_eq!(animator.tick(t0 + Duration::from_millis(500)), None);
    }

    #[test]
    fn test_zero_duration_finishes_on_first_tick() {
        let t0 = Instant::now();
        let mut animator = SnapAnimator::new();
        animator.start(
            10.0,
            30.0,
            Duration::ZERO,
            EasingFunction::default(),
            t0,
        );
        assert_eq!(animator.tick(t0), Some(30.0));
    }
}
