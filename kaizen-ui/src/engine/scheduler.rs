//! Single-flight slide transitions
//!
//! [`SlideScheduler`] owns the index of one slider instance and drives at most
//! one transition at a time. Requests that arrive while a transition or an
//! on-demand decode is in flight are dropped, never queued. Completion is
//! observed either by polling [`SlideScheduler::tick`] with the current frame
//! time or by forwarding the renderer's "transition ended" signal.

use std::time::{Duration, Instant};

use crate::infra::constants::snap;

/// How long a transition lasts for a given index distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationPolicy {
    pub per_step: Duration,
    pub min: Duration,
    pub max: Duration,
}

impl DurationPolicy {
    pub fn new(per_step: Duration, min: Duration, max: Duration) -> Self {
        Self {
            per_step,
            min: min.min(max),
            max,
        }
    }

    /// Same duration regardless of distance.
    pub fn fixed(duration: Duration) -> Self {
        Self::new(duration, duration, duration)
    }

    pub fn for_distance(&self, steps: usize) -> Duration {
        let steps = u32::try_from(steps.max(1)).unwrap_or(u32::MAX);
        self.per_step
            .saturating_mul(steps)
            .clamp(self.min, self.max)
    }
}

/// Per-item decode state. Items start unready.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadinessSet {
    ready: Vec<bool>,
}

impl ReadinessSet {
    pub fn new(count: usize) -> Self {
        Self {
            ready: vec![false; count],
        }
    }

    pub fn len(&self) -> usize {
        self.ready.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ready.is_empty()
    }

    pub fn mark_ready(&mut self, index: usize) {
        if let Some(slot) = self.ready.get_mut(index) {
            *slot = true;
        }
    }

    pub fn is_ready(&self, index: usize) -> bool {
        self.ready.get(index).copied().unwrap_or(false)
    }

    /// Grow or shrink, keeping known states. New items start unready.
    pub fn resize(&mut self, count: usize) {
        self.ready.resize(count, false);
    }
}

/// Re-enables transitions a fixed number of animation frames after a snap.
///
/// A track re-centered with transitions off must have that style committed
/// before transitions come back, otherwise the snap itself animates. Waiting
/// for [`snap::GUARD_FRAMES`] chained frames is a workaround for platform
/// style-commit timing, not a guarantee.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapGuard {
    frames_remaining: u8,
}

impl SnapGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn engage(&mut self) {
        self.frames_remaining = snap::GUARD_FRAMES;
    }

    /// Feed one animation frame. Returns true on the frame that re-enables
    /// transitions.
    pub fn on_animation_frame(&mut self) -> bool {
        if self.frames_remaining == 0 {
            return false;
        }
        self.frames_remaining -= 1;
        self.frames_remaining == 0
    }

    pub fn is_engaged(&self) -> bool {
        self.frames_remaining > 0
    }

    pub fn transitions_enabled(&self) -> bool {
        !self.is_engaged()
    }
}

/// Track position handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackTransform {
    /// Offset in the unit of the owning widget (pixels or percent).
    pub offset: f32,
    /// Transition to apply to the move. `None` snaps without animating.
    pub transition: Option<Duration>,
}

impl TrackTransform {
    pub fn snapped(offset: f32) -> Self {
        Self {
            offset,
            transition: None,
        }
    }

    pub fn animated(offset: f32, duration: Duration) -> Self {
        Self {
            offset,
            transition: (!duration.is_zero()).then_some(duration),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// Waiting for the target's asset to settle before animating.
    Decoding { target: usize },
    Animating {
        from: usize,
        target: usize,
        started_at: Instant,
        deadline: Instant,
        duration: Duration,
    },
}

/// A committed index change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Commit {
    pub from: usize,
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    Busy,
    SameIndex,
    Empty,
    /// The owning widget has sliding turned off.
    Disabled,
    TornDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    Started { target: usize, duration: Duration },
    /// Zero-duration transition, committed inside the call.
    Committed(Commit),
    AwaitingDecode { target: usize },
    Ignored(IgnoreReason),
}

impl RequestOutcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, RequestOutcome::Ignored(_))
    }
}

#[derive(Debug, Clone)]
pub struct SlideScheduler {
    count: usize,
    current: usize,
    phase: Phase,
    policy: DurationPolicy,
    reduced_motion: bool,
    readiness: Option<ReadinessSet>,
    torn_down: bool,
}

impl SlideScheduler {
    pub fn new(count: usize, policy: DurationPolicy) -> Self {
        Self {
            count,
            current: 0,
            phase: Phase::Idle,
            policy,
            reduced_motion: false,
            readiness: None,
            torn_down: false,
        }
    }

    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }

    /// Gate transitions on per-item readiness.
    pub fn with_readiness(mut self, mut readiness: ReadinessSet) -> Self {
        readiness.resize(self.count);
        self.readiness = Some(readiness);
        self
    }

    pub fn set_reduced_motion(&mut self, reduced_motion: bool) {
        self.reduced_motion = reduced_motion;
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn policy(&self) -> DurationPolicy {
        self.policy
    }

    pub fn readiness(&self) -> Option<&ReadinessSet> {
        self.readiness.as_ref()
    }

    /// True while a transition or an on-demand decode is pending.
    pub fn is_busy(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Animating { .. })
    }

    /// Index the track should be heading to: the in-flight target while
    /// animating, the committed index otherwise.
    pub fn visual_index(&self) -> usize {
        match self.phase {
            Phase::Animating { target, .. } => target,
            _ => self.current,
        }
    }

    /// Duration of the in-flight transition, if any.
    pub fn active_duration(&self) -> Option<Duration> {
        match self.phase {
            Phase::Animating { duration, .. } => Some(duration),
            _ => None,
        }
    }

    pub fn request_transition(
        &mut self,
        target: isize,
        now: Instant,
    ) -> RequestOutcome {
        if self.torn_down {
            return RequestOutcome::Ignored(IgnoreReason::TornDown);
        }
        if self.count == 0 {
            return RequestOutcome::Ignored(IgnoreReason::Empty);
        }
        if self.is_busy() {
            log::trace!("slide request to {target} dropped while busy");
            return RequestOutcome::Ignored(IgnoreReason::Busy);
        }

        let target = self.clamp_target(target);
        if target == self.current {
            return RequestOutcome::Ignored(IgnoreReason::SameIndex);
        }

        if let Some(readiness) = &self.readiness
            && !readiness.is_ready(target)
        {
            log::debug!("slide target {target} not decoded yet, parking");
            self.phase = Phase::Decoding { target };
            return RequestOutcome::AwaitingDecode { target };
        }

        self.begin(target, now)
    }

    /// Report that the decode for `index` finished. A parked request for that
    /// index proceeds whether or not the decode succeeded.
    pub fn decode_settled(
        &mut self,
        index: usize,
        ok: bool,
        now: Instant,
    ) -> Option<RequestOutcome> {
        if ok && let Some(readiness) = self.readiness.as_mut() {
            readiness.mark_ready(index);
        }
        if !ok {
            log::debug!("decode for item {index} failed; item stays unready");
        }
        if self.torn_down {
            return None;
        }
        match self.phase {
            Phase::Decoding { target } if target == index => {
                self.phase = Phase::Idle;
                Some(self.begin(target, now))
            }
            _ => None,
        }
    }

    /// Commit the in-flight transition once its deadline has passed.
    pub fn tick(&mut self, now: Instant) -> Option<Commit> {
        match self.phase {
            Phase::Animating { deadline, .. } if now >= deadline => {
                self.finish()
            }
            _ => None,
        }
    }

    /// Renderer reported the transition finished ahead of the timer.
    pub fn transition_ended(&mut self) -> Option<Commit> {
        if self.is_animating() {
            self.finish()
        } else {
            None
        }
    }

    /// Linear progress of the in-flight transition in `[0, 1]`.
    pub fn progress(&self, now: Instant) -> Option<f32> {
        match self.phase {
            Phase::Animating {
                started_at,
                duration,
                ..
            } => {
                if duration.is_zero() {
                    return Some(1.0);
                }
                let elapsed = now.saturating_duration_since(started_at);
                Some(
                    (elapsed.as_secs_f32() / duration.as_secs_f32())
                        .clamp(0.0, 1.0),
                )
            }
            _ => None,
        }
    }

    /// Move to `index` immediately, cancelling anything in flight.
    pub fn jump_to(&mut self, index: usize) -> Option<Commit> {
        self.phase = Phase::Idle;
        if self.count == 0 {
            return None;
        }
        let index = index.min(self.count - 1);
        if index == self.current {
            return None;
        }
        let commit = Commit {
            from: self.current,
            index,
        };
        self.current = index;
        Some(commit)
    }

    /// Change the number of items, clamping the committed index. A pending
    /// target that no longer exists is abandoned.
    pub fn set_count(&mut self, count: usize) -> Option<Commit> {
        self.count = count;
        if let Some(readiness) = self.readiness.as_mut() {
            readiness.resize(count);
        }
        let pending = match self.phase {
            Phase::Decoding { target } | Phase::Animating { target, .. } => {
                Some(target)
            }
            Phase::Idle => None,
        };
        if pending.is_some_and(|target| target >= count) {
            self.phase = Phase::Idle;
        }

        let clamped = self.current.min(count.saturating_sub(1));
        (clamped != self.current).then(|| {
            let commit = Commit {
                from: self.current,
                index: clamped,
            };
            self.current = clamped;
            commit
        })
    }

    /// Drop any pending deadline so nothing commits after the owner is gone.
    pub fn teardown(&mut self) {
        self.phase = Phase::Idle;
        self.torn_down = true;
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    fn clamp_target(&self, target: isize) -> usize {
        let max = self.count.saturating_sub(1);
        usize::try_from(target).map_or(0, |t| t.min(max))
    }

    fn begin(&mut self, target: usize, now: Instant) -> RequestOutcome {
        let duration = if self.reduced_motion {
            Duration::ZERO
        } else {
            self.policy.for_distance(self.current.abs_diff(target))
        };

        if duration.is_zero() {
            let commit = Commit {
                from: self.current,
                index: target,
            };
            self.current = target;
            self.phase = Phase::Idle;
            return RequestOutcome::Committed(commit);
        }

        self.phase = Phase::Animating {
            from: self.current,
            target,
            started_at: now,
            deadline: now + duration,
            duration,
        };
        RequestOutcome::Started { target, duration }
    }

    fn finish(&mut self) -> Option<Commit> {
        let Phase::Animating { from, target, .. } = self.phase else {
            return None;
        };
        self.phase = Phase::Idle;
        self.current = target;
        Some(Commit {
            from,
            index: target,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: Duration = Duration::from_millis(520);

    fn scheduler(count: usize) -> SlideScheduler {
        SlideScheduler::new(count, DurationPolicy::fixed(STEP))
    }

    #[test]
    fn duration_scales_with_distance_inside_band() {
        let policy = DurationPolicy::new(
            Duration::from_millis(520),
            Duration::from_millis(520),
            Duration::from_millis(1400),
        );
        assert_eq!(policy.for_distance(0), Duration::from_millis(520));
        assert_eq!(policy.for_distance(1), Duration::from_millis(520));
        assert_eq!(policy.for_distance(2), Duration::from_millis(1040));
        assert_eq!(policy.for_distance(7), Duration::from_millis(1400));
    }

    #[test]
    fn requests_while_busy_are_dropped() {
        let t0 = Instant::now();
        let mut s = scheduler(5);

        assert_eq!(
            s.request_transition(2, t0),
            RequestOutcome::Started {
                target: 2,
                duration: STEP
            }
        );
        for target in [0, 3, 4, -1] {
            assert_eq!(
                s.request_transition(target, t0 + Duration::from_millis(10)),
                RequestOutcome::Ignored(IgnoreReason::Busy)
            );
        }
        assert_eq!(s.current(), 0);
        assert_eq!(s.visual_index(), 2);

        let deadline = t0 + STEP;
        assert_eq!(s.tick(deadline - Duration::from_millis(1)), None);
        assert_eq!(s.tick(deadline), Some(Commit { from: 0, index: 2 }));
        assert!(!s.is_busy());
        assert_eq!(s.current(), 2);
    }

    #[test]
    fn out_of_range_targets_are_clamped() {
        let t0 = Instant::now();
        let mut from_minus_one = scheduler(5);
        let mut from_zero = scheduler(5);
        from_minus_one.jump_to(3);
        from_zero.jump_to(3);

        assert_eq!(
            from_minus_one.request_transition(-1, t0),
            from_zero.request_transition(0, t0)
        );
        from_minus_one.tick(t0 + STEP);
        from_zero.tick(t0 + STEP);
        assert_eq!(from_minus_one.current(), 0);
        assert_eq!(from_zero.current(), 0);

        let mut s = scheduler(5);
        s.request_transition(99, t0);
        assert_eq!(s.transition_ended(), Some(Commit { from: 0, index: 4 }));
    }

    #[test]
    fn same_index_never_starts_a_transition() {
        let t0 = Instant::now();
        let mut s = scheduler(5);
        assert_eq!(
            s.request_transition(0, t0),
            RequestOutcome::Ignored(IgnoreReason::SameIndex)
        );
        assert!(!s.is_animating());
        assert_eq!(s.tick(t0 + STEP * 4), None);
    }

    #[test]
    fn reduced_motion_commits_synchronously() {
        let t0 = Instant::now();
        let mut s = scheduler(5).with_reduced_motion(true);
        assert_eq!(
            s.request_transition(3, t0),
            RequestOutcome::Committed(Commit { from: 0, index: 3 })
        );
        assert_eq!(s.current(), 3);
        assert!(!s.is_busy());
        assert_eq!(s.progress(t0), None);
    }

    #[test]
    fn unready_target_parks_until_decode_settles() {
        let t0 = Instant::now();
        let mut readiness = ReadinessSet::new(4);
        readiness.mark_ready(0);
        let mut s = scheduler(4).with_readiness(readiness);

        assert_eq!(
            s.request_transition(2, t0),
            RequestOutcome::AwaitingDecode { target: 2 }
        );
        assert!(s.is_busy());
        assert_eq!(
            s.request_transition(1, t0),
            RequestOutcome::Ignored(IgnoreReason::Busy)
        );

        // a different item settling does not release the parked request
        assert_eq!(s.decode_settled(3, true, t0), None);

        let later = t0 + Duration::from_millis(40);
        assert_eq!(
            s.decode_settled(2, false, later),
            Some(RequestOutcome::Started {
                target: 2,
                duration: STEP
            })
        );
        assert!(!s.readiness().unwrap().is_ready(2));
        assert!(s.readiness().unwrap().is_ready(3));
        assert_eq!(s.tick(later + STEP), Some(Commit { from: 0, index: 2 }));
    }

    #[test]
    fn teardown_clears_pending_deadline() {
        let t0 = Instant::now();
        let mut s = scheduler(3);
        s.request_transition(1, t0);
        s.teardown();
        assert_eq!(s.tick(t0 + STEP), None);
        assert_eq!(s.current(), 0);
        assert_eq!(
            s.request_transition(2, t0),
            RequestOutcome::Ignored(IgnoreReason::TornDown)
        );
    }

    #[test]
    fn shrinking_count_reclamps_and_abandons_stale_target() {
        let t0 = Instant::now();
        let mut s = scheduler(6);
        s.jump_to(3);
        s.request_transition(5, t0);
        assert_eq!(s.set_count(4), None);
        assert!(!s.is_busy());
        assert_eq!(s.set_count(2), Some(Commit { from: 3, index: 1 }));
        assert_eq!(s.current(), 1);
    }

    #[test]
    fn snap_guard_waits_two_frames() {
        let mut guard = SnapGuard::new();
        assert!(guard.transitions_enabled());
        guard.engage();
        assert!(!guard.transitions_enabled());
        assert!(!guard.on_animation_frame());
        assert!(!guard.transitions_enabled());
        assert!(guard.on_animation_frame());
        assert!(guard.transitions_enabled());
        assert!(!guard.on_animation_frame());
    }
}
