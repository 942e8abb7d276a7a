//! Cyclic hero video playlist
//!
//! Three slots (previous, current, next) sit side by side on a track parked
//! at -100%. Sliding moves the track to -200% or 0%, and once the slide
//! commits the playlist index wraps and the track snaps back to -100% with
//! transitions off, guarded by [`SnapGuard`]. Slot keys combine the slot
//! role and the clip source, so the current slot always shows
//! `videos[index]`.

use std::fmt;
use std::time::{Duration, Instant};

use crate::engine::{
    Commit, DurationPolicy, IgnoreReason, RequestOutcome, SlideScheduler,
    SnapGuard, TrackTransform,
};
use crate::infra::constants::hero;
use crate::messages::{Direction, NavKey};

/// Track position index of each slot. The offset of position `p` is
/// `-100% * p`.
const PREV_POSITION: usize = 0;
const REST_POSITION: usize = 1;
const NEXT_POSITION: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotRole {
    Previous,
    Current,
    Next,
}

impl fmt::Display for SlotRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let role = match self {
            SlotRole::Previous => "prev",
            SlotRole::Current => "current",
            SlotRole::Next => "next",
        };
        f.write_str(role)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoSlot {
    pub role: SlotRole,
    pub src: String,
    /// Render key; changes whenever the slot's clip changes.
    pub key: String,
}

impl VideoSlot {
    fn new(role: SlotRole, src: &str) -> Self {
        Self {
            role,
            src: src.to_string(),
            key: format!("{role}-{src}"),
        }
    }
}

/// What the hero renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeroView {
    /// Static poster for reduced motion or an empty playlist.
    Poster { poster: Option<String> },
    Playlist { slots: [VideoSlot; 3] },
}

#[derive(Debug, Clone)]
pub struct HeroPlaylist {
    videos: Vec<String>,
    poster: Option<String>,
    index: usize,
    track: SlideScheduler,
    guard: SnapGuard,
    reduced_motion: bool,
    container_width: f32,
}

impl HeroPlaylist {
    pub fn new(videos: Vec<String>, poster: Option<String>) -> Self {
        let policy =
            DurationPolicy::fixed(Duration::from_millis(hero::DURATION_MS));
        let mut track = SlideScheduler::new(3, policy);
        track.jump_to(REST_POSITION);
        Self {
            videos,
            poster,
            index: 0,
            track,
            guard: SnapGuard::new(),
            reduced_motion: false,
            container_width: 0.0,
        }
    }

    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    pub fn shows_poster(&self) -> bool {
        self.reduced_motion || self.videos.is_empty()
    }

    /// Sliding needs at least two clips and the animated view.
    pub fn can_slide(&self) -> bool {
        !self.shows_poster() && self.videos.len() >= 2
    }

    pub fn is_animating(&self) -> bool {
        self.track.is_animating()
    }

    pub fn current_video(&self) -> Option<&str> {
        self.videos.get(self.index).map(String::as_str)
    }

    pub fn view(&self) -> HeroView {
        if self.shows_poster() {
            return HeroView::Poster {
                poster: self.poster.clone(),
            };
        }
        let total = self.videos.len();
        let prev = (self.index + total - 1) % total;
        let next = (self.index + 1) % total;
        HeroView::Playlist {
            slots: [
                VideoSlot::new(SlotRole::Previous, &self.videos[prev]),
                VideoSlot::new(SlotRole::Current, &self.videos[self.index]),
                VideoSlot::new(SlotRole::Next, &self.videos[next]),
            ],
        }
    }

    /// Container width from the mount measurement or a resize notification.
    pub fn measure(&mut self, width: f32) {
        self.container_width = if width.is_finite() {
            width.max(0.0)
        } else {
            0.0
        };
    }

    pub fn offset_pct(&self) -> f32 {
        match self.track.visual_index() {
            PREV_POSITION => hero::PREV_OFFSET_PCT,
            NEXT_POSITION => hero::NEXT_OFFSET_PCT,
            _ => hero::REST_OFFSET_PCT,
        }
    }

    pub fn offset_px(&self) -> f32 {
        self.offset_pct() / 100.0 * self.container_width
    }

    fn transition(&self) -> Option<Duration> {
        self.guard
            .transitions_enabled()
            .then(|| Duration::from_millis(hero::DURATION_MS))
    }

    pub fn track_transform(&self) -> TrackTransform {
        TrackTransform {
            offset: self.offset_px(),
            transition: self.transition(),
        }
    }

    /// Brand backdrop trails the track at half speed.
    pub fn brand_transform(&self) -> TrackTransform {
        TrackTransform {
            offset: self.offset_px() * hero::BRAND_PARALLAX_FACTOR,
            transition: self.transition(),
        }
    }

    pub fn next(&mut self, now: Instant) -> RequestOutcome {
        self.slide(Direction::Right, now)
    }

    pub fn prev(&mut self, now: Instant) -> RequestOutcome {
        self.slide(Direction::Left, now)
    }

    /// The current clip finished playing.
    pub fn on_video_ended(&mut self, now: Instant) -> RequestOutcome {
        self.next(now)
    }

    /// Playback start can be refused by the platform (autoplay policy).
    /// The clip keeps its poster frame.
    pub fn on_play_failed(&self, reason: &str) {
        log::debug!("hero playback did not start: {reason}");
    }

    /// Arrow keys navigate. Returns true when the key was handled and its
    /// default must be suppressed.
    pub fn on_key(&mut self, key: NavKey, now: Instant) -> bool {
        match key.direction() {
            Some(direction) => {
                self.slide(direction, now);
                true
            }
            None => false,
        }
    }

    fn slide(&mut self, direction: Direction, now: Instant) -> RequestOutcome {
        if !self.can_slide() {
            return RequestOutcome::Ignored(IgnoreReason::Disabled);
        }
        if self.guard.is_engaged() {
            return RequestOutcome::Ignored(IgnoreReason::Busy);
        }
        let target = match direction {
            Direction::Left => PREV_POSITION,
            Direction::Right => NEXT_POSITION,
        };
        self.track.request_transition(target as isize, now)
    }

    /// Poll with the frame time. Returns the new playlist index when a
    /// slide commits.
    pub fn tick(&mut self, now: Instant) -> Option<usize> {
        let commit = self.track.tick(now)?;
        Some(self.wrap(commit))
    }

    pub fn transition_ended(&mut self) -> Option<usize> {
        let commit = self.track.transition_ended()?;
        Some(self.wrap(commit))
    }

    /// Feed animation frames while the snap guard is engaged. Returns true
    /// once transitions are back on.
    pub fn on_animation_frame(&mut self) -> bool {
        self.guard.on_animation_frame()
    }

    pub fn teardown(&mut self) {
        self.track.teardown();
    }

    fn wrap(&mut self, commit: Commit) -> usize {
        let total = self.videos.len().max(1);
        self.index = match commit.index {
            NEXT_POSITION => (self.index + 1) % total,
            PREV_POSITION => (self.index + total - 1) % total,
            _ => self.index,
        };
        self.track.jump_to(REST_POSITION);
        self.guard.engage();
        log::trace!("hero playlist now at clip {}", self.index);
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SLIDE: Duration = Duration::from_millis(hero::DURATION_MS);

    fn clips() -> Vec<String> {
        vec!["a.mp4".into(), "b.mp4".into(), "c.mp4".into()]
    }

    fn settle_guard(hero: &mut HeroPlaylist) {
        while !hero.on_animation_frame() {}
    }

    #[test]
    fn slots_follow_index_through_a_slide() {
        let t0 = Instant::now();
        let mut hero = HeroPlaylist::new(clips(), None);
        hero.measure(800.0);

        assert_eq!(hero.offset_pct(), -100.0);
        let HeroView::Playlist { slots } = hero.view() else {
            panic!("expected playlist view");
        };
        assert_eq!(slots[0].src, "c.mp4");
        assert_eq!(slots[1].key, "current-a.mp4");
        assert_eq!(slots[2].src, "b.mp4");

        assert!(matches!(hero.next(t0), RequestOutcome::Started { .. }));
        assert_eq!(hero.offset_pct(), -200.0);
        assert_eq!(hero.track_transform().offset, -1_600.0);
        assert_eq!(hero.brand_transform().offset, -800.0);
        assert_eq!(hero.tick(t0 + SLIDE / 2), None);
        assert_eq!(hero.index(), 0);

        assert_eq!(hero.tick(t0 + SLIDE), Some(1));
        assert_eq!(hero.current_video(), Some("b.mp4"));
        let HeroView::Playlist { slots } = hero.view() else {
            panic!("expected playlist view");
        };
        assert_eq!(slots[0].key, "prev-a.mp4");
        assert_eq!(slots[1].key, "current-b.mp4");
        assert_eq!(slots[2].key, "next-c.mp4");

        // snapped back to rest without a transition
        let snapped = hero.track_transform();
        assert_eq!(snapped.offset, -800.0);
        assert_eq!(snapped.transition, None);
    }

    #[test]
    fn rejected_autoplay_leaves_playlist_usable() {
        let t0 = Instant::now();
        let mut hero = HeroPlaylist::new(clips(), None);
        hero.on_play_failed("NotAllowedError");
        assert_eq!(hero.current_video(), Some("a.mp4"));
        assert!(matches!(hero.next(t0), RequestOutcome::Started { .. }));
    }

    #[test]
    fn snap_guard_blocks_requests_for_two_frames() {
        let t0 = Instant::now();
        let mut hero = HeroPlaylist::new(clips(), None);
        hero.next(t0);
        hero.tick(t0 + SLIDE);

        assert_eq!(
            hero.next(t0 + SLIDE),
            RequestOutcome::Ignored(IgnoreReason::Busy)
        );
        assert!(!hero.on_animation_frame());
        assert!(hero.on_animation_frame());
        assert_eq!(hero.track_transform().transition, Some(SLIDE));
        assert!(matches!(
            hero.prev(t0 + SLIDE),
            RequestOutcome::Started { .. }
        ));
    }

    #[test]
    fn prev_wraps_backwards() {
        let t0 = Instant::now();
        let mut hero = HeroPlaylist::new(clips(), None);
        hero.prev(t0);
        assert_eq!(hero.offset_pct(), 0.0);
        assert_eq!(hero.transition_ended(), Some(2));
        settle_guard(&mut hero);
        assert_eq!(hero.current_video(), Some("c.mp4"));
    }

    #[test]
    fn requests_during_slide_are_dropped() {
        let t0 = Instant::now();
        let mut hero = HeroPlaylist::new(clips(), None);
        hero.next(t0);
        assert_eq!(
            hero.on_video_ended(t0 + Duration::from_millis(10)),
            RequestOutcome::Ignored(IgnoreReason::Busy)
        );
        assert!(hero.on_key(NavKey::ArrowLeft, t0));
        assert_eq!(hero.tick(t0 + SLIDE), Some(1));
    }

    #[test]
    fn poster_for_reduced_motion_or_empty_playlist() {
        let t0 = Instant::now();
        let mut reduced = HeroPlaylist::new(clips(), Some("poster.jpg".into()))
            .with_reduced_motion(true);
        assert_eq!(
            reduced.view(),
            HeroView::Poster {
                poster: Some("poster.jpg".into())
            }
        );
        assert_eq!(
            reduced.next(t0),
            RequestOutcome::Ignored(IgnoreReason::Disabled)
        );

        let empty = HeroPlaylist::new(Vec::new(), None);
        assert!(empty.shows_poster());
    }

    #[test]
    fn single_clip_does_not_slide() {
        let t0 = Instant::now();
        let mut hero = HeroPlaylist::new(vec!["only.mp4".into()], None);
        assert_eq!(
            hero.on_video_ended(t0),
            RequestOutcome::Ignored(IgnoreReason::Disabled)
        );
        let HeroView::Playlist { slots } = hero.view() else {
            panic!("expected playlist view");
        };
        assert!(slots.iter().all(|slot| slot.src == "only.mp4"));
        assert!(!hero.on_key(NavKey::Other, t0));
    }
}
