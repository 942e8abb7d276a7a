//! Scroll-driven reveal, in-view and parallax effects
//!
//! A [`ScrollEffects`] value is created when a view mounts, receives one
//! registration per observed element, and is torn down when the view goes
//! away. Nothing here is global: two mounted views own two independent
//! instances even though both watch the same window.
//!
//! Intersections are computed from document-space geometry. The platform
//! forwards the viewport on scroll and resize; parallax recomputation is
//! throttled to one pass per animation frame.

use std::collections::HashMap;
use std::time::Duration;

use crate::infra::constants::{parallax, reveal};

/// Handle returned by the `register_*` calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub usize);

/// Window scroll position and height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub scroll_top: f32,
    pub height: f32,
}

/// Element box in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementRect {
    pub top: f32,
    pub height: f32,
}

/// Intersection trigger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Visible fraction of the element needed to count as intersecting.
    pub threshold: f32,
    /// Bottom root margin as a signed fraction of the viewport height.
    pub bottom_margin: f32,
}

impl ObserverOptions {
    pub const REVEAL: Self = Self {
        threshold: reveal::THRESHOLD,
        bottom_margin: reveal::BOTTOM_MARGIN,
    };

    pub const IN_VIEW: Self = Self {
        threshold: reveal::IN_VIEW_THRESHOLD,
        bottom_margin: reveal::IN_VIEW_BOTTOM_MARGIN,
    };

    pub fn qualifies(&self, viewport: Viewport, rect: ElementRect) -> bool {
        let ratio = intersection_ratio(viewport, rect, self.bottom_margin);
        ratio > 0.0 && ratio >= self.threshold
    }
}

/// Fraction of `rect` inside the viewport after shrinking (negative margin)
/// or growing its bottom edge.
pub fn intersection_ratio(
    viewport: Viewport,
    rect: ElementRect,
    bottom_margin: f32,
) -> f32 {
    let root_top = viewport.scroll_top;
    let root_bottom = root_top + viewport.height * (1.0 + bottom_margin);
    if root_bottom <= root_top {
        return 0.0;
    }

    if rect.height <= 0.0 {
        let inside = rect.top >= root_top && rect.top < root_bottom;
        return if inside { 1.0 } else { 0.0 };
    }

    let overlap = (rect.top + rect.height).min(root_bottom)
        - rect.top.max(root_top);
    (overlap.max(0.0) / rect.height).clamp(0.0, 1.0)
}

/// One-shot reveal lifecycle. There is no transition out of `Triggered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Watching,
    Triggered,
}

/// Groups sibling reveals so each gets an incremental delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StaggerScope {
    pub id: u32,
    /// Delay added per sibling. Zero falls back to the default step.
    pub step: Duration,
}

impl StaggerScope {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            step: Duration::from_millis(reveal::STAGGER_STEP_MS),
        }
    }

    pub fn with_step(mut self, step: Duration) -> Self {
        self.step = step;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RevealOptions {
    pub scope: Option<StaggerScope>,
    /// Explicit delay; wins over the stagger delay.
    pub delay: Option<Duration>,
    pub duration: Option<Duration>,
}

/// Timing handed to the renderer when a reveal plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealTiming {
    pub delay: Duration,
    pub duration: Option<Duration>,
}

/// Platform capabilities at mount time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectsEnvironment {
    pub reduced_motion: bool,
    pub observer_available: bool,
}

impl Default for EffectsEnvironment {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            observer_available: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EffectChange {
    Revealed { id: ElementId, timing: RevealTiming },
    InView { id: ElementId, in_view: bool },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxOffset {
    pub id: ElementId,
    /// Vertical translation in pixels.
    pub offset: f32,
}

/// Result of a scroll or resize notification.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScrollUpdate {
    pub changes: Vec<EffectChange>,
    /// The caller should schedule one animation frame and forward it to
    /// [`ScrollEffects::on_animation_frame`].
    pub request_frame: bool,
}

/// Parallax offset for an element: progress through the viewport mapped to
/// `(progress - 0.5) * speed * RANGE_PX`.
pub fn parallax_offset(
    viewport: Viewport,
    rect: ElementRect,
    speed: f32,
) -> f32 {
    let span = viewport.height + rect.height;
    if span <= 0.0 {
        return 0.0;
    }
    let progress = ((viewport.scroll_top + viewport.height - rect.top) / span)
        .clamp(0.0, 1.0);
    (progress - 0.5) * speed * parallax::RANGE_PX
}

#[derive(Debug, Clone)]
struct RevealEntry {
    id: ElementId,
    rect: ElementRect,
    state: RevealState,
    timing: RevealTiming,
}

#[derive(Debug, Clone)]
struct InViewEntry {
    id: ElementId,
    rect: ElementRect,
    in_view: bool,
}

#[derive(Debug, Clone)]
struct ParallaxEntry {
    id: ElementId,
    rect: ElementRect,
    speed: f32,
    offset: f32,
}

#[derive(Debug, Clone)]
pub struct ScrollEffects {
    env: EffectsEnvironment,
    next_id: usize,
    scope_sizes: HashMap<u32, u32>,
    reveals: Vec<RevealEntry>,
    in_view: Vec<InViewEntry>,
    parallax: Vec<ParallaxEntry>,
    viewport: Viewport,
    frame_pending: bool,
    torn_down: bool,
}

impl ScrollEffects {
    pub fn new(env: EffectsEnvironment) -> Self {
        if !env.observer_available {
            log::debug!(
                "intersection observation unavailable; effects assume visible"
            );
        }
        Self {
            env,
            next_id: 0,
            scope_sizes: HashMap::new(),
            reveals: Vec::new(),
            in_view: Vec::new(),
            parallax: Vec::new(),
            viewport: Viewport::default(),
            frame_pending: false,
            torn_down: false,
        }
    }

    /// Reduced motion or no observer: reveals and in-view elements are
    /// settled at registration.
    fn assume_visible(&self) -> bool {
        self.env.reduced_motion || !self.env.observer_available
    }

    fn allocate(&mut self) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn register_reveal(
        &mut self,
        rect: ElementRect,
        options: RevealOptions,
    ) -> ElementId {
        let id = self.allocate();

        let stagger_delay = options.scope.map(|scope| {
            let index = self.scope_sizes.entry(scope.id).or_insert(0);
            let step = if scope.step.is_zero() {
                Duration::from_millis(reveal::STAGGER_STEP_MS)
            } else {
                scope.step
            };
            let delay = step.saturating_mul(*index);
            *index += 1;
            delay
        });

        let timing = RevealTiming {
            delay: options.delay.or(stagger_delay).unwrap_or_default(),
            duration: options.duration,
        };
        let state = if self.assume_visible() {
            RevealState::Triggered
        } else {
            RevealState::Watching
        };

        self.reveals.push(RevealEntry {
            id,
            rect,
            state,
            timing,
        });
        id
    }

    pub fn register_in_view(&mut self, rect: ElementRect) -> ElementId {
        let id = self.allocate();
        let in_view = self.assume_visible();
        self.in_view.push(InViewEntry { id, rect, in_view });
        id
    }

    /// `speed` of `None`, zero or non-finite uses the default speed.
    pub fn register_parallax(
        &mut self,
        rect: ElementRect,
        speed: Option<f32>,
    ) -> ElementId {
        let id = self.allocate();
        let speed = speed
            .filter(|s| s.is_finite() && *s != 0.0)
            .unwrap_or(parallax::DEFAULT_SPEED);
        self.parallax.push(ParallaxEntry {
            id,
            rect,
            speed,
            offset: 0.0,
        });
        id
    }

    /// Re-measure an element after layout.
    pub fn update_rect(&mut self, id: ElementId, rect: ElementRect) {
        if let Some(entry) = self.reveals.iter_mut().find(|e| e.id == id) {
            entry.rect = rect;
        } else if let Some(entry) = self.in_view.iter_mut().find(|e| e.id == id)
        {
            entry.rect = rect;
        } else if let Some(entry) =
            self.parallax.iter_mut().find(|e| e.id == id)
        {
            entry.rect = rect;
        }
    }

    pub fn reveal_state(&self, id: ElementId) -> Option<RevealState> {
        self.reveals.iter().find(|e| e.id == id).map(|e| e.state)
    }

    pub fn reveal_timing(&self, id: ElementId) -> Option<RevealTiming> {
        self.reveals.iter().find(|e| e.id == id).map(|e| e.timing)
    }

    pub fn is_in_view(&self, id: ElementId) -> Option<bool> {
        self.in_view.iter().find(|e| e.id == id).map(|e| e.in_view)
    }

    pub fn parallax_offset(&self, id: ElementId) -> Option<f32> {
        self.parallax.iter().find(|e| e.id == id).map(|e| e.offset)
    }

    /// Reveals still being observed.
    pub fn watching_count(&self) -> usize {
        self.reveals
            .iter()
            .filter(|e| e.state == RevealState::Watching)
            .count()
    }

    /// Initial pass right after registration.
    pub fn mount(&mut self, viewport: Viewport) -> ScrollUpdate {
        self.on_scroll(viewport)
    }

    pub fn on_scroll(&mut self, viewport: Viewport) -> ScrollUpdate {
        if self.torn_down {
            return ScrollUpdate::default();
        }
        self.viewport = viewport;
        let changes = self.intersect();
        ScrollUpdate {
            changes,
            request_frame: self.schedule_frame(),
        }
    }

    pub fn on_resize(&mut self, viewport: Viewport) -> ScrollUpdate {
        self.on_scroll(viewport)
    }

    /// Run the pending parallax pass. Returns offsets for every parallax
    /// element, or nothing when no pass was pending.
    pub fn on_animation_frame(&mut self) -> Vec<ParallaxOffset> {
        if !self.frame_pending || self.torn_down {
            return Vec::new();
        }
        self.frame_pending = false;

        let viewport = self.viewport;
        self.parallax
            .iter_mut()
            .map(|entry| {
                entry.offset =
                    parallax_offset(viewport, entry.rect, entry.speed);
                ParallaxOffset {
                    id: entry.id,
                    offset: entry.offset,
                }
            })
            .collect()
    }

    /// Disconnect everything. Later notifications are ignored.
    pub fn teardown(&mut self) {
        self.torn_down = true;
        self.frame_pending = false;
        self.reveals.clear();
        self.in_view.clear();
        self.parallax.clear();
        self.scope_sizes.clear();
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    fn schedule_frame(&mut self) -> bool {
        if self.env.reduced_motion
            || self.parallax.is_empty()
            || self.frame_pending
        {
            return false;
        }
        self.frame_pending = true;
        true
    }

    fn intersect(&mut self) -> Vec<EffectChange> {
        if self.assume_visible() {
            return Vec::new();
        }
        let viewport = self.viewport;
        let mut changes = Vec::new();

        for entry in self
            .reveals
            .iter_mut()
            .filter(|e| e.state == RevealState::Watching)
        {
            if ObserverOptions::REVEAL.qualifies(viewport, entry.rect) {
                entry.state = RevealState::Triggered;
                changes.push(EffectChange::Revealed {
                    id: entry.id,
                    timing: entry.timing,
                });
            }
        }

        for entry in &mut self.in_view {
            let in_view =
                ObserverOptions::IN_VIEW.qualifies(viewport, entry.rect);
            if in_view != entry.in_view {
                entry.in_view = in_view;
                changes.push(EffectChange::InView {
                    id: entry.id,
                    in_view,
                });
            }
        }
        changes
    }
}

impl Default for ScrollEffects {
    fn default() -> Self {
        Self::new(EffectsEnvironment::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT_H: f32 = 1_000.0;

    fn at(scroll_top: f32) -> Viewport {
        Viewport {
            scroll_top,
            height: VIEWPORT_H,
        }
    }

    fn rect(top: f32, height: f32) -> ElementRect {
        ElementRect { top, height }
    }

    #[test]
    fn ratio_honours_bottom_margin() {
        // root bottom is 940 with a -6% margin
        let r = rect(900.0, 100.0);
        assert!((intersection_ratio(at(0.0), r, 0.0) - 1.0).abs() < 1e-6);
        assert!((intersection_ratio(at(0.0), r, -0.06) - 0.4).abs() < 1e-4);
        assert_eq!(intersection_ratio(at(0.0), rect(950.0, 10.0), -0.06), 0.0);
    }

    #[test]
    fn stagger_delays_follow_scope_order() {
        let mut fx = ScrollEffects::default();
        let scope = StaggerScope::new(1);
        let other = StaggerScope::new(2).with_step(Duration::from_millis(80));

        let a = fx.register_reveal(rect(0.0, 10.0), RevealOptions {
            scope: Some(scope),
            ..Default::default()
        });
        let b = fx.register_reveal(rect(0.0, 10.0), RevealOptions {
            scope: Some(scope),
            ..Default::default()
        });
        let c = fx.register_reveal(rect(0.0, 10.0), RevealOptions {
            scope: Some(other),
            ..Default::default()
        });
        let d = fx.register_reveal(rect(0.0, 10.0), RevealOptions {
            scope: Some(other),
            delay: Some(Duration::from_millis(5)),
            duration: Some(Duration::from_millis(900)),
        });
        let e = fx.register_reveal(rect(0.0, 10.0), RevealOptions {
            scope: Some(scope),
            ..Default::default()
        });

        let delay = |id| fx.reveal_timing(id).unwrap().delay.as_millis();
        assert_eq!(delay(a), 0);
        assert_eq!(delay(b), 120);
        assert_eq!(delay(c), 0);
        assert_eq!(delay(d), 5);
        assert_eq!(delay(e), 240);
        assert_eq!(
            fx.reveal_timing(d).unwrap().duration,
            Some(Duration::from_millis(900))
        );
    }

    #[test]
    fn reveal_triggers_once_and_stays() {
        let mut fx = ScrollEffects::default();
        let id =
            fx.register_reveal(rect(1_500.0, 200.0), RevealOptions::default());
        assert!(fx.mount(at(0.0)).changes.is_empty());
        assert_eq!(fx.reveal_state(id), Some(RevealState::Watching));

        let update = fx.on_scroll(at(600.0));
        assert_eq!(
            update.changes,
            vec![EffectChange::Revealed {
                id,
                timing: RevealTiming::default()
            }]
        );
        assert_eq!(fx.watching_count(), 0);

        assert!(fx.on_scroll(at(0.0)).changes.is_empty());
        assert_eq!(fx.reveal_state(id), Some(RevealState::Triggered));
    }

    #[test]
    fn in_view_toggles_both_ways() {
        let mut fx = ScrollEffects::default();
        let id = fx.register_in_view(rect(1_200.0, 400.0));
        fx.mount(at(0.0));
        assert_eq!(fx.is_in_view(id), Some(false));

        // needs 140px of the 400px box above the root bottom at +950
        assert!(fx.on_scroll(at(380.0)).changes.is_empty());
        let on = fx.on_scroll(at(400.0));
        assert_eq!(
            on.changes,
            vec![EffectChange::InView { id, in_view: true }]
        );

        let off = fx.on_scroll(at(0.0));
        assert_eq!(
            off.changes,
            vec![EffectChange::InView { id, in_view: false }]
        );
    }

    #[test]
    fn moved_element_is_measured_at_its_new_rect() {
        let mut fx = ScrollEffects::default();
        let id = fx.register_in_view(rect(1_200.0, 400.0));
        fx.mount(at(400.0));
        assert_eq!(fx.is_in_view(id), Some(true));

        fx.update_rect(id, rect(5_000.0, 400.0));
        let update = fx.on_scroll(at(400.0));
        assert_eq!(
            update.changes,
            vec![EffectChange::InView { id, in_view: false }]
        );
    }

    #[test]
    fn parallax_is_throttled_to_one_pass_per_frame() {
        let mut fx = ScrollEffects::default();
        let id = fx.register_parallax(rect(1_000.0, 500.0), None);
        let other = fx.register_parallax(rect(1_000.0, 500.0), Some(1.0));

        assert!(fx.on_scroll(at(0.0)).request_frame);
        assert!(!fx.on_scroll(at(250.0)).request_frame);
        assert!(!fx.on_resize(at(750.0)).request_frame);

        let offsets = fx.on_animation_frame();
        assert_eq!(offsets.len(), 2);
        // progress = (750 + 1000 - 1000) / 1500 = 0.5
        assert!(fx.parallax_offset(id).unwrap().abs() < 1e-4);
        assert!(fx.on_animation_frame().is_empty());

        fx.on_scroll(at(1_500.0));
        fx.on_animation_frame();
        // progress clamps to 1.0
        let expected = 0.5 * parallax::DEFAULT_SPEED * parallax::RANGE_PX;
        assert!((fx.parallax_offset(id).unwrap() - expected).abs() < 1e-4);
        assert!((fx.parallax_offset(other).unwrap() - 120.0).abs() < 1e-4);
    }

    #[test]
    fn reduced_motion_settles_everything_at_registration() {
        let mut fx = ScrollEffects::new(EffectsEnvironment {
            reduced_motion: true,
            observer_available: true,
        });
        let reveal =
            fx.register_reveal(rect(9_000.0, 10.0), RevealOptions::default());
        let section = fx.register_in_view(rect(9_000.0, 10.0));
        let layer = fx.register_parallax(rect(0.0, 10.0), None);

        assert_eq!(fx.reveal_state(reveal), Some(RevealState::Triggered));
        assert_eq!(fx.is_in_view(section), Some(true));
        let update = fx.on_scroll(at(0.0));
        assert!(!update.request_frame);
        assert!(fx.on_animation_frame().is_empty());
        assert_eq!(fx.parallax_offset(layer), Some(0.0));
    }

    #[test]
    fn missing_observer_assumes_visible_but_keeps_parallax() {
        let mut fx = ScrollEffects::new(EffectsEnvironment {
            reduced_motion: false,
            observer_available: false,
        });
        let reveal =
            fx.register_reveal(rect(9_000.0, 10.0), RevealOptions::default());
        let section = fx.register_in_view(rect(9_000.0, 10.0));
        fx.register_parallax(rect(0.0, 10.0), None);

        assert_eq!(fx.reveal_state(reveal), Some(RevealState::Triggered));
        assert_eq!(fx.is_in_view(section), Some(true));
        assert!(fx.on_scroll(at(0.0)).request_frame);
    }

    #[test]
    fn teardown_disconnects() {
        let mut fx = ScrollEffects::default();
        fx.register_reveal(rect(0.0, 10.0), RevealOptions::default());
        fx.register_parallax(rect(0.0, 10.0), None);
        fx.on_scroll(at(0.0));
        fx.teardown();

        assert!(fx.on_animation_frame().is_empty());
        assert_eq!(fx.on_scroll(at(0.0)), ScrollUpdate::default());
        assert_eq!(fx.watching_count(), 0);
    }
}
