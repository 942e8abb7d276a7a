//! Drag and wheel adapter for native horizontal scroll tracks
//!
//! The track itself scrolls natively; this adapter only decides where it
//! should be. Wheel deltas that are mostly vertical become horizontal
//! scroll, a captured pointer drags the track, and arrow keys start a
//! smooth programmatic scroll advanced by [`DragScrollAdapter::tick`].

use std::time::{Duration, Instant};

use super::animator::SnapAnimator;
use super::easing::EasingFunction;
use crate::infra::constants::rail;
use crate::messages::{Direction, NavKey, PointerMessage, RailMessage};

/// Native scroll geometry of the track.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_left: f32,
    pub client_width: f32,
    pub scroll_width: f32,
}

impl ScrollMetrics {
    pub fn max_scroll_left(&self) -> f32 {
        (self.scroll_width - self.client_width).max(0.0)
    }

    pub fn edges(&self) -> Edges {
        Edges {
            can_scroll_left: self.scroll_left > rail::EDGE_EPSILON,
            can_scroll_right: self.scroll_left + self.client_width
                < self.scroll_width - rail::EDGE_EPSILON,
        }
    }
}

/// Affordance visibility. Scrolling by hand stays available either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Edges {
    pub can_scroll_left: bool,
    pub can_scroll_right: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Handled here; the platform default must be suppressed.
    Consumed,
    PassThrough,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragState {
    pointer_id: i32,
    start_x: f32,
    start_scroll_left: f32,
}

#[derive(Debug, Clone)]
pub struct DragScrollAdapter {
    metrics: ScrollMetrics,
    edges: Edges,
    drag: Option<DragState>,
    smooth: SnapAnimator,
    reduced_motion: bool,
    key_fraction: f32,
}

impl DragScrollAdapter {
    pub fn new(client_width: f32, scroll_width: f32) -> Self {
        let metrics = ScrollMetrics {
            scroll_left: 0.0,
            client_width,
            scroll_width,
        };
        Self {
            edges: metrics.edges(),
            metrics,
            drag: None,
            smooth: SnapAnimator::new(),
            reduced_motion: false,
            key_fraction: rail::KEY_SCROLL_FRACTION,
        }
    }

    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }

    /// Fraction of the visible width moved by arrow keys and
    /// [`DragScrollAdapter::scroll_page`].
    pub fn with_key_fraction(mut self, fraction: f32) -> Self {
        self.key_fraction = fraction;
        self
    }

    pub fn metrics(&self) -> ScrollMetrics {
        self.metrics
    }

    pub fn scroll_left(&self) -> f32 {
        self.metrics.scroll_left
    }

    pub fn edges(&self) -> Edges {
        self.edges
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn is_smooth_scrolling(&self) -> bool {
        self.smooth.is_active()
    }

    /// Dispatch one platform input. `Consumed` means the platform default
    /// must be suppressed.
    pub fn update(&mut self, message: RailMessage) -> EventOutcome {
        match message {
            RailMessage::Wheel { delta_x, delta_y } => {
                return self.on_wheel(delta_x, delta_y);
            }
            RailMessage::Pointer(pointer) => self.on_pointer(pointer),
            RailMessage::Scrolled { scroll_left } => {
                self.on_scroll(scroll_left);
            }
            RailMessage::Resized {
                client_width,
                scroll_width,
            } => {
                self.resize(client_width, scroll_width);
            }
            RailMessage::Key(key, now) => {
                if self.on_key(key, now) {
                    return EventOutcome::Consumed;
                }
            }
            RailMessage::Tick(now) => {
                self.tick(now);
            }
        }
        EventOutcome::PassThrough
    }

    /// The track reported a native scroll position.
    pub fn on_scroll(&mut self, scroll_left: f32) -> Edges {
        self.set_scroll_left(scroll_left)
    }

    pub fn resize(&mut self, client_width: f32, scroll_width: f32) -> Edges {
        self.metrics.client_width = client_width.max(0.0);
        self.metrics.scroll_width = scroll_width.max(0.0);
        self.set_scroll_left(self.metrics.scroll_left)
    }

    pub fn on_wheel(&mut self, delta_x: f32, delta_y: f32) -> EventOutcome {
        if delta_x.abs() < delta_y.abs() {
            self.smooth.cancel();
            self.set_scroll_left(self.metrics.scroll_left + delta_y);
            EventOutcome::Consumed
        } else {
            EventOutcome::PassThrough
        }
    }

    pub fn on_pointer(&mut self, message: PointerMessage) {
        match message {
            PointerMessage::Down { id, x } => self.pointer_down(id, x),
            PointerMessage::Move { id, x } => {
                self.pointer_move(id, x);
            }
            PointerMessage::Up { id } | PointerMessage::Cancel { id } => {
                self.release(id);
            }
        }
    }

    /// Capture `pointer_id` and start dragging.
    pub fn pointer_down(&mut self, pointer_id: i32, x: f32) {
        self.smooth.cancel();
        self.drag = Some(DragState {
            pointer_id,
            start_x: x,
            start_scroll_left: self.metrics.scroll_left,
        });
    }

    /// Returns the new scroll position when the move belongs to the
    /// captured pointer.
    pub fn pointer_move(&mut self, pointer_id: i32, x: f32) -> Option<f32> {
        let drag = self.drag.filter(|d| d.pointer_id == pointer_id)?;
        self.set_scroll_left(drag.start_scroll_left - (x - drag.start_x));
        Some(self.metrics.scroll_left)
    }

    /// Release capture on pointer up or cancel.
    pub fn release(&mut self, pointer_id: i32) {
        if self.drag.is_some_and(|d| d.pointer_id == pointer_id) {
            self.drag = None;
        }
    }

    /// Arrow keys scroll a page in their direction. Returns true when the
    /// key was handled.
    pub fn on_key(&mut self, key: NavKey, now: Instant) -> bool {
        match key.direction() {
            Some(direction) => {
                self.scroll_page(direction, now);
                true
            }
            None => false,
        }
    }

    /// Scroll by the configured fraction of the visible width.
    pub fn scroll_page(&mut self, direction: Direction, now: Instant) {
        self.scroll_by_fraction(direction, self.key_fraction, now);
    }

    pub fn scroll_by_fraction(
        &mut self,
        direction: Direction,
        fraction: f32,
        now: Instant,
    ) {
        let amount = (self.metrics.client_width * fraction).round();
        self.scroll_by(direction.sign() * amount, now);
    }

    /// Smooth programmatic scroll. Always callable regardless of
    /// [`Edges`]; immediate under reduced motion.
    pub fn scroll_by(&mut self, delta: f32, now: Instant) {
        let from = self.metrics.scroll_left;
        let base = self.smooth.target().unwrap_or(from);
        let target = (base + delta).clamp(0.0, self.metrics.max_scroll_left());

        if self.reduced_motion {
            self.smooth.cancel();
            self.set_scroll_left(target);
            return;
        }
        self.smooth.start(
            from,
            target,
            Duration::from_millis(rail::SMOOTH_SCROLL_MS),
            EasingFunction::EaseOutCubic,
            now,
        );
    }

    /// Advance a smooth scroll. Returns the position to write to the track.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        let next = self.smooth.tick(now)?;
        self.set_scroll_left(next);
        Some(self.metrics.scroll_left)
    }

    fn set_scroll_left(&mut self, scroll_left: f32) -> Edges {
        let scroll_left = if scroll_left.is_finite() {
            scroll_left
        } else {
            0.0
        };
        self.metrics.scroll_left =
            scroll_left.clamp(0.0, self.metrics.max_scroll_left());
        self.edges = self.metrics.edges();
        self.edges
    }
}
