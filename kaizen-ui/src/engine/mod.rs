//! Headless interaction engine
//!
//! Every type here is plain state driven by explicit inputs: the caller
//! forwards platform events and frame timestamps, and reads typed outputs
//! (indices, offsets, durations) back.

pub mod animator;
pub mod easing;
pub mod region;
pub mod reveal;
pub mod scheduler;
pub mod scroll;
pub mod sizing;

pub use animator::SnapAnimator;
pub use easing::EasingFunction;
pub use region::region_from_pointer;
pub use reveal::{
    EffectChange, EffectsEnvironment, ElementId, ElementRect, ObserverOptions,
    RevealOptions, RevealState, RevealTiming, ScrollEffects, StaggerScope,
    Viewport,
};
pub use scheduler::{
    Commit, DurationPolicy, IgnoreReason, Phase, ReadinessSet, RequestOutcome,
    SlideScheduler, SnapGuard, TrackTransform,
};
pub use scroll::{DragScrollAdapter, Edges, EventOutcome, ScrollMetrics};
pub use sizing::{PageBreakpoints, ViewportSizer};
