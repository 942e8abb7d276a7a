//! Standalone reveal for a single element
//!
//! Unlike the page-wide [`ScrollEffects`](crate::engine::ScrollEffects)
//! pass, a binding carries its own variant, delay and threshold and may
//! track visibility continuously.

use std::time::Duration;

use crate::engine::{
    EffectsEnvironment, ElementRect, ObserverOptions, RevealState, Viewport,
};
use crate::infra::constants::reveal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealVariant {
    #[default]
    FadeUp,
    FadeIn,
    SlideLeft,
    SlideRight,
}

impl RevealVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            RevealVariant::FadeUp => "fade-up",
            RevealVariant::FadeIn => "fade-in",
            RevealVariant::SlideLeft => "slide-left",
            RevealVariant::SlideRight => "slide-right",
        }
    }
}

#[derive(Debug, Clone)]
pub struct RevealBinding {
    variant: RevealVariant,
    delay: Duration,
    options: ObserverOptions,
    once: bool,
    visible: bool,
    state: RevealState,
}

impl Default for RevealBinding {
    fn default() -> Self {
        Self {
            variant: RevealVariant::default(),
            delay: Duration::ZERO,
            options: ObserverOptions {
                threshold: reveal::BINDING_THRESHOLD,
                bottom_margin: 0.0,
            },
            once: true,
            visible: false,
            state: RevealState::Watching,
        }
    }
}

impl RevealBinding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_variant(mut self, variant: RevealVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.options.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// `false` hides the element again when it leaves the viewport.
    pub fn with_once(mut self, once: bool) -> Self {
        self.once = once;
        self
    }

    /// Attach to the platform. Without an observer the element is shown.
    pub fn mount(&mut self, env: EffectsEnvironment) {
        if !env.observer_available {
            self.visible = true;
            self.state = RevealState::Triggered;
        }
    }

    pub fn variant(&self) -> RevealVariant {
        self.variant
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// False once a one-shot binding has fired.
    pub fn is_observing(&self) -> bool {
        !(self.once && self.state == RevealState::Triggered)
    }

    /// Feed the current geometry. Returns the new visibility when it
    /// changed.
    pub fn observe(
        &mut self,
        viewport: Viewport,
        rect: ElementRect,
    ) -> Option<bool> {
        if !self.is_observing() {
            return None;
        }
        let intersecting = self.options.qualifies(viewport, rect);
        if intersecting {
            self.state = RevealState::Triggered;
        } else if self.once {
            return None;
        }
        (intersecting != self.visible).then(|| {
            self.visible = intersecting;
            intersecting
        })
    }
}
